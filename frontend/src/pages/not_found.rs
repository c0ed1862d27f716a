use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("container", "text-center", "py-5")}>
            <h2>{ "Page not found" }</h2>
            <p class={classes!("text-muted")}>
                { "The page you were looking for does not exist." }
            </p>
            <Link<Route> to={Route::Categories} classes={classes!("btn", "btn-primary")}>
                { "Back to categories" }
            </Link<Route>>
        </main>
    }
}
