use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <nav class={classes!("navbar", "navbar-expand", "navbar-dark", "bg-dark", "px-3")}>
            <Link<Route> to={Route::Categories} classes={classes!("navbar-brand")}>
                { "Catalog Backoffice" }
            </Link<Route>>
            <div class={classes!("navbar-nav")}>
                <Link<Route> to={Route::Categories} classes={classes!("nav-link")}>
                    { "Categories" }
                </Link<Route>>
            </div>
        </nav>
    }
}
