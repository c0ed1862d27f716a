use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, header::Header},
    pages,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/catalog/categories")]
    Categories,

    #[at("/catalog/create-category")]
    CreateCategory,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Categories} /> },
        Route::Categories => html! { <pages::categories::CategoriesPage /> },
        Route::CreateCategory => html! { <pages::create_category::CreateCategoryPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class={classes!("d-flex", "flex-column", "min-vh-100")}>
                <Header />
                <div class={classes!("flex-grow-1")}>
                    <Switch<Route> render={switch} />
                </div>
                <Footer />
            </div>
        </BrowserRouter>
    }
}
