//! Catalog backoffice web frontend: a Yew CSR application that lists
//! catalog categories from the backend service and hosts the creation form.

mod api;
mod components;
mod hooks;
mod models;
mod pages;
mod router;
mod state;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <router::AppRouter />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
