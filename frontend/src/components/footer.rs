use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class={classes!("border-top", "py-3", "mt-5", "text-center", "text-muted")}>
            <small>{ "Catalog Backoffice" }</small>
        </footer>
    }
}
