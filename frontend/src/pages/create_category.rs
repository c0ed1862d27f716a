use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::{use_navigator, Link};

use crate::{
    api,
    components::error_banner::ErrorBanner,
    models::CategoryPayload,
    router::Route,
};

#[function_component(CreateCategoryPage)]
pub fn create_category_page() -> Html {
    let name = use_state(String::new);
    let description = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator();

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_description_input = {
        let description = description.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlTextAreaElement>() {
                description.set(input.value());
            }
        })
    };

    let on_submit = {
        let name = name.clone();
        let description = description.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            let trimmed = name.trim().to_string();
            if trimmed.is_empty() {
                error.set(Some("Category name is required".to_string()));
                return;
            }

            let payload = CategoryPayload {
                name: trimmed,
                description: description.trim().to_string(),
            };

            submitting.set(true);
            error.set(None);

            let submitting = submitting.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::create_category(&payload).await {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Categories);
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to create category: {}", e).into(),
                        );
                        error.set(Some(e));
                        submitting.set(false);
                    },
                }
            });
        })
    };

    html! {
        <main class={classes!("container", "create-category-page")}>
            <div class={classes!("row", "mt-5")}>
                <div class={classes!("col-md-8")}>
                    <h2>{ "Create Category" }</h2>
                </div>
            </div>

            {
                if let Some(message) = (*error).clone() {
                    html! { <ErrorBanner {message} /> }
                } else {
                    Html::default()
                }
            }

            <form onsubmit={on_submit} class={classes!("col-md-6")}>
                <div class={classes!("mb-3")}>
                    <label class={classes!("form-label")} for="category-name">{ "Name" }</label>
                    <input
                        id="category-name"
                        type="text"
                        class={classes!("form-control")}
                        value={(*name).clone()}
                        oninput={on_name_input}
                    />
                </div>
                <div class={classes!("mb-3")}>
                    <label class={classes!("form-label")} for="category-description">
                        { "Description" }
                    </label>
                    <textarea
                        id="category-description"
                        class={classes!("form-control")}
                        rows="3"
                        value={(*description).clone()}
                        oninput={on_description_input}
                    />
                </div>
                <button
                    type="submit"
                    class={classes!("btn", "btn-primary", "me-2")}
                    disabled={*submitting}
                >
                    { if *submitting { "Saving..." } else { "Save" } }
                </button>
                <Link<Route> to={Route::Categories} classes={classes!("btn", "btn-outline-secondary")}>
                    { "Cancel" }
                </Link<Route>>
            </form>
        </main>
    }
}
