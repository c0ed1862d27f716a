use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    /// Rendered as a "Try again" button when present.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    if props.message.trim().is_empty() {
        return Html::default();
    }

    let retry_button = props.on_retry.as_ref().map(|on_retry| {
        let on_retry = on_retry.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_retry.emit(()));
        html! {
            <button
                type="button"
                class={classes!("btn", "btn-outline-danger", "btn-sm", "ms-3")}
                {onclick}
            >
                { "Try again" }
            </button>
        }
    });

    html! {
        <div
            class={classes!("alert", "alert-danger", "d-flex", "align-items-center", "justify-content-between")}
            role="alert"
            aria-live="assertive"
        >
            <span>{ props.message.clone() }</span>
            { retry_button }
        </div>
    }
}
