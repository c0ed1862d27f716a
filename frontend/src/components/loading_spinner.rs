use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Medium => 32,
            SpinnerSize::Large => 48,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    /// Text rendered next to the spinner for screen readers and as a
    /// visible placeholder.
    #[prop_or(AttrValue::Static("Loading..."))]
    pub label: AttrValue,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let dimension = props.size.dimension();
    let spinner_style = format!("width:{}px;height:{}px;", dimension, dimension);

    html! {
        <div
            class={classes!("d-flex", "align-items-center", "justify-content-center", "gap-2", "py-5")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div class={classes!("spinner-border", "text-primary")} style={spinner_style} />
            <span class={classes!("loading-label", "text-muted")}>{ props.label.clone() }</span>
        </div>
    }
}
