use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LoadingOverlayProps {
    pub visible: bool,
}

/// Full-page overlay shown while a form submission or fetch is in flight.
#[function_component(LoadingOverlay)]
pub(crate) fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    if !props.visible {
        return Html::default();
    }
    html! {
        <div class="loading-overlay" aria-busy="true">
            <div class="spinner"></div>
        </div>
    }
}
