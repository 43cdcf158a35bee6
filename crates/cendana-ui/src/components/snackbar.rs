use crate::models::SnackbarNotice;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SnackbarProps {
    pub notice: Option<SnackbarNotice>,
    pub on_dismiss: Callback<()>,
}

/// Single transient message pinned to the bottom of the page.
#[function_component(Snackbar)]
pub(crate) fn snackbar(props: &SnackbarProps) -> Html {
    {
        let notice = props.notice.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |notice: &Option<SnackbarNotice>| {
                let handle = notice.as_ref().map(|notice| {
                    Timeout::new(notice.duration_secs * 1_000, move || on_dismiss.emit(()))
                });
                move || drop(handle)
            },
            notice,
        );
    }

    match &props.notice {
        Some(notice) => html! {
            <div id="snackbar" class="show" role="status">{notice.message.clone()}</div>
        },
        None => html! { <div id="snackbar"></div> },
    }
}
