//! Blocking alert dialog for failures that deserve more than a toast.

use crate::core::modal_stack::ESC_NO_CLOSE_CLASS;
use crate::core::text::sanitize;
use crate::models::AlertDialog;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AlertHostProps {
    pub alert: Option<AlertDialog>,
    pub on_dismiss: Callback<()>,
}

#[function_component(AlertHost)]
pub(crate) fn alert_host(props: &AlertHostProps) -> Html {
    let Some(alert) = &props.alert else {
        return Html::default();
    };
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    // Bodies can carry raw server output; never render them as markup.
    html! {
        <div class={classes!("modal", "show", "alert-modal", ESC_NO_CLOSE_CLASS)} role="alertdialog" aria-modal="true">
            <div class="modal-box">
                <h3 class="text-red bg-yellow">{alert.title.clone()}</h3>
                <p>{sanitize(&alert.body)}</p>
                <div class="modal-actions">
                    <button class="primary" onclick={on_close}>{"OK"}</button>
                </div>
            </div>
        </div>
    }
}
