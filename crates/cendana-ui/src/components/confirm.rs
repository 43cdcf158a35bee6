//! Blocking confirmation dialog.
//!
//! Renders nothing while closed so the confirmation marker class only
//! matches a dialog that is actually on screen; the escape handler keys off
//! that selector.

use crate::core::modal_stack::CONFIRM_DIALOG_CLASS;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmDialogProps {
    pub open: bool,
    #[prop_or_default]
    pub title: Option<String>,
    #[prop_or_default]
    pub body: Option<String>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub(crate) fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    if !props.open {
        return Html::default();
    }
    let title = props
        .title
        .clone()
        .unwrap_or_else(|| bundle.text("confirm.title", "Confirmation"));
    let body = props
        .body
        .clone()
        .unwrap_or_else(|| bundle.text("confirm.body", "Are you sure?"));

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class={classes!("modal", "show", CONFIRM_DIALOG_CLASS)} role="dialog" aria-modal="true">
            <div class="modal-box">
                <h3>{title}</h3>
                <p>{body}</p>
                <div class="modal-actions">
                    <button class="primary" onclick={on_confirm}>
                        {bundle.text("confirm.yes", "Confirm")}
                    </button>
                    <button class="ghost" onclick={on_cancel}>
                        {bundle.text("confirm.no", "Cancel")}
                    </button>
                </div>
            </div>
        </div>
    }
}
