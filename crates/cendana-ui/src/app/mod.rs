//! App shell: overlay hosts, document-level listeners, and the manage panel.

use crate::components::alert::AlertHost;
use crate::components::confirm::ConfirmDialog;
use crate::components::loading::LoadingOverlay;
use crate::components::modal_host::ModalEscapeController;
use crate::components::snackbar::Snackbar;
use crate::components::table::{ColumnDef, DataTable};
use crate::components::toast::ToastHost;
use crate::core::store::{AppStore, dismiss_toast, show_snackbar};
use crate::core::table::SearchAlign;
use crate::i18n::TranslationBundle;
use crate::models::SnackbarNotice;
use crate::services::forms::{self, FormRequest};
use gloo::events::EventListener;
use yew::prelude::*;
use yewdux::prelude::use_store;

mod preferences;

#[function_component(CendanaApp)]
pub(crate) fn cendana_app() -> Html {
    let locale = use_state(preferences::load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let (store, dispatch) = use_store::<AppStore>();
    let confirm_export = use_state(|| false);
    let user_roles = use_memo(|_| preferences::load_roles(), ());

    {
        let locale = locale.clone();
        use_effect_with_deps(
            move |locale| {
                preferences::persist_locale(**locale);
                || ()
            },
            locale.clone(),
        );
    }

    // Every form submission shows the loading overlay; the failure dispatch
    // (or a page navigation) takes it back down.
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let listener =
                    EventListener::new(&gloo::utils::document(), "submit", move |_event| {
                        dispatch.reduce_mut(|store| store.loading = true);
                    });
                move || drop(listener)
            },
            (),
        );
    }

    let on_dismiss_toast = dispatch.reduce_mut_callback_with(dismiss_toast);
    let on_dismiss_snackbar = dispatch.reduce_mut_callback(|store| store.snackbar = None);
    let on_dismiss_alert = dispatch.reduce_mut_callback(|store| store.alert = None);

    let on_export_click = {
        let confirm_export = confirm_export.clone();
        Callback::from(move |_: MouseEvent| confirm_export.set(true))
    };
    let on_export_cancel = {
        let confirm_export = confirm_export.clone();
        Callback::from(move |()| confirm_export.set(false))
    };
    let on_export_confirm = {
        let confirm_export = confirm_export.clone();
        let dispatch = dispatch.clone();
        let bundle = bundle.clone();
        Callback::from(move |()| {
            confirm_export.set(false);
            let request = FormRequest::new("/kelola/export", "POST").field("format", "xlsx");
            if let Err(err) = forms::submit(&request) {
                gloo::console::error!("export submit failed", err.to_string());
                return;
            }
            let message = bundle.text("manage.export_started", "Download started");
            dispatch.reduce_mut(|store| show_snackbar(store, SnackbarNotice::new(message)));
        })
    };

    let columns = vec![
        ColumnDef::new("nama", bundle.text("manage.col_name", "Name")),
        ColumnDef::new("nik", "NIK"),
        ColumnDef::new("kd_cabang", bundle.text("manage.col_branch", "Branch")),
    ];

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <ModalEscapeController />
            <main class="manage-panel">
                <h2>{bundle.text("manage.title", "Manage Data")}</h2>
                <button
                    class="primary"
                    data-acc-roles="admin supervisor"
                    onclick={on_export_click}
                >
                    {bundle.text("manage.export", "Download Excel")}
                </button>
                <DataTable
                    id="kelola-table"
                    endpoint="/kelola/data"
                    columns={columns}
                    search={Some(SearchAlign::Right)}
                    user_roles={(*user_roles).clone()}
                />
            </main>
            <ConfirmDialog
                open={*confirm_export}
                on_confirm={on_export_confirm}
                on_cancel={on_export_cancel}
            />
            <AlertHost alert={store.alert.clone()} on_dismiss={on_dismiss_alert} />
            <ToastHost toasts={store.toasts.clone()} on_dismiss={on_dismiss_toast} />
            <Snackbar notice={store.snackbar.clone()} on_dismiss={on_dismiss_snackbar} />
            <LoadingOverlay visible={store.loading} />
        </ContextProvider<TranslationBundle>>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CendanaApp>::with_root(root).render();
    } else {
        yew::Renderer::<CendanaApp>::new().render();
    }
}
