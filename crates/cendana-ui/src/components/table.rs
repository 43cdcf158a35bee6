//! Server-paged data table wired into the shared failure dispatch.

use crate::core::dom;
use crate::core::store::AppStore;
use crate::core::table::{SearchAlign, TableState};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::services::errors::{self, FailedResponse};
use cendana_api_models::{TablePage, TableQuery};
use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

/// One rendered column: row object key plus header label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ColumnDef {
    pub key: String,
    pub label: String,
}

impl ColumnDef {
    pub(crate) fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct DataTableProps {
    /// DOM id of the table; its scroll body gets `{id}-scroll`.
    pub id: String,
    /// Endpoint answering [`TableQuery`] parameters with a [`TablePage`].
    pub endpoint: String,
    pub columns: Vec<ColumnDef>,
    /// Client-side filter box placement; `None` hides the box.
    #[prop_or_default]
    pub search: Option<SearchAlign>,
    /// Roles held by the signed-in user, for pruning gated controls.
    #[prop_or_default]
    pub user_roles: Vec<String>,
}

#[function_component(DataTable)]
pub(crate) fn data_table(props: &DataTableProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let state = use_state(TableState::<Value>::new);
    let filter = use_state(String::new);
    let reload = use_state(|| 0u32);
    let last_row_count = use_mut_ref(|| 0usize);

    {
        let state = state.clone();
        let bundle = bundle.clone();
        use_effect_with_deps(
            move |(endpoint, _): &(String, u32)| {
                let endpoint = endpoint.clone();
                let mut next = (*state).clone();
                let query = next.next_query();
                state.set(next.clone());
                spawn_local(async move {
                    match fetch_page(&endpoint, query).await {
                        Ok(page) => {
                            if next.apply_page(page) {
                                state.set(next);
                            }
                        }
                        Err(failure) => {
                            let status_line = failure.status.map_or_else(
                                || failure.status_text.clone(),
                                |status| format!("{status} - {}", failure.status_text),
                            );
                            next.fail(status_line);
                            state.set(next);
                            errors::execute(
                                &Dispatch::<AppStore>::new(),
                                errors::classify(&failure, &bundle),
                            );
                        }
                    }
                });
                || ()
            },
            (props.endpoint.clone(), *reload),
        );
    }

    // Re-apply role gating after every draw, and keep the view pinned to the
    // end when rows were appended.
    {
        let user_roles = props.user_roles.clone();
        let scroll_id = format!("{}-scroll", props.id);
        let row_count = state.rows().len();
        use_effect_with_deps(
            move |count: &usize| {
                dom::prune_unauthorized(&user_roles);
                let grew = *count > *last_row_count.borrow();
                *last_row_count.borrow_mut() = *count;
                if grew {
                    dom::scroll_to_end(&scroll_id);
                }
                || ()
            },
            row_count,
        );
    }

    let on_prev = page_callback(&state, &reload, -1);
    let on_next = page_callback(&state, &reload, 1);
    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                filter.set(input.value());
            }
        })
    };

    let needle = filter.to_lowercase();
    let rows: Vec<&Value> = state
        .rows()
        .iter()
        .filter(|row| {
            needle.is_empty()
                || props
                    .columns
                    .iter()
                    .any(|column| cell_text(row, &column.key).to_lowercase().contains(&needle))
        })
        .collect();

    let status = if state.is_busy() {
        Some(bundle.text("table.processing", "Loading…"))
    } else {
        state.status_message(&bundle)
    };

    let page = state.page();
    let page_count = state.page_count();

    html! {
        <div class="data-table" id={format!("{}-wrapper", props.id)}>
            if let Some(align) = props.search {
                <div class={align.css_class()}>
                    <input
                        class="table-filter"
                        type="search"
                        value={(*filter).clone()}
                        oninput={on_filter}
                    />
                </div>
            }
            <div class="table-scroll" id={format!("{}-scroll", props.id)}>
                <table id={props.id.clone()}>
                    <thead>
                        <tr>
                            {for props.columns.iter().map(|column| html! { <th>{column.label.clone()}</th> })}
                        </tr>
                    </thead>
                    <tbody>
                        {for rows.iter().map(|row| render_row(row, &props.columns))}
                    </tbody>
                </table>
                if let Some(message) = status {
                    <div class="table-status">
                        <p class="m-0">{message}</p>
                    </div>
                }
            </div>
            <div class="table-pager">
                <button class="ghost" disabled={page == 0} onclick={on_prev}>{"‹"}</button>
                <span>{format!("{} / {}", page + 1, page_count.max(1))}</span>
                <button class="ghost" disabled={page + 1 >= page_count} onclick={on_next}>{"›"}</button>
            </div>
        </div>
    }
}

fn render_row(row: &Value, columns: &[ColumnDef]) -> Html {
    html! {
        <tr>
            {for columns.iter().map(|column| html! { <td>{cell_text(row, &column.key)}</td> })}
        </tr>
    }
}

fn cell_text(row: &Value, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn page_callback(
    state: &UseStateHandle<TableState<Value>>,
    reload: &UseStateHandle<u32>,
    step: i64,
) -> Callback<MouseEvent> {
    let state = state.clone();
    let reload = reload.clone();
    Callback::from(move |_| {
        let mut next = (*state).clone();
        let target = next.page().saturating_add_signed(step);
        next.set_page(target);
        state.set(next);
        reload.set(*reload + 1);
    })
}

async fn fetch_page(endpoint: &str, query: TableQuery) -> Result<TablePage<Value>, FailedResponse> {
    let query_string = query
        .pairs()
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    let url = format!("{endpoint}{separator}{query_string}");

    let response = Request::get(&url).send().await.map_err(|err| FailedResponse {
        status: None,
        status_text: err.to_string(),
        body: String::new(),
    })?;
    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    if !(200..300).contains(&status) {
        return Err(FailedResponse {
            status: Some(status),
            status_text,
            body,
        });
    }
    serde_json::from_str(&body).map_err(|err| FailedResponse {
        status: Some(status),
        status_text: err.to_string(),
        body,
    })
}
