//! Dispatch for failed XHR-style requests.
//!
//! # Design
//! - [`classify`] is pure: a failure snapshot plus a translation bundle in,
//!   one [`FailureAction`] out. The wasm layer executes the action (toasts,
//!   alert modal, form post) and always hides the loading overlay first.
//! - Bodies that parse as the shared [`ApiFailure`] contract dispatch on the
//!   variant; everything else is shown raw under a status-line title.

use crate::core::alerts::AlertLevel;
use crate::i18n::TranslationBundle;
use crate::services::forms::FormRequest;
use cendana_api_models::ApiFailure;

/// Snapshot of a completed request that did not succeed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedResponse {
    /// HTTP status code; `None` when the request never reached a server
    /// (connection refused, VPN down, expired session killing the socket).
    pub status: Option<u16>,
    /// Status text reported by the transport.
    pub status_text: String,
    /// Raw response body.
    pub body: String,
}

/// What the UI does with a failure.
#[derive(Clone, Debug, PartialEq)]
pub enum FailureAction {
    /// The backend is unreachable; show the connection-lost alert modal.
    ConnectionLost {
        /// Localized modal title.
        title: String,
        /// Localized modal body.
        body: String,
    },
    /// Single toast at the given level.
    Alert {
        /// Toast severity.
        level: AlertLevel,
        /// Toast message.
        message: String,
    },
    /// One error toast per validation issue, stacked in order.
    ValidationToasts(Vec<String>),
    /// Server-directed navigation via form post.
    Redirect(FormRequest),
    /// Unstructured body; show it raw under a status-line title.
    RawAlert {
        /// `"{status} - {status_text}"`.
        title: String,
        /// Raw response body.
        body: String,
    },
}

/// Decide how a failed request is surfaced to the user.
#[must_use]
pub fn classify(response: &FailedResponse, bundle: &TranslationBundle) -> FailureAction {
    let Some(status) = response.status else {
        return FailureAction::ConnectionLost {
            title: bundle.text("error.connection_lost_title", "VPN / app is down!"),
            body: bundle.text(
                "error.connection_lost_body",
                "Check the VPN or whether the app is running.",
            ),
        };
    };

    match serde_json::from_str::<ApiFailure>(&response.body) {
        Ok(ApiFailure::AjaxNormalError(message)) => FailureAction::Alert {
            level: AlertLevel::Error,
            message,
        },
        Ok(ApiFailure::ValidationError(issues)) => FailureAction::ValidationToasts(
            issues
                .iter()
                .map(cendana_api_models::ValidationIssue::summary)
                .collect(),
        ),
        Ok(ApiFailure::AjaxRedirect(spec)) => {
            FailureAction::Redirect(FormRequest::from_redirect(&spec))
        }
        Err(_) => FailureAction::RawAlert {
            title: format!("{status} - {}", response.status_text),
            body: response.body.clone(),
        },
    }
}

/// Apply a classified failure: hide the loading overlay, then surface the
/// action through the store (or navigate, for redirects).
#[cfg(target_arch = "wasm32")]
pub(crate) fn execute(
    dispatch: &yewdux::prelude::Dispatch<crate::core::store::AppStore>,
    action: FailureAction,
) {
    use crate::core::store::{push_toast, show_alert};
    use crate::services::forms;

    dispatch.reduce_mut(|store| store.loading = false);
    match action {
        FailureAction::ConnectionLost { title, body } | FailureAction::RawAlert { title, body } => {
            dispatch.reduce_mut(|store| show_alert(store, title, body));
        }
        FailureAction::Alert { level, message } => {
            dispatch.reduce_mut(|store| {
                let _ = push_toast(store, level, message);
            });
        }
        FailureAction::ValidationToasts(messages) => {
            dispatch.reduce_mut(|store| {
                for message in messages {
                    let _ = push_toast(store, AlertLevel::Error, message);
                }
            });
        }
        FailureAction::Redirect(request) => {
            if let Err(err) = forms::submit(&request) {
                gloo::console::error!("redirect submit failed", err.to_string());
            }
        }
    }
}
