//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared overlay state (toasts, snackbar, alert dialog, loading) in
//!   one store to avoid ad-hoc contexts.
//! - Reducer helpers are plain functions over `&mut AppStore` so they test
//!   natively; wasm callers go through `Dispatch::reduce_mut`.

use crate::core::alerts::AlertLevel;
use crate::models::{AlertDialog, SnackbarNotice, Toast};
use yewdux::store::Store;

/// Global application store for shared UI state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Stacked toasts, oldest first.
    pub toasts: Vec<Toast>,
    /// Next toast id to allocate.
    pub next_toast_id: u64,
    /// Transient snackbar message, if any.
    pub snackbar: Option<SnackbarNotice>,
    /// Blocking alert dialog, if any.
    pub alert: Option<AlertDialog>,
    /// Whether the global loading overlay is visible.
    pub loading: bool,
}

/// Append a toast and return its id.
pub fn push_toast(store: &mut AppStore, level: AlertLevel, message: impl Into<String>) -> u64 {
    let id = store.next_toast_id;
    store.next_toast_id += 1;
    store.toasts.push(Toast {
        id,
        level,
        message: message.into(),
    });
    id
}

/// Remove a toast by id; unknown ids are a no-op.
pub fn dismiss_toast(store: &mut AppStore, id: u64) {
    store.toasts.retain(|toast| toast.id != id);
}

/// Show a snackbar, replacing any current one.
pub fn show_snackbar(store: &mut AppStore, notice: SnackbarNotice) {
    store.snackbar = Some(notice);
}

/// Raise the blocking alert dialog, replacing any current one.
pub fn show_alert(store: &mut AppStore, title: impl Into<String>, body: impl Into<String>) {
    store.alert = Some(AlertDialog {
        title: title.into(),
        body: body.into(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_ids_are_monotonic_and_dismiss_by_id() {
        let mut store = AppStore::default();
        let first = push_toast(&mut store, AlertLevel::Info, "satu");
        let second = push_toast(&mut store, AlertLevel::Error, "dua");
        assert_eq!((first, second), (0, 1));
        assert_eq!(store.toasts.len(), 2);

        dismiss_toast(&mut store, first);
        assert_eq!(store.toasts.len(), 1);
        assert_eq!(store.toasts[0].id, second);

        dismiss_toast(&mut store, 99);
        assert_eq!(store.toasts.len(), 1);
    }

    #[test]
    fn snackbar_and_alert_replace_current_entries() {
        let mut store = AppStore::default();
        show_snackbar(&mut store, SnackbarNotice::new("a"));
        show_snackbar(&mut store, SnackbarNotice::new("b"));
        assert_eq!(store.snackbar.as_ref().unwrap().message, "b");

        show_alert(&mut store, "judul", "isi");
        assert_eq!(store.alert.as_ref().unwrap().title, "judul");
    }
}
