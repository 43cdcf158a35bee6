//! Shared UI models.

use crate::core::alerts::AlertLevel;

/// One entry in the stacked toast host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id used for dismissal.
    pub id: u64,
    /// Severity driving icon and styling.
    pub level: AlertLevel,
    /// Message body, already localized.
    pub message: String,
}

/// Content of the blocking alert dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertDialog {
    /// Dialog title.
    pub title: String,
    /// Dialog body; rendered as sanitized text.
    pub body: String,
}

/// Transient snackbar message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnackbarNotice {
    /// Message body.
    pub message: String,
    /// Seconds before the snackbar hides itself.
    pub duration_secs: u32,
}

impl SnackbarNotice {
    /// Notice with the default two-second duration.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration_secs: 2,
        }
    }
}
