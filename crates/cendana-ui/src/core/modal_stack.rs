//! LIFO escape-key bookkeeping for stacked modal dialogs.
//!
//! # Design
//! - The tracker owns an ordered list of open modal ids (oldest first) and
//!   decides which modal an Escape press closes; stacked modals close
//!   newest-first, one per press.
//! - DOM discovery sits behind the [`ModalSurface`] trait so the logic runs
//!   (and is tested) without a document.
//! - The tracker never hides anything itself: it returns [`CloseCommand`]s
//!   and veto decisions for the host component to apply.
//!
//! # Invariants
//! - Each id appears at most once in the stack.
//! - Only ids of currently open, non-excluded modals are tracked.
//! - A hide for the bottom entry while others remain stacked is vetoed.

/// Marker class for modals that opt out of Escape handling entirely.
pub const ESC_NO_CLOSE_CLASS: &str = "esc-no-close";

/// Marker class carried by third-party confirmation dialogs.
pub const CONFIRM_DIALOG_CLASS: &str = "bootbox";

/// Identity and class membership of one displayed modal element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalHandle {
    id: String,
    classes: Vec<String>,
}

impl ModalHandle {
    /// Build a handle from an element id and its class list.
    #[must_use]
    pub fn new<I, S>(id: impl Into<String>, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Element id; may be empty for anonymous modals, which are never tracked.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this modal is ignored by the tracker and the fallback sweep.
    #[must_use]
    pub fn is_excluded(&self) -> bool {
        self.classes
            .iter()
            .any(|class| class == ESC_NO_CLOSE_CLASS || class == CONFIRM_DIALOG_CLASS)
    }
}

/// Instruction for the host to hide the modal with this id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CloseCommand {
    /// Target modal id.
    pub id: String,
}

/// Outcome of a hide notification, reported back to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The entry was removed from the stack; let the close proceed.
    Removed,
    /// The host must cancel the in-flight close action.
    Vetoed,
    /// The modal was excluded or not tracked; the stack is untouched.
    NotTracked,
}

/// Capability the tracker uses to inspect currently displayed modals.
pub trait ModalSurface {
    /// Whether a third-party confirmation dialog is currently displayed.
    fn confirmation_open(&self) -> bool;

    /// Every modal currently displayed, tracked by the stack or not.
    fn open_modals(&self) -> Vec<ModalHandle>;
}

/// Tracks the nesting order of open modals and routes Escape presses.
///
/// Constructed once by the page controller at startup and fed the
/// show/hide/keydown events the UI layer emits.
#[derive(Debug, Default)]
pub struct ModalStackTracker {
    entries: Vec<String>,
}

impl ModalStackTracker {
    /// Create a tracker with an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracked ids, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Record that a modal became visible.
    ///
    /// Excluded modals, anonymous modals, and ids already on the stack are
    /// all dropped without touching the entries.
    pub fn on_shown(&mut self, modal: &ModalHandle) {
        if modal.is_excluded() || modal.id().is_empty() {
            return;
        }
        if self.entries.iter().any(|entry| entry == modal.id()) {
            return;
        }
        self.entries.push(modal.id().to_owned());
    }

    /// Record that a modal is about to close.
    ///
    /// Returns [`CloseOutcome::Vetoed`] when the host must cancel the close
    /// instead of letting it finish.
    pub fn on_hiding(&mut self, modal: &ModalHandle) -> CloseOutcome {
        if modal.is_excluded() {
            return CloseOutcome::NotTracked;
        }
        match self.entries.iter().position(|entry| entry == modal.id()) {
            // Escape pressed right after a second modal opens can deliver the
            // hide for the bottom entry instead of the top; cancel that close.
            Some(0) if self.entries.len() > 1 => CloseOutcome::Vetoed,
            Some(index) => {
                self.entries.remove(index);
                CloseOutcome::Removed
            }
            None => CloseOutcome::NotTracked,
        }
    }

    /// Handle an Escape press, returning the closes to perform in order.
    ///
    /// While a confirmation dialog is displayed nothing closes. With an empty
    /// stack, every open non-excluded modal the surface discovers is closed;
    /// modals opened outside the tracked show event still close this way.
    pub fn on_escape(&mut self, surface: &impl ModalSurface) -> Vec<CloseCommand> {
        if surface.confirmation_open() {
            return Vec::new();
        }

        let mut commands = Vec::new();
        if self.entries.is_empty() {
            for modal in surface.open_modals() {
                if modal.is_excluded() || modal.id().is_empty() {
                    continue;
                }
                commands.push(CloseCommand {
                    id: modal.id().to_owned(),
                });
            }
        }

        // The pop also runs after the fallback sweep; on an empty stack it
        // yields nothing and no command is emitted.
        if let Some(id) = self.entries.pop() {
            commands.push(CloseCommand { id });
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeSurface {
        confirmation: bool,
        open: Vec<ModalHandle>,
    }

    impl FakeSurface {
        fn empty() -> Self {
            Self {
                confirmation: false,
                open: Vec::new(),
            }
        }
    }

    impl ModalSurface for FakeSurface {
        fn confirmation_open(&self) -> bool {
            self.confirmation
        }

        fn open_modals(&self) -> Vec<ModalHandle> {
            self.open.clone()
        }
    }

    fn plain(id: &str) -> ModalHandle {
        ModalHandle::new(id, ["modal", "show"])
    }

    fn excluded(id: &str) -> ModalHandle {
        ModalHandle::new(id, ["modal", "show", ESC_NO_CLOSE_CLASS])
    }

    #[test]
    fn opens_stack_in_order_and_escape_pops_lifo() {
        let mut tracker = ModalStackTracker::new();
        for id in ["a", "b", "c"] {
            tracker.on_shown(&plain(id));
        }
        assert_eq!(tracker.entries(), ["a", "b", "c"]);

        let surface = FakeSurface::empty();
        for expected in ["c", "b", "a"] {
            let commands = tracker.on_escape(&surface);
            assert_eq!(
                commands,
                vec![CloseCommand {
                    id: expected.to_string()
                }]
            );
        }
        assert!(tracker.entries().is_empty());
    }

    #[test]
    fn excluded_modal_never_enters_the_stack() {
        let mut tracker = ModalStackTracker::new();
        tracker.on_shown(&excluded("a"));
        tracker.on_shown(&ModalHandle::new("b", ["modal", CONFIRM_DIALOG_CLASS]));
        assert!(tracker.entries().is_empty());
    }

    #[test]
    fn excluded_close_leaves_the_stack_alone() {
        let mut tracker = ModalStackTracker::new();
        tracker.on_shown(&plain("a"));
        assert_eq!(tracker.on_hiding(&excluded("a")), CloseOutcome::NotTracked);
        assert_eq!(tracker.entries(), ["a"]);
    }

    #[test]
    fn closing_the_bottom_of_a_stack_is_vetoed() {
        let mut tracker = ModalStackTracker::new();
        tracker.on_shown(&plain("a"));
        tracker.on_shown(&plain("b"));
        assert_eq!(tracker.on_hiding(&plain("a")), CloseOutcome::Vetoed);
        assert_eq!(tracker.entries(), ["a", "b"]);
    }

    #[test]
    fn closing_the_only_entry_is_not_vetoed() {
        let mut tracker = ModalStackTracker::new();
        tracker.on_shown(&plain("a"));
        assert_eq!(tracker.on_hiding(&plain("a")), CloseOutcome::Removed);
        assert!(tracker.entries().is_empty());
    }

    #[test]
    fn closing_a_middle_entry_removes_just_that_entry() {
        let mut tracker = ModalStackTracker::new();
        for id in ["a", "b", "c"] {
            tracker.on_shown(&plain(id));
        }
        assert_eq!(tracker.on_hiding(&plain("b")), CloseOutcome::Removed);
        assert_eq!(tracker.entries(), ["a", "c"]);
    }

    #[test]
    fn untracked_close_is_a_defined_no_op() {
        let mut tracker = ModalStackTracker::new();
        tracker.on_shown(&plain("a"));
        assert_eq!(tracker.on_hiding(&plain("zz")), CloseOutcome::NotTracked);
        assert_eq!(tracker.entries(), ["a"]);
    }

    #[test]
    fn empty_stack_escape_sweeps_untracked_modals() {
        let mut tracker = ModalStackTracker::new();
        let surface = FakeSurface {
            confirmation: false,
            open: vec![plain("x"), excluded("y"), ModalHandle::new("", ["modal"])],
        };
        let commands = tracker.on_escape(&surface);
        assert_eq!(commands, vec![CloseCommand { id: "x".to_string() }]);
        assert!(tracker.entries().is_empty());
    }

    #[test]
    fn confirmation_dialog_suppresses_escape_entirely() {
        let mut tracker = ModalStackTracker::new();
        tracker.on_shown(&plain("a"));
        let surface = FakeSurface {
            confirmation: true,
            open: vec![plain("a")],
        };
        assert!(tracker.on_escape(&surface).is_empty());
        assert_eq!(tracker.entries(), ["a"]);
    }

    #[test]
    fn nested_open_close_scenario_matches_user_flow() {
        let mut tracker = ModalStackTracker::new();
        let surface = FakeSurface::empty();

        tracker.on_shown(&plain("m1"));
        tracker.on_shown(&plain("m2"));

        let commands = tracker.on_escape(&surface);
        assert_eq!(commands, vec![CloseCommand { id: "m2".to_string() }]);
        assert_eq!(tracker.entries(), ["m1"]);
        // The UI layer echoes the hide for the popped id; already gone.
        assert_eq!(tracker.on_hiding(&plain("m2")), CloseOutcome::NotTracked);

        let commands = tracker.on_escape(&surface);
        assert_eq!(commands, vec![CloseCommand { id: "m1".to_string() }]);
        assert!(tracker.entries().is_empty());
    }

    #[test]
    fn duplicate_show_does_not_double_insert() {
        let mut tracker = ModalStackTracker::new();
        tracker.on_shown(&plain("a"));
        tracker.on_shown(&plain("a"));
        assert_eq!(tracker.entries(), ["a"]);
    }

    #[test]
    fn anonymous_modal_is_never_tracked() {
        let mut tracker = ModalStackTracker::new();
        tracker.on_shown(&ModalHandle::new("", ["modal", "show"]));
        assert!(tracker.entries().is_empty());
    }
}
