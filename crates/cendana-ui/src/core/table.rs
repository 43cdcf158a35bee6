//! Pure state for server-paged data tables.
//!
//! # Design
//! - The table component owns a `TableState` and drives it with
//!   [`TableState::next_query`] / [`TableState::apply_page`]; fetching and
//!   rendering stay in the wasm layer.
//! - Draw counters follow the paging protocol: a page whose `draw` does not
//!   match the last issued query is stale and dropped.

use crate::i18n::TranslationBundle;
use cendana_api_models::{TablePage, TableQuery};

/// Default rows per page.
pub const DEFAULT_PAGE_LENGTH: u64 = 10;

/// Placement of the table search box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchAlign {
    /// Flush with the table's leading edge.
    #[default]
    Left,
    /// Centered above the table.
    Center,
    /// Flush with the trailing edge.
    Right,
}

impl SearchAlign {
    /// Parse a direction word; substring matching, unknown input centers.
    #[must_use]
    pub fn parse(direction: &str) -> Self {
        if direction.contains("right") {
            Self::Right
        } else if direction.contains("left") {
            Self::Left
        } else {
            Self::Center
        }
    }

    /// Row classes positioning the search box.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Left => "row justify-content-start",
            Self::Center => "row justify-content-center",
            Self::Right => "row justify-content-end mr-2",
        }
    }
}

/// Paging, busy, and error state for one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState<T> {
    rows: Vec<T>,
    page: u64,
    page_length: u64,
    records_total: u64,
    records_filtered: u64,
    draw: u64,
    busy: bool,
    error: Option<String>,
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self::with_page_length(DEFAULT_PAGE_LENGTH)
    }
}

impl<T> TableState<T> {
    /// Empty state with the default page length.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty state with a custom page length (minimum 1).
    #[must_use]
    pub fn with_page_length(page_length: u64) -> Self {
        Self {
            rows: Vec::new(),
            page: 0,
            page_length: page_length.max(1),
            records_total: 0,
            records_filtered: 0,
            draw: 0,
            busy: false,
            error: None,
        }
    }

    /// Rows of the current page.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Last load failure, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Rows per page.
    #[must_use]
    pub const fn page_length(&self) -> u64 {
        self.page_length
    }

    /// Total rows before filtering, as last reported by the server.
    #[must_use]
    pub const fn records_total(&self) -> u64 {
        self.records_total
    }

    /// Rows remaining after filtering; drives the page count.
    #[must_use]
    pub const fn records_filtered(&self) -> u64 {
        self.records_filtered
    }

    /// Pages needed for the filtered row count; zero when the table is empty.
    #[must_use]
    pub const fn page_count(&self) -> u64 {
        self.records_filtered.div_ceil(self.page_length)
    }

    /// Move to `page`, clamped to the last available page.
    pub fn set_page(&mut self, page: u64) {
        let last = self.page_count().saturating_sub(1);
        self.page = page.min(last);
    }

    /// Issue the query for the current page and mark the table busy.
    ///
    /// Increments the draw counter so stale responses can be recognized.
    pub fn next_query(&mut self) -> TableQuery {
        self.draw += 1;
        self.busy = true;
        TableQuery {
            draw: self.draw,
            start: self.page * self.page_length,
            length: self.page_length,
        }
    }

    /// Apply a fetched page; stale draws are dropped.
    ///
    /// Returns whether the page was applied.
    pub fn apply_page(&mut self, page: TablePage<T>) -> bool {
        if page.draw != self.draw {
            return false;
        }
        self.rows = page.data;
        self.records_total = page.records_total;
        self.records_filtered = page.records_filtered;
        self.busy = false;
        self.error = None;
        true
    }

    /// Record a load failure; the table empties until the next reload.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.rows.clear();
        self.busy = false;
        self.error = Some(message.into());
    }

    /// Replace the whole data set client-side and reset paging.
    pub fn hard_reload(&mut self, rows: Vec<T>) {
        let count = rows.len() as u64;
        self.rows = rows;
        self.records_total = count;
        self.records_filtered = count;
        self.page = 0;
        self.busy = false;
        self.error = None;
    }

    /// Drop all rows and counters, keeping page length and draw counter.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.records_total = 0;
        self.records_filtered = 0;
        self.page = 0;
        self.error = None;
    }

    /// Message to render in place of rows, when there are none to show.
    #[must_use]
    pub fn status_message(&self, bundle: &TranslationBundle) -> Option<String> {
        if self.error.is_some() {
            return Some(bundle.text("table.load_failed", "Failed to load data!"));
        }
        if self.rows.is_empty() && !self.busy {
            return Some(bundle.text("table.empty", "No data"));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};

    fn page(draw: u64, filtered: u64, rows: Vec<&str>) -> TablePage<String> {
        TablePage {
            draw,
            records_total: filtered,
            records_filtered: filtered,
            data: rows.into_iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn query_windows_follow_the_page_index() {
        let mut state = TableState::<String>::new();
        let query = state.next_query();
        assert_eq!((query.draw, query.start, query.length), (1, 0, 10));
        assert!(state.is_busy());

        state.apply_page(page(1, 35, vec!["a"]));
        state.set_page(2);
        let query = state.next_query();
        assert_eq!((query.draw, query.start, query.length), (2, 20, 10));
    }

    #[test]
    fn stale_draws_are_dropped() {
        let mut state = TableState::<String>::new();
        let _ = state.next_query();
        let _ = state.next_query();
        assert!(!state.apply_page(page(1, 5, vec!["old"])));
        assert!(state.apply_page(page(2, 5, vec!["new"])));
        assert_eq!(state.rows(), ["new"]);
        assert!(!state.is_busy());
    }

    #[test]
    fn page_count_rounds_up() {
        let mut state = TableState::<String>::new();
        let _ = state.next_query();
        state.apply_page(page(1, 35, vec![]));
        assert_eq!(state.page_count(), 4);

        state.set_page(99);
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn failure_empties_the_table_and_selects_the_failure_message() {
        let bundle = TranslationBundle::new(LocaleCode::Id);
        let mut state = TableState::<String>::new();
        let _ = state.next_query();
        state.apply_page(page(1, 1, vec!["a"]));

        state.fail("500 - Internal Server Error");
        assert!(state.rows().is_empty());
        assert_eq!(state.error(), Some("500 - Internal Server Error"));
        assert_eq!(
            state.status_message(&bundle),
            Some("Gagal Memuat Data!".to_string())
        );
    }

    #[test]
    fn empty_table_selects_the_empty_message() {
        let bundle = TranslationBundle::new(LocaleCode::Id);
        let state = TableState::<String>::new();
        assert_eq!(state.status_message(&bundle), Some("Data Kosong".to_string()));

        let en = TranslationBundle::new(LocaleCode::En);
        assert_eq!(state.status_message(&en), Some("No data".to_string()));
    }

    #[test]
    fn hard_reload_resets_paging() {
        let mut state = TableState::<String>::with_page_length(2);
        let _ = state.next_query();
        state.apply_page(page(1, 10, vec!["a", "b"]));
        state.set_page(3);

        state.hard_reload(vec!["x".to_string(), "y".to_string(), "z".to_string()]);
        assert_eq!(state.page(), 0);
        assert_eq!(state.records_filtered(), 3);
        assert_eq!(state.page_count(), 2);
        assert!(state.status_message(&TranslationBundle::new(LocaleCode::En)).is_none());
    }

    #[test]
    fn search_alignment_parses_direction_words() {
        assert_eq!(SearchAlign::parse("left"), SearchAlign::Left);
        assert_eq!(SearchAlign::parse("align-right"), SearchAlign::Right);
        assert_eq!(SearchAlign::parse("middle"), SearchAlign::Center);
        assert!(SearchAlign::Right.css_class().contains("justify-content-end"));
    }
}
