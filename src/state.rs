use std::sync::Arc;

use crate::data::filter::{FilterState, QueryResult, run_query};
use crate::data::model::{Dataset, Indicator};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Alternate views of the query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    #[default]
    Table,
    Chart,
}

/// The full UI state, independent of rendering.
///
/// Every mutation of `filters` goes through a method here so that `result`
/// is always the query for the current filters.
pub struct AppState {
    /// Loaded dataset, shared read-only for the lifetime of the process.
    pub dataset: Arc<Dataset>,

    /// Current user selections.
    pub filters: FilterState,

    /// Rows passing the current filters, in display order (cached).
    pub result: QueryResult,

    /// Which view the central panel shows.
    pub tab: ViewTab,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let filters = FilterState::default();
        let result = run_query(&dataset, &filters);
        Self {
            dataset,
            filters,
            result,
            tab: ViewTab::default(),
        }
    }

    /// Recompute `result` after a filter change.
    pub fn refilter(&mut self) {
        self.result = run_query(&self.dataset, &self.filters);
        log::debug!(
            "{} of {} rows match {:?}",
            self.result.len(),
            self.dataset.len(),
            self.filters
        );
    }

    /// Restore default filters and recompute immediately.
    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.refilter();
    }

    pub fn set_indicator(&mut self, indicator: Indicator) {
        self.filters.set_indicator(indicator);
        self.refilter();
    }

    pub fn set_region(&mut self, code: &str) {
        self.filters.set_region(code);
        self.refilter();
    }

    pub fn set_week_range(&mut self, low: u32, high: u32) {
        self.filters.set_week_range(low, high);
        self.refilter();
    }

    pub fn set_year_range(&mut self, low: i32, high: i32) {
        self.filters.set_year_range(low, high);
        self.refilter();
    }

    pub fn set_sort_ascending(&mut self, on: bool) {
        self.filters.set_sort_ascending(on);
        self.refilter();
    }

    pub fn set_sort_descending(&mut self, on: bool) {
        self.filters.set_sort_descending(on);
        self.refilter();
    }
}
