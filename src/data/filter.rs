use std::cmp::Ordering;
use std::ops::RangeInclusive;

use super::model::{Dataset, Indicator, Record};
use super::regions::DEFAULT_REGION;

/// Domain of the week range sliders.
pub const WEEK_BOUNDS: RangeInclusive<u32> = 1..=54;
/// Domain of the year range sliders.
pub const YEAR_BOUNDS: RangeInclusive<i32> = 1981..=2023;

// ---------------------------------------------------------------------------
// Filter state: the user's current selections
// ---------------------------------------------------------------------------

/// Current selections driving the query. Owned by the session.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub indicator: Indicator,
    /// Key into the region catalog.
    pub region_code: String,
    /// Inclusive `(low, high)` week bounds.
    pub week_range: (u32, u32),
    /// Inclusive `(low, high)` year bounds.
    pub year_range: (i32, i32),
    pub sort_ascending: bool,
    pub sort_descending: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            indicator: Indicator::Vci,
            region_code: DEFAULT_REGION.to_string(),
            week_range: (*WEEK_BOUNDS.start(), *WEEK_BOUNDS.end()),
            year_range: (*YEAR_BOUNDS.start(), *YEAR_BOUNDS.end()),
            sort_ascending: false,
            sort_descending: false,
        }
    }
}

impl FilterState {
    /// Restore every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_indicator(&mut self, indicator: Indicator) {
        self.indicator = indicator;
    }

    pub fn set_region(&mut self, code: &str) {
        self.region_code = code.to_string();
    }

    /// Set the week range, clamped to [`WEEK_BOUNDS`] with `low <= high`.
    pub fn set_week_range(&mut self, low: u32, high: u32) {
        self.week_range = clamp_range(low, high, &WEEK_BOUNDS);
    }

    /// Set the year range, clamped to [`YEAR_BOUNDS`] with `low <= high`.
    pub fn set_year_range(&mut self, low: i32, high: i32) {
        self.year_range = clamp_range(low, high, &YEAR_BOUNDS);
    }

    pub fn set_sort_ascending(&mut self, on: bool) {
        self.sort_ascending = on;
    }

    pub fn set_sort_descending(&mut self, on: bool) {
        self.sort_descending = on;
    }

    /// Resolve the two sort toggles into a single policy.
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::resolve(self.sort_ascending, self.sort_descending)
    }

    /// Whether `record` passes the region, week and year predicates.
    ///
    /// A region code that is not an integer matches nothing.
    pub fn matches(&self, record: &Record) -> bool {
        let Ok(area) = self.region_code.parse::<i64>() else {
            return false;
        };
        let (w_lo, w_hi) = self.week_range;
        let (y_lo, y_hi) = self.year_range;
        record.area == area
            && (w_lo..=w_hi).contains(&record.week)
            && (y_lo..=y_hi).contains(&record.year)
    }
}

fn clamp_range<T: Ord + Copy>(low: T, high: T, bounds: &RangeInclusive<T>) -> (T, T) {
    let low = low.clamp(*bounds.start(), *bounds.end());
    let high = high.clamp(*bounds.start(), *bounds.end());
    if low <= high {
        (low, high)
    } else {
        (high, low)
    }
}

// ---------------------------------------------------------------------------
// Sort policy
// ---------------------------------------------------------------------------

/// What to do with the filtered rows before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Keep load order.
    None,
    Ascending,
    Descending,
    /// Both toggles are on: skip sorting and warn the user.
    Conflict,
}

impl SortOrder {
    pub fn resolve(ascending: bool, descending: bool) -> Self {
        match (ascending, descending) {
            (false, false) => SortOrder::None,
            (true, false) => SortOrder::Ascending,
            (false, true) => SortOrder::Descending,
            (true, true) => SortOrder::Conflict,
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Rows of the dataset selected by a [`FilterState`], in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    /// Indices into [`Dataset::records`].
    pub indices: Vec<usize>,
    /// Both sort toggles were on; `indices` are left in load order.
    pub sort_conflict: bool,
}

impl QueryResult {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve the indices against the dataset they were computed from.
    pub fn rows<'a>(&'a self, dataset: &'a Dataset) -> impl Iterator<Item = &'a Record> + 'a {
        self.indices.iter().map(move |&i| &dataset.records[i])
    }
}

/// Filter `dataset` by `state`, then apply at most one sort on the
/// selected indicator.
///
/// The sort is stable: rows with equal indicator values keep their load
/// order in both directions. Missing (NaN) values always go last.
pub fn run_query(dataset: &Dataset, state: &FilterState) -> QueryResult {
    if state.region_code.parse::<i64>().is_err() {
        log::warn!("region code {:?} is not numeric", state.region_code);
    }

    let mut indices: Vec<usize> = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| state.matches(r))
        .map(|(i, _)| i)
        .collect();

    let key = |i: &usize| state.indicator.value(&dataset.records[*i]);
    let sort_conflict = match state.sort_order() {
        SortOrder::None => false,
        SortOrder::Ascending => {
            indices.sort_by(|a, b| compare_missing_last(key(a), key(b), false));
            false
        }
        SortOrder::Descending => {
            indices.sort_by(|a, b| compare_missing_last(key(a), key(b), true));
            false
        }
        SortOrder::Conflict => {
            log::warn!("both sort directions requested; leaving rows unsorted");
            true
        }
    };

    QueryResult {
        indices,
        sort_conflict,
    }
}

fn compare_missing_last(a: f64, b: f64, descending: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if descending => b.total_cmp(&a),
        (false, false) => a.total_cmp(&b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: i32, week: u32, area: i64, vci: f64) -> Record {
        Record {
            year,
            week,
            area,
            smn: 0.0,
            smt: 0.0,
            vci,
            tci: vci / 2.0,
            vhi: 100.0 - vci,
        }
    }

    /// Three areas, a few years, every week; values cycle so there are ties.
    fn grid() -> Dataset {
        let mut records = Vec::new();
        for area in 1..=3 {
            for year in 1999..=2002 {
                for week in 1..=54 {
                    let vci = ((week * 7 + year as u32 + area as u32) % 11) as f64 * 5.0;
                    records.push(rec(year, week, area, vci));
                }
            }
        }
        Dataset::new(records)
    }

    #[test]
    fn defaults() {
        let s = FilterState::default();
        assert_eq!(s.indicator, Indicator::Vci);
        assert_eq!(s.region_code, "1");
        assert_eq!(s.week_range, (1, 54));
        assert_eq!(s.year_range, (1981, 2023));
        assert!(!s.sort_ascending);
        assert!(!s.sort_descending);
    }

    #[test]
    fn reset_restores_defaults_from_any_state() {
        let mut s = FilterState::default();
        s.set_indicator(Indicator::Vhi);
        s.set_region("17");
        s.set_week_range(10, 20);
        s.set_year_range(2000, 2005);
        s.set_sort_ascending(true);
        s.set_sort_descending(true);
        s.reset();
        assert_eq!(s, FilterState::default());
        s.reset();
        assert_eq!(s, FilterState::default());
    }

    #[test]
    fn setters_touch_one_field() {
        let mut s = FilterState::default();
        s.set_region("5");
        assert_eq!(
            s,
            FilterState {
                region_code: "5".into(),
                ..FilterState::default()
            }
        );

        let mut s = FilterState::default();
        s.set_sort_descending(true);
        assert_eq!(
            s,
            FilterState {
                sort_descending: true,
                ..FilterState::default()
            }
        );
    }

    #[test]
    fn range_setters_clamp_and_order() {
        let mut s = FilterState::default();
        s.set_week_range(0, 60);
        assert_eq!(s.week_range, (1, 54));
        s.set_week_range(30, 12);
        assert_eq!(s.week_range, (12, 30));
        s.set_year_range(1970, 2030);
        assert_eq!(s.year_range, (1981, 2023));
        s.set_year_range(2010, 2010);
        assert_eq!(s.year_range, (2010, 2010));
    }

    #[test]
    fn sort_policy_table() {
        assert_eq!(SortOrder::resolve(false, false), SortOrder::None);
        assert_eq!(SortOrder::resolve(true, false), SortOrder::Ascending);
        assert_eq!(SortOrder::resolve(false, true), SortOrder::Descending);
        assert_eq!(SortOrder::resolve(true, true), SortOrder::Conflict);
    }

    #[test]
    fn filter_keeps_exactly_matching_rows() {
        let ds = grid();
        let mut s = FilterState::default();
        s.set_region("2");
        s.set_week_range(5, 9);
        s.set_year_range(2000, 2001);

        let result = run_query(&ds, &s);
        for (i, r) in ds.records.iter().enumerate() {
            let expected = r.area == 2
                && (5..=9).contains(&r.week)
                && (2000..=2001).contains(&r.year);
            assert_eq!(result.indices.contains(&i), expected, "row {i}: {r:?}");
        }
        assert_eq!(result.len(), 2 * 5);
        assert!(!result.sort_conflict);
    }

    #[test]
    fn unsorted_result_keeps_load_order() {
        let ds = grid();
        let s = FilterState::default();
        let result = run_query(&ds, &s);
        assert!(result.indices.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(result.len(), 4 * 54);
    }

    #[test]
    fn ascending_sort_is_non_decreasing_and_stable() {
        let ds = grid();
        let mut s = FilterState::default();
        s.set_sort_ascending(true);
        let result = run_query(&ds, &s);

        for w in result.indices.windows(2) {
            let (a, b) = (ds.records[w[0]].vci, ds.records[w[1]].vci);
            assert!(a <= b);
            if a == b {
                assert!(w[0] < w[1], "tie lost load order");
            }
        }
    }

    #[test]
    fn descending_sort_uses_selected_indicator() {
        let ds = grid();
        let mut s = FilterState::default();
        s.set_indicator(Indicator::Vhi);
        s.set_sort_descending(true);
        let result = run_query(&ds, &s);

        let values: Vec<f64> = result.rows(&ds).map(|r| r.vhi).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
        for w in result.indices.windows(2) {
            if ds.records[w[0]].vhi == ds.records[w[1]].vhi {
                assert!(w[0] < w[1]);
            }
        }
    }

    #[test]
    fn conflicting_sort_flags_leave_rows_unsorted() {
        let ds = grid();
        let mut s = FilterState::default();
        s.set_sort_ascending(true);
        s.set_sort_descending(true);
        let result = run_query(&ds, &s);

        assert!(result.sort_conflict);
        let plain = run_query(&ds, &FilterState::default());
        assert_eq!(result.indices, plain.indices);
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        let ds = Dataset::new(vec![
            rec(2000, 1, 1, 10.0),
            rec(2000, 2, 1, f64::NAN),
            rec(2000, 3, 1, 30.0),
            rec(2000, 4, 1, -f64::NAN),
        ]);
        let mut s = FilterState::default();

        s.set_sort_descending(true);
        let desc = run_query(&ds, &s);
        assert_eq!(desc.indices, vec![2, 0, 1, 3]);

        s.set_sort_descending(false);
        s.set_sort_ascending(true);
        let asc = run_query(&ds, &s);
        assert_eq!(asc.indices, vec![0, 2, 1, 3]);
    }

    #[test]
    fn non_numeric_region_matches_nothing() {
        let ds = grid();
        let mut s = FilterState::default();
        s.set_region("north");
        assert!(run_query(&ds, &s).is_empty());
    }

    #[test]
    fn worked_example() {
        let ds = Dataset::new(vec![
            rec(2000, 20, 1, 50.0),
            rec(2000, 10, 1, 30.0),
            rec(2001, 10, 2, 10.0),
        ]);
        let mut s = FilterState::default();
        s.set_year_range(2000, 2000);
        s.set_sort_ascending(true);

        let result = run_query(&ds, &s);
        let got: Vec<(u32, f64)> = result.rows(&ds).map(|r| (r.week, r.vci)).collect();
        assert_eq!(got, vec![(10, 30.0), (20, 50.0)]);
    }
}
