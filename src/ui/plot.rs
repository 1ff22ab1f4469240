use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

use crate::color::YearColors;
use crate::data::filter::{FilterState, QueryResult};
use crate::data::model::Dataset;
use crate::data::regions;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Series grouping
// ---------------------------------------------------------------------------

/// One plotted line: the selected indicator of a single year, by week.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSeries {
    pub year: i32,
    /// `[week, value]` pairs ordered by week.
    pub points: Vec<[f64; 2]>,
}

/// Split the query result into one series per year of the selected range.
///
/// Every year in the range gets a series, even one without rows. Points are
/// ordered by week so the table's sort order never changes the drawn line.
pub fn year_series(dataset: &Dataset, result: &QueryResult, filters: &FilterState) -> Vec<YearSeries> {
    let (first, last) = filters.year_range;
    (first..=last)
        .map(|year| {
            let mut rows: Vec<_> = result.rows(dataset).filter(|r| r.year == year).collect();
            rows.sort_by_key(|r| r.week);
            let points = rows
                .into_iter()
                .map(|r| [f64::from(r.week), filters.indicator.value(r)])
                .collect();
            YearSeries { year, points }
        })
        .collect()
}

/// Caption naming what the legend entries are.
pub fn legend_caption(filters: &FilterState) -> String {
    let (y0, y1) = filters.year_range;
    format!("Legend: years {y0}-{y1}")
}

/// Heading shown above the chart.
pub fn chart_title(filters: &FilterState) -> String {
    let (y0, y1) = filters.year_range;
    let (w0, w1) = filters.week_range;
    format!(
        "{} for {} ({y0}-{y1}, weeks {w0}-{w1})",
        filters.indicator,
        regions::label(&filters.region_code)
    )
}

// ---------------------------------------------------------------------------
// Chart tab
// ---------------------------------------------------------------------------

/// Render the per-year line chart of the current query result.
pub fn indicator_plot(ui: &mut Ui, state: &AppState) {
    if state.result.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(
                RichText::new("No data for the selected parameters.")
                    .color(Color32::YELLOW)
                    .heading(),
            );
        });
        return;
    }

    let filters = &state.filters;
    let series = year_series(&state.dataset, &state.result, filters);
    let colors = YearColors::new(filters.year_range);

    ui.heading(chart_title(filters));
    ui.weak(legend_caption(filters));

    // egui_plot's legend has no title of its own.
    Plot::new("indicator_plot")
        .legend(
            Legend::default()
                .position(Corner::RightTop)
                .follow_insertion_order(true),
        )
        .x_axis_label("Week")
        .y_axis_label(filters.indicator.label())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for s in &series {
                let points: PlotPoints = s.points.iter().copied().collect();
                let line = Line::new(points)
                    .name(s.year.to_string())
                    .color(colors.color_for(s.year))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
