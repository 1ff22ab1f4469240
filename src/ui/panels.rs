use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::data::filter::{WEEK_BOUNDS, YEAR_BOUNDS};
use crate::data::model::Indicator;
use crate::data::regions;
use crate::state::{AppState, ViewTab};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // ---- Indicator ----
    ui.strong("Indicator");
    let current = state.filters.indicator;
    egui::ComboBox::from_id_salt("indicator")
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            for ind in Indicator::ALL {
                if ui.selectable_label(current == ind, ind.label()).clicked() {
                    state.set_indicator(ind);
                }
            }
        });
    ui.add_space(6.0);

    // ---- Region ----
    ui.strong("Region");
    let current_region = state.filters.region_code.clone();
    egui::ComboBox::from_id_salt("region")
        .selected_text(regions::label(&current_region))
        .height(400.0)
        .show_ui(ui, |ui: &mut Ui| {
            for code in regions::codes() {
                if ui
                    .selectable_label(current_region == code, regions::label(code))
                    .clicked()
                {
                    state.set_region(code);
                }
            }
        });
    ui.separator();

    // ---- Week range ----
    ui.strong("Weeks");
    let (mut lo, mut hi) = state.filters.week_range;
    let lo_changed = ui.add(Slider::new(&mut lo, WEEK_BOUNDS).text("from")).changed();
    let hi_changed = ui.add(Slider::new(&mut hi, WEEK_BOUNDS).text("to")).changed();
    if lo_changed || hi_changed {
        // Handles push each other instead of crossing.
        if lo_changed {
            hi = hi.max(lo);
        } else {
            lo = lo.min(hi);
        }
        state.set_week_range(lo, hi);
    }
    ui.add_space(6.0);

    // ---- Year range ----
    ui.strong("Years");
    let (mut lo, mut hi) = state.filters.year_range;
    let lo_changed = ui.add(Slider::new(&mut lo, YEAR_BOUNDS).text("from")).changed();
    let hi_changed = ui.add(Slider::new(&mut hi, YEAR_BOUNDS).text("to")).changed();
    if lo_changed || hi_changed {
        if lo_changed {
            hi = hi.max(lo);
        } else {
            lo = lo.min(hi);
        }
        state.set_year_range(lo, hi);
    }
    ui.separator();

    // ---- Sorting ----
    let mut asc = state.filters.sort_ascending;
    if ui.checkbox(&mut asc, "Sort ascending").changed() {
        state.set_sort_ascending(asc);
    }
    let mut desc = state.filters.sort_descending;
    if ui.checkbox(&mut desc, "Sort descending").changed() {
        state.set_sort_descending(desc);
    }
    ui.separator();

    if ui.button("Reset filters").clicked() {
        log::info!("filters reset to defaults");
        state.reset_filters();
        ui.ctx().request_repaint();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the dataset summary bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} rows loaded, {} matching",
            state.dataset.len(),
            state.result.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Results header: warnings and view tabs
// ---------------------------------------------------------------------------

/// Render the results heading, the sort warning and the tab strip.
pub fn results_header(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Results");

    if state.result.sort_conflict {
        ui.label(RichText::new("⚠ Choose only one sort type.").color(Color32::YELLOW));
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.selectable_value(&mut state.tab, ViewTab::Table, "Table");
        ui.selectable_value(&mut state.tab, ViewTab::Chart, "Chart");
    });
    ui.separator();
}
