use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::Record;
use crate::state::AppState;

/// Columns shown in the table tab, in display order.
pub const COLUMNS: [&str; 7] = ["Year", "Week", "SMN", "SMT", "VCI", "TCI", "VHI"];

/// Cell texts for one record, aligned with [`COLUMNS`].
pub fn row_cells(r: &Record) -> [String; 7] {
    [
        r.year.to_string(),
        r.week.to_string(),
        format!("{:.3}", r.smn),
        format!("{:.2}", r.smt),
        format!("{:.2}", r.vci),
        format!("{:.2}", r.tci),
        format!("{:.2}", r.vhi),
    ]
}

/// Render the query result as a table, in query order.
pub fn result_table(ui: &mut Ui, state: &AppState) {
    let dataset = &state.dataset;
    let indices = &state.result.indices;

    ui.label(format!("{} rows", indices.len()));

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .auto_shrink([false, false])
        .columns(Column::auto().at_least(60.0), COLUMNS.len())
        .header(20.0, |mut header| {
            for name in COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let record = &dataset.records[indices[row.index()]];
                for cell in row_cells(record) {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
