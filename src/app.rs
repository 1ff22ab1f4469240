use std::sync::Arc;

use eframe::egui;

use crate::data::model::Dataset;
use crate::state::{AppState, ViewTab};
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct VhiExplorerApp {
    pub state: AppState,
}

impl VhiExplorerApp {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for VhiExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table / chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::results_header(ui, &mut self.state);
            match self.state.tab {
                ViewTab::Table => table::result_table(ui, &self.state),
                ViewTab::Chart => plot::indicator_plot(ui, &self.state),
            }
        });
    }
}
