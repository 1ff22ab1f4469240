mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use app::VhiExplorerApp;
use clap::Parser;
use eframe::egui;

/// Load the dataset once. The error is reported by `main`'s return, so it
/// is not logged here.
fn load_dataset(path: &Path) -> Result<Arc<data::model::Dataset>> {
    data::loader::load_csv(path)
        .map(Arc::new)
        .with_context(|| format!("loading {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = config::Cli::parse();

    let dataset = load_dataset(&cli.data)?;
    log::info!("Loaded {} rows from {}", dataset.len(), cli.data.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "VHI Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(VhiExplorerApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
