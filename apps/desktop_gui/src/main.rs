mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use client_core::{LayoutConfig, WidgetRegistry};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::{commands::BackendCommand, runtime};
use crate::config::{load_settings, Args};
use crate::controller::events::UiEvent;
use crate::ui::ElevatorViewApp;

const WINDOW_TITLE: &str = "Elevator";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let config = load_settings(&args)?;
    let layout = LayoutConfig::new(config.width, config.height, config.floor_count);
    let registry = WidgetRegistry::build(&layout).context("failed to lay out widgets")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    let snapshots = runtime::launch(&config, cmd_rx, ui_tx);

    tracing::info!(
        backend = %config.backend_url,
        floors = config.floor_count,
        "starting elevator viewer"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([config.width, config.height])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ElevatorViewApp::new(
                layout, registry, cmd_tx, ui_rx, snapshots,
            )))
        }),
    )
    .map_err(|err| anyhow!("viewer window failed: {err}"))
}
