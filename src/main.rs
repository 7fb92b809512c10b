//! Visuomotor Rotation Lab - Main Entry Point
//!
//! Captures a subject's pointer trajectory, optionally rotates the rendered
//! path relative to the physical input, and logs both coordinate streams
//! for later analysis.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use visuomotor_rs::{config::AppState, frontend::VisuomotorApp};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,visuomotor_rs=trace")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Visuomotor Rotation Lab");

    // Load persisted preferences and experiment parameters
    let app_state = AppState::load_or_default();
    tracing::debug!(
        angle = app_state.experiment.rotation_angle_deg,
        "Loaded experiment configuration"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Visuomotor Rotation Lab"),
        ..Default::default()
    };

    eframe::run_native(
        "Visuomotor Rotation Lab",
        native_options,
        Box::new(|cc| {
            if app_state.ui_preferences.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            Ok(Box::new(VisuomotorApp::new(cc, app_state)))
        }),
    )
}
