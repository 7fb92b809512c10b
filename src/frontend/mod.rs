//! Frontend module for the egui UI
//!
//! Layout: a top toolbar (mode buttons, clear, export), the central capture
//! canvas, and a bottom status bar, plus transient toasts and a one-time
//! onboarding dialog.
//!
//! # Main Types
//!
//! - [`VisuomotorApp`] - Main application state implementing [`eframe::App`]
//! - [`CanvasPane`] - Capture surface: event intake and stroke rendering
//! - [`AppAction`] - Actions emitted by UI components, applied centrally

pub mod canvas;
pub mod guide;
pub mod state;
pub mod status_bar;
pub mod toast;
pub mod toolbar;

pub use canvas::CanvasPane;
pub use state::AppAction;

use egui::Context;

use crate::capture::{InputDispatcher, RenderSink, Rotation, TelemetryLog};
use crate::config::AppState;
use crate::error::VisuomotorError;
use status_bar::StatusBarContext;
use toast::{ToastKind, ToastState};
use toolbar::ToolbarContext;

/// Main application state for the visuomotor apparatus
pub struct VisuomotorApp {
    app_state: AppState,
    dispatcher: InputDispatcher,
    telemetry: TelemetryLog,
    canvas: CanvasPane,
    toasts: ToastState,
    last_error: Option<String>,
}

impl VisuomotorApp {
    /// Create the application from persisted state
    pub fn new(_cc: &eframe::CreationContext<'_>, app_state: AppState) -> Self {
        let experiment = &app_state.experiment;
        let dispatcher = InputDispatcher::new(
            Rotation::from_degrees(experiment.rotation_angle_deg),
            experiment.default_pressure,
        );

        Self {
            app_state,
            dispatcher,
            telemetry: TelemetryLog::new(),
            canvas: CanvasPane::new(),
            toasts: ToastState::default(),
            last_error: None,
        }
    }

    /// Apply one UI action
    fn apply_action(&mut self, action: AppAction, ctx: &Context) {
        match action {
            AppAction::SetMode(mode) => {
                self.dispatcher.set_mode(mode);
                self.toasts
                    .show(ToastKind::Info, format!("Mode: {}", mode.display_name()));
            }
            AppAction::ClearAll => {
                self.canvas.clear_and_redraw_guides();
                self.telemetry.clear();
                self.toasts.show(ToastKind::Cleared, "Canvas Cleared");
            }
            AppAction::ExportCsv => self.export_csv(),
            AppAction::ToggleDarkMode => {
                let prefs = &mut self.app_state.ui_preferences;
                prefs.dark_mode = !prefs.dark_mode;
                ctx.set_visuals(if prefs.dark_mode {
                    egui::Visuals::dark()
                } else {
                    egui::Visuals::light()
                });
                self.persist_app_state();
            }
            AppAction::DismissOnboarding => {
                self.app_state.ui_preferences.show_onboarding = false;
                self.persist_app_state();
            }
        }
    }

    /// Export the telemetry log to a CSV file chosen by the operator
    fn export_csv(&mut self) {
        let csv = match self.telemetry.export_csv() {
            Ok(csv) => csv,
            Err(VisuomotorError::EmptyLog) => {
                self.toasts.show(ToastKind::Info, "No Data to Export");
                return;
            }
            Err(e) => {
                tracing::error!("CSV export failed: {}", e);
                self.last_error = Some(e.to_string());
                return;
            }
        };

        let default_name = format!(
            "visuomotor_data_{}.csv",
            chrono::Local::now().format("%Y-%m-%dT%H-%M-%S")
        );
        let mut dialog = rfd::FileDialog::new()
            .set_title("Export Telemetry Data")
            .add_filter("CSV Files", &["csv"])
            .set_file_name(default_name);
        if let Some(dir) = &self.app_state.last_export_dir {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return;
        };

        match std::fs::write(&path, csv) {
            Ok(()) => {
                tracing::info!("Exported {} samples to {:?}", self.telemetry.len(), path);
                self.toasts.show(ToastKind::Exported, "Data Exported");
                self.last_error = None;
                self.app_state.last_export_dir = path.parent().map(|p| p.to_path_buf());
                self.persist_app_state();
            }
            Err(e) => {
                tracing::error!("Failed to write {:?}: {}", path, e);
                self.last_error = Some(format!("Export failed: {}", e));
            }
        }
    }

    /// Save the app state, logging (not surfacing) failures
    fn persist_app_state(&self) {
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }

    /// Render the onboarding dialog shown at first startup
    fn show_onboarding(&mut self, ctx: &Context) -> Vec<AppAction> {
        let mut actions = Vec::new();

        egui::Window::new("Visuomotor Rotation Experiment")
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .resizable(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.label("Trace the house outline with your pen, mouse, or finger.");
                ui.label(
                    "In perturbation mode the drawn line is rotated 30° relative \
                     to your movement. Every move is recorded for analysis.",
                );
                ui.add_space(12.0);
                if ui.button("Start").clicked() {
                    actions.push(AppAction::DismissOnboarding);
                }
            });

        actions
    }
}

impl eframe::App for VisuomotorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            let toolbar_ctx = ToolbarContext {
                mode: self.dispatcher.mode(),
                sample_count: self.telemetry.len(),
                dark_mode: self.app_state.ui_preferences.dark_mode,
            };
            actions.extend(toolbar::render_toolbar(ui, &toolbar_ctx));
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let session = self.dispatcher.session();
            let status_ctx = StatusBarContext {
                mode: self.dispatcher.mode(),
                rotation_deg: self.dispatcher.rotation().degrees(),
                stroke_active: session.is_active(),
                stroke_id: session.stroke_id(),
                sample_count: self.telemetry.len(),
                last_error: self.last_error.as_deref(),
            };
            status_bar::render_status_bar(ui, &status_ctx);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.canvas.show(ui, &mut self.dispatcher, &mut self.telemetry);
            });

        if self.app_state.ui_preferences.show_onboarding {
            actions.extend(self.show_onboarding(ctx));
        }

        self.toasts.ui(ctx);

        for action in actions {
            self.apply_action(action, ctx);
        }
    }
}
