//! Toolbar panel — mode selection and operator actions
//!
//! Sits above the canvas. Returns actions instead of mutating state
//! directly; the app applies them after the frame layout.

use egui::{RichText, Ui};

use crate::frontend::state::AppAction;
use crate::types::ExperimentMode;

/// Context needed to render the toolbar
pub struct ToolbarContext {
    /// Active experiment mode
    pub mode: ExperimentMode,
    /// Samples currently in the telemetry log
    pub sample_count: usize,
    /// Dark theme active
    pub dark_mode: bool,
}

/// Render the main application toolbar
pub fn render_toolbar(ui: &mut Ui, ctx: &ToolbarContext) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;

        // === Mode group ===
        for mode in ExperimentMode::ALL {
            let selected = ctx.mode == mode;
            if ui.selectable_label(selected, mode.display_name()).clicked() && !selected {
                actions.push(AppAction::SetMode(mode));
            }
        }

        ui.separator();

        // === Operator actions ===
        if ui.button("Clear").clicked() {
            actions.push(AppAction::ClearAll);
        }
        if ui.button("Export CSV").clicked() {
            actions.push(AppAction::ExportCsv);
        }

        // === Right-aligned info group ===
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let theme_icon = if ctx.dark_mode { "☀" } else { "🌙" };
            if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                actions.push(AppAction::ToggleDarkMode);
            }
            ui.label(RichText::new(format!("Samples: {}", ctx.sample_count)).small());
        });
    });

    actions
}
