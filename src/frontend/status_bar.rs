//! Status bar panel — bottom bar showing mode, stroke, and log info
//!
//! Sits below the canvas.

use egui::{Color32, RichText, Ui};

use crate::types::ExperimentMode;

/// Context needed to render the status bar
pub struct StatusBarContext<'a> {
    pub mode: ExperimentMode,
    /// Perturbation angle, degrees
    pub rotation_deg: f64,
    /// Whether a stroke is in progress
    pub stroke_active: bool,
    /// Id of the current (or most recent) stroke
    pub stroke_id: u64,
    /// Samples in the telemetry log
    pub sample_count: usize,
    pub last_error: Option<&'a str>,
}

/// Render the status bar
pub fn render_status_bar(ui: &mut Ui, ctx: &StatusBarContext<'_>) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        // === Mode indicator ===
        let mode_color = if ctx.mode.is_perturbed() {
            Color32::from_rgb(255, 160, 80)
        } else {
            Color32::from_rgb(100, 255, 100)
        };
        ui.colored_label(mode_color, "●");
        let mode_text = if ctx.mode.is_perturbed() {
            format!("{} ({}°)", ctx.mode.display_name(), ctx.rotation_deg)
        } else {
            ctx.mode.display_name().to_string()
        };
        ui.label(RichText::new(mode_text).small());

        ui.separator();

        // === Stroke state ===
        let stroke_text = if ctx.stroke_active {
            format!("Stroke #{} (drawing)", ctx.stroke_id)
        } else if ctx.stroke_id > 0 {
            format!("Stroke #{}", ctx.stroke_id)
        } else {
            "No strokes yet".to_string()
        };
        ui.label(RichText::new(stroke_text).small());

        ui.separator();

        // === Sample count ===
        ui.label(RichText::new(format!("Samples: {}", ctx.sample_count)).small());

        // === Error message (right-aligned) ===
        if let Some(error) = ctx.last_error {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(Color32::RED, RichText::new(error).small());
            });
        }
    });
}
