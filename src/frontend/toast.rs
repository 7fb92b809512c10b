//! Transient toast notifications
//!
//! One toast at a time, anchored to the bottom center of the window,
//! auto-dismissed after a fixed duration. A new toast replaces the current
//! one immediately.

use std::time::{Duration, Instant};

use egui::{Align2, Color32, Context, Id, RichText};

/// How long a toast stays visible
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Icon category for a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Cleared,
    Exported,
}

impl ToastKind {
    fn icon(&self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ",
            ToastKind::Cleared => "🗑",
            ToastKind::Exported => "⬇",
        }
    }
}

/// The currently displayed toast, if any
#[derive(Debug, Default)]
pub struct ToastState {
    current: Option<(ToastKind, String, Instant)>,
}

impl ToastState {
    /// Show a toast, replacing any current one
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.current = Some((kind, message.into(), Instant::now()));
    }

    /// Render the active toast and expire it when its time is up
    pub fn ui(&mut self, ctx: &Context) {
        let Some((kind, message, shown_at)) = &self.current else {
            return;
        };

        if shown_at.elapsed() >= TOAST_DURATION {
            self.current = None;
            return;
        }

        egui::Area::new(Id::new("toast"))
            .anchor(Align2::CENTER_BOTTOM, [0.0, -24.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style())
                    .fill(Color32::from_black_alpha(220))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(kind.icon()).color(Color32::WHITE));
                            ui.label(RichText::new(message).color(Color32::WHITE));
                        });
                    });
            });

        // Keep repainting until the toast expires
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
