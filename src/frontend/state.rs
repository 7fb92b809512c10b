//! Shared frontend action types
//!
//! UI components return `Vec<AppAction>` instead of mutating application
//! state directly. This keeps panel logic testable and centralizes the
//! side effects (mode switch, clearing, export) in one handler.

use crate::types::ExperimentMode;

/// Actions a UI component can emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Select the experiment mode
    SetMode(ExperimentMode),
    /// Clear the canvas and discard all logged samples
    ClearAll,
    /// Export the telemetry log as CSV via a save dialog
    ExportCsv,
    /// Toggle the dark theme and persist the preference
    ToggleDarkMode,
    /// Dismiss the onboarding dialog and persist the dismissal
    DismissOnboarding,
}
