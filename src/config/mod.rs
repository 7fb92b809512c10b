//! Configuration module for visuomotor-rs
//!
//! Handles the persistent application state (UI preferences, experiment
//! parameters, last export directory) stored as JSON in the
//! platform-appropriate data directory:
//!
//! - **Linux**: `~/.local/share/visuomotor-rs/`
//! - **macOS**: `~/Library/Application Support/visuomotor-rs/`
//! - **Windows**: `%APPDATA%\visuomotor-rs\`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, VisuomotorError};

/// Application identifier for data directories
pub const APP_ID: &str = "visuomotor-rs";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Default perturbation angle in degrees (clockwise)
pub const DEFAULT_ROTATION_DEGREES: f64 = 30.0;

/// Pressure substituted when the input device reports none
pub const DEFAULT_PRESSURE: f64 = 0.5;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        VisuomotorError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            VisuomotorError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

// ==================== Experiment Configuration ====================

/// Parameters of the visuomotor experiment
///
/// Fixed for the lifetime of a dispatcher; changing the angle takes effect
/// the next time the application constructs one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Perturbation rotation applied to movement deltas, degrees clockwise
    pub rotation_angle_deg: f64,

    /// Pressure assumed for devices without pressure reporting
    pub default_pressure: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            rotation_angle_deg: DEFAULT_ROTATION_DEGREES,
            default_pressure: DEFAULT_PRESSURE,
        }
    }
}

// ==================== UI Preferences ====================

/// UI preferences that persist across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Use the dark theme
    #[serde(default)]
    pub dark_mode: bool,

    /// Show the onboarding dialog at startup
    #[serde(default = "default_true")]
    pub show_onboarding: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            show_onboarding: true,
        }
    }
}

// ==================== App State ====================

/// Persistent application state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Version for future migration support
    #[serde(default = "default_app_state_version")]
    pub version: u32,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,

    /// Experiment parameters
    #[serde(default)]
    pub experiment: ExperimentConfig,

    /// Directory of the last CSV export (starting point for the next dialog)
    #[serde(default)]
    pub last_export_dir: Option<PathBuf>,
}

fn default_app_state_version() -> u32 {
    1
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            version: 1,
            ui_preferences: UiPreferences::default(),
            experiment: ExperimentConfig::default(),
            last_export_dir: None,
        }
    }
}

impl AppState {
    /// Load app state from the default location
    pub fn load() -> Result<Self> {
        let path = app_state_path().ok_or_else(|| {
            VisuomotorError::Config("Could not determine app state path".to_string())
        })?;
        Self::load_from(&path)
    }

    /// Load app state from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json)
            .map_err(|e| VisuomotorError::Serialization(format!("Invalid app state: {}", e)))
    }

    /// Load app state, falling back to defaults when missing or invalid
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(state) => state,
            Err(e) => {
                tracing::debug!("Using default app state: {}", e);
                Self::default()
            }
        }
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(&dir.join(APP_STATE_FILE))
    }

    /// Save app state to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| VisuomotorError::Serialization(e.to_string()))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experiment_config_defaults() {
        let config = ExperimentConfig::default();
        assert_eq!(config.rotation_angle_deg, 30.0);
        assert_eq!(config.default_pressure, 0.5);
    }

    #[test]
    fn test_app_state_json_round_trip() {
        let mut state = AppState::default();
        state.ui_preferences.dark_mode = true;
        state.experiment.rotation_angle_deg = 45.0;

        let json = serde_json::to_string(&state).unwrap();
        let restored: AppState = serde_json::from_str(&json).unwrap();
        assert!(restored.ui_preferences.dark_mode);
        assert_eq!(restored.experiment.rotation_angle_deg, 45.0);
    }

    #[test]
    fn test_app_state_migration_defaults() {
        // Fields absent from an older state file fall back to defaults
        let restored: AppState = serde_json::from_str("{}").unwrap();
        assert_eq!(restored.version, 1);
        assert!(restored.ui_preferences.show_onboarding);
        assert_eq!(restored.experiment.default_pressure, 0.5);
    }
}
