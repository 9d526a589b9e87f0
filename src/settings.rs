use std::path::PathBuf;

use eframe::egui;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use epicycles::FourierConfig;

use crate::render::CanvasSettings;
use crate::EpicycleApp;

/// Returns the path to the settings file: `~/.config/epicycles/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("epicycles");
    path.push("settings.json");
    path
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted application settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub show_settings: bool,

    // Analysis and playback
    pub fourier: FourierConfig,

    // Display
    pub line_width: f32,
    pub show_circles: bool,
    pub show_arms: bool,
    pub show_trail: bool,
    pub show_drawing: bool,
    pub show_samples: bool,
    pub show_reconstruction: bool,
    pub show_graticule: bool,

    // Color (stored as u8 triples since Color32 isn't serde-friendly)
    pub color_r: u8,
    pub color_g: u8,
    pub color_b: u8,
    pub background_r: u8,
    pub background_g: u8,
    pub background_b: u8,
}

impl Default for AppSettings {
    fn default() -> Self {
        let canvas = CanvasSettings::default();
        Self {
            show_settings: true,

            fourier: FourierConfig::default(),

            line_width: canvas.line_width,
            show_circles: canvas.show_circles,
            show_arms: canvas.show_arms,
            show_trail: canvas.show_trail,
            show_drawing: canvas.show_drawing,
            show_samples: canvas.show_samples,
            show_reconstruction: canvas.show_reconstruction,
            show_graticule: canvas.show_graticule,

            color_r: canvas.color.r(),
            color_g: canvas.color.g(),
            color_b: canvas.color.b(),
            background_r: canvas.background.r(),
            background_g: canvas.background.g(),
            background_b: canvas.background.b(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(settings) => {
                log::info!("Loaded settings from {}", settings_path().display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to parse settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn try_load() -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(settings_path())?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &EpicycleApp) -> Self {
        let canvas = &app.canvas.settings;
        Self {
            show_settings: app.show_settings,

            fourier: app.config.clone(),

            line_width: canvas.line_width,
            show_circles: canvas.show_circles,
            show_arms: canvas.show_arms,
            show_trail: canvas.show_trail,
            show_drawing: canvas.show_drawing,
            show_samples: canvas.show_samples,
            show_reconstruction: canvas.show_reconstruction,
            show_graticule: canvas.show_graticule,

            color_r: canvas.color.r(),
            color_g: canvas.color.g(),
            color_b: canvas.color.b(),
            background_r: canvas.background.r(),
            background_g: canvas.background.g(),
            background_b: canvas.background.b(),
        }
    }

    /// Apply loaded settings to the running application.
    pub fn apply(&self, app: &mut EpicycleApp) {
        app.show_settings = self.show_settings;

        app.config = self.fourier.sanitized();
        app.session.set_config(app.config.clone());

        let canvas = &mut app.canvas.settings;
        canvas.line_width = self.line_width;
        canvas.show_circles = self.show_circles;
        canvas.show_arms = self.show_arms;
        canvas.show_trail = self.show_trail;
        canvas.show_drawing = self.show_drawing;
        canvas.show_samples = self.show_samples;
        canvas.show_reconstruction = self.show_reconstruction;
        canvas.show_graticule = self.show_graticule;
        canvas.skip_dc = self.fourier.skip_dc;

        canvas.color = egui::Color32::from_rgb(self.color_r, self.color_g, self.color_b);
        canvas.background =
            egui::Color32::from_rgb(self.background_r, self.background_g, self.background_b);
    }
}
