//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`W4D_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// View / projection configuration
    #[serde(default)]
    pub view: ViewConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Status bar and label text configuration
    #[serde(default)]
    pub text: TextConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`W4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // W4D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("W4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Windowed-mode width in pixels
    pub width: u32,
    /// Windowed-mode height in pixels
    pub height: u32,
    /// Start fullscreen at the detected display resolution
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Wire4D - wireframe visualizer".to_string(),
            // Height 600 with the width at 16:9, truncated.
            width: 1066,
            height: 600,
            fullscreen: false,
        }
    }
}

/// View and projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Half-extent of the built-in shapes, in world units
    pub shape_size: f32,
    /// Perspective projection distance
    pub projection_distance: f32,
    /// Gap between the window edge and viewport panels, in pixels
    pub viewport_margin: u32,
    /// Viewport border thickness, in pixels
    pub viewport_border: u32,
    /// Edge color for STL-loaded meshes [r, g, b]
    pub mesh_color: [u8; 3],
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            shape_size: 100.0,
            projection_distance: 500.0,
            viewport_margin: 15,
            viewport_border: 1,
            mesh_color: [255, 255, 255],
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Degrees added per rotation keypress
    pub rotate_step: f32,
    /// World units added per translation keypress
    pub translate_step: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            rotate_step: 5.0,
            translate_step: 5.0,
        }
    }
}

/// Text rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Candidate font files, tried in order; the first that loads wins
    pub font_paths: Vec<PathBuf>,
    /// Height of the status strip at the bottom of the window, in pixels
    pub status_height: u32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_paths: vec![
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
                PathBuf::from("/usr/share/fonts/TTF/DejaVuSans.ttf"),
                PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"),
                PathBuf::from("C:\\Windows\\Fonts\\arial.ttf"),
            ],
            status_height: 16,
        }
    }
}

impl TextConfig {
    /// Font pixel size that fits inside the status strip.
    pub fn font_px(&self) -> f32 {
        (self.status_height.saturating_sub(2)).max(1) as f32
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_keep_original_window_shape() {
        let config = AppConfig::default();
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.width, 1066);
        assert!(!config.window.fullscreen);
    }

    #[test]
    fn test_default_steps_match_original() {
        let config = AppConfig::default();
        assert_eq!(config.input.rotate_step, 5.0);
        assert_eq!(config.input.translate_step, 5.0);
        assert_eq!(config.view.projection_distance, 500.0);
    }

    #[test]
    fn test_font_px_fits_status_strip() {
        let text = TextConfig::default();
        assert_eq!(text.status_height, 16);
        assert_eq!(text.font_px(), 14.0);
    }

    #[test]
    fn test_missing_config_dir_yields_defaults() {
        let config = AppConfig::load_from("/definitely/not/a/config/dir").unwrap();
        assert_eq!(config.window.height, 600);
    }
}
