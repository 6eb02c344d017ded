use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Default animation duration shared by the state commit and the renderer
pub const DEFAULT_ANIMATION_MS: u64 = 280;

/// Default speed multiplier for step-to-step transitions
pub const DEFAULT_STEP_SPEED: f64 = 0.9;

const MAX_ANIMATION_MS: u64 = 10_000;

/// Animation timing injected into both the lifecycle and the renderer.
///
/// The lifecycle delays the second phase of an animated dismissal by exactly
/// `duration()`, so the renderer must animate the overlay out with the same
/// value or the commit lands before or after the visual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Animation duration in milliseconds
    pub duration_ms: u64,

    /// Speed multiplier applied to step navigation animations
    pub step_speed: f64,
}

impl AnimationConfig {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    pub fn with_step_speed(mut self, speed: f64) -> Self {
        self.step_speed = speed;
        self
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "animation duration must be greater than zero".to_string(),
            ));
        }
        if self.duration_ms > MAX_ANIMATION_MS {
            return Err(ConfigError::Invalid(format!(
                "animation duration {}ms exceeds {}ms",
                self.duration_ms, MAX_ANIMATION_MS
            )));
        }
        if !self.step_speed.is_finite() || self.step_speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "step speed must be a positive number, got {}",
                self.step_speed
            )));
        }
        Ok(())
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_ANIMATION_MS,
            step_speed: DEFAULT_STEP_SPEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Timing shared between the state machine and the renderer
    #[serde(default)]
    pub animation: AnimationConfig,

    /// Default tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl WizardConfig {
    /// Load configuration from the platform-specific config directory.
    /// Creates default config if file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let config = Self::load_from(&config_path)?;
            tracing::info!("Loaded config from: {}", config_path.display());
            Ok(config)
        } else {
            let config = WizardConfig::default();
            config.save_to(&config_path)?;
            tracing::info!("Created default config at: {}", config_path.display());
            Ok(config)
        }
    }

    /// Load and validate configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        let config: WizardConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.display().to_string(),
                source: Box::new(e),
            })?;

        config.animation.validate()?;
        Ok(config)
    }

    /// Save configuration to the platform config directory
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::DirectoryCreationFailed {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;
        fs::write(path, json).map_err(|e| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        Ok(())
    }

    /// Directory holding config.json and the logs folder
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("PopupWizard"))
            .ok_or(ConfigError::NoConfigDir)
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join("config.json"))
    }
}
