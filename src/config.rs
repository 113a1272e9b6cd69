//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HS_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hyperslice_core::{SliceOptions, DEFAULT_TOLERANCE};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Slice sweep configuration
    #[serde(default)]
    pub slice: SliceConfig,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HS_*`)
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

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // HS_SLICE__STEPS=5 -> slice.steps = 5
        figment = figment.merge(Env::prefixed("HS_").split("__"));

        let config: Self = figment.extract().map_err(ConfigError::from)?;
        config.slice.validate()?;
        Ok(config)
    }
}

/// Slice sweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceConfig {
    /// Welding tolerance for cross-section vertices
    pub tolerance: f64,
    /// First slice value of the sweep
    pub start: f64,
    /// Last slice value of the sweep
    pub end: f64,
    /// Number of slices, evenly spaced from `start` to `end`
    pub steps: u32,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            start: -1.0,
            end: 1.0,
            steps: 9,
        }
    }
}

impl SliceConfig {
    /// Slicer options built from this section
    pub fn options(&self) -> SliceOptions {
        SliceOptions::with_tolerance(self.tolerance)
    }

    /// The slice values of the sweep
    ///
    /// One step gives `start`; otherwise both ends are included.
    pub fn values(&self) -> Vec<f64> {
        match self.steps {
            0 => Vec::new(),
            1 => vec![self.start],
            n => {
                let last = (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        let t = i as f64 / last;
                        self.start * (1.0 - t) + self.end * t
                    })
                    .collect()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Err(e) = self.options().validate() {
            return Err(ConfigError::invalid(format!("slice.tolerance: {}", e)));
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ConfigError::invalid("slice.start and slice.end must be finite"));
        }
        Ok(())
    }
}

/// Scene configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Path to a RON scene file; empty for the built-in scene
    #[serde(default)]
    pub path: String,
}

impl SceneConfig {
    pub fn path(&self) -> Option<&str> {
        if self.path.is_empty() {
            None
        } else {
            Some(&self.path)
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        ConfigError {
            message: message.into(),
        }
    }
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
