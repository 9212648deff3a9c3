use std::path::{Path, PathBuf};

use palette_map::matcher::{
    DEFAULT_COLOR_WEIGHT, DEFAULT_HUE_WEIGHT, DEFAULT_LUMINANCE_WEIGHT,
};
use palette_map::{MapOptions, MappingMode, Palette, Thresholds};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming a config file when `--config` is not given
pub const CONFIG_ENV: &str = "RETINT_CONFIG";

/// Largest meaningful black threshold (r + g + b of pure white)
pub const MAX_BLACK_THRESHOLD: u16 = 765;

/// Matching mode as written in config files and on the command line
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ModeName {
    Rgb,
    #[default]
    Luminance,
    Hsl,
    Hybrid,
}

/// Application configuration loaded from retint.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Target palette as hex colors
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    #[serde(default)]
    pub mode: ModeName,

    /// HSL mode: weight of the hue term
    #[serde(default = "default_hue_weight")]
    pub hue_weight: f64,

    /// HSL mode: weight of the luminance term
    #[serde(default = "default_luminance_weight")]
    pub luminance_weight: f64,

    /// Hybrid mode: weight of the RGB term (luminance gets the rest)
    #[serde(default = "default_color_weight")]
    pub color_weight: f64,

    /// Stretch the luminance range before matching
    #[serde(default)]
    pub contrast_stretch: bool,

    /// Pixels with r + g + b below this are left alone
    #[serde(default = "default_black_threshold")]
    pub black_threshold: u16,

    /// Pixels with alpha below this are left alone
    #[serde(default = "default_alpha_threshold")]
    pub alpha_threshold: u8,

    /// Write results over the input instead of a timestamped sibling
    #[serde(default)]
    pub overwrite_original: bool,
}

fn default_palette() -> Vec<String> {
    ["#31210b", "#503a12", "#4a3411", "#442f0f", "#3e2a0e", "#37260c"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_hue_weight() -> f64 {
    DEFAULT_HUE_WEIGHT
}

fn default_luminance_weight() -> f64 {
    DEFAULT_LUMINANCE_WEIGHT
}

fn default_color_weight() -> f64 {
    DEFAULT_COLOR_WEIGHT
}

fn default_black_threshold() -> u16 {
    Thresholds::default().black
}

fn default_alpha_threshold() -> u8 {
    Thresholds::default().alpha
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            mode: ModeName::default(),
            hue_weight: default_hue_weight(),
            luminance_weight: default_luminance_weight(),
            color_weight: default_color_weight(),
            contrast_stretch: false,
            black_threshold: default_black_threshold(),
            alpha_threshold: default_alpha_threshold(),
            overwrite_original: false,
        }
    }
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub mode: Option<ModeName>,
    pub palette: Option<Vec<String>>,
    pub contrast_stretch: Option<bool>,
    pub black_threshold: Option<u16>,
    pub alpha_threshold: Option<u8>,
}

impl AppConfig {
    /// Load the configuration, apply `overrides`, then validate the result.
    ///
    /// Values in the file that an override replaces are never checked.
    pub fn resolve(explicit: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::load(explicit)?;
        config.apply(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Locate and parse the configuration, without validating it.
    ///
    /// An explicit path wins, then `RETINT_CONFIG`, then the built-in
    /// defaults. A named file that is missing or malformed is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(env_path) {
            Some(path) => Self::load_from_path(&path),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse a config file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            palette = config.palette.len(),
            mode = ?config.mode,
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check ranges and parse the palette.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.black_threshold > MAX_BLACK_THRESHOLD {
            return Err(ConfigError::Invalid {
                field: "black_threshold",
                reason: format!(
                    "must be at most {MAX_BLACK_THRESHOLD}, got {}",
                    self.black_threshold
                ),
            });
        }
        check_weight("hue_weight", self.hue_weight)?;
        check_weight("luminance_weight", self.luminance_weight)?;
        check_weight("color_weight", self.color_weight)?;
        if self.color_weight > 1.0 {
            return Err(ConfigError::Invalid {
                field: "color_weight",
                reason: format!("must be between 0 and 1, got {}", self.color_weight),
            });
        }
        self.palette()?;
        Ok(())
    }

    /// Parse the hex palette.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette::from_hex(&self.palette)?)
    }

    /// Apply command-line overrides in place.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(mode) = overrides.mode {
            self.mode = mode;
        }
        if let Some(palette) = &overrides.palette {
            self.palette = palette.clone();
        }
        if let Some(stretch) = overrides.contrast_stretch {
            self.contrast_stretch = stretch;
        }
        if let Some(black) = overrides.black_threshold {
            self.black_threshold = black;
        }
        if let Some(alpha) = overrides.alpha_threshold {
            self.alpha_threshold = alpha;
        }
    }

    pub fn mapping_mode(&self) -> MappingMode {
        match self.mode {
            ModeName::Rgb => MappingMode::Rgb,
            ModeName::Luminance => MappingMode::Luminance,
            ModeName::Hsl => MappingMode::Hsl {
                hue_weight: self.hue_weight,
                luminance_weight: self.luminance_weight,
            },
            ModeName::Hybrid => MappingMode::Hybrid {
                color_weight: self.color_weight,
            },
        }
    }

    /// Engine options for this configuration.
    pub fn to_options(&self) -> MapOptions {
        MapOptions::new()
            .mode(self.mapping_mode())
            .thresholds(Thresholds::new(self.black_threshold, self.alpha_threshold))
            .contrast_stretch(self.contrast_stretch)
    }
}

fn check_weight(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::Invalid {
            field,
            reason: format!("must be a non-negative number, got {value}"),
        });
    }
    Ok(())
}
