//! Configuration and settings management for PlotKit
//!
//! Provides configuration file handling, defaults, and validation.
//! Supports JSON and TOML file formats; the default file lives in the
//! platform configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Raster settings (mode, thresholds, hatching, stippling)
//! - Vector settings (scale, sampling step)
//! - Text settings (font, size, wrapping)
//! - Machine settings (pen heights, feed rates, start/end code)

use std::path::{Path, PathBuf};

use plotkit_camtools::{RasterMode, StrokeFont, TextLayoutParams, VectorPathSampler};
use plotkit_core::{MachineParams, ScaleMode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Hatch spacings below this are rejected.
const MIN_HATCH_SPACING_MM: f64 = 1e-3;

/// Raster analysis mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterModeKind {
    /// Sobel edge segments
    #[default]
    Edges,
    /// Parallel strokes over dark areas
    Hatching,
    /// Random dots
    Stippling,
}

impl std::fmt::Display for RasterModeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Edges => write!(f, "edges"),
            Self::Hatching => write!(f, "hatching"),
            Self::Stippling => write!(f, "stippling"),
        }
    }
}

impl std::str::FromStr for RasterModeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edges" | "edge" => Ok(Self::Edges),
            "hatching" | "hatch" => Ok(Self::Hatching),
            "stippling" | "stipple" => Ok(Self::Stippling),
            other => Err(ConfigError::InvalidSetting {
                key: "raster.mode".to_string(),
                reason: format!("unknown mode '{}'", other),
            }),
        }
    }
}

/// Raster image settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterSettings {
    /// Selected mode
    pub mode: RasterModeKind,
    /// Physical width of the output in mm
    pub target_width_mm: f64,
    /// Sobel magnitude threshold
    pub edge_threshold: f64,
    /// Distance between hatch strokes in mm
    pub hatch_spacing_mm: f64,
    /// Hatch direction in degrees
    pub hatch_angle_deg: f64,
    /// Stipple density, 1 to 10
    pub stipple_density: f64,
    /// Stipple dot diameter in mm
    pub stipple_dot_size_mm: f64,
    /// Longest side of the working image in pixels
    pub max_working_dimension_px: u32,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            mode: RasterModeKind::Edges,
            target_width_mm: 100.0,
            edge_threshold: 50.0,
            hatch_spacing_mm: 2.0,
            hatch_angle_deg: 45.0,
            stipple_density: 5.0,
            stipple_dot_size_mm: 0.5,
            max_working_dimension_px: plotkit_camtools::DEFAULT_WORKING_DIMENSION,
        }
    }
}

/// SVG settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorSettings {
    /// Uniform scale applied after normalization
    pub scale_percent: f64,
    /// Arc-length distance between samples, in document units
    pub sample_step: f64,
}

impl Default for VectorSettings {
    fn default() -> Self {
        Self {
            scale_percent: 100.0,
            sample_step: VectorPathSampler::DEFAULT_STEP,
        }
    }
}

/// Text layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    pub font: StrokeFont,
    pub font_size_mm: f64,
    /// Baseline distance as a multiple of the font size
    pub line_spacing: f64,
    pub max_line_width_mm: f64,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            font: StrokeFont::Simplex,
            font_size_mm: 10.0,
            line_spacing: 1.5,
            max_line_width_mm: 100.0,
        }
    }
}

/// Plotter settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineSettings {
    /// Pen-down Z height
    pub z_down: f64,
    /// Pen-up Z height
    pub z_up: f64,
    /// Drawing feed rate in mm/min
    pub feed_rate: f64,
    /// Travel feed rate in mm/min
    pub travel_rate: f64,
    /// Z height after the job
    pub park_height: f64,
    pub home_at_end: bool,
    pub disable_motors_at_end: bool,
    /// Replaces the default start code when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prologue: Option<String>,
    /// Replaces the default end code when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epilogue: Option<String>,
}

impl Default for MachineSettings {
    fn default() -> Self {
        let params = MachineParams::default();
        Self {
            z_down: params.z_down,
            z_up: params.z_up,
            feed_rate: params.feed_rate,
            travel_rate: params.travel_rate,
            park_height: params.park_height,
            home_at_end: params.home_at_end,
            disable_motors_at_end: params.disable_motors_at_end,
            prologue: None,
            epilogue: None,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub raster: RasterSettings,
    pub vector: VectorSettings,
    pub text: TextSettings,
    pub machine: MachineSettings,
}

enum FileFormat {
    Json,
    Toml,
}

fn file_format(path: &Path) -> ConfigResult<FileFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(FileFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(FileFormat::Toml),
        Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
        None => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

fn positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

fn finite(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = file_format(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match file_format(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let r = &self.raster;
        positive("raster.target_width_mm", r.target_width_mm)?;
        finite("raster.edge_threshold", r.edge_threshold)?;
        if r.edge_threshold < 0.0 {
            return Err(ConfigError::out_of_range("raster.edge_threshold", r.edge_threshold));
        }
        positive("raster.hatch_spacing_mm", r.hatch_spacing_mm)?;
        if r.hatch_spacing_mm < MIN_HATCH_SPACING_MM {
            return Err(ConfigError::out_of_range("raster.hatch_spacing_mm", r.hatch_spacing_mm));
        }
        finite("raster.hatch_angle_deg", r.hatch_angle_deg)?;
        if !(1.0..=10.0).contains(&r.stipple_density) {
            return Err(ConfigError::out_of_range("raster.stipple_density", r.stipple_density));
        }
        positive("raster.stipple_dot_size_mm", r.stipple_dot_size_mm)?;
        if r.max_working_dimension_px == 0 {
            return Err(ConfigError::out_of_range("raster.max_working_dimension_px", 0.0));
        }

        positive("vector.scale_percent", self.vector.scale_percent)?;
        positive("vector.sample_step", self.vector.sample_step)?;
        if self.vector.sample_step < VectorPathSampler::MIN_STEP {
            return Err(ConfigError::out_of_range("vector.sample_step", self.vector.sample_step));
        }

        positive("text.font_size_mm", self.text.font_size_mm)?;
        positive("text.line_spacing", self.text.line_spacing)?;
        positive("text.max_line_width_mm", self.text.max_line_width_mm)?;

        finite("machine.park_height", self.machine.park_height)?;
        self.machine_params()
            .validate()
            .map_err(|e| ConfigError::InvalidSetting {
                key: "machine".to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }

    /// Machine parameters for the emitter
    pub fn machine_params(&self) -> MachineParams {
        let m = &self.machine;
        MachineParams {
            z_down: m.z_down,
            z_up: m.z_up,
            feed_rate: m.feed_rate,
            travel_rate: m.travel_rate,
            park_height: m.park_height,
            home_at_end: m.home_at_end,
            disable_motors_at_end: m.disable_motors_at_end,
            prologue: m.prologue.clone(),
            epilogue: m.epilogue.clone(),
        }
    }

    /// The selected raster mode with its parameters
    pub fn raster_mode(&self) -> RasterMode {
        let r = &self.raster;
        match r.mode {
            RasterModeKind::Edges => RasterMode::Edges {
                threshold: r.edge_threshold,
            },
            RasterModeKind::Hatching => RasterMode::Hatching {
                spacing: r.hatch_spacing_mm,
                angle_deg: r.hatch_angle_deg,
            },
            RasterModeKind::Stippling => RasterMode::Stippling {
                density: r.stipple_density,
                dot_size: r.stipple_dot_size_mm,
            },
        }
    }

    pub fn text_params(&self) -> TextLayoutParams {
        TextLayoutParams {
            font_size: self.text.font_size_mm,
            line_spacing: self.text.line_spacing,
            max_line_width: self.text.max_line_width_mm,
        }
    }

    /// Normalization applied to SVG output
    pub fn scale_mode(&self) -> ScaleMode {
        ScaleMode::Percent(self.vector.scale_percent)
    }

    pub fn sampler(&self) -> VectorPathSampler {
        VectorPathSampler::new(self.vector.sample_step)
    }
}

/// `<config dir>/plotkit/config.toml`
pub fn default_config_path() -> ConfigResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("plotkit").join("config.toml"))
        .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
}

/// Load `path` when given; otherwise the default config file if it exists,
/// else built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Config> {
    if let Some(path) = path {
        return Config::load_from_file(path);
    }

    match default_config_path() {
        Ok(default) if default.is_file() => Config::load_from_file(&default),
        Ok(_) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            debug!("{}; using defaults", e);
            Ok(Config::default())
        }
    }
}
