//! PlotKit Settings Crate
//!
//! Handles application configuration: typed sections with defaults,
//! validation, and JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, load_or_default, Config, MachineSettings, RasterModeKind,
    RasterSettings, TextSettings, VectorSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
