use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use plotkit::{Config, RasterModeKind, StrokeFont};

/// Convert images, SVG drawings and text into pen-plotter G-code.
#[derive(Debug, Parser)]
#[command(name = "plotkit", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (.toml or .json). Default: the platform config file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write G-code here instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub machine: MachineArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a raster image (PNG, JPEG, ...)
    Image {
        /// Path to the image file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Geometry extraction mode: edges, hatching or stippling
        #[arg(long, value_name = "MODE")]
        mode: Option<RasterModeKind>,

        /// Output width in mm
        #[arg(long)]
        width: Option<f64>,

        /// Edge detection threshold
        #[arg(long)]
        threshold: Option<f64>,

        /// Hatch line spacing in mm
        #[arg(long)]
        spacing: Option<f64>,

        /// Hatch angle in degrees
        #[arg(long)]
        angle: Option<f64>,

        /// Stipple density (1-10)
        #[arg(long)]
        density: Option<f64>,

        /// Stipple dot size in mm
        #[arg(long)]
        dot_size: Option<f64>,

        /// Longest side of the working image in pixels
        #[arg(long)]
        working_size: Option<u32>,
    },

    /// Convert an SVG drawing
    Svg {
        /// Path to the SVG file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Scale in percent
        #[arg(long)]
        scale: Option<f64>,

        /// Sampling step along paths, in document units
        #[arg(long)]
        step: Option<f64>,
    },

    /// Lay out text in a stroke font
    Text {
        /// Text to draw; use '\n' in the shell string for line breaks
        #[arg(value_name = "TEXT", required_unless_present = "file")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, value_name = "FILE", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Stroke font: simplex, complex or script
        #[arg(long, value_name = "FONT")]
        font: Option<StrokeFont>,

        /// Font size in mm
        #[arg(long)]
        font_size: Option<f64>,

        /// Line spacing as a multiple of the font size
        #[arg(long)]
        line_spacing: Option<f64>,

        /// Maximum line width in mm
        #[arg(long)]
        max_width: Option<f64>,
    },
}

/// Machine overrides shared by every subcommand.
#[derive(Debug, Args)]
pub struct MachineArgs {
    /// Pen-down Z height
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub z_down: Option<f64>,

    /// Pen-up Z height
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub z_up: Option<f64>,

    /// Drawing feed rate in mm/min
    #[arg(long, global = true)]
    pub feed: Option<f64>,

    /// Travel feed rate in mm/min
    #[arg(long, global = true)]
    pub travel: Option<f64>,

    /// File whose contents replace the default start code
    #[arg(long, global = true, value_name = "FILE")]
    pub prologue: Option<PathBuf>,

    /// File whose contents replace the default end code
    #[arg(long, global = true, value_name = "FILE")]
    pub epilogue: Option<PathBuf>,
}

fn set<T: Copy>(target: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *target = v;
    }
}

impl Cli {
    /// Overlay command-line values on a loaded configuration.
    ///
    /// Start/end code files are read separately; see [`MachineArgs::prologue`].
    pub fn apply_overrides(&self, config: &mut Config) {
        let m = &self.machine;
        set(&mut config.machine.z_down, m.z_down);
        set(&mut config.machine.z_up, m.z_up);
        set(&mut config.machine.feed_rate, m.feed);
        set(&mut config.machine.travel_rate, m.travel);

        match &self.command {
            Commands::Image {
                mode,
                width,
                threshold,
                spacing,
                angle,
                density,
                dot_size,
                working_size,
                ..
            } => {
                let r = &mut config.raster;
                set(&mut r.mode, *mode);
                set(&mut r.target_width_mm, *width);
                set(&mut r.edge_threshold, *threshold);
                set(&mut r.hatch_spacing_mm, *spacing);
                set(&mut r.hatch_angle_deg, *angle);
                set(&mut r.stipple_density, *density);
                set(&mut r.stipple_dot_size_mm, *dot_size);
                set(&mut r.max_working_dimension_px, *working_size);
            }
            Commands::Svg { scale, step, .. } => {
                set(&mut config.vector.scale_percent, *scale);
                set(&mut config.vector.sample_step, *step);
            }
            Commands::Text {
                font,
                font_size,
                line_spacing,
                max_width,
                ..
            } => {
                let t = &mut config.text;
                set(&mut t.font, *font);
                set(&mut t.font_size_mm, *font_size);
                set(&mut t.line_spacing, *line_spacing);
                set(&mut t.max_line_width_mm, *max_width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_overrides() {
        let cli = Cli::parse_from([
            "plotkit", "image", "photo.png", "--mode", "hatching", "--spacing", "1.5", "--z-down",
            "-2",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.raster.mode, RasterModeKind::Hatching);
        assert_eq!(config.raster.hatch_spacing_mm, 1.5);
        assert_eq!(config.raster.edge_threshold, 50.0);
        assert_eq!(config.machine.z_down, -2.0);
    }

    #[test]
    fn test_text_overrides() {
        let cli = Cli::parse_from(["plotkit", "text", "HELLO", "--font", "script", "-o", "out.gcode"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.text.font, StrokeFont::Script);
        assert_eq!(cli.output, Some(PathBuf::from("out.gcode")));
    }

    #[test]
    fn test_mode_and_font_use_config_names() {
        let cli = Cli::parse_from(["plotkit", "image", "photo.png", "--mode", "stipple"]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.raster.mode, RasterModeKind::Stippling);

        let cli = Cli::parse_from(["plotkit", "text", "HI", "--font", "Complex"]);
        cli.apply_overrides(&mut config);
        assert_eq!(config.text.font, StrokeFont::Complex);

        assert!(Cli::try_parse_from(["plotkit", "image", "a.png", "--mode", "spiral"]).is_err());
        assert!(Cli::try_parse_from(["plotkit", "text", "HI", "--font", "gothic"]).is_err());
    }

    #[test]
    fn test_text_requires_input() {
        assert!(Cli::try_parse_from(["plotkit", "text"]).is_err());
    }
}
