mod cli;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use plotkit::{pipeline, Config, ConversionError, Toolpath};
use tracing::info;

fn read_block(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file {}", what, path.display()))
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = plotkit_settings::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);

    if let Some(path) = &cli.machine.prologue {
        config.machine.prologue = Some(read_block(path, "prologue")?);
    }
    if let Some(path) = &cli.machine.epilogue {
        config.machine.epilogue = Some(read_block(path, "epilogue")?);
    }

    config.validate().context("Invalid settings")?;
    Ok(config)
}

fn convert(cli: &Cli, config: &Config) -> Result<Toolpath> {
    let toolpath = match &cli.command {
        Commands::Image { file, .. } => {
            let image = pipeline::load_raster_file(file)
                .with_context(|| format!("Failed to load image {}", file.display()))?;
            pipeline::convert_image(&image, config)
        }
        Commands::Svg { file, .. } => {
            let document = pipeline::load_vector_file(file)
                .with_context(|| format!("Failed to load SVG {}", file.display()))?;
            pipeline::convert_svg(document, config)
        }
        Commands::Text { text, file, .. } => {
            let text = match (text, file) {
                (_, Some(path)) => read_block(path, "text")?,
                (Some(text), None) => text.replace("\\n", "\n"),
                (None, None) => String::new(),
            };
            pipeline::convert_text(&text, config)
        }
    };
    Ok(toolpath?)
}

fn write_output(cli: &Cli, toolpath: &Toolpath) -> Result<()> {
    let gcode = toolpath.to_gcode();
    match &cli.output {
        Some(path) => {
            std::fs::write(path, gcode)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(gcode.as_bytes())
                .and_then(|_| stdout.flush())
                .context("Failed to write G-code to stdout")?;
        }
    }
    Ok(())
}

fn report_failure(err: &anyhow::Error) {
    if let Some(ConversionError::EmptyGeometry(report)) = err.downcast_ref::<ConversionError>() {
        for hint in report.remediation_hints() {
            eprintln!("hint: {}", hint);
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let toolpath = convert(cli, &config)?;
    write_output(cli, &toolpath)?;
    eprintln!("{}", toolpath.summary());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    plotkit::init_logging_with_level(level)?;
    info!("PlotKit {} (built {})", plotkit::VERSION, plotkit::BUILD_DATE);

    let result = run(&cli);
    if let Err(err) = &result {
        report_failure(err);
    }
    result
}
