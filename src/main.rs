use anyhow::Context;
use clap::Parser;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use braille_core::{ColorMethod, ThresholdMethod};
use braillify::models::{AppConfig, ConfigOverrides};
use braillify::services::ConversionPipeline;

#[derive(Parser)]
#[command(name = "braillify")]
#[command(version, about = "Render an image as Unicode Braille text")]
struct Cli {
    /// Input image path, or "-" to read encoded image bytes from stdin
    input: PathBuf,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Inclusion tolerance in range [0.0, 1.0]
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Brightness metric: luminance, lightness, average, value, weighted (or first letter)
    #[arg(short, long)]
    method: Option<ThresholdMethod>,

    /// Output coloring: none, four_bit_ansi (4bit), eight_bit_ansi (8bit),
    /// true_color_ansi (truecolor), html
    #[arg(short, long)]
    color: Option<ColorMethod>,

    /// Invert the inclusion decision
    #[arg(short, long)]
    invert: bool,

    /// Character limit, line separators included
    #[arg(short, long)]
    limit: Option<u64>,

    /// YAML configuration file (defaults to $BRAILLIFY_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the art
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "braillify=warn,braille_core=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut config = AppConfig::load(cli.config.as_deref());
    config.apply(&ConfigOverrides {
        tolerance: cli.tolerance,
        invert: cli.invert,
        threshold_method: cli.method,
        color_method: cli.color,
        limit: cli.limit,
    });

    let mut pipeline = ConversionPipeline::new(config)?;

    let result = if cli.input == Path::new("-") {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .context("Failed to read image from stdin")?;
        pipeline.convert_bytes(&bytes)?
    } else {
        pipeline
            .convert_path(&cli.input)
            .with_context(|| format!("Failed to convert {}", cli.input.display()))?
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &result.text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", result.text).context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}
