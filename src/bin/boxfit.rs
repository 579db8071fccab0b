use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boxfit::{FilterType, FitMode, Quality, ResizeError, ResizePipeline, ResizeRequest, Surface};

#[derive(Parser, Debug)]
#[command(name = "boxfit", version)]
#[command(about = "Resize an image into a box using a fit mode")]
struct Cli {
    /// Input image (JPEG or PNG).
    input: PathBuf,

    /// Output image; the format comes from the extension (.jpg, .jpeg, .png, .gif).
    output: PathBuf,

    /// Target box width in pixels.
    #[arg(long)]
    width: u32,

    /// Target box height in pixels.
    #[arg(long)]
    height: u32,

    /// Fit mode: exact, portrait, landscape, auto, crop. Anything else means exact.
    #[arg(long, default_value = "auto")]
    mode: String,

    /// Output quality, 0-100.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(0..=100))]
    quality: u8,

    /// Resampling filter.
    #[arg(long, value_enum, default_value_t = FilterChoice::Triangle)]
    filter: FilterChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FilterChoice {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<FilterChoice> for FilterType {
    fn from(choice: FilterChoice) -> Self {
        match choice {
            FilterChoice::Nearest => FilterType::Nearest,
            FilterChoice::Triangle => FilterType::Triangle,
            FilterChoice::CatmullRom => FilterType::CatmullRom,
            FilterChoice::Gaussian => FilterType::Gaussian,
            FilterChoice::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boxfit=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let mode = FitMode::from_name(&cli.mode).unwrap_or_else(|| {
        tracing::warn!(mode = %cli.mode, "unrecognized fit mode; using exact");
        FitMode::Exact
    });
    let request = ResizeRequest::new(cli.width, cli.height, mode).map_err(ResizeError::from)?;

    let source = Surface::open(&cli.input)
        .with_context(|| format!("read '{}'", cli.input.display()))?;
    tracing::info!(
        input = %cli.input.display(),
        source = %source.size(),
        target = %request.target(),
        %mode,
        "resizing"
    );

    let pipeline = ResizePipeline::new().filter(cli.filter.into());
    let resized = pipeline.resize(&source, &request).context("resize")?;

    resized
        .save_to_path(&cli.output, Quality::new(cli.quality))
        .with_context(|| format!("write '{}'", cli.output.display()))?;

    Ok(())
}
