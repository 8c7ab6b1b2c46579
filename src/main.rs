use clap::{Args, Parser, Subcommand};
use grey_dither::{DitherOptions, GreyPalette};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gbdither::models::AppConfig;
use gbdither::rendering::{png_bit_depth, render_file};

#[derive(Parser)]
#[command(name = "gbdither")]
#[command(about = "Dither images down to a few grey levels, Game Boy style")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither an image file
    Dither(DitherArgs),
    /// List available presets
    Presets {
        /// YAML config file with extra presets
        #[arg(short, long, env = "GBDITHER_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct DitherArgs {
    /// Source image (any format the image crate can decode)
    #[arg(short, long, visible_alias = "input-file")]
    input: PathBuf,

    /// Output file; format is chosen from the extension
    #[arg(short, long, default_value = "output.png")]
    output: PathBuf,

    /// Target preset ("gbc", "square" or one from the config file)
    #[arg(short, long)]
    preset: Option<String>,

    /// Override the preset width
    #[arg(long)]
    width: Option<u32>,

    /// Override the preset height
    #[arg(long)]
    height: Option<u32>,

    /// Grey levels as comma-separated integers (e.g. "0,85,170,255")
    #[arg(long)]
    palette: Option<GreyPalette>,

    /// YAML config file with extra presets
    #[arg(short, long, env = "GBDITHER_CONFIG")]
    config: Option<PathBuf>,

    /// Quantize anti-diagonals in parallel (same output, more threads)
    #[arg(long)]
    wavefront: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gbdither=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Dither(args)) => run_dither_command(args),
        Some(Commands::Presets { config }) => run_presets_command(config.as_deref()),
        None => {
            println!("gbdither: no command given.");
            println!("Run `gbdither dither --input <image>` to dither an image,");
            println!("or `gbdither --help` for all options.");
            Ok(())
        }
    }
}

fn input_line(path: &Path) -> String {
    format!("Input file             : [{}]", path.display())
}

fn output_line(path: &Path) -> String {
    format!("Writing output to file : [{}]", path.display())
}

/// Load, dither and write a single image
fn run_dither_command(args: DitherArgs) -> anyhow::Result<()> {
    let config = AppConfig::load_optional(args.config.as_deref());
    let preset_name = args
        .preset
        .as_deref()
        .unwrap_or_else(|| config.default_preset_name());
    let target = config
        .preset(preset_name)?
        .with_overrides(args.width, args.height, args.palette);

    println!("{}", input_line(&args.input));

    let options = DitherOptions::new().wavefront(args.wavefront);
    let report = render_file(&args.input, &args.output, &target, options)?;

    println!("{}", output_line(&args.output));
    tracing::info!(
        preset = preset_name,
        width = report.width,
        height = report.height,
        bytes = report.bytes,
        histogram = ?report.histogram,
        "Done"
    );

    Ok(())
}

/// Print built-in and configured presets
fn run_presets_command(config: Option<&Path>) -> anyhow::Result<()> {
    let config = AppConfig::load_optional(config);

    for name in config.preset_names() {
        let target = config.preset(&name)?;
        let marker = if name == config.default_preset_name() {
            " (default)"
        } else {
            ""
        };
        println!(
            "{name}{marker}: {}x{} levels {:?} ({}-bit png)",
            target.width,
            target.height,
            target.palette.levels(),
            png_bit_depth(&target.palette)
        );
    }

    Ok(())
}
