use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use retint::models::{
    palette_entries, AppConfig, ConfigOverrides, ModeName, ReportSummary, CONFIG_ENV,
};
use retint::services::{write_default_config, RemapService, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "retint")]
#[command(about = "Recolor PNG artwork onto a fixed palette")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a PNG onto the configured palette
    Map {
        /// Input PNG file
        input: PathBuf,

        /// Output PNG file (default: timestamped file next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (default: $RETINT_CONFIG, then built-in defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        overrides: OverrideArgs,
    },
    /// Report what mapping would do, without writing anything
    Analyze {
        /// Input PNG file
        input: PathBuf,

        /// Config file (default: $RETINT_CONFIG, then built-in defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        overrides: OverrideArgs,
    },
    /// Write the default configuration file
    Init {
        /// Destination path
        #[arg(default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
    /// List palette entries with their luminance and HSL values
    Palette {
        /// Config file (default: $RETINT_CONFIG, then built-in defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Palette as comma-separated hex RGB (e.g. "#000000,#FFFFFF,#FF0000")
        #[arg(long, value_delimiter = ',')]
        palette: Option<Vec<String>>,
    },
}

/// Values that take precedence over the config file
#[derive(Args, Debug, Default)]
struct OverrideArgs {
    /// Matching mode
    #[arg(short, long, value_enum)]
    mode: Option<ModeName>,

    /// Palette as comma-separated hex RGB (e.g. "#000000,#FFFFFF,#FF0000")
    #[arg(long, value_delimiter = ',')]
    palette: Option<Vec<String>>,

    /// Stretch the luminance range before matching
    #[arg(long, conflicts_with = "no_stretch")]
    stretch: bool,

    /// Disable the contrast stretch even if the config enables it
    #[arg(long)]
    no_stretch: bool,

    /// Leave pixels with r + g + b below this value untouched
    #[arg(long)]
    black_threshold: Option<u16>,

    /// Leave pixels with alpha below this value untouched
    #[arg(long)]
    alpha_threshold: Option<u8>,
}

impl From<OverrideArgs> for ConfigOverrides {
    fn from(args: OverrideArgs) -> Self {
        let contrast_stretch = match (args.stretch, args.no_stretch) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        Self {
            mode: args.mode,
            palette: args.palette,
            contrast_stretch,
            black_threshold: args.black_threshold,
            alpha_threshold: args.alpha_threshold,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Map {
            input,
            output,
            config,
            overrides,
        }) => run_map_command(&input, output.as_deref(), config.as_deref(), overrides.into()),
        Some(Commands::Analyze {
            input,
            config,
            json,
            overrides,
        }) => run_analyze_command(&input, config.as_deref(), json, overrides.into()),
        Some(Commands::Init { path, force }) => run_init_command(&path, force),
        Some(Commands::Palette { config, palette }) => {
            let overrides = ConfigOverrides {
                palette,
                ..ConfigOverrides::default()
            };
            run_palette_command(config.as_deref(), overrides)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "retint=info,palette_map=info".into()),
        1 => "retint=debug,palette_map=debug".into(),
        _ => "retint=trace,palette_map=trace".into(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn load_config(path: Option<&Path>, overrides: ConfigOverrides) -> anyhow::Result<AppConfig> {
    AppConfig::resolve(path, &overrides).context("Failed to load configuration")
}

fn run_map_command(
    input: &Path,
    output: Option<&Path>,
    config: Option<&Path>,
    overrides: ConfigOverrides,
) -> anyhow::Result<()> {
    let config = load_config(config, overrides)?;
    let service = RemapService::new(config)?;

    let outcome = service
        .remap_file(input, output)
        .with_context(|| format!("Failed to map {}", input.display()))?;

    println!(
        "Mapped {} -> {} ({} of {} pixels, {} mode)",
        input.display(),
        outcome.output.display(),
        outcome.report.mapped,
        outcome.report.total,
        outcome.report.mode
    );
    Ok(())
}

fn run_analyze_command(
    input: &Path,
    config: Option<&Path>,
    json: bool,
    overrides: ConfigOverrides,
) -> anyhow::Result<()> {
    let config = load_config(config, overrides)?;
    let service = RemapService::new(config)?;

    let report = service
        .analyze_file(input)
        .with_context(|| format!("Failed to analyze {}", input.display()))?;
    let summary = ReportSummary::from(&report);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", input.display());
    println!("  Mode:          {}", summary.mode);
    println!("  Palette:       {} colors", summary.palette_size);
    println!(
        "  Pixels:        {} total, {} mapped, {} skipped",
        summary.total, summary.mapped, summary.skipped
    );
    println!(
        "  Luminance:     {:.1} - {:.1}",
        summary.initial_range.min, summary.initial_range.max
    );
    if summary.stretched > 0 {
        println!(
            "  Stretched:     {} pixels -> {:.1} - {:.1}",
            summary.stretched, summary.final_range.min, summary.final_range.max
        );
    }
    println!(
        "  Palette range: {:.1} - {:.1}",
        summary.palette_range.min, summary.palette_range.max
    );

    if let Some(segments) = &summary.quantile {
        println!("\nLuminance bands:");
        for (i, segment) in segments.iter().enumerate() {
            println!("  {:>2}. <= {:>6.1}  {}", i + 1, segment.threshold, segment.color);
        }
    }
    Ok(())
}

fn run_init_command(path: &Path, force: bool) -> anyhow::Result<()> {
    write_default_config(path, force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_palette_command(config: Option<&Path>, overrides: ConfigOverrides) -> anyhow::Result<()> {
    let config = load_config(config, overrides)?;
    let palette = config.palette()?;

    println!("  #  Color    Luminance  Norm   Hue    Light  Sat");
    for entry in palette_entries(&palette) {
        println!(
            "{:>3}  {}  {:>9.2}  {:.3}  {:.3}  {:.3}  {:.3}",
            entry.index,
            entry.color,
            entry.luminance,
            entry.normalized_luminance,
            entry.hue,
            entry.lightness,
            entry.saturation
        );
    }
    Ok(())
}

/// Show version, configuration source and available commands
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Retint v{VERSION}");
    println!("Recolor PNG artwork onto a fixed palette\n");

    println!("Environment Variables:");
    println!(
        "  {CONFIG_ENV:<14} {}",
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| "(not set, using defaults)".to_string())
    );
    println!(
        "  {:<14} {}",
        "RUST_LOG",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "(not set)".to_string())
    );

    println!("\nCommands:");
    println!("  retint map       Map a PNG onto the palette");
    println!("  retint analyze   Report luminance ranges and bands");
    println!("  retint init      Write the default config file");
    println!("  retint palette   List palette entries");
    println!("\nRun 'retint --help' for more details.");
}
