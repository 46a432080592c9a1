use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sunfade", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scroll blend across a scroll range, one JSON object per line.
    Curve(CurveArgs),
    /// Simulate the loader gate and intro on a virtual clock.
    Timeline(TimelineArgs),
    /// Print the default configuration, or validate a configuration file.
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
struct CurveArgs {
    /// Scrollable height in pixels (document height minus viewport height).
    #[arg(long)]
    height: f64,

    /// Number of intervals to sample; `steps + 1` lines are printed.
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Configuration JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Settle time of one background image: `<ms>`, `<ms>!` (load error) or `never`.
    /// Repeat for each image.
    #[arg(long = "image-ms")]
    images: Vec<sunfade::ImageTiming>,

    /// Configuration JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Validate this file instead of printing the defaults.
    #[arg(long)]
    check: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Curve(args) => cmd_curve(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn read_config(path: &Path) -> anyhow::Result<sunfade::SunfadeConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    sunfade::SunfadeConfig::from_json(&s)
        .with_context(|| format!("load config '{}'", path.display()))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<sunfade::SunfadeConfig> {
    match path {
        Some(path) => read_config(path),
        None => Ok(sunfade::SunfadeConfig::default()),
    }
}

fn cmd_curve(args: CurveArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    if !args.height.is_finite() || args.height <= 0.0 {
        anyhow::bail!("--height must be a finite number > 0");
    }

    let samples = sunfade::sample_curve(&config, args.height, args.steps);
    let mut out = std::io::stdout().lock();
    for sample in &samples {
        serde_json::to_writer(&mut out, sample).context("serialize curve sample")?;
        writeln!(out).context("write stdout")?;
    }
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let timeline = sunfade::simulate_timeline(&config, &args.images);

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &timeline).context("serialize timeline")?;
    writeln!(out).context("write stdout")?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    match args.check {
        Some(path) => {
            read_config(&path)?;
            eprintln!("ok {}", path.display());
        }
        None => {
            let json = sunfade::SunfadeConfig::default().to_json_pretty()?;
            println!("{json}");
        }
    }
    Ok(())
}
