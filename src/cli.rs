use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Seismic availability to audio request planner.
#[derive(Parser)]
#[command(
    name = "seisaudio",
    version,
    about = "Plan month-chunked seismic audio requests and label tracks"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the availability and station catalog query URLs.
    Urls(UrlsArgs),
    /// Filter stations from a saved availability response and plan audio requests.
    Plan(PlanArgs),
    /// Split a single interval into month-aligned chunks.
    Segment(SegmentArgs),
}

/// Options shared by commands that read the project config.
#[derive(clap::Args)]
pub struct QueryArgs {
    /// Path to TOML configuration file (defaults to ./seisaudio.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the network code from config.
    #[arg(short, long)]
    pub network: Option<String>,

    /// Override the query year from config.
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Arguments for the `urls` subcommand.
#[derive(clap::Args)]
pub struct UrlsArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

/// Arguments for the `plan` subcommand.
#[derive(clap::Args)]
pub struct PlanArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Path to a saved availability response (JSON).
    #[arg(short, long)]
    pub availability: PathBuf,

    /// Path to a saved station catalog (FDSN text), needed for bounds.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Station code or NET-STA id to keep (repeatable; overrides config).
    #[arg(short, long = "station")]
    pub stations: Vec<String>,

    /// Directory for per-station label and URL files (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `segment` subcommand.
#[derive(clap::Args)]
pub struct SegmentArgs {
    /// Interval start, YYYY-MM-DDTHH:MM:SS.
    pub start: String,

    /// Interval end, YYYY-MM-DDTHH:MM:SS.
    pub end: String,

    /// Reference year for linear seconds (defaults to the start year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Per-request ceiling in days (at least 31).
    #[arg(long, default_value_t = 31.0)]
    pub max_days: f64,
}
