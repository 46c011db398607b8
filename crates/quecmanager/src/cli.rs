//! Clap derive structures for the `quecmanager` CLI.
//!
//! Defines the command tree, global flags, and argument enums. Kept free of
//! workspace crates so `build.rs` can compile it for man page generation.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// quecmanager -- signal, distance and data-usage tools for QuecManager routers
#[derive(Debug, Parser)]
#[command(
    name = "quecmanager",
    version,
    about = "Signal, distance and data-usage tools for QuecManager cellular routers",
    long_about = "Normalizes signal readings, estimates distance to the serving cell from\n\
        timing advance, and evaluates monthly data-usage warnings.\n\n\
        Offline commands work on values you pass in; `usage status` and\n\
        `usage dismiss` talk to the device's CGI endpoints.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Device profile to use
    #[arg(long, short = 'p', env = "QUECMANAGER_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Device URL (overrides profile)
    #[arg(long, short = 'd', env = "QUECMANAGER_DEVICE", global = true)]
    pub device: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "QUECMANAGER_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "QUECMANAGER_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "QUECMANAGER_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize an RSRP/RSRQ/SINR reading to a percentage
    #[command(alias = "sig")]
    Signal(SignalArgs),

    /// Estimate distance to the serving cell from timing advance
    #[command(alias = "ta")]
    Distance(DistanceArgs),

    /// Format byte counts for humans
    Bytes(BytesArgs),

    /// Evaluate and manage the monthly data-usage warning
    Usage(UsageArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Signal ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MetricArg {
    /// Reference signal received power (dBm)
    Rsrp,
    /// Reference signal received quality (dB)
    Rsrq,
    /// Signal to interference plus noise ratio (dB)
    Sinr,
}

#[derive(Debug, Args)]
pub struct SignalArgs {
    /// Metric the value belongs to
    #[arg(value_enum)]
    pub metric: MetricArg,

    /// Raw reading (dBm or dB)
    #[arg(allow_negative_numbers = true)]
    pub value: i32,
}

// ── Distance ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RadioArg {
    /// LTE timing-advance index (0-1282)
    Lte,
    /// NR NTA value
    Nr,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UnitArg {
    /// Kilometers / meters
    Km,
    /// Miles / feet
    Mi,
}

#[derive(Debug, Args)]
pub struct DistanceArgs {
    /// Radio the timing advance was reported for
    #[arg(long, short = 'r', value_enum, default_value = "lte")]
    pub radio: RadioArg,

    /// Raw timing advance
    #[arg(allow_negative_numbers = true)]
    pub raw: i64,

    /// Display unit (defaults to the device preference, else km)
    #[arg(long, short = 'u', value_enum)]
    pub unit: Option<UnitArg>,
}

// ── Bytes ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BytesArgs {
    /// Byte counts to format
    #[arg(required = true)]
    pub bytes: Vec<u64>,
}

// ── Usage ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct UsageArgs {
    #[command(subcommand)]
    pub command: UsageCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsageCommand {
    /// Evaluate a warning from values given on the command line
    Evaluate {
        /// Bytes used so far this cycle
        #[arg(long)]
        total: u64,

        /// Monthly limit in bytes
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        limit: u64,

        /// Warning threshold as a percentage of the limit
        #[arg(long, default_value = "90", value_parser = clap::value_parser!(u8).range(0..=100))]
        threshold: u8,

        /// Treat the warning as disabled
        #[arg(long)]
        disabled: bool,

        /// Treat the warning as already shown this cycle
        #[arg(long)]
        already_shown: bool,
    },

    /// Fetch counters and warning settings from the device
    Status,

    /// Mark the current warning as shown on the device
    Dismiss,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or update a profile in the config file
    Init {
        /// Device URL, e.g. https://192.168.224.1
        #[arg(long)]
        device: String,

        /// Profile name
        #[arg(long, default_value = "default")]
        name: String,

        /// Make this the default profile
        #[arg(long)]
        set_default: bool,
    },

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
