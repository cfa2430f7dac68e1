use clap::{Args, Parser, Subcommand, ValueEnum};
use meltpoint::core::models::result::AggregationPolicy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Meltpoint Developers",
    version,
    about = "Meltpoint CLI - Nearest-neighbor melting and annealing temperatures for PCR primers, with IUPAC degenerate-base support.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Number of worker threads for batch calculations.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate Tm and the recommended annealing temperature of a single primer.
    Calc(CalcArgs),
    /// Calculate Tm for every primer in a TSV or CSV file.
    Batch(BatchArgs),
    /// List the polymerases known by name.
    Polymerases,
    /// Print the empty `Name`/`Sequence`/`Notes` input table for `batch`.
    Template(TemplateArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Reaction condition overrides shared by every calculating subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct ConditionArgs {
    /// Primer concentration in µM.
    #[arg(long, value_name = "UM")]
    pub primer_conc: Option<f64>,

    /// Monovalent salt (Na⁺/K⁺) concentration in mM.
    #[arg(long, value_name = "MM")]
    pub salt_conc: Option<f64>,

    /// Mg²⁺ concentration in mM.
    #[arg(long, value_name = "MM")]
    pub mg_conc: Option<f64>,

    /// Total dNTP concentration in mM.
    #[arg(long, value_name = "MM")]
    pub dntp_conc: Option<f64>,

    /// Polymerase name. Unknown names are kept as a custom polymerase.
    #[arg(long, value_name = "NAME")]
    pub polymerase: Option<String>,
}

/// Engine parameter overrides shared by every calculating subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// How per-variant Tm values of a degenerate primer are combined.
    #[arg(long, value_name = "POLICY")]
    pub aggregation: Option<AggregationPolicy>,

    /// Largest number of concrete variants a degenerate primer may expand into.
    #[arg(long, value_name = "INT")]
    pub expansion_cap: Option<usize>,

    /// Degrees subtracted from Tm to give the recommended annealing temperature.
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub annealing_offset: Option<f64>,
}

/// Arguments for the `calc` subcommand.
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Primer sequence, 5'→3'. IUPAC degenerate codes are accepted.
    #[arg(required = true, value_name = "SEQUENCE")]
    pub sequence: String,

    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub conditions: ConditionArgs,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input table with `Name`, `Sequence` and optional `Notes` columns.
    /// Tab-separated unless the extension is `.csv`.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write results here instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a TOML configuration file.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub conditions: ConditionArgs,

    #[command(flatten)]
    pub engine: EngineArgs,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `template` subcommand.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Write the template here instead of standard output. A `.csv` extension selects commas.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
