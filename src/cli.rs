use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cluster-points",
    version,
    about = "KUCCPS weighted cluster points calculator"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Cycle configuration file (TOML), layered over the global config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one grade sheet
    Score(ScoreCommand),
    /// Score every grade sheet below a directory
    Batch(BatchCommand),
    /// List cluster definitions
    Clusters(ListCommand),
    /// List the subject catalog
    Subjects(ListCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Grade sheet (.json or .toml)
    #[arg(required_unless_present = "grades", conflicts_with = "grades")]
    pub file: Option<PathBuf>,

    /// Grade as code=GRADE, repeatable
    #[arg(short, long = "grade", value_name = "CODE=GRADE")]
    pub grades: Vec<String>,

    /// Student identifier for --grade input
    #[arg(long, requires = "grades")]
    pub student_id: Option<String>,

    /// Report only this cluster
    #[arg(long)]
    pub cluster: Option<u8>,

    /// Report raw formula points without standardization
    #[arg(long)]
    pub raw: bool,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BatchCommand {
    pub dir: PathBuf,

    #[arg(long)]
    pub raw: bool,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ListCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
