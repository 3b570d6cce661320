mod cli;

use clap::Parser;
use cluster_points::engine::ScoringEngine;
use cluster_points::error::ClusterPointsError;
use cluster_points::types::report::{BatchEntry, BatchReport, ProfileStatus};
use cluster_points::{config, input, report, telemetry};
use tracing::{info, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, ClusterPointsError> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet)?;

    let loaded = config::load_config(cli.config.as_deref())?;
    let engine = ScoringEngine::from_config(&loaded)?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let engine = if cmd.raw {
                engine.with_standardization(false)
            } else {
                engine
            };
            let sheet = match &cmd.file {
                Some(path) => input::read_sheet(path)?,
                None => input::sheet_from_args(cmd.student_id.clone(), &cmd.grades)?,
            };

            let placement = match cmd.cluster {
                Some(id) => engine.evaluate_only(&sheet, id)?,
                None => engine.evaluate(&sheet),
            };
            let rendered = report::render(&placement, output_format(&cmd.format))?;
            println!("{rendered}");

            if placement.status == ProfileStatus::MissingMathematics {
                eprintln!("warning: Mathematics not reported; no cluster is eligible");
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Batch(cmd) => {
            let engine = if cmd.raw {
                engine.with_standardization(false)
            } else {
                engine
            };
            let paths = input::discover_sheets(&cmd.dir)?;
            info!(dir = %cmd.dir.display(), sheets = paths.len(), "batch started");

            let entries = paths
                .into_iter()
                .map(|path| match input::read_sheet(&path) {
                    Ok(sheet) => BatchEntry {
                        report: Some(engine.evaluate(&sheet)),
                        error: None,
                        path,
                    },
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "grade sheet skipped");
                        BatchEntry {
                            report: None,
                            error: Some(e.to_string()),
                            path,
                        }
                    }
                })
                .collect::<Vec<_>>();
            let batch = BatchReport { entries };

            let rendered = report::render_batch(&batch, output_format(&cmd.format))?;
            println!("{rendered}");

            let incomplete = batch
                .entries
                .iter()
                .filter_map(|entry| entry.report.as_ref())
                .any(|placement| placement.status == ProfileStatus::MissingMathematics);
            if batch.entries.is_empty() {
                eprintln!("warning: no grade sheets found in {}", cmd.dir.display());
                Ok(exit_code::WARNINGS)
            } else if batch.failed() > 0 || incomplete {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Clusters(cmd) => {
            let listings = engine.reference().cluster_listings();
            println!(
                "{}",
                report::render_clusters(&listings, output_format(&cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Subjects(cmd) => {
            println!(
                "{}",
                report::render_subjects(engine.reference().subjects(), output_format(&cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
