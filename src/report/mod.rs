pub mod json;
pub mod md;

use crate::error::ClusterPointsError;
use crate::types::report::{BatchReport, ClusterListing, PlacementReport};
use crate::types::subject::Subject;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &PlacementReport, format: OutputFormat) -> Result<String, ClusterPointsError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ClusterPointsError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_batch(batch: &BatchReport, format: OutputFormat) -> Result<String, ClusterPointsError> {
    match format {
        OutputFormat::Json => json::to_json(batch).map_err(ClusterPointsError::Json),
        OutputFormat::Md => Ok(md::batch_to_markdown(batch)),
    }
}

pub fn render_clusters(
    clusters: &[ClusterListing],
    format: OutputFormat,
) -> Result<String, ClusterPointsError> {
    match format {
        OutputFormat::Json => json::to_json(clusters).map_err(ClusterPointsError::Json),
        OutputFormat::Md => Ok(md::clusters_to_markdown(clusters)),
    }
}

pub fn render_subjects(
    subjects: &[Subject],
    format: OutputFormat,
) -> Result<String, ClusterPointsError> {
    match format {
        OutputFormat::Json => json::to_json(subjects).map_err(ClusterPointsError::Json),
        OutputFormat::Md => Ok(md::subjects_to_markdown(subjects)),
    }
}
