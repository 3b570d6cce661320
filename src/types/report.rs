use crate::types::cluster::{ClusterId, CLUSTER_GROUPS};
use crate::types::grade::{Grade, Points};
use crate::types::subject::SubjectCode;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileStatus {
    Complete,
    MissingMathematics,
}

/// Presentational band for a cluster's final points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    HighlyCompetitive,
    Competitive,
    ModeratelyCompetitive,
    Accessible,
    NotEligible,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::HighlyCompetitive => "Highly Competitive",
            Tier::Competitive => "Competitive",
            Tier::ModeratelyCompetitive => "Moderately Competitive",
            Tier::Accessible => "Accessible",
            Tier::NotEligible => "Not Eligible",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedSubject {
    pub code: SubjectCode,
    pub name: String,
    pub grade: Grade,
    pub points: Points,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniversityMatch {
    pub university: String,
    pub cutoff: f64,
    pub programmes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Degree,
    Diploma,
    Certificate,
    Artisan,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSuggestion {
    pub course: String,
    pub level: CourseLevel,
    pub universities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub profile_note: String,
    pub min_required: Option<f64>,
    pub universities: Vec<UniversityMatch>,
    pub courses: Vec<CourseSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterResult {
    pub cluster_id: ClusterId,
    pub name: String,
    pub group_points: [Points; CLUSTER_GROUPS],
    pub sum_r: u32,
    /// Formula output before standardization.
    pub raw_points: f64,
    /// Reported points: standardized and capped when enabled, else the raw value.
    pub weighted_points: f64,
    pub is_eligible: bool,
    pub missing_core: Vec<String>,
    pub tier: Tier,
    pub weak: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    pub profile_digest: String,
    pub cycle: String,
    pub status: ProfileStatus,
    pub total_points: u32,
    pub mean_grade: Option<Grade>,
    pub selected: Vec<SelectedSubject>,
    pub clusters: Vec<ClusterResult>,
}

impl PlacementReport {
    pub fn eligible_count(&self) -> usize {
        self.clusters
            .iter()
            .filter(|cluster| cluster.is_eligible)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PlacementReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.error.is_some())
            .count()
    }
}

/// A cluster as listed by the `clusters` command, with subject names
/// resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterListing {
    pub id: ClusterId,
    pub name: String,
    pub groups: Vec<Vec<String>>,
    pub core: Vec<String>,
}
