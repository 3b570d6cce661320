use crate::engine::selector::SelectionResult;
use crate::types::cluster::{ClusterDefinition, ClusterId, CLUSTER_GROUPS};
use crate::types::config::GroupBasis;
use crate::types::grade::{Points, MAX_POINTS};
use crate::types::subject::{GradeSheet, SubjectCode};

/// R: best possible sum over a cluster's four groups.
pub const MAX_CLUSTER_SUBJECT_POINTS: u32 = MAX_POINTS as u32 * CLUSTER_GROUPS as u32;
/// T: best possible aggregate over seven subjects.
pub const MAX_AGGREGATE_POINTS: u32 = MAX_POINTS as u32 * 7;
/// Ceiling of the weighted cluster points scale.
pub const WEIGHT_SCALE: f64 = 48.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ClusterScore {
    pub cluster_id: ClusterId,
    pub group_points: [Points; CLUSTER_GROUPS],
    /// r
    pub sum_r: u32,
    /// t
    pub total_points: u32,
    pub weighted_points: f64,
    pub is_eligible: bool,
    /// Core subjects the student never reported.
    pub missing_core: Vec<SubjectCode>,
}

/// `C = sqrt((r / R) * (t / T)) * 48`, rounded to three decimals. Zero when
/// either factor is zero.
pub fn weighted_cluster_points(sum_r: u32, total_points: u32) -> f64 {
    if sum_r == 0 || total_points == 0 {
        return 0.0;
    }
    let ratio = (f64::from(sum_r) / f64::from(MAX_CLUSTER_SUBJECT_POINTS))
        * (f64::from(total_points) / f64::from(MAX_AGGREGATE_POINTS));
    round_points(ratio.sqrt() * WEIGHT_SCALE)
}

pub fn round_points(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Scores one cluster. Group bests come from `basis`; core requirements are
/// always checked against everything the student reported.
pub fn score(
    selection: &SelectionResult,
    sheet: &GradeSheet,
    cluster: &ClusterDefinition,
    basis: GroupBasis,
) -> ClusterScore {
    let points_of = |code: &SubjectCode| match basis {
        GroupBasis::Reported => sheet.points_of(code.as_str()),
        GroupBasis::Selected => selection.points_of(code.as_str()),
    };

    let group_points = cluster.groups.each_ref().map(|group| {
        group
            .members()
            .iter()
            .map(&points_of)
            .max()
            .unwrap_or(0)
    });
    let sum_r = group_points
        .iter()
        .map(|points| u32::from(*points))
        .sum::<u32>();

    let missing_core = cluster
        .core_subjects()
        .filter(|code| sheet.get(code.as_str()).is_none())
        .cloned()
        .collect::<Vec<_>>();

    ClusterScore {
        cluster_id: cluster.id,
        group_points,
        sum_r,
        total_points: selection.total_points,
        weighted_points: weighted_cluster_points(sum_r, selection.total_points),
        is_eligible: selection.is_complete() && missing_core.is_empty(),
        missing_core,
    }
}
