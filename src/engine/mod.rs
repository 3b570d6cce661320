pub mod policy;
pub mod scorer;
pub mod selector;

use crate::error::{ClusterPointsError, Result};
use crate::recommend;
use crate::reference::ReferenceData;
use crate::types::cluster::{ClusterDefinition, ClusterId};
use crate::types::config::{CycleConfig, GroupBasis};
use crate::types::report::{ClusterResult, PlacementReport, ProfileStatus, SelectedSubject};
use crate::types::subject::GradeSheet;
use policy::EligibilityPolicy;
use selector::SelectionResult;
use std::cmp::Ordering;
use tracing::{debug, info, warn};

/// Scores grade sheets against one cycle's reference data. Holds no mutable
/// state, so one engine can serve any number of sheets or threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    reference: ReferenceData,
    policy: EligibilityPolicy,
    basis: GroupBasis,
}

impl ScoringEngine {
    pub fn new(reference: ReferenceData, policy: EligibilityPolicy, basis: GroupBasis) -> Self {
        Self {
            reference,
            policy,
            basis,
        }
    }

    pub fn builtin() -> Self {
        Self::new(
            ReferenceData::builtin(),
            EligibilityPolicy::default(),
            GroupBasis::default(),
        )
    }

    pub fn from_config(config: &CycleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            ReferenceData::from_config(config),
            EligibilityPolicy::new(config.standardization()?, config.tiers()),
            config.group_basis(),
        ))
    }

    /// Turns standardization on or off, keeping caps and factors.
    pub fn with_standardization(mut self, enabled: bool) -> Self {
        self.policy.standardization.enabled = enabled;
        self
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn select(&self, sheet: &GradeSheet) -> SelectionResult {
        selector::select(sheet)
    }

    /// Scores and evaluates a single cluster by id.
    pub fn evaluate_cluster(&self, sheet: &GradeSheet, cluster: ClusterId) -> Result<ClusterResult> {
        let definition = self
            .reference
            .cluster(cluster)
            .ok_or(ClusterPointsError::UnknownCluster(cluster))?;
        let selection = self.select(sheet);
        Ok(self.cluster_result(&selection, sheet, definition))
    }

    /// Full report over every cluster in the cycle, best prospects first.
    pub fn evaluate(&self, sheet: &GradeSheet) -> PlacementReport {
        let selection = self.select(sheet);
        if !selection.is_complete() {
            warn!(
                student = sheet.student_id.as_deref().unwrap_or("-"),
                "no Mathematics grade; every cluster is ineligible"
            );
        }

        let mut clusters = self
            .reference
            .clusters()
            .iter()
            .map(|definition| self.cluster_result(&selection, sheet, definition))
            .collect::<Vec<_>>();
        clusters.sort_by(rank);

        let report = self.report(sheet, &selection, clusters);
        info!(
            student = sheet.student_id.as_deref().unwrap_or("-"),
            total_points = report.total_points,
            eligible = report.eligible_count(),
            "grade sheet scored"
        );
        report
    }

    /// Like [`ScoringEngine::evaluate`], but reporting a single cluster.
    pub fn evaluate_only(&self, sheet: &GradeSheet, cluster: ClusterId) -> Result<PlacementReport> {
        let result = self.evaluate_cluster(sheet, cluster)?;
        let selection = self.select(sheet);
        Ok(self.report(sheet, &selection, vec![result]))
    }

    fn cluster_result(
        &self,
        selection: &SelectionResult,
        sheet: &GradeSheet,
        definition: &ClusterDefinition,
    ) -> ClusterResult {
        let score = scorer::score(selection, sheet, definition, self.basis);
        let evaluation = self.policy.evaluate(&score, &self.reference);
        debug!(
            cluster = definition.id,
            sum_r = score.sum_r,
            raw = evaluation.raw_points,
            reported = evaluation.final_points,
            eligible = evaluation.is_eligible,
            "cluster scored"
        );

        let recommendations = if evaluation.is_eligible {
            recommend::recommend(
                &self.reference,
                definition.id,
                evaluation.final_points,
                selection.total_points,
            )
        } else {
            None
        };

        ClusterResult {
            cluster_id: definition.id,
            name: definition.name.clone(),
            group_points: score.group_points,
            sum_r: score.sum_r,
            raw_points: evaluation.raw_points,
            weighted_points: evaluation.final_points,
            is_eligible: evaluation.is_eligible,
            missing_core: evaluation.missing_core,
            tier: evaluation.tier,
            weak: evaluation.weak,
            recommendations,
        }
    }

    fn report(
        &self,
        sheet: &GradeSheet,
        selection: &SelectionResult,
        clusters: Vec<ClusterResult>,
    ) -> PlacementReport {
        PlacementReport {
            student_id: sheet.student_id.clone(),
            profile_digest: sheet.digest(),
            cycle: self.reference.cycle.clone(),
            status: if selection.is_complete() {
                ProfileStatus::Complete
            } else {
                ProfileStatus::MissingMathematics
            },
            total_points: selection.total_points,
            mean_grade: selection.mean_grade,
            selected: selection
                .selected
                .iter()
                .map(|record| SelectedSubject {
                    code: record.code.clone(),
                    name: self.reference.display_name(&record.code),
                    grade: record.grade,
                    points: record.points(),
                })
                .collect(),
            clusters,
        }
    }
}

/// Eligible clusters first, then by reported points, then by id.
fn rank(a: &ClusterResult, b: &ClusterResult) -> Ordering {
    b.is_eligible
        .cmp(&a.is_eligible)
        .then_with(|| b.weighted_points.total_cmp(&a.weighted_points))
        .then_with(|| a.cluster_id.cmp(&b.cluster_id))
}
