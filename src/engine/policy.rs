use crate::engine::scorer::{
    round_points, ClusterScore, MAX_AGGREGATE_POINTS, MAX_CLUSTER_SUBJECT_POINTS,
};
use crate::reference::ReferenceData;
use crate::types::cluster::ClusterId;
use crate::types::config::{StandardizationPolicy, TierThresholds};
use crate::types::report::Tier;

/// Outcome of applying eligibility and standardization to a cluster score.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterEvaluation {
    pub is_eligible: bool,
    /// Display names of unreported core subjects.
    pub missing_core: Vec<String>,
    pub raw_points: f64,
    pub final_points: f64,
    pub tier: Tier,
    /// Eligible, but below the weak threshold.
    pub weak: bool,
}

/// Eligibility is decided by core subjects alone. Points only inform the tier
/// and the weak flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EligibilityPolicy {
    pub standardization: StandardizationPolicy,
    pub tiers: TierThresholds,
}

impl EligibilityPolicy {
    pub fn new(standardization: StandardizationPolicy, tiers: TierThresholds) -> Self {
        Self {
            standardization,
            tiers,
        }
    }

    pub fn evaluate(&self, score: &ClusterScore, reference: &ReferenceData) -> ClusterEvaluation {
        let final_points = self.standardize(
            score.weighted_points,
            score.total_points,
            score.sum_r,
            score.cluster_id,
        );
        let is_eligible = score.is_eligible;

        ClusterEvaluation {
            is_eligible,
            missing_core: score
                .missing_core
                .iter()
                .map(|code| reference.display_name(code))
                .collect(),
            raw_points: score.weighted_points,
            final_points,
            tier: self.tier(final_points, is_eligible),
            weak: is_eligible && final_points < self.tiers.weak,
        }
    }

    /// Dampens raw points by a factor that grows from `min_factor` to
    /// `max_factor` with profile strength, then applies the cluster's cap.
    /// Depends only on its arguments and the static policy.
    pub fn standardize(&self, raw: f64, total_points: u32, sum_r: u32, cluster: ClusterId) -> f64 {
        let policy = &self.standardization;
        if !policy.enabled || raw <= 0.0 {
            return raw;
        }

        let strength = (f64::from(total_points) / f64::from(MAX_AGGREGATE_POINTS)
            + f64::from(sum_r) / f64::from(MAX_CLUSTER_SUBJECT_POINTS))
            / 2.0;
        let factor = policy.min_factor + (policy.max_factor - policy.min_factor) * strength;
        let dampened = raw * factor;
        let capped = match policy.caps.get(&cluster) {
            Some(cap) => dampened.min(*cap),
            None => dampened,
        };
        round_points(capped)
    }

    pub fn tier(&self, final_points: f64, is_eligible: bool) -> Tier {
        if !is_eligible {
            return Tier::NotEligible;
        }
        let tiers = &self.tiers;
        if final_points >= tiers.highly_competitive {
            Tier::HighlyCompetitive
        } else if final_points >= tiers.competitive {
            Tier::Competitive
        } else if final_points >= tiers.moderately_competitive {
            Tier::ModeratelyCompetitive
        } else {
            Tier::Accessible
        }
    }
}
