use crate::error::ClusterPointsError;
use crate::types::cluster::{ClusterDefinition, ClusterId};
use crate::types::report::CourseLevel;
use crate::types::subject::Subject;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// One placement cycle's settings and reference data, as read from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CycleConfig {
    pub cycle: Option<CycleSection>,
    pub scoring: Option<ScoringConfig>,
    pub standardization: Option<StandardizationConfig>,
    pub tiers: Option<TierConfig>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub clusters: Vec<ClusterDefinition>,
    #[serde(default)]
    pub cutoffs: Vec<ClusterCutoffs>,
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CycleSection {
    pub name: Option<String>,
}

/// Which grades a cluster group may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBasis {
    /// Every subject the student reported.
    #[default]
    Reported,
    /// Only the seven subjects counted toward the aggregate.
    Selected,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub group_basis: Option<GroupBasis>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StandardizationConfig {
    pub enabled: Option<bool>,
    pub min_factor: Option<f64>,
    pub max_factor: Option<f64>,
    /// Per-cluster ceilings keyed by cluster id.
    pub caps: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TierConfig {
    pub highly_competitive: Option<f64>,
    pub competitive: Option<f64>,
    pub moderately_competitive: Option<f64>,
    pub weak: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClusterCutoffs {
    pub cluster_id: ClusterId,
    pub min_required: Option<f64>,
    #[serde(default)]
    pub universities: Vec<UniversityCutoff>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UniversityCutoff {
    pub name: String,
    pub cutoff: f64,
    #[serde(default = "default_programmes")]
    pub programmes: u32,
}

fn default_programmes() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseEntry {
    pub cluster_id: ClusterId,
    pub course: String,
    #[serde(default)]
    pub universities: Vec<String>,
    pub level: Option<CourseLevel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StandardizationPolicy {
    pub enabled: bool,
    pub min_factor: f64,
    pub max_factor: f64,
    pub caps: BTreeMap<ClusterId, f64>,
}

impl Default for StandardizationPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            min_factor: 0.82,
            max_factor: 0.95,
            caps: BTreeMap::from([(1, 44.0), (5, 44.0), (13, 44.0)]),
        }
    }
}

impl StandardizationPolicy {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    pub highly_competitive: f64,
    pub competitive: f64,
    pub moderately_competitive: f64,
    pub weak: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            highly_competitive: 42.0,
            competitive: 38.0,
            moderately_competitive: 30.0,
            weak: 30.0,
        }
    }
}

pub const DEFAULT_CYCLE_NAME: &str = "KUCCPS 2025";

impl CycleConfig {
    pub fn cycle_name(&self) -> String {
        self.cycle
            .as_ref()
            .and_then(|cycle| cycle.name.clone())
            .unwrap_or_else(|| DEFAULT_CYCLE_NAME.to_string())
    }

    pub fn group_basis(&self) -> GroupBasis {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.group_basis)
            .unwrap_or_default()
    }

    pub fn standardization(&self) -> Result<StandardizationPolicy, ClusterPointsError> {
        let defaults = StandardizationPolicy::default();
        let Some(section) = &self.standardization else {
            return Ok(defaults);
        };

        let caps = match &section.caps {
            Some(caps) => caps
                .iter()
                .map(|(key, cap)| {
                    key.trim()
                        .parse::<ClusterId>()
                        .map(|id| (id, *cap))
                        .map_err(|_| {
                            ClusterPointsError::ConfigParse(format!(
                                "standardization.caps key is not a cluster id: {key}"
                            ))
                        })
                })
                .collect::<Result<BTreeMap<_, _>, _>>()?,
            None => defaults.caps,
        };

        Ok(StandardizationPolicy {
            enabled: section.enabled.unwrap_or(defaults.enabled),
            min_factor: section.min_factor.unwrap_or(defaults.min_factor),
            max_factor: section.max_factor.unwrap_or(defaults.max_factor),
            caps,
        })
    }

    pub fn tiers(&self) -> TierThresholds {
        let defaults = TierThresholds::default();
        match &self.tiers {
            Some(tiers) => TierThresholds {
                highly_competitive: tiers
                    .highly_competitive
                    .unwrap_or(defaults.highly_competitive),
                competitive: tiers.competitive.unwrap_or(defaults.competitive),
                moderately_competitive: tiers
                    .moderately_competitive
                    .unwrap_or(defaults.moderately_competitive),
                weak: tiers.weak.unwrap_or(defaults.weak),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), ClusterPointsError> {
        let standardization = self.standardization()?;
        for (name, factor) in [
            ("min_factor", standardization.min_factor),
            ("max_factor", standardization.max_factor),
        ] {
            if !(factor > 0.0 && factor < 1.0) {
                return Err(ClusterPointsError::ConfigParse(format!(
                    "standardization.{name} must be in (0.0, 1.0) (found {factor})"
                )));
            }
        }
        if standardization.min_factor > standardization.max_factor {
            return Err(ClusterPointsError::ConfigParse(
                "standardization.min_factor cannot exceed max_factor".to_string(),
            ));
        }
        for (id, cap) in &standardization.caps {
            if !(*cap > 0.0 && *cap < 48.0) {
                return Err(ClusterPointsError::ConfigParse(format!(
                    "standardization.caps.{id} must be between 0.0 and 48.0 exclusive (found {cap})"
                )));
            }
        }

        let tiers = self.tiers();
        if !(tiers.highly_competitive >= tiers.competitive
            && tiers.competitive >= tiers.moderately_competitive
            && tiers.moderately_competitive >= 0.0)
        {
            return Err(ClusterPointsError::ConfigParse(
                "tiers must descend: highly_competitive >= competitive >= moderately_competitive >= 0"
                    .to_string(),
            ));
        }
        if tiers.weak < 0.0 {
            return Err(ClusterPointsError::ConfigParse(
                "tiers.weak must not be negative".to_string(),
            ));
        }

        let mut cluster_ids = HashSet::new();
        for cluster in &self.clusters {
            if !cluster_ids.insert(cluster.id) {
                return Err(ClusterPointsError::ConfigParse(format!(
                    "clusters contains duplicate id: {}",
                    cluster.id
                )));
            }
        }

        let mut subject_codes = HashSet::new();
        for subject in &self.subjects {
            if !subject_codes.insert(subject.code.clone()) {
                return Err(ClusterPointsError::ConfigParse(format!(
                    "subjects contains duplicate code: {}",
                    subject.code
                )));
            }
        }

        for cutoffs in &self.cutoffs {
            for university in &cutoffs.universities {
                if !(0.0..=48.0).contains(&university.cutoff) {
                    return Err(ClusterPointsError::ConfigParse(format!(
                        "cutoff for {} in cluster {} must be between 0.0 and 48.0",
                        university.name, cutoffs.cluster_id
                    )));
                }
            }
        }

        Ok(())
    }
}
