pub mod catalog;

use crate::types::cluster::{ClusterDefinition, ClusterId};
use crate::types::config::{ClusterCutoffs, CourseEntry, CycleConfig};
use crate::types::report::ClusterListing;
use crate::types::subject::{Subject, SubjectCode};
use std::collections::BTreeMap;
use tracing::debug;

/// Reference data for one placement cycle. Loaded once, then only read.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub cycle: String,
    subjects: Vec<Subject>,
    clusters: Vec<ClusterDefinition>,
    cutoffs: BTreeMap<ClusterId, ClusterCutoffs>,
    courses: BTreeMap<ClusterId, Vec<CourseEntry>>,
}

impl ReferenceData {
    pub fn builtin() -> Self {
        Self::from_config(&CycleConfig::default())
    }

    /// Overlays a cycle configuration on the built-in catalog. Configured
    /// subjects replace or extend built-in ones by code; configured clusters
    /// replace the built-in set wholesale.
    pub fn from_config(config: &CycleConfig) -> Self {
        let mut subjects = catalog::subjects();
        for subject in &config.subjects {
            match subjects
                .iter_mut()
                .find(|existing| existing.code == subject.code)
            {
                Some(existing) => *existing = subject.clone(),
                None => subjects.push(subject.clone()),
            }
        }

        let mut clusters = if config.clusters.is_empty() {
            catalog::clusters()
        } else {
            config.clusters.clone()
        };
        clusters.sort_by_key(|cluster| cluster.id);

        let cutoffs = config
            .cutoffs
            .iter()
            .map(|entry| (entry.cluster_id, entry.clone()))
            .collect::<BTreeMap<_, _>>();

        let mut courses: BTreeMap<ClusterId, Vec<CourseEntry>> = BTreeMap::new();
        for course in &config.courses {
            courses
                .entry(course.cluster_id)
                .or_default()
                .push(course.clone());
        }

        let cycle = config.cycle_name();
        debug!(
            %cycle,
            subjects = subjects.len(),
            clusters = clusters.len(),
            cutoff_tables = cutoffs.len(),
            "reference data loaded"
        );

        Self {
            cycle,
            subjects,
            clusters,
            cutoffs,
            courses,
        }
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn clusters(&self) -> &[ClusterDefinition] {
        &self.clusters
    }

    pub fn cluster(&self, id: ClusterId) -> Option<&ClusterDefinition> {
        self.clusters.iter().find(|cluster| cluster.id == id)
    }

    pub fn subject(&self, code: &SubjectCode) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.code == *code)
    }

    /// Display name for a subject, falling back to its code for subjects the
    /// catalog does not know.
    pub fn display_name(&self, code: &SubjectCode) -> String {
        self.subject(code)
            .map(|subject| subject.name.clone())
            .unwrap_or_else(|| code.to_string())
    }

    pub fn cutoffs(&self, id: ClusterId) -> Option<&ClusterCutoffs> {
        self.cutoffs.get(&id)
    }

    pub fn courses(&self, id: ClusterId) -> &[CourseEntry] {
        self.courses.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_recommendation_data(&self) -> bool {
        !self.cutoffs.is_empty() || !self.courses.is_empty()
    }

    /// Cluster definitions with subject codes resolved to display names.
    pub fn cluster_listings(&self) -> Vec<ClusterListing> {
        self.clusters
            .iter()
            .map(|cluster| ClusterListing {
                id: cluster.id,
                name: cluster.name.clone(),
                groups: cluster
                    .groups
                    .iter()
                    .map(|group| {
                        group
                            .members()
                            .iter()
                            .map(|code| self.display_name(code))
                            .collect()
                    })
                    .collect(),
                core: cluster
                    .core_subjects()
                    .map(|code| self.display_name(code))
                    .collect(),
            })
            .collect()
    }
}
