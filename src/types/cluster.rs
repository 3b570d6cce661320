use crate::error::{ClusterPointsError, Result};
use crate::types::subject::SubjectCode;
use serde::{Deserialize, Serialize};

pub type ClusterId = u8;

/// Every KUCCPS cluster weighs exactly four subject groups.
pub const CLUSTER_GROUPS: usize = 4;

/// Interchangeable subjects; the best graded one counts. A group with a single
/// member is a core requirement of its cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SubjectGroup(Vec<SubjectCode>);

impl SubjectGroup {
    pub fn new(members: Vec<SubjectCode>) -> Result<Self> {
        if members.is_empty() {
            return Err(ClusterPointsError::InvalidCluster(
                "subject group must not be empty".to_string(),
            ));
        }
        Ok(Self(members))
    }

    pub fn members(&self) -> &[SubjectCode] {
        &self.0
    }

    /// The mandatory subject when this is a single-subject group.
    pub fn core_subject(&self) -> Option<&SubjectCode> {
        match self.0.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClusterDefinition")]
pub struct ClusterDefinition {
    pub id: ClusterId,
    pub name: String,
    pub groups: [SubjectGroup; CLUSTER_GROUPS],
}

impl ClusterDefinition {
    pub fn new(id: ClusterId, name: &str, groups: &[&[&str]]) -> Result<Self> {
        RawClusterDefinition {
            id,
            name: name.to_string(),
            groups: groups
                .iter()
                .map(|group| group.iter().map(|code| code.to_string()).collect())
                .collect(),
        }
        .try_into()
    }

    /// Infallible constructor for the built-in catalog; its tables are covered
    /// by tests.
    pub(crate) fn builtin(
        id: ClusterId,
        name: &str,
        groups: [&[&'static str]; CLUSTER_GROUPS],
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            groups: groups.map(|group| {
                SubjectGroup(group.iter().copied().map(SubjectCode::builtin).collect())
            }),
        }
    }

    pub fn core_subjects(&self) -> impl Iterator<Item = &SubjectCode> {
        self.groups.iter().filter_map(SubjectGroup::core_subject)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawClusterDefinition {
    id: ClusterId,
    name: String,
    groups: Vec<Vec<String>>,
}

impl TryFrom<RawClusterDefinition> for ClusterDefinition {
    type Error = ClusterPointsError;

    fn try_from(raw: RawClusterDefinition) -> Result<Self> {
        if raw.name.trim().is_empty() {
            return Err(ClusterPointsError::InvalidCluster(format!(
                "cluster {} has an empty name",
                raw.id
            )));
        }
        let group_count = raw.groups.len();
        let groups = raw
            .groups
            .into_iter()
            .map(|group| {
                let members = group
                    .iter()
                    .map(|code| SubjectCode::new(code))
                    .collect::<Result<Vec<_>>>()?;
                SubjectGroup::new(members)
            })
            .collect::<Result<Vec<_>>>()
            .map_err(|err| {
                ClusterPointsError::InvalidCluster(format!("cluster {}: {err}", raw.id))
            })?;
        let groups: [SubjectGroup; CLUSTER_GROUPS] = groups.try_into().map_err(|_| {
            ClusterPointsError::InvalidCluster(format!(
                "cluster {} must have exactly {CLUSTER_GROUPS} subject groups (found {group_count})",
                raw.id
            ))
        })?;

        Ok(Self {
            id: raw.id,
            name: raw.name,
            groups,
        })
    }
}
