use crate::error::{ClusterPointsError, Result};
use crate::types::grade::{Grade, Points};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fmt;

pub const MATHEMATICS: &str = "mat";
pub const ENGLISH: &str = "eng";
pub const KISWAHILI: &str = "kis";

/// Alternative Mathematics papers, scored as Mathematics.
const MATHEMATICS_ALIASES: [&str; 2] = ["mata", "matb"];

/// Normalized subject code: trimmed, lower-case, with the Mathematics paper
/// aliases folded onto `mat`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubjectCode(String);

impl SubjectCode {
    pub fn new(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            return Err(ClusterPointsError::EmptySubject);
        }
        if MATHEMATICS_ALIASES.contains(&normalized.as_str()) {
            return Ok(Self(MATHEMATICS.to_string()));
        }
        Ok(Self(normalized))
    }

    /// Codes from the built-in tables are already normalized.
    pub(crate) fn builtin(code: &'static str) -> Self {
        Self(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_mathematics(&self) -> bool {
        self.0 == MATHEMATICS
    }
}

impl fmt::Display for SubjectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SubjectCode {
    type Error = ClusterPointsError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<SubjectCode> for String {
    fn from(value: SubjectCode) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectCategory {
    Compulsory,
    Sciences,
    Humanities,
    Technical,
    Languages,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub code: SubjectCode,
    pub name: String,
    pub category: SubjectCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectRecord {
    pub code: SubjectCode,
    pub grade: Grade,
}

impl SubjectRecord {
    pub fn points(&self) -> Points {
        self.grade.points()
    }
}

/// One student's reported grades in submission order. Codes are unique after
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GradeSheet {
    pub student_id: Option<String>,
    records: Vec<SubjectRecord>,
}

impl GradeSheet {
    pub fn new(student_id: Option<String>, records: Vec<SubjectRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.code.clone()) {
                return Err(ClusterPointsError::DuplicateSubject(record.code.to_string()));
            }
        }
        Ok(Self {
            student_id,
            records,
        })
    }

    /// Builds a sheet from raw `(code, grade)` strings, rejecting grades that
    /// are not on the KCSE scale.
    pub fn from_pairs<I, C, G>(student_id: Option<String>, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, G)>,
        C: AsRef<str>,
        G: AsRef<str>,
    {
        let records = pairs
            .into_iter()
            .map(|(code, grade)| {
                let code = SubjectCode::new(code.as_ref())?;
                let grade = grade.as_ref().parse::<Grade>().map_err(|_| {
                    ClusterPointsError::MalformedGrade {
                        subject: code.to_string(),
                        grade: grade.as_ref().to_string(),
                    }
                })?;
                Ok(SubjectRecord { code, grade })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(student_id, records)
    }

    pub fn records(&self) -> &[SubjectRecord] {
        &self.records
    }

    pub fn get(&self, code: &str) -> Option<&SubjectRecord> {
        self.records
            .iter()
            .find(|record| record.code.as_str() == code)
    }

    pub fn points_of(&self, code: &str) -> Points {
        self.get(code).map(SubjectRecord::points).unwrap_or(0)
    }

    /// SHA-256 over the normalized `code=grade` lines in submission order.
    /// The student id is not part of the digest.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for record in &self.records {
            hasher.update(record.code.as_str().as_bytes());
            hasher.update(b"=");
            hasher.update(record.grade.as_str().as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
