use crate::error::{ClusterPointsError, Result};
use crate::types::subject::GradeSheet;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// On-disk shape of a grade sheet. Grades stay strings here so a bad letter
/// surfaces as `MalformedGrade` naming the subject.
#[derive(Debug, Deserialize)]
struct RawSheet {
    student_id: Option<String>,
    #[serde(default)]
    subjects: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    code: String,
    grade: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SheetFormat {
    Json,
    Toml,
}

fn sheet_format(path: &Path) -> Option<SheetFormat> {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("json") => Some(SheetFormat::Json),
        Some("toml") => Some(SheetFormat::Toml),
        _ => None,
    }
}

pub fn read_sheet(path: &Path) -> Result<GradeSheet> {
    if !path.exists() {
        return Err(ClusterPointsError::PathNotFound(path.display().to_string()));
    }
    let format = sheet_format(path).ok_or_else(|| {
        ClusterPointsError::UnsupportedInput(format!(
            "{}: expected a .json or .toml grade sheet",
            path.display()
        ))
    })?;
    let content = std::fs::read_to_string(path)?;
    parse_sheet(&content, format)
}

fn parse_sheet(content: &str, format: SheetFormat) -> Result<GradeSheet> {
    let raw: RawSheet = match format {
        SheetFormat::Json => serde_json::from_str(content)?,
        SheetFormat::Toml => toml::from_str(content)?,
    };
    GradeSheet::from_pairs(
        raw.student_id,
        raw.subjects
            .into_iter()
            .map(|record| (record.code, record.grade)),
    )
}

/// Splits a `code=grade` argument.
pub fn parse_grade_arg(arg: &str) -> Result<(String, String)> {
    match arg.split_once('=') {
        Some((code, grade)) if !code.trim().is_empty() => {
            Ok((code.trim().to_string(), grade.trim().to_string()))
        }
        _ => Err(ClusterPointsError::UnsupportedInput(format!(
            "--grade expects code=GRADE (found {arg:?})"
        ))),
    }
}

pub fn sheet_from_args(student_id: Option<String>, grades: &[String]) -> Result<GradeSheet> {
    let pairs = grades
        .iter()
        .map(|arg| parse_grade_arg(arg))
        .collect::<Result<Vec<_>>>()?;
    GradeSheet::from_pairs(student_id, pairs)
}

/// Every `.json` and `.toml` file below `root`, sorted by path.
pub fn discover_sheets(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ClusterPointsError::PathNotFound(root.display().to_string()));
    }
    let mut paths = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| sheet_format(path).is_some())
        .collect::<Vec<_>>();
    paths.sort();
    Ok(paths)
}
