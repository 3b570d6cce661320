use crate::types::grade::{Grade, Points};
use crate::types::report::ProfileStatus;
use crate::types::subject::{GradeSheet, SubjectRecord, ENGLISH, KISWAHILI};

/// Subjects counted toward the aggregate besides Mathematics and a language.
const BEST_OTHERS: usize = 5;

/// The seven subjects that count toward a student's aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub status: ProfileStatus,
    pub selected: Vec<SubjectRecord>,
    pub total_points: u32,
    pub mean_grade: Option<Grade>,
}

impl SelectionResult {
    fn missing_mathematics() -> Self {
        Self {
            status: ProfileStatus::MissingMathematics,
            selected: Vec::new(),
            total_points: 0,
            mean_grade: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == ProfileStatus::Complete
    }

    pub fn points_of(&self, code: &str) -> Points {
        self.selected
            .iter()
            .find(|record| record.code.as_str() == code)
            .map(SubjectRecord::points)
            .unwrap_or(0)
    }
}

/// Picks Mathematics, the better of English and Kiswahili, and the five best
/// remaining subjects. Equal grades keep submission order.
pub fn select(sheet: &GradeSheet) -> SelectionResult {
    let Some(mathematics) = sheet
        .records()
        .iter()
        .find(|record| record.code.is_mathematics())
    else {
        return SelectionResult::missing_mathematics();
    };

    let language = match (sheet.get(ENGLISH), sheet.get(KISWAHILI)) {
        (Some(english), Some(kiswahili)) => {
            if kiswahili.points() > english.points() {
                Some(kiswahili)
            } else {
                Some(english)
            }
        }
        (english, kiswahili) => english.or(kiswahili),
    };

    let mut others = sheet
        .records()
        .iter()
        .filter(|record| !record.code.is_mathematics())
        .filter(|record| language.map_or(true, |chosen| chosen.code != record.code))
        .collect::<Vec<_>>();
    // sort_by is stable
    others.sort_by(|a, b| b.points().cmp(&a.points()));

    let selected = std::iter::once(mathematics)
        .chain(language)
        .chain(others.into_iter().take(BEST_OTHERS))
        .cloned()
        .collect::<Vec<_>>();
    let total_points = selected
        .iter()
        .map(|record| u32::from(record.points()))
        .sum::<u32>();

    SelectionResult {
        status: ProfileStatus::Complete,
        mean_grade: Some(Grade::mean_of_seven(total_points)),
        selected,
        total_points,
    }
}
