use crate::reference::ReferenceData;
use crate::types::cluster::ClusterId;
use crate::types::report::{CourseLevel, CourseSuggestion, Recommendations, UniversityMatch};

const MAX_COURSES: usize = 10;
const MAX_UNIVERSITIES_PER_COURSE: usize = 3;

/// Guess a course level from its title.
pub fn course_level(course: &str) -> CourseLevel {
    let lower = course.to_lowercase();
    if ["bachelor", "master", "phd", "degree"]
        .iter()
        .any(|keyword| lower.contains(keyword))
    {
        CourseLevel::Degree
    } else if lower.contains("diploma") {
        CourseLevel::Diploma
    } else if lower.contains("certificate") {
        CourseLevel::Certificate
    } else {
        CourseLevel::Artisan
    }
}

pub fn profile_note(total_points: u32) -> &'static str {
    if total_points >= 60 {
        "Strong candidate for degree programmes"
    } else if total_points >= 40 {
        "May qualify for degree or higher diploma"
    } else {
        "More suitable for diploma or certificate programmes"
    }
}

/// Universities whose published cutoff the student meets, highest cutoff
/// first, plus the courses catalogued for the cluster. `None` when the cycle
/// carries no data for this cluster.
pub fn recommend(
    reference: &ReferenceData,
    cluster: ClusterId,
    final_points: f64,
    total_points: u32,
) -> Option<Recommendations> {
    let cutoffs = reference.cutoffs(cluster);
    let courses = reference.courses(cluster);
    if cutoffs.is_none() && courses.is_empty() {
        return None;
    }

    let mut universities = cutoffs
        .map(|table| {
            table
                .universities
                .iter()
                .filter(|university| university.cutoff <= final_points)
                .map(|university| UniversityMatch {
                    university: university.name.clone(),
                    cutoff: university.cutoff,
                    programmes: university.programmes,
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    universities.sort_by(|a, b| {
        b.cutoff
            .total_cmp(&a.cutoff)
            .then_with(|| a.university.cmp(&b.university))
    });

    let courses = courses
        .iter()
        .take(MAX_COURSES)
        .map(|entry| CourseSuggestion {
            course: entry.course.clone(),
            level: entry.level.unwrap_or_else(|| course_level(&entry.course)),
            universities: entry
                .universities
                .iter()
                .take(MAX_UNIVERSITIES_PER_COURSE)
                .cloned()
                .collect(),
        })
        .collect();

    Some(Recommendations {
        profile_note: profile_note(total_points).to_string(),
        min_required: cutoffs.and_then(|table| table.min_required),
        universities,
        courses,
    })
}
