use crate::types::report::{
    BatchReport, ClusterListing, ClusterResult, PlacementReport, ProfileStatus,
};
use crate::types::subject::Subject;

pub fn to_markdown(report: &PlacementReport) -> String {
    let mut output = String::new();
    output.push_str("# Cluster Points Report\n\n");
    push_summary(&mut output, report);

    output.push_str("## Selected Subjects\n\n");
    if report.selected.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for subject in &report.selected {
            output.push_str(&format!(
                "- {} ({}): {} = {} points\n",
                subject.name, subject.code, subject.grade, subject.points
            ));
        }
        output.push('\n');
    }

    output.push_str("## Clusters\n\n");
    output.push_str("| # | Cluster | r | Raw | Points | Tier |\n");
    output.push_str("|---|---------|---|-----|--------|------|\n");
    for cluster in &report.clusters {
        output.push_str(&format!(
            "| {} | {} | {} | {:.3} | {:.3} | {}{} |\n",
            cluster.cluster_id,
            cluster.name,
            cluster.sum_r,
            cluster.raw_points,
            cluster.weighted_points,
            cluster.tier.label(),
            if cluster.weak { " (weak)" } else { "" }
        ));
    }
    output.push('\n');

    let ineligible = report
        .clusters
        .iter()
        .filter(|cluster| !cluster.missing_core.is_empty())
        .collect::<Vec<_>>();
    if !ineligible.is_empty() {
        output.push_str("## Missing Core Subjects\n\n");
        for cluster in ineligible {
            output.push_str(&format!(
                "- {} {}: {}\n",
                cluster.cluster_id,
                cluster.name,
                cluster.missing_core.join(", ")
            ));
        }
        output.push('\n');
    }

    let advised = report
        .clusters
        .iter()
        .filter(|cluster| cluster.recommendations.is_some())
        .collect::<Vec<_>>();
    if !advised.is_empty() {
        output.push_str("## Recommendations\n\n");
        for cluster in advised {
            push_recommendations(&mut output, cluster);
        }
    }

    output
}

fn push_summary(output: &mut String, report: &PlacementReport) {
    if let Some(student) = &report.student_id {
        output.push_str(&format!("Student: {student}\n"));
    }
    output.push_str(&format!("Cycle: {}\n", report.cycle));
    match report.status {
        ProfileStatus::Complete => output.push_str(&format!(
            "Aggregate: {}/84 (mean grade {})\n",
            report.total_points,
            report
                .mean_grade
                .map(|grade| grade.to_string())
                .unwrap_or_else(|| "-".to_string())
        )),
        ProfileStatus::MissingMathematics => {
            output.push_str("Aggregate: incomplete profile, Mathematics not reported\n")
        }
    }
    output.push_str(&format!(
        "Eligible clusters: {}/{}\n",
        report.eligible_count(),
        report.clusters.len()
    ));
    output.push_str(&format!("Digest: {}\n\n", report.profile_digest));
}

fn push_recommendations(output: &mut String, cluster: &ClusterResult) {
    let Some(recommendations) = &cluster.recommendations else {
        return;
    };
    output.push_str(&format!(
        "### {} {} ({:.3})\n\n",
        cluster.cluster_id, cluster.name, cluster.weighted_points
    ));
    output.push_str(&format!("{}\n\n", recommendations.profile_note));
    if let Some(min_required) = recommendations.min_required {
        output.push_str(&format!("Minimum required: {min_required:.3}\n\n"));
    }
    if recommendations.universities.is_empty() {
        output.push_str("- no published cutoff met\n");
    } else {
        for university in &recommendations.universities {
            output.push_str(&format!(
                "- {} (cutoff {:.3}, {} programmes)\n",
                university.university, university.cutoff, university.programmes
            ));
        }
    }
    for course in &recommendations.courses {
        output.push_str(&format!("- course: {} [{:?}]", course.course, course.level));
        if !course.universities.is_empty() {
            output.push_str(&format!(" at {}", course.universities.join(", ")));
        }
        output.push('\n');
    }
    output.push('\n');
}

pub fn batch_to_markdown(batch: &BatchReport) -> String {
    let mut output = String::new();
    output.push_str("# Batch Report\n\n");
    output.push_str(&format!(
        "Sheets: {} ({} failed)\n\n",
        batch.entries.len(),
        batch.failed()
    ));
    output.push_str("| Sheet | Student | Aggregate | Best cluster | Points |\n");
    output.push_str("|-------|---------|-----------|--------------|--------|\n");
    for entry in &batch.entries {
        let path = entry.path.display();
        match (&entry.report, &entry.error) {
            (Some(report), _) => {
                let best = report.clusters.iter().find(|cluster| cluster.is_eligible);
                output.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    path,
                    report.student_id.as_deref().unwrap_or("-"),
                    report.total_points,
                    best.map(|cluster| cluster.name.as_str()).unwrap_or("none"),
                    best.map(|cluster| format!("{:.3}", cluster.weighted_points))
                        .unwrap_or_else(|| "-".to_string())
                ));
            }
            (None, error) => {
                output.push_str(&format!(
                    "| {} | error: {} | - | - | - |\n",
                    path,
                    error.as_deref().unwrap_or("unknown")
                ));
            }
        }
    }
    output
}

pub fn clusters_to_markdown(clusters: &[ClusterListing]) -> String {
    let mut output = String::new();
    output.push_str("# Clusters\n\n");
    for cluster in clusters {
        output.push_str(&format!("## {} {}\n\n", cluster.id, cluster.name));
        for (index, group) in cluster.groups.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, group.join(" / ")));
        }
        if !cluster.core.is_empty() {
            output.push_str(&format!("\nCore: {}\n", cluster.core.join(", ")));
        }
        output.push('\n');
    }
    output
}

pub fn subjects_to_markdown(subjects: &[Subject]) -> String {
    let mut output = String::new();
    output.push_str("# Subjects\n\n");
    output.push_str("| Code | Name | Category |\n");
    output.push_str("|------|------|----------|\n");
    for subject in subjects {
        output.push_str(&format!(
            "| {} | {} | {:?} |\n",
            subject.code, subject.name, subject.category
        ));
    }
    output
}
