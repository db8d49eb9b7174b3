use crate::allocation::domain::{Applicant, ApplicantId, Capacity, Department, DepartmentScores};

pub(super) fn capacity(value: usize) -> Capacity {
    Capacity::new(value).expect("positive capacity")
}

/// Applicant with explicit reconciled scores in canonical department order.
pub(super) fn applicant_with_scores(
    id: u32,
    name: &str,
    scores: [f64; 5],
    priorities: [Department; 3],
) -> Applicant {
    let floor = scores.iter().copied().fold(f64::INFINITY, f64::min);
    Applicant {
        id: ApplicantId(id),
        full_name: name.to_string(),
        scores: DepartmentScores::new(scores, floor),
        priorities,
    }
}

/// Applicant scoring the same in every department.
pub(super) fn applicant(id: u32, name: &str, score: f64, priorities: [Department; 3]) -> Applicant {
    applicant_with_scores(id, name, [score; 5], priorities)
}

pub(super) fn names(applicants: &[Applicant]) -> Vec<&str> {
    applicants
        .iter()
        .map(|applicant| applicant.full_name.as_str())
        .collect()
}

pub(super) const SAMPLE_INPUT: &str = "\
Ann Abbot 8.0 7.5 9.0 6.0 8.5 Biotech Chemistry Engineering
Bob Brown 6.0 9.0 7.0 7.0 5.0 Biotech Chemistry Physics
Cid Clark 9.0 9.0 9.0 9.0 4.0 Biotech Mathematics Physics
Dee Dunn 5.0 5.0 5.0 5.0 5.0 Biotech Biotech Biotech
Eve Evans 7.0 6.0 8.0 9.0 6.5 Engineering Biotech Physics
";
