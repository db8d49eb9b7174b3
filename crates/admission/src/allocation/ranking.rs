use std::cmp::Ordering;

use super::domain::{Applicant, Department};

/// Higher department score first, then full name ascending, then input order.
pub fn compare(department: Department, left: &Applicant, right: &Applicant) -> Ordering {
    right
        .score(department)
        .total_cmp(&left.score(department))
        .then_with(|| left.full_name.cmp(&right.full_name))
        .then_with(|| left.id.cmp(&right.id))
}

/// Ranks borrowed applicants for one department without touching the slice.
pub fn rank(department: Department, applicants: &[Applicant]) -> Vec<&Applicant> {
    let mut ranked: Vec<&Applicant> = applicants.iter().collect();
    ranked.sort_by(|left, right| compare(department, left, right));
    ranked
}
