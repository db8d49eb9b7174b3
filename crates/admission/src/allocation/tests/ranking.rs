use super::common::*;
use crate::allocation::domain::Department;
use crate::allocation::ranking;

#[test]
fn higher_score_ranks_first() {
    let pool = vec![
        applicant(1, "Low Score", 6.0, [Department::Physics; 3]),
        applicant(2, "High Score", 9.0, [Department::Physics; 3]),
    ];

    let ranked = ranking::rank(Department::Physics, &pool);

    assert_eq!(ranked[0].full_name, "High Score");
    assert_eq!(ranked[1].full_name, "Low Score");
}

#[test]
fn equal_scores_break_ties_by_name() {
    let pool = vec![
        applicant(1, "Zoe Young", 7.0, [Department::Biotech; 3]),
        applicant(2, "Adam West", 7.0, [Department::Biotech; 3]),
        applicant(3, "Mia Stone", 7.0, [Department::Biotech; 3]),
    ];

    let ranked: Vec<_> = ranking::rank(Department::Biotech, &pool)
        .into_iter()
        .map(|applicant| applicant.full_name.as_str())
        .collect();

    assert_eq!(ranked, vec!["Adam West", "Mia Stone", "Zoe Young"]);
}

#[test]
fn ranking_uses_the_requested_department_score() {
    let pool = vec![
        applicant_with_scores(
            1,
            "Chem Strong",
            [5.0, 9.0, 5.0, 5.0, 5.0],
            [Department::Chemistry; 3],
        ),
        applicant_with_scores(
            2,
            "Maths Strong",
            [5.0, 6.0, 5.0, 9.5, 5.0],
            [Department::Mathematics; 3],
        ),
    ];

    assert_eq!(
        ranking::rank(Department::Chemistry, &pool)[0].full_name,
        "Chem Strong"
    );
    assert_eq!(
        ranking::rank(Department::Mathematics, &pool)[0].full_name,
        "Maths Strong"
    );
}

#[test]
fn rank_leaves_input_untouched() {
    let pool = vec![
        applicant(1, "Bea", 6.0, [Department::Physics; 3]),
        applicant(2, "Al", 8.0, [Department::Physics; 3]),
    ];
    let ranked: Vec<_> = ranking::rank(Department::Physics, &pool)
        .into_iter()
        .cloned()
        .collect();

    assert_eq!(names(&pool), vec!["Bea", "Al"]);
    assert_eq!(names(&ranked), vec!["Al", "Bea"]);
}

#[test]
fn duplicate_names_fall_back_to_input_order() {
    let pool = vec![
        applicant(2, "Sam Lee", 7.0, [Department::Physics; 3]),
        applicant(1, "Sam Lee", 7.0, [Department::Physics; 3]),
    ];

    let ranked = ranking::rank(Department::Physics, &pool);

    assert_eq!(ranked[0].id.0, 1);
    assert_eq!(ranked[1].id.0, 2);
}
