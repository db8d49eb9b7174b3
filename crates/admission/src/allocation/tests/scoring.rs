use crate::allocation::domain::{Department, RawMarks, Subject};
use crate::allocation::parser::ApplicantRecord;
use crate::allocation::scoring::{ScoreComputer, ScoreFormula};

fn marks(
    physics: f64,
    chemistry: f64,
    maths: f64,
    computer_science: f64,
    final_exam: f64,
) -> RawMarks {
    RawMarks {
        physics,
        chemistry,
        maths,
        computer_science,
        final_exam,
    }
}

#[test]
fn raw_scores_follow_the_formula_table() {
    let computer = ScoreComputer::standard();
    let raw = computer.raw_scores(&marks(8.0, 7.5, 9.0, 6.0, 0.0));

    assert_eq!(raw, [7.75, 7.5, 7.5, 9.0, 8.5]);
}

#[test]
fn final_mark_raises_lower_department_scores() {
    let computer = ScoreComputer::standard();
    let scores = computer.compute(&marks(8.0, 7.5, 9.0, 6.0, 8.5));

    assert_eq!(scores.get(Department::Biotech), 8.5);
    assert_eq!(scores.get(Department::Chemistry), 8.5);
    assert_eq!(scores.get(Department::Engineering), 8.5);
    assert_eq!(scores.get(Department::Mathematics), 9.0);
    assert_eq!(scores.get(Department::Physics), 8.5);
    assert_eq!(scores.final_exam(), 8.5);
}

#[test]
fn final_mark_never_caps_a_higher_score() {
    let computer = ScoreComputer::standard();
    let scores = computer.compute(&marks(10.0, 10.0, 10.0, 10.0, 2.0));

    assert!(scores.iter().all(|(_, score)| score == 10.0));
}

#[test]
fn formula_lookup_matches_department() {
    let computer = ScoreComputer::standard();

    assert_eq!(
        computer.formula(Department::Engineering),
        ScoreFormula::Mean(Subject::ComputerScience, Subject::Maths)
    );
    assert_eq!(
        computer.formula(Department::Chemistry),
        ScoreFormula::Mark(Subject::Chemistry)
    );
    assert_eq!(
        computer.formula(Department::Physics),
        ScoreFormula::Mean(Subject::Physics, Subject::Maths)
    );
}

#[test]
fn formulas_render_as_subject_labels() {
    let computer = ScoreComputer::standard();

    assert_eq!(
        computer.formula(Department::Biotech).to_string(),
        "mean(chemistry, physics)"
    );
    assert_eq!(computer.formula(Department::Mathematics).to_string(), "maths");
}

#[test]
fn applicants_are_numbered_from_one_in_input_order() {
    let computer = ScoreComputer::standard();
    let record = |first: &str| ApplicantRecord {
        first_name: first.to_string(),
        last_name: "Smith".to_string(),
        marks: marks(5.0, 5.0, 5.0, 5.0, 5.0),
        priorities: [Department::Physics; 3],
    };

    let applicants = computer.applicants(vec![record("Ann"), record("Ben")]);

    assert_eq!(applicants[0].id.0, 1);
    assert_eq!(applicants[0].full_name, "Ann Smith");
    assert_eq!(applicants[1].id.0, 2);
    assert_eq!(applicants[1].full_name, "Ben Smith");
}
