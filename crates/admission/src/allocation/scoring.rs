use super::domain::{Applicant, ApplicantId, Department, DepartmentScores, RawMarks, Subject};
use super::parser::ApplicantRecord;
use std::fmt;

/// How a department score is derived from the raw marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreFormula {
    Mark(Subject),
    Mean(Subject, Subject),
}

impl fmt::Display for ScoreFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreFormula::Mark(subject) => f.write_str(subject.label()),
            ScoreFormula::Mean(first, second) => {
                write!(f, "mean({}, {})", first.label(), second.label())
            }
        }
    }
}

impl ScoreFormula {
    pub fn evaluate(self, marks: &RawMarks) -> f64 {
        match self {
            ScoreFormula::Mark(subject) => marks.mark(subject),
            ScoreFormula::Mean(first, second) => (marks.mark(first) + marks.mark(second)) / 2.0,
        }
    }
}

// Entries stay in canonical department order so lookups can index directly.
const STANDARD_FORMULAS: [(Department, ScoreFormula); 5] = [
    (
        Department::Biotech,
        ScoreFormula::Mean(Subject::Chemistry, Subject::Physics),
    ),
    (Department::Chemistry, ScoreFormula::Mark(Subject::Chemistry)),
    (
        Department::Engineering,
        ScoreFormula::Mean(Subject::ComputerScience, Subject::Maths),
    ),
    (Department::Mathematics, ScoreFormula::Mark(Subject::Maths)),
    (
        Department::Physics,
        ScoreFormula::Mean(Subject::Physics, Subject::Maths),
    ),
];

/// Turns raw marks into reconciled department scores.
#[derive(Debug, Clone)]
pub struct ScoreComputer {
    formulas: [(Department, ScoreFormula); 5],
}

impl Default for ScoreComputer {
    fn default() -> Self {
        Self::standard()
    }
}

impl ScoreComputer {
    pub fn standard() -> Self {
        Self {
            formulas: STANDARD_FORMULAS,
        }
    }

    pub fn formula(&self, department: Department) -> ScoreFormula {
        self.formulas[department.index()].1
    }

    /// Department scores before the final exam floor is applied.
    pub fn raw_scores(&self, marks: &RawMarks) -> [f64; 5] {
        let mut scores = [0.0; 5];
        for (department, formula) in &self.formulas {
            scores[department.index()] = formula.evaluate(marks);
        }
        scores
    }

    pub fn compute(&self, marks: &RawMarks) -> DepartmentScores {
        reconcile(self.raw_scores(marks), marks.final_exam)
    }

    pub fn applicant(&self, id: ApplicantId, record: ApplicantRecord) -> Applicant {
        let scores = self.compute(&record.marks);
        Applicant {
            id,
            full_name: record.full_name(),
            scores,
            priorities: record.priorities,
        }
    }

    /// Scores every record, numbering applicants from 1 in input order.
    pub fn applicants(&self, records: Vec<ApplicantRecord>) -> Vec<Applicant> {
        records
            .into_iter()
            .zip(1u32..)
            .map(|(record, id)| self.applicant(ApplicantId(id), record))
            .collect()
    }
}

/// The final exam mark acts as a floor for every department score.
fn reconcile(raw: [f64; 5], final_exam: f64) -> DepartmentScores {
    DepartmentScores::new(raw.map(|score| score.max(final_exam)), final_exam)
}
