use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Departments accepting applicants, declared in canonical allocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Biotech,
    Chemistry,
    Engineering,
    Mathematics,
    Physics,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Biotech,
        Department::Chemistry,
        Department::Engineering,
        Department::Mathematics,
        Department::Physics,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Department::Biotech => "Biotech",
            Department::Chemistry => "Chemistry",
            Department::Engineering => "Engineering",
            Department::Mathematics => "Mathematics",
            Department::Physics => "Physics",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// File name used when a roster is written to a directory.
    pub fn file_name(self) -> String {
        format!("{}.txt", self.name().to_ascii_lowercase())
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when a priority names something outside the department set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department '{0}'")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Department::ALL
            .into_iter()
            .find(|department| department.name() == trimmed)
            .ok_or_else(|| UnknownDepartment(trimmed.to_string()))
    }
}

/// Identifier assigned from input order, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicantId(pub u32);

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Exam subjects in the column order of an applicant line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subject {
    Physics,
    Chemistry,
    Maths,
    ComputerScience,
    Final,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Physics,
        Subject::Chemistry,
        Subject::Maths,
        Subject::ComputerScience,
        Subject::Final,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Maths => "maths",
            Subject::ComputerScience => "computer_science",
            Subject::Final => "final",
        }
    }
}

/// Raw marks exactly as they appear in the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawMarks {
    pub physics: f64,
    pub chemistry: f64,
    pub maths: f64,
    pub computer_science: f64,
    pub final_exam: f64,
}

impl RawMarks {
    pub fn mark(&self, subject: Subject) -> f64 {
        match subject {
            Subject::Physics => self.physics,
            Subject::Chemistry => self.chemistry,
            Subject::Maths => self.maths,
            Subject::ComputerScience => self.computer_science,
            Subject::Final => self.final_exam,
        }
    }
}

/// Reconciled per-department scores plus the final exam mark that floors them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepartmentScores {
    by_department: [f64; 5],
    final_exam: f64,
}

impl DepartmentScores {
    pub(crate) fn new(by_department: [f64; 5], final_exam: f64) -> Self {
        Self {
            by_department,
            final_exam,
        }
    }

    pub fn get(&self, department: Department) -> f64 {
        self.by_department[department.index()]
    }

    pub fn final_exam(&self) -> f64 {
        self.final_exam
    }

    pub fn iter(&self) -> impl Iterator<Item = (Department, f64)> + '_ {
        Department::ALL
            .into_iter()
            .map(move |department| (department, self.get(department)))
    }
}

/// One of the three allocation rounds; round `n` reads the `n`-th priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Round(u8);

impl Round {
    pub const ALL: [Round; 3] = [Round(1), Round(2), Round(3)];

    pub const fn number(self) -> u8 {
        self.0
    }

    const fn priority_index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {}", self.0)
    }
}

/// Scored applicant; immutable once built by the score computer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub full_name: String,
    pub scores: DepartmentScores,
    pub priorities: [Department; 3],
}

impl Applicant {
    pub fn score(&self, department: Department) -> f64 {
        self.scores.get(department)
    }

    pub fn priority(&self, round: Round) -> Department {
        self.priorities[round.priority_index()]
    }
}

/// Uniform per-department admission limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    pub fn new(value: usize) -> Option<Self> {
        NonZeroUsize::new(value).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
