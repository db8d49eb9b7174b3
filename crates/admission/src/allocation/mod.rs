//! Applicant scoring, ranking and the three-round department allocation.
//!
//! Records flow through [`ScoreComputer`] into [`Allocator`], which hands back
//! frozen [`Rosters`]; [`export`] turns those into per-department output.

pub mod allocator;
pub mod domain;
pub mod export;
mod normalizer;
pub mod parser;
pub mod ranking;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use allocator::{AllocationOutcome, Allocator, Rosters, RoundSummary};
pub use domain::{
    Applicant, ApplicantId, Capacity, Department, DepartmentScores, RawMarks, Round, Subject,
    UnknownDepartment,
};
pub use export::{
    export, roster_entries, AllocationSummary, DirectorySink, ExportError, RosterEntry,
    RosterSink, WriterSink,
};
pub use parser::{ApplicantRecord, InputFormat, ParseError};
pub use scoring::{ScoreComputer, ScoreFormula};

use std::io::Read;
use std::path::Path;

use tracing::info;

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Parse(ParseError),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to open applicant list: {}", err),
            ImportError::Parse(err) => write!(f, "invalid applicant data: {}", err),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ParseError> for ImportError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

/// Loads applicants and runs the allocation for a fixed capacity.
#[derive(Debug, Clone)]
pub struct AdmissionPipeline {
    scorer: ScoreComputer,
    allocator: Allocator,
}

impl AdmissionPipeline {
    pub fn new(capacity: Capacity) -> Self {
        Self {
            scorer: ScoreComputer::standard(),
            allocator: Allocator::new(capacity),
        }
    }

    pub fn capacity(&self) -> Capacity {
        self.allocator.capacity()
    }

    /// Parses and scores applicants from a file; the whole file must parse.
    pub fn load_path<P: AsRef<Path>>(
        &self,
        path: P,
        format: InputFormat,
    ) -> Result<Vec<Applicant>, ImportError> {
        let file = std::fs::File::open(path.as_ref())?;
        let applicants = self.load_reader(file, format)?;
        info!(
            path = %path.as_ref().display(),
            %format,
            applicants = applicants.len(),
            "applicants loaded"
        );
        Ok(applicants)
    }

    pub fn load_reader<R: Read>(
        &self,
        reader: R,
        format: InputFormat,
    ) -> Result<Vec<Applicant>, ImportError> {
        let records = parser::parse_records(reader, format)?;
        Ok(self.scorer.applicants(records))
    }

    pub fn allocate(&self, applicants: Vec<Applicant>) -> AllocationOutcome {
        self.allocator.allocate(applicants)
    }

    pub fn run_reader<R: Read>(
        &self,
        reader: R,
        format: InputFormat,
    ) -> Result<AllocationOutcome, ImportError> {
        let applicants = self.load_reader(reader, format)?;
        Ok(self.allocate(applicants))
    }
}
