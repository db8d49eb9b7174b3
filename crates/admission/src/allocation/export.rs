use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use tracing::debug;

use super::allocator::{AllocationOutcome, Rosters, RoundSummary};
use super::domain::{Applicant, ApplicantId, Department};
use super::ranking;

/// Exported line for one admitted applicant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub full_name: String,
    #[serde(serialize_with = "one_decimal")]
    pub score: f64,
}

impl RosterEntry {
    pub fn line(&self) -> String {
        format!("{} {:.1}", self.full_name, self.score)
    }
}

fn one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    let rounded: f64 = format!("{value:.1}")
        .parse()
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_f64(rounded)
}

/// Ranks a department roster and pairs each name with its department score.
pub fn roster_entries(department: Department, roster: &[Applicant]) -> Vec<RosterEntry> {
    ranking::rank(department, roster)
        .into_iter()
        .map(|applicant| RosterEntry {
            full_name: applicant.full_name.clone(),
            score: applicant.score(department),
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write roster output: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for department rosters, one call per department.
pub trait RosterSink {
    fn write_roster(
        &mut self,
        department: Department,
        entries: &[RosterEntry],
    ) -> Result<(), ExportError>;
}

/// Writes every department roster to `sink` in canonical order and returns
/// how many lines were emitted.
pub fn export<S: RosterSink + ?Sized>(
    rosters: &Rosters,
    sink: &mut S,
) -> Result<usize, ExportError> {
    let mut written = 0;
    for (department, roster) in rosters.iter() {
        let entries = roster_entries(department, roster);
        sink.write_roster(department, &entries)?;
        debug!(%department, entries = entries.len(), "roster exported");
        written += entries.len();
    }
    Ok(written)
}

/// One `<department>.txt` file per department inside a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Result<Self, ExportError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| ExportError::File {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, department: Department) -> PathBuf {
        self.dir.join(department.file_name())
    }
}

impl RosterSink for DirectorySink {
    fn write_roster(
        &mut self,
        department: Department,
        entries: &[RosterEntry],
    ) -> Result<(), ExportError> {
        let path = self.path_for(department);
        let write_lines = || -> std::io::Result<()> {
            let mut writer = BufWriter::new(File::create(&path)?);
            for entry in entries {
                writeln!(writer, "{}", entry.line())?;
            }
            writer.flush()
        };
        write_lines().map_err(|source| ExportError::File {
            path: path.clone(),
            source,
        })
    }
}

/// Prints each roster under a department heading, e.g. to stdout.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RosterSink for WriterSink<W> {
    fn write_roster(
        &mut self,
        department: Department,
        entries: &[RosterEntry],
    ) -> Result<(), ExportError> {
        writeln!(self.writer, "{department}")?;
        for entry in entries {
            writeln!(self.writer, "{}", entry.line())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Machine-readable view of a finished allocation.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationSummary {
    pub generated_at: DateTime<Utc>,
    pub capacity: usize,
    pub applicants: usize,
    pub admitted: usize,
    pub departments: Vec<DepartmentSummary>,
    pub rejected: Vec<RejectedApplicant>,
    pub rounds: Vec<RoundSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentSummary {
    pub department: Department,
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedApplicant {
    pub id: ApplicantId,
    pub full_name: String,
    pub priorities: [Department; 3],
}

impl AllocationSummary {
    pub fn from_outcome(outcome: &AllocationOutcome, generated_at: DateTime<Utc>) -> Self {
        let departments = outcome
            .rosters
            .iter()
            .map(|(department, roster)| DepartmentSummary {
                department,
                entries: roster_entries(department, roster),
            })
            .collect();

        let mut rejected: Vec<RejectedApplicant> = outcome
            .rejected
            .iter()
            .map(|applicant| RejectedApplicant {
                id: applicant.id,
                full_name: applicant.full_name.clone(),
                priorities: applicant.priorities,
            })
            .collect();
        rejected.sort_by_key(|applicant| applicant.id);

        let admitted = outcome.admitted();
        Self {
            generated_at,
            capacity: outcome.capacity.get(),
            applicants: admitted + outcome.rejected.len(),
            admitted,
            departments,
            rejected,
            rounds: outcome.rounds.clone(),
        }
    }
}
