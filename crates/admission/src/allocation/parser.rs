use std::fmt;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::domain::{Department, RawMarks, Subject};
use super::normalizer::normalize_name;

const FIELDS_PER_LINE: usize = 10;

/// Applicant line as read from input, before any scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantRecord {
    pub first_name: String,
    pub last_name: String,
    pub marks: RawMarks,
    pub priorities: [Department; 3],
}

impl ApplicantRecord {
    pub fn full_name(&self) -> String {
        normalize_name(&format!("{} {}", self.first_name, self.last_name))
    }
}

/// Parse failures; any of these aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected {} fields, found {found}", FIELDS_PER_LINE)]
    FieldCount { line: u64, found: usize },
    #[error("line {line}: {subject} mark '{value}' is not a valid number")]
    InvalidMark {
        line: u64,
        subject: &'static str,
        value: String,
    },
    #[error("line {line}: priority {rank} names unknown department '{value}'")]
    UnknownDepartment { line: u64, rank: usize, value: String },
    #[error("failed to read applicant input: {0}")]
    Read(#[from] std::io::Error),
    #[error("invalid applicant CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Supported layouts for the applicant list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Ten whitespace-separated fields per line, no header.
    #[default]
    Text,
    /// Headered CSV with one column per field.
    Csv,
}

impl InputFormat {
    /// Picks CSV for `.csv` files and plain text otherwise.
    pub fn detect<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|extension| extension.to_str())
        {
            Some(extension) if extension.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Text,
        }
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unsupported input format '{other}' (expected text or csv)")),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormat::Text => f.write_str("text"),
            InputFormat::Csv => f.write_str("csv"),
        }
    }
}

pub fn parse_records<R: Read>(
    reader: R,
    format: InputFormat,
) -> Result<Vec<ApplicantRecord>, ParseError> {
    match format {
        InputFormat::Text => parse_text(BufReader::new(reader)),
        InputFormat::Csv => parse_csv(reader),
    }
}

pub fn parse_text<R: BufRead>(reader: R) -> Result<Vec<ApplicantRecord>, ParseError> {
    let mut records = Vec::new();

    for (line, text) in (1u64..).zip(reader.lines()) {
        let text = text?;
        let text = text.trim_start_matches('\u{feff}');
        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != FIELDS_PER_LINE {
            return Err(ParseError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        records.push(build_record(
            line,
            fields[0],
            fields[1],
            [fields[2], fields[3], fields[4], fields[5], fields[6]],
            [fields[7], fields[8], fields[9]],
        )?);
    }

    Ok(records)
}

pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<ApplicantRecord>, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(csv::Position::line).unwrap_or_default();
        let parsed: CsvRow = row.deserialize(Some(&headers))?;

        records.push(build_record(
            line,
            &parsed.first_name,
            &parsed.last_name,
            [
                &parsed.physics,
                &parsed.chemistry,
                &parsed.maths,
                &parsed.computer_science,
                &parsed.final_exam,
            ],
            [&parsed.priority_1, &parsed.priority_2, &parsed.priority_3],
        )?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    first_name: String,
    last_name: String,
    physics: String,
    chemistry: String,
    maths: String,
    computer_science: String,
    #[serde(rename = "final")]
    final_exam: String,
    priority_1: String,
    priority_2: String,
    priority_3: String,
}

fn build_record(
    line: u64,
    first_name: &str,
    last_name: &str,
    marks: [&str; 5],
    priorities: [&str; 3],
) -> Result<ApplicantRecord, ParseError> {
    let mut values = [0.0; 5];
    for ((slot, raw), subject) in values.iter_mut().zip(marks).zip(Subject::ALL) {
        *slot = parse_mark(line, subject, raw)?;
    }

    let mut departments = [Department::Biotech; 3];
    for (rank, (slot, raw)) in departments.iter_mut().zip(priorities).enumerate() {
        *slot = raw
            .parse::<Department>()
            .map_err(|err| ParseError::UnknownDepartment {
                line,
                rank: rank + 1,
                value: err.0,
            })?;
    }

    Ok(ApplicantRecord {
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        marks: RawMarks {
            physics: values[0],
            chemistry: values[1],
            maths: values[2],
            computer_science: values[3],
            final_exam: values[4],
        },
        priorities: departments,
    })
}

fn parse_mark(line: u64, subject: Subject, raw: &str) -> Result<f64, ParseError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::InvalidMark {
            line,
            subject: subject.label(),
            value: raw.to_string(),
        })
}
