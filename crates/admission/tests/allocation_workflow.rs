use std::fs;
use std::path::PathBuf;

use admission::allocation::{
    export, AdmissionPipeline, AllocationSummary, Capacity, Department, DirectorySink,
    ImportError, InputFormat, ParseError,
};
use chrono::Utc;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/applicants.txt")
}

fn pipeline(capacity: usize) -> AdmissionPipeline {
    AdmissionPipeline::new(Capacity::new(capacity).expect("positive capacity"))
}

#[test]
fn fixture_allocates_and_writes_department_files() {
    let pipeline = pipeline(2);
    let applicants = pipeline
        .load_path(fixture(), InputFormat::Text)
        .expect("fixture loads");
    assert_eq!(applicants.len(), 12);

    let outcome = pipeline.allocate(applicants);
    let dir = tempfile::tempdir().expect("temp dir");
    let mut sink = DirectorySink::new(dir.path()).expect("sink created");
    let written = export(&outcome.rosters, &mut sink).expect("export succeeds");

    assert_eq!(written, 10);
    let read = |department: Department| {
        fs::read_to_string(dir.path().join(department.file_name())).expect("roster file exists")
    };
    assert_eq!(
        read(Department::Biotech),
        "Lisa Brinkley 95.0\nTashina Oakley 81.5\n"
    );
    assert_eq!(
        read(Department::Chemistry),
        "Naomi Eldridge 92.0\nOtto Quist 88.0\n"
    );
    assert_eq!(
        read(Department::Engineering),
        "Dashawn Shields 91.0\nPriya Nair 90.5\n"
    );
    assert_eq!(
        read(Department::Mathematics),
        "Ruben Acosta 95.0\nKyle Cuthbert 64.0\n"
    );
    assert_eq!(
        read(Department::Physics),
        "Estefany Scutt 85.0\nMohammed Roberts 82.0\n"
    );

    let mut rejected: Vec<_> = outcome
        .rejected
        .iter()
        .map(|applicant| applicant.full_name.as_str())
        .collect();
    rejected.sort_unstable();
    assert_eq!(rejected, vec!["Jermaine Rooney", "Wendy Lowe"]);
}

#[test]
fn larger_capacity_admits_everyone() {
    let pipeline = pipeline(3);
    let applicants = pipeline
        .load_path(fixture(), InputFormat::Text)
        .expect("fixture loads");

    let outcome = pipeline.allocate(applicants);

    assert!(outcome.rejected.is_empty());
    assert_eq!(outcome.admitted(), 12);
    assert_eq!(outcome.rounds[0].overflow, 0);
}

#[test]
fn summary_counts_match_outcome() {
    let pipeline = pipeline(1);
    let applicants = pipeline
        .load_path(fixture(), InputFormat::Text)
        .expect("fixture loads");
    let outcome = pipeline.allocate(applicants);

    let summary = AllocationSummary::from_outcome(&outcome, Utc::now());

    assert_eq!(summary.capacity, 1);
    assert_eq!(summary.applicants, 12);
    assert_eq!(summary.admitted, 5);
    assert_eq!(summary.rejected.len(), 7);
    assert!(summary
        .departments
        .iter()
        .all(|department| department.entries.len() == 1));
}

#[test]
fn missing_input_file_is_an_io_error() {
    let err = pipeline(2)
        .load_path("does/not/exist.txt", InputFormat::Text)
        .expect_err("missing file rejected");

    assert!(matches!(err, ImportError::Io(_)));
}

#[test]
fn one_bad_line_aborts_the_whole_import() {
    let input = "Ann Abbot 8 7.5 9 6 8.5 Biotech Chemistry Engineering\n\
Bob Brown 6 9 7 seven 5 Biotech Chemistry Physics\n";

    let err = pipeline(2)
        .run_reader(input.as_bytes(), InputFormat::Text)
        .expect_err("bad line aborts");

    match err {
        ImportError::Parse(ParseError::InvalidMark { line, subject, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(subject, "computer_science");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}
