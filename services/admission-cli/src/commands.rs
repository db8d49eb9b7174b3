use admission::allocation::parser::parse_records;
use admission::allocation::{
    export, AdmissionPipeline, AllocationSummary, Capacity, Department, DirectorySink,
    ImportError, InputFormat, ScoreComputer, WriterSink,
};
use admission::config::{parse_capacity, AppConfig, ConfigError};
use admission::error::AppError;
use chrono::Utc;
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct AllocateArgs {
    /// Maximum admissions per department (falls back to ADMISSION_CAPACITY, then stdin)
    #[arg(long)]
    pub(crate) capacity: Option<String>,
    #[command(flatten)]
    pub(crate) input: InputArgs,
    /// Directory receiving one <department>.txt roster per department
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// Also write a JSON summary of rosters, rejections and rounds
    #[arg(long)]
    pub(crate) summary_json: Option<PathBuf>,
    /// Print the rosters to stdout as well
    #[arg(long)]
    pub(crate) print: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ScoresArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct InputArgs {
    /// Applicant list (defaults to ADMISSION_INPUT or applicants.txt)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Input layout: text or csv (detected from the file extension when omitted)
    #[arg(long)]
    pub(crate) format: Option<InputFormat>,
}

impl InputArgs {
    fn resolve(self, config: &AppConfig) -> (PathBuf, InputFormat) {
        let path = self.input.unwrap_or_else(|| config.admission.input.clone());
        let format = self.format.unwrap_or_else(|| InputFormat::detect(&path));
        (path, format)
    }
}

pub(crate) fn run_allocate(config: &AppConfig, args: AllocateArgs) -> Result<(), AppError> {
    let AllocateArgs {
        capacity,
        input,
        output_dir,
        summary_json,
        print,
    } = args;

    let capacity = resolve_capacity(capacity.as_deref(), config)?;
    let (input, format) = input.resolve(config);
    let output_dir = output_dir.unwrap_or_else(|| config.admission.output_dir.clone());

    let pipeline = AdmissionPipeline::new(capacity);
    let applicants = pipeline.load_path(&input, format)?;
    let outcome = pipeline.allocate(applicants);

    let mut sink = DirectorySink::new(&output_dir)?;
    let written = export(&outcome.rosters, &mut sink)?;

    if print {
        let stdout = io::stdout();
        let mut printer = WriterSink::new(stdout.lock());
        export(&outcome.rosters, &mut printer)?;
    }

    if let Some(path) = summary_json {
        let summary = AllocationSummary::from_outcome(&outcome, Utc::now());
        write_summary(&path, &summary)?;
        info!(path = %path.display(), "summary written");
    }

    info!(
        %capacity,
        admitted = written,
        rejected = outcome.rejected.len(),
        output_dir = %sink.dir().display(),
        "allocation finished"
    );

    Ok(())
}

pub(crate) fn run_scores(config: &AppConfig, args: ScoresArgs) -> Result<(), AppError> {
    let (input, format) = args.input.resolve(config);
    let file = File::open(&input)?;
    let records = parse_records(file, format).map_err(ImportError::from)?;
    let scorer = ScoreComputer::standard();
    let applicants = scorer.applicants(records);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for department in Department::ALL {
        writeln!(out, "# {:<11} = max({}, final)", department.name(), scorer.formula(department))?;
    }
    write!(out, "{:>4}  {:<24}", "id", "name")?;
    for department in Department::ALL {
        write!(out, " {:>11}", department.name())?;
    }
    writeln!(out, " {:>11}", "Final")?;

    for applicant in &applicants {
        write!(out, "{:>4}  {:<24}", applicant.id.0, applicant.full_name)?;
        for (_, score) in applicant.scores.iter() {
            write!(out, " {:>11.2}", score)?;
        }
        writeln!(out, " {:>11.2}", applicant.scores.final_exam())?;
    }

    info!(applicants = applicants.len(), "scores listed");
    Ok(())
}

fn resolve_capacity(flag: Option<&str>, config: &AppConfig) -> Result<Capacity, AppError> {
    if let Some(capacity) = config.admission.capacity(flag)? {
        return Ok(capacity);
    }

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let token = line
        .split_whitespace()
        .next()
        .ok_or(ConfigError::MissingCapacity)?;
    Ok(parse_capacity(token)?)
}

fn write_summary(path: &Path, summary: &AllocationSummary) -> Result<(), AppError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
