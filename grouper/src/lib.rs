use anyhow::{Context, Result};
use clap::Parser;
use stemgroup_core::persist::DEFAULT_OUTPUT;
use stemgroup_core::{GroupError, GroupingResult, Language, RankFilter};
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "usage: grouper <FILE> <LANGUAGE>";
/// Consulted when `--output` is not given.
pub const OUTPUT_ENV: &str = "STEMGROUP_OUTPUT";

#[derive(Parser, Debug)]
#[command(name = "grouper")]
#[command(
    about = "Group the words of a text file by stem and rank them by frequency",
    long_about = None
)]
pub struct Args {
    /// Plain-text UTF-8 document
    pub file: Option<PathBuf>,
    /// Document language: "english" or "spanish"
    pub language: Option<String>,
    /// Output JSON path [default: $STEMGROUP_OUTPUT, then results_stemmed.json]
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Keep only stems seen at least this many times
    #[arg(long, default_value_t = 2)]
    pub min_count: u64,
}

/// A fully validated invocation. Building one performs no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub language: Language,
    pub output: PathBuf,
    pub rank: RankFilter,
}

impl Args {
    pub fn resolve(self) -> Result<Job, GroupError> {
        let env_output = std::env::var_os(OUTPUT_ENV);
        self.resolve_with(env_output)
    }

    fn resolve_with(self, env_output: Option<OsString>) -> Result<Job, GroupError> {
        let input = self.file.ok_or(GroupError::MissingArgument("FILE"))?;
        let selector = self.language.ok_or(GroupError::MissingArgument("LANGUAGE"))?;
        let language: Language = selector.parse()?;
        let output = self
            .output
            .or_else(|| env_output.filter(|v| !v.is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        Ok(Job { input, language, output, rank: RankFilter::new(self.min_count) })
    }
}

pub fn run(args: Args) -> Result<GroupingResult> {
    let job = args.resolve().map_err(|e| match e {
        GroupError::MissingArgument(_) => anyhow::Error::new(e).context(USAGE),
        other => other.into(),
    })?;
    tracing::info!(
        input = %job.input.display(),
        language = %job.language,
        "grouping words by stem"
    );
    let result = stemgroup_core::run(&job.input, job.language, &job.output, &job.rank)
        .with_context(|| format!("grouping {} failed", job.input.display()))?;
    tracing::info!(output = %job.output.display(), "file written successfully");
    Ok(result)
}
