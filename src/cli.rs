//! Command line interface for the `checker` binary.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::{debug, error, info, warn};

use crate::config::CheckerConfig;
use crate::error::Result;
use crate::report::CheckReport;
use crate::spellcheck::SpellChecker;

/// Report misspelled words in text files and suggest corrections from a word list.
#[derive(Parser, Debug, Clone)]
#[command(name = "checker")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct CheckerArgs {
    /// Word list, one word per line
    #[arg(short = 'd', long = "dict", value_name = "PATH")]
    pub dictionary: PathBuf,

    /// Text files to check
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Maximum edit distance for suggestions (overrides the config file)
    #[arg(short, long)]
    pub threshold: Option<usize>,

    /// JSON configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Search for suggestions on a single thread
    #[arg(long)]
    pub serial: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,
}

impl CheckerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }

    /// Config file values, then command line overrides.
    pub fn resolve_config(&self) -> Result<CheckerConfig> {
        let mut config = match &self.config {
            Some(path) => CheckerConfig::from_json_file(path)?,
            None => CheckerConfig::default(),
        };
        if let Some(threshold) = self.threshold {
            config = config.with_threshold(threshold);
        }
        if self.serial {
            config = config.with_parallel(false);
        }
        Ok(config)
    }
}

/// Rewrite the single-dash `-dict` spelling to `--dict`.
///
/// Clap would otherwise read `-dict words.txt` as `-d ict` followed by an input file.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg: OsString = arg.into();
            if arg == "-dict" { OsString::from("--dict") } else { arg }
        })
        .collect()
}

/// Check every file named in `args` against one loaded dictionary.
///
/// A file that cannot be read is recorded as a failure and the run continues.
/// A dictionary that cannot be read ends the run.
pub fn run(args: &CheckerArgs) -> Result<CheckReport> {
    let config = args.resolve_config()?;
    debug!("using {:?}", config);

    let load_start = Instant::now();
    let checker = SpellChecker::from_word_list_file(&args.dictionary, config)?;
    info!(
        "loaded {} words from {} in {:?}",
        checker.dictionary().len(),
        args.dictionary.display(),
        load_start.elapsed()
    );
    if checker.dictionary().is_empty() {
        warn!("dictionary {} is empty", args.dictionary.display());
    }

    let mut report = CheckReport::new(&args.dictionary, checker.config().threshold);
    for path in &args.files {
        let start = Instant::now();
        match checker.check_file(path) {
            Ok(file_report) => {
                info!(
                    "{}: {} tokens, {} misspelled, {} with suggestions in {:?}",
                    path.display(),
                    file_report.token_count,
                    file_report.misspelled.len(),
                    file_report.corrections.len(),
                    start.elapsed()
                );
                report.push_file(file_report);
            }
            Err(e) => {
                error!("{e}");
                report.push_failure(path, &e);
            }
        }
    }
    info!(
        "{} misspelled words in {} files, {} files failed",
        report.misspelled_count(),
        report.files.len(),
        report.failures.len()
    );
    Ok(report)
}
