use std::env;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::config::{self, ProfileConfig};
use crate::splitter::batch::{BatchError, ensure_output_dir, resolve_output_dir};
use crate::splitter::scan::scan_images;
use crate::splitter::transform::{SplitError, SplitOutputs, split_and_rotate};

pub const VERSION_WITH_META: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit: ",
    env!("IMS_GIT_SHA"),
    ", built: ",
    env!("IMS_BUILD_TS"),
    ")"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportMode {
    Text,
    Json,
}

impl ReportMode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Args, Clone)]
#[command(version = VERSION_WITH_META)]
pub struct RunArgs {
    /// Folder containing the images to split.
    #[arg(value_name = "INPUT_DIR")]
    pub input: Option<PathBuf>,

    /// Folder receiving the rotated halves. Defaults to INPUT_DIR/output.
    #[arg(value_name = "OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Load defaults from [profiles.<name>] in the config file.
    #[arg(long)]
    pub profile: Option<String>,

    /// Batch report mode.
    #[arg(long, value_enum)]
    pub report: Option<ReportMode>,

    /// Shorthand for --report json.
    #[arg(long)]
    pub json: bool,

    /// Suppress progress output; error lines stay visible.
    #[arg(long)]
    pub quiet: bool,

    /// Print resolved settings to stderr before processing.
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug)]
struct RunSettings {
    input: PathBuf,
    output_dir: PathBuf,
    report: ReportMode,
    quiet: bool,
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct FileReport {
    input: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl FileReport {
    fn ok(input: &Path, outputs: &SplitOutputs) -> Self {
        Self {
            input: input.display().to_string(),
            status: "ok",
            left: Some(outputs.left.display().to_string()),
            right: Some(outputs.right.display().to_string()),
            error: None,
        }
    }

    fn failed(input: &Path, err: &SplitError) -> Self {
        Self {
            input: input.display().to_string(),
            status: "error",
            left: None,
            right: None,
            error: Some(err.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct BatchReport {
    input_dir: String,
    output_dir: String,
    found: usize,
    processed: usize,
    failed: usize,
    files: Vec<FileReport>,
}

pub fn run(args: RunArgs) -> Result<(), String> {
    let Some(input) = args.input.clone() else {
        print_usage();
        return Ok(());
    };

    let profile = match args.profile.as_deref() {
        Some(name) => Some(config::load_profile(name)?),
        None => None,
    };
    let settings = resolve_settings(&args, input, profile.as_ref())?;

    if settings.verbose && !settings.quiet {
        eprintln!(
            "input={} output_dir={} report={}",
            settings.input.display(),
            settings.output_dir.display(),
            settings.report.as_str()
        );
    }

    ensure_output_dir(&settings.output_dir).map_err(|err| err.to_string())?;

    let files = scan_images(&settings.input).map_err(|source| {
        BatchError::ScanInput {
            path: settings.input.clone(),
            source,
        }
        .to_string()
    })?;

    if files.is_empty() {
        if settings.report == ReportMode::Json {
            print_json_report(&settings, Vec::new())?;
        } else if !settings.quiet {
            println!("No image files found in {}", settings.input.display());
        }
        return Ok(());
    }

    let text = settings.report == ReportMode::Text;
    if text && !settings.quiet {
        println!("Found {} images to process...", files.len());
    }

    let mut reports = Vec::with_capacity(files.len());
    for path in &files {
        let name = file_name_lossy(path);
        match split_and_rotate(path, &settings.output_dir) {
            Ok(outputs) => {
                if text && !settings.quiet {
                    println!("{}: {name}", "Processed".green());
                }
                reports.push(FileReport::ok(path, &outputs));
            }
            Err(err) => {
                eprintln!("{} processing {name}: {err}", "Error".red());
                reports.push(FileReport::failed(path, &err));
            }
        }
    }

    if text && !settings.quiet {
        println!(
            "Processing complete. Results saved to {}",
            settings.output_dir.display()
        );
    }
    if settings.report == ReportMode::Json {
        print_json_report(&settings, reports)?;
    }

    Ok(())
}

fn resolve_settings(
    args: &RunArgs,
    input: PathBuf,
    profile: Option<&ProfileConfig>,
) -> Result<RunSettings, String> {
    let explicit_output = match &args.output {
        Some(dir) => Some(dir.clone()),
        None => match output_dir_from_env()? {
            Some(dir) => Some(dir),
            None => profile
                .and_then(|profile| profile.output_dir.as_deref())
                .map(PathBuf::from),
        },
    };
    let output_dir = resolve_output_dir(&input, explicit_output);

    let report = if args.json {
        ReportMode::Json
    } else if let Some(report) = args.report {
        report
    } else if let Some(report) = report_from_env()? {
        report
    } else if let Some(name) = profile.and_then(|profile| profile.report.as_deref()) {
        parse_report(name).ok_or_else(|| {
            format!("Invalid profile report '{name}'. Supported values: text, json.")
        })?
    } else {
        ReportMode::Text
    };

    let quiet = args.quiet || profile.and_then(|profile| profile.quiet).unwrap_or(false);

    Ok(RunSettings {
        input,
        output_dir,
        report,
        quiet,
        verbose: args.verbose,
    })
}

fn output_dir_from_env() -> Result<Option<PathBuf>, String> {
    match env::var("IMS_OUTPUT_DIR") {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(PathBuf::from(trimmed)))
            }
        }
        Err(_) => Ok(None),
    }
}

fn report_from_env() -> Result<Option<ReportMode>, String> {
    match env::var("IMS_REPORT") {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            parse_report(trimmed).map(Some).ok_or_else(|| {
                format!("Invalid IMS_REPORT '{trimmed}'. Supported values: text, json.")
            })
        }
        Err(_) => Ok(None),
    }
}

fn parse_report(value: &str) -> Option<ReportMode> {
    match value {
        "text" => Some(ReportMode::Text),
        "json" => Some(ReportMode::Json),
        _ => None,
    }
}

fn print_json_report(settings: &RunSettings, files: Vec<FileReport>) -> Result<(), String> {
    let processed = files.iter().filter(|file| file.status == "ok").count();
    let report = BatchReport {
        input_dir: settings.input.display().to_string(),
        output_dir: settings.output_dir.display().to_string(),
        found: files.len(),
        processed,
        failed: files.len() - processed,
        files,
    };
    let rendered = serde_json::to_string(&report)
        .map_err(|err| format!("Failed to serialize batch report: {err}"))?;
    println!("{rendered}");
    Ok(())
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_usage() {
    println!("Usage: isplit <INPUT_DIR> [OUTPUT_DIR]");
    println!(
        "       If OUTPUT_DIR is not given, rotated halves are written to an 'output' subfolder of INPUT_DIR."
    );
}
