//! Implementation of the `icusay check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use icusay::parser::parse_template;
use icusay::{compile_placeholder, Translations};
use miette::{IntoDiagnostic, Report};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use crate::output::diagnostic::{JsonDiagnostic, PlaceholderDiagnostic};
use crate::output::table::{format_summary_table, FileSummary};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Translation files to check (flat JSON objects of key to template)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One placeholder that failed to compile.
#[derive(Serialize)]
pub struct Problem {
    pub file: String,
    pub key: String,
    pub placeholder: String,
    pub error: String,
}

#[derive(Serialize)]
struct CheckReport {
    files: Vec<FileSummary>,
    problems: Vec<Problem>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut summaries = Vec::new();
    let mut problems = Vec::new();
    let mut reports = Vec::new();

    for path in &args.files {
        let content = read_to_string(path).map_err(|e| {
            miette::miette!("Cannot read translation file {}: {}", path.display(), e)
        })?;
        let file = path.display().to_string();

        let translations: Translations = match serde_json::from_str(&content) {
            Ok(translations) => translations,
            Err(e) => {
                problems.push(Problem {
                    file: file.clone(),
                    key: String::new(),
                    placeholder: String::new(),
                    error: e.to_string(),
                });
                reports.push(Report::new(JsonDiagnostic::from_json_error(path, &content, &e)));
                summaries.push(FileSummary {
                    file,
                    messages: 0,
                    placeholders: 0,
                    errors: 1,
                });
                continue;
            }
        };

        let mut summary = FileSummary {
            file: file.clone(),
            messages: translations.len(),
            placeholders: 0,
            errors: 0,
        };
        for (key, template) in translations.iter() {
            for spec in parse_template(template).placeholders() {
                summary.placeholders += 1;
                let Err(e) = compile_placeholder(spec.kind_str(), spec.format.as_deref()) else {
                    continue;
                };
                summary.errors += 1;
                reports.push(Report::new(PlaceholderDiagnostic::new(
                    path,
                    &content,
                    key,
                    &spec.literal,
                    &e,
                )));
                problems.push(Problem {
                    file: file.clone(),
                    key: key.to_string(),
                    placeholder: spec.literal.clone(),
                    error: e.to_string(),
                });
            }
        }
        debug!(file = %summary.file, placeholders = summary.placeholders, errors = summary.errors, "Checked translation file");
        summaries.push(summary);
    }

    let failed = !problems.is_empty();
    if args.json {
        let report = CheckReport {
            files: summaries,
            problems,
        };
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    } else {
        for report in &reports {
            eprintln!("{:?}", report);
        }
        println!("{}", format_summary_table(&summaries));
        if failed {
            let line = format!("{} placeholder(s) failed to compile", problems.len());
            println!("{}", line.if_supports_color(Stream::Stdout, |t| t.red()));
        } else {
            let line = "All placeholders compile";
            println!("{}", line.if_supports_color(Stream::Stdout, |t| t.green()));
        }
    }

    Ok(if failed { exitcode::DATAERR } else { exitcode::OK })
}
