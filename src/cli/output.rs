use crate::{FileReport, RunSummary};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonFile<'a> {
    source: String,
    original_name: &'a str,
    new_name: &'a str,
    content_changed: bool,
    written_to: Option<String>,
}

#[derive(Debug, Serialize)]
struct JsonSummary<'a> {
    dry_run: bool,
    files_processed: usize,
    files_changed: usize,
    files_failed: usize,
    output_root: Option<String>,
    files: Vec<JsonFile<'a>>,
}

/// One line per candidate file as the walker visits it. JSON mode stays
/// silent here; the whole run is emitted as a single document at the end.
pub fn print_file_report(
    report: &FileReport,
    dry_run: bool,
    colored_output: bool,
    format: &OutputFormat,
) {
    if matches!(format, OutputFormat::Json) {
        return;
    }

    let arrow = format!("{} → {}", report.original_name, report.new_name);

    if dry_run {
        if colored_output {
            println!("  {} {}", "dry-run".yellow().bold(), arrow);
        } else {
            println!("  dry-run {}", arrow);
        }
        if report.content_changed {
            let note = "content changes detected";
            if colored_output {
                println!("    {}", note.dimmed());
            } else {
                println!("    {}", note);
            }
        }
    } else if colored_output {
        println!("  {} {}", "✓".green().bold(), arrow);
    } else {
        println!("  ✓ {}", arrow);
    }
}

pub fn print_run_summary(
    summary: &RunSummary,
    dry_run: bool,
    colored_output: bool,
    format: &OutputFormat,
) {
    if matches!(format, OutputFormat::Json) {
        let doc = JsonSummary {
            dry_run,
            files_processed: summary.files_processed,
            files_changed: summary.files_changed,
            files_failed: summary.files_failed,
            output_root: summary
                .output_root
                .as_ref()
                .map(|path| path.display().to_string()),
            files: summary
                .reports
                .iter()
                .map(|report| JsonFile {
                    source: report.source.display().to_string(),
                    original_name: &report.original_name,
                    new_name: &report.new_name,
                    content_changed: report.content_changed,
                    written_to: report
                        .written_to
                        .as_ref()
                        .map(|path| path.display().to_string()),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&doc).unwrap());
        return;
    }

    println!();
    if dry_run {
        if colored_output {
            println!("{}", "Dry-run complete: no files were modified.".green().bold());
        } else {
            println!("Dry-run complete: no files were modified.");
        }
    } else if let Some(output_root) = &summary.output_root {
        let file_word = if summary.files_processed == 1 {
            "file"
        } else {
            "files"
        };
        if colored_output {
            println!(
                "{} {} {} saved in {}",
                "✓".green().bold(),
                summary.files_processed.to_string().green().bold(),
                file_word,
                output_root.display().to_string().cyan()
            );
        } else {
            println!(
                "✓ {} {} saved in {}",
                summary.files_processed,
                file_word,
                output_root.display()
            );
        }
    }

    if summary.files_failed > 0 {
        let fail_word = if summary.files_failed == 1 {
            "file"
        } else {
            "files"
        };
        if colored_output {
            println!(
                "{} {} {} skipped after I/O errors",
                "✗".red().bold(),
                summary.files_failed.to_string().red().bold(),
                fail_word
            );
        } else {
            println!("✗ {} {} skipped after I/O errors", summary.files_failed, fail_word);
        }
    }
}
