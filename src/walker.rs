use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::cli::output::{self, OutputFormat};
use crate::engine::Engine;
use crate::{Config, FileReport, RenameError, RenameJob, RunSummary};

/// Process every candidate file under the job's root folder.
///
/// Candidate files are transformed by the engine and written into a sibling
/// output tree mirroring the source layout, or only reported in dry-run
/// mode. Per-file I/O failures are logged and skipped; they never abort the
/// batch.
pub fn process_folder(
    job: &RenameJob,
    config: &Config,
    colored: bool,
    format: &OutputFormat,
) -> Result<RunSummary> {
    if !job.root.is_dir() {
        return Err(RenameError::RootNotFound(job.root.clone()).into());
    }

    let root = job
        .root
        .canonicalize()
        .with_context(|| format!("Failed to resolve folder: {}", job.root.display()))?;

    let engine = Engine::new(&job.original, &job.replacement)?;
    let output_root = output_root_for(&root, &job.replacement, &config.output_marker);
    let suffix = format!(".{}", config.extension.trim_start_matches('.'));

    if !job.dry_run {
        fs::create_dir_all(&output_root)
            .with_context(|| format!("Failed to create output folder: {}", output_root.display()))?;
    }

    let mut summary = RunSummary {
        output_root: (!job.dry_run).then(|| output_root.clone()),
        ..Default::default()
    };

    let marker = config.output_marker.clone();
    let entries = WalkDir::new(&root).into_iter().filter_entry(move |entry| {
        // Never re-process prior output trees; the root itself is exempt
        // from the name check.
        entry.depth() == 0
            || !(entry.file_type().is_dir()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| name.starts_with(&marker)))
    });

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("Warning: skipping unreadable entry: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = match entry.file_name().to_str() {
            Some(name) if name.ends_with(&suffix) => name.to_string(),
            _ => continue,
        };

        match process_file(entry.path(), &file_name, &root, &output_root, &engine, job.dry_run) {
            Ok(report) => {
                summary.files_processed += 1;
                if report.content_changed || report.renamed() {
                    summary.files_changed += 1;
                }
                output::print_file_report(&report, job.dry_run, colored, format);
                summary.reports.push(report);
            }
            Err(err) => {
                summary.files_failed += 1;
                eprintln!("Error: {err:#}");
            }
        }
    }

    Ok(summary)
}

/// Output lands next to the source tree, never inside it:
/// `store` becomes `store_output_trip`.
fn output_root_for(root: &Path, replacement: &str, marker: &str) -> PathBuf {
    let name = root
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("renamed");
    root.with_file_name(format!("{name}{marker}{replacement}"))
}

fn process_file(
    path: &Path,
    file_name: &str,
    root: &Path,
    output_root: &Path,
    engine: &Engine,
    dry_run: bool,
) -> Result<FileReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let updated = engine.rewrite_content(&content);
    let new_name = engine.rewrite_filename(file_name);

    let rel_dir = path
        .parent()
        .unwrap_or(root)
        .strip_prefix(root)
        .unwrap_or_else(|_| Path::new(""));
    let target_dir = output_root.join(rel_dir);
    let target = target_dir.join(&new_name);

    let written_to = if dry_run {
        None
    } else {
        fs::create_dir_all(&target_dir)
            .with_context(|| format!("Failed to create output directory: {}", target_dir.display()))?;
        fs::write(&target, &updated)
            .with_context(|| format!("Failed to write file: {}", target.display()))?;
        Some(target)
    };

    Ok(FileReport {
        source: path.to_path_buf(),
        original_name: file_name.to_string(),
        new_name,
        content_changed: updated != content,
        written_to,
    })
}
