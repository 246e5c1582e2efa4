pub mod cli;
pub mod config;
pub mod engine;
pub mod walker;

pub use config::Config;
pub use engine::Engine;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    /// The folder handed to the walker does not exist or is not a directory.
    #[error("folder not found: {0}")]
    RootNotFound(PathBuf),

    /// A term the engine cannot substitute safely. Word-boundary matching
    /// assumes terms are non-empty identifier fragments.
    #[error("invalid term {term:?}: {reason}")]
    InvalidTerm { term: String, reason: &'static str },

    #[error("failed to compile term pattern")]
    Pattern(#[from] regex::Error),

    #[error("failed to build variant matcher")]
    Matcher(#[from] aho_corasick::BuildError),
}

/// One rename run: the folder to process and the term pair to apply.
#[derive(Debug, Clone)]
pub struct RenameJob {
    pub root: PathBuf,
    pub original: String,
    pub replacement: String,
    pub dry_run: bool,
}

/// Outcome for a single candidate file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub source: PathBuf,
    pub original_name: String,
    pub new_name: String,
    pub content_changed: bool,
    pub written_to: Option<PathBuf>,
}

impl FileReport {
    pub fn renamed(&self) -> bool {
        self.original_name != self.new_name
    }
}

/// Totals for a whole run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_changed: usize,
    pub files_failed: usize,
    pub output_root: Option<PathBuf>,
    pub reports: Vec<FileReport>,
}
