use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use dialoguer::{theme::ColorfulTheme, Input};
use std::io;
use std::path::PathBuf;
use termswap::cli::output::{self, OutputFormat};
use termswap::{walker, Config, RenameJob};

#[derive(Parser, Debug)]
#[command(name = "termswap")]
#[command(version, about = "Rename a singular noun across a source tree", long_about = None)]
struct Cli {
    /// Folder containing the files to rewrite
    #[arg(value_name = "FOLDER")]
    folder: Option<PathBuf>,

    /// Term to replace (singular, e.g. ride)
    #[arg(short = 't', long)]
    original: Option<String>,

    /// New term (singular, e.g. controlLoop)
    #[arg(short, long)]
    replacement: Option<String>,

    /// Simulate the run without writing any files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Extension of the files to process
    #[arg(short, long)]
    extension: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "termswap", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.extension)?;

    // Anything not given on the command line is asked for interactively
    let folder = match cli.folder {
        Some(folder) => folder,
        None => PathBuf::from(prompt("Folder with source files")?),
    };
    let original = match cli.original {
        Some(original) => original,
        None => prompt("Original term (singular, e.g. ride)")?,
    };
    let replacement = match cli.replacement {
        Some(replacement) => replacement,
        None => prompt("New term (singular, e.g. controlLoop)")?,
    };

    let job = RenameJob {
        root: folder,
        original,
        replacement,
        dry_run: cli.dry_run,
    };

    let summary = walker::process_folder(&job, &config, !cli.no_color, &cli.format)?;
    output::print_run_summary(&summary, job.dry_run, !cli.no_color, &cli.format);

    // Exit non-zero when files had to be skipped
    if summary.files_failed > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .interact_text()?;
    Ok(value.trim().to_string())
}
