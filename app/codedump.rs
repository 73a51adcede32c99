//! Command-line interface for codedump.
//!
//! Scans a directory and writes the consolidated report to `code.txt`
//! (or another file, or stdout), or prints a summary and tree preview.

use clap::{Parser, ValueEnum};
use codedump::{DEFAULT_OUTPUT_FILE, ScanBuilder, ScanOptions, ScanResult, output, scan};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// codedump — flatten a codebase into one text report
#[derive(Parser)]
#[command(name = "codedump", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Print the summary and structure tree only; nothing is written
    #[arg(short, long)]
    preview: bool,

    /// Count lines, functions and classes per file (heuristic)
    #[arg(short, long, visible_alias = "enhanced")]
    analyze: bool,

    /// Output file, or `-` for stdout
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Additional extensions to include, comma separated (e.g. "vue,svelte")
    #[arg(long, value_delimiter = ',')]
    extensions: Vec<String>,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// File size limit in bytes (larger files have content omitted)
    #[arg(long)]
    max_file_size: Option<u64>,

    /// Include files of unrecognized types as plain text
    #[arg(long)]
    include_unknown: bool,

    /// Also honor .gitignore files
    #[arg(long)]
    gitignore: bool,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for output::OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => output::OutputFormat::Text,
            Format::Json => output::OutputFormat::Json,
        }
    }
}

impl Cli {
    fn writes_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }

    fn to_options(&self) -> ScanOptions {
        let mut builder = ScanBuilder::new(&self.path)
            .analyze(self.analyze)
            .extra_extensions(&self.extensions)
            .ignore_patterns(self.ignore_patterns.clone())
            .include_unknown(self.include_unknown)
            .respect_gitignore(self.gitignore)
            .follow_links(self.follow_links);
        if let Some(limit) = self.max_file_size {
            builder = builder.max_file_size(limit);
        }
        if !self.writes_stdout() {
            builder = builder.exclude_path(&self.output);
        }
        builder.build()
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "codedump=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let options = cli.to_options();

    let result = match scan(&options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.preview {
        print!("{}", output::render_preview(&result));
        println!("Found {} code files", result.tree.files().len());
        return ExitCode::SUCCESS;
    }

    match write_output(&cli, &result) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn write_output(cli: &Cli, result: &ScanResult) -> Result<(), codedump::CodedumpError> {
    let format = cli.format.into();
    if cli.writes_stdout() {
        let text = output::format_result(result, format)?;
        io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .map_err(|e| codedump::CodedumpError::Io {
                path: PathBuf::from("<stdout>"),
                source: e,
            })?;
        return Ok(());
    }

    let written = output::write_result_to_file(result, format, &cli.output)?;
    let summary = result.summary();
    println!(
        "Found {} code files in {} directories",
        summary.total_files, summary.total_directories
    );
    if let (Some(functions), Some(classes)) = (summary.total_functions, summary.total_classes) {
        println!("Code analysis: {} functions, {} classes found", functions, classes);
    }
    println!("Successfully generated: {}", cli.output.display());
    println!("File size: {} bytes", written);
    Ok(())
}
