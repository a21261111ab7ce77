// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Paperwright CLI — export loosely-structured text to a paginated PDF.
//
// Entry point. Initialises logging, parses arguments and runs one export per
// invocation.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use paperwright_core::error::{PaperwrightError, Result};
use paperwright_core::{DocumentKind, ExportConfig, ExportRequest, PaperSize, humanize_error};
use paperwright_document::{DocumentAssembler, classify, sanitize};

#[derive(Parser)]
#[command(name = "paperwright")]
#[command(version)]
#[command(about = "Export loosely-structured text to a paginated PDF", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a text file to PDF
    Export {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (defaults to "<name>.pdf" in the current directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Document name used for the title and output file (defaults to the input file stem)
        #[arg(long)]
        name: Option<String>,

        /// Mark the document as a translation
        #[arg(long)]
        translated: bool,

        /// Paper size (ignored when --config sets the geometry)
        #[arg(long, value_enum, default_value = "a4")]
        paper: Paper,

        /// JSON export configuration
        #[arg(long, env = "PAPERWRIGHT_CONFIG", value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Print the classified blocks as JSON
    Blocks {
        /// Input text file ("-" for stdin)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Paper {
    A4,
    A3,
    A5,
    Letter,
    Legal,
}

impl From<Paper> for PaperSize {
    fn from(paper: Paper) -> Self {
        match paper {
            Paper::A4 => PaperSize::A4,
            Paper::A3 => PaperSize::A3,
            Paper::A5 => PaperSize::A5,
            Paper::Letter => PaperSize::Letter,
            Paper::Legal => PaperSize::Legal,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Export {
            input,
            output,
            name,
            translated,
            paper,
            config,
        } => run_export(ExportArgs {
            input,
            output,
            name,
            translated,
            paper: paper.into(),
            config,
        }),
        Commands::Blocks { input } => run_blocks(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let human = humanize_error(&err);
            tracing::error!(error = %err, "command failed");
            eprintln!("error: {}", human.message);
            if human.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

struct ExportArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    name: Option<String>,
    translated: bool,
    paper: PaperSize,
    config: Option<PathBuf>,
}

fn run_export(args: ExportArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => ExportConfig::from_json_file(path)?,
        None => ExportConfig::for_paper(args.paper),
    };
    let assembler = DocumentAssembler::new(config)?;

    let content = read_input(&args.input)?;
    let file_name = args
        .name
        .or_else(|| default_name(&args.input))
        .ok_or_else(|| PaperwrightError::InvalidInput("fileName is required; pass --name".into()))?;
    let kind = if args.translated {
        DocumentKind::Translated
    } else {
        DocumentKind::Original
    };

    let request = ExportRequest::new(content, file_name, kind);
    let document = assembler.export_pdf(&request)?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&document.file_name));
    std::fs::write(&output, &document.bytes)?;

    println!(
        "{}: {} page(s), {} bytes",
        output.display(),
        document.page_count,
        document.content_length()
    );
    Ok(())
}

fn run_blocks(input: &Path) -> Result<()> {
    let content = read_input(input)?;
    let blocks = classify(&sanitize(&content));
    println!("{}", serde_json::to_string_pretty(&blocks)?);
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

/// Input file stem, or nothing when reading stdin.
fn default_name(input: &Path) -> Option<String> {
    if input.as_os_str() == "-" {
        return None;
    }
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.trim().is_empty())
}
