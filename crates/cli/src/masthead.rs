//! masthead - Infer running headers/footers, margins and sections
//!
//! A command line tool that reads a pre-extracted document (JSON page
//! content), analyzes its structure and writes the resulting page records as
//! JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use masthead_core::{
    BasicLayoutAnalyzer, JsonContentSource, Page, Pages, ParseSettings, ParseSummary,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Infer document structure (running header/footer, margin, sections) from
/// pre-extracted page content.
#[derive(Parser, Debug)]
#[command(name = "masthead")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON document with page content
    file: PathBuf,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// JSON file with parse settings
    #[arg(short = 's', long)]
    settings: Option<PathBuf>,

    /// Pages to exclude from parsing (1-indexed, comma or space separated)
    #[arg(long)]
    skip: Option<String>,

    /// Worker threads for the per-page phase (overrides the settings file)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    summary: &'a ParseSummary,
    pages: &'a [Page],
}

/// Parse 1-indexed page numbers into zero-indexed page ids.
fn parse_page_numbers(s: &str) -> Result<Vec<usize>> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            let n = s
                .trim()
                .parse::<usize>()
                .with_context(|| format!("invalid page number: {s}"))?;
            n.checked_sub(1)
                .with_context(|| format!("page numbers start at 1, got {s}"))
        })
        .collect()
}

fn load_settings(path: Option<&Path>) -> Result<ParseSettings> {
    let Some(path) = path else {
        return Ok(ParseSettings::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings {}", path.display()))?;
    ParseSettings::from_json(&text)
        .with_context(|| format!("failed to parse settings {}", path.display()))
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let mut settings = load_settings(args.settings.as_deref())?;
    if let Some(threads) = args.threads {
        settings.threads = threads;
    }
    debug!(?settings, "parse settings");

    let source = JsonContentSource::from_path(&args.file)
        .with_context(|| format!("failed to load {}", args.file.display()))?;

    let mut pages = Pages::with_count(source.page_count());
    if let Some(ref skip) = args.skip {
        pages.skip(&parse_page_numbers(skip)?);
    }

    let summary = pages
        .parse(&source, &BasicLayoutAnalyzer, &settings)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    serde_json::to_writer_pretty(
        &mut output,
        &Output {
            summary: &summary,
            pages: &pages,
        },
    )?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers_are_one_indexed() {
        assert_eq!(parse_page_numbers("1, 3 5").unwrap(), vec![0, 2, 4]);
        assert!(parse_page_numbers("2,x").is_err());
    }

    #[test]
    fn page_zero_is_rejected() {
        let err = parse_page_numbers("0,2").unwrap_err();
        assert!(err.to_string().contains("start at 1"));
    }

    #[test]
    fn missing_settings_use_defaults() {
        assert_eq!(load_settings(None).unwrap(), ParseSettings::default());
    }
}
