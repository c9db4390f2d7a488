//! tvmark command-line parser
//!
//! Parses release names given as arguments, or one per line on stdin, and
//! prints one JSON object per name. With `--check` it runs a fixture file
//! instead and reports every name that does not resolve as expected.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use tvmark_core::{EpisodeParser, MarkerKind, ParsedResult, ParserConfig};

/// CLI arguments
#[derive(Parser)]
#[command(name = "tvmark-parse")]
#[command(about = "Extract title, season and episode from TV release names")]
#[command(version)]
struct Cli {
    /// Release names to parse (reads stdin when omitted)
    names: Vec<String>,

    /// JSON parser configuration file
    #[arg(short, long, env = "TVMARK_CONFIG")]
    config: Option<PathBuf>,

    /// Check a JSON fixture file of {input, title, season, episode} entries
    #[arg(long, conflicts_with = "names")]
    check: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Log matcher decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct ParseOutput<'a> {
    input: &'a str,
    normalized: &'a str,
    matched: bool,
    title: &'a str,
    season: Option<u32>,
    episode: Option<u32>,
    marker: Option<&'a str>,
    marker_kind: Option<MarkerKind>,
}

impl<'a> From<&'a ParsedResult> for ParseOutput<'a> {
    fn from(r: &'a ParsedResult) -> Self {
        Self {
            input: &r.input,
            normalized: &r.normalized,
            matched: r.is_matched(),
            title: &r.title,
            season: r.season,
            episode: r.episode,
            marker: r.marker.as_ref().map(|m| m.text.as_str()),
            marker_kind: r.marker.as_ref().map(|m| m.kind),
        }
    }
}

/// One entry of a fixture file.
#[derive(Debug, Deserialize)]
struct Fixture {
    input: String,
    title: String,
    season: u32,
    episode: u32,
}

fn load_config(path: Option<&Path>) -> Result<ParserConfig> {
    let Some(path) = path else {
        return Ok(ParserConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))
}

fn write_result(out: &mut impl Write, result: &ParsedResult, pretty: bool) -> Result<()> {
    let output = ParseOutput::from(result);
    if pretty {
        serde_json::to_writer_pretty(&mut *out, &output)?;
    } else {
        serde_json::to_writer(&mut *out, &output)?;
    }
    writeln!(out)?;
    Ok(())
}

fn check_fixtures(parser: &EpisodeParser, path: &Path) -> Result<ExitCode> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read fixtures {}", path.display()))?;
    let fixtures: Vec<Fixture> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse fixtures {}", path.display()))?;

    let mut failed = 0usize;
    for fixture in &fixtures {
        let result = parser.parse(&fixture.input);
        if !result.is_match(&fixture.title, fixture.season, fixture.episode) {
            failed += 1;
            warn!(
                input = %fixture.input,
                expected_title = %fixture.title,
                expected_season = fixture.season,
                expected_episode = fixture.episode,
                got = %result,
                "fixture mismatch"
            );
        }
    }

    info!(total = fixtures.len(), failed, "fixture check finished");
    println!("{}/{} fixtures passed", fixtures.len() - failed, fixtures.len());

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;
    let parser = EpisodeParser::with_config(config).context("invalid parser configuration")?;

    if let Some(path) = cli.check.as_deref() {
        return check_fixtures(&parser, path);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.names.is_empty() {
        for name in &cli.names {
            write_result(&mut out, &parser.parse(name), cli.pretty)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        write_result(&mut out, &parser.parse(line), cli.pretty)?;
    }

    Ok(ExitCode::SUCCESS)
}
