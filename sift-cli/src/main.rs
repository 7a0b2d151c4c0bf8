//! Sift CLI
//!
//! Sanitize a string, a file, or a JSON document from the command line.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use owo_colors::OwoColorize;
use serde_json::Value;
use sift_filter::{FilterKind, InputFilter};
use sift_html::{ListMode, SanitizerConfig};
use strum::IntoEnumIterator;

/// Sift: strip script-bearing markup and coerce untrusted input
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Strip every tag (default policy)
    sift '<b>hi</b><script>alert(1)</script>'

    # Keep links, but only their href
    sift --tags a --attrs href '<a href="/x" onclick="y()">x</a>'

    # Coerce to an integer
    sift --type int '  +42 abc'

    # Clean every string in a JSON document
    sift --json --file request.json

    # Load the policy from a file
    sift --config policy.json --file page.html
"#)]
struct Cli {
    /// Text to clean; stdin is read when neither this nor --file is given
    #[arg(value_name = "INPUT", conflicts_with = "file")]
    input: Option<String>,

    /// Read the input from a file
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Filter type (int, uint, float, bool, word, alnum, cmd, base64, string,
    /// html, path, trim, username, raw, array)
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "html")]
    kind: String,

    /// JSON policy file (tags, attributes, tag_mode, attribute_mode, xss_auto_clean)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Comma-separated tag names for the tag list
    #[arg(long, value_delimiter = ',')]
    tags: Vec<String>,

    /// Comma-separated attribute names for the attribute list
    #[arg(long, value_delimiter = ',')]
    attrs: Vec<String>,

    /// How the tag list is read: allow or block
    #[arg(long, value_parser = ListMode::parse)]
    tag_mode: Option<ListMode>,

    /// How the attribute list is read: allow or block
    #[arg(long, value_parser = ListMode::parse)]
    attr_mode: Option<ListMode>,

    /// Disable the fixed tag/attribute blacklists
    #[arg(long)]
    no_xss_auto: bool,

    /// Parse the input as JSON and clean it recursively
    #[arg(long)]
    json: bool,

    /// Print a size summary to stderr
    #[arg(long)]
    stats: bool,

    /// List the known filter types and exit
    #[arg(long)]
    list_types: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_types {
        for kind in FilterKind::iter() {
            println!("{}", kind.to_string().to_lowercase());
        }
        return Ok(());
    }

    let filter = InputFilter::new(build_config(&cli)?);
    let source = read_input(&cli)?;

    let value: Value = if cli.json {
        serde_json::from_str(&source).context("input is not valid JSON")?
    } else {
        Value::String(source.clone())
    };

    let cleaned = filter.clean(&value, &cli.kind);
    let rendered = match (&cleaned, cli.json) {
        (Value::String(text), false) => text.clone(),
        (_, true) => serde_json::to_string_pretty(&cleaned)?,
        (other, false) => other.to_string(),
    };
    println!("{rendered}");

    if cli.stats {
        print_stats(&source, &rendered);
    }

    Ok(())
}

/// Install the logger; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Start from the config file (or the defaults) and apply flag overrides.
fn build_config(cli: &Cli) -> Result<SanitizerConfig> {
    let base = match &cli.config {
        Some(path) => SanitizerConfig::from_path(path)
            .with_context(|| format!("loading policy from {}", path.display()))?,
        None => SanitizerConfig::default(),
    };

    let tags: Vec<String> = if cli.tags.is_empty() {
        base.tag_allow_list().iter().cloned().collect()
    } else {
        cli.tags.clone()
    };
    let attributes: Vec<String> = if cli.attrs.is_empty() {
        base.attribute_allow_list().iter().cloned().collect()
    } else {
        cli.attrs.clone()
    };

    Ok(SanitizerConfig::new(
        tags,
        attributes,
        cli.tag_mode.unwrap_or(base.tag_mode()),
        cli.attr_mode.unwrap_or(base.attribute_mode()),
        base.xss_auto_clean() && !cli.no_xss_auto,
    ))
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(ref input) = cli.input {
        return Ok(input.clone());
    }
    if let Some(ref path) = cli.file {
        return fs::read_to_string(path).with_context(|| format!("reading {}", path.display()));
    }

    let mut buffer = String::new();
    let _ = io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}

fn print_stats(source: &str, output: &str) {
    let removed = source.len().saturating_sub(output.len());
    let verdict = if source == output {
        "unchanged".green().to_string()
    } else {
        "modified".yellow().to_string()
    };
    eprintln!(
        "{} {} bytes in, {} bytes out, {} removed ({verdict})",
        "[sift]".bold(),
        source.len(),
        output.len(),
        removed
    );
}
