//! imbib-import: convert tag files to JSON entries
//!
//! Usage: imbib-import [--config FILE] [--format NAME] [--[no-]validate] [--[no-]pretty] FILES...

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use imbib_import::{
    BibEntry, ConfigOverrides, FormatRegistry, ImportConfig, ImportFormat, ParseOutcome,
};
use impress_entrytypes::EntryTypeRegistry;

#[derive(Parser, Debug)]
#[command(name = "imbib-import", version, about = "Import tag files as BibTeX-style entries")]
struct Args {
    /// Config file (defaults to imbib/import.toml in the config directory)
    #[arg(short, long, value_name = "FILE", env = "IMBIB_IMPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Import format name
    #[arg(short, long, value_name = "NAME")]
    format: Option<String>,

    /// Check entries against the entry-type schemas
    #[arg(long, conflicts_with = "no_validate")]
    validate: bool,

    /// Skip schema checks even if the config file enables them
    #[arg(long)]
    no_validate: bool,

    /// Pretty-print the JSON output
    #[arg(long, conflicts_with = "no_pretty")]
    pretty: bool,

    /// Compact JSON output even if the config file asks for pretty
    #[arg(long)]
    no_pretty: bool,

    /// Files to import
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Serialize)]
struct FileEntries<'a> {
    file: String,
    entries: &'a [BibEntry],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ImportConfig::load(path)?,
        None => ImportConfig::load_default()?,
    };
    config.apply(ConfigOverrides {
        format: args.format,
        validate_entries: switch(args.validate, args.no_validate),
        pretty: switch(args.pretty, args.no_pretty),
    });
    config.validate()?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let formats = FormatRegistry::standard();
    let format = formats.get(&config.format)?;
    let schemas = Arc::new(EntryTypeRegistry::standard());

    info!(
        "Importing {} file(s) as {}",
        args.files.len(),
        format.format_name()
    );

    let results: Vec<(&PathBuf, ParseOutcome)> = args
        .files
        .par_iter()
        .map(|path| {
            let outcome = import_file(format.as_ref(), path);
            if config.validate_entries {
                if let Ok(entries) = &outcome {
                    report_validation(&schemas, path, entries);
                }
            }
            (path, outcome)
        })
        .collect();

    let mut output = Vec::with_capacity(results.len());
    let mut failed = 0usize;
    for (path, outcome) in &results {
        match outcome {
            Ok(entries) => output.push(FileEntries {
                file: path.display().to_string(),
                entries,
            }),
            Err(err) => {
                error!("{}: {}", path.display(), err);
                failed += 1;
            }
        }
    }

    let json = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    if failed > 0 {
        return Err(format!("{} of {} file(s) failed to import", failed, results.len()).into());
    }
    Ok(())
}

/// `--flag` / `--no-flag` pair; `None` when neither was given
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn import_file(format: &dyn ImportFormat, path: &Path) -> ParseOutcome {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    format.import(&mut reader)
}

fn report_validation(schemas: &EntryTypeRegistry, path: &Path, entries: &[BibEntry]) {
    for (index, entry) in entries.iter().enumerate() {
        if let Err(findings) = schemas.validate(&entry.entry_type, &entry.fields) {
            for finding in findings {
                warn!(
                    "{} entry {} ({}): {}",
                    path.display(),
                    index + 1,
                    entry.entry_type,
                    finding
                );
            }
        }
    }
}
