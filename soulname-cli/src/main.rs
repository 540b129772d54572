//! Soul Name CLI.
//!
//! The terminal front end around `soulname-core`: collects the request,
//! keeps the caller-side history file and renders each result as a card.

mod args;
mod card;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use soulname_core::source::{IndexSource, RecordIdentity, RngIndexSource, SequentialIdentity, SystemIdentity};
use soulname_core::{Gender, History, NameDataset, NameRequest, NameSelector, SoulnameConfig};

use args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SoulnameConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SoulnameConfig::default(),
    };

    let level = if cli.verbose { "debug" } else { config.general.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let dataset = match &cli.dataset {
        Some(path) => NameDataset::from_file(path)
            .with_context(|| format!("loading dataset {}", path.display()))?,
        None => config.dataset.load().context("loading dataset")?,
    };

    if cli.list_vibes {
        print_vibes(&dataset);
        return Ok(());
    }

    let selector = NameSelector::with_config(Arc::new(dataset), config.selector.clone());
    let history = match &cli.history {
        Some(path) => load_history(path)?,
        None => History::new(),
    };

    let history = match cli.seed {
        Some(seed) => {
            let mut identity = SequentialIdentity::after(history.as_slice());
            run(
                &cli,
                &selector,
                history,
                &mut RngIndexSource::seeded(seed),
                &mut identity,
            )?
        }
        None => run(
            &cli,
            &selector,
            history,
            &mut RngIndexSource::from_entropy(),
            &mut SystemIdentity,
        )?,
    };

    if let Some(path) = &cli.history {
        save_history(path, &history)?;
    }
    Ok(())
}

/// Generate `cli.count` names, feeding each one back as history.
fn run(
    cli: &Cli,
    selector: &NameSelector,
    mut history: History,
    rng: &mut impl IndexSource,
    identity: &mut impl RecordIdentity,
) -> Result<History> {
    let gender = Gender::from(cli.gender);
    for attempt in 1..=cli.count {
        let mut request = NameRequest::new(gender, &cli.vibe).with_history(history.as_slice());
        request.birth_year = cli.birth_year;

        let name = selector
            .generate(&request, rng, identity)
            .with_context(|| format!("generating name {attempt} of {}", cli.count))?;
        debug!(id = %name.id, name = %name.local_full_name, "generated");

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&name)?);
        } else {
            println!("{}", card::render(&name));
        }
        history.record(name);
    }
    Ok(history)
}

fn print_vibes(dataset: &NameDataset) {
    for gender in Gender::ALL {
        println!("{gender}:");
        for vibe in dataset.vibe_categories(gender) {
            println!("  {vibe:<12} {} names", dataset.given_names(gender, vibe).len());
        }
    }
}

fn load_history(path: &Path) -> Result<History> {
    if !path.exists() {
        info!(path = %path.display(), "no history file yet, starting fresh");
        return Ok(History::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading history {}", path.display()))?;
    History::from_json(&content).with_context(|| format!("parsing history {}", path.display()))
}

fn save_history(path: &Path, history: &History) -> Result<()> {
    let json = history.to_json()?;
    std::fs::write(path, json).with_context(|| format!("writing history {}", path.display()))?;
    info!(path = %path.display(), entries = history.len(), "history saved");
    Ok(())
}
