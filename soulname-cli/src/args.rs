//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use soulname_core::Gender;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate a Korean name from a vibe and a birth year
#[derive(Debug, Parser)]
#[command(name = "soulname")]
#[command(version = VERSION)]
#[command(about = "Discover your Korean identity")]
#[command(long_about = "
Generate a Korean name (surname + given name) that matches a vibe,
with a zodiac reading for the birth year.

Common Usage:

  # One name with a zodiac reading
  soulname --gender female --vibe grace --birth-year 1990

  # Keep a history file so recent names are not repeated
  soulname --gender male --vibe wisdom --history names.json

  # Reproducible batch
  soulname --gender male --vibe humor --count 20 --seed 7

  # Show the available vibes
  soulname --list-vibes
")]
pub struct Cli {
    /// Gender axis for the given name
    #[arg(short, long, value_enum, default_value = "female")]
    pub gender: GenderArg,

    /// Vibe category (unknown vibes fall back to a random one)
    #[arg(short, long, default_value = "grace")]
    pub vibe: String,

    /// Birth year for the zodiac reading
    #[arg(short, long)]
    pub birth_year: Option<i32>,

    /// How many names to generate in a row
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Seed for reproducible output (also switches to sequential ids)
    #[arg(long, env = "SOULNAME_SEED")]
    pub seed: Option<u64>,

    /// JSON history file, read before and written after generating
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// JSON name catalog to use instead of the built-in one
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, env = "SOULNAME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print records as JSON instead of cards
    #[arg(long)]
    pub json: bool,

    /// List vibe categories for both genders and exit
    #[arg(long)]
    pub list_vibes: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}

/// Gender as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    /// Male given names
    Male,
    /// Female given names
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}
