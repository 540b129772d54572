//! The static name catalog.
//!
//! Loaded once, never written afterwards. The document shape is:
//!
//! ```text
//! {
//!   "surnames":     [ { "kr", "en", "hanja", "meaning" }, ... ],
//!   "male_vibes":   { "<vibe>": [ { "kr", "en", "hanja"?, "meaning" }, ... ] },
//!   "female_vibes": { "<vibe>": [ { "kr", "en", "hanja"?, "meaning" }, ... ] }
//! }
//! ```
//!
//! Lookups never fall back: an unknown vibe yields an empty slice and the
//! selector decides what to do about it.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SoulnameError};
use crate::types::Gender;

/// The catalog compiled into the crate.
const BUILTIN_JSON: &str = include_str!("../data/names_db.json");

static BUILTIN: OnceLock<NameDataset> = OnceLock::new();

/// Vibe key → ordered given-name candidates.
pub type VibeTable = BTreeMap<String, Vec<GivenName>>;

/// A family name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surname {
    /// Hangul form (e.g. "김").
    #[serde(rename = "kr")]
    pub local_form: String,
    /// Romanized form (e.g. "Kim").
    #[serde(rename = "en")]
    pub romanized_form: String,
    /// Hanja (e.g. "金").
    #[serde(rename = "hanja")]
    pub ancestry_marker: String,
    /// English meaning.
    pub meaning: String,
}

/// A given-name candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GivenName {
    /// Hangul form (e.g. "서연").
    #[serde(rename = "kr")]
    pub local_form: String,
    /// Romanized form (e.g. "Seo-yeon").
    #[serde(rename = "en")]
    pub romanized_form: String,
    /// Hanja, absent for native Korean names.
    #[serde(rename = "hanja", default, skip_serializing_if = "Option::is_none")]
    pub ancestry_marker: Option<String>,
    /// English meaning.
    pub meaning: String,
}

/// A structural problem found by [`NameDataset::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    /// The surname list is empty.
    NoSurnames,
    /// A gender has no given names in any category.
    NoGivenNames(Gender),
    /// A category exists but has no entries.
    EmptyCategory {
        /// Gender axis.
        gender: Gender,
        /// Vibe key.
        vibe: String,
    },
    /// An entry has a blank local or romanized form.
    BlankForm {
        /// Where the entry lives ("surnames" or "female/grace").
        location: String,
        /// Position within its list.
        index: usize,
    },
}

impl std::fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSurnames => write!(f, "no surnames"),
            Self::NoGivenNames(gender) => write!(f, "no {gender} given names"),
            Self::EmptyCategory { gender, vibe } => write!(f, "empty category {gender}/{vibe}"),
            Self::BlankForm { location, index } => write!(f, "blank form at {location}[{index}]"),
        }
    }
}

/// Entry counts, for logs and the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    /// Number of surnames.
    pub surnames: usize,
    /// Number of male vibe categories.
    pub male_categories: usize,
    /// Number of male given names across categories.
    pub male_given_names: usize,
    /// Number of female vibe categories.
    pub female_categories: usize,
    /// Number of female given names across categories.
    pub female_given_names: usize,
}

/// Read-only name catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameDataset {
    #[serde(default)]
    surnames: Vec<Surname>,
    #[serde(default)]
    male_vibes: VibeTable,
    #[serde(default)]
    female_vibes: VibeTable,
}

impl NameDataset {
    /// Build a catalog in code.
    #[must_use]
    pub fn new(surnames: Vec<Surname>, male_vibes: VibeTable, female_vibes: VibeTable) -> Self {
        Self {
            surnames,
            male_vibes,
            female_vibes,
        }
    }

    /// Parse a catalog document.
    ///
    /// # Errors
    /// Returns [`SoulnameError::Dataset`] if the JSON does not match the
    /// expected shape. Empty lists are accepted.
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Self =
            serde_json::from_str(json).map_err(|e| SoulnameError::Dataset(e.to_string()))?;
        let stats = dataset.stats();
        info!(
            surnames = stats.surnames,
            male = stats.male_given_names,
            female = stats.female_given_names,
            "name dataset loaded"
        );
        for issue in dataset.validate() {
            warn!(%issue, "name dataset issue");
        }
        Ok(dataset)
    }

    /// Read and parse a catalog file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The catalog embedded in the crate, parsed on first use and shared for
    /// the rest of the process.
    ///
    /// # Errors
    /// Returns [`SoulnameError::Dataset`] if the embedded document is malformed.
    pub fn builtin() -> Result<&'static Self> {
        if let Some(dataset) = BUILTIN.get() {
            return Ok(dataset);
        }
        let parsed = Self::from_json(BUILTIN_JSON)?;
        Ok(BUILTIN.get_or_init(|| parsed))
    }

    /// All surnames in document order.
    #[must_use]
    pub fn surnames(&self) -> &[Surname] {
        &self.surnames
    }

    /// Candidates for `gender` under `vibe`. Empty if the vibe is unknown.
    #[must_use]
    pub fn given_names(&self, gender: Gender, vibe: &str) -> &[GivenName] {
        self.table(gender).get(vibe).map(Vec::as_slice).unwrap_or_default()
    }

    /// Vibe keys defined for `gender`, in sorted order.
    pub fn vibe_categories(&self, gender: Gender) -> impl Iterator<Item = &str> {
        self.table(gender).keys().map(String::as_str)
    }

    /// Whether `vibe` is a defined category for `gender`.
    #[must_use]
    pub fn has_vibe(&self, gender: Gender, vibe: &str) -> bool {
        self.table(gender).contains_key(vibe)
    }

    /// Entry counts.
    #[must_use]
    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            surnames: self.surnames.len(),
            male_categories: self.male_vibes.len(),
            male_given_names: self.male_vibes.values().map(Vec::len).sum(),
            female_categories: self.female_vibes.len(),
            female_given_names: self.female_vibes.values().map(Vec::len).sum(),
        }
    }

    /// Structural problems that would make some requests fail or produce
    /// odd output. An empty result means every request can be served.
    #[must_use]
    pub fn validate(&self) -> Vec<DatasetIssue> {
        let mut issues = Vec::new();

        if self.surnames.is_empty() {
            issues.push(DatasetIssue::NoSurnames);
        }
        for (index, surname) in self.surnames.iter().enumerate() {
            if surname.local_form.trim().is_empty() || surname.romanized_form.trim().is_empty() {
                issues.push(DatasetIssue::BlankForm {
                    location: "surnames".to_string(),
                    index,
                });
            }
        }

        for gender in Gender::ALL {
            let table = self.table(gender);
            if table.values().all(Vec::is_empty) {
                issues.push(DatasetIssue::NoGivenNames(gender));
            }
            for (vibe, names) in table {
                if names.is_empty() {
                    issues.push(DatasetIssue::EmptyCategory {
                        gender,
                        vibe: vibe.clone(),
                    });
                }
                for (index, name) in names.iter().enumerate() {
                    if name.local_form.trim().is_empty() || name.romanized_form.trim().is_empty() {
                        issues.push(DatasetIssue::BlankForm {
                            location: format!("{gender}/{vibe}"),
                            index,
                        });
                    }
                }
            }
        }

        issues
    }

    fn table(&self, gender: Gender) -> &VibeTable {
        match gender {
            Gender::Male => &self.male_vibes,
            Gender::Female => &self.female_vibes,
        }
    }
}
