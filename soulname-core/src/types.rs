//! Core type definitions for Soul Name.
//!
//! All types are serializable so a caller can keep its generated history
//! as a JSON document between sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::SoulnameError;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Unique identifier for a generated name record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameId(pub Uuid);

impl NameId {
    /// Create a new random name ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Gender
// ---------------------------------------------------------------------------

/// Gender axis under which given names are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male given names (`male_vibes` in the dataset).
    Male,
    /// Female given names (`female_vibes` in the dataset).
    Female,
}

impl Gender {
    /// Both genders, in dataset order.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Lowercase label used in requests and documents.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = SoulnameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(SoulnameError::Config(format!("unknown gender: {other:?}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / Result
// ---------------------------------------------------------------------------

/// A single generation request.
///
/// `recent_history` must be ordered newest-first; the selector only looks at
/// its leading entries and never sorts it.
#[derive(Debug, Clone, Copy)]
pub struct NameRequest<'a> {
    /// Which gender's given names to draw from.
    pub gender: Gender,
    /// Requested vibe category. Unknown values fall back to a random one.
    pub vibe: &'a str,
    /// Birth year used for zodiac flavor text.
    pub birth_year: Option<i32>,
    /// Previously generated names, newest first.
    pub recent_history: &'a [GeneratedName],
}

impl<'a> NameRequest<'a> {
    /// Request with no birth year and no history.
    #[must_use]
    pub fn new(gender: Gender, vibe: &'a str) -> Self {
        Self {
            gender,
            vibe,
            birth_year: None,
            recent_history: &[],
        }
    }

    /// Attach a birth year.
    #[must_use]
    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    /// Attach the caller's history (newest first).
    #[must_use]
    pub fn with_history(mut self, history: &'a [GeneratedName]) -> Self {
        self.recent_history = history;
        self
    }
}

/// A fully assembled name. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedName {
    /// Unique record ID.
    pub id: NameId,
    /// Surname and given name in Hangul, no separator (e.g. "김서연").
    pub local_full_name: String,
    /// Romanized surname and given name joined by a space (e.g. "Kim Seo-yeon").
    pub romanized_full_name: String,
    /// Surname hanja followed by the given name's hanja, if any.
    pub ancestry_markers: String,
    /// Meaning of the chosen surname.
    pub surname_meaning: String,
    /// Meaning of the chosen given name.
    pub given_name_meaning: String,
    /// Zodiac flavor text plus the meaning summary.
    pub interpretation: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}
