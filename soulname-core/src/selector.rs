//! Name selection.
//!
//! One call to [`NameSelector::generate`] runs:
//!
//! 1. Uniform surname pick.
//! 2. Candidate pool for (gender, vibe); unknown or empty vibes fall back to
//!    a random non-empty category of the same gender.
//! 3. Duplicate avoidance against the newest `history_window` records. If
//!    every candidate would repeat one of them the filter is dropped, so
//!    avoidance is a preference and never a failure.
//! 4. Uniform given-name pick, record assembly, interpretation.
//!
//! The selector keeps no state between calls. History, randomness and
//! identity all arrive as arguments.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::config::SelectorConfig;
use crate::dataset::{GivenName, NameDataset, Surname};
use crate::error::{Result, SoulnameError};
use crate::interpretation;
use crate::source::{IndexSource, RecordIdentity};
use crate::types::{GeneratedName, NameRequest};

/// Produces [`GeneratedName`] records from a shared catalog.
#[derive(Debug, Clone)]
pub struct NameSelector {
    dataset: Arc<NameDataset>,
    config: SelectorConfig,
}

impl NameSelector {
    /// Selector over `dataset` with default settings.
    #[must_use]
    pub fn new(dataset: Arc<NameDataset>) -> Self {
        Self::with_config(dataset, SelectorConfig::default())
    }

    /// Selector with explicit settings.
    #[must_use]
    pub fn with_config(dataset: Arc<NameDataset>, config: SelectorConfig) -> Self {
        Self { dataset, config }
    }

    /// The catalog this selector reads.
    #[must_use]
    pub fn dataset(&self) -> &NameDataset {
        &self.dataset
    }

    /// Generate one name.
    ///
    /// # Errors
    /// Returns [`SoulnameError::EmptyPool`] when there are no surnames, or
    /// when the gender has no given names in any category.
    pub fn generate(
        &self,
        request: &NameRequest<'_>,
        rng: &mut impl IndexSource,
        identity: &mut impl RecordIdentity,
    ) -> Result<GeneratedName> {
        let surname = pick(self.dataset.surnames(), rng, || "surnames".to_string())?;

        let pool = self.candidate_pool(request, rng)?;
        let eligible = self.without_recent(pool, surname, request.recent_history);
        let given = pick(&eligible, rng, || format!("{} given names", request.gender))?;

        Ok(assemble(surname, given, request, identity))
    }

    fn candidate_pool(&self, request: &NameRequest<'_>, rng: &mut impl IndexSource) -> Result<&[GivenName]> {
        let requested = self.dataset.given_names(request.gender, request.vibe);
        if !requested.is_empty() {
            return Ok(requested);
        }

        let populated: Vec<&str> = self
            .dataset
            .vibe_categories(request.gender)
            .filter(|vibe| !self.dataset.given_names(request.gender, vibe).is_empty())
            .collect();
        let fallback = pick(&populated, rng, || format!("{} given names", request.gender))?;

        debug!(
            gender = %request.gender,
            requested = request.vibe,
            fallback = *fallback,
            "vibe has no candidates, falling back"
        );
        Ok(self.dataset.given_names(request.gender, fallback))
    }

    /// Candidates whose full name is not among the newest history entries.
    /// Falls back to the whole pool when filtering would leave nothing.
    fn without_recent<'d>(
        &self,
        pool: &'d [GivenName],
        surname: &Surname,
        history: &[GeneratedName],
    ) -> Vec<&'d GivenName> {
        let window = self.config.history_window.min(history.len());
        if window == 0 {
            return pool.iter().collect();
        }

        let recent: HashSet<&str> = history[..window]
            .iter()
            .map(|h| h.local_full_name.as_str())
            .collect();

        let filtered: Vec<&GivenName> = pool
            .iter()
            .filter(|given| !recent.contains(full_local_name(surname, given).as_str()))
            .collect();

        if filtered.is_empty() {
            debug!(
                surname = %surname.local_form,
                pool = pool.len(),
                window,
                "every candidate repeats recent history, allowing duplicates"
            );
            return pool.iter().collect();
        }
        filtered
    }
}

fn full_local_name(surname: &Surname, given: &GivenName) -> String {
    format!("{}{}", surname.local_form, given.local_form)
}

/// Uniform pick that refuses to index an empty slice.
fn pick<'a, T>(
    items: &'a [T],
    rng: &mut impl IndexSource,
    what: impl FnOnce() -> String,
) -> Result<&'a T> {
    if items.is_empty() {
        return Err(SoulnameError::empty_pool(what()));
    }
    items
        .get(rng.pick_index(items.len()))
        .ok_or_else(|| SoulnameError::empty_pool(what()))
}

fn assemble(
    surname: &Surname,
    given: &GivenName,
    request: &NameRequest<'_>,
    identity: &mut impl RecordIdentity,
) -> GeneratedName {
    GeneratedName {
        id: identity.next_id(),
        local_full_name: full_local_name(surname, given),
        romanized_full_name: format!("{} {}", surname.romanized_form, given.romanized_form),
        ancestry_markers: format!(
            "{}{}",
            surname.ancestry_marker,
            given.ancestry_marker.as_deref().unwrap_or_default()
        ),
        surname_meaning: surname.meaning.clone(),
        given_name_meaning: given.meaning.clone(),
        interpretation: interpretation::interpret(surname, given, request.vibe, request.birth_year),
        created_at: identity.now(),
    }
}
