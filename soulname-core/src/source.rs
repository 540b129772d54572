//! Injectable randomness and record identity.
//!
//! The selector never touches a global RNG or clock. Production callers use
//! [`RngIndexSource::from_entropy`] and [`SystemIdentity`]; tests and
//! reproducible runs use [`RngIndexSource::seeded`] and
//! [`SequentialIdentity`].

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::types::{GeneratedName, NameId};

/// Uniform index picker.
pub trait IndexSource {
    /// Return an index in `0..bound`. Callers guarantee `bound > 0`.
    fn pick_index(&mut self, bound: usize) -> usize;
}

/// [`IndexSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngIndexSource<R> {
    rng: R,
}

impl<R: Rng> RngIndexSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngIndexSource<StdRng> {
    /// Deterministic source: same seed, same picks.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> IndexSource for RngIndexSource<R> {
    fn pick_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Supplies a fresh id and creation time for each record.
pub trait RecordIdentity {
    /// A new unique id.
    fn next_id(&mut self) -> NameId;
    /// Creation timestamp for the record being assembled.
    fn now(&mut self) -> DateTime<Utc>;
}

/// Random v4 ids and the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

impl RecordIdentity for SystemIdentity {
    fn next_id(&mut self) -> NameId {
        NameId::new()
    }

    fn now(&mut self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Counting ids (`Uuid::from_u128(1)`, `2`, ...) at a fixed instant.
#[derive(Debug, Clone)]
pub struct SequentialIdentity {
    next: u128,
    at: DateTime<Utc>,
}

impl SequentialIdentity {
    /// Start counting from 1, stamping every record with `at`.
    #[must_use]
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { next: 1, at }
    }

    /// Continue counting after the highest id already present in
    /// `history`, so records appended to it keep unique ids.
    #[must_use]
    pub fn after(history: &[GeneratedName]) -> Self {
        let highest = history.iter().map(|h| h.id.0.as_u128()).max().unwrap_or(0);
        Self {
            next: highest.wrapping_add(1),
            ..Self::default()
        }
    }
}

impl Default for SequentialIdentity {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl RecordIdentity for SequentialIdentity {
    fn next_id(&mut self) -> NameId {
        let id = NameId(Uuid::from_u128(self.next));
        self.next = self.next.wrapping_add(1);
        id
    }

    fn now(&mut self) -> DateTime<Utc> {
        self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_sources_agree() {
        let mut a = RngIndexSource::seeded(7);
        let mut b = RngIndexSource::seeded(7);
        let picks_a: Vec<_> = (0..32).map(|_| a.pick_index(10)).collect();
        let picks_b: Vec<_> = (0..32).map(|_| b.pick_index(10)).collect();
        assert_eq!(picks_a, picks_b);
        assert!(picks_a.iter().all(|&i| i < 10));
    }

    #[test]
    fn bound_of_one_is_always_zero() {
        let mut source = RngIndexSource::from_entropy();
        for _ in 0..16 {
            assert_eq!(source.pick_index(1), 0);
        }
    }

    #[test]
    fn sequential_ids_count_up() {
        let mut ids = SequentialIdentity::default();
        assert_eq!(ids.next_id(), NameId(Uuid::from_u128(1)));
        assert_eq!(ids.next_id(), NameId(Uuid::from_u128(2)));
        assert_eq!(ids.now(), DateTime::<Utc>::UNIX_EPOCH);
    }

    #[test]
    fn after_history_skips_existing_ids() {
        let mut first = SequentialIdentity::default();
        let history: Vec<GeneratedName> = (0..3)
            .map(|_| GeneratedName {
                id: first.next_id(),
                local_full_name: "김서연".to_string(),
                romanized_full_name: "Kim Seo-yeon".to_string(),
                ancestry_markers: String::new(),
                surname_meaning: String::new(),
                given_name_meaning: String::new(),
                interpretation: String::new(),
                created_at: DateTime::<Utc>::UNIX_EPOCH,
            })
            .collect();

        let mut resumed = SequentialIdentity::after(&history);
        let next = resumed.next_id();
        assert_eq!(next, NameId(Uuid::from_u128(4)));
        assert!(history.iter().all(|h| h.id != next));
    }

    #[test]
    fn after_empty_history_starts_at_one() {
        let mut ids = SequentialIdentity::after(&[]);
        assert_eq!(ids.next_id(), NameId(Uuid::from_u128(1)));
    }

    #[test]
    fn system_ids_are_unique() {
        let mut ids = SystemIdentity;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
