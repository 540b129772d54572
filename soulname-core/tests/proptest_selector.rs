//! Property-Based Tests for the Name Selector
//!
//! Uses `proptest` to check selection invariants over random seeds, vibes,
//! birth years and history shapes.

use std::sync::Arc;

use proptest::prelude::*;

use soulname_core::dataset::{NameDataset, VibeTable};
use soulname_core::interpretation::zodiac_sentence;
use soulname_core::source::{RngIndexSource, SequentialIdentity};
use soulname_core::zodiac::ZodiacAnimal;
use soulname_core::{Gender, GeneratedName, NameRequest, NameSelector};

fn selector() -> NameSelector {
    NameSelector::new(Arc::new(NameDataset::builtin().expect("builtin").clone()))
}

/// One surname and one vibe, so every pick shares the surname and only the
/// duplicate filter separates repeated full names.
fn single_surname_selector(gender: Gender, vibe: &str) -> NameSelector {
    let builtin = NameDataset::builtin().expect("builtin");
    let table: VibeTable = [(vibe.to_string(), builtin.given_names(gender, vibe).to_vec())]
        .into_iter()
        .collect();
    let (male, female) = match gender {
        Gender::Male => (table, VibeTable::new()),
        Gender::Female => (VibeTable::new(), table),
    };
    let dataset = NameDataset::new(builtin.surnames()[..1].to_vec(), male, female);
    NameSelector::new(Arc::new(dataset))
}

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn arb_vibe() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("strength".to_string()),
        Just("wisdom".to_string()),
        Just("grace".to_string()),
        Just("creativity".to_string()),
        "[a-z_]{1,12}",
    ]
}

// ---------------------------------------------------------------------------
// Property: full names are always a dataset surname + dataset given name
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn full_name_is_surname_plus_given(seed in any::<u64>(), gender in arb_gender(), vibe in arb_vibe()) {
        let selector = selector();
        let request = NameRequest::new(gender, &vibe);
        let name = selector
            .generate(&request, &mut RngIndexSource::seeded(seed), &mut SequentialIdentity::default())
            .expect("builtin catalog always yields a name");

        let dataset = selector.dataset();
        let requested = dataset.given_names(gender, &vibe);
        let pool: Vec<_> = if requested.is_empty() {
            dataset
                .vibe_categories(gender)
                .flat_map(|v| dataset.given_names(gender, v))
                .collect()
        } else {
            requested.iter().collect()
        };

        let matched = dataset.surnames().iter().any(|s| {
            pool.iter().any(|g| {
                name.local_full_name == format!("{}{}", s.local_form, g.local_form)
                    && name.romanized_full_name == format!("{} {}", s.romanized_form, g.romanized_form)
            })
        });
        prop_assert!(matched, "{} / {} not drawn from one pair", name.local_full_name, name.romanized_full_name);
    }
}

// ---------------------------------------------------------------------------
// Property: zodiac depends only on year mod 12
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn zodiac_is_periodic(year in -5000..5000i32, cycles in -50..50i32) {
        let shifted = year + 12 * cycles;
        prop_assert_eq!(ZodiacAnimal::from_year(year), ZodiacAnimal::from_year(shifted));
        prop_assert_eq!(zodiac_sentence(year), zodiac_sentence(shifted));
    }
}

// ---------------------------------------------------------------------------
// Property: same seed, same inputs → same record
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn seeded_generation_is_deterministic(
        seed in any::<u64>(),
        gender in arb_gender(),
        vibe in arb_vibe(),
        year in proptest::option::of(1900..2100i32),
    ) {
        let selector = selector();
        let mut request = NameRequest::new(gender, &vibe);
        request.birth_year = year;

        let a = selector
            .generate(&request, &mut RngIndexSource::seeded(seed), &mut SequentialIdentity::default())
            .expect("generate");
        let b = selector
            .generate(&request, &mut RngIndexSource::seeded(seed), &mut SequentialIdentity::default())
            .expect("generate");
        prop_assert_eq!(a, b);
    }
}

// ---------------------------------------------------------------------------
// Property: a history of five identical names is avoided
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn five_identical_recent_names_are_avoided(seed in any::<u64>(), gender in arb_gender()) {
        let vibe = match gender {
            Gender::Male => "strength",
            Gender::Female => "grace",
        };
        let selector = single_surname_selector(gender, vibe);
        prop_assert!(selector.dataset().given_names(gender, vibe).len() > 1);
        let mut rng = RngIndexSource::seeded(seed);
        let mut ids = SequentialIdentity::default();

        let first = selector
            .generate(&NameRequest::new(gender, vibe), &mut rng, &mut ids)
            .expect("generate");
        let history: Vec<GeneratedName> = (0..5).map(|_| first.clone()).collect();

        let next = selector
            .generate(&NameRequest::new(gender, vibe).with_history(&history), &mut rng, &mut ids)
            .expect("generate");
        prop_assert_eq!(&next.surname_meaning, &first.surname_meaning);
        prop_assert_ne!(next.local_full_name, first.local_full_name);
    }
}
