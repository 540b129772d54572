//! # Soul Name Core Library
//!
//! Generates a Korean name (surname + given name) from a gender and a
//! "vibe" category, with zodiac flavor text derived from the birth year.
//!
//! - [`NameDataset`] — read-only catalog of surnames and given names,
//!   grouped by gender and vibe
//! - [`NameSelector`] — random selection, recent-duplicate avoidance and
//!   interpretation assembly
//! - [`History`] — the caller's newest-first list of results
//!
//! ```
//! use std::sync::Arc;
//! use soulname_core::{Gender, NameDataset, NameRequest, NameSelector};
//! use soulname_core::source::{RngIndexSource, SystemIdentity};
//!
//! let dataset = Arc::new(NameDataset::builtin()?.clone());
//! let selector = NameSelector::new(dataset);
//! let request = NameRequest::new(Gender::Female, "grace").with_birth_year(1990);
//! let name = selector.generate(&request, &mut RngIndexSource::from_entropy(), &mut SystemIdentity)?;
//! assert!(name.interpretation.starts_with("Born in the Year of the Horse"));
//! # Ok::<(), soulname_core::SoulnameError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod history;
pub mod interpretation;
pub mod selector;
pub mod source;
pub mod types;
pub mod zodiac;

pub use config::SoulnameConfig;
pub use dataset::{GivenName, NameDataset, Surname};
pub use error::SoulnameError;
pub use history::History;
pub use selector::NameSelector;
pub use types::*;
pub use zodiac::ZodiacAnimal;
