//! Interpretation text assembled for every generated name.
//!
//! ```text
//! [Born in the Year of the {animal}, this name carries the spirit of a {adjective} {animal}. ]
//! The surname [{surname.en}] means "{surname.meaning}", and the name [{given.en}]
//! represents "{given.meaning}". Together, it embodies a presence of {vibe} and
//! {surname.meaning, lowercased}.
//! ```

use crate::dataset::{GivenName, Surname};
use crate::zodiac::ZodiacAnimal;

/// Opening zodiac sentence, including its trailing space.
#[must_use]
pub fn zodiac_sentence(birth_year: i32) -> String {
    let animal = ZodiacAnimal::from_year(birth_year);
    format!(
        "Born in the Year of the {animal}, this name carries the spirit of a {adjective} {animal}. ",
        adjective = animal.adjective()
    )
}

/// Full interpretation for a surname/given-name pair.
///
/// `vibe` is echoed as the caller requested it, even when selection fell
/// back to a different category.
#[must_use]
pub fn interpret(surname: &Surname, given: &GivenName, vibe: &str, birth_year: Option<i32>) -> String {
    let zodiac = birth_year.map(zodiac_sentence).unwrap_or_default();
    format!(
        "{zodiac}The surname [{}] means \"{}\", and the name [{}] represents \"{}\". \
         Together, it embodies a presence of {} and {}.",
        surname.romanized_form,
        surname.meaning,
        given.romanized_form,
        given.meaning,
        vibe,
        surname.meaning.to_lowercase(),
    )
}
