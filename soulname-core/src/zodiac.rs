//! Twelve-year zodiac cycle used for the interpretation's opening sentence.
//!
//! The table is indexed by `year mod 12` and starts at Monkey, so
//! 2016 → Monkey, 2020 → Rat, 1990 → Horse.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Adjective used when an animal name has no mapping.
pub const DEFAULT_ADJECTIVE: &str = "Spirited";

/// One of the twelve zodiac animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacAnimal {
    /// 申
    Monkey,
    /// 酉
    Rooster,
    /// 戌
    Dog,
    /// 亥
    Pig,
    /// 子
    Rat,
    /// 丑
    Ox,
    /// 寅
    Tiger,
    /// 卯
    Rabbit,
    /// 辰
    Dragon,
    /// 巳
    Snake,
    /// 午
    Horse,
    /// 未
    Sheep,
}

/// Cycle order; position `i` is the animal for years with `year mod 12 == i`.
pub const ZODIAC_CYCLE: [ZodiacAnimal; 12] = [
    ZodiacAnimal::Monkey,
    ZodiacAnimal::Rooster,
    ZodiacAnimal::Dog,
    ZodiacAnimal::Pig,
    ZodiacAnimal::Rat,
    ZodiacAnimal::Ox,
    ZodiacAnimal::Tiger,
    ZodiacAnimal::Rabbit,
    ZodiacAnimal::Dragon,
    ZodiacAnimal::Snake,
    ZodiacAnimal::Horse,
    ZodiacAnimal::Sheep,
];

impl ZodiacAnimal {
    /// Animal for a birth year. Negative years wrap with Euclidean remainder.
    #[must_use]
    pub fn from_year(year: i32) -> Self {
        // rem_euclid(12) is always in 0..12
        #[allow(clippy::cast_sign_loss)]
        let index = year.rem_euclid(12) as usize;
        ZODIAC_CYCLE[index]
    }

    /// English animal name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Sheep => "Sheep",
        }
    }

    /// Character adjective for this animal.
    #[must_use]
    pub fn adjective(self) -> &'static str {
        adjective_for(self.name())
    }
}

impl fmt::Display for ZodiacAnimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Adjective lookup by animal name, [`DEFAULT_ADJECTIVE`] when unmapped.
#[must_use]
pub fn adjective_for(animal: &str) -> &'static str {
    match animal {
        "Rat" => "Witty",
        "Ox" => "Diligent",
        "Tiger" => "Brave",
        "Rabbit" => "Gentle",
        "Dragon" => "Charismatic",
        "Snake" => "Wise",
        "Horse" => "Energetic",
        "Sheep" => "Peaceful",
        "Monkey" => "Clever",
        "Rooster" => "Observant",
        "Dog" => "Loyal",
        "Pig" => "Generous",
        _ => DEFAULT_ADJECTIVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_years() {
        assert_eq!(ZodiacAnimal::from_year(1990), ZodiacAnimal::Horse);
        assert_eq!(ZodiacAnimal::from_year(2020), ZodiacAnimal::Rat);
        assert_eq!(ZodiacAnimal::from_year(2016), ZodiacAnimal::Monkey);
        assert_eq!(ZodiacAnimal::from_year(2024), ZodiacAnimal::Dragon);
        assert_eq!(ZodiacAnimal::from_year(1985), ZodiacAnimal::Ox);
    }

    #[test]
    fn negative_years_wrap() {
        assert_eq!(ZodiacAnimal::from_year(-1), ZodiacAnimal::Sheep);
        assert_eq!(ZodiacAnimal::from_year(-12), ZodiacAnimal::Monkey);
    }

    #[test]
    fn every_animal_has_its_own_adjective() {
        for animal in ZODIAC_CYCLE {
            assert_ne!(animal.adjective(), DEFAULT_ADJECTIVE, "{animal} unmapped");
        }
        assert_eq!(ZodiacAnimal::Horse.adjective(), "Energetic");
    }

    #[test]
    fn unmapped_name_gets_default() {
        assert_eq!(adjective_for("Cat"), "Spirited");
    }
}
