// SPDX-License-Identifier: MPL-2.0
//! Roster filtering types for the domain layer.
//!
//! Filtering is a pure, order-preserving selection over the records the
//! server returned. It never reorders and never fails on incomplete records.
//!
//! # Available Filters
//!
//! - [`FilterTag::All`]: every record
//! - [`FilterTag::Dog`] / [`FilterTag::Cat`]: by species code
//! - [`FilterTag::Female`] / [`FilterTag::Male`]: by the sex marker in the description

use super::animal::{Animal, Sex, Species};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Filter Tag
// =============================================================================

/// The active display filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterTag {
    /// No filter: show every record.
    #[default]
    All,
    Dog,
    Cat,
    Female,
    Male,
}

impl FilterTag {
    /// Every tag, in control-surface order.
    pub const ALL_TAGS: [FilterTag; 5] = [
        FilterTag::All,
        FilterTag::Female,
        FilterTag::Male,
        FilterTag::Dog,
        FilterTag::Cat,
    ];

    /// Returns `true` if `animal` is visible under this filter.
    ///
    /// This is a pure domain check. An absent description never matches
    /// the sex filters.
    #[must_use]
    pub fn matches(&self, animal: &Animal) -> bool {
        match self {
            Self::All => true,
            Self::Dog => animal.species == Species::Dog,
            Self::Cat => animal.species == Species::Cat,
            Self::Female => animal.sex() == Sex::Female,
            Self::Male => animal.sex() == Sex::Male,
        }
    }

    /// Returns `true` if this filter is active (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }

    /// Literal used on the command line and in diagnostics.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Female => "female",
            Self::Male => "male",
        }
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown filter literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilterTag(pub String);

impl fmt::Display for UnknownFilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown filter '{}' (expected all, dog, cat, female or male)",
            self.0
        )
    }
}

impl std::error::Error for UnknownFilterTag {}

impl FromStr for FilterTag {
    type Err = UnknownFilterTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(Self::All),
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            other => Err(UnknownFilterTag(other.to_string())),
        }
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Returns the records visible under `tag`, in their original order.
#[must_use]
pub fn apply(animals: &[Animal], tag: FilterTag) -> Vec<&Animal> {
    animals.iter().filter(|animal| tag.matches(animal)).collect()
}

/// Number of records each filter would show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCounts {
    pub all: usize,
    pub dog: usize,
    pub cat: usize,
    pub female: usize,
    pub male: usize,
}

impl FilterCounts {
    #[must_use]
    pub fn tally(animals: &[Animal]) -> Self {
        let mut counts = Self {
            all: animals.len(),
            ..Self::default()
        };
        for animal in animals {
            match animal.species {
                Species::Dog => counts.dog += 1,
                Species::Cat => counts.cat += 1,
                Species::Other(_) => {}
            }
            match animal.sex() {
                Sex::Female => counts.female += 1,
                Sex::Male => counts.male += 1,
                Sex::Unknown => {}
            }
        }
        counts
    }

    #[must_use]
    pub fn get(&self, tag: FilterTag) -> usize {
        match tag {
            FilterTag::All => self.all,
            FilterTag::Dog => self.dog,
            FilterTag::Cat => self.cat,
            FilterTag::Female => self.female,
            FilterTag::Male => self.male,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Animal> {
        vec![
            Animal::new(1, "Rex", Species::Dog).with_description("Männlich"),
            Animal::new(2, "Mia", Species::Cat).with_description("Weiblich"),
            Animal::new(3, "Hopper", Species::Other(5)).with_description("Männlich, kastriert"),
            Animal::new(4, "Nemo", Species::Other(9)),
        ]
    }

    fn ids(animals: &[&Animal]) -> Vec<i64> {
        animals.iter().map(|a| a.id.value()).collect()
    }

    // -------------------------------------------------------------------------
    // Predicate
    // -------------------------------------------------------------------------

    #[test]
    fn all_matches_everything() {
        for animal in sample() {
            assert!(FilterTag::All.matches(&animal));
        }
        assert!(!FilterTag::All.is_active());
    }

    #[test]
    fn species_filters_use_codes() {
        let dog = Animal::new(1, "Rex", Species::from_code(1));
        let cat = Animal::new(2, "Mia", Species::from_code(2));
        let other = Animal::new(3, "Hopper", Species::from_code(3));

        assert!(FilterTag::Dog.matches(&dog));
        assert!(!FilterTag::Dog.matches(&cat));
        assert!(FilterTag::Cat.matches(&cat));
        assert!(!FilterTag::Cat.matches(&dog));
        assert!(!FilterTag::Dog.matches(&other));
        assert!(!FilterTag::Cat.matches(&other));
    }

    #[test]
    fn female_is_exact_match() {
        let exact = Animal::new(1, "Mia", Species::Cat).with_description("Weiblich");
        let prefixed = Animal::new(2, "Luna", Species::Cat).with_description("Weiblich, x");

        assert!(FilterTag::Female.matches(&exact));
        assert!(!FilterTag::Female.matches(&prefixed));
    }

    #[test]
    fn male_matches_leading_segment() {
        let male = Animal::new(1, "Rex", Species::Dog).with_description("Männlich, x");
        let other = Animal::new(2, "Bo", Species::Dog).with_description("anything else");

        assert!(FilterTag::Male.matches(&male));
        assert!(!FilterTag::Male.matches(&other));
    }

    #[test]
    fn absent_description_never_matches_sex_filters() {
        let bare = Animal::new(1, "Ghost", Species::Dog);
        assert!(!FilterTag::Male.matches(&bare));
        assert!(!FilterTag::Female.matches(&bare));
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    #[test]
    fn apply_preserves_order() {
        let animals = sample();
        assert_eq!(ids(&apply(&animals, FilterTag::All)), vec![1, 2, 3, 4]);
        assert_eq!(ids(&apply(&animals, FilterTag::Male)), vec![1, 3]);
    }

    #[test]
    fn dog_and_cat_scenario() {
        let animals = vec![
            Animal::new(1, "Rex", Species::Dog).with_description("Männlich"),
            Animal::new(2, "Mia", Species::Cat).with_description("Weiblich"),
        ];

        assert_eq!(ids(&apply(&animals, FilterTag::Dog)), vec![1]);
        assert_eq!(ids(&apply(&animals, FilterTag::Cat)), vec![2]);
        assert_eq!(ids(&apply(&animals, "".parse().unwrap())), vec![1, 2]);
    }

    #[test]
    fn apply_on_empty_input_is_empty() {
        assert!(apply(&[], FilterTag::Dog).is_empty());
    }

    #[test]
    fn counts_match_apply() {
        let animals = sample();
        let counts = FilterCounts::tally(&animals);
        for tag in FilterTag::ALL_TAGS {
            assert_eq!(counts.get(tag), apply(&animals, tag).len(), "tag {tag}");
        }
    }

    // -------------------------------------------------------------------------
    // Parsing
    // -------------------------------------------------------------------------

    #[test]
    fn parses_literals() {
        assert_eq!("".parse::<FilterTag>(), Ok(FilterTag::All));
        assert_eq!("all".parse::<FilterTag>(), Ok(FilterTag::All));
        assert_eq!("dog".parse::<FilterTag>(), Ok(FilterTag::Dog));
        assert_eq!("cat".parse::<FilterTag>(), Ok(FilterTag::Cat));
        assert_eq!("female".parse::<FilterTag>(), Ok(FilterTag::Female));
        assert_eq!("male".parse::<FilterTag>(), Ok(FilterTag::Male));
        assert!("Dog".parse::<FilterTag>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for tag in FilterTag::ALL_TAGS {
            assert_eq!(tag.to_string().parse::<FilterTag>(), Ok(tag));
        }
    }
}
