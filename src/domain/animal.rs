// SPDX-License-Identifier: MPL-2.0
//! Animal records as received from the pet API.
//!
//! Records are immutable snapshots. The server is the source of truth for
//! identity, so `id` uniqueness is not enforced here.

use std::fmt;

/// Description value that marks a female animal (exact match).
pub const FEMALE_MARKER: &str = "Weiblich";

/// Leading description segment that marks a male animal.
pub const MALE_MARKER: &str = "Männlich";

/// Separator between the sex marker and the rest of a description.
const DESCRIPTION_SEPARATOR: char = ',';

/// Server-assigned identity of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimalId(i64);

impl AnimalId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Animal kind decoded from the integer species code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    /// Species code 1.
    Dog,
    /// Species code 2.
    Cat,
    /// Any other code, displayed as the raw number.
    Other(i64),
}

impl Species {
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Species::Dog,
            2 => Species::Cat,
            other => Species::Other(other),
        }
    }

    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Species::Dog => 1,
            Species::Cat => 2,
            Species::Other(code) => code,
        }
    }
}

/// Sex encoded in the leading token of an animal description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
    Unknown,
}

impl Sex {
    /// Derives the sex from a description.
    ///
    /// Female requires the whole description to equal [`FEMALE_MARKER`];
    /// male only looks at the segment before the first comma. Both
    /// comparisons are case-sensitive and untrimmed.
    #[must_use]
    pub fn from_description(description: Option<&str>) -> Self {
        let Some(description) = description else {
            return Sex::Unknown;
        };

        if description == FEMALE_MARKER {
            return Sex::Female;
        }

        let first_segment = description
            .split(DESCRIPTION_SEPARATOR)
            .next()
            .unwrap_or_default();
        if first_segment == MALE_MARKER {
            Sex::Male
        } else {
            Sex::Unknown
        }
    }
}

/// One pet record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub species: Species,
    /// Whether the row shows the extra detail panel. Computed by
    /// [`DetailPanelRule`], never sent by the server.
    pub has_detail_panel: bool,
}

impl Animal {
    /// Creates a record with no image, no description and no detail panel.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, species: Species) -> Self {
        Self {
            id: AnimalId::new(id),
            name: name.into(),
            image_url: None,
            description: None,
            species,
            has_detail_panel: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_detail_panel(mut self, has_detail_panel: bool) -> Self {
        self.has_detail_panel = has_detail_panel;
        self
    }

    #[must_use]
    pub fn sex(&self) -> Sex {
        Sex::from_description(self.description.as_deref())
    }

    /// Returns the image URL only when it is a non-empty string.
    #[must_use]
    pub fn displayable_image_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Decides which records get the extra detail panel.
///
/// The panel is a single-item affordance keyed on configured record ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPanelRule {
    ids: Vec<AnimalId>,
}

impl DetailPanelRule {
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            ids: ids.into_iter().map(AnimalId::new).collect(),
        }
    }

    #[must_use]
    pub fn applies_to(&self, id: AnimalId) -> bool {
        self.ids.contains(&id)
    }

    /// Sets the capability flag on each record according to this rule.
    pub fn apply(&self, animals: &mut [Animal]) {
        for animal in animals {
            animal.has_detail_panel = self.applies_to(animal.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_maps_known_codes() {
        assert_eq!(Species::from_code(1), Species::Dog);
        assert_eq!(Species::from_code(2), Species::Cat);
        assert_eq!(Species::from_code(7), Species::Other(7));
        assert_eq!(Species::Other(7).code(), 7);
    }

    #[test]
    fn female_requires_exact_description() {
        assert_eq!(Sex::from_description(Some("Weiblich")), Sex::Female);
        assert_eq!(Sex::from_description(Some("Weiblich, x")), Sex::Unknown);
        assert_eq!(Sex::from_description(Some("weiblich")), Sex::Unknown);
        assert_eq!(Sex::from_description(Some(" Weiblich")), Sex::Unknown);
    }

    #[test]
    fn male_matches_first_segment() {
        assert_eq!(Sex::from_description(Some("Männlich")), Sex::Male);
        assert_eq!(Sex::from_description(Some("Männlich, kastriert")), Sex::Male);
        assert_eq!(Sex::from_description(Some("Männlich kastriert")), Sex::Unknown);
        assert_eq!(Sex::from_description(Some("anything else")), Sex::Unknown);
    }

    #[test]
    fn absent_description_is_unknown() {
        assert_eq!(Sex::from_description(None), Sex::Unknown);
        assert_eq!(Sex::from_description(Some("")), Sex::Unknown);
    }

    #[test]
    fn empty_image_url_is_not_displayable() {
        let animal = Animal::new(1, "Rex", Species::Dog).with_image_url("");
        assert_eq!(animal.displayable_image_url(), None);

        let animal = animal.with_image_url("https://pets.example/rex.png");
        assert_eq!(
            animal.displayable_image_url(),
            Some("https://pets.example/rex.png")
        );
    }

    #[test]
    fn detail_panel_rule_flags_configured_ids_only() {
        let rule = DetailPanelRule::new([1680]);
        let mut animals = vec![
            Animal::new(1, "Rex", Species::Dog),
            Animal::new(1680, "Mia", Species::Cat).with_detail_panel(false),
        ];

        rule.apply(&mut animals);

        assert!(!animals[0].has_detail_panel);
        assert!(animals[1].has_detail_panel);
    }

    #[test]
    fn empty_rule_clears_flags() {
        let mut animals = vec![Animal::new(1680, "Mia", Species::Cat).with_detail_panel(true)];
        DetailPanelRule::default().apply(&mut animals);
        assert!(!animals[0].has_detail_panel);
    }
}
