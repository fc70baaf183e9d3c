//! Athlete profile fixtures: identity, highlights, achievements,
//! personal records, and editable settings.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::model::ParseError;

/// Identity block at the top of the profile page.
#[derive(Debug, Clone)]
pub struct AthleteProfile {
    pub name: String,
    pub tagline: String,
    pub focus_areas: Vec<String>,
}

/// Small stat chip under the profile header.
#[derive(Debug, Clone)]
pub struct StatHighlight {
    pub glyph: &'static str,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub earned_on: NaiveDate,
}

impl Achievement {
    pub fn earned_label(&self) -> String {
        format!("Earned on {}", self.earned_on.format("%b %-d, %Y"))
    }
}

#[derive(Debug, Clone)]
pub struct PersonalRecord {
    pub exercise: String,
    /// Display text for the record: a weight, a pace, or a hold time.
    pub value: String,
    pub recorded_on: NaiveDate,
}

impl PersonalRecord {
    pub fn date_label(&self) -> String {
        self.recorded_on.format("%b %-d, %Y").to_string()
    }
}

/// Tabs on the profile page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Achievements,
    Records,
    Settings,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [
        ProfileTab::Achievements,
        ProfileTab::Records,
        ProfileTab::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileTab::Achievements => "Achievements",
            ProfileTab::Records => "Personal Records",
            ProfileTab::Settings => "Settings",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Measurement system used in the settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

impl UnitSystem {
    pub fn label(self) -> &'static str {
        match self {
            UnitSystem::Imperial => "Imperial (lbs, miles)",
            UnitSystem::Metric => "Metric (kg, km)",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::Imperial => UnitSystem::Metric,
            UnitSystem::Metric => UnitSystem::Imperial,
        }
    }
}

impl FromStr for UnitSystem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "imperial" => Ok(UnitSystem::Imperial),
            "metric" => Ok(UnitSystem::Metric),
            other => Err(ParseError::UnitSystem(other.to_string())),
        }
    }
}

/// Toggleable preferences in the settings tab.
#[derive(Debug, Clone)]
pub struct Preferences {
    pub notifications: bool,
    pub dark_mode: bool,
    pub units: UnitSystem,
}

/// Read-only account fields in the settings tab.
#[derive(Debug, Clone)]
pub struct AccountSettings {
    pub name: String,
    pub email: String,
    pub bio: String,
}
