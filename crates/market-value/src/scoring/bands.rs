use std::fmt;

use serde::{Deserialize, Serialize};

/// Experience bucket used as part of the benchmark key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExperienceBand {
    #[serde(rename = "0-2")]
    Entry,
    #[serde(rename = "3-5")]
    Developing,
    #[serde(rename = "6-9")]
    Experienced,
    #[serde(rename = "10+")]
    Veteran,
}

impl ExperienceBand {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceBand::Entry => "0-2",
            ExperienceBand::Developing => "3-5",
            ExperienceBand::Experienced => "6-9",
            ExperienceBand::Veteran => "10+",
        }
    }
}

impl fmt::Display for ExperienceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Age bucket reported on anonymized aggregate records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "18-24")]
    Young,
    #[serde(rename = "25-34")]
    EarlyCareer,
    #[serde(rename = "35-44")]
    MidCareer,
    #[serde(rename = "45+")]
    Senior,
}

impl AgeBand {
    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::Young => "18-24",
            AgeBand::EarlyCareer => "25-34",
            AgeBand::MidCareer => "35-44",
            AgeBand::Senior => "45+",
        }
    }
}

/// Language-count bucket. Zero and one language share the lowest band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LanguageBand {
    #[serde(rename = "1")]
    Single,
    #[serde(rename = "2")]
    Bilingual,
    #[serde(rename = "3+")]
    Multilingual,
}

impl LanguageBand {
    pub fn label(&self) -> &'static str {
        match self {
            LanguageBand::Single => "1",
            LanguageBand::Bilingual => "2",
            LanguageBand::Multilingual => "3+",
        }
    }
}

/// Upper bounds are inclusive: 2 years is still `0-2`, 3 years is `3-5`.
pub fn experience_band(years: f64) -> ExperienceBand {
    if years <= 2.0 {
        ExperienceBand::Entry
    } else if years <= 5.0 {
        ExperienceBand::Developing
    } else if years <= 9.0 {
        ExperienceBand::Experienced
    } else {
        ExperienceBand::Veteran
    }
}

pub fn age_band(age: u32) -> AgeBand {
    if age <= 24 {
        AgeBand::Young
    } else if age <= 34 {
        AgeBand::EarlyCareer
    } else if age <= 44 {
        AgeBand::MidCareer
    } else {
        AgeBand::Senior
    }
}

pub fn language_band(count: u32) -> LanguageBand {
    if count >= 3 {
        LanguageBand::Multilingual
    } else if count == 2 {
        LanguageBand::Bilingual
    } else {
        LanguageBand::Single
    }
}

/// Saturating clamp. Unlike `f64::clamp` this never panics when `min > max`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    min.max(max.min(value))
}
