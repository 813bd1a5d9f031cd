use serde::{Deserialize, Serialize};

/// Tier assigned to any country missing from [`COUNTRY_TIERS`].
pub const FALLBACK_TIER: u8 = 5;

/// Economic tier per country. Lower tiers are stronger labor markets.
pub const COUNTRY_TIERS: &[(&str, u8)] = &[
    ("United States", 1),
    ("Canada", 1),
    ("United Kingdom", 1),
    ("Germany", 1),
    ("Switzerland", 1),
    ("Netherlands", 1),
    ("Sweden", 1),
    ("Norway", 1),
    ("Denmark", 1),
    ("Ireland", 1),
    ("Australia", 1),
    ("Singapore", 1),
    ("Luxembourg", 1),
    ("France", 2),
    ("Belgium", 2),
    ("Austria", 2),
    ("Finland", 2),
    ("Japan", 2),
    ("South Korea", 2),
    ("New Zealand", 2),
    ("Israel", 2),
    ("United Arab Emirates", 2),
    ("Spain", 2),
    ("Italy", 2),
    ("Hong Kong", 2),
    ("Poland", 3),
    ("Portugal", 3),
    ("Czech Republic", 3),
    ("Estonia", 3),
    ("Lithuania", 3),
    ("Greece", 3),
    ("Hungary", 3),
    ("Chile", 3),
    ("Uruguay", 3),
    ("Saudi Arabia", 3),
    ("Taiwan", 3),
    ("Brazil", 4),
    ("Mexico", 4),
    ("Argentina", 4),
    ("Colombia", 4),
    ("Romania", 4),
    ("Bulgaria", 4),
    ("Serbia", 4),
    ("Ukraine", 4),
    ("Turkey", 4),
    ("South Africa", 4),
    ("China", 4),
    ("Malaysia", 4),
    ("Thailand", 4),
    ("India", 5),
    ("Pakistan", 5),
    ("Bangladesh", 5),
    ("Nigeria", 5),
    ("Kenya", 5),
    ("Egypt", 5),
    ("Philippines", 5),
    ("Vietnam", 5),
    ("Indonesia", 5),
];

/// Alternate spellings accepted in addition to the canonical names.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("usa", "United States"),
    ("us", "United States"),
    ("united states of america", "United States"),
    ("uk", "United Kingdom"),
    ("great britain", "United Kingdom"),
    ("uae", "United Arab Emirates"),
    ("czechia", "Czech Republic"),
    ("korea", "South Korea"),
    ("turkiye", "Turkey"),
];

/// Resolve a country name to its tier, falling back to [`FALLBACK_TIER`].
pub fn country_tier(country: &str) -> u8 {
    lookup_tier(country).unwrap_or(FALLBACK_TIER)
}

/// Returns `None` for names outside the table instead of applying the fallback.
pub fn lookup_tier(country: &str) -> Option<u8> {
    let needle = country.trim();
    if needle.is_empty() {
        return None;
    }

    let canonical = COUNTRY_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(needle))
        .map(|(_, name)| *name)
        .unwrap_or(needle);

    COUNTRY_TIERS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(canonical))
        .map(|(_, tier)| *tier)
}

/// Reach into tier-1 markets, derived from the work country's tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketAccessLevel {
    None,
    Some,
    Strong,
}

impl MarketAccessLevel {
    pub fn label(&self) -> &'static str {
        match self {
            MarketAccessLevel::None => "none",
            MarketAccessLevel::Some => "some",
            MarketAccessLevel::Strong => "strong",
        }
    }
}

pub fn market_access_for_tier(tier: u8) -> MarketAccessLevel {
    match tier {
        0 | 1 => MarketAccessLevel::Strong,
        2 | 3 => MarketAccessLevel::Some,
        _ => MarketAccessLevel::None,
    }
}

pub fn market_access_level(work_country: &str) -> MarketAccessLevel {
    market_access_for_tier(country_tier(work_country))
}
