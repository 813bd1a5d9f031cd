use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of role families the benchmark tables are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Software,
    Product,
    Design,
    Data,
    Marketing,
    Sales,
    Operations,
    Finance,
}

impl RoleCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RoleCategory::Software => "software",
            RoleCategory::Product => "product",
            RoleCategory::Design => "design",
            RoleCategory::Data => "data",
            RoleCategory::Marketing => "marketing",
            RoleCategory::Sales => "sales",
            RoleCategory::Operations => "operations",
            RoleCategory::Finance => "finance",
        }
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category returned when no keyword matches.
pub const DEFAULT_ROLE_CATEGORY: RoleCategory = RoleCategory::Operations;

/// Keyword table in match order. A title that hits two categories resolves to
/// whichever appears first here ("data engineer" is `software`).
pub const ROLE_KEYWORDS: [(RoleCategory, &[&str]); 8] = [
    (
        RoleCategory::Software,
        &[
            "engineer",
            "developer",
            "software",
            "frontend",
            "backend",
            "fullstack",
            "mobile",
            "devops",
        ],
    ),
    (RoleCategory::Product, &["product", "pm", "owner", "growth"]),
    (
        RoleCategory::Design,
        &["design", "designer", "ux", "ui", "graphic", "visual"],
    ),
    (
        RoleCategory::Data,
        &[
            "data",
            "analyst",
            "analytics",
            "ml",
            "machine learning",
            "ai",
            "scientist",
        ],
    ),
    (
        RoleCategory::Marketing,
        &["marketing", "brand", "content", "seo", "social", "copy"],
    ),
    (
        RoleCategory::Sales,
        &["sales", "account", "bizdev", "business development"],
    ),
    (
        RoleCategory::Operations,
        &[
            "ops",
            "operations",
            "people",
            "hr",
            "talent",
            "project",
            "program",
        ],
    ),
    (
        RoleCategory::Finance,
        &["finance", "accounting", "fp&a", "controller", "audit"],
    ),
];

/// Map a free-text title onto a role category by substring match.
pub fn normalize_role(input: &str) -> RoleCategory {
    let value = input.to_lowercase();
    ROLE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| value.contains(keyword)))
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_ROLE_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive() {
        assert_eq!(normalize_role("Senior Software Engineer"), RoleCategory::Software);
        assert_eq!(normalize_role("UX RESEARCHER"), RoleCategory::Design);
        assert_eq!(normalize_role("Head of SEO"), RoleCategory::Marketing);
        assert_eq!(normalize_role("Financial Controller"), RoleCategory::Finance);
    }

    #[test]
    fn earlier_category_wins_on_overlap() {
        assert_eq!(normalize_role("Data Engineer"), RoleCategory::Software);
        assert_eq!(normalize_role("Product Designer"), RoleCategory::Product);
        assert_eq!(normalize_role("Sales Operations Lead"), RoleCategory::Sales);
    }

    #[test]
    fn short_keywords_match_inside_words() {
        // "ai" is a substring of "chair"; order keeps this in `data`.
        assert_eq!(normalize_role("Board Chair"), RoleCategory::Data);
        assert_eq!(normalize_role("Technical PM"), RoleCategory::Product);
    }

    #[test]
    fn unmatched_titles_fall_back_to_operations() {
        assert_eq!(normalize_role("Chief Happiness Officer"), RoleCategory::Operations);
        assert_eq!(normalize_role(""), DEFAULT_ROLE_CATEGORY);
    }

    #[test]
    fn keyword_table_follows_declared_order() {
        let order: Vec<_> = ROLE_KEYWORDS.iter().map(|(category, _)| *category).collect();
        assert_eq!(
            order,
            vec![
                RoleCategory::Software,
                RoleCategory::Product,
                RoleCategory::Design,
                RoleCategory::Data,
                RoleCategory::Marketing,
                RoleCategory::Sales,
                RoleCategory::Operations,
                RoleCategory::Finance,
            ]
        );
    }
}
