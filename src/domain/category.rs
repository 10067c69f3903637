//! Advocacy categories.
//!
//! The set is closed: every advocacy entry carries exactly one of these.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Subject area of a patient-advocacy entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Legal and ethical rights of patients
    Rights,

    /// Finding and moving through the care system
    Navigation,

    /// Coverage, claims, denials and appeals
    Insurance,

    /// Talking with clinicians
    Communication,

    /// Interpreters and translated materials
    LanguageAccess,

    /// Charity care, payment plans, drug assistance
    FinancialAssistance,

    /// Complaints, advance directives, legal aid
    Legal,

    /// Support for family caregivers
    Caregiving,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 8] = [
        Category::Rights,
        Category::Navigation,
        Category::Insurance,
        Category::Communication,
        Category::LanguageAccess,
        Category::FinancialAssistance,
        Category::Legal,
        Category::Caregiving,
    ];

    /// Kebab-case name, as used in data files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Rights => "rights",
            Category::Navigation => "navigation",
            Category::Insurance => "insurance",
            Category::Communication => "communication",
            Category::LanguageAccess => "language-access",
            Category::FinancialAssistance => "financial-assistance",
            Category::Legal => "legal",
            Category::Caregiving => "caregiving",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known category
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {value}")]
pub struct ParseCategoryError {
    pub value: String,
}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rights" => Ok(Category::Rights),
            "navigation" => Ok(Category::Navigation),
            "insurance" => Ok(Category::Insurance),
            "communication" => Ok(Category::Communication),
            "language-access" | "interpreter" => Ok(Category::LanguageAccess),
            "financial-assistance" | "money" => Ok(Category::FinancialAssistance),
            "legal" => Ok(Category::Legal),
            "caregiving" | "caregiver" => Ok(Category::Caregiving),
            _ => Err(ParseCategoryError {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("rights".parse::<Category>().unwrap(), Category::Rights);
        assert_eq!("RIGHTS".parse::<Category>().unwrap(), Category::Rights);
        assert_eq!(
            "interpreter".parse::<Category>().unwrap(),
            Category::LanguageAccess
        );
        assert_eq!(
            "money".parse::<Category>().unwrap(),
            Category::FinancialAssistance
        );

        let err = "astrology".parse::<Category>().unwrap_err();
        assert_eq!(err.value, "astrology");
    }

    #[test]
    fn test_display_matches_serde_name() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }
}
