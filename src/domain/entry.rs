//! Patient-advocacy entries and their identifiers.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::Category;

/// Stable identifier of a record, unique across the whole corpus
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Display language for localized fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language: {0} (expected 'es' or 'en')")]
pub struct ParseLanguageError(pub String);

impl std::str::FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "es" | "spanish" | "espanol" | "español" => Ok(Language::Es),
            "en" | "english" => Ok(Language::En),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Es => write!(f, "es"),
            Language::En => write!(f, "en"),
        }
    }
}

/// A single patient-advocacy topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    pub id: EntryId,

    pub category: Category,

    /// English display name
    pub name: String,

    /// Spanish display name
    #[serde(default)]
    pub name_es: String,

    /// One-paragraph description
    pub description: String,

    /// Longer explanatory body
    #[serde(default)]
    pub explanation: String,

    #[serde(default)]
    pub key_points: Vec<String>,

    #[serde(default)]
    pub action_steps: Vec<String>,

    /// Organizations, hotlines, documents
    #[serde(default)]
    pub resources: Vec<String>,

    /// Related records, informational only
    #[serde(default)]
    pub cross_references: Vec<EntryId>,
}

impl ContentEntry {
    /// Create an entry with the required fields; the rest start empty
    pub fn new(
        id: impl Into<EntryId>,
        category: Category,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            name: name.into(),
            name_es: String::new(),
            description: description.into(),
            explanation: String::new(),
            key_points: Vec::new(),
            action_steps: Vec::new(),
            resources: Vec::new(),
            cross_references: Vec::new(),
        }
    }

    pub fn with_name_es(mut self, name_es: impl Into<String>) -> Self {
        self.name_es = name_es.into();
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn with_key_points(mut self, points: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.key_points.extend(points.into_iter().map(Into::into));
        self
    }

    pub fn with_action_steps(mut self, steps: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.action_steps.extend(steps.into_iter().map(Into::into));
        self
    }

    pub fn with_resources(
        mut self,
        resources: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.resources.extend(resources.into_iter().map(Into::into));
        self
    }

    pub fn with_cross_reference(mut self, target: impl Into<EntryId>) -> Self {
        self.cross_references.push(target.into());
        self
    }

    /// Name in the requested language, falling back to English
    pub fn localized_name(&self, language: Language) -> &str {
        match language {
            Language::Es if !self.name_es.is_empty() => &self.name_es,
            _ => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_builder() {
        let entry = ContentEntry::new(
            "appeals",
            Category::Insurance,
            "Appeals",
            "fight a denial",
        )
        .with_name_es("Apelaciones")
        .with_key_points(["You have 180 days", "Ask for the denial in writing"])
        .with_cross_reference("medical-bills");

        assert_eq!(entry.id.as_str(), "appeals");
        assert_eq!(entry.key_points.len(), 2);
        assert_eq!(entry.cross_references, vec![EntryId::from("medical-bills")]);
    }

    #[test]
    fn test_localized_name_falls_back_to_english() {
        let entry = ContentEntry::new("x", Category::Rights, "Privacy", "records");
        assert_eq!(entry.localized_name(Language::Es), "Privacy");

        let entry = entry.with_name_es("Privacidad");
        assert_eq!(entry.localized_name(Language::Es), "Privacidad");
        assert_eq!(entry.localized_name(Language::En), "Privacy");
    }

    #[test]
    fn test_entry_deserializes_with_defaults() {
        let json = r#"{
            "id": "a1",
            "category": "language-access",
            "name": "Interpreters",
            "description": "free interpreters",
            "keyPoints": ["Ask at the front desk"]
        }"#;

        let entry: ContentEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.category, Category::LanguageAccess);
        assert!(entry.name_es.is_empty());
        assert_eq!(entry.key_points, vec!["Ask at the front desk".to_string()]);
        assert!(entry.cross_references.is_empty());
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("ES".parse::<Language>().unwrap(), Language::Es);
        assert_eq!("english".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }
}
