//! Multi-level educational topics.
//!
//! The schema shared by every disease, condition and navigation topic in the
//! corpus: one body of text per [`ExplanationLevel`], bilingual names, key
//! terms, citations and typed cross-references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entry::{EntryId, Language};
use super::level::ExplanationLevel;

/// What kind of thing a topic describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Structure,
    System,
    Pathway,
    Process,
    Condition,
    Concept,
    Topic,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ContentKind::Structure => "structure",
            ContentKind::System => "system",
            ContentKind::Pathway => "pathway",
            ContentKind::Process => "process",
            ContentKind::Condition => "condition",
            ContentKind::Concept => "concept",
            ContentKind::Topic => "topic",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for ContentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "structure" => Ok(ContentKind::Structure),
            "system" => Ok(ContentKind::System),
            "pathway" => Ok(ContentKind::Pathway),
            "process" => Ok(ContentKind::Process),
            "condition" | "disease" => Ok(ContentKind::Condition),
            "concept" => Ok(ContentKind::Concept),
            "topic" => Ok(ContentKind::Topic),
            _ => anyhow::bail!("Unknown content kind: {}", s),
        }
    }
}

/// Editorial state of a topic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    Draft,
    Review,
    #[default]
    Published,
}

/// A term defined alongside a level's explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTerm {
    pub term: String,
    pub definition: String,
}

impl KeyTerm {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// The text of one topic at one audience tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelContent {
    pub level: ExplanationLevel,
    pub summary: String,
    pub explanation: String,
    #[serde(default)]
    pub key_terms: Vec<KeyTerm>,
    #[serde(default)]
    pub analogies: Vec<String>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinical_notes: Option<String>,
    #[serde(default, rename = "patientCounselingPoints")]
    pub counseling_points: Vec<String>,
}

impl LevelContent {
    pub fn new(
        level: ExplanationLevel,
        summary: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            level,
            summary: summary.into(),
            explanation: explanation.into(),
            key_terms: Vec::new(),
            analogies: Vec::new(),
            examples: Vec::new(),
            clinical_notes: None,
            counseling_points: Vec::new(),
        }
    }

    pub fn with_key_term(mut self, term: impl Into<String>, definition: impl Into<String>) -> Self {
        self.key_terms.push(KeyTerm::new(term, definition));
        self
    }

    pub fn with_analogy(mut self, analogy: impl Into<String>) -> Self {
        self.analogies.push(analogy.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn with_clinical_notes(mut self, notes: impl Into<String>) -> Self {
        self.clinical_notes = Some(notes.into());
        self
    }

    pub fn with_counseling_point(mut self, point: impl Into<String>) -> Self {
        self.counseling_points.push(point.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationKind {
    Website,
    Journal,
    Guideline,
    Textbook,
    Government,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: CitationKind,
    pub title: String,
    pub source: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
    Related,
    SeeAlso,
}

/// Typed link to another record; not enforced as a foreign key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReference {
    pub target_id: EntryId,
    pub relationship: Relationship,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClinicalRelevance {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTags {
    #[serde(default)]
    pub systems: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub clinical_relevance: ClinicalRelevance,
}

/// A multi-level educational topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationalContent {
    pub id: EntryId,

    #[serde(rename = "type")]
    pub kind: ContentKind,

    pub name: String,

    #[serde(default)]
    pub name_es: String,

    #[serde(default)]
    pub alternate_names: Vec<String>,

    /// One entry per audience tier, ordered by level
    pub levels: Vec<LevelContent>,

    #[serde(default)]
    pub citations: Vec<Citation>,

    #[serde(default)]
    pub cross_references: Vec<CrossReference>,

    #[serde(default)]
    pub tags: ContentTags,

    #[serde(default)]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub updated_at: DateTime<Utc>,

    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub status: ContentStatus,
}

fn default_version() -> u32 {
    1
}

impl EducationalContent {
    /// Create a published topic with no levels yet
    pub fn new(
        id: impl Into<EntryId>,
        kind: ContentKind,
        name: impl Into<String>,
        name_es: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            name_es: name_es.into(),
            alternate_names: Vec::new(),
            levels: Vec::new(),
            citations: Vec::new(),
            cross_references: Vec::new(),
            tags: ContentTags::default(),
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
            version: default_version(),
            status: ContentStatus::Published,
        }
    }

    pub fn with_alternate_names(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.alternate_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add or replace the text for one level, keeping levels ordered
    pub fn with_level(mut self, content: LevelContent) -> Self {
        self.levels.retain(|l| l.level != content.level);
        self.levels.push(content);
        self.levels.sort_by_key(|l| l.level);
        self
    }

    pub fn with_citation(mut self, citation: Citation) -> Self {
        self.citations.push(citation);
        self
    }

    pub fn with_cross_reference(
        mut self,
        target: impl Into<EntryId>,
        relationship: Relationship,
        label: impl Into<String>,
    ) -> Self {
        self.cross_references.push(CrossReference {
            target_id: target.into(),
            relationship,
            label: label.into(),
        });
        self
    }

    pub fn with_tags(mut self, tags: ContentTags) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at;
        self
    }

    /// Text for a given audience tier
    pub fn level(&self, level: ExplanationLevel) -> Option<&LevelContent> {
        self.levels.iter().find(|l| l.level == level)
    }

    /// Levels not yet written
    pub fn missing_levels(&self) -> Vec<ExplanationLevel> {
        ExplanationLevel::ALL
            .into_iter()
            .filter(|l| self.level(*l).is_none())
            .collect()
    }

    pub fn localized_name(&self, language: Language) -> &str {
        match language {
            Language::Es if !self.name_es.is_empty() => &self.name_es,
            _ => &self.name,
        }
    }
}
