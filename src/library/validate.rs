//! Authoring checks for corpus data.
//!
//! Runs over a loaded corpus and reports problems without changing
//! anything. Queries never call into this module: a well-formed store is
//! assumed once it is built.

use serde::Serialize;

use super::corpus::Corpus;
use super::record::Record;
use crate::domain::{ContentEntry, EducationalContent, EntryId, LevelContent};

/// Words that mark unfinished text
const PLACEHOLDER_WORDS: [&str; 3] = ["todo", "fixme", "placeholder"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// One problem found in one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub record_id: EntryId,
    pub severity: Severity,
    /// Which group of checks raised it
    pub area: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    /// No errors; warnings are allowed
    pub fn is_clean(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Issues raised for one record
    pub fn for_record<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Issue> + 'a {
        self.issues.iter().filter(move |i| i.record_id.as_str() == id)
    }

    fn push(&mut self, id: &EntryId, severity: Severity, area: &'static str, message: String) {
        self.issues.push(Issue {
            record_id: id.clone(),
            severity,
            area,
            message,
        });
    }
}

/// Check every record in both stores
pub fn validate_corpus(corpus: &Corpus) -> ValidationReport {
    let mut report = ValidationReport::default();

    for entry in &corpus.advocacy {
        check_entry(entry, &mut report);
        check_cross_references(entry, corpus, &mut report);
    }

    for topic in &corpus.topics {
        check_topic(topic, &mut report);
        check_cross_references(topic, corpus, &mut report);
    }

    tracing::debug!(
        errors = report.errors().count(),
        warnings = report.warnings().count(),
        "Corpus validated"
    );

    report
}

/// Whole-word, case-insensitive match against [`PLACEHOLDER_WORDS`]
pub fn contains_placeholder(text: &str) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|word| PLACEHOLDER_WORDS.iter().any(|p| word.eq_ignore_ascii_case(p)))
}

fn check_names(id: &EntryId, name: &str, name_es: &str, report: &mut ValidationReport) {
    if name.trim().is_empty() {
        report.push(id, Severity::Error, "names", "Missing or empty name".to_string());
    } else if contains_placeholder(name) {
        report.push(
            id,
            Severity::Error,
            "names",
            format!("Name contains placeholder text: {}", name),
        );
    }

    if name_es.trim().is_empty() {
        report.push(
            id,
            Severity::Warning,
            "names",
            "Missing Spanish translation (nameEs)".to_string(),
        );
    } else if contains_placeholder(name_es) {
        report.push(
            id,
            Severity::Error,
            "names",
            format!("Spanish name contains placeholder text: {}", name_es),
        );
    }
}

fn check_entry(entry: &ContentEntry, report: &mut ValidationReport) {
    check_names(&entry.id, &entry.name, &entry.name_es, report);

    if entry.description.trim().is_empty() {
        report.push(
            &entry.id,
            Severity::Error,
            "content",
            "Missing or empty description".to_string(),
        );
    }

    // Names were already checked above
    if entry.text_fields().into_iter().skip(2).any(contains_placeholder) {
        report.push(
            &entry.id,
            Severity::Warning,
            "content",
            "Text contains placeholder words".to_string(),
        );
    }
}

fn check_level(id: &EntryId, level: &LevelContent, report: &mut ValidationReport) {
    let n = level.level.number();

    if level.summary.trim().is_empty() {
        report.push(
            id,
            Severity::Error,
            "levels",
            format!("Level {}: Missing or empty summary", n),
        );
    }

    if level.explanation.trim().is_empty() {
        report.push(
            id,
            Severity::Error,
            "levels",
            format!("Level {}: Missing or empty explanation", n),
        );
    }

    if level.key_terms.is_empty() {
        report.push(id, Severity::Warning, "levels", format!("Level {}: No key terms", n));
    }

    for (i, term) in level.key_terms.iter().enumerate() {
        if term.term.trim().is_empty() {
            report.push(
                id,
                Severity::Error,
                "levels",
                format!("Level {}: Key term {} has empty term", n, i + 1),
            );
        }
        if term.definition.trim().is_empty() {
            report.push(
                id,
                Severity::Error,
                "levels",
                format!("Level {}: Key term \"{}\" has empty definition", n, term.term),
            );
        }
    }

    if contains_placeholder(&level.summary) || contains_placeholder(&level.explanation) {
        report.push(
            id,
            Severity::Warning,
            "levels",
            format!("Level {}: Text contains placeholder words", n),
        );
    }
}

fn check_topic(topic: &EducationalContent, report: &mut ValidationReport) {
    check_names(&topic.id, &topic.name, &topic.name_es, report);

    for missing in topic.missing_levels() {
        report.push(
            &topic.id,
            Severity::Error,
            "levels",
            format!("Missing complexity level {}", missing.number()),
        );
    }

    for level in &topic.levels {
        check_level(&topic.id, level, report);
    }

    if topic.citations.is_empty() {
        report.push(&topic.id, Severity::Warning, "citations", "No citations".to_string());
    }

    for citation in &topic.citations {
        if citation.url.trim().is_empty() {
            report.push(
                &topic.id,
                Severity::Warning,
                "citations",
                format!("Citation '{}' has no URL", citation.id),
            );
        }
    }
}

fn check_cross_references<T: Record>(record: &T, corpus: &Corpus, report: &mut ValidationReport) {
    for target in record.cross_references() {
        if target == record.id() {
            report.push(
                record.id(),
                Severity::Error,
                "cross-references",
                "Record references itself".to_string(),
            );
        } else if !corpus.contains_id(target.as_str()) {
            report.push(
                record.id(),
                Severity::Warning,
                "cross-references",
                format!("Cross-reference to unknown record: {}", target),
            );
        }
    }
}
