//! Terminal output for query results.

use anyhow::Result;
use serde::Serialize;

use crate::domain::{ContentEntry, EducationalContent, ExplanationLevel, Language};
use crate::library::Record;

const NAME_WIDTH: usize = 44;

/// Full single-record view
pub trait Detail {
    fn print_detail(&self, language: Language, level: ExplanationLevel);
}

impl Detail for ContentEntry {
    fn print_detail(&self, language: Language, _level: ExplanationLevel) {
        println!("{}", self.localized_name(language));
        println!("ID: {}", self.id);
        println!("Category: {}", self.category);
        println!();
        println!("{}", self.description);

        if !self.explanation.is_empty() {
            println!();
            println!("{}", self.explanation);
        }

        print_list("Key points", &self.key_points);
        print_list("What you can do", &self.action_steps);
        print_list("Resources", &self.resources);

        if !self.cross_references.is_empty() {
            let refs: Vec<&str> = self.cross_references.iter().map(|r| r.as_str()).collect();
            println!("\nSee also: {}", refs.join(", "));
        }
    }
}

impl Detail for EducationalContent {
    fn print_detail(&self, language: Language, level: ExplanationLevel) {
        println!("{}", self.localized_name(language));
        println!("ID: {}", self.id);
        println!("Type: {}", self.kind);

        // Closest written level when the requested one is missing
        let content = self.level(level).or_else(|| {
            self.levels
                .iter()
                .min_by_key(|l| l.level.number().abs_diff(level.number()))
        });

        let Some(content) = content else {
            println!("\n(no levels written)");
            return;
        };

        if content.level != level {
            eprintln!("[Level {} not written, showing {}]", level, content.level);
        }

        let (low, high) = content.level.readability_grade_range();
        println!("Level: {}", content.level);
        println!("Audience: {} ({})", content.level.name(), content.level.audience());
        println!("Reading grade: {}-{}", low, high);
        println!();
        println!("{}", content.summary);
        println!();
        println!("{}", content.explanation);

        if !content.key_terms.is_empty() {
            println!("\nKey terms:");
            for term in &content.key_terms {
                println!("  {}: {}", term.term, term.definition);
            }
        }

        print_list("Analogies", &content.analogies);
        print_list("Examples", &content.examples);
        if let Some(notes) = &content.clinical_notes {
            println!("\nClinical notes: {}", notes);
        }
        print_list("Counseling points", &content.counseling_points);

        if !self.citations.is_empty() {
            println!("\nSources:");
            for citation in &self.citations {
                println!("  {} - {} {}", citation.title, citation.source, citation.url);
            }
        }
    }
}

fn print_list(heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{}:", heading);
    for item in items {
        println!("  - {}", item);
    }
}

/// Pretty-printed JSON on stdout
pub fn print_json<S: Serialize + ?Sized>(value: &S) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One row per record: id, category, localized name
pub fn print_table<T: Record>(items: &[&T], language: Language) {
    println!("{:<32} {:<22} {}", "ID", "CATEGORY", "NAME");
    println!("{}", "-".repeat(32 + 1 + 22 + 1 + NAME_WIDTH));

    for item in items {
        println!(
            "{:<32} {:<22} {}",
            item.id().as_str(),
            item.category().to_string(),
            truncate(item.localized_name(language), NAME_WIDTH)
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let head: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("Derechos", 10), "Derechos");
        assert_eq!(truncate("Asistencia Económica", 10), "Asisten...");
        assert_eq!(truncate("ñññññññññññ", 5), "ññ...");
    }
}
