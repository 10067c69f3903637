//! soma - Bilingual medical-education content corpus
//!
//! An immutable, in-memory store of patient-advocacy entries and
//! multi-level educational topics, with a small query layer over it.
//!
//! # Architecture
//!
//! The system is built around frozen stores:
//! - Records are loaded from their sources once, then never mutated
//! - Identifiers are unique per corpus and checked at build time
//! - Queries return records in insertion order
//!
//! # Modules
//!
//! - `domain`: Record shapes (ContentEntry, EducationalContent, Category)
//! - `library`: Store, query operations, loading and validation
//! - `dataset`: The built-in bilingual records
//! - `config`: Configuration resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Search the advocacy entries
//! soma search interpreter
//!
//! # List entries in a category
//! soma list -c rights -c legal
//!
//! # Show a topic at the nursing level
//! soma -C topics show topic-patient-rights-simple --level 3
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use domain::{
    Category, ContentEntry, ContentKind, EducationalContent, EntryId, ExplanationLevel, Language,
};
pub use library::{ContentStore, Corpus, Record, StoreBuilder, StoreError};
