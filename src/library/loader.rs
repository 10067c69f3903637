//! Corpus sources and loading.
//!
//! A corpus is assembled from one or more sources, in order: the built-in
//! dataset and, optionally, a directory of JSON/YAML data files. Once all
//! sources are merged the stores are frozen.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use glob::MatchOptions;
use serde::{Deserialize, Serialize};
use tokio::fs;

use super::corpus::Corpus;
use super::store::StoreBuilder;
use crate::domain::{ContentEntry, EducationalContent};

/// On-disk data file schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusFile {
    /// Data file format version
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub advocacy: Vec<ContentEntry>,

    #[serde(default)]
    pub topics: Vec<EducationalContent>,
}

fn default_version() -> u32 {
    1
}

impl CorpusFile {
    /// Parse a data file, choosing the format from its extension.
    ///
    /// Returns `None` for files that are neither JSON nor YAML.
    pub fn parse(path: &Path, content: &str) -> Result<Option<Self>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let parsed: CorpusFile = match ext.as_deref() {
            Some("json") => serde_json::from_str(content)
                .with_context(|| format!("Failed to parse corpus JSON: {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(content)
                .with_context(|| format!("Failed to parse corpus YAML: {}", path.display()))?,
            _ => return Ok(None),
        };

        Ok(Some(parsed))
    }

    /// Append another file's records after this one's
    pub fn merge(&mut self, other: CorpusFile) {
        self.advocacy.extend(other.advocacy);
        self.topics.extend(other.topics);
    }
}

/// Something that yields corpus records
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    async fn load(&self) -> Result<CorpusFile>;
}

/// The dataset compiled into the crate
#[derive(Debug, Default)]
pub struct BuiltinSource;

#[async_trait]
impl CorpusSource for BuiltinSource {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn load(&self) -> Result<CorpusFile> {
        Ok(CorpusFile {
            version: default_version(),
            advocacy: crate::dataset::advocacy_entries(),
            topics: crate::dataset::topics(),
        })
    }
}

/// A directory tree of `.json`, `.yaml` and `.yml` data files
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    name: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root.display().to_string();
        Self { root, name }
    }

    /// Data files under the root, sorted by path
    pub fn data_files(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        // Root is matched literally; extensions in any case
        let root = PathBuf::from(glob::Pattern::escape(&self.root.to_string_lossy()));
        let options = MatchOptions {
            case_sensitive: false,
            ..MatchOptions::new()
        };

        let mut files = Vec::new();
        for ext in ["json", "yaml", "yml"] {
            let pattern = root.join("**").join(format!("*.{}", ext));
            let pattern = pattern.to_string_lossy();
            for path in glob::glob_with(&pattern, options)
                .with_context(|| format!("Invalid corpus glob: {}", pattern))?
            {
                let path = path.context("Failed to read corpus directory entry")?;
                if path.is_file() {
                    files.push(path);
                }
            }
        }

        files.sort();
        Ok(files)
    }
}

#[async_trait]
impl CorpusSource for DirectorySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<CorpusFile> {
        let files = self.data_files()?;
        if files.is_empty() {
            tracing::debug!(root = %self.root.display(), "No corpus data files found");
        }

        let mut merged = CorpusFile {
            version: default_version(),
            ..Default::default()
        };

        for path in files {
            let content = fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read corpus file: {}", path.display()))?;

            if let Some(file) = CorpusFile::parse(&path, &content)? {
                tracing::debug!(
                    path = %path.display(),
                    advocacy = file.advocacy.len(),
                    topics = file.topics.len(),
                    "Loaded corpus file"
                );
                merged.merge(file);
            }
        }

        Ok(merged)
    }
}

/// Load every source in order and freeze the result
pub async fn load_corpus(sources: &[&dyn CorpusSource]) -> Result<Corpus> {
    let mut advocacy = StoreBuilder::new();
    let mut topics = StoreBuilder::new();

    for source in sources {
        let file = source
            .load()
            .await
            .with_context(|| format!("Failed to load corpus source '{}'", source.name()))?;

        advocacy
            .extend(file.advocacy)
            .with_context(|| format!("Invalid advocacy data in source '{}'", source.name()))?;
        topics
            .extend(file.topics)
            .with_context(|| format!("Invalid topic data in source '{}'", source.name()))?;
    }

    let corpus = Corpus::new(advocacy.build(), topics.build())?;
    tracing::info!(
        advocacy = corpus.advocacy.len(),
        topics = corpus.topics.len(),
        "Corpus loaded"
    );

    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_unknown_extension() {
        let parsed = CorpusFile::parse(Path::new("notes.txt"), "anything").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
version: 1
advocacy:
  - id: y1
    category: insurance
    name: Appeals
    description: fight a denial
"#;
        let file = CorpusFile::parse(Path::new("a.YAML"), yaml).unwrap().unwrap();
        assert_eq!(file.advocacy.len(), 1);
        assert!(file.topics.is_empty());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = CorpusFile::parse(Path::new("broken.json"), "{ not json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_directory_has_no_files() {
        let source = DirectorySource::new("/definitely/not/a/corpus/dir");
        assert!(source.data_files().unwrap().is_empty());
    }
}
