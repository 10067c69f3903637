//! Command-line interface for soma.
//!
//! Provides commands for searching, filtering and inspecting the corpus,
//! validating authored data, and showing the resolved configuration.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::config::{self, DisplaySettings};
use crate::domain::{ExplanationLevel, Language};
use crate::library::{
    load_corpus, validate_corpus, BuiltinSource, ContentStore, Corpus, CorpusSource,
    DirectorySource, Record,
};

pub mod render;

use render::Detail;

/// soma - Bilingual medical-education content corpus
#[derive(Parser, Debug)]
#[command(name = "soma")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Collection to query
    #[arg(short = 'C', long, value_enum, global = true, default_value = "advocacy")]
    pub collection: Collection,

    /// Extra corpus directory, merged after the built-in data
    #[arg(long, env = "SOMA_CORPUS", global = true)]
    pub corpus: Option<PathBuf>,

    /// Ignore corpus directories and use only the built-in data
    #[arg(long, global = true)]
    pub builtin_only: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search names, descriptions and body text
    Search {
        /// Search query (case-insensitive substring)
        query: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List entries, optionally filtered by category
    List {
        /// Categories to include (repeatable)
        #[arg(short, long)]
        category: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one entry
    Show {
        /// Entry ID
        id: String,

        /// Explanation level for topics (1-5)
        #[arg(short, long)]
        level: Option<u8>,

        /// Display language (es or en)
        #[arg(long)]
        lang: Option<Language>,

        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories in use with entry counts
    Categories,

    /// Count entries, optionally in one category
    Count {
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Check authored data for errors and warnings
    Validate {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Which store a command runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    /// Patient-advocacy entries
    Advocacy,

    /// Multi-level educational topics
    Topics,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        if let Commands::Config = self.command {
            return show_config();
        }

        let display = config::config()
            .map(|c| c.display)
            .unwrap_or_else(|e| {
                tracing::warn!("Using default display settings: {:#}", e);
                DisplaySettings::default()
            });

        let corpus = self.load().await?;

        match self.command {
            Commands::Validate { json } => validate(&corpus, json),
            command => match self.collection {
                Collection::Advocacy => run_query(&corpus.advocacy, command, display),
                Collection::Topics => run_query(&corpus.topics, command, display),
            },
        }
    }

    /// Load the built-in data plus the configured or given corpus directory
    async fn load(&self) -> Result<Corpus> {
        let builtin = BuiltinSource;
        let mut directory = None;

        if !self.builtin_only {
            let dir = match &self.corpus {
                Some(dir) => dir.clone(),
                None => config::corpus_dir()?,
            };
            directory = Some(DirectorySource::new(dir));
        }

        let mut sources: Vec<&dyn CorpusSource> = vec![&builtin];
        if let Some(dir) = &directory {
            sources.push(dir);
        }

        load_corpus(&sources).await
    }
}

/// Run a query command against one store
fn run_query<T>(store: &ContentStore<T>, command: Commands, display: DisplaySettings) -> Result<()>
where
    T: Record + Detail + Serialize,
    T::Category: FromStr,
    <T::Category as FromStr>::Err: Into<anyhow::Error>,
{
    match command {
        Commands::Search { query, json } => {
            let results = store.search(&query);

            if json {
                return render::print_json(&results);
            }
            if results.is_empty() {
                println!("No results found for: {}", query);
                return Ok(());
            }

            println!("Found {} result(s) for \"{}\":\n", results.len(), query);
            render::print_table(&results, display.language);
            Ok(())
        }
        Commands::List { category, json } => {
            let results = list_entries(store, &category)?;

            if json {
                return render::print_json(&results);
            }
            if results.is_empty() {
                println!("No entries found");
                return Ok(());
            }

            render::print_table(&results, display.language);
            println!("\nTotal: {} of {} entries", results.len(), store.len());
            Ok(())
        }
        Commands::Show {
            id,
            level,
            lang,
            json,
        } => {
            let entry = find_entry(store, &id)?;

            if json {
                return render::print_json(entry);
            }

            let level = resolve_level(level, display.level)?;
            entry.print_detail(lang.unwrap_or(display.language), level);
            Ok(())
        }
        Commands::Categories => {
            let counts = store.category_counts();
            if counts.is_empty() {
                println!("No categories in use");
                return Ok(());
            }

            println!("{:<24} {:>6}", "CATEGORY", "COUNT");
            println!("{}", "-".repeat(31));
            for (category, count) in counts {
                println!("{:<24} {:>6}", category.to_string(), count);
            }
            Ok(())
        }
        Commands::Count { category } => {
            println!("{}", count_entries(store, category.as_deref())?);
            Ok(())
        }
        Commands::Validate { .. } | Commands::Config => {
            anyhow::bail!("Not a query command")
        }
    }
}

/// Every entry in store order, or those in any of `categories`
fn list_entries<'a, T>(store: &'a ContentStore<T>, categories: &[String]) -> Result<Vec<&'a T>>
where
    T: Record,
    T::Category: FromStr,
    <T::Category as FromStr>::Err: Into<anyhow::Error>,
{
    if categories.is_empty() {
        return Ok(store.iter().collect());
    }
    let categories = parse_categories::<T>(categories)?;
    Ok(store.filter_by_categories(&categories))
}

fn count_entries<T>(store: &ContentStore<T>, category: Option<&str>) -> Result<usize>
where
    T: Record,
    T::Category: FromStr,
    <T::Category as FromStr>::Err: Into<anyhow::Error>,
{
    let category = match category {
        Some(c) => Some(parse_category::<T>(c)?),
        None => None,
    };
    Ok(store.count(category))
}

fn find_entry<'a, T: Record>(store: &'a ContentStore<T>, id: &str) -> Result<&'a T> {
    store
        .get_by_id(id)
        .with_context(|| format!("Entry not found: {}", id))
}

fn resolve_level(level: Option<u8>, default: ExplanationLevel) -> Result<ExplanationLevel> {
    match level {
        Some(n) => Ok(ExplanationLevel::try_from(n)?),
        None => Ok(default),
    }
}

fn parse_category<T>(value: &str) -> Result<T::Category>
where
    T: Record,
    T::Category: FromStr,
    <T::Category as FromStr>::Err: Into<anyhow::Error>,
{
    value.parse().map_err(Into::into)
}

fn parse_categories<T>(values: &[String]) -> Result<Vec<T::Category>>
where
    T: Record,
    T::Category: FromStr,
    <T::Category as FromStr>::Err: Into<anyhow::Error>,
{
    values.iter().map(|v| parse_category::<T>(v)).collect()
}

/// Validate the loaded corpus and report
fn validate(corpus: &Corpus, json: bool) -> Result<()> {
    let report = validate_corpus(corpus);

    if json {
        render::print_json(&report)?;
    } else {
        for issue in &report.issues {
            println!(
                "{:<8} {:<32} {:<18} {}",
                format!("{:?}", issue.severity).to_lowercase(),
                issue.record_id.as_str(),
                issue.area,
                issue.message
            );
        }

        let errors = report.errors().count();
        let warnings = report.warnings().count();
        if warnings > 0 {
            tracing::warn!(warnings, "Corpus has validation warnings");
        }

        println!();
        println!(
            "Advocacy entries: {} ({})",
            corpus.advocacy.len(),
            corpus.advocacy.fingerprint()
        );
        println!(
            "Topics:           {} ({})",
            corpus.topics.len(),
            corpus.topics.fingerprint()
        );
        println!("Errors: {}  Warnings: {}", errors, warnings);
    }

    if !report.is_clean() {
        std::process::exit(1);
    }

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::reload_config().context("Failed to resolve configuration")?;

    let config_file = cfg
        .config_file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none - using defaults)".to_string());

    println!("Config file: {}", config_file);
    println!();
    println!("Paths:");
    println!("  Home:   {}", cfg.home.display());
    let missing = if cfg.corpus.exists() { "" } else { " (missing)" };
    println!("  Corpus: {}{}", cfg.corpus.display(), missing);
    println!();
    println!("Display:");
    println!("  Language: {}", cfg.display.language);
    println!("  Level:    {}", cfg.display.level);

    Ok(())
}
