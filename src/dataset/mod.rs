//! The built-in bilingual dataset.
//!
//! Authored records that ship with the crate. [`builtin`] freezes them into
//! a [`Corpus`] once per process; callers that want other data build their
//! own stores instead.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};

use crate::library::{ContentStore, Corpus, StoreError};

mod advocacy;
mod topics;

pub use advocacy::advocacy_entries;
pub use topics::topics;

/// Global frozen corpus (stores Result to surface authoring errors)
static BUILTIN: OnceLock<Result<Corpus, StoreError>> = OnceLock::new();

/// The built-in corpus, built on first use
pub fn builtin() -> Result<&'static Corpus, StoreError> {
    let result = BUILTIN.get_or_init(|| {
        let advocacy = ContentStore::from_entries(advocacy_entries())?;
        let topics = ContentStore::from_entries(topics())?;
        Corpus::new(advocacy, topics)
    });

    match result {
        Ok(corpus) => Ok(corpus),
        Err(e) => Err(e.clone()),
    }
}

/// Midnight UTC on the given authoring date
fn authored(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}
