//! One-time catalog load from the bundled template manifest.
//!
//! The manifest is a JSON list of `{ name, url }` entries compiled into the
//! binary. It is parsed exactly once into process-wide immutable state; a
//! missing or malformed source is a `CatalogLoadError` that callers log and
//! turn into an empty catalog, never a crash.

use common::model::template::TemplateRecord;
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;

const MANIFEST: &str = include_str!("../assets/templates.json");

/// Category used when an entry's URL carries no category directory.
const DEFAULT_CATEGORY: &str = "Memes";

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("template manifest is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("template manifest entry {index} has a blank {field}")]
    BlankField { index: usize, field: &'static str },
    #[error("template manifest is empty")]
    Empty,
}

/// Raw manifest shape. Display names and categories are derived on load.
#[derive(Deserialize)]
struct ManifestEntry {
    name: String,
    url: String,
}

static CATALOG: OnceLock<Result<Vec<TemplateRecord>, CatalogLoadError>> = OnceLock::new();

/// The process-wide catalog, loaded on first access. Order is manifest order.
pub fn shared() -> Result<&'static [TemplateRecord], &'static CatalogLoadError> {
    match CATALOG.get_or_init(|| parse_manifest(MANIFEST)) {
        Ok(records) => Ok(records.as_slice()),
        Err(err) => Err(err),
    }
}

fn parse_manifest(raw: &str) -> Result<Vec<TemplateRecord>, CatalogLoadError> {
    let entries: Vec<ManifestEntry> = serde_json::from_str(raw)?;
    if entries.is_empty() {
        return Err(CatalogLoadError::Empty);
    }

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let name = display_name(&entry.name);
        if name.is_empty() {
            return Err(CatalogLoadError::BlankField {
                index,
                field: "name",
            });
        }
        if entry.url.trim().is_empty() {
            return Err(CatalogLoadError::BlankField { index, field: "url" });
        }
        let category = category_of(&entry.url);
        records.push(TemplateRecord {
            name,
            url: entry.url,
            category,
        });
    }
    Ok(records)
}

/// Derives the display name from a file name: image extension stripped,
/// separators turned into spaces.
fn display_name(raw: &str) -> String {
    static EXT_RE: OnceLock<Regex> = OnceLock::new();
    let ext_re = EXT_RE.get_or_init(|| Regex::new(r"(?i)\.(png|jpe?g|gif|webp)$").unwrap());
    ext_re
        .replace(raw.trim(), "")
        .replace(['-', '_'], " ")
        .trim()
        .to_string()
}

/// The category is the directory segment under `/images/`, when present.
fn category_of(url: &str) -> String {
    let mut segments = url.trim_start_matches('/').split('/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some("images"), Some(category), Some(_file)) if !category.is_empty() => {
            capitalize(category)
        }
        _ => DEFAULT_CATEGORY.to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
