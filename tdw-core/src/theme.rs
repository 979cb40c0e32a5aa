//! Theme catalog types.
//!
//! The catalog is static data loaded once; nothing in this crate mutates it.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{TdwError, TdwResult};

/// Number of per-weekday questions a theme carries (Monday..Friday).
pub const QUESTIONS_PER_WEEK: usize = 5;

static EDITION_WEEK_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^ed\d+-\d+-").expect("valid regex"));
static EDITION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^ed\d+\s*").expect("valid regex"));
static NUMBER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+-").expect("valid regex"));

/// A weekly theme: one quote and one question per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCatalogEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub quote: String,
    /// Indexed 0..4 for Monday..Friday. May be shorter in sloppy data.
    #[serde(default)]
    pub questions: Vec<String>,
}

impl ThemeCatalogEntry {
    /// Human-facing name: the trimmed title, or a prettified id when the title
    /// is missing or blank.
    pub fn display_title(&self) -> String {
        match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => prettify_id(&self.id),
        }
    }

    /// Question for a weekday offset (0 = Monday), empty when absent.
    pub fn question(&self, weekday: usize) -> &str {
        self.questions.get(weekday).map(String::as_str).unwrap_or("")
    }
}

/// Derive a readable title from a theme id.
///
/// `ed1-03-diskriminierung` becomes `Diskriminierung`,
/// `Ed1-01-anerkennung-1` becomes `Anerkennung 1`.
pub fn prettify_id(id: &str) -> String {
    let cleaned = EDITION_WEEK_PREFIX.replace(id, "");
    let cleaned = EDITION_PREFIX.replace(&cleaned, "");
    let cleaned = NUMBER_PREFIX.replace(&cleaned, "");
    let cleaned = cleaned.replace('-', " ");

    let mut chars = cleaned.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Sort key approximating German base-letter collation: case-insensitive,
/// umlauts sort with their base vowel.
pub fn collation_key(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match c {
            'ä' | 'á' | 'à' | 'â' => key.push('a'),
            'ö' | 'ó' | 'ò' | 'ô' => key.push('o'),
            'ü' | 'ú' | 'ù' | 'û' => key.push('u'),
            'é' | 'è' | 'ê' => key.push('e'),
            'ß' => key.push_str("ss"),
            other => key.push(other),
        }
    }
    key
}

/// The static theme catalog, in source order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ThemeCatalogEntry>,
    index: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(entries: Vec<ThemeCatalogEntry>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            // First entry wins on duplicate ids
            index.entry(entry.id.clone()).or_insert(pos);
        }
        Catalog { entries, index }
    }

    /// Parse a catalog from its JSON form (an array of entries).
    pub fn from_json(json: &str) -> TdwResult<Self> {
        let entries: Vec<ThemeCatalogEntry> = serde_json::from_str(json)
            .map_err(|e| TdwError::Catalog(format!("invalid catalog JSON: {e}")))?;
        Ok(Self::new(entries))
    }

    pub fn get(&self, id: &str) -> Option<&ThemeCatalogEntry> {
        self.index.get(id).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeCatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve ids against the catalog. Unknown ids are dropped, known ones
    /// keep their order.
    pub fn resolve_ids<S: AsRef<str>>(&self, ids: &[S]) -> Vec<&ThemeCatalogEntry> {
        ids.iter().filter_map(|id| self.get(id.as_ref())).collect()
    }

    /// Entries sorted by display title for listing.
    pub fn sorted_by_title(&self) -> Vec<&ThemeCatalogEntry> {
        let mut sorted: Vec<&ThemeCatalogEntry> = self.entries.iter().collect();
        sorted.sort_by_cached_key(|entry| collation_key(&entry.display_title()));
        sorted
    }
}
