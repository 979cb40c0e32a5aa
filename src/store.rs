//! JSON persistence for the setup snapshot and the used-theme list.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tdw_core::SetupRecord;

const SETUP_FILE: &str = "setup.json";
const USED_THEMES_FILE: &str = "used_themes.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Manual,
    Random,
}

/// The setup as persisted. Older files used `weeks` or `anzahlWochen`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSetup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<u32>,

    #[serde(default, alias = "weeks", alias = "anzahlWochen")]
    pub weeks_count: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_monday: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<SelectionMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_ids: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, alias = "licenseTier", skip_serializing_if = "Option::is_none")]
    pub selected_license_tier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ical_enabled: Option<bool>,
}

impl StoredSetup {
    /// Normalize into the snapshot the core resolves.
    pub fn to_record(&self) -> SetupRecord {
        SetupRecord::new(
            self.start_monday.clone().unwrap_or_default(),
            self.weeks_count.unwrap_or(0),
            self.theme_ids.clone().unwrap_or_default(),
        )
    }
}

/// Used themes were once written as an object keyed by position.
#[derive(Deserialize)]
#[serde(untagged)]
enum UsedThemesFile {
    List(Vec<String>),
    Indexed(BTreeMap<String, serde_json::Value>),
}

impl UsedThemesFile {
    fn into_list(self) -> (Vec<String>, bool) {
        match self {
            UsedThemesFile::List(ids) => (ids, false),
            UsedThemesFile::Indexed(map) => {
                let mut entries: Vec<(String, serde_json::Value)> = map.into_iter().collect();
                entries.sort_by_key(|(key, _)| key.parse::<u64>().unwrap_or(u64::MAX));
                let ids = entries
                    .into_iter()
                    .filter_map(|(_, value)| match value {
                        serde_json::Value::String(id) => Some(id),
                        _ => None,
                    })
                    .collect();
                (ids, true)
            }
        }
    }
}

pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Store { dir: dir.into() }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    pub fn load_setup(&self) -> Result<Option<StoredSetup>> {
        read_json(&self.path(SETUP_FILE))
    }

    pub fn save_setup(&self, setup: &StoredSetup) -> Result<()> {
        write_json(&self.path(SETUP_FILE), setup)
    }

    /// Used theme ids, repairing the indexed-object form on the way.
    pub fn load_used(&self) -> Result<Vec<String>> {
        let Some(file) = read_json::<UsedThemesFile>(&self.path(USED_THEMES_FILE))? else {
            return Ok(Vec::new());
        };

        let (ids, repaired) = file.into_list();
        if repaired {
            tracing::info!(count = ids.len(), "repaired used themes list");
            self.save_used(&ids)?;
        }
        Ok(ids)
    }

    pub fn save_used(&self, ids: &[String]) -> Result<()> {
        write_json(&self.path(USED_THEMES_FILE), ids)
    }

    /// Append ids to the used list, keeping first occurrences.
    pub fn mark_used(&self, ids: &[String]) -> Result<Vec<String>> {
        let mut used = self.load_used()?;
        for id in ids {
            if !used.contains(id) {
                used.push(id.clone());
            }
        }
        self.save_used(&used)?;
        Ok(used)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(Some(value))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(value).context("Failed to serialize")?;

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
