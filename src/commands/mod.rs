pub mod check;
pub mod export;
pub mod plan;
pub mod select;
pub mod setup;
pub mod themes;
pub mod used;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tdw_core::{AppMode, Catalog};

use crate::config::Config;
use crate::store::{Store, StoredSetup};

/// Edition 1 catalog shipped with the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/edition1.json");

/// Everything a command needs, loaded once per invocation.
pub struct Context {
    pub store: Store,
    pub catalog: Catalog,
    pub mode: AppMode,
}

impl Context {
    pub fn load(
        config: &Config,
        catalog_override: Option<PathBuf>,
        data_dir_override: Option<PathBuf>,
    ) -> Result<Self> {
        let catalog_path = catalog_override.or_else(|| config.catalog_path());
        let catalog = load_catalog(catalog_path.as_deref())?;

        let data_dir = match data_dir_override {
            Some(dir) => dir,
            None => config.data_dir()?,
        };
        tracing::debug!(data_dir = %data_dir.display(), themes = catalog.len(), "loaded context");

        Ok(Self {
            store: Store::new(data_dir),
            catalog,
            mode: config.mode,
        })
    }

    /// The stored setup, or a hint to create one.
    pub fn require_setup(&self) -> Result<StoredSetup> {
        match self.store.load_setup()? {
            Some(setup) => Ok(setup),
            None => anyhow::bail!(
                "Kein Setup gefunden.\n\
                Lege zuerst eines an, z. B.:\n  \
                tdw setup --weeks 4"
            ),
        }
    }
}

/// Load a catalog file, or the bundled one when no path is given
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::from_json(BUNDLED_CATALOG)?);
    };

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog at {}", path.display()))?;

    Catalog::from_json(&contents)
        .with_context(|| format!("Failed to load catalog at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = load_catalog(None).unwrap();

        assert!(!catalog.is_empty());
        for theme in catalog.iter() {
            assert_eq!(theme.questions.len(), 5, "{} should have five questions", theme.id);
            assert!(!theme.display_title().is_empty());
        }
        for id in tdw_core::mode::FREE_ALLOWED_THEMES {
            assert!(catalog.contains(id), "free theme {id} missing");
        }
    }

    #[test]
    fn test_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themes.json");
        std::fs::write(&path, r#"[{"id": "x", "quote": "q", "questions": []}]"#).unwrap();

        let catalog = load_catalog(Some(&path)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("x"));
    }

    fn test_context(dir: &Path, mode: AppMode) -> Context {
        Context {
            store: Store::new(dir),
            catalog: load_catalog(None).unwrap(),
            mode,
        }
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_setup_select_export_flow() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(dir.path(), AppMode::Full);

        setup::run(&ctx, Some("2024-01-01".into()), 2, crate::store::SelectionMode::Manual)
            .unwrap();
        select::run(&ctx, ids(&["ed1-05-mut", "ed1-02-belastung"]), false).unwrap();

        let output = dir.path().join("out.ics");
        export::run(&ctx, Some(output.clone())).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let events = tdw_core::ics::read_events(&content).unwrap();
        assert_eq!(events.len(), 14);
        assert_eq!(events[0].summary, "Mut: Wovor drückst du dich gerade?");
        assert_eq!(events[7].summary, "Belastung: Was belastet dich gerade am meisten?");
        assert_eq!(events[13].summary, "Schönes Wochenende");

        assert_eq!(
            ctx.store.load_used().unwrap(),
            vec!["ed1-05-mut", "ed1-02-belastung"]
        );
    }

    #[test]
    fn test_export_without_selection_writes_empty_calendar() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(dir.path(), AppMode::Full);
        setup::run(&ctx, Some("2024-01-01".into()), 2, crate::store::SelectionMode::Manual)
            .unwrap();

        let output = dir.path().join("empty.ics");
        export::run(&ctx, Some(output.clone())).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(content.ends_with("END:VCALENDAR\r\n"));
        assert!(!content.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn test_select_rejects_wrong_count_and_unknown_ids() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(dir.path(), AppMode::Full);
        setup::run(&ctx, Some("2024-01-01".into()), 2, crate::store::SelectionMode::Manual)
            .unwrap();

        let err = select::run(&ctx, ids(&["ed1-05-mut"]), false).unwrap_err();
        assert!(err.to_string().contains("Bitte genau 2"), "got {err}");

        let err = select::run(&ctx, ids(&["ed1-05-mut", "gibt-es-nicht"]), false).unwrap_err();
        assert!(err.to_string().contains("Unbekanntes Thema"), "got {err}");
    }

    #[test]
    fn test_free_mode_limits_weeks_and_themes() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(dir.path(), AppMode::Free);
        setup::run(&ctx, Some("2024-01-01".into()), 6, crate::store::SelectionMode::Random)
            .unwrap();
        assert_eq!(ctx.require_setup().unwrap().weeks_count, Some(2));

        let err = select::run(&ctx, ids(&["ed1-05-mut", "ed1-02-belastung"]), false).unwrap_err();
        assert!(err.to_string().contains("Vollversion"), "got {err}");

        select::run(&ctx, Vec::new(), true).unwrap();
        let picked = ctx.require_setup().unwrap().theme_ids.unwrap();
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|id| AppMode::Free.allows_theme(id)));
    }

    #[test]
    fn test_setup_rejects_non_monday() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = test_context(dir.path(), AppMode::Full);

        let err = setup::run(&ctx, Some("2024-01-03".into()), 2, crate::store::SelectionMode::Manual)
            .unwrap_err();
        assert_eq!(err.to_string(), "Das Startdatum muss ein Montag sein.");
        assert!(ctx.store.load_setup().unwrap().is_none());
    }

    #[test]
    fn test_missing_catalog_file_is_error() {
        let err = load_catalog(Some(Path::new("/nonexistent/themes.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }
}
