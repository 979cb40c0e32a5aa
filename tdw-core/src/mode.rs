//! Free vs. full edition limits.

use serde::{Deserialize, Serialize};

/// Weeks available in the free edition.
pub const FREE_WEEKS_COUNT: u32 = 2;

/// Upper bound for weeks in the full edition.
pub const FULL_MAX_WEEKS: u32 = 41;

/// Themes that can be picked in the free edition.
pub const FREE_ALLOWED_THEMES: [&str; 4] = [
    "ed1-01-anerkennung-1",
    "ed1-02-belastung",
    "ed1-03-diskriminierung",
    "ed1-04-ehrlichkeit",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    Free,
    #[default]
    Full,
}

impl AppMode {
    pub fn max_weeks(self) -> u32 {
        match self {
            AppMode::Free => FREE_WEEKS_COUNT,
            AppMode::Full => FULL_MAX_WEEKS,
        }
    }

    /// Clamp a requested week count into `1..=max_weeks`.
    pub fn clamp_weeks(self, weeks: u32) -> u32 {
        weeks.clamp(1, self.max_weeks())
    }

    pub fn allows_theme(self, id: &str) -> bool {
        match self {
            AppMode::Free => FREE_ALLOWED_THEMES.contains(&id),
            AppMode::Full => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_weeks() {
        assert_eq!(AppMode::Free.clamp_weeks(0), 1);
        assert_eq!(AppMode::Free.clamp_weeks(5), 2);
        assert_eq!(AppMode::Full.clamp_weeks(5), 5);
        assert_eq!(AppMode::Full.clamp_weeks(100), 41);
    }

    #[test]
    fn test_allows_theme() {
        assert!(AppMode::Free.allows_theme("ed1-02-belastung"));
        assert!(!AppMode::Free.allows_theme("ed1-09-mut"));
        assert!(AppMode::Full.allows_theme("ed1-09-mut"));
    }
}
