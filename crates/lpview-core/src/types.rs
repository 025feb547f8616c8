//! Domain records for launchpads and launches
//!
//! These are the validated shapes produced by the API layer. Display helpers
//! live here so the TUI and the headless runner format fields identically.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum number of launches listed under a launchpad card
pub const TOP_LAUNCHES_LIMIT: usize = 3;

/// Number of leading characters of `date_utc` shown on the detail screen
pub const DATE_DISPLAY_LEN: usize = 10;

/// Shown in place of a launch's details when it has none
pub const DETAILS_FALLBACK: &str = "None";

/// Shown in place of the launch list for a launchpad without launches
pub const NO_LAUNCHES_MESSAGE: &str = "No Launch Available";

/// Opaque launch identifier used to fetch a single launch
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaunchId(String);

impl LaunchId {
    /// Parse an identifier, rejecting blank strings
    pub fn parse(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LaunchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named physical launch site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launchpad {
    /// Stable identifier, used as the render key
    pub id: String,
    pub name: String,
    pub details: Option<String>,
    pub status: String,
    /// Launch identifiers in API order
    pub launches: Vec<LaunchId>,
}

impl Launchpad {
    /// The first `min(3, len)` launch identifiers, in original order
    pub fn top_launches(&self) -> &[LaunchId] {
        let n = self.launches.len().min(TOP_LAUNCHES_LIMIT);
        &self.launches[..n]
    }

    pub fn has_launches(&self) -> bool {
        !self.launches.is_empty()
    }

    /// Card body text; absent details render as nothing
    pub fn details_text(&self) -> &str {
        self.details.as_deref().unwrap_or("")
    }
}

/// One rocket booster used by a launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreRecord {
    /// `None` when the API reports `null`
    pub reused: Option<bool>,
}

/// A single flight record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launch {
    pub id: LaunchId,
    pub name: String,
    pub details: Option<String>,
    /// ISO-8601 timestamp as sent by the API
    pub date_utc: String,
    /// Never empty once produced by the API layer
    pub cores: Vec<CoreRecord>,
}

impl Launch {
    /// Details text, or [`DETAILS_FALLBACK`] when absent or empty
    pub fn details_display(&self) -> &str {
        match self.details.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => DETAILS_FALLBACK,
        }
    }

    /// The date portion of `date_utc` (its first 10 characters)
    pub fn date_display(&self) -> &str {
        match self.date_utc.char_indices().nth(DATE_DISPLAY_LEN) {
            Some((idx, _)) => &self.date_utc[..idx],
            None => &self.date_utc,
        }
    }

    /// Reuse flag of the first core
    pub fn first_core_reused(&self) -> Option<bool> {
        self.cores.first().and_then(|core| core.reused)
    }

    /// Reuse flag rendered the way JSON would print it
    pub fn reused_display(&self) -> &'static str {
        match self.first_core_reused() {
            Some(true) => "true",
            Some(false) => "false",
            None => "null",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(launches: &[&str]) -> Launchpad {
        Launchpad {
            id: "5e9e4501f509094ba4566f84".to_string(),
            name: "CCSFS SLC 40".to_string(),
            details: Some("SpaceX's primary Falcon 9 pad".to_string()),
            status: "active".to_string(),
            launches: launches
                .iter()
                .map(|id| LaunchId::parse(id).unwrap())
                .collect(),
        }
    }

    fn launch(details: Option<&str>, date: &str, cores: &[Option<bool>]) -> Launch {
        Launch {
            id: LaunchId::parse("5eb87d46ffd86e000604b388").unwrap(),
            name: "CRS-20".to_string(),
            details: details.map(str::to_string),
            date_utc: date.to_string(),
            cores: cores.iter().map(|&reused| CoreRecord { reused }).collect(),
        }
    }

    #[test]
    fn test_launch_id_rejects_blank() {
        assert!(LaunchId::parse("").is_none());
        assert!(LaunchId::parse("   ").is_none());
        assert_eq!(LaunchId::parse(" abc ").unwrap().as_str(), "abc");
    }

    #[test]
    fn test_top_launches_truncates_to_three_in_order() {
        let p = pad(&["a", "b", "c", "d", "e"]);
        let ids: Vec<&str> = p.top_launches().iter().map(LaunchId::as_str).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_top_launches_shorter_than_limit() {
        for len in 0..=TOP_LAUNCHES_LIMIT {
            let ids: Vec<String> = (0..len).map(|i| format!("id{i}")).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            let p = pad(&refs);
            assert_eq!(p.top_launches().len(), len);
            assert_eq!(p.has_launches(), len > 0);
        }
    }

    #[test]
    fn test_details_text_absent_is_empty() {
        let mut p = pad(&[]);
        p.details = None;
        assert_eq!(p.details_text(), "");
    }

    #[test]
    fn test_date_display_takes_date_portion() {
        let l = launch(None, "2020-05-30T19:25:00.000Z", &[Some(true)]);
        assert_eq!(l.date_display(), "2020-05-30");
    }

    #[test]
    fn test_date_display_short_string_is_kept() {
        let l = launch(None, "2020-05", &[Some(true)]);
        assert_eq!(l.date_display(), "2020-05");
    }

    #[test]
    fn test_reused_reads_first_core_only() {
        let l = launch(None, "2020-05-30", &[Some(true), Some(false)]);
        assert_eq!(l.reused_display(), "true");

        let l = launch(None, "2020-05-30", &[Some(false), Some(true)]);
        assert_eq!(l.reused_display(), "false");
    }

    #[test]
    fn test_reused_null_core() {
        let l = launch(None, "2020-05-30", &[None]);
        assert_eq!(l.first_core_reused(), None);
        assert_eq!(l.reused_display(), "null");
    }

    #[test]
    fn test_details_fallback() {
        assert_eq!(launch(None, "d", &[None]).details_display(), "None");
        assert_eq!(launch(Some(""), "d", &[None]).details_display(), "None");
        assert_eq!(
            launch(Some("Test flight"), "d", &[None]).details_display(),
            "Test flight"
        );
    }

    #[test]
    fn test_launch_id_serializes_as_plain_string() {
        let id = LaunchId::parse("abc123").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc123\"");
    }
}
