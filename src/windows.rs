// Discovery and tracking of poker table windows. Windows are matched by
// title, capped at a configured count and evicted after repeated capture
// failures so a closed table does not wedge the poll loop.

use std::collections::HashMap;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::{info, warn};
use xcap::Window;

use crate::config::AppConfig;

/// One tracked table window.
pub struct TableWindow {
    /// Stable identifier assigned at discovery, "table_1", "table_2", ...
    pub table_id: String,
    pub title: String,
    pub window: Window,
    pub consecutive_errors: u32,
}

pub struct WindowRegistry {
    pattern: Regex,
    max_tables: usize,
    max_consecutive_errors: u32,
    /// Keyed by the native window id so table ids survive refreshes.
    tables: HashMap<u32, TableWindow>,
    next_index: usize,
}

impl WindowRegistry {
    pub fn new(config: &AppConfig) -> Result<WindowRegistry> {
        let pattern = Regex::new(&config.window_title_pattern).with_context(|| {
            format!(
                "invalid window title pattern {:?}",
                config.window_title_pattern
            )
        })?;
        Ok(WindowRegistry {
            pattern,
            max_tables: config.max_tables,
            max_consecutive_errors: config.poller.max_consecutive_errors,
            tables: HashMap::new(),
            next_index: 0,
        })
    }

    pub fn matches_title(&self, title: &str) -> bool {
        self.pattern.is_match(title)
    }

    /// Rescans open windows. Known tables keep their ids, vanished ones are
    /// dropped and new matches are added until the table cap is reached.
    pub fn refresh(&mut self) -> Result<()> {
        let all = Window::all().context("failed to enumerate windows")?;
        let mut seen: Vec<u32> = Vec::new();

        for window in all {
            let title = window.title().to_string();
            if !self.matches_title(&title) || window.is_minimized() {
                continue;
            }
            let native_id = window.id();
            seen.push(native_id);

            if let Some(entry) = self.tables.get_mut(&native_id) {
                entry.window = window;
                entry.title = title;
            } else if self.tables.len() < self.max_tables {
                self.next_index += 1;
                let table_id = format!("table_{}", self.next_index);
                info!(table = %table_id, title = %title, "tracking table window");
                self.tables.insert(
                    native_id,
                    TableWindow {
                        table_id,
                        title,
                        window,
                        consecutive_errors: 0,
                    },
                );
            }
        }

        self.tables.retain(|native_id, entry| {
            let alive = seen.contains(native_id);
            if !alive {
                info!(table = %entry.table_id, "table window closed");
            }
            alive
        });
        Ok(())
    }

    pub fn record_success(&mut self, native_id: u32) {
        if let Some(entry) = self.tables.get_mut(&native_id) {
            entry.consecutive_errors = 0;
        }
    }

    /// Bumps the error counter and evicts the window once the limit is hit.
    /// Returns true when the window was evicted.
    pub fn record_error(&mut self, native_id: u32) -> bool {
        let Some(entry) = self.tables.get_mut(&native_id) else {
            return false;
        };
        entry.consecutive_errors += 1;
        if entry.consecutive_errors >= self.max_consecutive_errors {
            warn!(
                table = %entry.table_id,
                errors = entry.consecutive_errors,
                "evicting table window after repeated capture failures"
            );
            self.tables.remove(&native_id);
            return true;
        }
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = (&u32, &TableWindow)> {
        self.tables.iter()
    }

    pub fn native_ids(&self) -> Vec<u32> {
        self.tables.keys().copied().collect()
    }

    pub fn get(&self, native_id: u32) -> Option<&TableWindow> {
        self.tables.get(&native_id)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Lists currently open windows matching the title pattern, for the
/// `windows` subcommand.
pub fn list_matching(config: &AppConfig) -> Result<Vec<(u32, String)>> {
    let pattern = Regex::new(&config.window_title_pattern).with_context(|| {
        format!(
            "invalid window title pattern {:?}",
            config.window_title_pattern
        )
    })?;
    let mut matches = Vec::new();
    for window in Window::all().context("failed to enumerate windows")? {
        let title = window.title().to_string();
        if pattern.is_match(&title) {
            matches.push((window.id(), title));
        }
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_matching() {
        let mut config = AppConfig::default();
        config.window_title_pattern = r"NL Hold'em|Zoom \d+".into();
        let registry = WindowRegistry::new(&config).unwrap();
        assert!(registry.matches_title("Table 7 - NL Hold'em 0.5/1"));
        assert!(registry.matches_title("Zoom 42"));
        assert!(!registry.matches_title("Lobby"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let mut config = AppConfig::default();
        config.window_title_pattern = "(unclosed".into();
        assert!(WindowRegistry::new(&config).is_err());
    }

    #[test]
    fn test_unknown_window_error_is_ignored() {
        let mut registry = WindowRegistry::new(&AppConfig::default()).unwrap();
        assert!(registry.is_empty());
        assert!(!registry.record_error(99));
        registry.record_success(99);
        assert_eq!(registry.len(), 0);
    }
}
