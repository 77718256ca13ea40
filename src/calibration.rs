// Per-window table layouts. Clients differ in where they draw cards and
// markers, so a calibrated layout can be saved per window title and is
// picked up on the next run. Without one the default layout applies.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::{AppConfig, TableConfig};

/// File name for a window's layout, derived from its title. Anything outside
/// [A-Za-z0-9] becomes '_' so titles are safe as file names.
pub fn layout_file_name(window_title: &str) -> String {
    let slug: String = window_title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("layout_{}.json", slug.to_lowercase())
}

fn layout_path(data_dir: &Path, window_title: &str) -> PathBuf {
    data_dir.join(layout_file_name(window_title))
}

/// Loads the calibrated layout for a window, falling back to the configured
/// default when none was saved.
pub fn load_layout(config: &AppConfig, window_title: &str) -> Result<TableConfig> {
    let path = layout_path(&config.data_dir, window_title);
    if !path.exists() {
        debug!(title = %window_title, "no calibrated layout, using default");
        return Ok(config.default_table.clone());
    }
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read layout file {}", path.display()))?;
    let layout: TableConfig = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse layout file {}", path.display()))?;
    info!(title = %window_title, path = %path.display(), "loaded calibrated layout");
    Ok(layout)
}

/// Persists a calibrated layout for a window.
pub fn save_layout(config: &AppConfig, window_title: &str, layout: &TableConfig) -> Result<()> {
    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("failed to create {}", config.data_dir.display()))?;
    let path = layout_path(&config.data_dir, window_title);
    let raw = serde_json::to_string_pretty(layout).context("failed to serialize layout")?;
    fs::write(&path, raw)
        .with_context(|| format!("failed to write layout file {}", path.display()))?;
    info!(title = %window_title, path = %path.display(), "saved calibrated layout");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_file_name_slug() {
        assert_eq!(
            layout_file_name("Table 7 - NL Hold'em"),
            "layout_table_7___nl_hold_em.json"
        );
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.data_dir = dir.path().to_path_buf();

        let mut layout = TableConfig::default();
        layout.total_seats = 6;
        layout.hero_seat_index = 2;
        save_layout(&config, "Table 7", &layout).unwrap();

        let loaded = load_layout(&config, "Table 7").unwrap();
        assert_eq!(loaded.total_seats, 6);
        assert_eq!(loaded.hero_seat_index, 2);
    }

    #[test]
    fn test_missing_layout_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.data_dir = dir.path().to_path_buf();

        let loaded = load_layout(&config, "Unknown Table").unwrap();
        assert_eq!(loaded.total_seats, config.default_table.total_seats);
    }
}
