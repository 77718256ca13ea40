// Application configuration. All thresholds, regions and settings live here;
// table layouts can be persisted per window through the calibration module.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Rectangular region relative to the window client-area origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(left: u32, top: u32, width: u32, height: u32) -> Region {
        Region {
            left,
            top,
            width,
            height,
        }
    }
}

/// Single pixel coordinate relative to the window client-area origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelCoord {
    pub left: u32,
    pub top: u32,
}

impl PixelCoord {
    pub const fn new(left: u32, top: u32) -> PixelCoord {
        PixelCoord { left, top }
    }
}

/// Pixel probe with the red channel value expected when the seat is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelCheck {
    pub left: u32,
    pub top: u32,
    pub r_target: u8,
}

impl PixelCheck {
    pub const fn new(left: u32, top: u32, r_target: u8) -> PixelCheck {
        PixelCheck {
            left,
            top,
            r_target,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerConfig {
    /// Polls per second.
    pub poll_frequency_hz: f64,
    /// Consecutive turn signals required before a turn event fires.
    pub debounce_ms: u64,
    /// Errors tolerated before a window is evicted from the registry.
    pub max_consecutive_errors: u32,
}

impl Default for PollerConfig {
    fn default() -> PollerConfig {
        PollerConfig {
            poll_frequency_hz: 10.0,
            debounce_ms: 100,
            max_consecutive_errors: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub offset_x: i32,
    pub offset_y: i32,
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
    pub background_alpha: f32,
    pub text_color: String,
    pub background_color: String,
    pub accent_color: String,
}

impl Default for OverlayConfig {
    fn default() -> OverlayConfig {
        OverlayConfig {
            offset_x: 10,
            offset_y: 10,
            width: 280,
            height: 120,
            font_size: 12,
            background_alpha: 0.85,
            text_color: "#FFFFFF".into(),
            background_color: "#1a1a2e".into(),
            accent_color: "#e94560".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisionConfig {
    /// Binarization threshold for rank crops before OCR.
    pub binarize_threshold: u8,
    /// Contrast factor applied before thresholding.
    pub contrast: f32,
    /// Tesseract binary; resolved via PATH when not absolute.
    pub tesseract_path: String,
    /// Page segmentation mode for single-glyph rank crops.
    pub rank_psm: String,
    pub rank_whitelist: String,
    /// PSM and whitelist for pot/stack amounts.
    pub number_psm: String,
    pub number_whitelist: String,
    /// Minimum votes a card needs before the hole cards are accepted.
    pub min_card_votes: u32,
}

impl Default for VisionConfig {
    fn default() -> VisionConfig {
        VisionConfig {
            binarize_threshold: 128,
            contrast: 1.4,
            tesseract_path: "tesseract".into(),
            rank_psm: "10".into(),
            rank_whitelist: "23456789TJQKA10".into(),
            number_psm: "7".into(),
            number_whitelist: "0123456789,.".into(),
            min_card_votes: 2,
        }
    }
}

/// Region pair for one card slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CardRegions {
    pub rank: Region,
    pub suit: Region,
}

/// Layout of a single poker table window. All coordinates are relative to the
/// window client area so the config survives window moves. Defaults match an
/// 8-max client at a fixed size and need per-client calibration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub hero_card1: CardRegions,
    pub hero_card2: CardRegions,
    pub board_cards: Vec<CardRegions>,

    /// Dealer button probe per seat. Red channel in [200, 255] marks the
    /// button.
    pub dealer_pixels: Vec<PixelCoord>,
    /// Active-player probes, hero seat omitted.
    pub active_player_pixels: Vec<PixelCheck>,
    pub hero_seat_index: usize,
    pub total_seats: usize,

    pub turn_indicator_pixel: PixelCoord,
    /// Red channel range on the turn indicator when hero must act.
    pub turn_indicator_color_range: (u8, u8),

    pub pot_region: Region,
    pub hero_stack_region: Region,
}

impl Default for TableConfig {
    fn default() -> TableConfig {
        TableConfig {
            hero_card1: CardRegions {
                rank: Region::new(430, 690, 28, 43),
                suit: Region::new(431, 732, 17, 24),
            },
            hero_card2: CardRegions {
                rank: Region::new(462, 690, 28, 43),
                suit: Region::new(462, 732, 17, 24),
            },
            board_cards: vec![
                CardRegions {
                    rank: Region::new(228, 454, 30, 44),
                    suit: Region::new(228, 495, 17, 24),
                },
                CardRegions {
                    rank: Region::new(313, 454, 30, 44),
                    suit: Region::new(313, 495, 17, 24),
                },
                CardRegions {
                    rank: Region::new(401, 454, 30, 44),
                    suit: Region::new(399, 495, 17, 24),
                },
                CardRegions {
                    rank: Region::new(485, 454, 30, 44),
                    suit: Region::new(485, 495, 17, 24),
                },
                CardRegions {
                    rank: Region::new(571, 454, 30, 44),
                    suit: Region::new(571, 495, 17, 24),
                },
            ],
            dealer_pixels: vec![
                PixelCoord::new(1141, 403),
                PixelCoord::new(1603, 407),
                PixelCoord::new(1859, 547),
                PixelCoord::new(1735, 866),
                PixelCoord::new(1406, 948),
                PixelCoord::new(833, 865),
                PixelCoord::new(709, 547),
                PixelCoord::new(965, 407),
            ],
            active_player_pixels: vec![
                PixelCheck::new(220, 233, 37),
                PixelCheck::new(710, 231, 40),
                PixelCheck::new(942, 409, 40),
                PixelCheck::new(925, 635, 44),
                // seat 4 is hero
                PixelCheck::new(310, 730, 43),
                PixelCheck::new(3, 645, 38),
                PixelCheck::new(18, 403, 42),
            ],
            hero_seat_index: 4,
            total_seats: 8,
            turn_indicator_pixel: PixelCoord::new(450, 750),
            turn_indicator_color_range: (200, 255),
            pot_region: Region::new(379, 320, 130, 35),
            hero_stack_region: Region::new(430, 770, 110, 28),
        }
    }
}

impl TableConfig {
    /// Seat indices carrying an active-player probe, in probe order.
    pub fn probed_seats(&self) -> Vec<usize> {
        (0..self.total_seats)
            .filter(|&seat| seat != self.hero_seat_index)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Directory for per-window calibration files.
    pub data_dir: PathBuf,
    pub poller: PollerConfig,
    pub overlay: OverlayConfig,
    pub vision: VisionConfig,
    pub default_table: TableConfig,
    pub max_tables: usize,
    /// Regex matched against window titles to find poker tables.
    pub window_title_pattern: String,
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        AppConfig {
            db_path: PathBuf::from("data/plutos.db"),
            data_dir: PathBuf::from("data"),
            poller: PollerConfig::default(),
            overlay: OverlayConfig::default(),
            vision: VisionConfig::default(),
            default_table: TableConfig::default(),
            max_tables: 4,
            window_title_pattern: "NL Hold'em".into(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &std::path::Path) -> Result<AppConfig> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(path, raw)
            .with_context(|| format!("failed to write config file {}", path.display()))
    }

    /// Loads the config file when present, otherwise defaults.
    pub fn load_or_default(path: &std::path::Path) -> Result<AppConfig> {
        if path.exists() {
            AppConfig::load(path)
        } else {
            Ok(AppConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.max_tables, 4);
        assert!((config.poller.poll_frequency_hz - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.default_table.board_cards.len(), 5);
        assert_eq!(config.default_table.dealer_pixels.len(), 8);
        assert_eq!(config.default_table.active_player_pixels.len(), 7);
    }

    #[test]
    fn test_probed_seats_skip_hero() {
        let table = TableConfig::default();
        let seats = table.probed_seats();
        assert_eq!(seats, vec![0, 1, 2, 3, 5, 6, 7]);
        assert_eq!(seats.len(), table.active_player_pixels.len());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.max_tables = 2;
        config.window_title_pattern = "Zoom".into();
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.max_tables, 2);
        assert_eq!(loaded.window_title_pattern, "Zoom");
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config.max_tables, 4);
    }
}
