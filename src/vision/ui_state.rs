// Table state from pixel probes: dealer button, active seats and the hero
// turn indicator are all detected by sampling known coordinates. Reads carry
// the sampled red channel so miscalibrated probes show up in the logs.

use tracing::trace;

use crate::capture::Frame;
use crate::config::{PixelCoord, TableConfig};

/// Tolerance around the calibrated red value of an active-seat marker.
const ACTIVE_RED_TOLERANCE: i16 = 5;

/// One positive probe hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeHit {
    pub seat: usize,
    /// Sampled red channel at the probe coordinate.
    pub red: u8,
}

/// Turn-indicator read with the sampled color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnIndicator {
    pub active: bool,
    pub red: Option<u8>,
}

/// Dealer button, from the first probe whose red channel falls in [200, 255].
/// None when no seat shows the button.
pub fn dealer_seat(frame: &Frame, table: &TableConfig) -> Option<ProbeHit> {
    for (seat, coord) in table.dealer_pixels.iter().enumerate() {
        if let Some(px) = frame.pixel(*coord) {
            let red = px.0[0];
            if (200..=255).contains(&red) {
                trace!(seat, red, "dealer button probe hit");
                return Some(ProbeHit { seat, red });
            }
        }
    }
    None
}

/// Seats still in the hand. Hero's own seat carries no probe and is always
/// included, folded players' markers go dark.
pub fn active_seats(frame: &Frame, table: &TableConfig) -> Vec<ProbeHit> {
    let mut hits = Vec::with_capacity(table.total_seats);
    let probed = table.probed_seats();
    for (check, seat) in table.active_player_pixels.iter().zip(probed) {
        let Some(px) = frame.pixel(PixelCoord::new(check.left, check.top)) else {
            continue;
        };
        let red = px.0[0];
        let delta = (red as i16 - check.r_target as i16).abs();
        if delta <= ACTIVE_RED_TOLERANCE {
            hits.push(ProbeHit { seat, red });
        }
    }
    hits.push(ProbeHit {
        seat: table.hero_seat_index,
        red: 0,
    });
    hits.sort_unstable_by_key(|hit| hit.seat);
    hits
}

/// Whether the action indicator next to hero's cards is lit.
pub fn hero_turn(frame: &Frame, table: &TableConfig) -> TurnIndicator {
    let Some(px) = frame.pixel(table.turn_indicator_pixel) else {
        return TurnIndicator::default();
    };
    let red = px.0[0];
    let (lo, hi) = table.turn_indicator_color_range;
    TurnIndicator {
        active: (lo..=hi).contains(&red),
        red: Some(red),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PixelCheck;
    use image::{DynamicImage, Rgba, RgbaImage};

    fn frame_with_pixels(pixels: &[(u32, u32, [u8; 4])]) -> Frame {
        let mut img = RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 255]));
        for &(x, y, color) in pixels {
            img.put_pixel(x, y, Rgba(color));
        }
        Frame::new(DynamicImage::ImageRgba8(img))
    }

    fn small_table() -> TableConfig {
        TableConfig {
            dealer_pixels: vec![
                PixelCoord::new(1, 1),
                PixelCoord::new(2, 1),
                PixelCoord::new(3, 1),
            ],
            active_player_pixels: vec![PixelCheck::new(1, 2, 40), PixelCheck::new(3, 2, 40)],
            hero_seat_index: 1,
            total_seats: 3,
            turn_indicator_pixel: PixelCoord::new(5, 5),
            turn_indicator_color_range: (200, 255),
            ..TableConfig::default()
        }
    }

    fn seats(hits: &[ProbeHit]) -> Vec<usize> {
        hits.iter().map(|hit| hit.seat).collect()
    }

    #[test]
    fn test_dealer_seat_first_hit() {
        let table = small_table();
        let frame = frame_with_pixels(&[(2, 1, [230, 230, 230, 255])]);
        let hit = dealer_seat(&frame, &table).unwrap();
        assert_eq!(hit.seat, 1);
        assert_eq!(hit.red, 230);

        let frame = frame_with_pixels(&[]);
        assert!(dealer_seat(&frame, &table).is_none());
    }

    #[test]
    fn test_active_seats_within_tolerance() {
        let table = small_table();
        // probe order covers seats 0 and 2, hero is seat 1
        let frame = frame_with_pixels(&[(1, 2, [42, 0, 0, 255]), (3, 2, [80, 0, 0, 255])]);
        assert_eq!(seats(&active_seats(&frame, &table)), vec![0, 1]);

        let frame = frame_with_pixels(&[(1, 2, [42, 0, 0, 255]), (3, 2, [38, 0, 0, 255])]);
        assert_eq!(seats(&active_seats(&frame, &table)), vec![0, 1, 2]);
    }

    #[test]
    fn test_hero_always_active() {
        let table = small_table();
        let frame = frame_with_pixels(&[]);
        assert_eq!(seats(&active_seats(&frame, &table)), vec![1]);
    }

    #[test]
    fn test_hero_turn_indicator() {
        let table = small_table();
        let frame = frame_with_pixels(&[(5, 5, [220, 30, 30, 255])]);
        let read = hero_turn(&frame, &table);
        assert!(read.active);
        assert_eq!(read.red, Some(220));

        let frame = frame_with_pixels(&[(5, 5, [120, 30, 30, 255])]);
        assert!(!hero_turn(&frame, &table).active);
    }
}
