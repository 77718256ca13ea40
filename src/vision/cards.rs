// Card recognition: ranks come from OCR over a preprocessed crop, suits from
// the dominant color of the suit crop. Repeated samples are settled by
// majority vote before hole cards are accepted.

use std::collections::HashMap;

use anyhow::Result;
use image::{DynamicImage, GrayImage, ImageBuffer, Rgba};
use tracing::debug;

use crate::capture::Frame;
use crate::config::{CardRegions, TableConfig, VisionConfig};
use crate::ocr;
use crate::poker_types::{BoardCards, Card, Rank, Suit};

fn clamp_u8(value: f32) -> u8 {
    value.max(0.0).min(255.0) as u8
}

/// Grayscale, contrast boost, binary threshold. Dark glyphs survive as black
/// on white, which is what tesseract handles best.
pub fn preprocess_rank(img: &DynamicImage, config: &VisionConfig) -> DynamicImage {
    let gray = img.to_luma8();
    let contrast = config.contrast;
    let threshold = config.binarize_threshold;
    let processed: GrayImage = ImageBuffer::from_fn(gray.width(), gray.height(), |x, y| {
        let boosted = clamp_u8(gray.get_pixel(x, y).0[0] as f32 * contrast);
        if boosted > threshold {
            image::Luma([255u8])
        } else {
            image::Luma([0u8])
        }
    });
    DynamicImage::ImageLuma8(processed)
}

/// Maps raw OCR output to a rank, absorbing the usual confusions
/// (1 for A, 0/10 for T, l/i for J, O for Q).
pub fn normalize_rank(text: &str) -> Option<Rank> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let token = if trimmed.starts_with("10") {
        "10"
    } else {
        &trimmed[..trimmed
            .char_indices()
            .nth(1)
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len())]
    };
    match token {
        "10" | "0" => Some(Rank::Ten),
        "1" => Some(Rank::Ace),
        "l" | "i" => Some(Rank::Jack),
        "O" => Some(Rank::Queen),
        other => Rank::from_char(other.chars().next()?),
    }
}

/// Classifies a suit from an averaged RGB sample. Thresholds match clients
/// that draw clubs green and diamonds blue.
pub fn classify_suit(r: u8, g: u8, b: u8) -> Suit {
    if r > 150 && r > g && r > b {
        Suit::Hearts
    } else if g > 100 && g > r && g > b {
        Suit::Clubs
    } else if b > 80 && b > r {
        Suit::Diamonds
    } else {
        Suit::Spades
    }
}

/// Average color of the crop, ignoring near-white background pixels.
pub fn dominant_color(img: &DynamicImage) -> (u8, u8, u8) {
    let rgba = img.to_rgba8();
    let mut sums = [0u64; 3];
    let mut count = 0u64;
    for Rgba([r, g, b, _]) in rgba.pixels() {
        if *r > 220 && *g > 220 && *b > 220 {
            continue;
        }
        sums[0] += *r as u64;
        sums[1] += *g as u64;
        sums[2] += *b as u64;
        count += 1;
    }
    if count == 0 {
        return (255, 255, 255);
    }
    (
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
    )
}

/// Reads one card slot from the frame. None when the rank cannot be OCRed.
pub fn read_card(
    frame: &Frame,
    regions: &CardRegions,
    config: &VisionConfig,
) -> Result<Option<Card>> {
    let rank_crop = frame.crop(regions.rank)?;
    let processed = preprocess_rank(&rank_crop, config);
    let text = ocr::read_rank_text(&processed, config)?;
    let Some(rank) = normalize_rank(&text) else {
        debug!(raw = %text, "unrecognizable rank glyph");
        return Ok(None);
    };

    let suit_crop = frame.crop(regions.suit)?;
    let (r, g, b) = dominant_color(&suit_crop);
    let suit = classify_suit(r, g, b);
    Ok(Some(Card::new(rank, suit)))
}

/// Reads both hero card slots. Duplicate reads are treated as a misread.
pub fn read_hero_cards(
    frame: &Frame,
    table: &TableConfig,
    config: &VisionConfig,
) -> Result<Option<(Card, Card)>> {
    let first = read_card(frame, &table.hero_card1, config)?;
    let second = read_card(frame, &table.hero_card2, config)?;
    match (first, second) {
        (Some(a), Some(b)) if a != b => Ok(Some((a, b))),
        _ => Ok(None),
    }
}

/// Reads board slots left to right, stopping at the first unrecognizable
/// slot.
pub fn read_board(frame: &Frame, table: &TableConfig, config: &VisionConfig) -> Result<BoardCards> {
    let mut cards: Vec<Card> = Vec::new();
    for regions in &table.board_cards {
        match read_card(frame, regions, config)? {
            Some(card) => cards.push(card),
            None => break,
        }
    }
    Ok(validate_board(cards))
}

/// Duplicates invalidate the whole read; counts other than 0/3/4/5 collapse
/// to an empty board.
pub fn validate_board(cards: Vec<Card>) -> BoardCards {
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            debug!(card = %card, "duplicate board card, discarding board");
            return BoardCards::default();
        }
    }
    if !matches!(cards.len(), 0 | 3 | 4 | 5) {
        debug!(count = cards.len(), "implausible board count, discarding");
        return BoardCards::default();
    }
    BoardCards::new(cards)
}

/// Majority vote over repeated reads of one card slot.
#[derive(Debug, Default, Clone)]
pub struct CardVotes {
    counts: HashMap<Card, u32>,
}

impl CardVotes {
    pub fn record(&mut self, card: Card) {
        *self.counts.entry(card).or_insert(0) += 1;
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Winning card once it has at least `min_votes` samples.
    pub fn leader(&self, min_votes: u32) -> Option<Card> {
        self.counts
            .iter()
            .max_by_key(|(_, &count)| count)
            .filter(|(_, &count)| count >= min_votes)
            .map(|(&card, _)| card)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_normalize_rank_confusions() {
        assert_eq!(normalize_rank("1"), Some(Rank::Ace));
        assert_eq!(normalize_rank("0"), Some(Rank::Ten));
        assert_eq!(normalize_rank("10"), Some(Rank::Ten));
        assert_eq!(normalize_rank("l"), Some(Rank::Jack));
        assert_eq!(normalize_rank("i"), Some(Rank::Jack));
        assert_eq!(normalize_rank("O"), Some(Rank::Queen));
        assert_eq!(normalize_rank("K"), Some(Rank::King));
        assert_eq!(normalize_rank("7x"), Some(Rank::Seven));
        assert_eq!(normalize_rank(""), None);
        assert_eq!(normalize_rank("%"), None);
    }

    #[test]
    fn test_classify_suit_by_color() {
        assert_eq!(classify_suit(200, 40, 40), Suit::Hearts);
        assert_eq!(classify_suit(30, 160, 40), Suit::Clubs);
        assert_eq!(classify_suit(40, 60, 180), Suit::Diamonds);
        assert_eq!(classify_suit(20, 20, 25), Suit::Spades);
    }

    #[test]
    fn test_dominant_color_ignores_background() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 1, Rgba([200, 10, 10, 255]));
        img.put_pixel(2, 2, Rgba([200, 10, 10, 255]));
        let (r, g, b) = dominant_color(&DynamicImage::ImageRgba8(img));
        assert_eq!((r, g, b), (200, 10, 10));
    }

    #[test]
    fn test_preprocess_binarizes() {
        let img = RgbaImage::from_pixel(2, 2, Rgba([30, 30, 30, 255]));
        let config = VisionConfig::default();
        let out = preprocess_rank(&DynamicImage::ImageRgba8(img), &config);
        assert_eq!(out.to_luma8().get_pixel(0, 0).0[0], 0);

        let img = RgbaImage::from_pixel(2, 2, Rgba([240, 240, 240, 255]));
        let out = preprocess_rank(&DynamicImage::ImageRgba8(img), &config);
        assert_eq!(out.to_luma8().get_pixel(0, 0).0[0], 255);
    }

    fn cards(names: &[&str]) -> Vec<Card> {
        names.iter().map(|s| Card::parse(s).unwrap()).collect()
    }

    #[test]
    fn test_validate_board() {
        assert_eq!(validate_board(cards(&[])).len(), 0);
        assert_eq!(validate_board(cards(&["2c", "7d", "9s"])).len(), 3);
        assert_eq!(validate_board(cards(&["2c", "7d", "9s", "Jh", "Ad"])).len(), 5);

        // partial reads and duplicates collapse to an empty board
        assert!(validate_board(cards(&["2c", "7d"])).is_empty());
        assert!(validate_board(cards(&["2c", "7d", "2c"])).is_empty());
    }

    #[test]
    fn test_card_votes_majority() {
        let ah = Card::parse("Ah").unwrap();
        let kd = Card::parse("Kd").unwrap();
        let mut votes = CardVotes::default();
        votes.record(ah);
        votes.record(kd);
        votes.record(ah);
        assert_eq!(votes.leader(2), Some(ah));
        assert_eq!(votes.leader(4), None);
        votes.clear();
        assert_eq!(votes.leader(1), None);
    }
}
