// Frame interpretation: cards via OCR, table state via pixel probes.

pub mod cards;
pub mod ui_state;

use anyhow::Result;
use chrono::Utc;
use tracing::warn;

use crate::capture::Frame;
use crate::config::{TableConfig, VisionConfig};
use crate::ocr;
use crate::poker::positions;
use crate::poker_types::{HoleCards, Observation, Position, RecognitionConfidence};

/// Interprets one captured frame into a structured observation. OCR failures
/// on individual readouts degrade that field instead of failing the frame.
pub fn observe(
    frame: &Frame,
    window_id: &str,
    table: &TableConfig,
    vision: &VisionConfig,
) -> Result<Observation> {
    let dealer = ui_state::dealer_seat(frame, table).map(|hit| hit.seat);
    let seats: Vec<usize> = ui_state::active_seats(frame, table)
        .iter()
        .map(|hit| hit.seat)
        .collect();
    let turn = ui_state::hero_turn(frame, table);

    let hero_position = dealer
        .map(|d| positions::position_from_seat(table.hero_seat_index, d, table.total_seats))
        .filter(|pos| *pos != Position::Unknown);
    let active_positions: Vec<Position> = match dealer {
        Some(d) => positions::active_positions(&seats, d, table.total_seats)
            .into_iter()
            .filter(|pos| *pos != Position::Unknown)
            .collect(),
        None => Vec::new(),
    };

    let hero_cards = cards::read_hero_cards(frame, table, vision)?;
    let board_cards = cards::read_board(frame, table, vision)?;

    let pot_bb = match frame.crop(table.pot_region) {
        Ok(crop) => ocr::read_amount(&crop, vision).unwrap_or_else(|err| {
            warn!(window = window_id, error = %err, "pot OCR failed");
            None
        }),
        Err(_) => None,
    };
    let hero_stack_bb = match frame.crop(table.hero_stack_region) {
        Ok(crop) => ocr::read_amount(&crop, vision).unwrap_or_else(|err| {
            warn!(window = window_id, error = %err, "stack OCR failed");
            None
        }),
        Err(_) => None,
    };

    let confidence = RecognitionConfidence {
        hero_cards: if hero_cards.is_some() { 1.0 } else { 0.0 },
        board_cards: 1.0,
        dealer: if dealer.is_some() { 1.0 } else { 0.0 },
        turn_indicator: if turn.red.is_some() { 1.0 } else { 0.0 },
    };

    let stage = board_cards.stage();
    Ok(Observation {
        window_id: window_id.to_string(),
        timestamp: Utc::now(),
        stage,
        dealer_seat: dealer,
        hero_position,
        active_positions,
        hero_cards: hero_cards.and_then(|(a, b)| HoleCards::new(a, b)),
        board_cards,
        pot_bb,
        hero_stack_bb,
        hero_turn: turn.active,
        confidence,
    })
}
