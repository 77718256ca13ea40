// Seat <-> position mapping relative to the dealer button, plus preflop
// action ordering used by the decision engine.

use crate::poker_types::Position;

// Position orders starting from BTN going clockwise.
const POSITIONS_9MAX: [Position; 9] = [
    Position::Button,
    Position::SmallBlind,
    Position::BigBlind,
    Position::Utg,
    Position::UtgPlus1,
    Position::UtgPlus2,
    Position::Lojack,
    Position::Hijack,
    Position::Cutoff,
];

const POSITIONS_8MAX: [Position; 8] = [
    Position::Button,
    Position::SmallBlind,
    Position::BigBlind,
    Position::Utg,
    Position::UtgPlus1,
    Position::Lojack,
    Position::Hijack,
    Position::Cutoff,
];

const POSITIONS_6MAX: [Position; 6] = [
    Position::Button,
    Position::SmallBlind,
    Position::BigBlind,
    Position::Utg,
    Position::Hijack,
    Position::Cutoff,
];

// Heads-up the button posts the small blind.
const POSITIONS_2MAX: [Position; 2] = [Position::Button, Position::BigBlind];

/// First to act -> last to act preflop.
pub const PREFLOP_ACTION_ORDER: [Position; 9] = [
    Position::Utg,
    Position::UtgPlus1,
    Position::UtgPlus2,
    Position::Lojack,
    Position::Hijack,
    Position::Cutoff,
    Position::Button,
    Position::SmallBlind,
    Position::BigBlind,
];

pub fn positions_for_table_size(total_seats: usize) -> &'static [Position] {
    if total_seats <= 2 {
        &POSITIONS_2MAX
    } else if total_seats <= 6 {
        &POSITIONS_6MAX
    } else if total_seats <= 8 {
        &POSITIONS_8MAX
    } else {
        &POSITIONS_9MAX
    }
}

/// Position of `seat_index` given the dealer seat. Seats are 0-based.
pub fn position_from_seat(seat_index: usize, dealer_seat: usize, total_seats: usize) -> Position {
    if total_seats == 0 || total_seats > 9 {
        return Position::Unknown;
    }
    let relative = (seat_index + total_seats - dealer_seat % total_seats) % total_seats;
    let positions = positions_for_table_size(total_seats);
    positions.get(relative).copied().unwrap_or(Position::Unknown)
}

pub fn active_positions(
    active_seats: &[usize],
    dealer_seat: usize,
    total_seats: usize,
) -> Vec<Position> {
    active_seats
        .iter()
        .map(|&seat| position_from_seat(seat, dealer_seat, total_seats))
        .collect()
}

/// Sorts seats into action order starting from the seat after the dealer.
pub fn seats_in_action_order(active_seats: &[usize], dealer_seat: usize, total_seats: usize) -> Vec<usize> {
    let mut sorted = active_seats.to_vec();
    sorted.sort_by_key(|&seat| (seat + total_seats - dealer_seat % total_seats) % total_seats);
    sorted
}

pub fn is_early(position: Position) -> bool {
    matches!(
        position,
        Position::Utg | Position::UtgPlus1 | Position::UtgPlus2
    )
}

pub fn is_middle(position: Position) -> bool {
    matches!(position, Position::Lojack | Position::Hijack)
}

pub fn is_late(position: Position) -> bool {
    matches!(position, Position::Cutoff | Position::Button)
}

pub fn is_blind(position: Position) -> bool {
    matches!(position, Position::SmallBlind | Position::BigBlind)
}

/// Index in preflop action order: 0 for UTG, 8 for BB, None if unknown.
pub fn action_index(position: Position) -> Option<usize> {
    PREFLOP_ACTION_ORDER.iter().position(|&p| p == position)
}

/// True when the villain acts before hero preflop.
pub fn acts_before(villain: Position, hero: Position) -> bool {
    match (action_index(villain), action_index(hero)) {
        (Some(v), Some(h)) => v < h,
        _ => false,
    }
}

/// Chart lookup key for a position; Unknown has none.
pub fn range_key(position: Position) -> Option<&'static str> {
    match position {
        Position::Unknown => None,
        other => Some(other.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_seat_dealer_relative() {
        // Dealer on seat 3 at an 8-max table.
        assert_eq!(position_from_seat(3, 3, 8), Position::Button);
        assert_eq!(position_from_seat(4, 3, 8), Position::SmallBlind);
        assert_eq!(position_from_seat(5, 3, 8), Position::BigBlind);
        assert_eq!(position_from_seat(6, 3, 8), Position::Utg);
        // Wraps around seat 0.
        assert_eq!(position_from_seat(2, 3, 8), Position::Cutoff);
    }

    #[test]
    fn test_position_from_seat_heads_up() {
        assert_eq!(position_from_seat(0, 0, 2), Position::Button);
        assert_eq!(position_from_seat(1, 0, 2), Position::BigBlind);
    }

    #[test]
    fn test_position_from_seat_invalid_table() {
        assert_eq!(position_from_seat(0, 0, 0), Position::Unknown);
        assert_eq!(position_from_seat(0, 0, 12), Position::Unknown);
    }

    #[test]
    fn test_action_order() {
        assert_eq!(action_index(Position::Utg), Some(0));
        assert_eq!(action_index(Position::BigBlind), Some(8));
        assert_eq!(action_index(Position::Unknown), None);
        assert!(acts_before(Position::Utg, Position::Button));
        assert!(!acts_before(Position::BigBlind, Position::SmallBlind));
        assert!(!acts_before(Position::Unknown, Position::Button));
    }

    #[test]
    fn test_seats_in_action_order() {
        let sorted = seats_in_action_order(&[0, 2, 5, 7], 5, 8);
        assert_eq!(sorted, vec![5, 7, 0, 2]);
    }

    #[test]
    fn test_classification() {
        assert!(is_early(Position::UtgPlus2));
        assert!(is_middle(Position::Hijack));
        assert!(is_late(Position::Button));
        assert!(is_blind(Position::SmallBlind));
        assert!(!is_late(Position::SmallBlind));
    }

    #[test]
    fn test_range_key() {
        assert_eq!(range_key(Position::UtgPlus1), Some("UTG+1"));
        assert_eq!(range_key(Position::Unknown), None);
    }
}
