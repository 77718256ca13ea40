// Chart-based preflop decision engine. Pure lookups keyed by hand notation,
// hero position, villain position and stack depth.

use tracing::debug;

use crate::poker::positions::{acts_before, range_key};
use crate::poker::preflop_ranges::{
    defense_vs_3bet, defense_vs_open, is_short_stack, open_range, push_ranges, stack_bucket,
};
use crate::poker_types::{Action, Observation, Position, PreflopDecision, Stage};

const DEFAULT_OPEN_SIZE: f64 = 2.5;
const THREE_BET_MULTIPLIER: f64 = 3.0;
const FOUR_BET_MULTIPLIER: f64 = 2.5;

/// Jam range used when a push/fold spot has no chart data.
const PREMIUM_JAM: [&str; 8] = ["AA", "KK", "QQ", "JJ", "TT", "AKs", "AKo", "AQs"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Situation {
    PushFold,
    Rfi,
    FacingOpen(Position),
}

/// Recommends a preflop action for the observed table state, or None when the
/// spot cannot be classified (postflop, missing cards, unknown position).
pub fn decide(observation: &Observation) -> Option<PreflopDecision> {
    if observation.stage != Stage::Preflop {
        debug!("not preflop, skipping");
        return None;
    }
    let cards = observation.hero_cards.as_ref()?;
    let hero = observation.hero_position?;
    let hero_key = range_key(hero)?;

    let hand = cards.hand_notation();
    let stack_bb = observation.hero_stack_bb.unwrap_or(100.0);

    let situation = analyze(observation, hero, stack_bb);
    debug!(
        hand = %hand,
        position = hero_key,
        stack_bb,
        ?situation,
        "preflop spot"
    );

    let decision = match situation {
        Situation::PushFold => push_fold(&hand, hero_key, stack_bb),
        Situation::Rfi => rfi(&hand, hero_key),
        Situation::FacingOpen(opener) => {
            let opener_key = range_key(opener)?;
            facing_open(&hand, hero_key, opener_key)
        }
    };
    Some(decision)
}

/// Chart lookup for defending our open against a 3bet. The automatic path
/// cannot see betting history, so this spot is exposed for explicit queries.
pub fn decide_facing_3bet(
    hand: &str,
    hero: Position,
    three_bettor: Position,
) -> Option<PreflopDecision> {
    let hero_key = range_key(hero)?;
    let villain_key = range_key(three_bettor)?;
    Some(facing_3bet(hand, hero_key, villain_key))
}

fn analyze(observation: &Observation, hero: Position, stack_bb: f64) -> Situation {
    if is_short_stack(stack_bb) {
        return Situation::PushFold;
    }
    match find_opener(observation, hero) {
        None => Situation::Rfi,
        Some(opener) => Situation::FacingOpen(opener),
    }
}

/// Earliest active position that acts before hero, if any. No such player
/// means hero is first in.
fn find_opener(observation: &Observation, hero: Position) -> Option<Position> {
    observation
        .active_positions
        .iter()
        .copied()
        .filter(|&pos| acts_before(pos, hero))
        .min_by_key(|&pos| crate::poker::positions::action_index(pos))
}

fn rfi(hand: &str, hero_key: &str) -> PreflopDecision {
    let in_range = open_range(hero_key).is_some_and(|range| range.contains(hand));
    if in_range {
        PreflopDecision {
            action: Action::Raise,
            sizing_bb: Some(DEFAULT_OPEN_SIZE),
            confidence: 1.0,
            source: "ranges_rfi".into(),
            reasoning: format!("OPEN {hero_key}: {hand}"),
        }
    } else {
        PreflopDecision {
            action: Action::Fold,
            sizing_bb: None,
            confidence: 0.95,
            source: "ranges_rfi".into(),
            reasoning: format!("Fold - not in {hero_key} open range: {hand}"),
        }
    }
}

fn facing_open(hand: &str, hero_key: &str, opener_key: &str) -> PreflopDecision {
    let Some(defense) = defense_vs_open(hero_key, opener_key) else {
        debug!("no defense range for {hero_key} vs {opener_key}");
        return default_fold(hand);
    };

    let three_bet_size = DEFAULT_OPEN_SIZE * THREE_BET_MULTIPLIER;
    if defense.three_bet.contains(hand) {
        return PreflopDecision {
            action: Action::Raise,
            sizing_bb: Some(three_bet_size),
            confidence: 1.0,
            source: "ranges_vs_open".into(),
            reasoning: format!("3BET value vs {opener_key}: {hand}"),
        };
    }
    if defense.three_bet_bluff.contains(hand) {
        return PreflopDecision {
            action: Action::Raise,
            sizing_bb: Some(three_bet_size),
            confidence: 0.85,
            source: "ranges_vs_open".into(),
            reasoning: format!("3BET bluff vs {opener_key}: {hand}"),
        };
    }
    if defense.call.contains(hand) {
        return PreflopDecision {
            action: Action::Call,
            sizing_bb: None,
            confidence: 0.95,
            source: "ranges_vs_open".into(),
            reasoning: format!("CALL vs {opener_key}: {hand}"),
        };
    }
    PreflopDecision {
        action: Action::Fold,
        sizing_bb: None,
        confidence: 0.9,
        source: "ranges_vs_open".into(),
        reasoning: format!("Fold vs {opener_key} open: {hand}"),
    }
}

fn facing_3bet(hand: &str, hero_key: &str, villain_key: &str) -> PreflopDecision {
    let Some(defense) = defense_vs_3bet(hero_key, villain_key) else {
        debug!("no 3bet defense range for {hero_key} vs {villain_key}");
        return default_fold(hand);
    };

    let four_bet_size = DEFAULT_OPEN_SIZE * THREE_BET_MULTIPLIER * FOUR_BET_MULTIPLIER;
    if defense.four_bet.contains(hand) {
        return PreflopDecision {
            action: Action::Raise,
            sizing_bb: Some(four_bet_size),
            confidence: 1.0,
            source: "ranges_vs_3bet".into(),
            reasoning: format!("4BET value vs {villain_key}: {hand}"),
        };
    }
    if defense.four_bet_bluff.contains(hand) {
        return PreflopDecision {
            action: Action::Raise,
            sizing_bb: Some(four_bet_size),
            confidence: 0.8,
            source: "ranges_vs_3bet".into(),
            reasoning: format!("4BET bluff vs {villain_key}: {hand}"),
        };
    }
    if defense.call.contains(hand) {
        return PreflopDecision {
            action: Action::Call,
            sizing_bb: None,
            confidence: 0.9,
            source: "ranges_vs_3bet".into(),
            reasoning: format!("CALL 3bet from {villain_key}: {hand}"),
        };
    }
    PreflopDecision {
        action: Action::Fold,
        sizing_bb: None,
        confidence: 0.9,
        source: "ranges_vs_3bet".into(),
        reasoning: format!("Fold to 3bet from {villain_key}: {hand}"),
    }
}

fn push_fold(hand: &str, hero_key: &str, stack_bb: f64) -> PreflopDecision {
    let bucket = stack_bucket(stack_bb);
    let Some(ranges) = push_ranges(bucket, hero_key) else {
        debug!("no push/fold range for {hero_key} at {bucket}");
        return push_fold_fallback(hand, stack_bb);
    };

    // "push" is the full range. The 1-5bb depth fields are narrower subsets
    // of it, so the full range applies there; the 6-10bb bucket prefers the
    // exact-depth range when present.
    let push_range = if bucket == "6-10bb" {
        let subset = if stack_bb >= 10.0 {
            &ranges.push_10bb
        } else {
            &ranges.push_6_9bb
        };
        if subset.is_empty() {
            &ranges.push
        } else {
            subset
        }
    } else {
        &ranges.push
    };

    if push_range.contains(hand) {
        PreflopDecision {
            action: Action::AllIn,
            sizing_bb: Some(stack_bb),
            confidence: 1.0,
            source: "icm_push_fold".into(),
            reasoning: format!("PUSH {hero_key} at {stack_bb:.1}bb: {hand}"),
        }
    } else {
        PreflopDecision {
            action: Action::Fold,
            sizing_bb: None,
            confidence: 0.95,
            source: "icm_push_fold".into(),
            reasoning: format!("Fold {hero_key} at {stack_bb:.1}bb: {hand}"),
        }
    }
}

fn push_fold_fallback(hand: &str, stack_bb: f64) -> PreflopDecision {
    if PREMIUM_JAM.contains(&hand) {
        PreflopDecision {
            action: Action::AllIn,
            sizing_bb: Some(stack_bb),
            confidence: 0.9,
            source: "icm_push_fold_fallback".into(),
            reasoning: format!("PUSH premium at {stack_bb:.1}bb: {hand}"),
        }
    } else {
        PreflopDecision {
            action: Action::Fold,
            sizing_bb: None,
            confidence: 0.8,
            source: "icm_push_fold_fallback".into(),
            reasoning: format!("Fold non-premium at {stack_bb:.1}bb: {hand}"),
        }
    }
}

fn default_fold(hand: &str) -> PreflopDecision {
    PreflopDecision {
        action: Action::Fold,
        sizing_bb: None,
        confidence: 0.5,
        source: "default".into(),
        reasoning: format!("Default fold: {hand}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poker_types::{BoardCards, Card, HoleCards, RecognitionConfidence};

    fn observation(
        hand: (&str, &str),
        hero: Position,
        actives: Vec<Position>,
        stack_bb: Option<f64>,
    ) -> Observation {
        let first = Card::parse(hand.0).unwrap();
        let second = Card::parse(hand.1).unwrap();
        Observation {
            window_id: "table_1".into(),
            timestamp: chrono::Utc::now(),
            stage: Stage::Preflop,
            dealer_seat: Some(0),
            hero_position: Some(hero),
            active_positions: actives,
            hero_cards: HoleCards::new(first, second),
            board_cards: BoardCards::default(),
            pot_bb: Some(1.5),
            hero_stack_bb: stack_bb,
            hero_turn: true,
            confidence: RecognitionConfidence::default(),
        }
    }

    #[test]
    fn test_rfi_open_and_fold() {
        let obs = observation(("Ah", "Kh"), Position::Utg, vec![], None);
        let d = decide(&obs).unwrap();
        assert_eq!(d.action, Action::Raise);
        assert_eq!(d.sizing_bb, Some(2.5));
        assert_eq!(d.source, "ranges_rfi");

        let obs = observation(("7h", "2c"), Position::Utg, vec![], None);
        let d = decide(&obs).unwrap();
        assert_eq!(d.action, Action::Fold);
    }

    #[test]
    fn test_facing_open_routes_to_defense() {
        // UTG is active before the button, so hero defends vs the open.
        let obs = observation(("Ad", "As"), Position::Button, vec![Position::Utg], None);
        let d = decide(&obs).unwrap();
        assert_eq!(d.action, Action::Raise);
        assert_eq!(d.sizing_bb, Some(7.5));
        assert_eq!(d.source, "ranges_vs_open");

        let obs = observation(("9h", "9c"), Position::Button, vec![Position::Utg], None);
        let d = decide(&obs).unwrap();
        assert_eq!(d.action, Action::Call);
    }

    #[test]
    fn test_earliest_active_is_the_opener() {
        let obs = observation(
            ("Ah", "Qh"),
            Position::BigBlind,
            vec![Position::Cutoff, Position::Utg],
            None,
        );
        let d = decide(&obs).unwrap();
        // AQs 3bets vs an UTG open but would only flat some later opens.
        assert_eq!(d.action, Action::Raise);
        assert!(d.reasoning.contains("UTG"));
    }

    #[test]
    fn test_active_player_behind_hero_is_still_rfi() {
        let obs = observation(("Ah", "Kh"), Position::Cutoff, vec![Position::Button], None);
        let d = decide(&obs).unwrap();
        assert_eq!(d.source, "ranges_rfi");
        assert_eq!(d.action, Action::Raise);
    }

    #[test]
    fn test_short_stack_goes_push_fold() {
        let obs = observation(("Jd", "2c"), Position::SmallBlind, vec![], Some(4.0));
        let d = decide(&obs).unwrap();
        assert_eq!(d.action, Action::AllIn);
        assert_eq!(d.sizing_bb, Some(4.0));
        assert_eq!(d.source, "icm_push_fold");

        let obs = observation(("7d", "2c"), Position::UtgPlus1, vec![], Some(8.0));
        let d = decide(&obs).unwrap();
        assert_eq!(d.action, Action::Fold);
        assert_eq!(d.source, "icm_push_fold");
    }

    #[test]
    fn test_exact_depth_subset_at_ten_bb() {
        // 44 jams at 6-9bb but not at exactly 10bb from UTG+1.
        let obs = observation(("4h", "4c"), Position::UtgPlus1, vec![], Some(10.0));
        let d = decide(&obs).unwrap();
        assert_eq!(d.action, Action::Fold);

        let obs = observation(("4h", "4c"), Position::UtgPlus1, vec![], Some(8.0));
        let d = decide(&obs).unwrap();
        assert_eq!(d.action, Action::AllIn);
    }

    #[test]
    fn test_push_fold_fallback_for_positions_without_data() {
        // BB has no push chart at any depth.
        let obs = observation(("Ah", "Kh"), Position::BigBlind, vec![], Some(5.0));
        let d = decide(&obs).unwrap();
        assert_eq!(d.action, Action::AllIn);
        assert_eq!(d.source, "icm_push_fold_fallback");

        let obs = observation(("Jh", "Tc"), Position::BigBlind, vec![], Some(5.0));
        let d = decide(&obs).unwrap();
        assert_eq!(d.action, Action::Fold);
        assert_eq!(d.confidence, 0.8);
    }

    #[test]
    fn test_skips_unclassifiable_spots() {
        let mut obs = observation(("Ah", "Kh"), Position::Utg, vec![], None);
        obs.stage = Stage::Flop;
        assert!(decide(&obs).is_none());

        let mut obs = observation(("Ah", "Kh"), Position::Utg, vec![], None);
        obs.hero_cards = None;
        assert!(decide(&obs).is_none());

        let obs = observation(("Ah", "Kh"), Position::Unknown, vec![], None);
        assert!(decide(&obs).is_none());
    }

    #[test]
    fn test_facing_3bet_lookup() {
        let d = decide_facing_3bet("AA", Position::Utg, Position::Button).unwrap();
        assert_eq!(d.action, Action::Raise);
        assert_eq!(d.sizing_bb, Some(18.75));

        let d = decide_facing_3bet("A5s", Position::SmallBlind, Position::BigBlind).unwrap();
        assert_eq!(d.action, Action::Raise);
        assert_eq!(d.confidence, 0.8);

        let d = decide_facing_3bet("72o", Position::Button, Position::SmallBlind).unwrap();
        assert_eq!(d.action, Action::Fold);
    }

    #[test]
    fn test_decisions_are_deterministic() {
        let obs = observation(("Ah", "Kh"), Position::Cutoff, vec![Position::Lojack], None);
        let a = decide(&obs).unwrap();
        let b = decide(&obs).unwrap();
        assert_eq!(a, b);
    }
}
