// The poll loop. Each tick refreshes the window registry, captures every
// tracked table, interprets the frame and feeds the result through a
// per-window hand tracker that debounces the turn indicator, votes on hero
// cards and fires one advice event per turn.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::calibration;
use crate::capture::Frame;
use crate::config::AppConfig;
use crate::overlay::Presenter;
use crate::poker::engine;
use crate::poker_types::{HeroTurnEvent, HoleCards, Observation, PreflopDecision};
use crate::storage::Database;
use crate::vision::{self, cards::CardVotes};
use crate::windows::WindowRegistry;

/// Card recognition pauses this long once hero's turn is detected, so chip
/// animations over the cards cannot flip an already confirmed read.
const RECOGNITION_FREEZE: Duration = Duration::from_secs(3);

/// Confidence required before differing hero cards count as a new hand.
const NEW_HAND_CARD_CONFIDENCE: f32 = 0.85;

/// What one observation did to the hand tracker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub new_hand: bool,
    pub turn_started: bool,
}

/// Per-window state spanning polls within one hand.
pub struct HandTracker {
    first_votes: CardVotes,
    second_votes: CardVotes,
    confirmed_cards: Option<HoleCards>,
    min_card_votes: u32,
    required_turn_signals: u32,
    turn_signals: u32,
    turn_fired: bool,
    frozen_until: Option<Instant>,
    cached_decision: Option<PreflopDecision>,
    prev_board_len: usize,
    prev_pot: Option<f64>,
}

impl HandTracker {
    pub fn new(min_card_votes: u32, required_turn_signals: u32) -> HandTracker {
        HandTracker {
            first_votes: CardVotes::default(),
            second_votes: CardVotes::default(),
            confirmed_cards: None,
            min_card_votes,
            required_turn_signals: required_turn_signals.max(1),
            turn_signals: 0,
            turn_fired: false,
            frozen_until: None,
            cached_decision: None,
            prev_board_len: 0,
            prev_pot: None,
        }
    }

    pub fn confirmed_cards(&self) -> Option<HoleCards> {
        self.confirmed_cards
    }

    pub fn cached_decision(&self) -> Option<&PreflopDecision> {
        self.cached_decision.as_ref()
    }

    fn reset_for_new_hand(&mut self) {
        self.first_votes.clear();
        self.second_votes.clear();
        self.confirmed_cards = None;
        self.turn_signals = 0;
        self.turn_fired = false;
        self.frozen_until = None;
        self.cached_decision = None;
    }

    /// True when this observation can only belong to a fresh hand. The
    /// card-change rule is suspended while recognition is frozen, otherwise
    /// one double-misread frame during the freeze would reset the hand and
    /// re-fire the turn event.
    fn is_new_hand(&self, observation: &Observation, frozen: bool) -> bool {
        if self.prev_board_len >= 3 && observation.board_cards.is_empty() {
            return true;
        }
        if !frozen && observation.confidence.hero_cards >= NEW_HAND_CARD_CONFIDENCE {
            if let (Some(prev), Some(seen)) = (self.confirmed_cards, observation.hero_cards) {
                if prev.first != seen.first && prev.second != seen.second {
                    return true;
                }
            }
        }
        if let (Some(prev_pot), Some(pot)) = (self.prev_pot, observation.pot_bb) {
            // a pot shrinking past the blinds means the last hand ended
            if prev_pot > 5.0 && pot < 2.0 {
                return true;
            }
        }
        false
    }

    /// Folds one observation into the tracker. The observation's hero cards
    /// are replaced by the vote winners so downstream consumers see the
    /// settled read, not a single-frame one.
    pub fn update(&mut self, observation: &mut Observation, now: Instant) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        let mut frozen = self.frozen_until.is_some_and(|until| now < until);

        if self.is_new_hand(observation, frozen) {
            debug!(window = %observation.window_id, "new hand detected");
            self.reset_for_new_hand();
            frozen = false;
            outcome.new_hand = true;
        }
        self.prev_board_len = observation.board_cards.len();
        if observation.pot_bb.is_some() {
            self.prev_pot = observation.pot_bb;
        }

        if !frozen {
            if let Some(cards) = observation.hero_cards {
                self.first_votes.record(cards.first);
                self.second_votes.record(cards.second);
            }
            let leaders = (
                self.first_votes.leader(self.min_card_votes),
                self.second_votes.leader(self.min_card_votes),
            );
            if let (Some(first), Some(second)) = leaders {
                self.confirmed_cards = HoleCards::new(first, second);
            }
        }
        observation.hero_cards = self.confirmed_cards;

        if observation.hero_turn {
            self.turn_signals += 1;
            if self.turn_signals >= self.required_turn_signals && !self.turn_fired {
                self.turn_fired = true;
                self.frozen_until = Some(now + RECOGNITION_FREEZE);
                self.cached_decision = engine::decide(observation);
                outcome.turn_started = true;
            }
        } else {
            self.turn_signals = 0;
            self.turn_fired = false;
        }

        outcome
    }
}

pub struct Poller<P: Presenter> {
    config: AppConfig,
    registry: WindowRegistry,
    db: Database,
    session_id: i64,
    presenter: P,
    trackers: HashMap<String, HandTracker>,
    layouts: HashMap<String, crate::config::TableConfig>,
    registered_windows: Vec<String>,
}

impl<P: Presenter> Poller<P> {
    pub fn new(
        config: AppConfig,
        db: Database,
        session_id: i64,
        presenter: P,
    ) -> Result<Poller<P>> {
        let registry = WindowRegistry::new(&config)?;
        Ok(Poller {
            config,
            registry,
            db,
            session_id,
            presenter,
            trackers: HashMap::new(),
            layouts: HashMap::new(),
            registered_windows: Vec::new(),
        })
    }

    fn required_turn_signals(&self) -> u32 {
        let per_signal_ms = 1000.0 / self.config.poller.poll_frequency_hz.max(0.1);
        (self.config.poller.debounce_ms as f64 / per_signal_ms).ceil().max(1.0) as u32
    }

    /// Runs until cancelled. Ticks at the configured frequency; slow ticks
    /// delay rather than burst.
    pub async fn run(mut self, cancel: CancellationToken) -> Result<()> {
        let period = Duration::from_secs_f64(1.0 / self.config.poller.poll_frequency_hz.max(0.1));
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            frequency_hz = self.config.poller.poll_frequency_hz,
            "poller started"
        );
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("poller cancelled, shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    self.tick().await;
                }
            }
        }
        Ok(())
    }

    async fn tick(&mut self) {
        if let Err(err) = self.registry.refresh() {
            error!("window refresh failed: {err:#}");
            return;
        }
        if self.registry.is_empty() {
            self.presenter.show_waiting("no tables");
            return;
        }

        for native_id in self.registry.native_ids() {
            if let Err(err) = self.poll_window(native_id).await {
                warn!(window = native_id, "poll failed: {err:#}");
                self.registry.record_error(native_id);
            } else {
                self.registry.record_success(native_id);
            }
        }
    }

    async fn poll_window(&mut self, native_id: u32) -> Result<()> {
        let (table_id, title, frame) = {
            let Some(entry) = self.registry.get(native_id) else {
                return Ok(());
            };
            (
                entry.table_id.clone(),
                entry.title.clone(),
                Frame::capture(&entry.window)?,
            )
        };

        if !self.layouts.contains_key(&table_id) {
            let layout = calibration::load_layout(&self.config, &title)?;
            self.layouts.insert(table_id.clone(), layout);
        }
        if !self.registered_windows.contains(&table_id) {
            self.db
                .register_window(self.session_id, &table_id, &title, native_id)
                .await?;
            self.registered_windows.push(table_id.clone());
        }

        let layout = &self.layouts[&table_id];
        let mut observation = vision::observe(&frame, &table_id, layout, &self.config.vision)?;

        let required = self.required_turn_signals();
        let tracker = self
            .trackers
            .entry(table_id.clone())
            .or_insert_with(|| HandTracker::new(self.config.vision.min_card_votes, required));
        let outcome = tracker.update(&mut observation, Instant::now());
        let decision = tracker.cached_decision().cloned();

        self.db
            .insert_observation(self.session_id, &observation)
            .await?;

        if outcome.new_hand {
            self.db
                .insert_event(
                    self.session_id,
                    "new_hand",
                    &serde_json::json!({ "window_id": table_id }),
                )
                .await?;
        }

        if outcome.turn_started {
            let event = HeroTurnEvent {
                window_id: table_id.clone(),
                timestamp: observation.timestamp,
                hand: observation.hero_cards.map(|c| c.hand_notation()),
                hero_position: observation.hero_position,
            };
            self.db
                .insert_event(self.session_id, "hero_turn", &event)
                .await?;
            if let Some(decision) = &decision {
                self.db
                    .insert_decision(self.session_id, &table_id, &observation, decision)
                    .await?;
                self.presenter.show_decision(&observation, decision);
            } else {
                self.presenter.show_observation(&observation);
            }
        } else {
            self.presenter.show_observation(&observation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poker_types::{BoardCards, Card, Position, RecognitionConfidence};
    use chrono::Utc;

    fn observation(cards: Option<(&str, &str)>, board: &[&str], hero_turn: bool) -> Observation {
        let hero_cards = cards.and_then(|(a, b)| {
            HoleCards::new(Card::parse(a).unwrap(), Card::parse(b).unwrap())
        });
        let board_cards =
            BoardCards::new(board.iter().map(|s| Card::parse(s).unwrap()).collect());
        let stage = board_cards.stage();
        Observation {
            window_id: "table_1".into(),
            timestamp: Utc::now(),
            stage,
            dealer_seat: Some(0),
            hero_position: Some(Position::Button),
            active_positions: vec![Position::Button, Position::BigBlind],
            hero_cards,
            board_cards,
            pot_bb: Some(1.5),
            hero_stack_bb: Some(100.0),
            hero_turn,
            confidence: RecognitionConfidence {
                hero_cards: 1.0,
                board_cards: 1.0,
                dealer: 1.0,
                turn_indicator: 1.0,
            },
        }
    }

    #[test]
    fn test_cards_confirmed_after_votes() {
        let mut tracker = HandTracker::new(2, 1);
        let now = Instant::now();

        let mut obs = observation(Some(("Ah", "Kd")), &[], false);
        tracker.update(&mut obs, now);
        assert!(obs.hero_cards.is_none());

        let mut obs = observation(Some(("Ah", "Kd")), &[], false);
        tracker.update(&mut obs, now);
        assert_eq!(
            obs.hero_cards,
            HoleCards::new(Card::parse("Ah").unwrap(), Card::parse("Kd").unwrap())
        );
    }

    #[test]
    fn test_turn_debounce_and_single_fire() {
        let mut tracker = HandTracker::new(1, 2);
        let now = Instant::now();

        let mut obs = observation(Some(("Ah", "Kd")), &[], true);
        assert!(!tracker.update(&mut obs, now).turn_started);

        let mut obs = observation(Some(("Ah", "Kd")), &[], true);
        assert!(tracker.update(&mut obs, now).turn_started);
        assert!(tracker.cached_decision().is_some());

        // stays fired without a second event while the indicator holds
        let mut obs = observation(Some(("Ah", "Kd")), &[], true);
        assert!(!tracker.update(&mut obs, now).turn_started);

        // indicator clears, next turn can fire again
        let mut obs = observation(Some(("Ah", "Kd")), &[], false);
        tracker.update(&mut obs, now);
        let mut obs = observation(Some(("Ah", "Kd")), &[], true);
        let mut obs2 = observation(Some(("Ah", "Kd")), &[], true);
        assert!(!tracker.update(&mut obs, now).turn_started);
        assert!(tracker.update(&mut obs2, now).turn_started);
    }

    #[test]
    fn test_recognition_freeze_ignores_flipped_cards() {
        let mut tracker = HandTracker::new(1, 1);
        let now = Instant::now();

        let mut obs = observation(Some(("Ah", "Kd")), &[], true);
        assert!(tracker.update(&mut obs, now).turn_started);
        let confirmed = tracker.confirmed_cards();

        // a frame misreading both cards during the freeze window must not
        // reset the hand, change the read, or re-fire the turn event
        let mut obs = observation(Some(("2c", "7d")), &[], true);
        let outcome = tracker.update(&mut obs, now + Duration::from_secs(1));
        assert!(!outcome.new_hand);
        assert!(!outcome.turn_started);
        assert_eq!(tracker.confirmed_cards(), confirmed);
        assert_eq!(obs.hero_cards, confirmed);

        // once the freeze lapses with the indicator cleared, a genuinely
        // changed pair counts as a new hand again
        let mut obs = observation(Some(("2c", "7d")), &[], false);
        let outcome = tracker.update(&mut obs, now + Duration::from_secs(4));
        assert!(outcome.new_hand);
    }

    #[test]
    fn test_new_hand_on_board_reset() {
        let mut tracker = HandTracker::new(1, 1);
        let now = Instant::now();

        let mut obs = observation(Some(("Ah", "Kd")), &["2c", "7d", "9s"], false);
        tracker.update(&mut obs, now);

        let mut obs = observation(None, &[], false);
        let outcome = tracker.update(&mut obs, now);
        assert!(outcome.new_hand);
        assert!(tracker.confirmed_cards().is_none());
    }

    #[test]
    fn test_new_hand_on_changed_cards() {
        let mut tracker = HandTracker::new(1, 1);
        let now = Instant::now();

        let mut obs = observation(Some(("Ah", "Kd")), &[], false);
        tracker.update(&mut obs, now);
        assert!(tracker.confirmed_cards().is_some());

        let mut obs = observation(Some(("2c", "7d")), &[], false);
        let outcome = tracker.update(&mut obs, now);
        assert!(outcome.new_hand);
    }

    #[test]
    fn test_new_hand_on_pot_reset() {
        let mut tracker = HandTracker::new(1, 1);
        let now = Instant::now();

        let mut obs = observation(Some(("Ah", "Kd")), &[], false);
        obs.pot_bb = Some(24.0);
        tracker.update(&mut obs, now);

        let mut obs = observation(Some(("Ah", "Kd")), &[], false);
        obs.pot_bb = Some(1.5);
        assert!(tracker.update(&mut obs, now).new_hand);
    }

    #[test]
    fn test_one_card_changed_is_not_new_hand() {
        let mut tracker = HandTracker::new(1, 1);
        let now = Instant::now();

        let mut obs = observation(Some(("Ah", "Kd")), &[], false);
        tracker.update(&mut obs, now);

        // single differing card is a misread, not a new hand
        let mut obs = observation(Some(("Ah", "Qd")), &[], false);
        assert!(!tracker.update(&mut obs, now).new_hand);
    }
}
