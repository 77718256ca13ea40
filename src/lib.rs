//! Real-time preflop assistant for online NL Hold'em. Captures table
//! windows, reads cards and table state off the frame, and recommends a
//! chart action when it is hero's turn. Everything observed is logged to
//! SQLite for later review.

pub mod calibration;
pub mod capture;
pub mod config;
pub mod ocr;
pub mod overlay;
pub mod poker;
pub mod poker_types;
pub mod poller;
pub mod storage;
pub mod vision;
pub mod windows;

pub use config::AppConfig;
pub use poker_types::{
    Action, BoardCards, Card, HoleCards, Observation, Position, PreflopDecision, Stage,
};
pub use storage::Database;
