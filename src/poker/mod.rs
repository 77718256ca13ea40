pub mod engine;
pub mod positions;
pub mod preflop_ranges;
