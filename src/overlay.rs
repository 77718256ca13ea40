// Recommendation display. The presenter trait keeps the poll loop agnostic
// of how advice reaches the player; the terminal presenter prints one line
// per update.

use crate::poker_types::{Action, Observation, PreflopDecision};

pub trait Presenter: Send {
    /// Shown while a table has no actionable state.
    fn show_waiting(&mut self, window_id: &str);

    /// Shown on every classified frame.
    fn show_observation(&mut self, observation: &Observation);

    /// Shown when hero's turn comes up with a chart recommendation.
    fn show_decision(&mut self, observation: &Observation, decision: &PreflopDecision);
}

/// Prints advice to stdout. Carries no window handle, works everywhere.
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    last_line: Option<String>,
}

impl TerminalPresenter {
    pub fn new() -> TerminalPresenter {
        TerminalPresenter::default()
    }

    fn print_once(&mut self, line: String) {
        if self.last_line.as_deref() != Some(line.as_str()) {
            println!("{line}");
            self.last_line = Some(line);
        }
    }
}

fn action_label(action: Action) -> &'static str {
    match action {
        Action::Fold => "FOLD",
        Action::Check => "CHECK",
        Action::Call => "CALL",
        Action::Raise => "RAISE",
        Action::AllIn => "ALL IN",
    }
}

impl Presenter for TerminalPresenter {
    fn show_waiting(&mut self, window_id: &str) {
        self.print_once(format!("[{window_id}] waiting for hand..."));
    }

    fn show_observation(&mut self, observation: &Observation) {
        let cards = observation
            .hero_cards
            .map(|c| c.to_string())
            .unwrap_or_else(|| "??".into());
        let position = observation
            .hero_position
            .map(|p| p.as_str())
            .unwrap_or("?");
        self.print_once(format!(
            "[{}] {} | {} | {} | pot {}",
            observation.window_id,
            observation.stage.as_str(),
            cards,
            position,
            observation
                .pot_bb
                .map(|p| format!("{p:.1}bb"))
                .unwrap_or_else(|| "?".into()),
        ));
    }

    fn show_decision(&mut self, observation: &Observation, decision: &PreflopDecision) {
        let sizing = decision
            .sizing_bb
            .map(|s| format!(" {s:.1}bb"))
            .unwrap_or_default();
        // always print decisions, even when repeated
        self.last_line = None;
        self.print_once(format!(
            "[{}] >>> {}{}  ({:.0}% | {})",
            observation.window_id,
            action_label(decision.action),
            sizing,
            decision.confidence * 100.0,
            decision.reasoning,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels() {
        assert_eq!(action_label(Action::Raise), "RAISE");
        assert_eq!(action_label(Action::AllIn), "ALL IN");
    }

    #[test]
    fn test_print_once_dedupes() {
        let mut presenter = TerminalPresenter::new();
        presenter.print_once("a".into());
        assert_eq!(presenter.last_line.as_deref(), Some("a"));
        presenter.print_once("a".into());
        presenter.print_once("b".into());
        assert_eq!(presenter.last_line.as_deref(), Some("b"));
    }
}
