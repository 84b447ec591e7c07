//! Player-facing feedback derived from the game after each action.

use crate::farewell::FarewellTextProvider;
use crate::game_state::{GameState, RoundOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    /// The last guess missed and cost a language.
    Farewell { text: String, attempts_left: usize },
    Won,
    Lost { survivor: String },
}

impl Status {
    /// Computes the status for the current board. A farewell line is only
    /// produced while the round is still going and the last guess missed.
    pub fn derive<F>(state: &GameState, farewells: &mut F) -> Self
    where
        F: FarewellTextProvider + ?Sized,
    {
        match state.outcome() {
            RoundOutcome::Won => Self::Won,
            RoundOutcome::Lost => Self::Lost {
                survivor: state.roster().last().name.clone(),
            },
            RoundOutcome::InProgress if state.is_last_guess_incorrect() => {
                let text = state
                    .wrong_guess_count()
                    .checked_sub(1)
                    .and_then(|i| state.roster().get(i))
                    .map(|language| farewells.farewell_text(&language.name))
                    .unwrap_or_default();
                Self::Farewell {
                    text,
                    attempts_left: state.attempts_remaining(),
                }
            }
            RoundOutcome::InProgress => Self::Idle,
        }
    }

    /// Headline and follow-up line, if there is anything to say.
    #[must_use]
    pub fn lines(&self) -> Option<(String, String)> {
        match self {
            Self::Idle => None,
            Self::Farewell {
                text,
                attempts_left,
            } => Some((text.clone(), attempts_left_text(*attempts_left))),
            Self::Won => Some(("You win!".to_string(), "Well done! 🎉".to_string())),
            Self::Lost { survivor } => Some((
                "Game Over!".to_string(),
                format!("You lose! Better start learning {survivor} 😭"),
            )),
        }
    }
}

#[must_use]
pub fn attempts_left_text(attempts: usize) -> String {
    let plural = if attempts == 1 { "" } else { "s" };
    let bang = if attempts == 1 { "!" } else { "" };
    format!("You have {attempts} attempt{plural} left{bang}")
}

/// Plain-text description of the last guess and the board, suitable for
/// screen readers and line-mode play.
#[must_use]
pub fn announcement(state: &GameState) -> String {
    let mut text = String::new();
    if let Some(letter) = state.last_guess() {
        if state.target().contains(letter) {
            text.push_str(&format!("Correct! {letter} is in the word. "));
        } else {
            text.push_str(&format!("Sorry, {letter} is not in the word. "));
        }
        text.push_str(&attempts_left_text(state.attempts_remaining()));
        text.push_str(".\n");
    }
    let word: Vec<String> = state
        .target()
        .chars()
        .map(|c| {
            if state.guesses().contains(&c) {
                format!("{c}.")
            } else {
                "blank.".to_string()
            }
        })
        .collect();
    text.push_str("Current word: ");
    text.push_str(&word.join(" "));
    text
}
