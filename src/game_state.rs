use crate::farewell::FarewellTextProvider;
use crate::roster::{Language, LanguageRoster};
use crate::status::Status;
use crate::wordbank::{WordProvider, is_playable_word};
use crate::{debug_log, info_log};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    InProgress,
    Won,
    Lost,
}

impl RoundOutcome {
    #[must_use]
    pub fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Emitted by [`GameState`] and consumed by whatever draws the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted,
    /// The round left `InProgress`. Queued once, on the guess that ended it.
    RoundEnded(RoundOutcome),
}

/// How a keyboard letter should be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterState {
    Unguessed,
    Correct,
    Wrong,
}

/// One position of the target word as the player sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Hidden,
    Revealed(char),
    /// Never guessed, shown only after a loss.
    Missing(char),
}

// Derived values. All of them are pure over (target, guesses, roster_len)
// and are recomputed on every read.

#[must_use]
pub fn wrong_guess_count(target: &str, guesses: &[char]) -> usize {
    guesses.iter().filter(|&&g| !target.contains(g)).count()
}

#[must_use]
pub fn is_word_guessed(target: &str, guesses: &[char]) -> bool {
    target.chars().all(|c| guesses.contains(&c))
}

/// Won is decided from correct letters and Lost from wrong ones; the two sets
/// are disjoint so a finishing guess can never also be the losing one. Won is
/// still checked first.
#[must_use]
pub fn derive_outcome(target: &str, guesses: &[char], roster_len: usize) -> RoundOutcome {
    if is_word_guessed(target, guesses) {
        RoundOutcome::Won
    } else if wrong_guess_count(target, guesses) >= roster_len.saturating_sub(1) {
        RoundOutcome::Lost
    } else {
        RoundOutcome::InProgress
    }
}

#[must_use]
pub fn attempts_remaining(target: &str, guesses: &[char], roster_len: usize) -> usize {
    roster_len
        .saturating_sub(1)
        .saturating_sub(wrong_guess_count(target, guesses))
}

/// Distinct letters of `target` not guessed yet, in first-occurrence order.
#[must_use]
pub fn missing_letters(target: &str, guesses: &[char]) -> Vec<char> {
    let mut missing = Vec::new();
    for c in target.chars() {
        if !guesses.contains(&c) && !missing.contains(&c) {
            missing.push(c);
        }
    }
    missing
}

#[must_use]
pub fn is_last_guess_incorrect(target: &str, guesses: &[char]) -> bool {
    guesses.last().is_some_and(|&g| !target.contains(g))
}

/// One player's game: the current target word, the letters guessed against
/// it, and the roster that sets how many wrong guesses are allowed.
///
/// `start_round` and `submit_guess` are the only mutators.
pub struct GameState {
    provider: Box<dyn WordProvider>,
    roster: LanguageRoster,
    target: String,
    guesses: Vec<char>,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Creates the game and starts its first round.
    pub fn new(provider: Box<dyn WordProvider>, roster: LanguageRoster) -> Self {
        let mut state = Self {
            provider,
            roster,
            target: String::new(),
            guesses: Vec::new(),
            events: Vec::new(),
        };
        state.start_round();
        state
    }

    pub fn start_round(&mut self) {
        self.target = self.provider.random_word();
        debug_assert!(
            is_playable_word(&self.target),
            "word provider returned unplayable target {:?}",
            self.target
        );
        self.guesses = Vec::new();
        info_log!("start_round() - new target of {} letters", self.target.len());
        self.events.push(GameEvent::RoundStarted);
    }

    /// Records a guess. Letters outside `a..=z`, repeats, and anything sent
    /// after the round is over are ignored.
    pub fn submit_guess(&mut self, letter: char) {
        if !letter.is_ascii_lowercase() {
            debug_log!("submit_guess() - ignoring non-letter {:?}", letter);
            return;
        }
        if self.is_over() {
            debug_log!("submit_guess() - round over, ignoring '{}'", letter);
            return;
        }
        if self.guesses.contains(&letter) {
            debug_log!("submit_guess() - '{}' already guessed", letter);
            return;
        }

        self.guesses.push(letter);
        let outcome = self.outcome();
        info_log!(
            "submit_guess() - '{}' ({}), wrong guesses: {}",
            letter,
            if self.target.contains(letter) { "hit" } else { "miss" },
            self.wrong_guess_count()
        );
        if outcome.is_over() {
            info_log!("submit_guess() - round ended: {:?}", outcome);
            self.events.push(GameEvent::RoundEnded(outcome));
        }
    }

    /// Takes the events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn outcome(&self) -> RoundOutcome {
        derive_outcome(&self.target, &self.guesses, self.roster.len())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    #[must_use]
    pub fn wrong_guess_count(&self) -> usize {
        wrong_guess_count(&self.target, &self.guesses)
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        attempts_remaining(&self.target, &self.guesses, self.roster.len())
    }

    #[must_use]
    pub fn missing_letters(&self) -> Vec<char> {
        missing_letters(&self.target, &self.guesses)
    }

    #[must_use]
    pub fn is_last_guess_incorrect(&self) -> bool {
        is_last_guess_incorrect(&self.target, &self.guesses)
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn guesses(&self) -> &[char] {
        &self.guesses
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<char> {
        self.guesses.last().copied()
    }

    #[must_use]
    pub fn roster(&self) -> &LanguageRoster {
        &self.roster
    }

    #[must_use]
    pub fn life_budget(&self) -> usize {
        self.roster.life_budget()
    }

    #[must_use]
    pub fn letter_state(&self, letter: char) -> LetterState {
        if !self.guesses.contains(&letter) {
            LetterState::Unguessed
        } else if self.target.contains(letter) {
            LetterState::Correct
        } else {
            LetterState::Wrong
        }
    }

    /// Roster entries already lost, oldest first.
    pub fn lost_languages(&self) -> impl Iterator<Item = &Language> {
        self.roster.iter().take(self.wrong_guess_count())
    }

    #[must_use]
    pub fn masked_word(&self) -> Vec<Cell> {
        let lost = self.outcome() == RoundOutcome::Lost;
        self.target
            .chars()
            .map(|c| {
                if self.guesses.contains(&c) {
                    Cell::Revealed(c)
                } else if lost {
                    Cell::Missing(c)
                } else {
                    Cell::Hidden
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    NewGame,
    Exit,
}

/// Everything a front end has to do to host the game.
pub trait GameInterface {
    /// Next action from the player. `None` means the input was unusable and
    /// the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;

    fn render(&mut self, state: &GameState, status: &Status);

    /// Called once per finished round, after the final board was rendered.
    fn round_ended(&mut self, state: &GameState, outcome: RoundOutcome);

    fn display_exit_message(&mut self);
}

/// Rounds finished during one `game_loop` run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub won: usize,
    pub lost: usize,
}

pub fn game_loop<I, F>(state: &mut GameState, interface: &mut I, farewells: &mut F) -> Tally
where
    I: GameInterface + ?Sized,
    F: FarewellTextProvider + ?Sized,
{
    let mut tally = Tally::default();
    let mut status = Status::Idle;
    state.drain_events();
    interface.render(state, &status);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        let guesses_before = state.guesses().len();
        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => state.start_round(),
            UserAction::Guess(letter) => {
                state.submit_guess(letter);
                if state.guesses().len() == guesses_before {
                    // rejected guess, nothing changed on the board
                    continue;
                }
            }
        }

        status = Status::derive(state, farewells);
        interface.render(state, &status);

        for event in state.drain_events() {
            match event {
                GameEvent::RoundStarted => {
                    info_log!("game_loop() - round started");
                }
                GameEvent::RoundEnded(outcome) => {
                    match outcome {
                        RoundOutcome::Won => tally.won += 1,
                        RoundOutcome::Lost => tally.lost += 1,
                        RoundOutcome::InProgress => {}
                    }
                    interface.round_ended(state, outcome);
                }
            }
        }
    }

    info_log!("game_loop() - finished: {:?}", tally);
    tally
}
