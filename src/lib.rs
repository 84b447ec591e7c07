// Library interface for assembly-endgame
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod farewell;
pub mod game_state;
pub mod logging;
pub mod roster;
pub mod status;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use error::{Error, Result};
pub use farewell::{FarewellTextProvider, Farewells};
pub use game_state::{
    GameEvent, GameInterface, GameState, RoundOutcome, Tally, UserAction, attempts_remaining,
    derive_outcome, game_loop, is_last_guess_incorrect, missing_letters, wrong_guess_count,
};
pub use roster::{Language, LanguageRoster, Rgb};
pub use status::Status;
pub use wordbank::{
    EMBEDDED_WORDBANK, WordProvider, Wordbank, load_wordbank_from_file, load_wordbank_from_str,
};
