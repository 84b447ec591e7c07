use thiserror::Error;

/// Failures that can happen while putting a game together.
///
/// Playing never fails: bad guesses are ignored by [`crate::game_state::GameState`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("word bank contains no playable words")]
    EmptyWordbank,
    #[error("language roster needs at least 2 entries to allow one wrong guess, got {len}")]
    RosterTooSmall { len: usize },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
