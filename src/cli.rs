use crate::game_state::{Cell, GameInterface, GameState, RoundOutcome, UserAction};
use crate::status::{self, Status};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Assembly: Endgame - guess the word before every language but Assembly is gone
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Play in line mode instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,

    /// Seed for reproducible word selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log file (defaults to the platform data directory)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// Line-mode input/output

#[derive(Debug, PartialEq, Eq)]
pub enum LineInput {
    Guess(char),
    NewGame,
    Exit,
    Invalid,
}

#[must_use]
pub fn parse_line(line: &str) -> LineInput {
    let input = line.trim().to_lowercase();
    match input.as_str() {
        "exit" | "quit" => LineInput::Exit,
        "new" | "next" => LineInput::NewGame,
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_lowercase() => LineInput::Guess(c),
                _ => LineInput::Invalid,
            }
        }
    }
}

/// Reads one line. End of input and read errors count as a request to exit.
pub fn read_input<R: BufRead>(reader: &mut R) -> LineInput {
    println!("\nGuess a letter ('new' for a new game, 'exit' to quit):");
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) | Err(_) => LineInput::Exit,
        Ok(_) => match parse_line(&line) {
            LineInput::Invalid => {
                println!("Invalid input. Please enter a single letter a-z.");
                LineInput::Invalid
            }
            input => input,
        },
    }
}

#[must_use]
pub fn format_word(cells: &[Cell]) -> String {
    cells
        .iter()
        .map(|cell| match cell {
            Cell::Hidden => "_".to_string(),
            Cell::Revealed(c) => c.to_ascii_uppercase().to_string(),
            Cell::Missing(c) => format!("({})", c.to_ascii_uppercase()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn format_roster(state: &GameState) -> String {
    let lost = state.wrong_guess_count();
    state
        .roster()
        .iter()
        .enumerate()
        .map(|(i, language)| {
            if i < lost {
                format!("💀{}", language.name)
            } else {
                language.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn display_board(state: &GameState, status: &Status) {
    if let Some((headline, detail)) = status.lines() {
        println!("{headline}");
        println!("{detail}");
    }
    println!("{}", format_roster(state));
    println!("{}", format_word(&state.masked_word()));
    println!("{}", status::announcement(state));
}

pub fn display_round_over(state: &GameState, outcome: RoundOutcome) {
    if outcome == RoundOutcome::Lost {
        let missing: String = state.missing_letters().into_iter().collect();
        println!("The word was '{}' (you missed: {missing}).", state.target());
    }
    println!("Type 'new' to play again or 'exit' to quit.");
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// Line-mode implementation of the `GameInterface` trait
/// This struct wraps a BufRead reader and prints to stdout
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        match read_input(&mut self.reader) {
            LineInput::Guess(c) => Some(UserAction::Guess(c)),
            LineInput::NewGame => Some(UserAction::NewGame),
            LineInput::Exit => Some(UserAction::Exit),
            LineInput::Invalid => None,
        }
    }

    fn render(&mut self, state: &GameState, status: &Status) {
        display_board(state, status);
    }

    fn round_ended(&mut self, state: &GameState, outcome: RoundOutcome) {
        display_round_over(state, outcome);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::LanguageRoster;
    use crate::wordbank::Wordbank;
    use std::io::Cursor;

    #[test]
    fn test_parse_cli_no_args() {
        let cli = Cli::try_parse_from(["assembly-endgame"]).unwrap();
        assert_eq!(cli.wordbank_path, None);
        assert!(!cli.plain);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_parse_cli_with_options() {
        let cli = Cli::try_parse_from([
            "assembly-endgame",
            "-i",
            "words.txt",
            "--plain",
            "--seed",
            "7",
            "--log-file",
            "/tmp/game.log",
        ])
        .unwrap();
        assert_eq!(cli.wordbank_path, Some("words.txt".to_string()));
        assert!(cli.plain);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/game.log")));
    }

    #[test]
    fn test_parse_cli_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["assembly-endgame", "--seed", "abc"]).is_err());
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("a\n"), LineInput::Guess('a'));
        assert_eq!(parse_line("  Q  "), LineInput::Guess('q'));
        assert_eq!(parse_line("new"), LineInput::NewGame);
        assert_eq!(parse_line("NEXT"), LineInput::NewGame);
        assert_eq!(parse_line("exit"), LineInput::Exit);
        assert_eq!(parse_line("Quit"), LineInput::Exit);
        assert_eq!(parse_line("ab"), LineInput::Invalid);
        assert_eq!(parse_line("7"), LineInput::Invalid);
        assert_eq!(parse_line(""), LineInput::Invalid);
        assert_eq!(parse_line("é"), LineInput::Invalid);
    }

    #[test]
    fn test_read_input_sequence() {
        let mut reader = Cursor::new("r\nxyz\nnew\n");
        assert_eq!(read_input(&mut reader), LineInput::Guess('r'));
        assert_eq!(read_input(&mut reader), LineInput::Invalid);
        assert_eq!(read_input(&mut reader), LineInput::NewGame);
        // end of input
        assert_eq!(read_input(&mut reader), LineInput::Exit);
    }

    #[test]
    fn test_cli_interface_maps_actions() {
        let mut interface = CliInterface::new(Cursor::new("g\n??\nexit\n"));
        assert_eq!(interface.read_action(), Some(UserAction::Guess('g')));
        assert_eq!(interface.read_action(), None);
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }

    #[test]
    fn test_format_word() {
        let cells = [
            Cell::Revealed('c'),
            Cell::Hidden,
            Cell::Missing('s'),
        ];
        assert_eq!(format_word(&cells), "C _ (S)");
    }

    #[test]
    fn test_format_roster_marks_lost_languages() {
        let bank = Wordbank::seeded(vec!["go".to_string()], 0).unwrap();
        let mut state = GameState::new(Box::new(bank), LanguageRoster::default());
        state.submit_guess('x');
        let roster = format_roster(&state);
        assert!(roster.starts_with("💀HTML CSS "));
        assert!(roster.ends_with("Assembly"));
    }
}
