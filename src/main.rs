use anyhow::{Context, Result};
use assembly_endgame::cli::{CliInterface, parse_cli};
use assembly_endgame::farewell::Farewells;
use assembly_endgame::game_state::{GameState, game_loop};
use assembly_endgame::logging;
use assembly_endgame::roster::LanguageRoster;
use assembly_endgame::tui::TuiInterface;
use assembly_endgame::wordbank::{
    EMBEDDED_WORDBANK, Wordbank, load_wordbank_from_file, load_wordbank_from_str,
};
use std::io;

fn main() -> Result<()> {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(logging::default_log_path) {
        logging::init(&path)
            .with_context(|| format!("failed to open log file '{}'", path.display()))?;
    }
    log::info!("starting assembly-endgame {}", env!("CARGO_PKG_VERSION"));

    let words = match &cli.wordbank_path {
        Some(path) => load_wordbank_from_file(path)
            .with_context(|| format!("failed to load word bank from '{path}'"))?,
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    log::info!("loaded {} words", words.len());

    let wordbank = match cli.seed {
        Some(seed) => Wordbank::seeded(words, seed)?,
        None => Wordbank::new(words)?,
    };
    let mut farewells = match cli.seed {
        Some(seed) => Farewells::seeded(seed),
        None => Farewells::new(),
    };
    let mut state = GameState::new(Box::new(wordbank), LanguageRoster::default());

    let tally = if cli.plain {
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&mut state, &mut interface, &mut farewells)
    } else {
        let mut interface = TuiInterface::new().context("failed to set up the terminal")?;
        game_loop(&mut state, &mut interface, &mut farewells)
    };

    log::info!("session over: {} won, {} lost", tally.won, tally.lost);
    println!("Rounds won: {}, rounds lost: {}", tally.won, tally.lost);
    Ok(())
}
