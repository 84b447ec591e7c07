//! TUI (Terminal User Interface) module for Assembly: Endgame
//!
//! This module provides the full-screen game using Ratatui.
//!
//! # Architecture
//! - `View`: everything needed to draw a frame, plus key handling
//! - `TuiInterface`: owns the terminal and implements `GameInterface`
//!
//! # State Machine
//! - `Playing` → `RoundOver { focus }` when the round ends
//! - `RoundOver` → `Playing` on the next rendered round
//!
//! When a round ends the focus moves to the "New Game" button, after the
//! final board has been drawn.

use crate::game_state::{Cell, GameInterface, GameState, LetterState, RoundOutcome, UserAction};
use crate::roster::{Language, Rgb};
use crate::status::Status;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const KEYS_PER_ROW: usize = 10;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const SUBTITLE_STYLE: Style = Style::new().fg(Color::Rgb(0x8E, 0x8E, 0x8E));
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const CELL_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Rgb(0x32, 0x32, 0x32))
    .add_modifier(Modifier::BOLD);
const MISSING_STYLE: Style = CELL_STYLE.fg(Color::Rgb(0xEC, 0x5D, 0x49));
const KEY_UNGUESSED: Color = Color::Rgb(0xFC, 0xBA, 0x29);
const KEY_CORRECT: Color = Color::Rgb(0x10, 0xA9, 0x5B);
const KEY_WRONG: Color = Color::Rgb(0xEC, 0x5D, 0x49);
const WON_BG: Color = Color::Rgb(0x10, 0xA9, 0x5B);
const LOST_BG: Color = Color::Rgb(0xBA, 0x2A, 0x2A);
const FAREWELL_BG: Color = Color::Rgb(0x7A, 0x5E, 0xA7);
const BUTTON_BG: Color = Color::Rgb(0x11, 0xB5, 0xE5);

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Keyboard,
    NewGame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TuiState {
    Playing,
    RoundOver { focus: Focus },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tone {
    Neutral,
    Farewell,
    Won,
    Lost,
}

/// Snapshot of the game taken at each render, so the frame can be redrawn
/// while waiting for input.
#[derive(Debug)]
struct Board {
    languages: Vec<(Language, bool)>,
    cells: Vec<Cell>,
    keys: Vec<(char, LetterState)>,
    status: Option<(String, String)>,
    tone: Tone,
    life_budget: usize,
}

impl Board {
    fn from_state(state: &GameState, status: &Status) -> Self {
        let lost = state.wrong_guess_count();
        let tone = match status {
            Status::Idle => Tone::Neutral,
            Status::Farewell { .. } => Tone::Farewell,
            Status::Won => Tone::Won,
            Status::Lost { .. } => Tone::Lost,
        };
        Self {
            languages: state
                .roster()
                .iter()
                .enumerate()
                .map(|(i, language)| (language.clone(), i < lost))
                .collect(),
            cells: state.masked_word(),
            keys: ALPHABET.chars().map(|c| (c, state.letter_state(c))).collect(),
            status: status.lines(),
            tone,
            life_budget: state.life_budget(),
        }
    }

    fn letter_state(&self, letter: char) -> LetterState {
        self.keys
            .iter()
            .find(|(c, _)| *c == letter)
            .map_or(LetterState::Unguessed, |&(_, s)| s)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            cells: Vec::new(),
            keys: ALPHABET.chars().map(|c| (c, LetterState::Unguessed)).collect(),
            status: None,
            tone: Tone::Neutral,
            life_budget: 0,
        }
    }
}

/// What is on screen, independent of the terminal it is drawn to.
#[derive(Debug)]
struct View {
    board: Board,
    state: TuiState,
    cursor: usize,
    message: String,
    error_message: String,
}

impl View {
    fn new() -> Self {
        Self {
            board: Board::default(),
            state: TuiState::Playing,
            cursor: 0,
            message: String::new(),
            error_message: String::new(),
        }
    }

    fn update(&mut self, state: &GameState, status: &Status) {
        self.board = Board::from_state(state, status);
        self.error_message.clear();
        if !state.is_over() {
            if matches!(self.state, TuiState::RoundOver { .. }) {
                self.message = "New round started".to_string();
            } else if !state.guesses().is_empty() {
                self.message.clear();
            }
            self.state = TuiState::Playing;
        } else if self.state == TuiState::Playing {
            self.state = TuiState::RoundOver {
                focus: Focus::Keyboard,
            };
        }
    }

    fn focus_new_game(&mut self) {
        self.state = TuiState::RoundOver {
            focus: Focus::NewGame,
        };
        self.message = "Round over - press ENTER to start a new game".to_string();
    }

    fn selected_letter(&self) -> char {
        ALPHABET.chars().nth(self.cursor).unwrap_or('a')
    }

    fn move_cursor(&mut self, code: KeyCode) {
        let last = ALPHABET.len() - 1;
        self.cursor = match code {
            KeyCode::Left => self.cursor.checked_sub(1).unwrap_or(last),
            KeyCode::Right => (self.cursor + 1) % ALPHABET.len(),
            KeyCode::Up => self.cursor.saturating_sub(KEYS_PER_ROW),
            KeyCode::Down => (self.cursor + KEYS_PER_ROW).min(last),
            _ => self.cursor,
        };
    }

    fn guess(&mut self, letter: char) -> Option<UserAction> {
        if let Some(index) = ALPHABET.find(letter) {
            self.cursor = index;
        }
        if self.board.letter_state(letter) == LetterState::Unguessed {
            info_log!("View::guess() - guessing '{}'", letter);
            Some(UserAction::Guess(letter))
        } else {
            self.error_message = format!("You already guessed '{}'", letter.to_ascii_uppercase());
            None
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        self.error_message.clear();
        debug_log!(
            "handle_key() - code={:?}, modifiers={:?}, state={:?}",
            key.code,
            key.modifiers,
            self.state
        );

        if key.code == KeyCode::Esc {
            info_log!("handle_key() - ESC pressed, returning Exit");
            return Some(UserAction::Exit);
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
                _ => None,
            };
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            debug_log!("handle_key() - Ignoring key with ALT modifier");
            return None;
        }

        match self.state {
            TuiState::Playing => self.handle_playing_key(key),
            TuiState::RoundOver { focus } => self.handle_round_over_key(key, focus),
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.guess(c.to_ascii_lowercase()),
            KeyCode::Char(c) => {
                self.error_message = format!("Only letters are allowed! ('{c}' is not a letter)");
                None
            }
            KeyCode::Enter => self.guess(self.selected_letter()),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.move_cursor(key.code);
                None
            }
            _ => None,
        }
    }

    fn handle_round_over_key(&mut self, key: KeyEvent, focus: Focus) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Enter if focus == Focus::NewGame => Some(UserAction::NewGame),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                let focus = match focus {
                    Focus::Keyboard => Focus::NewGame,
                    Focus::NewGame => Focus::Keyboard,
                };
                self.state = TuiState::RoundOver { focus };
                None
            }
            _ => None,
        }
    }
}

/// Render the complete UI layout for the given view.
fn render_view(f: &mut Frame, view: &View) {
    let round_over = matches!(view.state, TuiState::RoundOver { .. });
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title
            Constraint::Length(4), // Status
            Constraint::Length(4), // Languages
            Constraint::Length(3), // Word
            Constraint::Length(5), // Keyboard
            Constraint::Length(if round_over { 3 } else { 0 }),
            Constraint::Min(3), // Messages
            Constraint::Length(3), // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0], view.board.life_budget);
    render_status(f, chunks[1], &view.board);
    render_languages(f, chunks[2], &view.board.languages);
    render_word(f, chunks[3], &view.board.cells);
    render_keyboard(f, chunks[4], view);
    if let TuiState::RoundOver { focus } = view.state {
        render_new_game_button(f, chunks[5], focus == Focus::NewGame);
    }
    render_messages(f, chunks[6], &view.message, &view.error_message);
    render_instructions(f, chunks[7], view.state);
}

fn render_title(f: &mut Frame, area: Rect, life_budget: usize) {
    let lines = vec![
        Line::from(Span::styled("ASSEMBLY: ENDGAME", HEADER_STYLE)),
        Line::from(Span::styled(
            format!(
                "Guess the word in under {life_budget} attempts to keep the programming world safe from Assembly!"
            ),
            SUBTITLE_STYLE,
        )),
    ];
    let title = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_status(f: &mut Frame, area: Rect, board: &Board) {
    let style = match board.tone {
        Tone::Neutral => Style::default(),
        Tone::Farewell => Style::new().fg(Color::White).bg(FAREWELL_BG),
        Tone::Won => Style::new().fg(Color::White).bg(WON_BG),
        Tone::Lost => Style::new().fg(Color::White).bg(LOST_BG),
    };
    let lines = match &board.status {
        Some((headline, detail)) => vec![
            Line::from(Span::styled(
                headline.as_str(),
                Style::new().add_modifier(Modifier::BOLD | Modifier::ITALIC),
            )),
            Line::from(Span::styled(detail.as_str(), Style::new().add_modifier(Modifier::ITALIC))),
        ],
        None => Vec::new(),
    };
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_languages(f: &mut Frame, area: Rect, languages: &[(Language, bool)]) {
    let mut spans = Vec::new();
    for (language, lost) in languages {
        let mut style = Style::new()
            .fg(color(language.foreground))
            .bg(color(language.background))
            .add_modifier(Modifier::BOLD);
        let label = if *lost {
            style = style.add_modifier(Modifier::CROSSED_OUT | Modifier::DIM);
            format!(" 💀{} ", language.name)
        } else {
            format!(" {} ", language.name)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Languages"));
    f.render_widget(paragraph, area);
}

fn render_word(f: &mut Frame, area: Rect, cells: &[Cell]) {
    let mut spans = Vec::new();
    for cell in cells {
        let span = match cell {
            Cell::Hidden => Span::styled("   ", CELL_STYLE),
            Cell::Revealed(c) => Span::styled(format!(" {} ", c.to_ascii_uppercase()), CELL_STYLE),
            Cell::Missing(c) => {
                Span::styled(format!(" {} ", c.to_ascii_uppercase()), MISSING_STYLE)
            }
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Word"));
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, area: Rect, view: &View) {
    let round_over = matches!(view.state, TuiState::RoundOver { .. });
    let keyboard_focused = !matches!(
        view.state,
        TuiState::RoundOver {
            focus: Focus::NewGame
        }
    );
    let lines: Vec<Line> = view
        .board
        .keys
        .chunks(KEYS_PER_ROW)
        .enumerate()
        .map(|(row, keys)| {
            let mut spans = Vec::new();
            for (col, &(letter, state)) in keys.iter().enumerate() {
                let bg = match state {
                    LetterState::Unguessed => KEY_UNGUESSED,
                    LetterState::Correct => KEY_CORRECT,
                    LetterState::Wrong => KEY_WRONG,
                };
                let mut style = Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD);
                if round_over {
                    style = style.add_modifier(Modifier::DIM);
                }
                if keyboard_focused && row * KEYS_PER_ROW + col == view.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Keyboard"));
    f.render_widget(paragraph, area);
}

fn render_new_game_button(f: &mut Frame, area: Rect, focused: bool) {
    let mut style = Style::new().fg(Color::Black).bg(BUTTON_BG).add_modifier(Modifier::BOLD);
    let mut block = Block::default().borders(Borders::ALL);
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
        block = block.border_style(Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    }
    let label = if focused { "> New Game <" } else { "New Game" };
    let button = Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(button, area);
}

fn render_messages(f: &mut Frame, area: Rect, message: &str, error_message: &str) {
    let mut lines = Vec::new();
    if !message.is_empty() {
        lines.push(Line::from(Span::styled(message, HEADER_STYLE)));
    }
    if !error_message.is_empty() {
        lines.push(Line::from(Span::styled(error_message, ERROR_STYLE)));
    }
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Information"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
    let text = match state {
        TuiState::Playing => "Type a letter | ARROWS + ENTER: Pick a key | CTRL+N: New Game | ESC: Quit",
        TuiState::RoundOver { .. } => "TAB: Switch focus | ENTER/N: New Game | ESC: Quit",
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Main TUI interface component.
///
/// Manages the terminal, turns key presses into `UserAction`s and draws the board.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    view: View,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            view: View::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let view = &self.view;
        self.terminal.draw(|f| render_view(f, view))?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                // Garbage from escape sequences when alt-tabbing shows up as
                // replacement or control characters
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
                {
                    debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
                    return Ok(None);
                }
                Ok(self.view.handle_key(key))
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn render(&mut self, state: &GameState, status: &Status) {
        self.view.update(state, status);
        self.draw_or_log();
    }

    fn round_ended(&mut self, _state: &GameState, outcome: RoundOutcome) {
        info_log!("round_ended() - {:?}, focusing New Game", outcome);
        self.view.focus_new_game();
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.view.message = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::farewell::FarewellTextProvider;
    use crate::roster::LanguageRoster;
    use crate::wordbank::Wordbank;
    use ratatui::backend::TestBackend;

    struct Plain;

    impl FarewellTextProvider for Plain {
        fn farewell_text(&mut self, label: &str) -> String {
            format!("Farewell, {label}")
        }
    }

    fn game(word: &str) -> GameState {
        let bank = Wordbank::seeded(vec![word.to_string()], 0).unwrap();
        GameState::new(Box::new(bank), LanguageRoster::default())
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(view: &View) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal.draw(|f| render_view(f, view)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_letter_key_guesses_lowercase() {
        let mut view = View::new();
        assert_eq!(
            view.handle_key(press(KeyCode::Char('R'))),
            Some(UserAction::Guess('r'))
        );
        assert_eq!(view.selected_letter(), 'r');
    }

    #[test]
    fn test_already_guessed_letter_shows_error() {
        let mut state = game("rust");
        state.submit_guess('r');
        let mut view = View::new();
        view.update(&state, &Status::Idle);
        assert_eq!(view.handle_key(press(KeyCode::Char('r'))), None);
        assert!(view.error_message.contains("already guessed"));
    }

    #[test]
    fn test_non_letter_rejected() {
        let mut view = View::new();
        assert_eq!(view.handle_key(press(KeyCode::Char('4'))), None);
        assert!(!view.error_message.is_empty());
    }

    #[test]
    fn test_arrow_keys_and_enter_pick_letter() {
        let mut view = View::new();
        view.handle_key(press(KeyCode::Down));
        view.handle_key(press(KeyCode::Right));
        assert_eq!(view.selected_letter(), 'l');
        assert_eq!(
            view.handle_key(press(KeyCode::Enter)),
            Some(UserAction::Guess('l'))
        );
        view.handle_key(press(KeyCode::Down));
        view.handle_key(press(KeyCode::Down));
        assert_eq!(view.selected_letter(), 'z');
        view.cursor = 0;
        view.handle_key(press(KeyCode::Left));
        assert_eq!(view.selected_letter(), 'z');
    }

    #[test]
    fn test_escape_and_ctrl_n() {
        let mut view = View::new();
        assert_eq!(view.handle_key(press(KeyCode::Esc)), Some(UserAction::Exit));
        assert_eq!(
            view.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            Some(UserAction::NewGame)
        );
        assert_eq!(
            view.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn test_round_end_moves_focus_to_new_game() {
        let mut state = game("go");
        state.submit_guess('g');
        state.submit_guess('o');
        let mut view = View::new();
        view.update(&state, &Status::Won);
        assert_eq!(
            view.state,
            TuiState::RoundOver {
                focus: Focus::Keyboard
            }
        );
        view.focus_new_game();
        assert_eq!(
            view.handle_key(press(KeyCode::Enter)),
            Some(UserAction::NewGame)
        );
        view.handle_key(press(KeyCode::Tab));
        assert_eq!(view.handle_key(press(KeyCode::Enter)), None);
        assert_eq!(
            view.handle_key(press(KeyCode::Char('n'))),
            Some(UserAction::NewGame)
        );
    }

    #[test]
    fn test_new_round_returns_to_playing() {
        let mut state = game("go");
        state.submit_guess('g');
        state.submit_guess('o');
        let mut view = View::new();
        view.update(&state, &Status::Won);
        view.focus_new_game();
        state.start_round();
        view.update(&state, &Status::Idle);
        assert_eq!(view.state, TuiState::Playing);
        assert_eq!(view.message, "New round started");
    }

    #[test]
    fn test_new_round_message_cleared_by_first_guess() {
        let mut state = game("go");
        state.submit_guess('g');
        state.submit_guess('o');
        let mut view = View::new();
        view.update(&state, &Status::Won);
        view.focus_new_game();
        state.start_round();
        view.update(&state, &Status::Idle);
        state.submit_guess('g');
        view.update(&state, &Status::Idle);
        assert!(view.message.is_empty());
        assert!(!screen(&view).contains("New round started"));
    }

    #[test]
    fn test_render_shows_roster_and_status() {
        let mut state = game("react");
        state.submit_guess('x');
        let status = Status::derive(&state, &mut Plain);
        let mut view = View::new();
        view.update(&state, &status);
        let text = screen(&view);
        assert!(text.contains("ASSEMBLY: ENDGAME"));
        assert!(text.contains("Farewell, HTML"));
        assert!(text.contains("You have 7 attempts left"));
        assert!(text.contains("Assembly"));
        assert!(!text.contains("> New Game <"));
    }

    #[test]
    fn test_render_round_over_shows_button() {
        let mut state = game("go");
        state.submit_guess('g');
        state.submit_guess('o');
        let status = Status::derive(&state, &mut Plain);
        let mut view = View::new();
        view.update(&state, &status);
        view.focus_new_game();
        let text = screen(&view);
        assert!(text.contains("You win!"));
        assert!(text.contains("> New Game <"));
    }
}
