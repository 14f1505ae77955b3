//! TUI application state and logic

use super::board::LetterBoard;
use crate::engine::{PuzzleConfig, RulesEngine, rng_from_seed};
use crate::output::formatters::{Feedback, MessageStyle, hint_feedback, submit_feedback};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a feedback message stays on screen
pub const MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Input poll interval, so expired messages disappear without a key press
const TICK: Duration = Duration::from_millis(250);

/// Maximum number of messages kept
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub engine: RulesEngine<'a, StdRng>,
    pub board: LetterBoard,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    shuffle_rng: StdRng,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    pub created: Instant,
}

impl<'a> App<'a> {
    /// Create the app; `seed` makes hints and shuffles reproducible
    #[must_use]
    pub fn new(config: &'a PuzzleConfig, seed: Option<u64>) -> Self {
        let mut shuffle_rng = rng_from_seed(seed);
        let engine = RulesEngine::new(config, rng_from_seed(Some(shuffle_rng.random())));

        let mut app = Self {
            engine,
            board: LetterBoard::new(config),
            messages: Vec::new(),
            should_quit: false,
            shuffle_rng,
        };
        app.add_message(
            &format!(
                "Welcome! Make words of {}+ letters using the center letter {}.",
                config.min_word_length(),
                config.center_letter()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('u') if ctrl => self.engine.clear_word(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace | KeyCode::Delete => self.engine.delete_last_letter(),
            KeyCode::Char(' ') => self.shuffle(),
            KeyCode::Char('?') => self.hint(),
            KeyCode::Char(c) if !ctrl && self.engine.config().has_letter(c) => {
                self.engine.append_letter(c);
            }
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        let outcome = self.engine.submit_word();
        let feedback = submit_feedback(&outcome, self.engine.config());
        self.push_feedback(feedback);
    }

    pub fn hint(&mut self) {
        let outcome = self.engine.hint();
        self.push_feedback(hint_feedback(&outcome));
    }

    pub fn shuffle(&mut self) {
        self.board.shuffle(&mut self.shuffle_rng);
        self.add_message("Letters shuffled", MessageStyle::Success);
    }

    pub fn new_game(&mut self) {
        info!("Starting a new game");
        self.engine.new_game();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    fn push_feedback(&mut self, feedback: Feedback) {
        self.add_message(&feedback.text, feedback.style);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
            created: Instant::now(),
        });

        // Keep only last 5 messages
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Drop messages older than [`MESSAGE_TTL`]
    pub fn expire_messages(&mut self, now: Instant) {
        self.messages
            .retain(|m| now.saturating_duration_since(m.created) < MESSAGE_TTL);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.expire_messages(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        "Quit with score {}/{} ({})",
        app.engine.score(),
        app.engine.max_score(),
        app.engine.rank()
    );
    Ok(())
}
