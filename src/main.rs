pub mod config;
pub mod round;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod word_list;
pub mod word_queue;

use crate::{
    config::{Config, ConfigStore, FileConfigStore},
    round::RoundState,
    runtime::{CrosstermEventSource, GameEvent, GameEventSource},
    session::Session,
    word_list::WordPack,
    word_queue::{QueueConfig, WordQueue},
};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
};

/// cozy hangman tui with a word queue and a running score
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A cozy hangman TUI: reveal each word one letter at a time before the gallows drawing completes, working through a word queue while the win/loss score accumulates."
)]
pub struct Cli {
    /// words to play, in the given order (comma separated); overrides the word pack
    #[clap(short = 'w', long, value_delimiter = ',')]
    words: Vec<String>,

    /// file with one word per line; overrides the word pack
    #[clap(short = 'f', long)]
    word_file: Option<PathBuf>,

    /// built-in word pack to play through
    #[clap(short = 'p', long, value_enum)]
    word_pack: Option<WordPack>,

    /// wrong guesses allowed per word
    #[clap(short = 'm', long)]
    misses: Option<usize>,

    /// number of rounds to play (defaults to the whole list)
    #[clap(short = 'r', long)]
    rounds: Option<usize>,

    /// skip loading and saving preferences
    #[clap(long)]
    no_config: bool,
}

/// Effective settings after merging CLI flags over saved preferences.
#[derive(Debug, Clone)]
pub struct Settings {
    pub word_pack: WordPack,
    pub incorrect_moves_allowed: usize,
    pub rounds: Option<usize>,
}

impl Settings {
    fn resolve(cli: &Cli, saved: &Config) -> Self {
        let word_pack = cli.word_pack.unwrap_or_else(|| {
            WordPack::from_str(&saved.word_pack, true).unwrap_or(WordPack::Fruits)
        });

        Self {
            word_pack,
            incorrect_moves_allowed: cli.misses.unwrap_or(saved.incorrect_moves_allowed),
            rounds: cli.rounds.or(saved.rounds),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Guessing,
    RoundOver { won: bool },
    SessionOver,
}

#[derive(Debug)]
pub struct App {
    pub cli: Option<Cli>,
    pub settings: Settings,
    /// The resolved queue, kept so a replay can reuse the same words.
    pub words: Vec<String>,
    pub session: Session,
    pub state: AppState,
}

impl App {
    pub fn new(cli: Cli, settings: Settings) -> Result<Self, Box<dyn Error>> {
        let queue = WordQueue::new(QueueConfig {
            words: cli.words.clone(),
            word_file: cli.word_file.clone(),
            pack: settings.word_pack,
            rounds: settings.rounds,
        });
        let words = queue.build()?;
        let session = Session::new(words.clone(), settings.incorrect_moves_allowed)?;

        Ok(Self {
            state: state_for(&session),
            cli: Some(cli),
            settings,
            words,
            session,
        })
    }

    /// Start over with the same word queue and a zeroed score.
    pub fn reset(&mut self) -> Result<(), Box<dyn Error>> {
        self.session = Session::new(self.words.clone(), self.settings.incorrect_moves_allowed)?;
        self.state = state_for(&self.session);
        Ok(())
    }
}

fn state_for(session: &Session) -> AppState {
    if session.is_over() {
        AppState::SessionOver
    } else {
        AppState::Guessing
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let saved = if cli.no_config {
        Config::default()
    } else {
        store.load()
    };
    let settings = Settings::resolve(&cli, &saved);

    // Build the app before touching the terminal so word list / word errors
    // print as plain messages instead of garbling the alternate screen.
    let no_config = cli.no_config;
    let mut app = App::new(cli, settings)?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = CrosstermEventSource::new();
    let res = start_tui(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if !no_config {
        let _ = store.save(&Config::from(&app.settings));
    }

    res
}

fn start_tui<B: Backend, E: GameEventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &E,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui(app, f))?;

        let key = match events.next()? {
            GameEvent::Resize => continue,
            GameEvent::Key(key) => key,
        };

        if key.code == KeyCode::Esc
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        {
            break;
        }

        match app.state {
            AppState::Guessing => {
                if let KeyCode::Char(c) = key.code {
                    // the engine takes any char; non-letters are filtered here
                    if c.is_alphabetic() {
                        app.session.guess(c);
                        if let Some(round) = app.session.active_round() {
                            match round.state() {
                                RoundState::Won => app.state = AppState::RoundOver { won: true },
                                RoundState::Lost => app.state = AppState::RoundOver { won: false },
                                RoundState::InProgress => {}
                            }
                        }
                    }
                }
            }
            AppState::RoundOver { won } => {
                // recording only happens on acknowledgment, so the outcome
                // stays on screen until the player moves on
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    app.session.record_outcome(won)?;
                    app.state = state_for(&app.session);
                }
            }
            AppState::SessionOver => {
                if key.code == KeyCode::Char('r') {
                    app.reset()?;
                }
            }
        }
    }

    Ok(())
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
