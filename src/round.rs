use std::collections::HashSet;
use std::error::Error;
use std::fmt;

/// Placeholder shown for letters that have not been guessed yet.
pub const PLACEHOLDER: char = '_';

/// Errors raised when building a round from configured words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// A round must always have something to guess.
    EmptyWord,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordError::EmptyWord => write!(f, "a round cannot be played with an empty word"),
        }
    }
}

impl Error for WordError {}

/// Lifecycle of a single round as observed by the presentation layer.
///
/// `Won` and `Lost` are sinks: the driver is expected to display the outcome
/// and record it on the session before feeding any further guesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

/// One play-through of guessing a single hidden word under a budget of
/// incorrect moves.
///
/// The word is fixed at construction and stored lowercase; guesses are
/// case-normalized before comparison. All display state (the reveal pattern,
/// win/loss) is derived on demand from `word` + `guessed_letters`, never
/// cached.
#[derive(Clone, Debug, PartialEq)]
pub struct Round {
    word: String,
    guessed_letters: HashSet<char>,
    incorrect_moves_allowed: usize,
    incorrect_moves_remaining: usize,
}

impl Round {
    pub fn new(word: &str, incorrect_moves_allowed: usize) -> Result<Self, WordError> {
        if word.is_empty() {
            return Err(WordError::EmptyWord);
        }

        Ok(Self {
            word: word.to_lowercase(),
            guessed_letters: HashSet::new(),
            incorrect_moves_allowed,
            incorrect_moves_remaining: incorrect_moves_allowed,
        })
    }

    /// The hidden word, exposed read-only for the "correct word was ..."
    /// message.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The budget this round started with; fixed at construction.
    pub fn incorrect_moves_allowed(&self) -> usize {
        self.incorrect_moves_allowed
    }

    pub fn incorrect_moves_remaining(&self) -> usize {
        self.incorrect_moves_remaining
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&normalize(letter))
    }

    /// Submit one letter. Duplicate guesses are harmless no-ops; a fresh
    /// guess that does not occur in the word burns one incorrect move,
    /// clamped at zero.
    pub fn guess(&mut self, letter: char) {
        let letter = normalize(letter);

        if !self.guessed_letters.insert(letter) {
            return;
        }

        if !self.word.contains(letter) {
            self.incorrect_moves_remaining = self.incorrect_moves_remaining.saturating_sub(1);
        }
    }

    /// The word with unguessed positions masked, e.g. `_pp_e` after guessing
    /// 'p' and 'e' against "apple". Recomputed on every call.
    pub fn formatted_word(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if self.guessed_letters.contains(&c) {
                    c
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    pub fn is_won(&self) -> bool {
        self.formatted_word() == self.word
    }

    /// Win is checked first: a guess that completes the word and exhausts the
    /// budget at the same time counts as a win.
    pub fn is_lost(&self) -> bool {
        self.incorrect_moves_remaining == 0 && !self.is_won()
    }

    pub fn state(&self) -> RoundState {
        if self.is_won() {
            RoundState::Won
        } else if self.is_lost() {
            RoundState::Lost
        } else {
            RoundState::InProgress
        }
    }
}

fn normalize(letter: char) -> char {
    letter.to_lowercase().next().unwrap_or(letter)
}
