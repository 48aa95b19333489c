use crate::word_list::{normalize_words, WordList, WordPack};
use std::error::Error;
use std::path::PathBuf;

/// Configuration for assembling the session's word queue
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Explicit words given on the command line; wins over every other source.
    pub words: Vec<String>,
    pub word_file: Option<PathBuf>,
    pub pack: WordPack,
    /// Cap on queue length; `None` plays the whole list.
    pub rounds: Option<usize>,
}

/// Resolves the configured word sources into the ordered queue the session
/// plays through.
pub struct WordQueue {
    config: QueueConfig,
}

impl WordQueue {
    pub fn new(config: QueueConfig) -> Self {
        Self { config }
    }

    pub fn build(&self) -> Result<Vec<String>, Box<dyn Error>> {
        let raw = if !self.config.words.is_empty() {
            self.config.words.clone()
        } else if let Some(path) = &self.config.word_file {
            WordList::from_file(path)?.words
        } else {
            WordList::builtin(self.config.pack).words
        };

        let mut words = normalize_words(raw);
        if let Some(rounds) = self.config.rounds {
            words.truncate(rounds);
        }

        if words.is_empty() {
            return Err("no playable words left after normalization".into());
        }

        Ok(words)
    }
}
