use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use itertools::Itertools;
use serde::Deserialize;
use serde_json::from_str;
use std::error::Error;
use std::fs;
use std::path::Path;

static PACK_DIR: Dir = include_dir!("src/words");

/// Built-in word packs shipped inside the binary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum WordPack {
    Fruits,
    Animals,
    Islands,
}

impl WordPack {
    fn file_name(&self) -> String {
        format!("{}.json", self.to_string().to_lowercase())
    }
}

#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
pub struct WordList {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl WordList {
    /// Load one of the embedded packs. The packs are compiled in, so a
    /// missing or malformed one is a build defect, not a runtime condition.
    pub fn builtin(pack: WordPack) -> Self {
        let file = PACK_DIR
            .get_file(pack.file_name())
            .expect("word pack not found");

        let file_as_str = file
            .contents_utf8()
            .expect("unable to interpret word pack as a string");

        from_str(file_as_str).expect("unable to deserialize word pack json")
    }

    /// Load a user-supplied word file: one word per line, blank lines and
    /// `#` comments ignored.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let contents = fs::read_to_string(&path)?;
        let words: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        Ok(Self {
            name: path.as_ref().display().to_string(),
            size: words.len() as u32,
            words,
        })
    }
}

/// Lowercase, drop anything that is empty or not purely alphabetic, and
/// dedupe while keeping first-occurrence order. Queue order is play order.
pub fn normalize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty() && w.chars().all(char::is_alphabetic))
        .unique()
        .collect()
}
