/// A single word lookup against the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub word: String,
    /// Language code as used in the page's `lang` attributes (e.g., "en", "la", "grc").
    pub language_code: String,
}

impl LookupRequest {
    pub fn new(word: impl Into<String>, language_code: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            language_code: language_code.into(),
        }
    }
}

/// One headword's sense group: its part-of-speech label and the flattened
/// text of the definition list that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub part_of_speech: String,
    pub definitions: String,
}

impl Entry {
    /// The two output lines for this entry, part of speech first.
    pub fn lines(&self) -> [&str; 2] {
        [&self.part_of_speech, &self.definitions]
    }
}

/// Settings fixed for the lifetime of one run of the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub language_code: Option<String>,
    /// Looked up first in interactive mode, then cleared.
    pub initial_word: Option<String>,
}

/// How a session should run, decided from what was supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Language and word both known: one lookup, then exit.
    OneShot(LookupRequest),
    /// Prompt for words until interrupted.
    Interactive {
        language_code: Option<String>,
        initial_word: Option<String>,
    },
}

impl Session {
    pub fn run_mode(&self) -> RunMode {
        match (&self.language_code, &self.initial_word) {
            (Some(lang), Some(word)) => RunMode::OneShot(LookupRequest::new(word, lang)),
            _ => RunMode::Interactive {
                language_code: self.language_code.clone(),
                initial_word: self.initial_word.clone(),
            },
        }
    }
}
