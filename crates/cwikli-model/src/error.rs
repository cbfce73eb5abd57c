use thiserror::Error;

/// Everything that can go wrong during one lookup.
///
/// The `Display` text of each variant is the line shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("This Wiktionary page is broken.")]
    RedirectLoop,

    #[error("Wiktionary is responding too slowly.")]
    Timeout,

    #[error("Could not connect to en.wiktionary.org")]
    ConnectionFailure,

    #[error("This word is not on en.wiktionary.org -- try entering the uninflected or unaugmented form instead, and make sure that any non-Roman characters are entered correctly.")]
    NotFound,

    #[error("This Wiktionary page is malformed.")]
    MalformedDocument,

    #[error("This Wiktionary page does not look like we expected.")]
    UnexpectedStructure,

    #[error("en.wiktionary.org may not define this word in your target language, or you have entered an incorrect language code.")]
    LanguageNotFound,
}

impl LookupError {
    /// Fatal errors end the run; anything else only ends the current lookup.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LookupError::NotFound)
    }
}
