//! Advisory text shown before lookups, keyed by language code.

const GREEK: &[&str] = &[
    "Greek text must be input in Greek characters.  Accents are mandatory; inflected forms are not supported. Search will work correctly even if the characters do not display correctly.",
    "Greek characters can be input by keyboard character mapping, on-screen-keyboard, or copy/paste -- see goo.gl/LhUuXC for help on Windows.",
];

const GERMAN: &[&str] = &[
    "German text must be input in German characters with modern spelling and correct capitalization.  Augmented and inflected forms are generally supported.  Search will work correctly even if the characters do not display correctly.",
    "German characters can be input by keyboard character mapping, on-screen-keyboard, or copy/paste -- see goo.gl/LhUuXC for help on Windows.",
];

const LATIN: &[&str] = &["Latin supports almost all inflected forms.  Do not use macrons."];

/// The note lines for a language, empty for languages without one.
pub fn note_lines(language_code: &str) -> &'static [&'static str] {
    match language_code {
        "grc" => GREEK,
        "de" => GERMAN,
        "la" => LATIN,
        _ => &[],
    }
}
