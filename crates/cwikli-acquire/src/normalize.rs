use unicode_normalization::UnicodeNormalization;

/// Normalize a typed word to NFC and strip surrounding whitespace.
///
/// Page titles are stored precomposed, so a Greek or German word typed with
/// combining accents would otherwise never match (e.g., "λο\u{301}γος").
pub fn normalize_word(input: &str) -> String {
    input.trim().nfc().collect()
}
