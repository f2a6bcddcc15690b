//! The typed message.

/// First phrase.
pub const PHRASE_ONE: &str = "Don't trust.";

/// Second phrase.
pub const PHRASE_TWO: &str = "Verify...";

/// Both phrases with their separator. Revealed text is always a prefix of this.
pub const FULL_TEXT: &str = "Don't trust. Verify...";

const _: () = assert!(PHRASE_ONE.len() + 1 + PHRASE_TWO.len() == FULL_TEXT.len());

/// Characters in the first phrase.
pub fn phrase_one_len() -> usize {
    PHRASE_ONE.chars().count()
}

/// Characters in the second phrase.
pub fn phrase_two_len() -> usize {
    PHRASE_TWO.chars().count()
}

/// Prefix of [`FULL_TEXT`] holding the first `chars` characters.
pub(crate) fn prefix(chars: usize) -> &'static str {
    match FULL_TEXT.char_indices().nth(chars) {
        Some((end, _)) => &FULL_TEXT[..end],
        None => FULL_TEXT,
    }
}

/// Text shown after `typed` characters of the first phrase.
pub(crate) fn phrase_one_prefix(typed: usize) -> &'static str {
    prefix(typed.min(phrase_one_len()))
}

/// Text shown after `typed` characters of the second phrase.
///
/// The separator appears together with the first character.
pub(crate) fn phrase_two_prefix(typed: usize) -> &'static str {
    if typed == 0 {
        PHRASE_ONE
    } else {
        prefix(phrase_one_len() + 1 + typed.min(phrase_two_len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_text_joins_phrases() {
        assert_eq!(FULL_TEXT, format!("{PHRASE_ONE} {PHRASE_TWO}"));
        assert_eq!(phrase_one_len(), 12);
        assert_eq!(phrase_two_len(), 9);
    }

    #[test]
    fn phrase_prefixes() {
        assert_eq!(phrase_one_prefix(0), "");
        assert_eq!(phrase_one_prefix(5), "Don't");
        assert_eq!(phrase_one_prefix(100), PHRASE_ONE);

        assert_eq!(phrase_two_prefix(0), PHRASE_ONE);
        assert_eq!(phrase_two_prefix(1), "Don't trust. V");
        assert_eq!(phrase_two_prefix(9), FULL_TEXT);
        assert_eq!(phrase_two_prefix(50), FULL_TEXT);
    }
}
