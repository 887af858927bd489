use crate::constants::SEPARATORS;

/// Reports whether `ch` belongs to the fixed separator set.
pub fn is_separator(ch: char) -> bool {
    SEPARATORS.contains(ch)
}

/// Returns the maximal substring of `text` starting at `position` that is
/// made up entirely of separator characters or entirely of non-separator
/// characters, matching whichever class the character at `position` belongs
/// to.
///
/// `position` is a byte offset into `text`. Callers tokenize a full line by
/// calling this repeatedly, advancing `position` by the byte length of each
/// returned token until `text.len()` is reached; a line consisting entirely
/// of separators (or entirely of word characters) comes back as a single
/// token.
///
/// # Panics
///
/// Panics if `position` is outside `[0, text.len())` or does not fall on a
/// character boundary.
pub fn next_word_or_separator(text: &str, position: usize) -> &str {
    assert!(
        position < text.len(),
        "position {} is out of bounds for text of length {}",
        position,
        text.len()
    );
    assert!(
        text.is_char_boundary(position),
        "position {} is not a character boundary",
        position
    );

    let rest = &text[position..];
    let first_is_separator = rest.chars().next().map_or(false, is_separator);

    // The run ends at the first character whose class differs from the
    // character the run started with.
    let token_len = rest
        .char_indices()
        .find(|&(_, ch)| is_separator(ch) != first_is_separator)
        .map_or(rest.len(), |(idx, _)| idx);

    &rest[..token_len]
}
