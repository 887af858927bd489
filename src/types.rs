use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a normalized (lower-cased) word as an owned `String`.
pub type Word = String;

/// Represents a borrowed view of a word as a `str`. This is used when ownership is not required.
pub type WordRef = str;

/// Represents the number of occurrences of a word within a text document.
pub type WordCount = usize;

/// Represents a map of normalized words to their occurrence counts within a
/// text document. The key is the `Word`, and the value is the `WordCount`.
pub type WordFrequencyMap = HashMap<Word, WordCount>;

/// A word paired with its occurrence count, as produced by draining the
/// frequency map. Immutable once created.
pub type RankedEntry = (Word, WordCount);

/// A font size in CSS points, used to scale a rendered word.
pub type FontSize = usize;

/// A font size rendered as a styling class token (e.g. `f48`).
pub type FontSizeClass = String;
