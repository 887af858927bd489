use crate::models::tokenizer::{is_separator, next_word_or_separator};
use crate::types::{WordCount, WordFrequencyMap, WordRef};
use crate::Error;
use log::info;
use std::io::BufRead;

/// Frequency table of normalized words. The tally is the table's only
/// mutator: every key is a non-empty, lower-cased word containing no
/// separator characters, and every count is at least 1.
pub struct WordTally {
    counts: WordFrequencyMap,
}

impl WordTally {
    /// Creates a new, empty tally.
    pub fn new() -> Self {
        WordTally {
            counts: WordFrequencyMap::new(),
        }
    }

    /// Lower-cases `word` and increments its count, inserting it with a
    /// count of 1 if it has not been tallied before.
    pub fn tally_word(&mut self, word: &WordRef) {
        let word = word.to_lowercase();
        *self.counts.entry(word).or_insert(0) += 1;
    }

    /// Tokenizes `line` and tallies every word token, discarding separator
    /// runs. The whole line is lower-cased before tokenization so that
    /// differently cased occurrences merge into one key.
    pub fn tally_line(&mut self, line: &str) {
        let line = line.to_lowercase();
        let mut position = 0;

        while position < line.len() {
            let token = next_word_or_separator(&line, position);
            position += token.len();

            if !token.starts_with(is_separator) {
                self.tally_word(token);
            }
        }
    }

    /// Replaces the current contents of the tally with the word counts of
    /// every line produced by `reader`.
    pub fn populate_from_reader<R: BufRead>(&mut self, reader: R) -> Result<(), Error> {
        info!("Tallying word frequencies...");

        self.counts.clear();

        for line in reader.lines() {
            let line = line?;
            self.tally_line(&line);
        }

        Ok(())
    }

    /// Gets the count tallied so far for `word`, or `None` if the word has
    /// not been seen.
    pub fn get_count(&self, word: &WordRef) -> Option<WordCount> {
        self.counts.get(word).copied()
    }

    /// Gets the total number of distinct words tallied.
    pub fn distinct_word_count(&self) -> usize {
        self.counts.len()
    }

    /// Gets the total number of word occurrences tallied across all lines.
    pub fn total_occurrences(&self) -> WordCount {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &WordFrequencyMap {
        &self.counts
    }

    /// Consumes the tally, handing the underlying frequency map to the
    /// caller.
    pub fn into_counts(self) -> WordFrequencyMap {
        self.counts
    }
}
