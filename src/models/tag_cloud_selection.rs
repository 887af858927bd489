use crate::types::{RankedEntry, WordCount};
use crate::utils::{compare_by_count_desc, compare_by_word};
use crate::{Error, WordTally};
use log::info;

/// The words chosen for the cloud, held in their final (alphabetical)
/// render order, together with the highest and lowest counts among them.
pub struct TagCloudSelection {
    entries: Vec<RankedEntry>,
    largest: WordCount,
    smallest: WordCount,
}

impl TagCloudSelection {
    /// Selects the `top_word_count` most frequent words from `tally`,
    /// consuming it.
    ///
    /// The tally is drained into a count-descending ordering first, and the
    /// leading `top_word_count` entries are taken from it; `largest` and
    /// `smallest` are recorded from the first and last of those entries
    /// while that ordering still exists. The selected entries are then
    /// re-sorted alphabetically to produce the render order. Ties between
    /// equal counts resolve to the alphabetically earlier word.
    ///
    /// Requesting more words than the tally holds is an error, and nothing
    /// is selected.
    pub fn select_top_words(tally: WordTally, top_word_count: usize) -> Result<Self, Error> {
        let distinct_word_count = tally.distinct_word_count();

        if top_word_count > distinct_word_count {
            return Err(Error::InvalidWordCount(format!(
                "requested {} words but only {} distinct words were tallied",
                top_word_count, distinct_word_count
            )));
        }

        info!("Ranking {} distinct words...", distinct_word_count);

        // First ordering: every tallied entry, highest count first.
        let mut by_count: Vec<RankedEntry> = tally.into_counts().into_iter().collect();
        by_count.sort_by(compare_by_count_desc);
        by_count.truncate(top_word_count);

        // Captured before the alphabetical re-sort discards the count order.
        let largest = by_count.first().map_or(0, |(_, count)| *count);
        let smallest = by_count.last().map_or(0, |(_, count)| *count);

        // Second ordering: the selected entries, alphabetical for display.
        let mut entries = by_count;
        entries.sort_by(compare_by_word);

        Ok(TagCloudSelection {
            entries,
            largest,
            smallest,
        })
    }

    /// The selected entries in render (alphabetical) order.
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// The count of the most frequent selected word, or 0 for an empty
    /// selection.
    pub fn largest(&self) -> WordCount {
        self.largest
    }

    /// The count of the least frequent selected word, or 0 for an empty
    /// selection.
    pub fn smallest(&self) -> WordCount {
        self.smallest
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
