use crate::constants::FONT_CLASS_PREFIX;
use crate::types::{FontSize, FontSizeClass, WordCount};

pub struct TagCloudConfig {
    pub max_font_size: FontSize,
    pub min_font_size: FontSize,
}

/// Maps a word's count onto the configured font range, given the highest
/// and lowest counts among the selected words.
pub struct FontScaler {
    max_font_size: FontSize,
    min_font_size: FontSize,
}

impl FontScaler {
    pub fn new(config: &TagCloudConfig) -> Self {
        FontScaler {
            max_font_size: config.max_font_size,
            min_font_size: config.min_font_size,
        }
    }

    /// Interpolates `count` linearly between `smallest` and `largest`,
    /// truncating to an integer font size. `smallest <= count <= largest`
    /// must hold. When every selected word has the same count
    /// (`largest == smallest`), the maximum size is returned so that the
    /// interpolation never divides by zero.
    pub fn font_size(&self, largest: WordCount, smallest: WordCount, count: WordCount) -> FontSize {
        if largest == smallest {
            return self.max_font_size;
        }

        let span = self.max_font_size - self.min_font_size;

        (span * (count - smallest)) / (largest - smallest) + self.min_font_size
    }

    /// Formats the interpolated size as a styling class token (e.g. `f48`).
    pub fn font_size_class(
        &self,
        largest: WordCount,
        smallest: WordCount,
        count: WordCount,
    ) -> FontSizeClass {
        format!(
            "{}{}",
            FONT_CLASS_PREFIX,
            self.font_size(largest, smallest, count)
        )
    }
}
