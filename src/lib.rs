mod config;
pub use config::DEFAULT_TAG_CLOUD_CONFIG;
mod constants;
pub mod models;
pub use models::{
    is_separator, next_word_or_separator, Error, FontScaler, TagCloudConfig, TagCloudRenderer,
    TagCloudSelection, WordTally,
};
pub mod types;
pub use types::{FontSize, FontSizeClass, RankedEntry, Word, WordCount, WordFrequencyMap, WordRef};
mod utils;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Renders the `top_word_count` most frequent words of `text` as an HTML
/// tag cloud document, titled after `source_name`.
pub fn generate_tag_cloud(
    text: &str,
    source_name: &str,
    top_word_count: usize,
) -> Result<String, Error> {
    let html = generate_tag_cloud_with_custom_config(
        DEFAULT_TAG_CLOUD_CONFIG,
        text,
        source_name,
        top_word_count,
    )?;

    Ok(html)
}

/// Same as [`generate_tag_cloud`], with a caller-supplied font range.
pub fn generate_tag_cloud_with_custom_config(
    config: &TagCloudConfig,
    text: &str,
    source_name: &str,
    top_word_count: usize,
) -> Result<String, Error> {
    let mut tally = WordTally::new();
    tally.populate_from_reader(text.as_bytes())?;

    let selection = TagCloudSelection::select_top_words(tally, top_word_count)?;

    let renderer = TagCloudRenderer::new(config);
    let mut html = Vec::new();
    renderer.write_document(&mut html, source_name, top_word_count, &selection)?;

    String::from_utf8(html).map_err(|err| Error::Other(err.to_string()))
}
