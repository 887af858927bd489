use tag_cloud_gen::WordTally;

/// Utility to build a populated tally from an in-memory document.
pub fn tally_of(text: &str) -> WordTally {
    let mut tally = WordTally::new();
    tally
        .populate_from_reader(text.as_bytes())
        .expect("Failed to tally text");

    tally
}
