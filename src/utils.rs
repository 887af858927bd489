pub mod compare_ranked_entries;

pub use compare_ranked_entries::{compare_by_count_desc, compare_by_word};
