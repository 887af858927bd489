pub mod error;
pub use error::Error;

pub mod font_scaler;
pub use font_scaler::{FontScaler, TagCloudConfig};

pub mod tag_cloud_renderer;
pub use tag_cloud_renderer::TagCloudRenderer;

pub mod tag_cloud_selection;
pub use tag_cloud_selection::TagCloudSelection;

pub mod tokenizer;
pub use tokenizer::{is_separator, next_word_or_separator};

pub mod word_tally;
pub use word_tally::WordTally;
