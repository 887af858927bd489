use crate::models::TagCloudConfig;

pub const DEFAULT_TAG_CLOUD_CONFIG: &TagCloudConfig = &TagCloudConfig {
    max_font_size: 48,
    min_font_size: 11,
};
