/// Characters that delimit words. Any maximal run of characters drawn from
/// this set is a separator token; everything else is part of a word.
pub const SEPARATORS: &str = " \t\n\r,-.!?[]';:/()";

/// Marker character prepended to a font size to form a styling class token
/// (e.g. `f48`).
pub const FONT_CLASS_PREFIX: char = 'f';

/// Stylesheet links emitted in the document head. Fixed URLs; the generator
/// never computes or inlines styles.
pub const REMOTE_STYLESHEET_HREF: &str =
    "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css";
pub const LOCAL_STYLESHEET_HREF: &str = "doc/tagcloud.css";
