mod test_utils;

use tag_cloud_gen::{TagCloudRenderer, TagCloudSelection, DEFAULT_TAG_CLOUD_CONFIG};
use test_utils::tally_of;

// Helper function to render a selection of `text` into a string
fn render_document(text: &str, source_name: &str, top_word_count: usize) -> String {
    let selection = TagCloudSelection::select_top_words(tally_of(text), top_word_count)
        .expect("Failed to select words");

    let renderer = TagCloudRenderer::new(DEFAULT_TAG_CLOUD_CONFIG);
    let mut out = Vec::new();
    renderer
        .write_document(&mut out, source_name, top_word_count, &selection)
        .expect("Failed to render document");

    String::from_utf8(out).expect("Rendered document is not UTF-8")
}

#[cfg(test)]
mod tag_cloud_renderer_tests {
    use super::*;

    #[test]
    fn test_header_lines_are_exact() {
        let renderer = TagCloudRenderer::new(DEFAULT_TAG_CLOUD_CONFIG);

        let mut out = Vec::new();
        renderer
            .write_header(&mut out, "input.txt", 5)
            .expect("Failed to render header");
        let header = String::from_utf8(out).expect("Rendered header is not UTF-8");

        let expected = [
            "<html>",
            "<head>",
            "<title>Top 5 words in input.txt</title>",
            "<link href=\"http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css\" rel=\"stylesheet\" type=\"text/css\">",
            "<link href=\"doc/tagcloud.css\" rel=\"stylesheet\" type=\"text/css\">",
            "</head>",
            "<body>",
            "<h2>Top 5 words in input.txt</h2>",
            "<hr>",
            "<div class=\"cdiv\">",
            "<p class=\"cbox\">",
        ];

        assert_eq!(header.lines().collect::<Vec<&str>>(), expected);
    }

    #[test]
    fn test_footer_lines_are_exact() {
        let renderer = TagCloudRenderer::new(DEFAULT_TAG_CLOUD_CONFIG);

        let mut out = Vec::new();
        renderer.write_footer(&mut out).expect("Failed to render footer");
        let footer = String::from_utf8(out).expect("Rendered footer is not UTF-8");

        let expected = ["</p>", "</div>", "</body>", "</html>"];

        assert_eq!(footer.lines().collect::<Vec<&str>>(), expected);
    }

    #[test]
    fn test_span_format_is_exact() {
        let html = render_document("go go go", "go.txt", 1);

        assert!(
            html.contains("<span style=\"cursor:default\" class=\"f48\" title=\"count: 3\">go</span>"),
            "Expected span line is missing from:\n{}",
            html
        );
    }

    #[test]
    fn test_document_wraps_spans_between_header_and_footer() {
        let html = render_document("alpha beta beta", "ab.txt", 2);
        let lines: Vec<&str> = html.lines().collect();

        // 11 header lines, one span per word, 4 footer lines
        assert_eq!(lines.len(), 11 + 2 + 4);
        assert_eq!(lines[0], "<html>");
        assert_eq!(lines[10], "<p class=\"cbox\">");
        assert!(lines[11].starts_with("<span"));
        assert!(lines[12].starts_with("<span"));
        assert_eq!(lines[13], "</p>");
        assert_eq!(lines[16], "</html>");
    }

    #[test]
    fn test_rendering_an_empty_selection_emits_no_spans() {
        let html = render_document("some words", "empty.txt", 0);

        assert!(!html.contains("<span"));
        assert!(html.contains("<title>Top 0 words in empty.txt</title>"));
    }
}
