use std::{fs, path::Path};
use tag_cloud_gen::generate_tag_cloud;

/// A single `<span>` entry parsed back out of a rendered tag cloud.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderedSpan {
    pub word: String,
    pub count: usize,
    pub font_class: String,
}

// Helper function to extract the text between two markers on a line
fn extract_between<'a>(line: &'a str, start: &str, end: &str) -> &'a str {
    let from = line.find(start).expect("Span line is missing start marker") + start.len();
    let to = line[from..]
        .find(end)
        .expect("Span line is missing end marker")
        + from;
    &line[from..to]
}

/// Parse the `<span>` lines of a rendered document back into structured
/// entries, in document order.
pub fn parse_rendered_spans(html: &str) -> Vec<RenderedSpan> {
    html.lines()
        .filter(|line| line.trim_start().starts_with("<span"))
        .map(|line| {
            let font_class = extract_between(line, "class=\"", "\"").to_string();
            let count = extract_between(line, "title=\"count: ", "\"")
                .parse()
                .expect("Span count is not a number");
            let word = extract_between(line, "\">", "</span>").to_string();

            RenderedSpan {
                word,
                count,
                font_class,
            }
        })
        .collect()
}

// Helper function to get the expected spans from the annotation lines
pub fn get_expected_spans(content: &str) -> Vec<RenderedSpan> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix("EXPECTED:").map(|rest| {
                let mut fields = rest.split_whitespace();
                let word = fields.next().expect("EXPECTED line is missing a word");
                let count = fields
                    .next()
                    .expect("EXPECTED line is missing a count")
                    .parse()
                    .expect("EXPECTED count is not a number");
                let font_class = fields
                    .next()
                    .expect("EXPECTED line is missing a font class");

                RenderedSpan {
                    word: word.to_string(),
                    count,
                    font_class: font_class.to_string(),
                }
            })
        })
        .collect()
}

// Helper function to get the requested cloud size from the TOP_WORDS: line
pub fn get_top_word_count(content: &str) -> usize {
    content
        .lines()
        .find_map(|line| line.trim().strip_prefix("TOP_WORDS:"))
        .expect("Test file is missing a TOP_WORDS line")
        .trim()
        .parse()
        .expect("TOP_WORDS value is not a number")
}

/// Strip the annotation lines so only the document under test remains.
pub fn filter_annotation_lines(content: &str) -> String {
    content
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("COMMENT:")
                && !line.trim_start().starts_with("TOP_WORDS:")
                && !line.trim_start().starts_with("EXPECTED:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

// Helper function to run the test for each file in the directory
pub fn run_tag_cloud_test_for_file(test_file_path: &str) {
    let content = fs::read_to_string(Path::new(test_file_path)).expect("Failed to read test file");

    let filtered_text = filter_annotation_lines(&content);
    let top_word_count = get_top_word_count(&content);
    let expected_spans = get_expected_spans(&content);

    // Log the file being processed
    eprintln!("Testing file: {}", test_file_path);

    let html = generate_tag_cloud(&filtered_text, test_file_path, top_word_count)
        .expect("Failed to generate tag cloud");
    let rendered_spans = parse_rendered_spans(&html);

    assert_eq!(
        rendered_spans, expected_spans,
        "{} - Expected spans {:?}, but got: {:?}",
        test_file_path, expected_spans, rendered_spans
    );
}
