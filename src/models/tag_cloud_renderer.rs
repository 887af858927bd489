use crate::constants::{LOCAL_STYLESHEET_HREF, REMOTE_STYLESHEET_HREF};
use crate::models::{FontScaler, TagCloudConfig, TagCloudSelection};
use crate::Error;
use log::info;
use std::io::Write;

/// Writes a selection out as an HTML document, one line per call to the
/// sink, with each word's font class derived from its count.
pub struct TagCloudRenderer {
    font_scaler: FontScaler,
}

impl TagCloudRenderer {
    pub fn new(config: &TagCloudConfig) -> Self {
        TagCloudRenderer {
            font_scaler: FontScaler::new(config),
        }
    }

    /// Writes the complete document: header, one span per selected word in
    /// render order, footer.
    pub fn write_document<W: Write>(
        &self,
        out: &mut W,
        source_name: &str,
        top_word_count: usize,
        selection: &TagCloudSelection,
    ) -> Result<(), Error> {
        info!("Rendering {} words...", selection.len());

        self.write_header(out, source_name, top_word_count)?;
        self.write_spans(out, selection)?;
        self.write_footer(out)?;

        Ok(())
    }

    /// Writes the page chrome that precedes the word spans: the title, the
    /// two fixed stylesheet links, and the opening of the cloud container.
    pub fn write_header<W: Write>(
        &self,
        out: &mut W,
        source_name: &str,
        top_word_count: usize,
    ) -> Result<(), Error> {
        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(
            out,
            "<title>Top {} words in {}</title>",
            top_word_count, source_name
        )?;
        writeln!(
            out,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            REMOTE_STYLESHEET_HREF
        )?;
        writeln!(
            out,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            LOCAL_STYLESHEET_HREF
        )?;
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(
            out,
            "<h2>Top {} words in {}</h2>",
            top_word_count, source_name
        )?;
        writeln!(out, "<hr>")?;
        writeln!(out, "<div class=\"cdiv\">")?;
        writeln!(out, "<p class=\"cbox\">")?;

        Ok(())
    }

    /// Writes one span per selected word, in render order. The word text is
    /// emitted verbatim.
    pub fn write_spans<W: Write>(
        &self,
        out: &mut W,
        selection: &TagCloudSelection,
    ) -> Result<(), Error> {
        for (word, count) in selection.entries() {
            let font_class =
                self.font_scaler
                    .font_size_class(selection.largest(), selection.smallest(), *count);

            writeln!(
                out,
                "<span style=\"cursor:default\" class=\"{}\" title=\"count: {}\">{}</span>",
                font_class, count, word
            )?;
        }

        Ok(())
    }

    /// Closes the container opened by the header and the document itself.
    pub fn write_footer<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        writeln!(out, "</p>")?;
        writeln!(out, "</div>")?;
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;

        Ok(())
    }
}
