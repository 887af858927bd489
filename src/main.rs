use clap::Parser;
use log::{error, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use tag_cloud_gen::{
    Error, TagCloudRenderer, TagCloudSelection, WordTally, DEFAULT_TAG_CLOUD_CONFIG,
};

/// Render the most frequent words of a text file as an HTML tag cloud.
#[derive(Parser, Debug)]
#[command(name = "tag-cloud-gen")]
struct Args {
    /// Path of the plain-text input file
    input: PathBuf,

    /// Path of the HTML file to write
    output: PathBuf,

    /// Number of words to include in the tag cloud
    top_words: usize,
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    // Acquire both files up front; nothing is written until the selection
    // has been validated.
    let input_file = File::open(&args.input).map_err(|err| {
        Error::Other(format!(
            "Failed to open input file '{}': {}",
            args.input.display(),
            err
        ))
    })?;
    let output_file = File::create(&args.output).map_err(|err| {
        Error::Other(format!(
            "Failed to create output file '{}': {}",
            args.output.display(),
            err
        ))
    })?;

    let mut tally = WordTally::new();
    tally.populate_from_reader(BufReader::new(input_file))?;

    let selection = TagCloudSelection::select_top_words(tally, args.top_words)?;

    let source_name = args.input.display().to_string();
    let renderer = TagCloudRenderer::new(DEFAULT_TAG_CLOUD_CONFIG);

    let mut writer = BufWriter::new(output_file);
    renderer.write_document(&mut writer, &source_name, args.top_words, &selection)?;
    writer.flush()?;

    info!(
        "Wrote a {}-word tag cloud for '{}' to '{}'",
        selection.len(),
        source_name,
        args.output.display()
    );

    Ok(())
}
