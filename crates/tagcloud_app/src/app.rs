use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use cloud_logging::cloud_info;
use tagcloud_core::CloudConfig;
use tagcloud_engine::{generate_tag_cloud, CloudRequest, CloudSummary, HtmlRenderer};

use crate::cli::Args;
use crate::prompt::Prompter;

pub fn run(args: Args) -> Result<()> {
    let request = {
        let mut prompter = Prompter::console();
        resolve_request(args, &mut prompter)?
    };

    let summary = generate_tag_cloud(&request, &CloudConfig::default(), &HtmlRenderer)
        .context("tag cloud generation failed")?;
    report(&summary);
    Ok(())
}

/// Fills in every parameter the command line left out by asking on the console,
/// in the order input file, output file, word count.
pub fn resolve_request<R: BufRead, W: Write>(
    args: Args,
    prompter: &mut Prompter<R, W>,
) -> Result<CloudRequest> {
    let input = match args.input {
        Some(path) => path,
        None => prompter.ask_path("Enter name of input file: ")?,
    };
    let output = match args.output {
        Some(path) => path,
        None => prompter.ask_path("Enter name of output file: ")?,
    };
    let words = match args.words {
        Some(n) => n,
        None => prompter.ask_word_count("Enter a positive number of words to include: ")?,
    };
    Ok(CloudRequest {
        input,
        output,
        words,
        summary: args.summary,
    })
}

fn report(summary: &CloudSummary) {
    if let Some(interruption) = &summary.interruption {
        eprintln!(
            "Warning: input could not be read past line {}: {}",
            interruption.after_line, interruption.message
        );
    }
    cloud_info!(
        "{} lines, {} words, {} distinct, {} in cloud",
        summary.lines,
        summary.words,
        summary.distinct_words,
        summary.selected
    );
    println!(
        "Wrote {} of {} distinct words to {}",
        summary.selected,
        summary.distinct_words,
        summary.output_path.display()
    );
}
