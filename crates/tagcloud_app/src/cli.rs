use std::path::PathBuf;

use clap::Parser;
use cloud_logging::LogSettings;

/// Generate an HTML tag cloud of the most frequent words in a text file.
///
/// Any of INPUT, OUTPUT or --words left out is asked for on the console.
#[derive(Parser, Debug)]
#[command(name = "tagcloud", version, about)]
pub struct Args {
    /// Text file to read words from.
    pub input: Option<PathBuf>,

    /// HTML file to write the tag cloud to.
    pub output: Option<PathBuf>,

    /// Number of words to include.
    #[arg(short = 'n', long)]
    pub words: Option<usize>,

    /// Also write a JSON summary of the run to this path.
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,

    /// Log debug details to the terminal.
    #[arg(short, long)]
    pub verbose: bool,

    /// Copy log output to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn log_settings(&self) -> LogSettings {
        let mut settings = if self.verbose {
            LogSettings::verbose()
        } else {
            LogSettings::default()
        };
        settings.file = self.log_file.clone();
        settings
    }
}
