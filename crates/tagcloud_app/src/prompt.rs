use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use cloud_logging::cloud_debug;

/// Console question/answer loop over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `question` and returns the next line without its line ending.
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("cannot read from console")?;
        if read == 0 {
            bail!("console input ended while waiting for an answer");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn ask_path(&mut self, question: &str) -> Result<PathBuf> {
        loop {
            let answer = self.ask(question)?;
            let trimmed = answer.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
            writeln!(self.output, "Please enter a file name.")?;
        }
    }

    /// Asks until a non-negative integer is given.
    pub fn ask_word_count(&mut self, question: &str) -> Result<usize> {
        loop {
            let answer = self.ask(question)?;
            match answer.trim().parse::<usize>() {
                Ok(n) => return Ok(n),
                Err(err) => {
                    cloud_debug!("Rejected word count {:?}: {}", answer, err);
                    writeln!(
                        self.output,
                        "\"{}\" is not a non-negative whole number.",
                        answer.trim()
                    )?;
                }
            }
        }
    }
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn console() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
