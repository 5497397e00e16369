//! Operator-facing boundary collaborators.
//!
//! The pipeline talks to the human operator through two narrow traits: one
//! for reading text input and one for presenting an image. Both are
//! interchangeable so a non-interactive harness can script a whole session.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use image::DynamicImage;

use crate::error::ClassprepError;

/// Text input from the operator.
pub trait OperatorInput {
    /// Print `prompt` and block until one line of input is available.
    ///
    /// The returned line carries no trailing newline. Implementations must
    /// return an error (rather than an empty success) when no further input
    /// can ever arrive, so re-prompt loops cannot spin forever.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

/// Image presentation to the operator.
///
/// `show` blocks until the operator has dismissed the image; the dismissal
/// mechanics belong to the implementation, not to the pipeline.
pub trait ImageDisplay {
    fn show(&mut self, image: &DynamicImage, caption: &str) -> Result<(), ClassprepError>;
}

/// Line-buffered stdin input.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl OperatorInput for ConsoleInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed while awaiting operator input",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Scripted input for non-interactive runs and tests.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl OperatorInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<String> {
        self.lines.pop_front().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted input exhausted while awaiting operator input",
            )
        })
    }
}

/// Terminal display: prints the caption and image dimensions, then waits for
/// the operator to dismiss the image with Enter.
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl ImageDisplay for ConsoleDisplay {
    fn show(&mut self, image: &DynamicImage, caption: &str) -> Result<(), ClassprepError> {
        println!();
        println!("{caption} ({}x{})", image.width(), image.height());
        print!("Press Enter once you have viewed the image... ");
        io::stdout().flush().map_err(ClassprepError::Io)?;

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(ClassprepError::Io)?;
        Ok(())
    }
}

/// Display that renders nothing. Used by scripted sessions.
#[derive(Debug, Default)]
pub struct NullDisplay;

impl ImageDisplay for NullDisplay {
    fn show(&mut self, _image: &DynamicImage, _caption: &str) -> Result<(), ClassprepError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_replays_lines_in_order() {
        let mut input = ScriptedInput::new(["2", "cat", "dog"]);
        assert_eq!(input.read_line("n: ").unwrap(), "2");
        assert_eq!(input.read_line("name: ").unwrap(), "cat");
        assert_eq!(input.read_line("name: ").unwrap(), "dog");
    }

    #[test]
    fn scripted_input_errors_when_exhausted() {
        let mut input = ScriptedInput::new(Vec::<String>::new());
        let err = input.read_line("x: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
