//! Line-oriented input for the questionnaire.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

use crate::ScreenerError;

/// Reads answers line by line and owns the output stream prompts go to.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Read a number within `range`.
    ///
    /// Returns `Ok(None)` when the line is not a number in range; the caller
    /// decides whether to ask again.
    pub fn read_number(
        &mut self,
        range: RangeInclusive<u8>,
    ) -> Result<Option<u8>, ScreenerError> {
        let line = self.read_line()?.ok_or(ScreenerError::InputClosed)?;
        Ok(line.trim().parse::<u8>().ok().filter(|n| range.contains(n)))
    }

    /// Read a single trimmed token such as `y` or `n`.
    pub fn read_token(&mut self) -> Result<String, ScreenerError> {
        let line = self.read_line()?.ok_or(ScreenerError::InputClosed)?;
        Ok(line.trim().to_string())
    }

    /// Wait for the user to press enter. End of input counts as acknowledged.
    pub fn pause(&mut self) -> Result<(), ScreenerError> {
        self.read_line()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, ScreenerError> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
