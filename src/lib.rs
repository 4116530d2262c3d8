//! # raads14
//!
//! Terminal questionnaire for the RAADS-14 Screen, a 14-item self-report
//! screening instrument for autism spectrum disorder.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use raads14::{Screener, ScreenerError};
//!
//! fn main() -> Result<(), ScreenerError> {
//!     // Load the built-in instrument
//!     let screener = Screener::raads14()?;
//!
//!     // Ask, review, check and report on stdin/stdout
//!     let scores = screener.run()?;
//!     println!("total: {}", scores.total);
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
pub mod prompt;
mod scoring;
pub mod terminal;
pub mod ui;

use std::io::{self, BufRead, Write};

use thiserror::Error;

pub use app::Session;
pub use data::{LoadError, load_instrument, load_instrument_from_str};
pub use models::{
    AnswerSheet, DOMAIN_COUNT, Domain, Instrument, InvalidAnswer, NUM_ITEMS, NUM_OPTIONS,
};
pub use scoring::{ScoredAnswers, Scores};
pub use terminal::{Display, NoClear, TerminalDisplay};

/// Error type for screener operations.
#[derive(Debug, Error)]
pub enum ScreenerError {
    /// Error loading the instrument definition.
    #[error("failed to load instrument: {0}")]
    Load(#[from] LoadError),

    /// IO error while reading answers or writing screens.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input ended while an answer was still required.
    #[error("input closed before the questionnaire was finished")]
    InputClosed,

    /// Scoring was attempted before every item was answered.
    #[error("only {answered} of {} items answered", NUM_ITEMS)]
    Incomplete { answered: usize },

    /// An answer was recorded for a missing item or option.
    #[error(transparent)]
    Answer(#[from] InvalidAnswer),
}

/// A questionnaire that can be run in the terminal.
pub struct Screener {
    instrument: Instrument,
    clear_screen: bool,
}

impl Screener {
    /// Create a screener, rejecting instruments whose items, options or
    /// domains do not fit the scorer.
    pub fn new(instrument: Instrument) -> Result<Self, ScreenerError> {
        data::validate(&instrument)?;
        Ok(Self {
            instrument,
            clear_screen: true,
        })
    }

    /// Screener for the built-in RAADS-14 definition.
    pub fn raads14() -> Result<Self, ScreenerError> {
        Self::new(load_instrument()?)
    }

    /// Whether to clear the screen before each question and review.
    pub fn clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    /// Run the questionnaire on stdin and stdout.
    pub fn run(self) -> Result<Scores, ScreenerError> {
        let input = io::stdin().lock();
        let output = io::stdout();
        if self.clear_screen {
            self.run_with(input, output, TerminalDisplay::new())
        } else {
            self.run_with(input, output, NoClear)
        }
    }

    /// Run the questionnaire on any input, output and display.
    pub fn run_with<R, W, D>(
        self,
        input: R,
        output: W,
        display: D,
    ) -> Result<Scores, ScreenerError>
    where
        R: BufRead,
        W: Write,
        D: Display,
    {
        tracing::info!(instrument = %self.instrument.name, "starting session");
        Session::new(self.instrument, input, output, display)?.run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_reverse_coded_item() {
        let mut instrument = load_instrument().unwrap();
        instrument.reverse_coded = 20;
        assert!(matches!(
            Screener::new(instrument),
            Err(ScreenerError::Load(LoadError::ReverseCodedOutOfRange(20)))
        ));
    }

    #[test]
    fn test_new_rejects_missing_options() {
        let mut instrument = load_instrument().unwrap();
        instrument.options.clear();
        assert!(matches!(
            Screener::new(instrument),
            Err(ScreenerError::Load(LoadError::OptionCount { found: 0, .. }))
        ));
    }

    #[test]
    fn test_raads14_is_valid() {
        let screener = Screener::raads14().unwrap();
        assert_eq!(screener.instrument().name(), "RAADS-14 Screen");
        assert_eq!(screener.instrument().reverse_coded(), 5);
    }
}
