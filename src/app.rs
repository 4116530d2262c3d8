use std::io::{BufRead, Write};

use crate::ScreenerError;
use crate::data;
use crate::models::{AnswerSheet, Instrument};
use crate::prompt::Prompter;
use crate::scoring::{ScoredAnswers, Scores};
use crate::terminal::Display;
use crate::ui;

/// One questionnaire session: the instrument, the answers given so far and
/// the terminal it runs on.
pub struct Session<R, W, D> {
    instrument: Instrument,
    answers: AnswerSheet,
    prompter: Prompter<R, W>,
    display: D,
}

impl<R: BufRead, W: Write, D: Display> Session<R, W, D> {
    pub fn new(
        instrument: Instrument,
        input: R,
        output: W,
        display: D,
    ) -> Result<Self, ScreenerError> {
        data::validate(&instrument)?;
        Ok(Self {
            instrument,
            answers: AnswerSheet::new(),
            prompter: Prompter::new(input, output),
            display,
        })
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run the whole questionnaire and return the reported scores.
    pub fn run(mut self) -> Result<Scores, ScreenerError> {
        self.ask_all()?;
        self.review()?;
        while !self.check()? {
            self.review()?;
        }
        let scores = self.score()?;
        self.report(&scores)?;
        Ok(scores)
    }

    pub fn ask_all(&mut self) -> Result<(), ScreenerError> {
        for index in 0..self.instrument.questions.len() {
            self.ask(index)?;
        }
        Ok(())
    }

    /// Ask one item until a valid option number is entered.
    pub fn ask(&mut self, index: usize) -> Result<(), ScreenerError> {
        let max = self.instrument.max_option();
        loop {
            self.clear()?;
            ui::question::render(self.prompter.output(), &self.instrument, index)?;
            if let Some(value) = self.prompter.read_number(0..=max)? {
                self.answers.record(index, value)?;
                tracing::debug!(item = index + 1, value, "answer recorded");
                return Ok(());
            }
        }
    }

    /// Show all answers as sentences until the user confirms them, letting
    /// them re-answer a single item on each pass.
    pub fn review(&mut self) -> Result<(), ScreenerError> {
        let count = self.instrument.questions.len() as u8;
        loop {
            self.clear()?;
            ui::review::render(self.prompter.output(), &self.instrument, &self.answers)?;
            match self.prompter.read_token()?.as_str() {
                "y" => return Ok(()),
                "n" => {
                    ui::review::render_edit_prompt(self.prompter.output())?;
                    if let Some(number) = self.prompter.read_number(1..=count)? {
                        self.ask(usize::from(number) - 1)?;
                    }
                }
                _ => {}
            }
        }
    }

    /// Consistency check: identical answers to every item are treated as
    /// careless responding. On failure, waits for acknowledgment.
    pub fn check(&mut self) -> Result<bool, ScreenerError> {
        if !self.answers.is_uniform() {
            return Ok(true);
        }
        tracing::info!("all answers identical, asking for review");
        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out, "Check your answers and try again")?;
        self.prompter.pause()?;
        Ok(false)
    }

    /// Reverse-code and total the answers. Consumes the answer sheet.
    pub fn score(&mut self) -> Result<Scores, ScreenerError> {
        let sheet = std::mem::take(&mut self.answers);
        let scored = ScoredAnswers::from_sheet(sheet, &self.instrument)?;
        let scores = scored.scores(&self.instrument);
        tracing::debug!(
            total = scores.total,
            mentalizing = scores.mentalizing_deficits(),
            social_anxiety = scores.social_anxiety(),
            sensory = scores.sensory_reactivity(),
            "scores computed"
        );
        Ok(scores)
    }

    pub fn report(&mut self, scores: &Scores) -> Result<(), ScreenerError> {
        self.clear()?;
        ui::report::render_summary(self.prompter.output(), &self.instrument, scores)?;

        for (table, value) in ui::report::tables(scores) {
            self.prompter.pause()?;
            writeln!(self.prompter.output())?;
            ui::report::render_table(self.prompter.output(), &table, value)?;
        }
        self.prompter.output().flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ScreenerError> {
        self.prompter.output().flush()?;
        self.display.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io::Cursor;
    use std::rc::Rc;

    use super::*;
    use crate::data::load_instrument;
    use crate::models::NUM_ITEMS;
    use crate::terminal::NoClear;

    type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>, NoClear>;

    fn session(input: &str) -> TestSession {
        Session::new(
            load_instrument().unwrap(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            NoClear,
        )
        .unwrap()
    }

    /// Display that counts how often the screen was cleared.
    #[derive(Clone, Default)]
    struct CountingDisplay {
        clears: Rc<Cell<usize>>,
    }

    impl Display for CountingDisplay {
        fn clear(&mut self) {
            self.clears.set(self.clears.get() + 1);
        }
    }

    fn count_clears(input: &str) -> usize {
        let display = CountingDisplay::default();
        let session = Session::new(
            load_instrument().unwrap(),
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            display.clone(),
        )
        .unwrap();
        session.run().unwrap();
        display.clears.get()
    }

    fn mixed_answers() -> String {
        (0..NUM_ITEMS).map(|i| format!("{}\n", i % 4)).collect()
    }

    fn answered(values: [u8; NUM_ITEMS], input: &str) -> TestSession {
        let mut s = session(input);
        s.answers = AnswerSheet::from_values(values).unwrap();
        s
    }

    fn output(s: TestSession) -> String {
        String::from_utf8(s.into_output()).unwrap()
    }

    #[test]
    fn test_ask_retries_until_valid() {
        let mut s = session("x\n7\n\n-1\n2\n");
        s.ask(3).unwrap();
        assert_eq!(s.answers().get(3), Some(2));
        let text = output(s);
        assert_eq!(text.matches("[ 4/14 ]").count(), 5);
    }

    #[test]
    fn test_ask_all_in_order() {
        let input: String = (0..NUM_ITEMS).map(|i| format!("{}\n", i % 4)).collect();
        let mut s = session(&input);
        s.ask_all().unwrap();
        assert_eq!(
            s.answers().values(),
            Some([0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3, 0, 1])
        );
    }

    #[test]
    fn test_ask_fails_when_input_ends() {
        let mut s = session("9\n");
        assert!(matches!(s.ask(0), Err(ScreenerError::InputClosed)));
        assert_eq!(s.answers().get(0), None);
    }

    #[test]
    fn test_review_confirm() {
        let mut s = answered([1; NUM_ITEMS], "y\n");
        s.review().unwrap();
        assert_eq!(s.answers().values(), Some([1; NUM_ITEMS]));
    }

    #[test]
    fn test_review_edits_one_answer() {
        let mut s = answered([1; NUM_ITEMS], "n\n3\n0\ny\n");
        s.review().unwrap();
        assert_eq!(s.answers().get(2), Some(0));
        assert_eq!(s.answers().answered_count(), NUM_ITEMS);
        let text = output(s);
        assert!(text.contains("What is the number of the question you'd like to change? "));
        assert!(text.contains("3. It is [never true] that it is very difficult"));
        assert_eq!(text.matches("Is this correct?").count(), 2);
    }

    #[test]
    fn test_review_ignores_bad_edit_number_and_token() {
        let mut s = answered([2; NUM_ITEMS], "n\n15\nmaybe\nn\nzero\ny\n");
        s.review().unwrap();
        assert_eq!(s.answers().values(), Some([2; NUM_ITEMS]));
        let text = output(s);
        assert_eq!(text.matches("Is this correct?").count(), 4);
        assert!(!text.contains("[ "));
    }

    #[test]
    fn test_check_passes_mixed_answers() {
        let mut values = [3; NUM_ITEMS];
        values[7] = 1;
        let mut s = answered(values, "");
        assert!(s.check().unwrap());
        assert!(!output(s).contains("Check your answers"));
    }

    #[test]
    fn test_check_fails_uniform_answers() {
        let mut s = answered([3; NUM_ITEMS], "\n");
        assert!(!s.check().unwrap());
        assert_eq!(output(s), "\nCheck your answers and try again\n");
    }

    #[test]
    fn test_uniform_then_edit_passes() {
        let mut s = answered([3; NUM_ITEMS], "\nn\n1\n0\ny\n");
        assert!(!s.check().unwrap());
        s.review().unwrap();
        assert!(s.check().unwrap());
    }

    #[test]
    fn test_score_reverse_codes_once() {
        let mut values = [0; NUM_ITEMS];
        values[5] = 3;
        let mut s = answered(values, "");
        let scores = s.score().unwrap();
        assert_eq!(scores.total, 0);
        assert_eq!(s.answers().answered_count(), 0);
        assert!(matches!(s.score(), Err(ScreenerError::Incomplete { answered: 0 })));
    }

    #[test]
    fn test_clears_before_each_screen() {
        // 14 questions, one review, one report.
        let input = format!("{}y\n", mixed_answers());
        assert_eq!(count_clears(&input), 16);
    }

    #[test]
    fn test_edit_clears_question_and_review() {
        // Each edit shows the question again and then re-renders the review.
        let input = format!("{}n\n2\n3\ny\n", mixed_answers());
        assert_eq!(count_clears(&input), 18);

        let input = format!("{}n\n2\n3\nn\n9\n0\ny\n", mixed_answers());
        assert_eq!(count_clears(&input), 20);
    }

    #[test]
    fn test_ask_clears_on_every_retry() {
        let display = CountingDisplay::default();
        let mut s = Session::new(
            load_instrument().unwrap(),
            Cursor::new(b"x\n5\n1\n".to_vec()),
            Vec::new(),
            display.clone(),
        )
        .unwrap();
        s.ask(0).unwrap();
        assert_eq!(display.clears.get(), 3);
    }

    #[test]
    fn test_new_rejects_invalid_instrument() {
        let mut instrument = load_instrument().unwrap();
        instrument.reverse_coded = NUM_ITEMS;
        let result = Session::new(instrument, Cursor::new(Vec::new()), Vec::new(), NoClear);
        assert!(matches!(result, Err(ScreenerError::Load(_))));
    }

    #[test]
    fn test_report_pauses_between_tables() {
        let mut values = [3; NUM_ITEMS];
        values[5] = 0;
        let mut s = answered(values, "");
        let scores = s.score().unwrap();
        s.report(&scores).unwrap();
        let text = output(s);
        assert!(text.contains("Further investigation of autism spectrum disorder is recommended."));
        assert!(!text.contains("Within close range"));
        assert!(text.contains("Total: 42\n"));
        let last_row = "Non-psychiatric female:\t\t0\t(0-9)\n";
        assert!(text.ends_with(&format!("{}{}\n", last_row, ui::report::LINE2)));
    }
}
