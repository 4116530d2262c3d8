use std::borrow::Cow;
use std::io::{self, Write};

use crate::models::{AnswerSheet, Instrument};

const UNANSWERED: &str = "Unanswered";

/// Render every item as a sentence built from its current answer, followed
/// by the confirmation menu.
pub fn render<W: Write>(
    out: &mut W,
    instrument: &Instrument,
    sheet: &AnswerSheet,
) -> io::Result<()> {
    for (index, question) in instrument.questions.iter().enumerate() {
        let option = sheet.get(index).map_or(UNANSWERED, |v| instrument.option(v));
        writeln!(
            out,
            "{}. It is [{}] that {}",
            index + 1,
            lowercase_first(option),
            lowercase_first(question)
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Is this correct?")?;
    writeln!(out)?;
    writeln!(out, "y: Yes, this is correct.")?;
    writeln!(out, "n: No, I need to change an answer.")?;
    writeln!(out)
}

pub fn render_edit_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    write!(out, "What is the number of the question you'd like to change? ")
}

/// Lowercase the first letter so the text reads mid-sentence, leaving the
/// pronoun "I" alone.
pub fn lowercase_first(text: &str) -> Cow<'_, str> {
    if text.starts_with("I ") {
        return Cow::Borrowed(text);
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if !first.is_lowercase() => {
            Cow::Owned(first.to_lowercase().chain(chars).collect())
        }
        _ => Cow::Borrowed(text),
    }
}
