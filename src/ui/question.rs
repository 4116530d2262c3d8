use std::io::{self, Write};

use crate::models::Instrument;

/// Render one item with its numbered answer options.
pub fn render<W: Write>(out: &mut W, instrument: &Instrument, index: usize) -> io::Result<()> {
    write!(
        out,
        "[ {}/{} ] \n\n{}\n\n",
        index + 1,
        instrument.questions.len(),
        instrument.question(index)
    )?;
    for (code, option) in instrument.options.iter().enumerate() {
        writeln!(out, "{}: {}", code, option)?;
    }
    writeln!(out)
}
