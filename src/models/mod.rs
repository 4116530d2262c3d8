mod answers;
mod instrument;

pub use answers::{AnswerSheet, InvalidAnswer};
pub use instrument::{DOMAIN_COUNT, Domain, Instrument, NUM_ITEMS, NUM_OPTIONS};
