//! Reverse coding and score totals.

use crate::ScreenerError;
use crate::models::{AnswerSheet, DOMAIN_COUNT, Instrument, NUM_ITEMS};

/// Highest option value; reverse coding maps `v` to `MAX_VALUE - v`.
const MAX_VALUE: u8 = 3;

/// Answers with the reverse-coded item already inverted.
///
/// Built by consuming an [`AnswerSheet`], so the inversion happens once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredAnswers {
    values: [u8; NUM_ITEMS],
}

impl ScoredAnswers {
    pub fn from_sheet(sheet: AnswerSheet, instrument: &Instrument) -> Result<Self, ScreenerError> {
        let mut values = sheet.values().ok_or(ScreenerError::Incomplete {
            answered: sheet.answered_count(),
        })?;
        let item = instrument.reverse_coded;
        values[item] = MAX_VALUE - values[item];
        tracing::debug!(item, value = values[item], "applied reverse coding");
        Ok(Self { values })
    }

    pub fn values(&self) -> &[u8; NUM_ITEMS] {
        &self.values
    }

    pub fn scores(&self, instrument: &Instrument) -> Scores {
        let total = self.values.iter().map(|&v| u32::from(v)).sum();

        let mut domains = [0; DOMAIN_COUNT];
        for (sum, domain) in domains.iter_mut().zip(instrument.domains.iter()) {
            *sum = domain
                .items
                .iter()
                .map(|&item| u32::from(self.values[item]))
                .sum();
        }

        Scores { total, domains }
    }
}

/// Total score and per-domain sub-scores, in instrument domain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub total: u32,
    pub domains: [u32; DOMAIN_COUNT],
}

impl Scores {
    pub fn mentalizing_deficits(&self) -> u32 {
        self.domains[0]
    }

    pub fn social_anxiety(&self) -> u32 {
        self.domains[1]
    }

    pub fn sensory_reactivity(&self) -> u32 {
        self.domains[2]
    }
}
