use thiserror::Error;

use super::instrument::{NUM_ITEMS, NUM_OPTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidAnswer {
    #[error("item {0} does not exist")]
    Item(usize),

    #[error("answer {0} is not a valid option")]
    Value(u8),
}

/// Answers given during one session.
///
/// `None` marks an item that has not been answered yet, so an untouched
/// entry never reads as "Never true".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: [Option<u8>; NUM_ITEMS],
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fully answered sheet.
    pub fn from_values(values: [u8; NUM_ITEMS]) -> Result<Self, InvalidAnswer> {
        let mut sheet = Self::new();
        for (index, value) in values.into_iter().enumerate() {
            sheet.record(index, value)?;
        }
        Ok(sheet)
    }

    pub fn record(&mut self, index: usize, value: u8) -> Result<(), InvalidAnswer> {
        if value as usize >= NUM_OPTIONS {
            return Err(InvalidAnswer::Value(value));
        }
        let slot = self.answers.get_mut(index).ok_or(InvalidAnswer::Item(index))?;
        *slot = Some(value);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.answers.get(index).copied().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == NUM_ITEMS
    }

    /// Answer values, available only once every item is answered.
    pub fn values(&self) -> Option<[u8; NUM_ITEMS]> {
        let mut values = [0; NUM_ITEMS];
        for (slot, answer) in values.iter_mut().zip(self.answers.iter()) {
            *slot = (*answer)?;
        }
        Some(values)
    }

    /// True when every answer equals its predecessor.
    pub fn is_uniform(&self) -> bool {
        !self.answers.windows(2).any(|pair| pair[0] != pair[1])
    }
}
