use thiserror::Error;

use crate::models::{DOMAIN_COUNT, Instrument, NUM_ITEMS, NUM_OPTIONS};

/// RAADS-14 definition compiled into the binary.
const RAADS14_JSON: &str = include_str!("raads14.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid instrument definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected {expected} questions, found {found}")]
    QuestionCount { expected: usize, found: usize },

    #[error("expected {expected} answer options, found {found}")]
    OptionCount { expected: usize, found: usize },

    #[error("expected {expected} domains, found {found}")]
    DomainCount { expected: usize, found: usize },

    #[error("question {0} has no text")]
    EmptyQuestion(usize),

    #[error("domain '{domain}' refers to missing item {item}")]
    ItemOutOfRange { domain: String, item: usize },

    #[error("item {item} belongs to both '{first}' and '{second}'")]
    DuplicateItem {
        item: usize,
        first: String,
        second: String,
    },

    #[error("reverse-coded item {0} does not exist")]
    ReverseCodedOutOfRange(usize),
}

pub fn load_instrument() -> Result<Instrument, LoadError> {
    load_instrument_from_str(RAADS14_JSON)
}

pub fn load_instrument_from_str(json: &str) -> Result<Instrument, LoadError> {
    let instrument: Instrument = serde_json::from_str(json)?;
    validate(&instrument)?;
    Ok(instrument)
}

/// Check the item, option and domain layout the scorer indexes into.
pub(crate) fn validate(instrument: &Instrument) -> Result<(), LoadError> {
    if instrument.questions.len() != NUM_ITEMS {
        return Err(LoadError::QuestionCount {
            expected: NUM_ITEMS,
            found: instrument.questions.len(),
        });
    }

    if instrument.options.len() != NUM_OPTIONS {
        return Err(LoadError::OptionCount {
            expected: NUM_OPTIONS,
            found: instrument.options.len(),
        });
    }

    if instrument.domains.len() != DOMAIN_COUNT {
        return Err(LoadError::DomainCount {
            expected: DOMAIN_COUNT,
            found: instrument.domains.len(),
        });
    }

    if let Some(index) = instrument.questions.iter().position(|q| q.trim().is_empty()) {
        return Err(LoadError::EmptyQuestion(index));
    }

    let mut owner: [Option<&str>; NUM_ITEMS] = [None; NUM_ITEMS];
    for domain in &instrument.domains {
        for &item in &domain.items {
            let slot = owner.get_mut(item).ok_or_else(|| LoadError::ItemOutOfRange {
                domain: domain.name.clone(),
                item,
            })?;
            if let Some(first) = *slot {
                return Err(LoadError::DuplicateItem {
                    item,
                    first: first.to_string(),
                    second: domain.name.clone(),
                });
            }
            *slot = Some(domain.name.as_str());
        }
    }

    if instrument.reverse_coded >= NUM_ITEMS {
        return Err(LoadError::ReverseCodedOutOfRange(instrument.reverse_coded));
    }

    Ok(())
}
