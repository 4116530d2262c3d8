use serde::Deserialize;

/// Number of items on the instrument.
pub const NUM_ITEMS: usize = 14;

/// Number of answer options shared by every item.
pub const NUM_OPTIONS: usize = 4;

/// Number of scored domains.
pub const DOMAIN_COUNT: usize = 3;

/// A named group of items summed into a sub-score.
#[derive(Debug, Clone, Deserialize)]
pub struct Domain {
    pub(crate) name: String,
    pub(crate) items: Vec<usize>,
}

impl Domain {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[usize] {
        &self.items
    }
}

/// A fixed screening instrument: items, shared answer options and domains.
///
/// Option position doubles as the score contributed by picking it.
/// Obtained from [`load_instrument`](crate::load_instrument), which checks
/// the counts and indices the scorer relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct Instrument {
    pub(crate) name: String,
    pub(crate) questions: Vec<String>,
    pub(crate) options: Vec<String>,
    pub(crate) domains: Vec<Domain>,
    /// Item whose answer is inverted before scoring.
    pub(crate) reverse_coded: usize,
}

impl Instrument {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    pub fn reverse_coded(&self) -> usize {
        self.reverse_coded
    }

    pub fn question(&self, index: usize) -> &str {
        &self.questions[index]
    }

    pub fn option(&self, value: u8) -> &str {
        &self.options[value as usize]
    }

    pub fn max_option(&self) -> u8 {
        self.options.len().saturating_sub(1) as u8
    }

    /// Domain containing `item`, if any.
    pub fn domain_of(&self, item: usize) -> Option<&Domain> {
        self.domains.iter().find(|d| d.items.contains(&item))
    }

    /// Items not assigned to any domain.
    pub fn uncovered_items(&self) -> Vec<usize> {
        (0..self.questions.len())
            .filter(|item| self.domain_of(*item).is_none())
            .collect()
    }
}
