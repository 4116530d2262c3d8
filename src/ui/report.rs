//! Score report against published RAADS-14 reference samples.
//!
//! Reference figures are medians and observed ranges from Eriksson,
//! Andersen & Bejerot (2013), https://doi.org/10.1186/2040-2392-4-49.

use std::io::{self, Write};
use std::ops::RangeInclusive;

use crate::models::Instrument;
use crate::scoring::Scores;

use Group::{Adhd, Asd, NonPsychiatric, OtherPsychiatric};
use Sex::{Both, Female, Male};

pub const LINE: &str =
    "================================================================================";
pub const LINE2: &str =
    "--------------------------------------------------------------------------------";

/// Column where reference values start, reached with 8-wide tab stops.
const VALUE_COLUMN: usize = 32;
const TAB_WIDTH: usize = 8;

/// Qualitative note printed above the scores. Ranges overlap, so a total
/// may match several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Autism,
    Adhd,
    OtherPsychiatric,
    NonPsychiatric,
    FurtherInvestigation,
}

impl Banner {
    pub const ALL: [Banner; 5] = [
        Banner::Autism,
        Banner::Adhd,
        Banner::OtherPsychiatric,
        Banner::NonPsychiatric,
        Banner::FurtherInvestigation,
    ];

    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            Banner::Autism => 24..=38,
            Banner::Adhd => 9..=22,
            Banner::OtherPsychiatric => 6..=17,
            Banner::NonPsychiatric => 0..=6,
            Banner::FurtherInvestigation => 14..=u32::MAX,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Banner::Autism => {
                "Within close range of those with an autism spectrum disorder diagnosis. (Median: 32)"
            }
            Banner::Adhd => {
                "Within close range of those with an attention deficit hyperactivity disorder diagnosis. (Median: 15)"
            }
            Banner::OtherPsychiatric => {
                "Within close range of those with a different psychiatric disorder diagnosis. (Median: 12)"
            }
            Banner::NonPsychiatric => {
                "Within close range of those without any psychiatric disorder diagnosis. (Median: 3)"
            }
            Banner::FurtherInvestigation => {
                "Further investigation of autism spectrum disorder is recommended."
            }
        }
    }
}

/// Every banner whose range contains `total`, in display order.
pub fn banners(total: u32) -> Vec<Banner> {
    Banner::ALL
        .into_iter()
        .filter(|banner| banner.range().contains(&total))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Asd,
    Adhd,
    OtherPsychiatric,
    NonPsychiatric,
}

impl Group {
    fn label(self) -> &'static str {
        match self {
            Group::Asd => "ASD",
            Group::Adhd => "ADHD",
            Group::OtherPsychiatric => "Other psychiatric",
            Group::NonPsychiatric => "Non-psychiatric",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Both,
    Male,
    Female,
}

/// Published median and range for one reference sample.
#[derive(Debug, Clone, Copy)]
pub struct Reference {
    pub group: Group,
    pub sex: Sex,
    /// Kept as text so fractional medians print as published.
    pub median: &'static str,
    pub min: u8,
    pub max: u8,
}

impl Reference {
    pub fn label(&self) -> String {
        let sex = match self.sex {
            Sex::Both => "",
            Sex::Male => " male",
            Sex::Female => " female",
        };
        format!("{}{}:", self.group.label(), sex)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReferenceTable {
    pub title: &'static str,
    pub rows: &'static [Reference],
}

const fn reference(group: Group, sex: Sex, median: &'static str, min: u8, max: u8) -> Reference {
    Reference {
        group,
        sex,
        median,
        min,
        max,
    }
}

pub const TOTAL: ReferenceTable = ReferenceTable {
    title: "Total",
    rows: &[
        reference(Asd, Both, "32", 8, 42),
        reference(Asd, Male, "30", 0, 42),
        reference(Asd, Female, "34", 9, 42),
        reference(Adhd, Both, "15", 0, 42),
        reference(Adhd, Male, "15", 0, 36),
        reference(Adhd, Female, "15", 0, 42),
        reference(OtherPsychiatric, Both, "11", 0, 39),
        reference(OtherPsychiatric, Male, "11.5", 0, 33),
        reference(OtherPsychiatric, Female, "12", 0, 39),
        reference(NonPsychiatric, Both, "3", 0, 29),
        reference(NonPsychiatric, Male, "3", 0, 19),
        reference(NonPsychiatric, Female, "2.5", 0, 29),
    ],
};

pub const MENTALIZING_DEFICITS: ReferenceTable = ReferenceTable {
    title: "Mentalizing deficits",
    rows: &[
        reference(Asd, Male, "15", 0, 21),
        reference(Asd, Female, "18", 3, 21),
        reference(Adhd, Male, "7", 0, 21),
        reference(Adhd, Female, "8", 0, 21),
        reference(OtherPsychiatric, Male, "4", 0, 21),
        reference(OtherPsychiatric, Female, "5", 0, 21),
        reference(NonPsychiatric, Male, "1", 0, 13),
        reference(NonPsychiatric, Female, "0", 0, 19),
    ],
};

pub const SOCIAL_ANXIETY: ReferenceTable = ReferenceTable {
    title: "Social anxiety",
    rows: &[
        reference(Asd, Male, "9.7", 0, 12),
        reference(Asd, Female, "9", 0, 12),
        reference(Adhd, Male, "3", 0, 12),
        reference(Adhd, Female, "3", 0, 12),
        reference(OtherPsychiatric, Male, "4", 0, 11),
        reference(OtherPsychiatric, Female, "2", 0, 12),
        reference(NonPsychiatric, Male, "1", 0, 8),
        reference(NonPsychiatric, Female, "0", 0, 10),
    ],
};

pub const SENSORY_REACTIVITY: ReferenceTable = ReferenceTable {
    title: "Sensory reactivity",
    rows: &[
        reference(Asd, Male, "6", 0, 9),
        reference(Asd, Female, "8", 3, 9),
        reference(Adhd, Male, "3", 0, 9),
        reference(Adhd, Female, "3", 0, 9),
        reference(OtherPsychiatric, Male, "2", 0, 9),
        reference(OtherPsychiatric, Female, "3", 0, 9),
        reference(NonPsychiatric, Male, "0", 0, 6),
        reference(NonPsychiatric, Female, "0", 0, 9),
    ],
};

/// Tables in display order, each paired with the score it compares.
pub fn tables(scores: &Scores) -> [(ReferenceTable, u32); 4] {
    [
        (TOTAL, scores.total),
        (MENTALIZING_DEFICITS, scores.mentalizing_deficits()),
        (SOCIAL_ANXIETY, scores.social_anxiety()),
        (SENSORY_REACTIVITY, scores.sensory_reactivity()),
    ]
}

/// Banners followed by the total and domain sub-scores.
pub fn render_summary<W: Write>(
    out: &mut W,
    instrument: &Instrument,
    scores: &Scores,
) -> io::Result<()> {
    writeln!(out, "{}", LINE)?;
    for banner in banners(scores.total) {
        writeln!(out, "{}", banner.message())?;
    }
    writeln!(out, "{}", LINE)?;

    writeln!(out, "Total: {}", scores.total)?;
    writeln!(out)?;
    for (domain, value) in instrument.domains.iter().zip(scores.domains) {
        writeln!(out, "{}: {}", domain.name, value)?;
    }
    writeln!(out, "{}", LINE2)
}

pub fn render_table<W: Write>(out: &mut W, table: &ReferenceTable, value: u32) -> io::Result<()> {
    writeln!(out, "{}", LINE)?;
    writeln!(out, "{}", table.title)?;
    writeln!(out, "{}", LINE)?;
    writeln!(out, "{}{}\n", aligned("You:"), value)?;
    for row in table.rows {
        writeln!(
            out,
            "{}{}\t({}-{})",
            aligned(&row.label()),
            row.median,
            row.min,
            row.max
        )?;
    }
    writeln!(out, "{}", LINE2)
}

/// Label padded with tabs up to the value column.
fn aligned(label: &str) -> String {
    let tabs = VALUE_COLUMN.saturating_sub(label.len()).div_ceil(TAB_WIDTH).max(1);
    format!("{}{}", label, "\t".repeat(tabs))
}
