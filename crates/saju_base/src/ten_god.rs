//! Ten gods (십신): relational classification of a stem against the day stem.
//!
//! The table is keyed by the ordered pair (day stem, other stem). A table can
//! be loaded from JSON (`{"甲-乙": "겁재", ...}`) or built from the
//! traditional five-phase rules.

use std::path::Path;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::BaseError;
use crate::stem::{ALL_STEMS, Stem};

/// The 10 relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TenGod {
    Companion,
    RobWealth,
    EatingGod,
    HurtingOfficer,
    IndirectWealth,
    DirectWealth,
    SevenKillings,
    DirectOfficer,
    IndirectResource,
    DirectResource,
}

/// All 10 categories in traditional listing order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Companion,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

/// Category a stem holds against itself.
pub const SELF_ALIGNED: TenGod = TenGod::Companion;

impl TenGod {
    /// Korean name (비견, 겁재, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "비견",
            Self::RobWealth => "겁재",
            Self::EatingGod => "식신",
            Self::HurtingOfficer => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::SevenKillings => "편관",
            Self::DirectOfficer => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
        }
    }

    /// Hanja name (比肩, 劫財, ...).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Companion => "比肩",
            Self::RobWealth => "劫財",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::SevenKillings => "偏官",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    /// English identifier.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Companion => "Companion",
            Self::RobWealth => "RobWealth",
            Self::EatingGod => "EatingGod",
            Self::HurtingOfficer => "HurtingOfficer",
            Self::IndirectWealth => "IndirectWealth",
            Self::DirectWealth => "DirectWealth",
            Self::SevenKillings => "SevenKillings",
            Self::DirectOfficer => "DirectOfficer",
            Self::IndirectResource => "IndirectResource",
            Self::DirectResource => "DirectResource",
        }
    }

    /// Parse from any of the Korean, hanja or English names.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        ALL_TEN_GODS
            .into_iter()
            .find(|g| g.name() == s || g.hanja() == s || g.english_name().eq_ignore_ascii_case(s))
    }
}

impl Serialize for TenGod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Category of `other` relative to `day` under the five-phase rules.
///
/// Element distance `(other - day) mod 5` in generating order:
/// 0 same, 1 day produces, 2 day controls, 3 controls day, 4 produces day.
/// Matching polarity gives the first category of each pair.
pub fn traditional_ten_god(day: Stem, other: Stem) -> TenGod {
    let distance = (other.element().index() + 5 - day.element().index()) % 5;
    let same_polarity = day.is_yang() == other.is_yang();
    match (distance, same_polarity) {
        (0, true) => TenGod::Companion,
        (0, false) => TenGod::RobWealth,
        (1, true) => TenGod::EatingGod,
        (1, false) => TenGod::HurtingOfficer,
        (2, true) => TenGod::IndirectWealth,
        (2, false) => TenGod::DirectWealth,
        (3, true) => TenGod::SevenKillings,
        (3, false) => TenGod::DirectOfficer,
        (4, true) => TenGod::IndirectResource,
        _ => TenGod::DirectResource,
    }
}

/// Ten-gods lookup table keyed by (day stem, other stem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenGodTable {
    cells: [[Option<TenGod>; 10]; 10],
}

impl TenGodTable {
    /// An empty table (every lookup misses).
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 10]; 10],
        }
    }

    /// Complete table from the traditional five-phase rules.
    pub fn traditional() -> Self {
        let mut table = Self::empty();
        for day in ALL_STEMS {
            for other in ALL_STEMS {
                table.insert(day, other, traditional_ten_god(day, other));
            }
        }
        table
    }

    /// Set the category for an ordered pair.
    pub fn insert(&mut self, day: Stem, other: Stem, god: TenGod) {
        self.cells[day.index() as usize][other.index() as usize] = Some(god);
    }

    /// Category of `other` against `day`; `None` when the pair is absent.
    pub fn lookup(&self, day: Stem, other: Stem) -> Option<TenGod> {
        self.cells[day.index() as usize][other.index() as usize]
    }

    /// Number of populated pairs.
    pub fn len(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Whether no pair is populated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a JSON object of `"<day>-<other>": "<category>"` entries.
    pub fn parse_json(content: &str) -> Result<Self, BaseError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;
        let mut table = Self::empty();
        for (key, value) in &raw {
            let (day, other) = parse_pair_key(key)?;
            let name = value
                .as_str()
                .ok_or_else(|| BaseError::InvalidTable(format!("ten-god value for '{key}'")))?;
            let god = TenGod::from_name(name)
                .ok_or_else(|| BaseError::InvalidSymbol(format!("ten-god '{name}'")))?;
            table.insert(day, other, god);
        }
        debug!(pairs = table.len(), "parsed ten-god table");
        Ok(table)
    }

    /// Load a JSON table from disk.
    pub fn load(path: &Path) -> Result<Self, BaseError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_json(&content)
    }
}

impl Default for TenGodTable {
    fn default() -> Self {
        Self::traditional()
    }
}

fn parse_pair_key(key: &str) -> Result<(Stem, Stem), BaseError> {
    let (day, other) = key
        .split_once('-')
        .ok_or_else(|| BaseError::InvalidTable(format!("ten-god key '{key}'")))?;
    Ok((day.parse()?, other.parse()?))
}
