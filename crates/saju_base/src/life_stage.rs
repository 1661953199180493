//! Twelve stages (십이운성): life-stage classification of a branch against a stem.
//!
//! Tables are stored the way they are published, category → {stem → branch},
//! and an inverse (stem, branch) → category index is built once at load time.
//! When two categories claim the same cell, the first one in table order wins.

use std::path::Path;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::BaseError;
use crate::stem::{ALL_STEMS, Stem};

/// The 12 life stages, from birth to nurture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifeStage {
    Birth,
    Bath,
    Crown,
    Office,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conception,
    Nurture,
}

/// All 12 stages in cycle order.
pub const ALL_LIFE_STAGES: [LifeStage; 12] = [
    LifeStage::Birth,
    LifeStage::Bath,
    LifeStage::Crown,
    LifeStage::Office,
    LifeStage::Peak,
    LifeStage::Decline,
    LifeStage::Sickness,
    LifeStage::Death,
    LifeStage::Tomb,
    LifeStage::Extinction,
    LifeStage::Conception,
    LifeStage::Nurture,
];

impl LifeStage {
    /// 0-based position in the cycle (장생=0 .. 양=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Birth => 0,
            Self::Bath => 1,
            Self::Crown => 2,
            Self::Office => 3,
            Self::Peak => 4,
            Self::Decline => 5,
            Self::Sickness => 6,
            Self::Death => 7,
            Self::Tomb => 8,
            Self::Extinction => 9,
            Self::Conception => 10,
            Self::Nurture => 11,
        }
    }

    /// Korean name (장생, 목욕, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Birth => "장생",
            Self::Bath => "목욕",
            Self::Crown => "관대",
            Self::Office => "건록",
            Self::Peak => "제왕",
            Self::Decline => "쇠",
            Self::Sickness => "병",
            Self::Death => "사",
            Self::Tomb => "묘",
            Self::Extinction => "절",
            Self::Conception => "태",
            Self::Nurture => "양",
        }
    }

    /// Hanja name (長生, 沐浴, ...).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Birth => "長生",
            Self::Bath => "沐浴",
            Self::Crown => "冠帶",
            Self::Office => "建祿",
            Self::Peak => "帝旺",
            Self::Decline => "衰",
            Self::Sickness => "病",
            Self::Death => "死",
            Self::Tomb => "墓",
            Self::Extinction => "絶",
            Self::Conception => "胎",
            Self::Nurture => "養",
        }
    }

    /// English identifier.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Birth => "Birth",
            Self::Bath => "Bath",
            Self::Crown => "Crown",
            Self::Office => "Office",
            Self::Peak => "Peak",
            Self::Decline => "Decline",
            Self::Sickness => "Sickness",
            Self::Death => "Death",
            Self::Tomb => "Tomb",
            Self::Extinction => "Extinction",
            Self::Conception => "Conception",
            Self::Nurture => "Nurture",
        }
    }

    /// Parse from any of the Korean, hanja or English names.
    ///
    /// `건록` is also accepted in its short form `록`/`임관`.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        match s {
            "록" | "임관" | "臨官" => return Some(Self::Office),
            "왕" => return Some(Self::Peak),
            _ => {}
        }
        ALL_LIFE_STAGES
            .into_iter()
            .find(|st| st.name() == s || st.hanja() == s || st.english_name().eq_ignore_ascii_case(s))
    }
}

impl Serialize for LifeStage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Branch where each stem's 장생 falls: 甲亥 乙午 丙寅 丁酉 戊寅 己酉 庚巳 辛子 壬申 癸卯.
const BIRTH_BRANCH: [Branch; 10] = [
    Branch::Hae,
    Branch::O,
    Branch::In,
    Branch::Yu,
    Branch::In,
    Branch::Yu,
    Branch::Sa,
    Branch::Ja,
    Branch::Sin,
    Branch::Myo,
];

/// Branch holding `stage` for `stem` under the traditional rule.
///
/// Yang stems advance through the branches, yin stems retreat.
pub fn traditional_branch(stage: LifeStage, stem: Stem) -> Branch {
    let start = BIRTH_BRANCH[stem.index() as usize];
    let k = stage.index() as i32;
    if stem.is_yang() { start.step(k) } else { start.step(-k) }
}

/// Twelve-stages table with a precomputed (stem, branch) index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeStageTable {
    /// Published form: one row per category, branch per stem.
    rows: Vec<(LifeStage, [Option<Branch>; 10])>,
    /// Inverse index: `index[stem][branch]`.
    index: [[Option<LifeStage>; 12]; 10],
}

impl LifeStageTable {
    /// Build a table from category rows, in order.
    pub fn from_rows(rows: Vec<(LifeStage, [Option<Branch>; 10])>) -> Self {
        let mut index = [[None; 12]; 10];
        for (stage, branches) in &rows {
            for (stem_idx, branch) in branches.iter().enumerate() {
                if let Some(b) = branch {
                    let cell = &mut index[stem_idx][b.index() as usize];
                    if cell.is_none() {
                        *cell = Some(*stage);
                    }
                }
            }
        }
        Self { rows, index }
    }

    /// Complete table from the traditional birth positions.
    pub fn traditional() -> Self {
        let rows = ALL_LIFE_STAGES
            .into_iter()
            .map(|stage| {
                let mut branches = [None; 10];
                for stem in ALL_STEMS {
                    branches[stem.index() as usize] = Some(traditional_branch(stage, stem));
                }
                (stage, branches)
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Stage whose branch for `stem` equals `branch`; `None` when no row matches.
    pub fn lookup(&self, stem: Stem, branch: Branch) -> Option<LifeStage> {
        self.index[stem.index() as usize][branch.index() as usize]
    }

    /// Forward lookup: the branch a category assigns to `stem`.
    pub fn branch_for(&self, stage: LifeStage, stem: Stem) -> Option<Branch> {
        self.rows
            .iter()
            .find(|(s, _)| *s == stage)
            .and_then(|(_, branches)| branches[stem.index() as usize])
    }

    /// Number of category rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Parse a JSON object of `"<category>": {"<stem>": "<branch>"}` rows.
    pub fn parse_json(content: &str) -> Result<Self, BaseError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(content)?;
        let mut rows = Vec::with_capacity(raw.len());
        for (name, mapping) in &raw {
            let stage = LifeStage::from_name(name)
                .ok_or_else(|| BaseError::InvalidSymbol(format!("life stage '{name}'")))?;
            let mapping = mapping
                .as_object()
                .ok_or_else(|| BaseError::InvalidTable(format!("row '{name}' is not an object")))?;
            let mut branches = [None; 10];
            for (stem_text, branch_value) in mapping {
                let stem: Stem = stem_text.parse()?;
                let branch_text = branch_value.as_str().ok_or_else(|| {
                    BaseError::InvalidTable(format!("row '{name}' stem '{stem_text}'"))
                })?;
                branches[stem.index() as usize] = Some(branch_text.parse()?);
            }
            rows.push((stage, branches));
        }
        let table = Self::from_rows(rows);
        debug!(rows = table.len(), "parsed life-stage table");
        Ok(table)
    }

    /// Load a JSON table from disk.
    pub fn load(path: &Path) -> Result<Self, BaseError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_json(&content)
    }
}

impl Default for LifeStageTable {
    fn default() -> Self {
        Self::traditional()
    }
}

/// Every (stem, branch) cell the table leaves unclassified.
pub fn unclassified_cells(table: &LifeStageTable) -> Vec<(Stem, Branch)> {
    let mut out = Vec::new();
    for stem in ALL_STEMS {
        for branch in ALL_BRANCHES {
            if table.lookup(stem, branch).is_none() {
                out.push((stem, branch));
            }
        }
    }
    out
}
