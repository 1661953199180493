//! Earthly branches (지지): the 12-cycle.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::BaseError;

/// The 12 earthly branches, starting from 子.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cyclic order (0 = 子, 11 = 亥).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const BRANCH_HANJA: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const BRANCH_NAMES: [&str; 12] = [
    "자", "축", "인", "묘", "진", "사", "오", "미", "신", "유", "술", "해",
];

impl Branch {
    /// 0-based cyclic index (子=0 .. 亥=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at a cyclic index; wraps modulo 12.
    pub const fn from_index(idx: u8) -> Self {
        ALL_BRANCHES[(idx % 12) as usize]
    }

    /// Hanja character of the branch.
    pub const fn hanja(self) -> char {
        BRANCH_HANJA[self.index() as usize]
    }

    /// Korean reading of the branch.
    pub const fn name(self) -> &'static str {
        BRANCH_NAMES[self.index() as usize]
    }

    /// Step `n` positions through the 12-cycle (negative steps go backward).
    pub const fn step(self, n: i32) -> Self {
        let idx = (self.index() as i32 + n).rem_euclid(12);
        ALL_BRANCHES[idx as usize]
    }

    /// Parse a single hanja character.
    pub fn from_hanja(c: char) -> Option<Self> {
        BRANCH_HANJA
            .iter()
            .position(|&h| h == c)
            .map(|i| ALL_BRANCHES[i])
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl FromStr for Branch {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(branch) = Self::from_hanja(c) {
                return Ok(branch);
            }
        }
        BRANCH_NAMES
            .iter()
            .position(|&n| n == s)
            .map(|i| ALL_BRANCHES[i])
            .ok_or_else(|| BaseError::InvalidSymbol(format!("branch '{s}'")))
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.hanja())
    }
}
