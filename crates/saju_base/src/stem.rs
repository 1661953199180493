//! Heavenly stems (천간) and their five-phase elements.
//!
//! The 10 stems cycle continuously. Even indices are yang, odd indices yin,
//! and each consecutive pair shares one of the five elements
//! (wood, fire, earth, metal, water).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::BaseError;

/// The 10 heavenly stems, starting from 甲.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cyclic order (0 = 甲, 9 = 癸).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

/// The five yang stems: 甲 丙 戊 庚 壬.
pub const YANG_STEMS: [Stem; 5] = [Stem::Gap, Stem::Byeong, Stem::Mu, Stem::Gyeong, Stem::Im];

const STEM_HANJA: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const STEM_NAMES: [&str; 10] = ["갑", "을", "병", "정", "무", "기", "경", "신", "임", "계"];

impl Stem {
    /// 0-based cyclic index (甲=0 .. 癸=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at a cyclic index; wraps modulo 10.
    pub const fn from_index(idx: u8) -> Self {
        ALL_STEMS[(idx % 10) as usize]
    }

    /// Hanja character of the stem.
    pub const fn hanja(self) -> char {
        STEM_HANJA[self.index() as usize]
    }

    /// Korean reading of the stem.
    pub const fn name(self) -> &'static str {
        STEM_NAMES[self.index() as usize]
    }

    /// Whether the stem belongs to the yang subset.
    pub fn is_yang(self) -> bool {
        YANG_STEMS.contains(&self)
    }

    /// Five-phase element of the stem.
    pub const fn element(self) -> Element {
        Element::from_index(self.index() / 2)
    }

    /// Step `n` positions through the 10-cycle (negative steps go backward).
    pub const fn step(self, n: i32) -> Self {
        let idx = (self.index() as i32 + n).rem_euclid(10);
        ALL_STEMS[idx as usize]
    }

    /// Parse a single hanja character.
    pub fn from_hanja(c: char) -> Option<Self> {
        STEM_HANJA
            .iter()
            .position(|&h| h == c)
            .map(|i| ALL_STEMS[i])
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hanja())
    }
}

impl FromStr for Stem {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(stem) = Self::from_hanja(c) {
                return Ok(stem);
            }
        }
        STEM_NAMES
            .iter()
            .position(|&n| n == s)
            .map(|i| ALL_STEMS[i])
            .ok_or_else(|| BaseError::InvalidSymbol(format!("stem '{s}'")))
    }
}

impl Serialize for Stem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.hanja())
    }
}

/// The five phases, in generating order (wood feeds fire, fire makes earth, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index in generating order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element at an index; wraps modulo 5.
    pub const fn from_index(idx: u8) -> Self {
        ALL_ELEMENTS[(idx % 5) as usize]
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }
}
