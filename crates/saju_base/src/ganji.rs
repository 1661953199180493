//! Ganji (간지): a stem paired with a branch.
//!
//! The two cycles advance independently, so a valid sexagenary pair always
//! has matching parity and the pairs repeat every 60 steps. The epoch is
//! CE 1984 = 甲子 (index 0).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::branch::Branch;
use crate::error::BaseError;
use crate::stem::Stem;

/// Reference epoch: CE 1984 = 甲子.
pub const GANJI_EPOCH_YEAR: i32 = 1984;

/// A stem-branch pair naming one calendar unit (year, month, day or hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ganji {
    pub stem: Stem,
    pub branch: Branch,
}

impl Ganji {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pair at a position of the 60-cycle (0 = 甲子); wraps modulo 60.
    pub const fn from_index60(idx: u8) -> Self {
        let idx = idx % 60;
        Self {
            stem: Stem::from_index(idx % 10),
            branch: Branch::from_index(idx % 12),
        }
    }

    /// Position in the 60-cycle, or `None` when stem and branch parity differ.
    ///
    /// Solves `i ≡ stem (mod 10)`, `i ≡ branch (mod 12)`.
    pub const fn index60(self) -> Option<u8> {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        if (s - b) % 2 != 0 {
            return None;
        }
        Some((6 * s - 5 * b).rem_euclid(60) as u8)
    }

    /// Step both cycles `n` positions (stem mod 10, branch mod 12).
    pub const fn step(self, n: i32) -> Self {
        Self {
            stem: self.stem.step(n),
            branch: self.branch.step(n),
        }
    }

    /// Sexagenary year pair for a CE year.
    pub const fn for_year(ce_year: i32) -> Self {
        let offset = (ce_year - GANJI_EPOCH_YEAR).rem_euclid(60) as u8;
        Self::from_index60(offset)
    }
}

impl Display for Ganji {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Ganji {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(sc), Some(bc), None) => {
                let stem = Stem::from_hanja(sc);
                let branch = Branch::from_hanja(bc);
                match (stem, branch) {
                    (Some(stem), Some(branch)) => Ok(Self { stem, branch }),
                    _ => Err(BaseError::InvalidSymbol(format!("ganji '{trimmed}'"))),
                }
            }
            _ => Err(BaseError::InvalidSymbol(format!("ganji '{trimmed}'"))),
        }
    }
}

impl Serialize for Ganji {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index60_roundtrip() {
        for i in 0..60u8 {
            assert_eq!(Ganji::from_index60(i).index60(), Some(i));
        }
    }

    #[test]
    fn mismatched_parity_has_no_index() {
        assert_eq!(Ganji::new(Stem::Gap, Branch::Chuk).index60(), None);
    }

    #[test]
    fn gapsul_is_10() {
        let g: Ganji = "甲戌".parse().unwrap();
        assert_eq!(g.index60(), Some(10));
    }

    #[test]
    fn epoch_year_is_gapja() {
        assert_eq!(Ganji::for_year(1984).to_string(), "甲子");
    }

    #[test]
    fn year_2026_is_byeongo() {
        assert_eq!(Ganji::for_year(2026).to_string(), "丙午");
    }

    #[test]
    fn year_before_epoch() {
        // 1983 - 1984 = -1, rem_euclid(60) = 59 → 癸亥
        assert_eq!(Ganji::for_year(1983).to_string(), "癸亥");
    }

    #[test]
    fn step_60_is_identity() {
        let g: Ganji = "辛巳".parse().unwrap();
        assert_eq!(g.step(60), g);
        assert_eq!(g.step(-60), g);
    }

    #[test]
    fn parse_rejects_bad_lengths() {
        assert!("甲".parse::<Ganji>().is_err());
        assert!("甲子丑".parse::<Ganji>().is_err());
        assert!("子甲".parse::<Ganji>().is_err());
    }
}
