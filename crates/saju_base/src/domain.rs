//! Domain groups (wealth, relationship, career) over the ten gods.
//!
//! A bucket lists every stem whose ten-god against the day stem falls in the
//! domain's key set, in stem order 甲..癸, together with that stem's life
//! stage at a reference branch.

use serde::Serialize;

use crate::branch::Branch;
use crate::gender::Gender;
use crate::life_stage::{LifeStage, LifeStageTable};
use crate::stem::{ALL_STEMS, Stem};
use crate::ten_god::{TenGod, TenGodTable};

/// Named domain groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Wealth,
    Relationship,
    Career,
}

const WEALTH_KEYS: [TenGod; 2] = [TenGod::DirectWealth, TenGod::IndirectWealth];
const OFFICER_KEYS: [TenGod; 2] = [TenGod::DirectOfficer, TenGod::SevenKillings];
const CAREER_KEYS: [TenGod; 4] = [
    TenGod::DirectOfficer,
    TenGod::SevenKillings,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
];

impl Domain {
    /// Ten-god categories that feed this domain.
    ///
    /// Relationship follows wealth for men and officers for women.
    pub fn keys(self, gender: Gender) -> &'static [TenGod] {
        match (self, gender) {
            (Self::Wealth, _) => &WEALTH_KEYS,
            (Self::Relationship, Gender::Male) => &WEALTH_KEYS,
            (Self::Relationship, Gender::Female) => &OFFICER_KEYS,
            (Self::Career, _) => &CAREER_KEYS,
        }
    }
}

/// One stem matched into a domain bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainMatch {
    pub ten_god: TenGod,
    pub stem: Stem,
    /// Life stage of `stem` at the reference branch.
    pub life_stage: Option<LifeStage>,
}

/// Wealth / relationship / career buckets for one reference branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainBuckets {
    pub reference_branch: Branch,
    pub wealth: Vec<DomainMatch>,
    pub relationship: Vec<DomainMatch>,
    pub career: Vec<DomainMatch>,
}

/// Scan all 10 stems for one domain.
pub fn domain_bucket(
    domain: Domain,
    day_stem: Stem,
    reference_branch: Branch,
    gender: Gender,
    ten_gods: &TenGodTable,
    life_stages: &LifeStageTable,
) -> Vec<DomainMatch> {
    let keys = domain.keys(gender);
    ALL_STEMS
        .into_iter()
        .filter_map(|stem| {
            let god = ten_gods.lookup(day_stem, stem)?;
            keys.contains(&god).then(|| DomainMatch {
                ten_god: god,
                stem,
                life_stage: life_stages.lookup(stem, reference_branch),
            })
        })
        .collect()
}

/// All three buckets for a day stem at a reference branch.
pub fn domain_buckets(
    day_stem: Stem,
    reference_branch: Branch,
    gender: Gender,
    ten_gods: &TenGodTable,
    life_stages: &LifeStageTable,
) -> DomainBuckets {
    let bucket = |d| domain_bucket(d, day_stem, reference_branch, gender, ten_gods, life_stages);
    DomainBuckets {
        reference_branch,
        wealth: bucket(Domain::Wealth),
        relationship: bucket(Domain::Relationship),
        career: bucket(Domain::Career),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> (TenGodTable, LifeStageTable) {
        (TenGodTable::traditional(), LifeStageTable::traditional())
    }

    #[test]
    fn gyeong_day_wealth_is_wood() {
        let (tg, ls) = tables();
        let w = domain_bucket(Domain::Wealth, Stem::Gyeong, Branch::O, Gender::Male, &tg, &ls);
        let stems: Vec<Stem> = w.iter().map(|m| m.stem).collect();
        assert_eq!(stems, vec![Stem::Gap, Stem::Eul]);
        assert_eq!(w[0].ten_god, TenGod::IndirectWealth);
        assert_eq!(w[1].ten_god, TenGod::DirectWealth);
        // 甲 at 午 → 사, 乙 at 午 → 장생
        assert_eq!(w[0].life_stage, Some(LifeStage::Death));
        assert_eq!(w[1].life_stage, Some(LifeStage::Birth));
    }

    #[test]
    fn relationship_depends_on_gender() {
        let (tg, ls) = tables();
        let m = domain_bucket(Domain::Relationship, Stem::Gyeong, Branch::O, Gender::Male, &tg, &ls);
        let f = domain_bucket(Domain::Relationship, Stem::Gyeong, Branch::O, Gender::Female, &tg, &ls);
        assert!(m.iter().all(|x| WEALTH_KEYS.contains(&x.ten_god)));
        assert!(f.iter().all(|x| OFFICER_KEYS.contains(&x.ten_god)));
        let f_stems: Vec<Stem> = f.iter().map(|x| x.stem).collect();
        assert_eq!(f_stems, vec![Stem::Byeong, Stem::Jeong]);
    }

    #[test]
    fn career_has_four_matches() {
        let (tg, ls) = tables();
        for day in ALL_STEMS {
            let c = domain_bucket(Domain::Career, day, Branch::Ja, Gender::Male, &tg, &ls);
            assert_eq!(c.len(), 4, "day {day}");
        }
    }

    #[test]
    fn buckets_are_idempotent() {
        let (tg, ls) = tables();
        let a = domain_buckets(Stem::Im, Branch::O, Gender::Female, &tg, &ls);
        let b = domain_buckets(Stem::Im, Branch::O, Gender::Female, &tg, &ls);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_table_gives_empty_buckets() {
        let ls = LifeStageTable::traditional();
        let b = domain_buckets(Stem::Gap, Branch::Ja, Gender::Male, &TenGodTable::empty(), &ls);
        assert!(b.wealth.is_empty() && b.relationship.is_empty() && b.career.is_empty());
    }
}
