//! Pure sexagenary calculations: no file access beyond optional table loads.
//!
//! This crate provides:
//! - Heavenly stems, earthly branches and their 60-pair ganji cycle
//! - Hour-branch windows and the hour-stem rule
//! - Ten-gods and twelve-stages classification tables
//! - Domain buckets (wealth, relationship, career)
//! - Daeun (destiny cycle) direction, start age and period generation

pub mod branch;
pub mod daeun;
pub mod domain;
pub mod error;
pub mod ganji;
pub mod gender;
pub mod hour;
pub mod life_stage;
pub mod stem;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Branch};
pub use daeun::{DaeunCycle, DaeunHeader, DaeunPeriod, Direction, daeun_direction, daeun_for_birth};
pub use domain::{Domain, DomainBuckets, DomainMatch, domain_bucket, domain_buckets};
pub use error::BaseError;
pub use ganji::{GANJI_EPOCH_YEAR, Ganji};
pub use gender::Gender;
pub use hour::{
    HOUR_WINDOWS, MINUTES_PER_DAY, hour_branch_from_clock, hour_branch_from_minute_of_day,
    hour_ganji, hour_stem,
};
pub use life_stage::{
    ALL_LIFE_STAGES, LifeStage, LifeStageTable, traditional_branch, unclassified_cells,
};
pub use stem::{ALL_STEMS, Element, Stem, YANG_STEMS};
pub use ten_god::{ALL_TEN_GODS, SELF_ALIGNED, TenGod, TenGodTable, traditional_ten_god};
