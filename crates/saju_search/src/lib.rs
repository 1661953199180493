//! Sexagenary chart engine: orchestrates calendar lookups, classification
//! and the destiny cycle.
//!
//! This crate provides:
//! - [`SajuEngine`]: the loaded tables, passed explicitly into every query
//! - Natal chart assembly with an explicit unobserved-hour state
//! - Destiny-cycle (daeun) orchestration against the solar-term table
//! - Day, month and 13-month projections for a fixed day stem

pub mod birth;
pub mod chart;
pub mod chart_types;
pub mod daeun;
pub mod engine;
pub mod error;
pub mod projection;
pub mod projection_types;

pub use birth::{Birth, BirthInput, parse_clock};
pub use chart::{chart_for_birth, natal_pillars, year_outlook};
pub use chart_types::{
    Chart, DAY_MASTER_LABEL, DaeunEntry, DaeunSummary, FlowRow, FlowSource, HourState,
    NO_ESTIMATION_NOTE, Observability, ObservedPillar, Pillar, Pillars, StemRole, YearOutlook,
};
pub use daeun::daeun_for_chart;
pub use engine::SajuEngine;
pub use error::SearchError;
pub use projection::{MONTH_WINDOW_LIMIT, day_fortune, month_fortune, year_month_fortunes};
pub use projection_types::{DayFortune, MonthFortune, MonthWindow};
