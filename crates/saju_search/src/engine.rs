//! Engine context: the four read-only tables plus the reference year.
//!
//! Tables are loaded once and passed by reference into every query.

use std::path::Path;

use saju_base::{Branch, Ganji, LifeStage, LifeStageTable, Stem, TenGod, TenGodTable};
use saju_calendar::{EphemerisTable, SolarTermTable};
use saju_config::{DEFAULT_REFERENCE_YEAR, SajuConfig, validate_reference_year};
use tracing::debug;

use crate::error::SearchError;

/// Loaded tables for chart and projection queries.
#[derive(Debug, Clone)]
pub struct SajuEngine {
    calendar: EphemerisTable,
    solar_terms: SolarTermTable,
    ten_gods: TenGodTable,
    life_stages: LifeStageTable,
    reference_year: i32,
}

impl SajuEngine {
    /// Load every table named by a validated configuration.
    pub fn new(config: &SajuConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let calendar = EphemerisTable::load(&config.calendar_path)?;
        let solar_terms = SolarTermTable::load(&config.solar_terms_path)?;
        let ten_gods = match &config.ten_gods_path {
            Some(p) => TenGodTable::load(p)?,
            None => TenGodTable::traditional(),
        };
        let life_stages = match &config.life_stages_path {
            Some(p) => LifeStageTable::load(p)?,
            None => LifeStageTable::traditional(),
        };
        debug!(
            calendar_days = calendar.len(),
            solar_term_years = solar_terms.len(),
            reference_year = config.reference_year,
            "engine tables loaded"
        );
        Ok(Self {
            calendar,
            solar_terms,
            ten_gods,
            life_stages,
            reference_year: config.reference_year,
        })
    }

    /// Load from a TOML configuration file.
    pub fn from_config_file(path: &Path) -> Result<Self, SearchError> {
        Self::new(&SajuConfig::load(path)?)
    }

    /// Assemble from in-memory tables with the traditional classifications.
    pub fn from_tables(calendar: EphemerisTable, solar_terms: SolarTermTable) -> Self {
        Self::from_parts(
            calendar,
            solar_terms,
            TenGodTable::traditional(),
            LifeStageTable::traditional(),
        )
    }

    /// Assemble from in-memory tables, with the default reference year.
    pub fn from_parts(
        calendar: EphemerisTable,
        solar_terms: SolarTermTable,
        ten_gods: TenGodTable,
        life_stages: LifeStageTable,
    ) -> Self {
        Self {
            calendar,
            solar_terms,
            ten_gods,
            life_stages,
            reference_year: DEFAULT_REFERENCE_YEAR,
        }
    }

    /// Same tables with another reference year, within the configured range.
    pub fn with_reference_year(mut self, year: i32) -> Result<Self, SearchError> {
        validate_reference_year(year)?;
        self.reference_year = year;
        Ok(self)
    }

    pub fn calendar(&self) -> &EphemerisTable {
        &self.calendar
    }

    pub fn solar_terms(&self) -> &SolarTermTable {
        &self.solar_terms
    }

    pub fn ten_gods(&self) -> &TenGodTable {
        &self.ten_gods
    }

    pub fn life_stages(&self) -> &LifeStageTable {
        &self.life_stages
    }

    /// Target year of the yearly outlook.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Ganji of the reference year.
    pub fn reference_ganji(&self) -> Ganji {
        Ganji::for_year(self.reference_year)
    }

    /// Ten-god of `other` against the day stem.
    pub fn ten_god(&self, day_stem: Stem, other: Stem) -> Option<TenGod> {
        self.ten_gods.lookup(day_stem, other)
    }

    /// Life stage of `stem` at `branch`.
    pub fn life_stage(&self, stem: Stem, branch: Branch) -> Option<LifeStage> {
        self.life_stages.lookup(stem, branch)
    }
}
