//! External calendar data for sexagenary charts.
//!
//! Two read-only tables, each loaded once and shared by reference:
//! - [`EphemerisTable`]: civil date → year/month/day ganji
//! - [`SolarTermTable`]: year → solar-term instants

pub mod ephemeris;
pub mod error;
pub mod solar_terms;

pub use ephemeris::{CalendarDay, EphemerisTable, parse_date};
pub use error::CalendarError;
pub use solar_terms::{SolarTerm, SolarTermTable, parse_instant};
