//! Birth input validation.
//!
//! Hour and minute are either both present or both absent. An absent time
//! is carried as unknown; the destiny-cycle math then measures from
//! midnight as a fixed input convention, never as an estimate.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use saju_base::Gender;
use serde::Serialize;

use crate::error::SearchError;

/// Raw birth input as supplied by a caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub gender: Gender,
}

/// Birth input after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Birth {
    pub date: NaiveDate,
    /// `None` when the hour is unknown.
    pub time: Option<NaiveTime>,
    pub gender: Gender,
}

impl Birth {
    /// Instant used for solar-term distances (midnight when the time is unknown).
    pub fn instant(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    /// Whether both hour and minute were supplied.
    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }
}

impl BirthInput {
    /// Birth with a known clock time.
    pub fn with_time(year: i32, month: u32, day: u32, hour: u32, minute: u32, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour: Some(hour),
            minute: Some(minute),
            gender,
        }
    }

    /// Birth with an unknown hour.
    pub fn date_only(year: i32, month: u32, day: u32, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour: None,
            minute: None,
            gender,
        }
    }

    /// Check ranges and the both-or-neither time rule.
    pub fn validate(&self) -> Result<Birth, SearchError> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or_else(|| {
            SearchError::InvalidInput(format!(
                "no such date {:04}-{:02}-{:02}",
                self.year, self.month, self.day
            ))
        })?;
        let time = match (self.hour, self.minute) {
            (Some(h), Some(m)) => Some(NaiveTime::from_hms_opt(h, m, 0).ok_or_else(|| {
                SearchError::InvalidInput(format!("time {h:02}:{m:02} out of range"))
            })?),
            (None, None) => None,
            _ => {
                return Err(SearchError::InvalidInput(
                    "hour and minute must be given together".to_string(),
                ));
            }
        };
        Ok(Birth {
            date,
            time,
            gender: self.gender,
        })
    }
}

/// Parse `HH:MM`; `x`, `?`, `-` or an empty string mean unknown.
pub fn parse_clock(s: &str) -> Result<Option<(u32, u32)>, SearchError> {
    let s = s.trim();
    if matches!(s, "" | "x" | "X" | "?" | "-") {
        return Ok(None);
    }
    let bad = || SearchError::InvalidInput(format!("time '{s}' is not HH:MM"));
    let (h, m) = s.split_once(':').ok_or_else(bad)?;
    let h: u32 = h.trim().parse().map_err(|_| bad())?;
    let m: u32 = m.trim().parse().map_err(|_| bad())?;
    Ok(Some((h, m)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_time() {
        let b = BirthInput::with_time(1990, 5, 15, 14, 30, Gender::Male)
            .validate()
            .unwrap();
        assert!(b.has_time());
        assert_eq!(b.instant().to_string(), "1990-05-15 14:30:00");
    }

    #[test]
    fn unknown_time_is_midnight_instant() {
        let b = BirthInput::date_only(1990, 5, 15, Gender::Female)
            .validate()
            .unwrap();
        assert!(!b.has_time());
        assert_eq!(b.instant().to_string(), "1990-05-15 00:00:00");
    }

    #[test]
    fn partial_time_rejected() {
        let mut input = BirthInput::date_only(1990, 5, 15, Gender::Male);
        input.hour = Some(14);
        assert!(matches!(input.validate(), Err(SearchError::InvalidInput(_))));
        input.hour = None;
        input.minute = Some(30);
        assert!(matches!(input.validate(), Err(SearchError::InvalidInput(_))));
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(BirthInput::with_time(1990, 5, 15, 24, 0, Gender::Male).validate().is_err());
        assert!(BirthInput::with_time(1990, 5, 15, 12, 60, Gender::Male).validate().is_err());
        assert!(BirthInput::date_only(1990, 2, 30, Gender::Male).validate().is_err());
        assert!(BirthInput::date_only(1990, 13, 1, Gender::Male).validate().is_err());
    }

    #[test]
    fn clock_text() {
        assert_eq!(parse_clock("14:30").unwrap(), Some((14, 30)));
        assert_eq!(parse_clock("x").unwrap(), None);
        assert_eq!(parse_clock("?").unwrap(), None);
        assert_eq!(parse_clock("-").unwrap(), None);
        assert!(parse_clock("1430").is_err());
        assert!(parse_clock("ab:cd").is_err());
    }
}
