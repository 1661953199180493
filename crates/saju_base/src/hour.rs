//! Hour pillar: two-hour clock windows and the hour-stem rule.
//!
//! The day is split into 12 windows of 120 minutes, offset by 30 minutes so
//! that 子 spans 23:30-01:29 and wraps across midnight.

use crate::branch::Branch;
use crate::ganji::Ganji;
use crate::stem::Stem;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Inclusive minute-of-day ranges for each hour branch.
///
/// 子 appears twice because its window straddles midnight.
pub const HOUR_WINDOWS: [(u32, u32, Branch); 13] = [
    (1410, 1439, Branch::Ja),
    (0, 89, Branch::Ja),
    (90, 209, Branch::Chuk),
    (210, 329, Branch::In),
    (330, 449, Branch::Myo),
    (450, 569, Branch::Jin),
    (570, 689, Branch::Sa),
    (690, 809, Branch::O),
    (810, 929, Branch::Mi),
    (930, 1049, Branch::Sin),
    (1050, 1169, Branch::Yu),
    (1170, 1289, Branch::Sul),
    (1290, 1409, Branch::Hae),
];

/// Hour branch for a minute of the day (0..=1439).
///
/// Returns `None` for minutes outside the civil day.
pub fn hour_branch_from_minute_of_day(minute_of_day: u32) -> Option<Branch> {
    HOUR_WINDOWS
        .iter()
        .find(|&&(start, end, _)| (start..=end).contains(&minute_of_day))
        .map(|&(_, _, branch)| branch)
}

/// Hour branch for a 24-hour clock reading.
///
/// Returns `None` when `hour > 23` or `minute > 59`.
pub fn hour_branch_from_clock(hour: u32, minute: u32) -> Option<Branch> {
    if hour > 23 || minute > 59 {
        return None;
    }
    hour_branch_from_minute_of_day(hour * 60 + minute)
}

/// Hour stem from the day stem and hour branch: `(day*2 + branch) mod 10`.
pub const fn hour_stem(day_stem: Stem, hour_branch: Branch) -> Stem {
    Stem::from_index((day_stem.index() * 2 + hour_branch.index()) % 10)
}

/// Full hour pillar for a day stem and clock reading.
pub fn hour_ganji(day_stem: Stem, hour: u32, minute: u32) -> Option<Ganji> {
    let branch = hour_branch_from_clock(hour, minute)?;
    Some(Ganji::new(hour_stem(day_stem, branch), branch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn total_over_civil_day() {
        for m in 0..MINUTES_PER_DAY {
            assert!(hour_branch_from_minute_of_day(m).is_some(), "gap at {m}");
        }
        assert_eq!(hour_branch_from_minute_of_day(MINUTES_PER_DAY), None);
    }

    #[test]
    fn windows_do_not_overlap() {
        for m in 0..MINUTES_PER_DAY {
            let hits = HOUR_WINDOWS
                .iter()
                .filter(|&&(s, e, _)| (s..=e).contains(&m))
                .count();
            assert_eq!(hits, 1, "minute {m} covered {hits} times");
        }
    }

    #[test]
    fn boundary_minutes() {
        assert_eq!(hour_branch_from_minute_of_day(89), Some(Branch::Ja));
        assert_eq!(hour_branch_from_minute_of_day(90), Some(Branch::Chuk));
        assert_eq!(hour_branch_from_minute_of_day(1409), Some(Branch::Hae));
        assert_eq!(hour_branch_from_minute_of_day(1410), Some(Branch::Ja));
        assert_eq!(hour_branch_from_minute_of_day(1439), Some(Branch::Ja));
        assert_eq!(hour_branch_from_minute_of_day(0), Some(Branch::Ja));
    }

    #[test]
    fn each_branch_spans_120_minutes() {
        for b in crate::branch::ALL_BRANCHES {
            let n = (0..MINUTES_PER_DAY)
                .filter(|&m| hour_branch_from_minute_of_day(m) == Some(b))
                .count();
            assert_eq!(n, 120, "{b}");
        }
    }

    #[test]
    fn clock_out_of_range() {
        assert_eq!(hour_branch_from_clock(24, 0), None);
        assert_eq!(hour_branch_from_clock(12, 60), None);
        assert_eq!(hour_branch_from_clock(14, 30), Some(Branch::Mi));
    }

    #[test]
    fn hour_stem_doubling_rule() {
        // 甲/己 days open the 子 hour with 甲; 乙/庚 with 丙; 丙/辛 with 戊;
        // 丁/壬 with 庚; 戊/癸 with 壬.
        let expected = [
            Stem::Gap,
            Stem::Byeong,
            Stem::Mu,
            Stem::Gyeong,
            Stem::Im,
        ];
        for day in ALL_STEMS {
            let want = expected[(day.index() % 5) as usize];
            assert_eq!(hour_stem(day, Branch::Ja), want, "day {day}");
        }
    }

    #[test]
    fn hour_ganji_for_gyeong_day_afternoon() {
        // 庚 day, 14:30 → 未 hour, stem (6*2 + 7) mod 10 = 9 → 癸
        let g = hour_ganji(Stem::Gyeong, 14, 30).unwrap();
        assert_eq!(g.to_string(), "癸未");
    }
}
