//! Label ages, start years and label text for generated periods.

use super::types::{DaeunPeriod, YEARS_PER_DAEUN};
use crate::ganji::Ganji;

/// Age printed on the label of period `index`.
pub fn label_age(rounded_age: i32, index: usize) -> i32 {
    let step = YEARS_PER_DAEUN * index as i32;
    if rounded_age > 1 {
        rounded_age - 1 + step
    } else {
        1 + step
    }
}

/// `만 {age}세부터 {ganji} 대운 시작 ({year})`
pub fn format_label(age: i32, ganji: Ganji, year: i32) -> String {
    format!("만 {age}세부터 {ganji} 대운 시작 ({year})")
}

/// Attach label ages, start years and labels to a ganji sequence.
pub fn daeun_periods(sequence: &[Ganji], rounded_age: i32, birth_year: i32) -> Vec<DaeunPeriod> {
    sequence
        .iter()
        .enumerate()
        .map(|(i, &ganji)| {
            let age = label_age(rounded_age, i);
            let start_year = birth_year + age;
            DaeunPeriod {
                index: i as u8,
                ganji,
                label_age: age,
                start_year,
                label: format_label(age, ganji, start_year),
            }
        })
        .collect()
}
