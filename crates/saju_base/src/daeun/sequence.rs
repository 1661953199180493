//! Period ganji generation by stepping from the month pillar.

use super::types::Direction;
use crate::ganji::Ganji;

/// `count` pairs stepping from `month` in `direction`, month pillar excluded.
pub fn daeun_sequence(month: Ganji, direction: Direction, count: usize) -> Vec<Ganji> {
    let mut out = Vec::with_capacity(count);
    let mut current = month;
    for _ in 0..count {
        current = current.step(direction.step());
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;
    use crate::stem::Stem;

    #[test]
    fn forward_from_sinsa() {
        let month = Ganji::new(Stem::Sin, Branch::Sa);
        let seq: Vec<String> = daeun_sequence(month, Direction::Forward, 3)
            .iter()
            .map(|g| g.to_string())
            .collect();
        assert_eq!(seq, vec!["壬午", "癸未", "甲申"]);
    }

    #[test]
    fn backward_from_sinsa() {
        let month = Ganji::new(Stem::Sin, Branch::Sa);
        let seq: Vec<String> = daeun_sequence(month, Direction::Backward, 3)
            .iter()
            .map(|g| g.to_string())
            .collect();
        assert_eq!(seq, vec!["庚辰", "己卯", "戊寅"]);
    }

    #[test]
    fn excludes_month_and_has_count() {
        let month = Ganji::new(Stem::Gap, Branch::Ja);
        let seq = daeun_sequence(month, Direction::Forward, 10);
        assert_eq!(seq.len(), 10);
        assert!(!seq.contains(&month));
        assert!(daeun_sequence(month, Direction::Forward, 0).is_empty());
    }
}
