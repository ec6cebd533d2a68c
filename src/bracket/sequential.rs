use log::debug;
use std::borrow::Cow;

use super::levels::{level_count, Bracket, Level, LevelOrder};
use crate::domain::Match;

/// Splits sequence-numbered matches into rounds, final first.
///
/// Round `i` takes the next `2^i` matches in sequence order. A short last
/// round is kept as-is.
pub fn build_sequential(matches: &[Match]) -> Bracket<'_> {
    let sorted = sort_by_sequence(matches);
    let levels = partition_levels(&sorted);

    let expected = level_count(matches.len());
    if levels.len() != expected {
        debug!(
            "Sequential partition of {} matches produced {} levels (complete bracket: {})",
            matches.len(),
            levels.len(),
            expected
        );
    }

    Bracket::new(LevelOrder::FinalFirst, levels, 0)
}

/// Stable ascending sort; matches without a number go last
fn sort_by_sequence(matches: &[Match]) -> Vec<&Match> {
    let mut sorted: Vec<&Match> = matches.iter().collect();
    sorted.sort_by_key(|m| (m.match_num.is_none(), m.match_num));
    sorted
}

fn partition_levels<'a>(sorted: &[&'a Match]) -> Vec<Level<'a>> {
    let mut levels = Vec::new();
    let mut remaining = sorted;
    let mut width = 1usize;

    while !remaining.is_empty() {
        let (level, rest) = remaining.split_at(width.min(remaining.len()));
        levels.push(level.iter().map(|m| Cow::Borrowed(*m)).collect());
        remaining = rest;
        width = width.saturating_mul(2);
    }

    levels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(nums: &[i64]) -> Vec<Match> {
        nums.iter()
            .map(|&n| Match {
                match_num: Some(n),
                ..Default::default()
            })
            .collect()
    }

    fn level_nums(bracket: &Bracket) -> Vec<Vec<i64>> {
        bracket
            .final_first()
            .iter()
            .map(|level| level.iter().filter_map(|m| m.match_num).collect())
            .collect()
    }

    #[test]
    fn test_complete_bracket_partition() {
        let matches = numbered(&[7, 3, 1, 5, 2, 6, 4]);

        let bracket = build_sequential(&matches);

        assert_eq!(bracket.order(), LevelOrder::FinalFirst);
        assert_eq!(
            level_nums(&bracket),
            vec![vec![1], vec![2, 3], vec![4, 5, 6, 7]]
        );
    }

    #[test]
    fn test_partition_is_a_pure_split() {
        let matches = numbered(&[10, 4, 8, 1, 9, 2, 12, 3, 11, 5, 7, 6]);

        let bracket = build_sequential(&matches);
        let flattened: Vec<i64> = level_nums(&bracket).into_iter().flatten().collect();

        assert_eq!(flattened, (1..=12).collect::<Vec<_>>());
        assert_eq!(level_nums(&bracket)[3], vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_power_of_two_count_keeps_every_match() {
        let matches = numbered(&[1, 2, 3, 4, 5, 6, 7, 8]);

        let bracket = build_sequential(&matches);

        assert_eq!(bracket.levels().len(), 4);
        assert_eq!(bracket.match_count(), 8);
        assert_eq!(bracket.bye_count(), 0);
    }

    #[test]
    fn test_unnumbered_matches_sort_last() {
        let mut matches = numbered(&[2, 1]);
        matches.insert(0, Match::default());

        let bracket = build_sequential(&matches);
        let root = bracket.final_match().unwrap();

        assert_eq!(root.match_num, Some(1));
        assert_eq!(bracket.final_first()[1][1].match_num, None);
    }

    #[test]
    fn test_empty_input() {
        let bracket = build_sequential(&[]);

        assert!(bracket.levels().is_empty());
        assert!(!bracket.is_resolvable());
    }
}
