use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;

use crate::domain::Match;

/// One round of a bracket. Input matches are borrowed, synthesized byes are owned.
pub type Level<'a> = Vec<Cow<'a, Match>>;

/// Number of rounds a complete bracket over `n` entries needs: ceil(log2(n))
pub fn level_count(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

/// Bracket size implied by the seeds in play, or by the match count without seeds
pub fn competitor_count(matches: &[Match]) -> usize {
    let seeds: HashSet<u32> = matches.iter().flat_map(Match::seeds).collect();
    let highest = seeds.iter().max().copied().unwrap_or(0) as usize;

    match seeds.len().max(highest) {
        0 => matches.len() + 1,
        n => n,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LevelOrder {
    /// Index 0 holds the final
    FinalFirst,
    /// Index 0 holds the widest, earliest round; the final is last
    EarliestFirst,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketStats {
    pub levels: usize,
    pub matches: usize,
    pub byes: usize,
    /// Input matches that could not be placed in any level
    pub unplaced: usize,
}

/// Reconstructed level structure of one division
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bracket<'a> {
    order: LevelOrder,
    levels: Vec<Level<'a>>,
    unplaced: usize,
}

impl<'a> Bracket<'a> {
    pub(crate) fn new(order: LevelOrder, levels: Vec<Level<'a>>, unplaced: usize) -> Self {
        Self {
            order,
            levels,
            unplaced,
        }
    }

    /// Degenerate result for a division without a final: one empty level
    pub(crate) fn unresolvable(unplaced: usize) -> Self {
        Self::new(LevelOrder::EarliestFirst, vec![Vec::new()], unplaced)
    }

    pub fn order(&self) -> LevelOrder {
        self.order
    }

    pub fn levels(&self) -> &[Level<'a>] {
        &self.levels
    }

    pub fn into_levels(self) -> Vec<Level<'a>> {
        self.levels
    }

    pub fn unplaced(&self) -> usize {
        self.unplaced
    }

    /// Re-orients the levels without touching their contents
    pub fn into_order(mut self, order: LevelOrder) -> Self {
        if self.order != order {
            self.levels.reverse();
            self.order = order;
        }
        self
    }

    pub fn final_first(&self) -> Vec<&[Cow<'a, Match>]> {
        self.view(LevelOrder::FinalFirst)
    }

    pub fn earliest_first(&self) -> Vec<&[Cow<'a, Match>]> {
        self.view(LevelOrder::EarliestFirst)
    }

    fn view(&self, order: LevelOrder) -> Vec<&[Cow<'a, Match>]> {
        let levels = self.levels.iter().map(Vec::as_slice);
        if self.order == order {
            levels.collect()
        } else {
            levels.rev().collect()
        }
    }

    /// Root of the tree, if any
    pub fn final_match(&self) -> Option<&Match> {
        let root = match self.order {
            LevelOrder::FinalFirst => self.levels.first(),
            LevelOrder::EarliestFirst => self.levels.last(),
        };
        root.and_then(|level| level.first()).map(|m| &**m)
    }

    pub fn is_resolvable(&self) -> bool {
        self.final_match().is_some()
    }

    pub fn match_count(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    pub fn bye_count(&self) -> usize {
        self.levels
            .iter()
            .flatten()
            .filter(|m| matches!(m, Cow::Owned(_)))
            .count()
    }

    pub fn stats(&self) -> BracketStats {
        let byes = self.bye_count();
        BracketStats {
            levels: self.levels.iter().filter(|l| !l.is_empty()).count(),
            matches: self.match_count() - byes,
            byes,
            unplaced: self.unplaced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_count() {
        assert_eq!(level_count(0), 0);
        assert_eq!(level_count(1), 0);
        assert_eq!(level_count(2), 1);
        assert_eq!(level_count(3), 2);
        assert_eq!(level_count(4), 2);
        assert_eq!(level_count(5), 3);
        assert_eq!(level_count(8), 3);
        assert_eq!(level_count(9), 4);
        assert_eq!(level_count(300), 9);
    }

    #[test]
    fn test_competitor_count() {
        let seeded = |red: u32, blue: u32| {
            let mut m = Match::default();
            m.red.seed = Some(red);
            m.blue.seed = Some(blue);
            m
        };

        assert_eq!(competitor_count(&[seeded(1, 2), seeded(1, 3)]), 3);
        // A high seed implies entrants that never show up in a recorded match
        assert_eq!(competitor_count(&[seeded(1, 6)]), 6);
        assert_eq!(competitor_count(&[Match::default(), Match::default()]), 3);
        assert_eq!(competitor_count(&[]), 1);
    }

    #[test]
    fn test_views_and_reorientation() {
        let root = Match {
            is_final: true,
            ..Default::default()
        };
        let child = Match::default();
        let bracket = Bracket::new(
            LevelOrder::FinalFirst,
            vec![
                vec![Cow::Borrowed(&root)],
                vec![Cow::Borrowed(&child), Cow::Owned(Match::default())],
            ],
            0,
        );

        assert_eq!(bracket.final_first()[0].len(), 1);
        assert_eq!(bracket.earliest_first()[0].len(), 2);
        assert!(bracket.final_match().unwrap().is_final);

        let flipped = bracket.into_order(LevelOrder::EarliestFirst);
        assert_eq!(flipped.levels()[0].len(), 2);
        assert!(flipped.final_match().unwrap().is_final);

        let stats = flipped.stats();
        assert_eq!(stats.levels, 2);
        assert_eq!(stats.matches, 2);
        assert_eq!(stats.byes, 1);
    }

    #[test]
    fn test_unresolvable_has_single_empty_level() {
        let bracket = Bracket::unresolvable(3);

        assert_eq!(bracket.levels().len(), 1);
        assert!(bracket.levels()[0].is_empty());
        assert!(!bracket.is_resolvable());
        assert_eq!(bracket.stats().unplaced, 3);
        assert_eq!(bracket.stats().levels, 0);
    }
}
