//! Bracket reconstruction engine.
//!
//! Turns the flat, possibly incomplete match list of one division into its
//! rounds. Everything here is a pure function of the input slice: nothing is
//! cached between calls and input matches are only ever borrowed.

pub mod bye;
pub mod heuristic;
pub mod levels;
pub mod options;
pub mod resolver;
pub mod sequential;

pub use bye::{create_bye, ByeEntrant};
pub use heuristic::build_heuristic;
pub use levels::{competitor_count, level_count, Bracket, BracketStats, Level, LevelOrder};
pub use options::{BuildMode, BuildOptions, DEFAULT_BYE_THRESHOLD};
pub use resolver::{references, references_side, DescriptionMatcher};
pub use sequential::build_sequential;

use crate::domain::Match;

/// True when any match carries an explicit sequence number
pub fn has_sequence_numbers(matches: &[Match]) -> bool {
    matches.iter().any(|m| m.match_num.is_some())
}

impl BuildMode {
    /// Resolves `Auto` against the data
    pub fn resolve(self, matches: &[Match]) -> BuildMode {
        match self {
            BuildMode::Auto if has_sequence_numbers(matches) => BuildMode::Sequential,
            BuildMode::Auto => BuildMode::Heuristic,
            explicit => explicit,
        }
    }
}

pub fn build_bracket<'a>(
    matches: &'a [Match],
    mode: BuildMode,
    options: &BuildOptions,
) -> Bracket<'a> {
    match mode.resolve(matches) {
        BuildMode::Sequential => build_sequential(matches),
        _ => build_heuristic(matches, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn division() -> Vec<Match> {
        let mut final_match = Match {
            is_final: true,
            ..Default::default()
        };
        final_match.red.seed = Some(1);
        final_match.blue.seed = Some(2);

        let mut semi = Match::default();
        semi.red.seed = Some(1);
        semi.blue.seed = Some(3);

        vec![semi, final_match]
    }

    #[test]
    fn test_auto_mode_detection() {
        let mut matches = division();
        assert_eq!(BuildMode::Auto.resolve(&matches), BuildMode::Heuristic);

        matches[0].match_num = Some(2);
        assert_eq!(BuildMode::Auto.resolve(&matches), BuildMode::Sequential);
        assert_eq!(BuildMode::Heuristic.resolve(&matches), BuildMode::Heuristic);
    }

    #[test]
    fn test_dispatch_orders() {
        let mut matches = division();

        let heuristic = build_bracket(&matches, BuildMode::Auto, &BuildOptions::default());
        assert_eq!(heuristic.order(), LevelOrder::EarliestFirst);
        assert!(heuristic.final_match().unwrap().is_final);

        matches[0].match_num = Some(2);
        matches[1].match_num = Some(1);
        let sequential = build_bracket(&matches, BuildMode::Auto, &BuildOptions::default());
        assert_eq!(sequential.order(), LevelOrder::FinalFirst);
        assert!(sequential.final_match().unwrap().is_final);
    }
}
