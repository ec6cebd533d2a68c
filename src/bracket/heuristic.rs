//! Top-down reconstruction from the final, for feeds without sequence numbers.
//!
//! Starting at the match flagged `final`, each round is built by looking up,
//! for every side of every match in the round above, the match that fed it
//! (see `resolver`). The pool is kept sorted by date, most recent first, so
//! when a competitor appears in several remaining matches the latest one,
//! i.e. the nearest earlier round, is found first.

use log::debug;
use std::borrow::Cow;

use super::bye::{create_bye, ByeEntrant};
use super::levels::{competitor_count, level_count, Bracket, Level, LevelOrder};
use super::options::BuildOptions;
use super::resolver::find_child;
use crate::domain::{Corner, Match};

/// Reconstructs the rounds of one division, earliest round first.
pub fn build_heuristic<'a>(matches: &'a [Match], options: &BuildOptions) -> Bracket<'a> {
    let mut pool = sort_by_date_desc(matches);

    let Some(final_index) = pool.iter().position(|m| m.is_final) else {
        debug!("No final among {} matches; bracket not resolvable", matches.len());
        return Bracket::unresolvable(matches.len());
    };
    let final_match = pool.remove(final_index);

    let byes_allowed = options.byes_allowed(matches.len());
    let expected_levels = level_count(competitor_count(matches));
    let mut levels: Vec<Level<'a>> = vec![vec![Cow::Borrowed(final_match)]];

    while !pool.is_empty() {
        let previous = levels.last().map(Vec::as_slice).unwrap_or_default();

        if !options.allow_date_order_fallback && pool.len() < previous.len() * 2 {
            debug!(
                "Stopping after {} levels: {} matches left, {} needed for a full round",
                levels.len(),
                pool.len(),
                previous.len() * 2
            );
            break;
        }

        let bye_level = byes_allowed && levels.len() + 1 == expected_levels;
        let round = build_round(previous, &mut pool, bye_level, options);

        if round.is_empty() {
            debug!(
                "No further links from level {}; {} matches left unplaced",
                levels.len() - 1,
                pool.len()
            );
            break;
        }
        levels.push(round);
    }

    let unplaced = pool.len();
    levels.reverse();
    Bracket::new(LevelOrder::EarliestFirst, levels, unplaced)
}

/// Builds the round feeding `previous`, consuming matches from `pool`.
fn build_round<'a>(
    previous: &[Cow<'a, Match>],
    pool: &mut Vec<&'a Match>,
    bye_level: bool,
    options: &BuildOptions,
) -> Level<'a> {
    let mut round = Vec::with_capacity(previous.len() * 2);
    let mut missing = 0;

    for parent in previous {
        // Synthesized byes are leaves
        let &Cow::Borrowed(parent) = parent else {
            continue;
        };

        for corner in Corner::BOTH {
            let side = parent.side(corner);
            if side.bye {
                continue;
            }

            match find_child(parent, corner, pool, &options.matcher) {
                Some(index) => round.push(Cow::Borrowed(pool.remove(index))),
                None if bye_level => {
                    debug!("Synthesizing bye for {} side of {}", corner.as_str(), parent.label());
                    round.push(Cow::Owned(create_bye(ByeEntrant::from_side(side))));
                }
                None => missing += 1,
            }
        }
    }

    if missing > 0 && options.allow_date_order_fallback {
        let take = missing.min(pool.len());
        debug!("Filling {} unresolved slots with {} matches in date order", missing, take);
        round.extend(pool.drain(..take).map(Cow::Borrowed));
    }

    round
}

/// Stable sort, most recent first; undated matches go last
fn sort_by_date_desc(matches: &[Match]) -> Vec<&Match> {
    let mut sorted: Vec<&Match> = matches.iter().collect();
    sorted.sort_by(|a, b| b.when.cmp(&a.when));
    sorted
}
