use colored::Colorize;
use std::fmt::Write as _;

use crate::bracket::Bracket;
use crate::domain::{Match, MatchSide};
use crate::services::bracket::DivisionSummary;

/// Round-by-round listing of a bracket, earliest round first
pub fn render_bracket(division: &str, bracket: &Bracket) -> String {
    let mut out = String::new();
    let stats = bracket.stats();
    let _ = writeln!(out, "{}", format!("== {}", division).bold());

    if !bracket.is_resolvable() {
        let _ = writeln!(out, "  {}", "No bracket available yet".yellow());
        return out;
    }

    let rounds = bracket.earliest_first();
    for (index, round) in rounds.iter().enumerate() {
        let _ = writeln!(out, "{}", round_label(index, rounds.len()).cyan());
        for entry in round.iter() {
            let _ = writeln!(out, "  {}", render_entry(entry));
        }
    }

    if stats.unplaced > 0 {
        let _ = writeln!(
            out,
            "{}",
            format!("  ({} matches could not be placed)", stats.unplaced).dimmed()
        );
    }
    out
}

pub fn render_summaries(summaries: &[DivisionSummary]) -> String {
    let mut out = String::new();
    for summary in summaries {
        let status = if summary.has_final {
            "final".green()
        } else {
            "no final".yellow()
        };
        let _ = writeln!(
            out,
            "{}  {} matches, {} competitors, {} rounds, {} [{}]",
            summary.name.bold(),
            summary.matches,
            summary.competitors,
            summary.expected_levels,
            summary.mode.as_str(),
            status
        );
    }
    out
}

/// "Final", "Semifinals", "Quarterfinals", then "Round N" counted from the start
fn round_label(index: usize, total: usize) -> String {
    match total - index {
        1 => "Final".to_string(),
        2 => "Semifinals".to_string(),
        3 => "Quarterfinals".to_string(),
        _ => format!("Round {}", index + 1),
    }
}

fn render_entry(entry: &Match) -> String {
    if entry.is_bye() {
        let advancing = if entry.red.bye { &entry.blue } else { &entry.red };
        return format!("{} {}", "BYE".dimmed(), render_side(advancing));
    }

    format!(
        "{} {}  vs  {}",
        format!("[{}]", entry.label()).dimmed(),
        render_side(&entry.red),
        render_side(&entry.blue)
    )
}

fn render_side(side: &MatchSide) -> String {
    if side.bye {
        return "-".dimmed().to_string();
    }

    let seed = side
        .seed
        .map(|s| format!("({}) ", s))
        .unwrap_or_default();
    let name = if side.name.is_empty() { "TBD" } else { side.name.as_str() };
    let rendered = format!("{}{}", seed, name);

    match side.loser {
        Some(false) => rendered.green().to_string(),
        Some(true) => rendered.red().to_string(),
        None => rendered,
    }
}
