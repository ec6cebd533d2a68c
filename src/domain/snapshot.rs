use serde::{Deserialize, Serialize};

use super::models::{Competitor, Match};

/// Immutable match snapshot for one division
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DivisionSnapshot {
    #[serde(default)]
    pub name: String,
    pub matches: Vec<Match>,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
}

impl DivisionSnapshot {
    pub fn new(name: impl Into<String>, matches: Vec<Match>) -> Self {
        Self {
            name: name.into(),
            matches,
            competitors: Vec::new(),
        }
    }

    pub fn final_match(&self) -> Option<&Match> {
        self.matches.iter().find(|m| m.is_final)
    }
}

/// All divisions of one tournament as fetched from the data service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TournamentSnapshot {
    #[serde(default)]
    pub name: String,
    pub divisions: Vec<DivisionSnapshot>,
}

/// Accepted shapes of a snapshot file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SnapshotFile {
    Tournament(TournamentSnapshot),
    Division(DivisionSnapshot),
    Matches(Vec<Match>),
}

pub const DEFAULT_DIVISION: &str = "default";

impl SnapshotFile {
    pub fn into_tournament(self, fallback_name: &str) -> TournamentSnapshot {
        match self {
            SnapshotFile::Tournament(tournament) => tournament,
            SnapshotFile::Division(division) => TournamentSnapshot {
                name: fallback_name.to_string(),
                divisions: vec![named_division(division)],
            },
            SnapshotFile::Matches(matches) => TournamentSnapshot {
                name: fallback_name.to_string(),
                divisions: vec![DivisionSnapshot::new(DEFAULT_DIVISION, matches)],
            },
        }
    }
}

fn named_division(mut division: DivisionSnapshot) -> DivisionSnapshot {
    if division.name.trim().is_empty() {
        division.name = DEFAULT_DIVISION.to_string();
    }
    division
}
