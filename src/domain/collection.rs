use super::snapshot::{DivisionSnapshot, TournamentSnapshot};
use std::collections::BTreeMap;

/// Collection of divisions indexed by name
pub struct DivisionCollection {
    divisions: BTreeMap<String, DivisionSnapshot>,
}

impl DivisionCollection {
    pub fn new() -> Self {
        Self {
            divisions: BTreeMap::new(),
        }
    }

    /// Records for a name seen twice are merged into one division
    pub fn add(&mut self, division: DivisionSnapshot) {
        match self.divisions.get_mut(&division.name) {
            Some(existing) => {
                existing.matches.extend(division.matches);
                existing.competitors.extend(division.competitors);
            }
            None => {
                self.divisions.insert(division.name.clone(), division);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.divisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&DivisionSnapshot> {
        self.divisions.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DivisionSnapshot> {
        self.divisions.values()
    }

    pub fn names(&self) -> Vec<&str> {
        self.divisions.keys().map(String::as_str).collect()
    }
}

impl Default for DivisionCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl From<TournamentSnapshot> for DivisionCollection {
    fn from(tournament: TournamentSnapshot) -> Self {
        let mut collection = Self::new();
        for division in tournament.divisions {
            collection.add(division);
        }
        collection
    }
}
