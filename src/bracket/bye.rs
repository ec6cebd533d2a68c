use crate::domain::{Match, MatchSide};

/// The competitor who advances without an opponent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ByeEntrant {
    pub id: Option<i64>,
    pub name: String,
    pub team: String,
    pub seed: Option<u32>,
    pub ordinal: Option<i64>,
    pub weight: String,
    pub rating: Option<f64>,
    pub match_count: Option<i64>,
}

impl ByeEntrant {
    pub fn from_side(side: &MatchSide) -> Self {
        Self {
            id: side.id,
            name: side.name.clone(),
            team: side.team.clone(),
            seed: side.seed,
            ordinal: side.ordinal,
            weight: side.weight.clone(),
            rating: side.rating,
            match_count: side.match_count,
        }
    }
}

/// Placeholder match standing in for a missing first-round opponent.
///
/// The entrant occupies the red side; blue is an empty bye slot. No
/// scheduling metadata is set.
pub fn create_bye(entrant: ByeEntrant) -> Match {
    Match {
        match_num: None,
        is_final: false,
        when: None,
        venue: None,
        fight_num: None,
        red: MatchSide {
            id: entrant.id,
            bye: false,
            seed: entrant.seed,
            name: entrant.name,
            team: entrant.team,
            ordinal: entrant.ordinal,
            weight: entrant.weight,
            rating: entrant.rating,
            match_count: entrant.match_count,
            ..Default::default()
        },
        blue: MatchSide {
            bye: true,
            ..Default::default()
        },
    }
}
