use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient;

/// One of the two sides of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    Red,
    Blue,
}

impl Corner {
    pub const BOTH: [Corner; 2] = [Corner::Red, Corner::Blue];

    pub fn as_str(&self) -> &str {
        match self {
            Corner::Red => "red",
            Corner::Blue => "blue",
        }
    }
}

/// A competitor as seeded into a division
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    /// `None` means no database record (unranked)
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub team: String,
    #[serde(default, deserialize_with = "lenient::seed")]
    pub seed: Option<u32>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub end_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub match_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub end_match_count: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub note: String,
}

/// A competitor's slot in one match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSide {
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub bye: bool,
    #[serde(default, deserialize_with = "lenient::seed")]
    pub seed: Option<u32>,
    /// `None` while the match is undecided
    #[serde(default, deserialize_with = "lenient::optional_flag")]
    pub loser: Option<bool>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub team: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub note: String,
    /// Where this side's winner or loser advances, e.g. "Winner of fight 3, Mat 2"
    #[serde(default, deserialize_with = "lenient::text")]
    pub next_description: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub ordinal: Option<i64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub expected: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::float")]
    pub handicap: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub weight: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub medal: String,
    #[serde(default, deserialize_with = "lenient::int")]
    pub match_count: Option<i64>,
}

impl MatchSide {
    /// Seed of a real (non-bye) competitor
    pub fn live_seed(&self) -> Option<u32> {
        if self.bye { None } else { self.seed }
    }
}

/// Single-elimination match record for one division
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Explicit bracket position, only in sequence-numbered feeds
    #[serde(default, deserialize_with = "lenient::int")]
    pub match_num: Option<i64>,
    #[serde(rename = "final", default, deserialize_with = "lenient::flag")]
    pub is_final: bool,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub when: Option<DateTime<Utc>>,
    #[serde(rename = "where", default, deserialize_with = "lenient::optional_text")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub fight_num: Option<i64>,
    #[serde(default)]
    pub red: MatchSide,
    #[serde(default)]
    pub blue: MatchSide,
}

impl Match {
    pub fn side(&self, corner: Corner) -> &MatchSide {
        match corner {
            Corner::Red => &self.red,
            Corner::Blue => &self.blue,
        }
    }

    /// True when either side is a real competitor holding `seed`
    pub fn has_seed(&self, seed: u32) -> bool {
        self.seeds().any(|s| s == seed)
    }

    pub fn seeds(&self) -> impl Iterator<Item = u32> + '_ {
        [&self.red, &self.blue]
            .into_iter()
            .filter_map(MatchSide::live_seed)
    }

    pub fn is_bye(&self) -> bool {
        self.red.bye || self.blue.bye
    }

    /// Short label for logs, e.g. "fight 12, Mat 2" or "#7"
    pub fn label(&self) -> String {
        match (self.fight_num, self.venue.as_deref(), self.match_num) {
            (Some(fight), Some(venue), _) => format!("fight {}, {}", fight, venue),
            (Some(fight), None, _) => format!("fight {}", fight),
            (None, _, Some(num)) => format!("#{}", num),
            _ => format!("{} vs {}", self.red.name, self.blue.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_deserializes_feed_record() {
        let json = r#"{
            "final": true,
            "when": "2024-03-09T15:30:00Z",
            "where": "Mat 1",
            "fightNum": "42",
            "matchNum": null,
            "red": {"id": 7, "seed": 1, "name": "Ana", "team": "Alpha", "loser": false,
                    "nextDescription": "", "rating": "1510.5", "handicap": null},
            "blue": {"id": null, "seed": "2", "name": "Bia", "loser": true, "medal": "silver"}
        }"#;

        let parsed: Match = serde_json::from_str(json).unwrap();

        assert!(parsed.is_final);
        assert_eq!(parsed.fight_num, Some(42));
        assert_eq!(parsed.venue.as_deref(), Some("Mat 1"));
        assert_eq!(parsed.match_num, None);
        assert_eq!(parsed.red.rating, Some(1510.5));
        assert_eq!(parsed.red.loser, Some(false));
        assert_eq!(parsed.blue.id, None);
        assert_eq!(parsed.blue.seed, Some(2));
        assert_eq!(parsed.blue.medal, "silver");
    }

    #[test]
    fn test_missing_sides_default_to_empty() {
        let parsed: Match = serde_json::from_str("{}").unwrap();

        assert!(!parsed.is_final);
        assert!(!parsed.red.bye);
        assert!(!parsed.blue.bye);
        assert_eq!(parsed.seeds().count(), 0);
    }

    #[test]
    fn test_bye_sides_do_not_contribute_seeds() {
        let mut m = Match::default();
        m.red.seed = Some(4);
        m.blue.seed = Some(5);
        m.blue.bye = true;

        assert!(m.has_seed(4));
        assert!(!m.has_seed(5));
        assert!(m.is_bye());
    }

    #[test]
    fn test_serializes_keyword_fields_with_feed_names() {
        let m = Match {
            is_final: true,
            venue: Some("Mat 3".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&m).unwrap();

        assert_eq!(value["final"], true);
        assert_eq!(value["where"], "Mat 3");
    }
}
