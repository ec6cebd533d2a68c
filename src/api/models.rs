use serde::{Deserialize, Serialize};

use crate::bracket::{Bracket, BracketStats, BuildMode, Level, LevelOrder};
use crate::domain::Match;

/// Body of `POST /api/bracket`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketRequest {
    pub matches: Vec<Match>,
    #[serde(default)]
    pub mode: BuildMode,
    pub allow_date_order_fallback: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketResponse<'a> {
    pub order: LevelOrder,
    pub levels: Vec<Level<'a>>,
    pub resolvable: bool,
    pub stats: BracketStats,
}

impl<'a> From<Bracket<'a>> for BracketResponse<'a> {
    /// Responses always list the earliest round first
    fn from(bracket: Bracket<'a>) -> Self {
        let resolvable = bracket.is_resolvable();
        let stats = bracket.stats();
        let bracket = bracket.into_order(LevelOrder::EarliestFirst);

        Self {
            order: bracket.order(),
            resolvable,
            stats,
            levels: bracket.into_levels(),
        }
    }
}

/// One division's bracket, as printed by `build --json`
#[derive(Debug, Serialize)]
pub struct DivisionBracket<'a> {
    pub division: &'a str,
    #[serde(flatten)]
    pub bracket: BracketResponse<'a>,
}

#[derive(Debug, Deserialize)]
pub struct BracketParams {
    pub mode: Option<BuildMode>,
    pub lenient: Option<bool>,
}
