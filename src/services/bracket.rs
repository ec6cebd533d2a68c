use log::{info, warn};
use serde::Serialize;

use crate::bracket::{self, competitor_count, level_count, Bracket, BuildMode, BuildOptions};
use crate::config::settings::AppConfig;
use crate::domain::{DivisionCollection, DivisionSnapshot};

/// Overview of one division, computed without building its bracket
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionSummary {
    pub name: String,
    pub matches: usize,
    pub competitors: usize,
    pub mode: BuildMode,
    pub has_final: bool,
    pub expected_levels: usize,
}

/// Builds brackets for stored or submitted divisions using the configured policy
#[derive(Debug, Clone)]
pub struct BracketService {
    config: AppConfig,
}

impl BracketService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Configured options, with an optional per-call fallback override
    pub fn options(&self, allow_date_order_fallback: Option<bool>) -> BuildOptions {
        let options = self.config.bracket.build_options();
        match allow_date_order_fallback {
            Some(allow) => options.with_fallback(allow),
            None => options,
        }
    }

    pub fn build<'a>(
        &self,
        division: &'a DivisionSnapshot,
        mode: BuildMode,
        allow_date_order_fallback: Option<bool>,
    ) -> Bracket<'a> {
        let options = self.options(allow_date_order_fallback);
        let resolved = mode.resolve(&division.matches);
        let bracket = bracket::build_bracket(&division.matches, resolved, &options);

        self.log_result(division, resolved, &bracket);
        bracket
    }

    pub fn summarize(&self, collection: &DivisionCollection) -> Vec<DivisionSummary> {
        collection.iter().map(summarize_division).collect()
    }

    fn log_result(&self, division: &DivisionSnapshot, mode: BuildMode, bracket: &Bracket) {
        let stats = bracket.stats();

        if !bracket.is_resolvable() {
            warn!(
                "  → {}: no final among {} matches, bracket not available yet",
                division.name,
                division.matches.len()
            );
            return;
        }

        info!(
            "  → {} ({}): {} levels, {} matches, {} byes, {} unplaced",
            division.name,
            mode.as_str(),
            stats.levels,
            stats.matches,
            stats.byes,
            stats.unplaced
        );
    }
}

fn summarize_division(division: &DivisionSnapshot) -> DivisionSummary {
    let mode = BuildMode::Auto.resolve(&division.matches);
    let competitors = count_competitors(division);

    DivisionSummary {
        name: division.name.clone(),
        matches: division.matches.len(),
        competitors,
        mode,
        has_final: division.final_match().is_some(),
        expected_levels: level_count(competitor_count(&division.matches)),
    }
}

/// Listed competitors, or the bracket size implied by the matches
fn count_competitors(division: &DivisionSnapshot) -> usize {
    match (division.competitors.len(), division.matches.len()) {
        (0, 0) => 0,
        (0, _) => competitor_count(&division.matches),
        (listed, _) => listed,
    }
}
