//! Decides whether one match feeds a side of another.
//!
//! Seeds are the primary link: a competitor keeps the same seed in every
//! match of a division. A side's free-text advancement note ("Winner of
//! fight 3, Mat 2") is a second, independent link, compared against the
//! candidate's fight number and venue whether or not the side is seeded.

use log::{trace, warn};
use std::sync::LazyLock;

use crate::domain::{Corner, Match, MatchSide};

pub const FIGHT_PLACEHOLDER: &str = "{fight}";
pub const WHERE_PLACEHOLDER: &str = "{where}";

/// Built-in advancement phrases (English, Portuguese)
pub const DEFAULT_TEMPLATES: [&str; 2] = ["of fight {fight}, {where}", "da luta {fight}, {where}"];

static DEFAULT_MATCHER: LazyLock<DescriptionMatcher> = LazyLock::new(DescriptionMatcher::default);

/// Case-insensitive suffix matcher for next-round descriptions.
///
/// Each template must contain both `{fight}` and `{where}`; a description
/// matches when it ends with any template filled in with the candidate's
/// fight number and venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionMatcher {
    templates: Vec<String>,
}

impl DescriptionMatcher {
    pub fn new<I, S>(templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matcher = Self {
            templates: Vec::new(),
        };
        for template in templates {
            matcher.add_template(template.as_ref());
        }
        matcher
    }

    pub fn with_template(mut self, template: &str) -> Self {
        self.add_template(template);
        self
    }

    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    pub fn matches(&self, description: &str, fight_num: i64, venue: &str) -> bool {
        if description.trim().is_empty() {
            return false;
        }

        let description = description.to_lowercase();
        let fight = fight_num.to_string();
        let venue = venue.to_lowercase();

        self.templates
            .iter()
            .any(|template| description.ends_with(&fill_template(template, &fight, &venue)))
    }

    fn add_template(&mut self, template: &str) {
        let template = template.trim().to_lowercase();
        if !is_valid_template(&template) {
            warn!("Ignoring description template without placeholders: {:?}", template);
            return;
        }
        if !self.templates.contains(&template) {
            self.templates.push(template);
        }
    }
}

impl Default for DescriptionMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATES)
    }
}

fn is_valid_template(template: &str) -> bool {
    template.contains(FIGHT_PLACEHOLDER) && template.contains(WHERE_PLACEHOLDER)
}

fn fill_template(template: &str, fight: &str, venue: &str) -> String {
    template
        .replace(FIGHT_PLACEHOLDER, fight)
        .replace(WHERE_PLACEHOLDER, venue)
}

/// Does `child` feed the `corner` side of `parent`?
pub fn references_side(
    parent: &Match,
    corner: Corner,
    child: &Match,
    matcher: &DescriptionMatcher,
) -> bool {
    let side = parent.side(corner);
    let linked = seed_links(side, child) || description_links(side, child, matcher);

    if linked {
        trace!(
            "{} side of {} is fed by {}",
            corner.as_str(),
            parent.label(),
            child.label()
        );
    }
    linked
}

/// `references_side` with the built-in phrase templates
pub fn references(parent: &Match, corner: Corner, child: &Match) -> bool {
    references_side(parent, corner, child, &DEFAULT_MATCHER)
}

fn seed_links(side: &MatchSide, child: &Match) -> bool {
    side.live_seed().is_some_and(|seed| child.has_seed(seed))
}

fn description_links(side: &MatchSide, child: &Match, matcher: &DescriptionMatcher) -> bool {
    match (child.fight_num, child.venue.as_deref()) {
        (Some(fight), Some(venue)) => matcher.matches(&side.next_description, fight, venue),
        _ => false,
    }
}

/// Position of the first pool entry feeding `corner` of `parent`
pub fn find_child(
    parent: &Match,
    corner: Corner,
    pool: &[&Match],
    matcher: &DescriptionMatcher,
) -> Option<usize> {
    pool.iter()
        .position(|candidate| references_side(parent, corner, candidate, matcher))
}
