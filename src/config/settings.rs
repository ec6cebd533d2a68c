use log::warn;
use std::path::PathBuf;

use crate::bracket::{BuildOptions, DescriptionMatcher, DEFAULT_BYE_THRESHOLD};

#[derive(Debug, Clone)]
pub struct BracketSettings {
    pub allow_date_order_fallback: bool,
    pub bye_threshold: usize,
    /// Advancement phrases beyond the built-in English and Portuguese ones
    pub extra_description_templates: Vec<String>,
}

impl Default for BracketSettings {
    fn default() -> Self {
        Self {
            allow_date_order_fallback: false,
            bye_threshold: DEFAULT_BYE_THRESHOLD,
            extra_description_templates: Vec::new(),
        }
    }
}

impl BracketSettings {
    pub fn build_options(&self) -> BuildOptions {
        let matcher = self
            .extra_description_templates
            .iter()
            .fold(DescriptionMatcher::default(), |matcher, template| {
                matcher.with_template(template)
            });

        BuildOptions {
            allow_date_order_fallback: self.allow_date_order_fallback,
            bye_threshold: self.bye_threshold,
            matcher,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub snapshot_dir: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            snapshot_dir: PathBuf::from("snapshots"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bracket: BracketSettings,
    pub store: StoreSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            bracket: BracketSettings::default(),
            store: StoreSettings::default(),
        }
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::new();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("BRACKET_DATE_FALLBACK") {
            match parse_flag(&raw) {
                Some(flag) => self.bracket.allow_date_order_fallback = flag,
                None => warn!("Ignoring BRACKET_DATE_FALLBACK={:?}: expected a boolean", raw),
            }
        }

        if let Some(raw) = lookup("BRACKET_BYE_THRESHOLD") {
            match raw.trim().parse::<usize>() {
                Ok(threshold) => self.bracket.bye_threshold = threshold,
                Err(_) => warn!("Ignoring BRACKET_BYE_THRESHOLD={:?}: expected a count", raw),
            }
        }

        if let Some(raw) = lookup("BRACKET_DESCRIPTION_TEMPLATES") {
            self.bracket.extra_description_templates = split_templates(&raw);
        }

        if let Some(dir) = lookup("SNAPSHOT_DIR").filter(|d| !d.trim().is_empty()) {
            self.store.snapshot_dir = PathBuf::from(dir);
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn split_templates(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
