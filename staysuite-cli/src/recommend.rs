//! Recommend command implementation for the StaySuite CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use staysuite_core::PreferenceProfile;
use staysuite_scorer::{PreferenceScorer, RECOMMENDATION_LIMIT, RuleTable, load_rule_table, rank};

use crate::{ARG_CATALOG, ARG_PREFERENCES, ARG_RULES, CliError, load_catalog, write_json};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank the catalog against a comma-separated list of \
                 preference tags and print up to three listings with their \
                 scores. The rule table and catalog default to the built-in \
                 ones and can be replaced with JSON files.",
    about = "Recommend listings for a set of preference tags"
)]
#[ortho_config(prefix = "STAYSUITE")]
pub(crate) struct RecommendArgs {
    /// Comma-separated preference tags, e.g. "Business,Luxury". Defaults to
    /// the demo user's preferences.
    #[arg(long = ARG_PREFERENCES, value_name = "tags")]
    #[serde(default)]
    pub(crate) preferences: Option<String>,
    /// Path to a JSON listing catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to a JSON rule table.
    #[arg(long = ARG_RULES, value_name = "path")]
    #[serde(default)]
    pub(crate) rules: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    fn to_config(&self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(RecommendConfig::from(merged))
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) profile: PreferenceProfile,
    pub(crate) catalog: Option<Utf8PathBuf>,
    pub(crate) rules: Option<Utf8PathBuf>,
}

impl From<RecommendArgs> for RecommendConfig {
    fn from(args: RecommendArgs) -> Self {
        let profile = args.preferences.as_deref().map_or_else(
            || {
                log::info!("no --{ARG_PREFERENCES} given; using the demo profile");
                PreferenceProfile::demo()
            },
            PreferenceProfile::parse_list,
        );
        Self {
            profile,
            catalog: args.catalog,
            rules: args.rules,
        }
    }
}

/// A recommended listing as printed by the CLI.
#[derive(Debug, Serialize)]
struct ScoredListing<'a> {
    id: &'a str,
    name: &'a str,
    location: &'a str,
    score: u32,
}

pub(crate) fn run_recommend(args: &RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.to_config()?;
    execute_recommend(&config, writer)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let catalog = load_catalog(config.catalog.as_deref())?;
    let table = match config.rules.as_deref() {
        Some(path) => load_rule_table(path)?,
        None => RuleTable::default(),
    };
    let scorer = PreferenceScorer::new(table);
    let picks: Vec<ScoredListing<'_>> = rank(&scorer, &config.profile, catalog.listings())
        .into_iter()
        .take(RECOMMENDATION_LIMIT)
        .map(|r| ScoredListing {
            id: &r.listing.id,
            name: &r.listing.name,
            location: &r.listing.location,
            score: r.score,
        })
        .collect();
    log::info!(
        "recommending {} listings for {:?}",
        picks.len(),
        config.profile.tags()
    );
    write_json(writer, &picks)
}
