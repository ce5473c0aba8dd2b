//! Catalog browsing commands: `search`, `quote` and `advice`.

use std::io::Write;
use std::str::FromStr;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use staysuite_core::{
    AdviceProvider, Category, DEFAULT_NIGHTS, FallbackAdvisor, SearchQuery, StayQuote,
};

use crate::{
    ARG_CATALOG, ARG_CATEGORY, ARG_LISTING, ARG_LOCATION, ARG_NIGHTS, CliError,
    ENV_ADVICE_LISTING, ENV_QUOTE_LISTING, find_listing, load_catalog, write_json,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "search",
    about = "List catalog entries matching a location and category"
)]
#[ortho_config(prefix = "STAYSUITE")]
pub(crate) struct SearchArgs {
    /// Case-insensitive part of the location; "All Locations" matches all.
    #[arg(long = ARG_LOCATION, value_name = "text")]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// Category to keep (Luxury, Boutique, Resort or Business).
    #[arg(long = ARG_CATEGORY, value_name = "name")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// Path to a JSON listing catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

impl SearchArgs {
    pub(crate) fn query(&self) -> Result<SearchQuery, CliError> {
        let category = self
            .category
            .as_deref()
            .map(Category::from_str)
            .transpose()?;
        Ok(SearchQuery {
            location: self.location.clone(),
            category,
        })
    }
}

/// CLI arguments for the `quote` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "quote", about = "Price a stay at a listing")]
#[ortho_config(prefix = "STAYSUITE")]
pub(crate) struct QuoteArgs {
    /// Identifier of the listing to quote.
    #[arg(long = ARG_LISTING, value_name = "id")]
    #[serde(default)]
    pub(crate) listing: Option<String>,
    /// Number of nights; defaults to three.
    #[arg(long = ARG_NIGHTS, value_name = "count")]
    #[serde(default)]
    pub(crate) nights: Option<u32>,
    /// Path to a JSON listing catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

/// CLI arguments for the `advice` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "advice", about = "Show destination advice for a listing")]
#[ortho_config(prefix = "STAYSUITE")]
pub(crate) struct AdviceArgs {
    /// Identifier of the listing.
    #[arg(long = ARG_LISTING, value_name = "id")]
    #[serde(default)]
    pub(crate) listing: Option<String>,
    /// Path to a JSON listing catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

pub(crate) fn run_search(args: &SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    execute_search(&merged, writer)
}

pub(crate) fn execute_search(args: &SearchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let query = args.query()?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    write_json(writer, &catalog.search(&query))
}

pub(crate) fn run_quote(args: &QuoteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    execute_quote(&merged, writer)
}

pub(crate) fn execute_quote(args: &QuoteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let id = args.listing.as_deref().ok_or(CliError::MissingArgument {
        field: ARG_LISTING,
        env: ENV_QUOTE_LISTING,
    })?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    let listing = find_listing(&catalog, id)?;
    let quote = StayQuote::for_listing(listing, args.nights.unwrap_or(DEFAULT_NIGHTS))?;
    write_json(writer, &quote)
}

pub(crate) fn run_advice(args: &AdviceArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    execute_advice(&merged, &FallbackAdvisor, writer)
}

pub(crate) fn execute_advice(
    args: &AdviceArgs,
    advisor: &dyn AdviceProvider,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let id = args.listing.as_deref().ok_or(CliError::MissingArgument {
        field: ARG_LISTING,
        env: ENV_ADVICE_LISTING,
    })?;
    let catalog = load_catalog(args.catalog.as_deref())?;
    let listing = find_listing(&catalog, id)?;
    write_json(writer, &advisor.advise(listing))
}
