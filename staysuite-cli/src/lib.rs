//! Command-line interface for the StaySuite engine.
//!
//! Each subcommand layers its options from CLI flags, `STAYSUITE_*`
//! environment variables and configuration files via `ortho_config`, runs
//! against the featured catalog or a JSON catalog file, and writes
//! pretty-printed JSON to the supplied writer.
#![forbid(unsafe_code)]

use std::ffi::OsString;
use std::io::{BufReader, Write};

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;
use staysuite_core::{Catalog, Listing};
use staysuite_fs::open_utf8_file;

mod browse;
mod error;
mod recommend;

pub use error::CliError;

use browse::{AdviceArgs, QuoteArgs, SearchArgs};
use recommend::RecommendArgs;

pub(crate) const ARG_PREFERENCES: &str = "preferences";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_RULES: &str = "rules";
pub(crate) const ARG_LOCATION: &str = "location";
pub(crate) const ARG_CATEGORY: &str = "category";
pub(crate) const ARG_LISTING: &str = "listing";
pub(crate) const ARG_NIGHTS: &str = "nights";
pub(crate) const ENV_QUOTE_LISTING: &str = "STAYSUITE_CMDS_QUOTE_LISTING";
pub(crate) const ENV_ADVICE_LISTING: &str = "STAYSUITE_CMDS_ADVICE_LISTING";

/// Run the StaySuite CLI with the current process arguments, writing
/// results to stdout.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, input loading
/// or output fails.
pub fn run() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_with(std::env::args_os(), &mut stdout)
}

/// Run the CLI with explicit arguments (including the binary name) and
/// output writer.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, input loading
/// or output fails.
pub fn run_with<I, T>(args: I, writer: &mut dyn Write) -> Result<(), CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    match cli.command {
        Command::Recommend(cmd) => recommend::run_recommend(&cmd, writer),
        Command::Search(cmd) => browse::run_search(&cmd, writer),
        Command::Quote(cmd) => browse::run_quote(&cmd, writer),
        Command::Advice(cmd) => browse::run_advice(&cmd, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "staysuite",
    about = "Browse, quote and recommend StaySuite hotel listings",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend listings for a set of preference tags.
    Recommend(RecommendArgs),
    /// Filter the catalog by location and category.
    Search(SearchArgs),
    /// Price a stay at a listing.
    Quote(QuoteArgs),
    /// Show destination advice for a listing.
    Advice(AdviceArgs),
}

/// Load the catalog at `path`, or the featured catalog when no path is set.
pub(crate) fn load_catalog(path: Option<&Utf8Path>) -> Result<Catalog, CliError> {
    let Some(catalog_path) = path else {
        return Ok(Catalog::featured());
    };
    require_existing(catalog_path, ARG_CATALOG)?;
    let file = open_utf8_file(catalog_path).map_err(|source| CliError::OpenCatalog {
        path: catalog_path.to_path_buf(),
        source,
    })?;
    let catalog: Catalog =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseCatalog {
                path: catalog_path.to_path_buf(),
                source,
            }
        })?;
    log::info!("loaded {} listings from {catalog_path}", catalog.len());
    Ok(catalog)
}

/// Find a listing by id or report it as unknown.
pub(crate) fn find_listing<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Listing, CliError> {
    catalog.get(id).ok_or_else(|| CliError::UnknownListing { id: id.to_owned() })
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match staysuite_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
