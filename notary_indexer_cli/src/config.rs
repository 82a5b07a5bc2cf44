// SPDX-License-Identifier: AGPL-3.0-or-later

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{crate_version, Parser};
use colored::Colorize;
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use notary_indexer::Configuration;
use serde::{Deserialize, Serialize};

use crate::utils::absolute_path;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log verbosity, scoped to the indexer crates.
const DEFAULT_LOG_LEVEL: &str = "info";

type ConfigFilePath = Option<PathBuf>;

/// Settings of the command line program which are not part of the node configuration.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProgramOptions {
    /// JSON-lines file of logs which get ingested before serving.
    pub replay: Option<PathBuf>,

    /// Log verbosity.
    pub log_level: Option<String>,
}

impl ProgramOptions {
    /// Returns the logging filter, scoped to the indexer crates unless a full filter was given.
    pub fn log_filter(&self) -> String {
        let level = self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);

        if level.contains('=') {
            level.to_owned()
        } else {
            format!("notary_indexer={level},notary_indexer_cli={level}")
        }
    }
}

/// Get configuration from 1. .toml file, 2. environment variables and 3. command line arguments
/// (in that order, meaning that later configuration sources take precedence over the earlier
/// ones).
///
/// The node configuration still gets validated when the node starts.
pub fn load_config() -> Result<(ConfigFilePath, Configuration, ProgramOptions)> {
    let cli = Cli::parse();

    let config_file_path: ConfigFilePath = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' does not exist", path.display());
            }

            Some(path.clone())
        }
        None => try_determine_config_file_path()?,
    };

    let figment = build_figment(config_file_path.as_ref(), cli);
    let config: Configuration = figment.extract()?;
    let options: ProgramOptions = figment.extract()?;

    Ok((config_file_path, config, options))
}

fn build_figment(config_file_path: Option<&PathBuf>, cli: Cli) -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Configuration::default()));
    if let Some(path) = config_file_path {
        figment = figment.merge(Toml::file(path));
    }

    figment
        .merge(Env::raw().only(&[
            "DATABASE_URL",
            "DATABASE_MAX_CONNECTIONS",
            "HTTP_PORT",
            "CONTRACT_ADDRESS",
            "BUS_CAPACITY",
            "REPLAY",
            "LOG_LEVEL",
        ]))
        .merge(Serialized::defaults(cli))
}

/// Configuration derived from command line arguments.
///
/// All arguments are optional and don't get serialized to Figment when they're None, so unset
/// arguments never overwrite values from the config file or environment.
#[derive(Parser, Serialize, Debug, Default)]
#[command(
    name = "notary-indexer",
    about = "Indexer for the logs of a document notarization contract",
    long_about = None,
    version
)]
struct Cli {
    /// Path to an optional "config.toml" file for further configuration.
    ///
    /// When not set the program will try to find a `config.toml` file in the same folder the
    /// program is executed in and otherwise in the regarding operation systems XDG config
    /// directory ("$HOME/.config/notary-indexer/config.toml" on Linux).
    #[arg(short = 'c', long, value_name = "PATH")]
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<PathBuf>,

    /// URL / connection string to PostgreSQL or SQLite database. Defaults to an in-memory SQLite
    /// database.
    ///
    /// WARNING: By default nothing is persisted after shutdown.
    #[arg(short = 'd', long, value_name = "CONNECTION_STRING")]
    #[serde(skip_serializing_if = "Option::is_none")]
    database_url: Option<String>,

    /// Maximum number of database connections. Defaults to 32.
    #[arg(long, value_name = "NUM")]
    #[serde(skip_serializing_if = "Option::is_none")]
    database_max_connections: Option<u32>,

    /// HTTP port serving the log ingest route and the GraphQL API. Defaults to 2020.
    #[arg(short = 'p', long, value_name = "PORT")]
    #[serde(skip_serializing_if = "Option::is_none")]
    http_port: Option<u16>,

    /// Address of the notary contract. Logs of other contracts get ignored.
    ///
    /// When not set, logs of any contract are indexed.
    #[arg(short = 'a', long, value_name = "ADDRESS")]
    #[serde(skip_serializing_if = "Option::is_none")]
    contract_address: Option<String>,

    /// JSON-lines file with one log per line, ingested in file order before the node starts
    /// serving. Any invalid line aborts the start.
    #[arg(short = 'r', long, value_name = "PATH")]
    #[serde(skip_serializing_if = "Option::is_none")]
    replay: Option<PathBuf>,

    /// Set log verbosity.
    ///
    /// Possible log levels are: ERROR, WARN, INFO, DEBUG, TRACE. They are scoped to the indexer
    /// by default, pass a full filter like "notary_indexer=DEBUG,sqlx=WARN" for other scopes.
    #[arg(short = 'l', long, value_name = "LEVEL")]
    #[serde(skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
}

fn try_determine_config_file_path() -> Result<Option<PathBuf>> {
    let mut current_dir = std::env::current_dir()?;
    current_dir.push(CONFIG_FILE_NAME);

    let mut candidates = vec![current_dir];

    if let Some(dirs) = ProjectDirs::from("", "", "notary-indexer") {
        let mut xdg_config_dir = dirs.config_dir().to_path_buf();
        xdg_config_dir.push(CONFIG_FILE_NAME);
        candidates.push(xdg_config_dir);
    }

    Ok(candidates.into_iter().find(|path| path.exists()))
}

/// Human readable description of the database behind the url.
fn describe_database(database_url: &str) -> String {
    if database_url == "sqlite::memory:" || database_url.contains("mode=memory") {
        "memory (data is not persisted)".into()
    } else if database_url.starts_with("sqlite:") {
        format!("SQLite: {}", database_url)
    } else {
        "PostgreSQL".into()
    }
}

/// Returns the startup banner with the effective configuration.
pub fn print_config(
    config_file_path: ConfigFilePath,
    config: &Configuration,
    options: &ProgramOptions,
) -> Result<String> {
    let mut banner = format!("{} v{}\n\n", "notary-indexer".underline(), crate_version!());

    match config_file_path {
        Some(path) => {
            let path = absolute_path(path)?;
            banner += &format!("Loading config file from {}\n", path.display().to_string().blue());
        }
        None => banner += "No config file provided\n",
    }

    let contract_address = match &config.contract_address {
        Some(address) => address.clone(),
        None => "any (no contract filter)".into(),
    };

    let replay = match &options.replay {
        Some(path) => absolute_path(path)?.display().to_string(),
        None => "none".into(),
    };

    banner += &format!(
        r"
{}

Contract address: {}
Database URL: {}
HTTP port: {}
Replay: {}
",
        "Configuration".underline(),
        contract_address.blue(),
        describe_database(&config.database_url).blue(),
        config.http_port.to_string().blue(),
        replay.blue(),
    );

    Ok(banner)
}
