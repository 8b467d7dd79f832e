use std::path::{Path, PathBuf};
use std::sync::Arc;

use abp_core::AbpCore;
use abp_core::config::core_config::AppConfig;
use abp_core::provider::environment::StaticEnvironmentProvider;
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "config/config.yml";

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    /// print the fetched document indented
    pub pretty_output: Option<bool>,
}

/// Default config file (when present in the working directory) followed by
/// the explicitly passed ones.
pub fn config_files(explicit: Vec<PathBuf>) -> Vec<PathBuf> {
    config_files_in(Path::new("."), explicit)
}

/// Same as [`config_files`], with the default file looked up under `base`.
pub fn config_files_in(base: &Path, explicit: Vec<PathBuf>) -> Vec<PathBuf> {
    let default_file = base.join(DEFAULT_CONFIG_FILE);

    let mut files = Vec::with_capacity(explicit.len() + 1);
    if default_file.is_file() {
        files.push(default_file);
    } else {
        tracing::debug!(path = %default_file.display(), "Default config file not found, skipping");
    }
    files.extend(explicit);
    files
}

pub fn load_config(files: &[PathBuf]) -> anyhow::Result<AppConfig<ClientConfig>> {
    AppConfig::from_files(files).context("Failed creating config")
}

/// Fetches the application configuration once and renders it as JSON.
pub async fn fetch_and_render(app_config: AppConfig<ClientConfig>) -> anyhow::Result<String> {
    let pretty = app_config.app.pretty_output.unwrap_or(true);
    let core = AbpCore::new(
        Arc::new(StaticEnvironmentProvider::new(app_config.environment)),
        None,
    );

    let configuration = core
        .application_configuration_service
        .get_configuration()
        .await
        .context("Failed fetching application configuration")?;

    tracing::info!(
        authenticated = configuration.is_authenticated(),
        culture = ?configuration.current_culture(),
        "Application configuration fetched"
    );

    let rendered = if pretty {
        serde_json::to_string_pretty(&configuration)?
    } else {
        serde_json::to_string(&configuration)?
    };

    Ok(rendered)
}
