use anyhow::{anyhow, Result};
use directories::{BaseDirs, ProjectDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Layered configuration: defaults, TOML files, DESK_* environment
/// variables, then CLI flags (merged last by the caller)
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    /// Portal backend URL
    pub url: Option<String>,
    /// API token override; when unset the stored session token is used
    pub token: Option<String>,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed("DESK_"));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(&mut self, cli_url: Option<String>, cli_token: Option<String>) {
        if let Some(url) = cli_url {
            self.url = Some(url);
        }
        if let Some(token) = cli_token {
            self.token = Some(token);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.is_none() {
            return Err(anyhow!(
                "Portal URL not configured. Set via --url, DESK_URL env var, or config file"
            ));
        }
        Ok(())
    }
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_xdg_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "desk").map(|d| d.config_dir().join("config.toml"))
}

fn get_xdg_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join("desk").join("config.toml"));
    }

    BaseDirs::new().map(|dirs| {
        dirs.home_dir()
            .join(".config")
            .join("desk")
            .join("config.toml")
    })
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join("config.toml"))
}
