//! User configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "taskline";
pub const TASKS_FILE_NAME: &str = "tasks.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the task file lives; defaults to tasks.json in the app dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

pub fn get_app_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?;
    Ok(base.join(APP_DIR_NAME))
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

/// Resolve the task file path for this invocation.
///
/// Precedence: `--file` flag (or TASKLINE_FILE env, handled by clap) over
/// the config file's `tasks_file` over the app-dir default.
pub fn resolve_tasks_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    let config = Config::load()?;
    if let Some(path) = config.tasks_file {
        return Ok(path);
    }

    Ok(get_app_dir()?.join(TASKS_FILE_NAME))
}
