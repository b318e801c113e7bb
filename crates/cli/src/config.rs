use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::{BaseDirs, ProjectDirs};
use once_cell::sync::Lazy;

use crate::cli::Cli;

static DEFAULT_TASKS_FILE: &str = "tasks.json";
static ENV_DATA_DIR: &str = "TASKVIEW_DATA_DIR";

static PROJECT_DIRS: Lazy<Option<ProjectDirs>> =
    Lazy::new(|| ProjectDirs::from("dev", "taskview", "taskview"));

#[derive(Debug, Clone)]
pub struct AppConfig {
    data_dir: PathBuf,
    tasks_path: PathBuf,
}

impl AppConfig {
    /// Construct [`AppConfig`] by resolving the data directory using the provided override,
    /// environment variables, and platform defaults.
    pub fn discover(data_dir_override: Option<PathBuf>) -> Result<Self> {
        let data_dir = resolve_data_dir(data_dir_override)?;
        Self::from_data_dir(data_dir)
    }

    /// Construct [`AppConfig`] directly from a resolved data directory.
    pub fn from_data_dir(data_dir: PathBuf) -> Result<Self> {
        let tasks_path = data_dir.join(DEFAULT_TASKS_FILE);
        Ok(Self {
            data_dir,
            tasks_path,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Default task snapshot location.
    pub fn tasks_path(&self) -> &Path {
        &self.tasks_path
    }

    /// Snapshot location, preferring an explicit per-command override.
    pub fn tasks_path_or<'a>(&'a self, explicit: Option<&'a Path>) -> &'a Path {
        explicit.unwrap_or(&self.tasks_path)
    }
}

pub fn from_cli(cli: &Cli) -> Result<AppConfig> {
    AppConfig::discover(cli.data_dir.clone())
}

fn resolve_data_dir(data_dir_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_dir_override {
        return Ok(dir);
    }

    if let Ok(env_dir) = env::var(ENV_DATA_DIR) {
        return Ok(PathBuf::from(env_dir));
    }

    if let Some(project) = &*PROJECT_DIRS {
        return Ok(project.data_dir().to_path_buf());
    }

    if let Some(base) = BaseDirs::new() {
        return Ok(base.home_dir().join(".taskview"));
    }

    Ok(env::current_dir()?.join(".taskview"))
}
