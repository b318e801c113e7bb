use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Task;

/// Read a task snapshot: the JSON array served by `GET /task`.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read task snapshot at {}", path.display()))?;
    let tasks = parse_tasks(&raw)
        .with_context(|| format!("Invalid task snapshot at {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = tasks.len(), "loaded task snapshot");
    Ok(tasks)
}

pub fn parse_tasks(raw: &str) -> Result<Vec<Task>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(raw)?)
}
