use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ViewError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::OnHold => "On Hold",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "on hold" | "on-hold" | "onhold" => Ok(TaskStatus::OnHold),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(ViewError::unknown("status", s)),
        }
    }
}

/// Closed set of priority labels. Ordering is High < Medium < Low, see
/// [`crate::priority::compare`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" | "med" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ViewError::unknown("priority", s)),
        }
    }
}

/// Field the task table is ordered by.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Id,
    Title,
    Status,
    Priority,
    StartDate,
    DueDate,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Status => "status",
            SortField::Priority => "priority",
            SortField::StartDate => "startDate",
            SortField::DueDate => "dueDate",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "status" => Ok(SortField::Status),
            "priority" => Ok(SortField::Priority),
            "startdate" | "start-date" | "start_date" | "start" => Ok(SortField::StartDate),
            "duedate" | "due-date" | "due_date" | "due" => Ok(SortField::DueDate),
            _ => Err(ViewError::unknown("sort field", s)),
        }
    }
}

impl ValueEnum for SortField {
    fn value_variants<'a>() -> &'a [Self] {
        const VARIANTS: [SortField; 6] = [
            SortField::Id,
            SortField::Title,
            SortField::Status,
            SortField::Priority,
            SortField::StartDate,
            SortField::DueDate,
        ];
        &VARIANTS
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        let value = match self {
            SortField::StartDate => {
                clap::builder::PossibleValue::new("start-date").alias("startDate")
            }
            SortField::DueDate => clap::builder::PossibleValue::new("due-date").alias("dueDate"),
            other => clap::builder::PossibleValue::new(other.as_str()),
        };
        Some(value)
    }
}

/// A task record as served by the `/task` resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// The `/task` resource sends `null` for a task saved without a description.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Visibility flags for the task table. Every flag defaults to `true`,
/// which keeps every task; turning a flag off hides that group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub completed: bool,
    pub uncompleted: bool,
    pub started: bool,
    pub not_started: bool,
    pub before_due_date: bool,
    pub overdue: bool,
}

impl FilterCriteria {
    pub fn show_all() -> Self {
        Self {
            completed: true,
            uncompleted: true,
            started: true,
            not_started: true,
            before_due_date: true,
            overdue: true,
        }
    }

    pub fn is_show_all(&self) -> bool {
        *self == Self::show_all()
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::show_all()
    }
}

/// Search text, filter flags and sort field driving one render of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewCriteria {
    pub search: String,
    pub filter: FilterCriteria,
    pub sort: SortField,
}
