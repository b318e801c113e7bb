use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::{parse_storage_date, to_storage_format};
use crate::error::{Result, ViewError};
use crate::model::{Priority, Task, TaskStatus};

/// The id dropdown of the edit form: either a new task or an existing id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSelection {
    New,
    Existing(i64),
}

impl FromStr for TaskSelection {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "new" | "New" | "-1" => Ok(TaskSelection::New),
            other => other
                .parse::<i64>()
                .map(TaskSelection::Existing)
                .map_err(|_| ViewError::unknown("task id", s)),
        }
    }
}

/// A dropdown that can keep the existing value instead of choosing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldChoice<T> {
    Copy,
    Set(T),
}

impl<T> Default for FieldChoice<T> {
    fn default() -> Self {
        FieldChoice::Copy
    }
}

impl<T> FieldChoice<T> {
    fn or_existing(self, existing: T) -> T {
        match self {
            FieldChoice::Copy => existing,
            FieldChoice::Set(value) => value,
        }
    }
}

/// Raw edit-form input. Dates are typed as `DD-MM-YYYY`; blank text fields
/// mean "keep the current value" when updating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub status: FieldChoice<TaskStatus>,
    pub priority: FieldChoice<Priority>,
    pub start_date: String,
    pub due_date: String,
}

/// Payload for creating or replacing a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Fill the blanks of an update form from the task with `id`.
pub fn merge_update(form: &TaskForm, id: i64, tasks: &[Task]) -> Result<TaskDraft> {
    let existing = tasks
        .iter()
        .find(|task| task.id == id)
        .ok_or(ViewError::TaskNotFound { id })?;

    Ok(TaskDraft {
        title: text_or(&form.title, &existing.title),
        description: text_or(&form.description, &existing.description),
        status: form.status.or_existing(existing.status),
        priority: form.priority.or_existing(existing.priority),
        start_date: date_or(&form.start_date, existing.start_date)?,
        due_date: date_or(&form.due_date, existing.due_date)?,
    })
}

/// Build a draft for a brand new task; every field except the description
/// must be supplied.
pub fn new_task_draft(form: &TaskForm) -> Result<TaskDraft> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(ViewError::MissingField { field: "title" });
    }

    let status = match form.status {
        FieldChoice::Set(status) => status,
        FieldChoice::Copy => return Err(ViewError::MissingField { field: "status" }),
    };
    let priority = match form.priority {
        FieldChoice::Set(priority) => priority,
        FieldChoice::Copy => return Err(ViewError::MissingField { field: "priority" }),
    };

    Ok(TaskDraft {
        title: title.to_string(),
        description: form.description.clone(),
        status,
        priority,
        start_date: required_date(&form.start_date, "startDate")?,
        due_date: required_date(&form.due_date, "dueDate")?,
    })
}

/// Route a submitted form to the create or update path.
pub fn prepare_submission(
    form: &TaskForm,
    selection: TaskSelection,
    tasks: &[Task],
) -> Result<TaskDraft> {
    match selection {
        TaskSelection::New => new_task_draft(form),
        TaskSelection::Existing(id) => merge_update(form, id, tasks),
    }
}

fn text_or(value: &str, existing: &str) -> String {
    if value.trim().is_empty() {
        existing.to_string()
    } else {
        value.to_string()
    }
}

fn date_or(display: &str, existing: NaiveDate) -> Result<NaiveDate> {
    if display.trim().is_empty() {
        return Ok(existing);
    }
    parse_display_date(display)
}

fn required_date(display: &str, field: &'static str) -> Result<NaiveDate> {
    if display.trim().is_empty() {
        return Err(ViewError::MissingField { field });
    }
    parse_display_date(display)
}

fn parse_display_date(display: &str) -> Result<NaiveDate> {
    let storage = to_storage_format(display.trim())?;
    parse_storage_date(&storage).map_err(|_| ViewError::malformed_date(display, "DD-MM-YYYY"))
}
