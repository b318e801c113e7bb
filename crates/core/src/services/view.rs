use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::dates::{self, DateKind};
use crate::filter::filter_tasks;
use crate::model::{Task, ViewCriteria};
use crate::sort::sort_tasks;

/// Turn the raw task collection into the ordered table contents: search,
/// then filter flags, then sort. Recomputed from scratch on every call.
pub fn reconcile(tasks: &[Task], criteria: &ViewCriteria, today: NaiveDate) -> Vec<Task> {
    let filtered = filter_tasks(tasks, &criteria.search, &criteria.filter, today);
    let sorted = sort_tasks(&filtered, criteria.sort);
    tracing::debug!(
        total = tasks.len(),
        visible = sorted.len(),
        sort = criteria.sort.as_str(),
        search = criteria.search.as_str(),
        "reconciled task view"
    );
    sorted
}

#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub total: usize,
    pub tasks: Vec<Task>,
}

impl ViewSnapshot {
    pub fn build(tasks: &[Task], criteria: &ViewCriteria, today: NaiveDate) -> Self {
        let visible = reconcile(tasks, criteria, today);
        Self {
            total: tasks.len(),
            tasks: visible,
        }
    }

    pub fn hidden(&self) -> usize {
        self.total - self.tasks.len()
    }

    /// Table rows with labels computed against `now`.
    pub fn rows(&self, now: NaiveDateTime) -> Vec<TaskRow> {
        self.tasks
            .iter()
            .map(|task| TaskRow::from_task(task, now))
            .collect()
    }
}

/// Display strings for one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    pub start_date: String,
    pub start_label: String,
    pub due_date: String,
    pub due_label: String,
}

impl TaskRow {
    pub fn from_task(task: &Task, now: NaiveDateTime) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.to_string(),
            priority: task.priority.to_string(),
            start_date: dates::readable(task.start_date),
            start_label: dates::days_remaining(task.start_date, DateKind::Start, now).to_string(),
            due_date: dates::readable(task.due_date),
            due_label: dates::days_remaining(task.due_date, DateKind::Due, now).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_storage_date;
    use crate::model::{FilterCriteria, Priority, SortField, TaskStatus};
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        parse_storage_date(s).unwrap()
    }

    fn scenario_tasks() -> Vec<Task> {
        vec![
            Task {
                id: 1,
                title: "Buy milk".into(),
                description: String::new(),
                status: TaskStatus::Completed,
                priority: Priority::Low,
                start_date: date("2025-01-01"),
                due_date: date("2025-01-05"),
            },
            Task {
                id: 2,
                title: "Write report".into(),
                description: String::new(),
                status: TaskStatus::Pending,
                priority: Priority::High,
                start_date: date("2025-01-20"),
                due_date: date("2025-01-30"),
            },
        ]
    }

    #[test]
    fn hides_completed_then_sorts_by_priority() {
        let criteria = ViewCriteria {
            search: String::new(),
            filter: FilterCriteria {
                completed: false,
                ..FilterCriteria::default()
            },
            sort: SortField::Priority,
        };
        let visible = reconcile(&scenario_tasks(), &criteria, date("2025-01-23"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn sorts_whatever_survives_filtering() {
        let mut tasks = scenario_tasks();
        tasks.push(Task {
            id: 3,
            title: "Write tests".into(),
            description: String::new(),
            status: TaskStatus::OnHold,
            priority: Priority::Medium,
            start_date: date("2025-02-01"),
            due_date: date("2025-02-10"),
        });
        let criteria = ViewCriteria {
            search: "Write".into(),
            filter: FilterCriteria::default(),
            sort: SortField::DueDate,
        };
        let ids: Vec<i64> = reconcile(&tasks, &criteria, date("2025-01-23"))
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn snapshot_counts_hidden_tasks_and_builds_rows() {
        let criteria = ViewCriteria {
            filter: FilterCriteria {
                completed: false,
                ..FilterCriteria::default()
            },
            ..ViewCriteria::default()
        };
        let today = date("2025-01-23");
        let snapshot = ViewSnapshot::build(&scenario_tasks(), &criteria, today);
        assert_eq!(snapshot.total, 2);
        assert_eq!(snapshot.hidden(), 1);

        let rows = snapshot.rows(today.and_time(NaiveTime::MIN));
        assert_eq!(
            rows,
            vec![TaskRow {
                id: 2,
                title: "Write report".into(),
                description: String::new(),
                status: "Pending".into(),
                priority: "High".into(),
                start_date: "20 Jan, 2025".into(),
                start_label: "3".into(),
                due_date: "30 Jan, 2025".into(),
                due_label: "7".into(),
            }]
        );
    }
}
