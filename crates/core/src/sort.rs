use std::cmp::Ordering;

use crate::model::{SortField, Task};
use crate::priority;

/// Return a copy of `tasks` in ascending order of `field`.
pub fn sort_tasks(tasks: &[Task], field: SortField) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| compare_by(a, b, field));
    sorted
}

/// Comparator for a single sort field. Priority uses the urgency ranking,
/// the remaining text fields compare by code point.
pub fn compare_by(a: &Task, b: &Task, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Title => a.title.cmp(&b.title),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        SortField::Priority => priority::compare(a.priority, b.priority),
        SortField::StartDate => a.start_date.cmp(&b.start_date),
        SortField::DueDate => a.due_date.cmp(&b.due_date),
    }
}
