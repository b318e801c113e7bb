use chrono::NaiveDate;

use crate::model::{FilterCriteria, Task};

/// Keep the tasks that match `search` and pass every enabled flag, in their
/// original order. The input is left untouched.
pub fn filter_tasks(
    tasks: &[Task],
    search: &str,
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| matches_search(task, search))
        .filter(|task| passes_criteria(task, criteria, today))
        .cloned()
        .collect()
}

/// Case-sensitive substring match on title or description. An empty search
/// matches every task.
pub fn matches_search(task: &Task, search: &str) -> bool {
    task.title.contains(search) || task.description.contains(search)
}

/// A task is hidden when any switched-off flag covers it. Completion, start
/// date and due date are independent dimensions.
pub fn passes_criteria(task: &Task, criteria: &FilterCriteria, today: NaiveDate) -> bool {
    let completed = task.status.is_completed();
    let not_yet_started = task.start_date >= today;
    let not_yet_due = task.due_date >= today;

    let hidden = (!criteria.completed && completed)
        || (!criteria.uncompleted && !completed)
        || (!criteria.started && not_yet_started)
        || (!criteria.not_started && !not_yet_started)
        || (!criteria.before_due_date && not_yet_due)
        || (!criteria.overdue && !not_yet_due);

    !hidden
}
