//! Task Filtering
//!
//! The three-way filter over the task list and its pure helpers.

use crate::models::Task;

/// Which subset of tasks the list shows.
///
/// Switching is driven only by the filter bar; every page load starts
/// back at `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Display order of the filter bar buttons.
    pub const ALL: [TaskFilter; 3] = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => task.completed == 0,
            TaskFilter::Completed => task.completed == 1,
        }
    }

    /// Message shown when the filtered subset is empty.
    pub fn empty_message(self) -> &'static str {
        match self {
            TaskFilter::All => "No tasks yet. Add a new task to get started!",
            TaskFilter::Active => "No active tasks. All tasks are completed!",
            TaskFilter::Completed => "No completed tasks. Mark some tasks as complete!",
        }
    }
}

/// Subset of `tasks` matching `filter`, preserving backend order.
pub fn apply(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u32, completed: u8) -> Task {
        Task {
            id,
            content: format!("Task {}", id),
            completed,
        }
    }

    #[test]
    fn test_all_is_identity() {
        let tasks = vec![make_task(1, 0), make_task(2, 1), make_task(3, 0)];
        assert_eq!(apply(&tasks, TaskFilter::All), tasks);
    }

    #[test]
    fn test_active_keeps_uncompleted_in_order() {
        let tasks = vec![
            make_task(4, 1),
            make_task(3, 0),
            make_task(2, 1),
            make_task(1, 0),
        ];
        let active = apply(&tasks, TaskFilter::Active);
        assert_eq!(active.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn test_completed_keeps_completed_in_order() {
        let tasks = vec![
            make_task(4, 1),
            make_task(3, 0),
            make_task(2, 1),
            make_task(1, 0),
        ];
        let completed = apply(&tasks, TaskFilter::Completed);
        assert_eq!(
            completed.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![4, 2]
        );
    }

    #[test]
    fn test_empty_collection_stays_empty() {
        for filter in TaskFilter::ALL {
            assert!(apply(&[], filter).is_empty());
        }
    }

    #[test]
    fn test_empty_message_per_filter() {
        assert_eq!(
            TaskFilter::All.empty_message(),
            "No tasks yet. Add a new task to get started!"
        );
        assert_eq!(
            TaskFilter::Active.empty_message(),
            "No active tasks. All tasks are completed!"
        );
        assert_eq!(
            TaskFilter::Completed.empty_message(),
            "No completed tasks. Mark some tasks as complete!"
        );
    }

    #[test]
    fn test_default_filter_is_all() {
        assert_eq!(TaskFilter::default(), TaskFilter::All);
    }
}
