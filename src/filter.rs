//! Filter Utilities
//!
//! Derived views over the todo list.

use crate::models::{FilterStatus, Todo};

/// Whether a todo belongs in the given view
pub fn matches(status: FilterStatus, todo: &Todo) -> bool {
    match status {
        FilterStatus::All => true,
        FilterStatus::Active => !todo.completed,
        FilterStatus::Completed => todo.completed,
    }
}

/// Todos visible under `status`, in their original order
pub fn filter_todos(status: FilterStatus, todos: &[Todo]) -> Vec<Todo> {
    todos.iter().filter(|todo| matches(status, todo)).cloned().collect()
}

pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

pub fn completed_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| todo.completed).count()
}

/// True only for a non-empty list where everything is done
pub fn all_completed(todos: &[Todo]) -> bool {
    !todos.is_empty() && todos.iter().all(|todo| todo.completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            user_id: 1,
            title: format!("Todo {}", id),
            completed,
        }
    }

    fn sample() -> Vec<Todo> {
        vec![
            make_todo(1, false),
            make_todo(2, true),
            make_todo(3, false),
            make_todo(4, true),
        ]
    }

    #[test]
    fn test_filter_all_is_unchanged() {
        let todos = sample();
        assert_eq!(filter_todos(FilterStatus::All, &todos), todos);
    }

    #[test]
    fn test_filter_active_and_completed_keep_order() {
        let todos = sample();
        let active: Vec<u32> = filter_todos(FilterStatus::Active, &todos).iter().map(|t| t.id).collect();
        let completed: Vec<u32> = filter_todos(FilterStatus::Completed, &todos).iter().map(|t| t.id).collect();
        assert_eq!(active, vec![1, 3]);
        assert_eq!(completed, vec![2, 4]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let todos = sample();
        for status in FilterStatus::ALL {
            let once = filter_todos(status, &todos);
            let twice = filter_todos(status, &once);
            assert_eq!(once, twice, "filter {:?}", status);
        }
    }

    #[test]
    fn test_filter_empty_list() {
        for status in FilterStatus::ALL {
            assert!(filter_todos(status, &[]).is_empty());
        }
    }

    #[test]
    fn test_counts() {
        let todos = sample();
        assert_eq!(active_count(&todos), 2);
        assert_eq!(completed_count(&todos), 2);
        assert!(!all_completed(&todos));
        assert!(!all_completed(&[]));
        assert!(all_completed(&[make_todo(1, true), make_todo(2, true)]));
    }
}
