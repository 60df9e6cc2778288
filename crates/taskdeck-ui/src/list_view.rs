//! Pure display derivation for the task list: ordering, aggregate
//! counts, priority indicators, and the inline edit state machine.
//!
//! Nothing here touches the network or the terminal; the frontend
//! renders whatever these functions derive from the collection and
//! the flag store.

use ratatui::style::Color;

use taskdeck_client::{Priority, Task};
use taskdeck_core::{Flag, FlagStore};

/// Aggregate counts over the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

/// Per-bucket counts, shown only when priority display is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Fixed rendering triple for a priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityIndicator {
    pub symbol: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// The triple for a task's priority. Missing or unknown priorities
/// get the Medium triple.
pub fn priority_indicator(priority: Option<Priority>) -> PriorityIndicator {
    match priority.unwrap_or_default() {
        Priority::High => PriorityIndicator {
            symbol: "▲",
            label: "High",
            color: Color::Red,
        },
        Priority::Medium => PriorityIndicator {
            symbol: "■",
            label: "Medium",
            color: Color::Yellow,
        },
        Priority::Low => PriorityIndicator {
            symbol: "▼",
            label: "Low",
            color: Color::Green,
        },
    }
}

/// Display order as indices into the collection.
///
/// With PRIORITY_TASKS enabled: stable sort, highest priority first,
/// ties keeping their original relative order. Disabled: insertion
/// order, untouched. The base collection is never reordered.
pub fn display_order(tasks: &[Task], flags: &FlagStore) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..tasks.len()).collect();
    if flags.is_enabled(Flag::PriorityTasks) {
        indices.sort_by_key(|&i| std::cmp::Reverse(tasks[i].priority_or_default().rank()));
    }
    indices
}

/// Aggregate counts; `remaining` is always `total - completed`.
pub fn stats(tasks: &[Task]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    TaskStats {
        total,
        completed,
        remaining: total - completed,
    }
}

/// Per-priority counts, with missing priorities bucketed as medium.
pub fn priority_counts(tasks: &[Task]) -> PriorityCounts {
    let mut counts = PriorityCounts::default();
    for task in tasks {
        match task.priority_or_default() {
            Priority::High => counts.high += 1,
            Priority::Medium => counts.medium += 1,
            Priority::Low => counts.low += 1,
        }
    }
    counts
}

/// In-place edit buffer for one task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub id: String,
    pub buffer: String,
}

/// Local view state for the task list.
///
/// Holds the single shared editing slot: at most one row edits at a
/// time, and starting an edit on another row silently orphans the
/// previous buffer. Owned by this view, never shared across views.
#[derive(Debug, Default)]
pub struct TaskListView {
    editing: Option<EditState>,
}

impl TaskListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing.as_ref().is_some_and(|e| e.id == id)
    }

    /// Enter edit mode for a task, seeding the buffer with its text.
    /// Completed tasks cannot be edited; the action is a no-op.
    pub fn begin_edit(&mut self, task: &Task) {
        if task.completed {
            return;
        }
        self.editing = Some(EditState {
            id: task.id.clone(),
            buffer: task.text.clone(),
        });
    }

    /// Append a character to the edit buffer.
    pub fn input(&mut self, c: char) {
        if let Some(edit) = &mut self.editing {
            edit.buffer.push(c);
        }
    }

    /// Remove the last character from the edit buffer.
    pub fn backspace(&mut self) {
        if let Some(edit) = &mut self.editing {
            edit.buffer.pop();
        }
    }

    /// Exit edit mode, yielding `(id, trimmed_text)` to commit.
    ///
    /// A whitespace-only buffer fails client-side validation and
    /// commits nothing, expressed as `None` rather than an error.
    /// Either way the row returns to viewing; whether the commit
    /// ultimately succeeds is the caller's fire-and-forget concern.
    pub fn save_edit(&mut self) -> Option<(String, String)> {
        let edit = self.editing.take()?;
        let text = edit.buffer.trim();
        if text.is_empty() {
            return None;
        }
        Some((edit.id, text.to_string()))
    }

    /// Exit edit mode, discarding the buffer. No server call.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taskdeck_client::Category;

    fn task(id: &str, completed: bool, priority: Option<Priority>) -> Task {
        Task {
            id: id.to_string(),
            text: format!("task {id}"),
            completed,
            created_at: Utc::now(),
            priority,
            category: None,
        }
    }

    #[test]
    fn test_priority_sort_stable() {
        let tasks = vec![
            task("a", false, Some(Priority::Low)),
            task("b", false, Some(Priority::High)),
            task("c", false, Some(Priority::Medium)),
            task("d", false, Some(Priority::High)),
        ];
        let flags = FlagStore::fixed([(Flag::PriorityTasks, true)]);

        let order = display_order(&tasks, &flags);
        let ids: Vec<&str> = order.iter().map(|&i| tasks[i].id.as_str()).collect();
        // [low, high, medium, high] -> [high, high, medium, low],
        // equal priorities keeping original relative order.
        assert_eq!(ids, ["b", "d", "c", "a"]);
    }

    #[test]
    fn test_sort_disabled_is_insertion_order() {
        let tasks = vec![
            task("a", false, Some(Priority::Low)),
            task("b", false, Some(Priority::High)),
            task("c", false, Some(Priority::Medium)),
        ];
        let order = display_order(&tasks, &FlagStore::empty());
        assert_eq!(order, [0, 1, 2]);
    }

    #[test]
    fn test_missing_priority_sorts_as_medium() {
        let tasks = vec![
            task("legacy", false, None),
            task("high", false, Some(Priority::High)),
            task("low", false, Some(Priority::Low)),
        ];
        let flags = FlagStore::fixed([(Flag::PriorityTasks, true)]);

        let order = display_order(&tasks, &flags);
        let ids: Vec<&str> = order.iter().map(|&i| tasks[i].id.as_str()).collect();
        assert_eq!(ids, ["high", "legacy", "low"]);
    }

    #[test]
    fn test_stats() {
        let tasks = vec![
            task("1", true, None),
            task("2", false, None),
            task("3", true, None),
            task("4", false, None),
            task("5", false, None),
        ];
        let s = stats(&tasks);
        assert_eq!(s.total, 5);
        assert_eq!(s.completed, 2);
        assert_eq!(s.remaining, 3);

        assert_eq!(stats(&[]), TaskStats::default());
    }

    #[test]
    fn test_priority_counts_default_to_medium() {
        let tasks = vec![
            task("1", false, Some(Priority::High)),
            task("2", false, None),
            task("3", false, Some(Priority::Medium)),
            task("4", false, Some(Priority::Low)),
        ];
        let counts = priority_counts(&tasks);
        assert_eq!(counts.high, 1);
        assert_eq!(counts.medium, 2);
        assert_eq!(counts.low, 1);
    }

    #[test]
    fn test_priority_indicator_defaults_to_medium_triple() {
        let medium = priority_indicator(Some(Priority::Medium));
        assert_eq!(priority_indicator(None), medium);
        assert_eq!(medium.label, "Medium");
        assert_eq!(priority_indicator(Some(Priority::High)).color, Color::Red);
        assert_eq!(priority_indicator(Some(Priority::Low)).color, Color::Green);
    }

    #[test]
    fn test_edit_lifecycle() {
        let mut view = TaskListView::new();
        let t = task("1", false, None);

        view.begin_edit(&t);
        assert!(view.is_editing("1"));
        assert_eq!(view.editing().map(|e| e.buffer.as_str()), Some("task 1"));

        view.input('!');
        let (id, text) = view.save_edit().expect("non-empty commit");
        assert_eq!(id, "1");
        assert_eq!(text, "task 1!");
        assert!(view.editing().is_none());
    }

    #[test]
    fn test_edit_completed_task_is_noop() {
        let mut view = TaskListView::new();
        view.begin_edit(&task("1", true, None));
        assert!(view.editing().is_none());
    }

    #[test]
    fn test_save_whitespace_only_commits_nothing() {
        let mut view = TaskListView::new();
        let mut t = task("1", false, None);
        t.text = "   ".to_string();

        view.begin_edit(&t);
        assert!(view.save_edit().is_none());
        // Still exits edit mode.
        assert!(view.editing().is_none());
    }

    #[test]
    fn test_save_trims_text() {
        let mut view = TaskListView::new();
        let mut t = task("1", false, None);
        t.text = "  padded  ".to_string();

        view.begin_edit(&t);
        let (_, text) = view.save_edit().expect("commit");
        assert_eq!(text, "padded");
    }

    #[test]
    fn test_cancel_discards_buffer() {
        let mut view = TaskListView::new();
        let t = task("1", false, None);

        view.begin_edit(&t);
        view.input('x');
        view.cancel_edit();
        assert!(view.editing().is_none());
        assert!(view.save_edit().is_none());
    }

    #[test]
    fn test_new_edit_orphans_previous_buffer() {
        let mut view = TaskListView::new();
        let first = task("1", false, None);
        let second = task("2", false, None);

        view.begin_edit(&first);
        view.input('x');
        view.begin_edit(&second);

        assert!(view.is_editing("2"));
        assert_eq!(view.editing().map(|e| e.buffer.as_str()), Some("task 2"));
    }

    #[test]
    fn test_category_default() {
        let t = task("1", false, None);
        assert_eq!(t.category_or_default(), Category::General);
    }
}
