//! New-task input: collects text plus flag-gated metadata and builds
//! the create request.

use taskdeck_client::{Category, Priority, TaskCreateRequest};
use taskdeck_core::{Flag, FlagStore};

/// Maximum task text length, matching the backend's limit.
pub const MAX_TASK_TEXT_LEN: usize = 200;

/// Input state for composing a new task.
#[derive(Debug, Default)]
pub struct TaskComposer {
    text: String,
    priority: Priority,
    category: Category,
}

impl TaskComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Selected priority; only attached to submissions when the
    /// PRIORITY_TASKS flag is on.
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Selected category; only attached when TASK_CATEGORIES is on.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Append a character, capped at the text length limit.
    pub fn input(&mut self, c: char) {
        if self.text.chars().count() < MAX_TASK_TEXT_LEN {
            self.text.push(c);
        }
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn cycle_priority(&mut self) {
        self.priority = self.priority.cycle();
    }

    pub fn cycle_category(&mut self) {
        self.category = self.category.cycle();
    }

    /// Build the create request and clear the input.
    ///
    /// Empty or whitespace-only text yields `None`: the client-side
    /// validation rejection, modeled as the absence of a request
    /// rather than an error value. No call is made and the buffer is
    /// left alone so the user can keep typing. Metadata rides along
    /// only when its owning flag is enabled at submission time.
    pub fn submit(&mut self, flags: &FlagStore) -> Option<TaskCreateRequest> {
        let text = self.text.trim();
        if text.is_empty() {
            return None;
        }

        let request = TaskCreateRequest {
            text: text.to_string(),
            priority: flags.is_enabled(Flag::PriorityTasks).then_some(self.priority),
            category: flags.is_enabled(Flag::TaskCategories).then_some(self.category),
        };
        self.text.clear();
        Some(request)
    }
}
