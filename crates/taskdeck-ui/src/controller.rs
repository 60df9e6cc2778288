//! Application controller: owns the authoritative task collection.
//!
//! Operations are not optimistic. Every user action spawns a client
//! call through the service layer; local state changes only when the
//! call's response message is applied. A slow network leaves the UI
//! temporarily stale but never in a locally-invented state. There is
//! no fencing of overlapping requests against the same id; the last
//! applied message wins.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;

use taskdeck_client::{Task, TaskClient, TaskCreateRequest};

use crate::service::{self, TaskServiceMessage};

pub struct AppController {
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
    client: Arc<TaskClient>,
    runtime: tokio::runtime::Handle,
    tx: Sender<TaskServiceMessage>,
}

impl AppController {
    pub fn new(
        client: Arc<TaskClient>,
        runtime: tokio::runtime::Handle,
        tx: Sender<TaskServiceMessage>,
    ) -> Self {
        Self {
            tasks: Vec::new(),
            loading: false,
            error: None,
            client,
            runtime,
            tx,
        }
    }

    /// The task collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The active error message, if any. At most one at a time.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Reload the collection from the server.
    ///
    /// On success the collection is replaced and the error cleared;
    /// on failure the collection is left untouched.
    pub fn refresh(&mut self) {
        self.loading = true;
        service::request_fetch(&self.tx, self.client.clone(), &self.runtime);
    }

    /// Create a task. The caller (composer) has already validated
    /// and trimmed the text.
    pub fn add_task(&mut self, request: TaskCreateRequest) {
        service::request_create(&self.tx, self.client.clone(), &self.runtime, request);
    }

    /// Flip a task's completion state. Unknown ids are a silent
    /// no-op, not an error.
    pub fn toggle_task(&mut self, id: &str) {
        let completed = match self.tasks.iter().find(|t| t.id == id) {
            Some(task) => task.completed,
            None => return,
        };
        service::request_toggle(
            &self.tx,
            self.client.clone(),
            &self.runtime,
            id.to_string(),
            !completed,
        );
    }

    /// Delete a task. The call is issued even for ids absent locally;
    /// the server decides whether that is an error.
    pub fn delete_task(&mut self, id: &str) {
        service::request_delete(&self.tx, self.client.clone(), &self.runtime, id.to_string());
    }

    /// Save edited text for a task. Failures are logged, never
    /// surfaced: the edit row has already closed by the time the
    /// response lands.
    pub fn save_edit(&mut self, id: &str, text: String) {
        service::request_save_edit(
            &self.tx,
            self.client.clone(),
            &self.runtime,
            id.to_string(),
            text,
        );
    }

    /// Clear the error message. No other side effect.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Apply one completed service response to local state.
    pub fn apply(&mut self, message: TaskServiceMessage) {
        match message {
            TaskServiceMessage::FetchDone(Ok(tasks)) => {
                tracing::debug!(count = tasks.len(), "fetched tasks");
                self.tasks = tasks;
                self.error = None;
                self.loading = false;
            }
            TaskServiceMessage::FetchDone(Err(message)) => {
                self.error = Some(message);
                self.loading = false;
            }
            TaskServiceMessage::CreateDone(Ok(task)) => {
                // Appended, preserving insertion order as the base order.
                self.tasks.push(task);
            }
            TaskServiceMessage::CreateDone(Err(message)) => {
                self.error = Some(message);
            }
            TaskServiceMessage::UpdateDone { id, result: Ok(task) } => {
                self.replace(&id, task);
            }
            TaskServiceMessage::UpdateDone { result: Err(message), .. } => {
                self.error = Some(message);
            }
            TaskServiceMessage::DeleteDone { id, result: Ok(()) } => {
                self.tasks.retain(|t| t.id != id);
            }
            TaskServiceMessage::DeleteDone { result: Err(message), .. } => {
                self.error = Some(message);
            }
            TaskServiceMessage::SaveEditDone { id, result: Ok(task) } => {
                self.replace(&id, task);
            }
            TaskServiceMessage::SaveEditDone { id, result: Err(message) } => {
                // Edit failures are non-blocking: log and move on.
                tracing::warn!(task_id = %id, "Failed to save task edit: {}", message);
            }
        }
    }

    /// Drain all pending service responses. Called once per UI tick.
    pub fn pump(&mut self, rx: &Receiver<TaskServiceMessage>) {
        while let Ok(message) = rx.try_recv() {
            self.apply(message);
        }
    }

    fn replace(&mut self, id: &str, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) {
            *slot = task;
        }
        // A task deleted while its update was in flight stays gone.
    }
}
