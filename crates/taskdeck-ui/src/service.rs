//! Async task operations bridged back to the UI thread.
//! All network work runs on the tokio runtime; results sent via mpsc.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use taskdeck_client::{Task, TaskClient, TaskCreateRequest, TaskUpdateRequest};

/// Messages sent from async operations back to the UI thread.
///
/// Each message is the continuation of exactly one request; the
/// collection is only touched when its own response is applied, in
/// application order.
#[derive(Debug)]
pub enum TaskServiceMessage {
    /// Result of fetching the full task list.
    FetchDone(Result<Vec<Task>, String>),
    /// Result of creating a new task.
    CreateDone(Result<Task, String>),
    /// Result of toggling completion.
    UpdateDone {
        id: String,
        result: Result<Task, String>,
    },
    /// Result of deleting a task.
    DeleteDone {
        id: String,
        result: Result<(), String>,
    },
    /// Result of an inline-edit save. Failures are logged, never
    /// surfaced ("edit failures are non-blocking").
    SaveEditDone {
        id: String,
        result: Result<Task, String>,
    },
}

/// Request to fetch all tasks asynchronously.
/// Sends `FetchDone` on the channel when complete.
pub fn request_fetch(
    tx: &Sender<TaskServiceMessage>,
    client: Arc<TaskClient>,
    runtime: &tokio::runtime::Handle,
) {
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = client.list_tasks().await.map_err(|e| e.user_message());
        let _ = tx.send(TaskServiceMessage::FetchDone(result));
    });
}

/// Request to create a new task asynchronously.
/// Sends `CreateDone` on the channel when complete.
pub fn request_create(
    tx: &Sender<TaskServiceMessage>,
    client: Arc<TaskClient>,
    runtime: &tokio::runtime::Handle,
    request: TaskCreateRequest,
) {
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = client
            .create_task(&request)
            .await
            .map_err(|e| e.user_message());
        let _ = tx.send(TaskServiceMessage::CreateDone(result));
    });
}

/// Request to set a task's completion state asynchronously.
/// Sends `UpdateDone` on the channel when complete.
pub fn request_toggle(
    tx: &Sender<TaskServiceMessage>,
    client: Arc<TaskClient>,
    runtime: &tokio::runtime::Handle,
    id: String,
    completed: bool,
) {
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = client
            .update_task(&id, &TaskUpdateRequest::completed(completed))
            .await
            .map_err(|e| e.user_message());
        let _ = tx.send(TaskServiceMessage::UpdateDone { id, result });
    });
}

/// Request to delete a task asynchronously.
/// Sends `DeleteDone` on the channel when complete.
pub fn request_delete(
    tx: &Sender<TaskServiceMessage>,
    client: Arc<TaskClient>,
    runtime: &tokio::runtime::Handle,
    id: String,
) {
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = client.delete_task(&id).await.map_err(|e| e.user_message());
        let _ = tx.send(TaskServiceMessage::DeleteDone { id, result });
    });
}

/// Request to save edited task text asynchronously.
/// Sends `SaveEditDone` on the channel when complete.
pub fn request_save_edit(
    tx: &Sender<TaskServiceMessage>,
    client: Arc<TaskClient>,
    runtime: &tokio::runtime::Handle,
    id: String,
    text: String,
) {
    let tx = tx.clone();
    runtime.spawn(async move {
        let result = client
            .update_task(&id, &TaskUpdateRequest::text(text))
            .await
            .map_err(|e| e.user_message());
        let _ = tx.send(TaskServiceMessage::SaveEditDone { id, result });
    });
}
