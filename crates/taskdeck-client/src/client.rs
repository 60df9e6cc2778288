//! HTTP client for the task API.
//!
//! Each operation is exactly one round trip: no retries, no request
//! fencing. Overlapping calls against the same task id race at the
//! server, and the caller applies whichever response it handles.

use std::time::Duration;

use reqwest::Response;
use tracing::instrument;

use crate::error::{ClientError, Operation};
use crate::task::{Task, TaskCreateRequest, TaskUpdateRequest};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the remote task CRUD API.
#[derive(Debug, Clone)]
pub struct TaskClient {
    client: reqwest::Client,
    base_url: String,
}

impl TaskClient {
    /// Create a client against a base URL such as `http://localhost:5000`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn tasks_url(&self) -> String {
        format!("{}/api/tasks", self.base_url)
    }

    fn task_url(&self, id: &str) -> String {
        format!("{}/api/tasks/{}", self.base_url, id)
    }

    /// List all tasks, in the server's (insertion) order.
    #[instrument(skip(self), level = "info")]
    pub async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let response = self.client.get(self.tasks_url()).send().await?;
        let response = check_status(Operation::Fetch, response)?;
        response.json().await.map_err(ClientError::Decode)
    }

    /// Create a task; the server assigns the id and timestamps.
    #[instrument(skip(self, request), level = "info")]
    pub async fn create_task(&self, request: &TaskCreateRequest) -> Result<Task, ClientError> {
        let response = self.client.post(self.tasks_url()).json(request).send().await?;
        let response = check_status(Operation::Add, response)?;
        response.json().await.map_err(ClientError::Decode)
    }

    /// Partially update a task; returns the server's representation.
    #[instrument(skip(self, request), level = "info")]
    pub async fn update_task(
        &self,
        id: &str,
        request: &TaskUpdateRequest,
    ) -> Result<Task, ClientError> {
        let response = self.client.put(self.task_url(id)).json(request).send().await?;
        let response = check_status(Operation::Update, response)?;
        response.json().await.map_err(ClientError::Decode)
    }

    /// Delete a task. Success carries no body (200 or 204).
    #[instrument(skip(self), level = "info")]
    pub async fn delete_task(&self, id: &str) -> Result<(), ClientError> {
        let response = self.client.delete(self.task_url(id)).send().await?;
        check_status(Operation::Delete, response)?;
        Ok(())
    }
}

fn check_status(op: Operation, response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!(%status, operation = ?op, "task API returned error status");
        Err(ClientError::Fetch { op, status })
    }
}
