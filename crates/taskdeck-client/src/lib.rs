pub mod client;
pub mod error;
pub mod task;

pub use client::TaskClient;
pub use error::{ClientError, Operation};
pub use task::{Category, Priority, Task, TaskCreateRequest, TaskUpdateRequest};
