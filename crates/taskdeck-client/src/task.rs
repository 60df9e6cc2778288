//! Task wire types shared with the REST backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority.
///
/// Records written before the priority feature shipped lack the
/// field, and the backend may hand back values we don't know yet;
/// both read as `Medium`. The catch-all variant must sit last for
/// serde's `other` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    High,
    #[default]
    #[serde(other)]
    Medium,
}

impl Priority {
    /// Sort rank, higher is more urgent.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Next value in selection order (Low → Medium → High → Low).
    pub fn cycle(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// Task category; missing or unrecognized values read as `General`,
/// the serde catch-all sitting last as required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Shopping,
    #[default]
    #[serde(other)]
    General,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Shopping => "Shopping",
        }
    }

    /// Next value in selection order.
    pub fn cycle(self) -> Self {
        match self {
            Self::General => Self::Work,
            Self::Work => Self::Personal,
            Self::Personal => Self::Shopping,
            Self::Shopping => Self::General,
        }
    }
}

/// A to-do item as the server represents it.
///
/// `priority` and `category` stay optional on the wire: the
/// collection can hold legacy tasks lacking them even when the
/// owning feature flag is on, so defaulting happens at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Task {
    /// Effective priority with the legacy-record default applied.
    pub fn priority_or_default(&self) -> Priority {
        self.priority.unwrap_or_default()
    }

    /// Effective category with the legacy-record default applied.
    pub fn category_or_default(&self) -> Category {
        self.category.unwrap_or_default()
    }
}

/// Request to create a new task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCreateRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl TaskCreateRequest {
    /// A bare-text request with no optional metadata.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: None,
            category: None,
        }
    }
}

/// Request to update an existing task (partial update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct TaskUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskUpdateRequest {
    /// Update only the completion state.
    pub fn completed(completed: bool) -> Self {
        Self {
            text: None,
            completed: Some(completed),
        }
    }

    /// Update only the text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: None,
        }
    }
}
