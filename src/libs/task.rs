//! Task domain types shared by the store, the CLI and the exporters.
//!
//! - [`Task`]: a stored row.
//! - [`TaskStatus`]: the fixed three-code status vocabulary.
//! - [`NewTask`] / [`TaskUpdate`]: write payloads. `TaskUpdate` fields are
//!   `Option`s where `None` leaves a column untouched and `Some` overwrites it,
//!   so `Some(String::new())` is an explicit request to clear the description.
//! - [`TaskFilter`]: category and status predicates plus free-text search.

use chrono::NaiveDateTime;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category assigned when a task is created without one.
pub const DEFAULT_CATEGORY: &str = "عام";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("task category must not be empty")]
    EmptyCategory,
    #[error("unknown task status '{0}'")]
    UnknownStatus(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed];

    /// Code persisted in the `status` column.
    pub fn code(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Label shown to the user. Never stored.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "قيد الانتظار",
            TaskStatus::InProgress => "قيد الإنجاز",
            TaskStatus::Completed => "مكتملة",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accepts a status code (any case, `-` or `_`) or a display label.
impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_lowercase().replace('-', "_");

        Self::from_code(&normalized)
            .or_else(|| Self::from_label(trimmed))
            .ok_or_else(|| TaskError::UnknownStatus(s.to_string()))
    }
}

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = value.as_str()?;
        Self::from_code(code).ok_or_else(|| FromSqlError::Other(Box::new(TaskError::UnknownStatus(code.to_string()))))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub status: TaskStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Task {
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Case-insensitive substring match against the title or the description.
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.description_text().to_lowercase().contains(&needle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            category: None,
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn validate(&self) -> Result<(), TaskError> {
        if self.title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        Ok(())
    }

    /// Category to store: the given one, or [`DEFAULT_CATEGORY`] when absent or blank.
    pub fn category_or_default(&self) -> &str {
        match self.category.as_deref() {
            Some(category) if !category.trim().is_empty() => category,
            _ => DEFAULT_CATEGORY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.category.is_none() && self.status.is_none()
    }

    pub fn validate(&self) -> Result<(), TaskError> {
        if matches!(self.title.as_deref(), Some(title) if title.trim().is_empty()) {
            return Err(TaskError::EmptyTitle);
        }
        if matches!(self.category.as_deref(), Some(category) if category.trim().is_empty()) {
            return Err(TaskError::EmptyCategory);
        }
        Ok(())
    }

    /// Builds an update holding only the values that differ from `task`.
    pub fn from_changes(task: &Task, title: &str, description: &str, category: &str, status: TaskStatus) -> Self {
        Self {
            title: (title != task.title).then(|| title.to_string()),
            description: (description != task.description_text()).then(|| description.to_string()),
            category: (category != task.category).then(|| category.to_string()),
            status: (status != task.status).then_some(status),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub category: Option<String>,
    pub status: Option<TaskStatus>,
    pub search: Option<String>,
}

impl TaskFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_category(category: &str) -> Self {
        Self::default().category(category)
    }

    pub fn by_status(status: TaskStatus) -> Self {
        Self::default().status(status)
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Blank queries are ignored.
    pub fn search(mut self, query: &str) -> Self {
        self.search = (!query.trim().is_empty()).then(|| query.to_string());
        self
    }

    pub fn matches(&self, task: &Task) -> bool {
        self.category.as_deref().map_or(true, |category| task.category == category)
            && self.status.map_or(true, |status| task.status == status)
            && self.search.as_deref().map_or(true, |query| task.matches_search(query))
    }
}
