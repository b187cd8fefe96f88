//! Human-readable text for every [`Message`].
//!
//! All user-facing strings live here so the wording stays consistent across
//! commands and can be changed in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created successfully", id),
            Message::TaskUpdated(id) => format!("Task #{} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted successfully", id),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s) successfully.", count),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskTitleRequired => "A task title is required.".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::TasksHeader(count) => format!("Tasks ({}):", count),
            Message::TasksToBeDeleted => "The following tasks will be deleted:".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}' permanently?", title),
            Message::ConfirmDeleteTasks(count) => format!("Delete {} tasks permanently?", count),
            Message::EditingTask(title) => format!("Editing task: {}", title),

            // === CATEGORY MESSAGES ===
            Message::CategoriesHeader => "Categories:".to_string(),

            // === STORE MESSAGES ===
            Message::StoreInitialized(path) => format!("Task database ready at {}", path),
            Message::StoreAlreadyExists(path) => format!("Task database already exists at {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingTasks(count, format) => format!("Exporting {} task(s) as {}...", count, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptDatabasePath => "Database file (leave empty for the default location)".to_string(),
            Message::PromptDescriptionWidth => "Description column width".to_string(),
            Message::PromptCategories => "Categories, comma separated (first one is the default)".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
