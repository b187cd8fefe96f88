#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TasksDeletedCount(usize),
    TaskNotFoundWithId(i64),
    TaskTitleRequired,
    NoChangesDetected,
    NoTasksFound,
    TasksHeader(usize), // count
    TasksToBeDeleted,
    ConfirmDeleteTask(String), // title
    ConfirmDeleteTasks(usize),
    EditingTask(String), // title

    // === CATEGORY MESSAGES ===
    CategoriesHeader,

    // === STORE MESSAGES ===
    StoreInitialized(String), // path
    StoreAlreadyExists(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,

    // === EXPORT MESSAGES ===
    ExportingTasks(usize, String), // count, format
    ExportCompleted(String),       // path

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskCategory,
    PromptTaskStatus,
    PromptDatabasePath,
    PromptDescriptionWidth,
    PromptCategories,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
