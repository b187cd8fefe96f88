use super::db::Db;
use crate::libs::config::Config;
use crate::libs::task::{NewTask, Task, TaskFilter, TaskStatus, TaskUpdate};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql};
use std::fs;
use std::path::Path;
use tracing::debug;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    category TEXT,
    status TEXT DEFAULT 'pending',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, category, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?5)";
const SELECT_TASKS: &str = "SELECT id, title, description, category, status, created_at, updated_at FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_RECENT_FIRST: &str = "ORDER BY created_at DESC, id DESC";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const DELETE_TASKS_BY_IDS: &str = "DELETE FROM tasks WHERE id IN";
const SELECT_DISTINCT_CATEGORIES: &str = "SELECT DISTINCT category FROM tasks WHERE category IS NOT NULL ORDER BY category";
const SELECT_CATEGORY_COUNTS: &str = "SELECT category, COUNT(*) FROM tasks WHERE category IS NOT NULL GROUP BY category ORDER BY category";

/// Store for the `tasks` table.
///
/// Every operation is a single statement against the owned connection.
/// Update and delete on an unknown id are not errors; they report zero
/// affected rows.
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Opens the configured database, creating it on first use.
    pub fn new() -> Result<Tasks> {
        let path = Config::read()?.database_path()?;
        Self::open(&path)
    }

    /// Opens the database at `path`, creating it on first use.
    pub fn open(path: &Path) -> Result<Tasks> {
        Self::initialize(path)?;
        let db = Db::open(path)?;
        Ok(Tasks { conn: db.conn })
    }

    /// Creates the database file and schema if the file does not exist yet.
    ///
    /// An existing file is left alone and its schema is not checked, so a
    /// file without the `tasks` table makes later statements fail instead.
    /// Returns `true` when a new database was created.
    pub fn initialize(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let db = Db::open(path)?;
        db.conn.execute(SCHEMA_TASKS, [])?;
        debug!(path = %path.display(), "created task database");

        Ok(true)
    }

    /// Inserts a task with status `pending` and returns its id.
    pub fn create(&mut self, task: &NewTask) -> Result<i64> {
        task.validate()?;

        let now = Self::now();
        self.conn.execute(
            INSERT_TASK,
            params![
                task.title,
                task.description.as_deref().unwrap_or(""),
                task.category_or_default(),
                TaskStatus::Pending,
                now
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(task_id = id, "task created");

        Ok(id)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn list_all(&mut self) -> Result<Vec<Task>> {
        self.fetch(&TaskFilter::all())
    }

    pub fn list_by_category(&mut self, category: &str) -> Result<Vec<Task>> {
        self.fetch(&TaskFilter::by_category(category))
    }

    pub fn list_by_status(&mut self, status: TaskStatus) -> Result<Vec<Task>> {
        self.fetch(&TaskFilter::by_status(status))
    }

    /// Returns the tasks matching `filter`, newest first.
    ///
    /// Category and status are exact matches evaluated by SQLite. The search
    /// text is matched afterwards, case-insensitively, against title and
    /// description.
    pub fn fetch(&mut self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut conditions = Vec::new();
        let mut values = Vec::new();
        if let Some(category) = &filter.category {
            conditions.push("category = ?");
            values.push(Value::Text(category.clone()));
        }
        if let Some(status) = filter.status {
            conditions.push("status = ?");
            values.push(Value::Text(status.code().to_string()));
        }

        let sql = if conditions.is_empty() {
            format!("{} {}", SELECT_TASKS, ORDER_RECENT_FIRST)
        } else {
            format!("{} WHERE {} {}", SELECT_TASKS, conditions.join(" AND "), ORDER_RECENT_FIRST)
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(values.iter()), Self::map_row)?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            let task = task_result?;
            if filter.search.as_deref().map_or(true, |query| task.matches_search(query)) {
                tasks.push(task);
            }
        }

        Ok(tasks)
    }

    /// Applies the fields set in `update` and refreshes `updated_at`.
    ///
    /// An empty update runs no statement. Returns the number of rows changed,
    /// which is `0` for an unknown id.
    pub fn update(&mut self, id: i64, update: &TaskUpdate) -> Result<usize> {
        if update.is_empty() {
            return Ok(0);
        }
        update.validate()?;

        let now = Self::now();
        let mut assignments = Vec::new();
        let mut values: Vec<&dyn ToSql> = Vec::new();
        if let Some(title) = &update.title {
            assignments.push("title = ?");
            values.push(title);
        }
        if let Some(description) = &update.description {
            assignments.push("description = ?");
            values.push(description);
        }
        if let Some(category) = &update.category {
            assignments.push("category = ?");
            values.push(category);
        }
        if let Some(status) = &update.status {
            assignments.push("status = ?");
            values.push(status);
        }

        assignments.push("updated_at = ?");
        values.push(&now);
        values.push(&id);

        let sql = format!("UPDATE tasks SET {} WHERE id = ?", assignments.join(", "));
        let affected = self.conn.execute(&sql, values.as_slice())?;
        debug!(task_id = id, affected, "task updated");

        Ok(affected)
    }

    /// Removes a task. Returns `0` if the id is unknown.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        debug!(task_id = id, affected, "task deleted");

        Ok(affected)
    }

    pub fn delete_many(&mut self, ids: &[i64]) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("{} ({})", DELETE_TASKS_BY_IDS, placeholders);
        let affected = self.conn.execute(&sql, params_from_iter(ids.iter()))?;
        debug!(requested = ids.len(), affected, "tasks deleted");

        Ok(affected)
    }

    /// Categories currently used by at least one task, ascending.
    pub fn distinct_categories(&mut self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(SELECT_DISTINCT_CATEGORIES)?;
        let category_iter = stmt.query_map([], |row| row.get(0))?;

        let mut categories = Vec::new();
        for category in category_iter {
            categories.push(category?);
        }

        Ok(categories)
    }

    /// Number of tasks per stored category, ascending by category.
    pub fn category_counts(&mut self) -> Result<Vec<(String, usize)>> {
        let mut stmt = self.conn.prepare(SELECT_CATEGORY_COUNTS)?;
        let count_iter = stmt.query_map([], |row| Ok((row.get(0)?, row.get::<_, i64>(1)? as usize)))?;

        let mut counts = Vec::new();
        for count in count_iter {
            counts.push(count?);
        }

        Ok(counts)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            category: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            status: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }
}
