//! Persistence layer for taskdesk.
//!
//! All data lives in a single SQLite file with one `tasks` table. The schema
//! is created the first time the file is opened and never migrated.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::task::{NewTask, TaskStatus, TaskUpdate};
//!
//! let mut tasks = Tasks::new()?;
//! let id = tasks.create(&NewTask::new("Buy milk").category("عام"))?;
//! tasks.update(id, &TaskUpdate::new().status(TaskStatus::Completed))?;
//! let done = tasks.list_by_status(TaskStatus::Completed)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection opening and the database file name.
pub mod db;

/// Task CRUD, filtered reads and category lookups.
pub mod tasks;
