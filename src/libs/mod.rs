//! Core library modules for taskdesk.
//!
//! - **Domain**: task types, validation and filters (`task`)
//! - **Lookup tables**: seed categories, labels and colors (`catalog`)
//! - **Infrastructure**: configuration, data directory, messaging
//! - **Presentation**: table rendering, text formatting, export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::task::{NewTask, TaskFilter};
//!
//! let mut tasks = Tasks::new()?;
//! tasks.create(&NewTask::new("Write report").description("Q3 numbers"))?;
//! let found = tasks.fetch(&TaskFilter::all().search("report"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod task;
pub mod view;
