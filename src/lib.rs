//! # Taskdesk
//!
//! A command-line task manager backed by a local SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, and delete tasks with a title,
//!   description, category, and status
//! - **Filtering**: Combine category and status filters with free-text search
//! - **Categories**: Built-in seed categories plus any category in use
//! - **Data Export**: Export filtered task lists to CSV, JSON, and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
