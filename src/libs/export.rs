//! Task export to CSV, JSON and Excel.
//!
//! The exporter takes an already filtered task list, so any combination of
//! `list` filters can be exported as-is. Every format carries the same
//! columns: id, title, description, category, status code, status label and
//! both timestamps.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdesk::db::tasks::Tasks;
//! use taskdesk::libs::export::{ExportFormat, Exporter};
//!
//! let tasks = Tasks::new()?.list_all()?;
//! Exporter::new(ExportFormat::Json, None).export(&tasks)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::formatter::format_timestamp;
use super::task::Task;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON array
    Json,
    /// Excel workbook (.xlsx)
    Excel,
}

const HEADERS: [&str; 8] = ["ID", "Title", "Description", "Category", "Status", "Status Label", "Created", "Updated"];

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportTask {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub status_label: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description_text().to_string(),
            category: task.category.clone(),
            status: task.status.code().to_string(),
            status_label: task.status.label().to_string(),
            created_at: format_timestamp(&task.created_at),
            updated_at: format_timestamp(&task.updated_at),
        }
    }
}

impl ExportTask {
    fn record(&self) -> [String; 8] {
        [
            self.id.to_string(),
            self.title.clone(),
            self.description.clone(),
            self.category.clone(),
            self.status.clone(),
            self.status_label.clone(),
            self.created_at.clone(),
            self.updated_at.clone(),
        ]
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter. Without `output_path` a timestamped file in the
    /// current directory is used.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("taskdesk_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, tasks: &[Task]) -> Result<()> {
        let export_tasks: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();

        match self.format {
            ExportFormat::Csv => self.export_csv(&export_tasks),
            ExportFormat::Json => self.export_json(&export_tasks),
            ExportFormat::Excel => self.export_excel(&export_tasks),
        }
    }

    fn export_csv(&self, tasks: &[ExportTask]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(HEADERS)?;

        for task in tasks {
            wtr.write_record(task.record())?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, tasks: &[ExportTask]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, tasks: &[ExportTask]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (index, task) in tasks.iter().enumerate() {
            let row = index as u32 + 1;
            worksheet.write_number(row, 0, task.id as f64)?;
            for (col, value) in task.record().iter().enumerate().skip(1) {
                worksheet.write_string(row, col as u16, value)?;
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
