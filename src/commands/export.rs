//! Task export command.
//!
//! Accepts the same filters as `list` and writes the matching tasks in one
//! of the supported formats:
//!
//! - **CSV**: Comma-separated values for spreadsheet applications
//! - **JSON**: Structured data for programmatic processing
//! - **Excel**: Native spreadsheet with a formatted header row

use super::list::FilterArgs;
use crate::{
    db::tasks::Tasks,
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    filter: FilterArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to a timestamped file in the current directory
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let tasks = Tasks::new()?.fetch(&args.filter.filter())?;

    msg_info!(Message::ExportingTasks(tasks.len(), format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&tasks)?;

    msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string()));
    Ok(())
}
