use super::form;
use crate::{
    db::tasks::Tasks,
    libs::{
        catalog::Catalog,
        messages::Message,
        task::{TaskError, TaskStatus, TaskUpdate},
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    id: i64,
    /// New title
    #[arg(short, long)]
    title: Option<String>,
    /// New description; an empty string clears it
    #[arg(short, long)]
    description: Option<String>,
    /// New category
    #[arg(short, long)]
    category: Option<String>,
    /// New status: pending, in_progress, completed, or a status label
    #[arg(short, long)]
    status: Option<TaskStatus>,
}

/// Applies the given flags, or opens a pre-filled form when no flag is set.
/// Only changed fields are written.
pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let update = TaskUpdate {
        title: args.title,
        description: args.description,
        category: args.category,
        status: args.status,
    };
    let update = if update.is_empty() {
        let Some(task) = tasks.get(args.id)? else {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        };

        msg_print!(Message::EditingTask(task.title.clone()), true);
        let title = form::input_title(&task.title)?;
        let description = form::input_description(task.description_text())?;
        let category = form::select_category(&mut tasks, Catalog::global(), &task.category)?;
        let status = form::select_status(task.status)?;

        TaskUpdate::from_changes(&task, &title, &description, &category, status)
    } else {
        update
    };

    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    match update.validate() {
        Err(TaskError::EmptyTitle) => {
            msg_warning!(Message::TaskTitleRequired);
            return Ok(());
        }
        Err(err) => return Err(err.into()),
        Ok(()) => {}
    }

    if tasks.update(args.id, &update)? == 0 {
        msg_error!(Message::TaskNotFoundWithId(args.id));
    } else {
        msg_success!(Message::TaskUpdated(args.id));
    }

    Ok(())
}
