use crate::{
    db::tasks::Tasks,
    libs::{catalog::Catalog, config::Config, messages::Message, task::Task, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// IDs of the tasks to delete
    #[arg(required = true)]
    ids: Vec<i64>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs, config: &Config) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let mut found: Vec<Task> = Vec::new();
    for id in &args.ids {
        match tasks.get(*id)? {
            Some(task) => found.push(task),
            None => msg_info!(Message::TaskNotFoundWithId(*id)),
        }
    }

    if found.is_empty() {
        return Ok(());
    }

    if !args.yes {
        msg_print!(Message::TasksToBeDeleted, true);
        View::tasks(&found, Catalog::global(), config.description_width)?;

        let prompt = match found.as_slice() {
            [task] => Message::ConfirmDeleteTask(task.title.clone()),
            _ => Message::ConfirmDeleteTasks(found.len()),
        };
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let ids: Vec<i64> = found.iter().map(|task| task.id).collect();
    let deleted = tasks.delete_many(&ids)?;

    match ids.as_slice() {
        [id] if deleted == 1 => msg_success!(Message::TaskDeleted(*id)),
        _ => msg_success!(Message::TasksDeletedCount(deleted)),
    }

    Ok(())
}
