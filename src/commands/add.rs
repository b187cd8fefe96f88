use super::form;
use crate::{
    db::tasks::Tasks,
    libs::{catalog::Catalog, messages::Message, task::NewTask},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; opens an interactive form when omitted
    title: Option<String>,
    /// Task description
    #[arg(short, long)]
    description: Option<String>,
    /// Task category (defaults to the first configured category)
    #[arg(short, long)]
    category: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let catalog = Catalog::global();
    let mut tasks = Tasks::new()?;

    let new_task = match args.title {
        Some(title) => NewTask {
            title: title.trim().to_string(),
            description: args.description,
            category: Some(args.category.unwrap_or_else(|| catalog.default_category().to_string())),
        },
        None => {
            let title = form::input_title("")?;
            let description = form::input_description(args.description.as_deref().unwrap_or(""))?;
            let current = args.category.as_deref().unwrap_or(catalog.default_category());
            let category = form::select_category(&mut tasks, catalog, current)?;
            NewTask {
                title,
                description: Some(description),
                category: Some(category),
            }
        }
    };

    if new_task.validate().is_err() {
        msg_warning!(Message::TaskTitleRequired);
        return Ok(());
    }

    let id = tasks.create(&new_task)?;
    msg_success!(Message::TaskCreated(id));

    Ok(())
}
