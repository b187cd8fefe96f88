use crate::{
    db::tasks::Tasks,
    libs::{
        catalog::Catalog,
        config::Config,
        messages::Message,
        task::{TaskFilter, TaskStatus},
        view::View,
    },
    msg_debug, msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

/// Filters shared by `list` and `export`.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Only tasks in this category (exact match)
    #[arg(short, long)]
    category: Option<String>,
    /// Only tasks with this status: pending, in_progress, completed, or a status label
    #[arg(short, long)]
    status: Option<TaskStatus>,
    /// Case-insensitive text to look for in title or description
    #[arg(short = 'q', long)]
    search: Option<String>,
}

impl FilterArgs {
    pub fn filter(&self) -> TaskFilter {
        let mut filter = TaskFilter::all();
        if let Some(category) = &self.category {
            filter = filter.category(category);
        }
        if let Some(status) = self.status {
            filter = filter.status(status);
        }
        if let Some(search) = &self.search {
            filter = filter.search(search);
        }
        filter
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(args: ListArgs, config: &Config) -> Result<()> {
    let filter = args.filter.filter();
    msg_debug!(format!("Listing tasks with {:?}", filter));
    let tasks = Tasks::new()?.fetch(&filter)?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(tasks.len()), true);
    View::tasks(&tasks, Catalog::global(), config.description_width)?;

    Ok(())
}
