pub mod add;
pub mod categories;
pub mod delete;
pub mod edit;
pub mod export;
mod form;
pub mod init;
pub mod list;

use crate::libs::{catalog::Catalog, config::Config};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally filtered")]
    List(list::ListArgs),
    #[command(about = "Edit a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete tasks", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show categories and their task counts")]
    Categories,
    #[command(about = "Export tasks to CSV, JSON or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let config = Config::read()?;
        Catalog::init(&config);

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args, &config),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args, &config),
            Commands::Categories => categories::cmd(),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
