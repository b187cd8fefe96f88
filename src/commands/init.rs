//! First-time setup command.
//!
//! Runs the configuration wizard and creates the task database at the
//! configured location.

use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    ///
    /// The task database itself is kept.
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigFileNotFound);
        }
        return Ok(());
    }

    let config = Config::init()?;
    config.save()?;
    msg_success!(Message::ConfigSaved);

    let db_path = config.database_path()?;
    let location = db_path.display().to_string();
    if Tasks::initialize(&db_path)? {
        msg_success!(Message::StoreInitialized(location));
    } else {
        msg_info!(Message::StoreAlreadyExists(location));
    }

    Ok(())
}
