//! Interactive prompts shared by `add` and `edit`.

use crate::{
    db::tasks::Tasks,
    libs::{catalog::Catalog, messages::Message, task::TaskStatus},
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

pub fn input_title(current: &str) -> Result<String> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(title.trim().to_string())
}

pub fn input_description(current: &str) -> Result<String> {
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;

    Ok(description)
}

/// Offers the seed categories followed by categories already in use.
pub fn select_category(tasks: &mut Tasks, catalog: &Catalog, current: &str) -> Result<String> {
    let choices = catalog.category_choices(&tasks.distinct_categories()?);
    let default = choices.iter().position(|c| c == current).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .items(&choices)
        .default(default)
        .interact()?;

    Ok(choices[selection].clone())
}

pub fn select_status(current: TaskStatus) -> Result<TaskStatus> {
    let labels: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.label()).collect();
    let default = TaskStatus::ALL.iter().position(|s| *s == current).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(TaskStatus::ALL[selection])
}
