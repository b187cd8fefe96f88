use crate::{
    db::tasks::Tasks,
    libs::{catalog::Catalog, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

/// Lists the seed categories and every stored category with its task count.
pub fn cmd() -> Result<()> {
    let catalog = Catalog::global();
    let counts = Tasks::new()?.category_counts()?;

    let stored: Vec<String> = counts.iter().map(|(category, _)| category.clone()).collect();
    let rows: Vec<(String, usize)> = catalog
        .category_choices(&stored)
        .into_iter()
        .map(|category| {
            let count = counts.iter().find(|(name, _)| *name == category).map_or(0, |(_, count)| *count);
            (category, count)
        })
        .collect();

    msg_print!(Message::CategoriesHeader, true);
    View::categories(&rows, catalog)?;

    Ok(())
}
