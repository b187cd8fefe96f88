use super::catalog::Catalog;
use super::formatter::truncate;
use super::task::Task;
use anyhow::Result;
use prettytable::{color, row, Attr, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], catalog: &Catalog, description_width: usize) -> Result<()> {
        Self::tasks_table(tasks, catalog, description_width).printstd();

        Ok(())
    }

    /// Builds the task list table: category and status cells are colored from
    /// the catalog and completed tasks are dimmed.
    pub fn tasks_table(tasks: &[Task], catalog: &Catalog, description_width: usize) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["ID", "TITLE", "DESCRIPTION", "CATEGORY", "STATUS"]);
        for task in tasks {
            let mut cells = vec![
                Cell::new(&task.id.to_string()),
                Cell::new(&task.title),
                Cell::new(&truncate(task.description_text(), description_width)),
                Self::colored(Cell::new(&task.category), catalog.category_color(&task.category)),
                Self::colored(Cell::new(task.status.label()), catalog.status_color(task.status)).with_style(Attr::Bold),
            ];
            if task.is_completed() {
                cells = cells.into_iter().map(|cell| cell.with_style(Attr::Dim)).collect();
            }
            table.add_row(Row::new(cells));
        }

        table
    }

    pub fn categories(categories: &[(String, usize)], catalog: &Catalog) -> Result<()> {
        let mut table = Table::new();

        table.set_titles(row!["CATEGORY", "TASKS"]);
        for (category, count) in categories {
            table.add_row(Row::new(vec![
                Self::colored(Cell::new(category), catalog.category_color(category)),
                Cell::new(&count.to_string()),
            ]));
        }
        table.printstd();

        Ok(())
    }

    fn colored(cell: Cell, color_name: &str) -> Cell {
        match term_color(color_name) {
            Some(color) => cell.with_style(Attr::ForegroundColor(color)),
            None => cell,
        }
    }
}

/// Maps a color name from the catalog or config to a terminal color.
pub fn term_color(name: &str) -> Option<color::Color> {
    match name.to_lowercase().as_str() {
        "black" => Some(color::BLACK),
        "red" => Some(color::RED),
        "green" => Some(color::GREEN),
        "yellow" => Some(color::YELLOW),
        "blue" => Some(color::BLUE),
        "magenta" | "purple" => Some(color::MAGENTA),
        "cyan" => Some(color::CYAN),
        "white" => Some(color::WHITE),
        _ => None,
    }
}
