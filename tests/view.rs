#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use prettytable::color;
    use taskdesk::libs::catalog::Catalog;
    use taskdesk::libs::task::{Task, TaskStatus};
    use taskdesk::libs::view::{term_color, View};

    fn task(id: i64, description: &str, status: TaskStatus) -> Task {
        let timestamp = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
        Task {
            id,
            title: format!("Task {}", id),
            description: Some(description.to_string()),
            category: "عمل".to_string(),
            status,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    #[test]
    fn test_tasks_table_rows_and_labels() {
        let tasks = vec![task(2, "short", TaskStatus::Completed), task(1, &"d".repeat(80), TaskStatus::Pending)];

        let table = View::tasks_table(&tasks, &Catalog::default(), 60);
        assert_eq!(table.len(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("DESCRIPTION"));
        assert!(rendered.contains("مكتملة"));
        assert!(rendered.contains("قيد الانتظار"));
        assert!(rendered.contains(&format!("{}...", "d".repeat(57))));
        assert!(!rendered.contains(&"d".repeat(58)));
    }

    #[test]
    fn test_term_color_names() {
        assert_eq!(term_color("Blue"), Some(color::BLUE));
        assert_eq!(term_color("purple"), Some(color::MAGENTA));
        assert_eq!(term_color("#3498db"), None);
    }
}
