#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskdesk::libs::catalog::{Catalog, FALLBACK_COLOR, STATUS_COLORS};
    use taskdesk::libs::config::{CategoryConfig, Config};
    use taskdesk::libs::task::{Task, TaskError, TaskStatus, TaskUpdate, DEFAULT_CATEGORY};

    fn sample_task() -> Task {
        let timestamp = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(9, 30, 0).unwrap();
        Task {
            id: 1,
            title: "Plan week".to_string(),
            description: Some("Goals".to_string()),
            category: "عمل".to_string(),
            status: TaskStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    #[test]
    fn test_default_seed_categories() {
        let catalog = Catalog::default();
        let seeds: Vec<&str> = catalog.seed_categories().collect();
        assert_eq!(seeds, vec!["عام", "عمل", "دراسة", "صحة", "شخصي"]);
        assert_eq!(catalog.default_category(), DEFAULT_CATEGORY);
    }

    #[test]
    fn test_category_colors() {
        let catalog = Catalog::default();
        assert_eq!(catalog.category_color("عام"), "blue");
        assert_eq!(catalog.category_color("عمل"), "red");
        assert_eq!(catalog.category_color("Groceries"), FALLBACK_COLOR);
    }

    #[test]
    fn test_status_colors() {
        let catalog = Catalog::default();
        assert_eq!(catalog.status_color(TaskStatus::Pending), "red");
        assert_eq!(catalog.status_color(TaskStatus::InProgress), "yellow");
        assert_eq!(catalog.status_color(TaskStatus::Completed), "green");
    }

    #[test]
    fn test_status_colors_come_from_catalog_table() {
        let config = Config {
            categories: Some(vec![CategoryConfig {
                name: "Home".to_string(),
                color: "cyan".to_string(),
            }]),
            ..Config::default()
        };
        let catalog = Catalog::from_config(&config);

        for status in TaskStatus::ALL {
            let expected = STATUS_COLORS.iter().find(|(s, _)| *s == status).map(|(_, c)| *c).unwrap();
            assert_eq!(catalog.status_color(status), expected);
            assert_ne!(catalog.status_color(status), FALLBACK_COLOR);
        }
    }

    #[test]
    fn test_category_choices_keep_seeds_first() {
        let catalog = Catalog::default();
        let existing = vec!["Groceries".to_string(), "عمل".to_string(), "Hobby".to_string()];

        let choices = catalog.category_choices(&existing);
        assert_eq!(choices, vec!["عام", "عمل", "دراسة", "صحة", "شخصي", "Groceries", "Hobby"]);
    }

    #[test]
    fn test_catalog_from_config() {
        let config = Config {
            categories: Some(vec![
                CategoryConfig {
                    name: "Home".to_string(),
                    color: "Cyan".to_string(),
                },
                CategoryConfig {
                    name: "Office".to_string(),
                    color: "red".to_string(),
                },
            ]),
            ..Config::default()
        };

        let catalog = Catalog::from_config(&config);
        assert_eq!(catalog.default_category(), "Home");
        assert_eq!(catalog.category_color("Home"), "cyan");
        assert!(catalog.is_seed("Office"));
        assert!(!catalog.is_seed("عام"));

        let empty = Config {
            categories: Some(vec![]),
            ..Config::default()
        };
        assert_eq!(Catalog::from_config(&empty), Catalog::default());
    }

    #[test]
    fn test_status_codes_and_labels() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
        assert_eq!(TaskStatus::InProgress.code(), "in_progress");
        assert_eq!(TaskStatus::Completed.label(), "مكتملة");
        assert_eq!(TaskStatus::Pending.to_string(), "قيد الانتظار");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("completed".parse::<TaskStatus>(), Ok(TaskStatus::Completed));
        assert_eq!("In-Progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!("قيد الإنجاز".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!("done".parse::<TaskStatus>(), Err(TaskError::UnknownStatus("done".to_string())));
    }

    #[test]
    fn test_update_from_changes_keeps_only_differences() {
        let task = sample_task();

        let unchanged = TaskUpdate::from_changes(&task, "Plan week", "Goals", "عمل", TaskStatus::Pending);
        assert!(unchanged.is_empty());

        let update = TaskUpdate::from_changes(&task, "Plan week", "", "عمل", TaskStatus::Completed);
        assert_eq!(update, TaskUpdate::new().description("").status(TaskStatus::Completed));
    }

    #[test]
    fn test_task_search_matching() {
        let mut task = sample_task();
        assert!(task.matches_search("PLAN"));
        assert!(task.matches_search("goal"));
        assert!(!task.matches_search("holiday"));

        task.description = None;
        assert!(!task.matches_search("goal"));
    }
}
