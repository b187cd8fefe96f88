#[cfg(test)]
mod tests {
    use taskdesk::db::tasks::Tasks;
    use taskdesk::libs::task::{NewTask, Task, TaskFilter, TaskStatus, TaskUpdate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FilterTestContext {
        tasks: Tasks,
        _temp_dir: TempDir,
    }

    impl TestContext for FilterTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let mut tasks = Tasks::open(&temp_dir.path().join("tasks.db")).unwrap();

            let seed = [
                ("Quarterly report", "Numbers for Q3", "عمل", TaskStatus::Completed),
                ("Team meeting", "Agenda: REPORT review", "عمل", TaskStatus::Pending),
                ("Gym", "", "صحة", TaskStatus::Completed),
                ("Read paper", "Transformers", "دراسة", TaskStatus::InProgress),
                ("Call plumber", "Kitchen sink", "عمل", TaskStatus::InProgress),
            ];
            for (title, description, category, status) in seed {
                let id = tasks.create(&NewTask::new(title).description(description).category(category)).unwrap();
                tasks.update(id, &TaskUpdate::new().status(status)).unwrap();
            }

            FilterTestContext { tasks, _temp_dir: temp_dir }
        }
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_category_filter_is_exact(ctx: &mut FilterTestContext) {
        let work = ctx.tasks.list_by_category("عمل").unwrap();
        assert_eq!(titles(&work), vec!["Call plumber", "Team meeting", "Quarterly report"]);

        assert!(ctx.tasks.list_by_category("عم").unwrap().is_empty());
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_status_filter_uses_code(ctx: &mut FilterTestContext) {
        let completed = ctx.tasks.list_by_status(TaskStatus::Completed).unwrap();
        assert_eq!(titles(&completed), vec!["Gym", "Quarterly report"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_combined_filter_matches_in_memory_intersection(ctx: &mut FilterTestContext) {
        let combined = ctx.tasks.fetch(&TaskFilter::by_category("عمل").status(TaskStatus::InProgress)).unwrap();

        let expected: Vec<Task> = ctx
            .tasks
            .list_all()
            .unwrap()
            .into_iter()
            .filter(|t| t.category == "عمل" && t.status == TaskStatus::InProgress)
            .collect();

        assert_eq!(combined, expected);
        assert_eq!(titles(&combined), vec!["Call plumber"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_search_is_case_insensitive_over_title_and_description(ctx: &mut FilterTestContext) {
        let found = ctx.tasks.fetch(&TaskFilter::all().search("report")).unwrap();
        assert_eq!(titles(&found), vec!["Team meeting", "Quarterly report"]);

        let found = ctx.tasks.fetch(&TaskFilter::all().search("KITCHEN")).unwrap();
        assert_eq!(titles(&found), vec!["Call plumber"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_search_applies_after_store_filters(ctx: &mut FilterTestContext) {
        let filter = TaskFilter::by_category("عمل").status(TaskStatus::Completed).search("report");
        let found = ctx.tasks.fetch(&filter).unwrap();
        assert_eq!(titles(&found), vec!["Quarterly report"]);

        let filter = TaskFilter::by_status(TaskStatus::Pending).search("gym");
        assert!(ctx.tasks.fetch(&filter).unwrap().is_empty());
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_blank_search_is_ignored(ctx: &mut FilterTestContext) {
        let filter = TaskFilter::all().search("   ");
        assert!(filter.search.is_none());
        assert_eq!(ctx.tasks.fetch(&filter).unwrap().len(), 5);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_filter_matches_agrees_with_store(ctx: &mut FilterTestContext) {
        let filter = TaskFilter::by_status(TaskStatus::InProgress).search("paper");
        let all = ctx.tasks.list_all().unwrap();
        let in_memory: Vec<Task> = all.into_iter().filter(|t| filter.matches(t)).collect();

        assert_eq!(in_memory, ctx.tasks.fetch(&filter).unwrap());
        assert_eq!(titles(&in_memory), vec!["Read paper"]);
    }
}
