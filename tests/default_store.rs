// Overrides HOME, so it lives in its own test binary.
#[cfg(test)]
mod tests {
    use taskdesk::db::db::DB_FILE_NAME;
    use taskdesk::db::tasks::Tasks;
    use taskdesk::libs::data_storage::DataStorage;
    use taskdesk::libs::task::{NewTask, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct HomeTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for HomeTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            HomeTestContext { temp_dir }
        }
    }

    #[test_context(HomeTestContext)]
    #[test]
    fn test_new_creates_schema_on_first_use(ctx: &mut HomeTestContext) {
        let db_path = DataStorage::new().get_path(DB_FILE_NAME).unwrap();
        assert!(db_path.starts_with(ctx.temp_dir.path()));
        assert!(!db_path.exists());

        let id = Tasks::new().unwrap().create(&NewTask::new("Buy milk")).unwrap();
        assert!(db_path.exists());

        // The file now exists, so the second open must not depend on initialize.
        let all = Tasks::new().unwrap().list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].status, TaskStatus::Pending);
        assert!(!Tasks::initialize(&db_path).unwrap());
    }
}
