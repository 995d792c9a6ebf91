#[cfg(test)]
mod tests {
    use sesh::db::tasks::Tasks;
    use sesh::libs::task::{Task, TaskFilter, TaskPriority};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct TaskTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_and_fetch_by_user(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.insert(&Task::new("Write report", "Quarterly numbers", TaskPriority::High, 1)).unwrap();
        tasks.insert(&Task::new("Review PR", "", TaskPriority::Medium, 1)).unwrap();
        tasks.insert(&Task::new("Other user's task", "", TaskPriority::Low, 2)).unwrap();

        let user_tasks = tasks.fetch(TaskFilter::ByUser(1)).unwrap();
        assert_eq!(user_tasks.len(), 2);
        assert_eq!(user_tasks[0].name, "Write report");
        assert_eq!(user_tasks[0].description, "Quarterly numbers");
        assert_eq!(user_tasks[0].priority, TaskPriority::High);

        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_by_id(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.insert(&Task::new("Write report", "", TaskPriority::Medium, 1)).unwrap();

        let task = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.name, "Write report");
        assert!(tasks.get_by_id(id + 1).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_by_ids(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let first = tasks.insert(&Task::new("One", "", TaskPriority::Low, 1)).unwrap();
        let _second = tasks.insert(&Task::new("Two", "", TaskPriority::Low, 1)).unwrap();
        let third = tasks.insert(&Task::new("Three", "", TaskPriority::Low, 1)).unwrap();

        let selected = tasks.fetch(TaskFilter::ByIds(vec![first, third])).unwrap();
        let names: Vec<_> = selected.into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["One", "Three"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_task(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.insert(&Task::new("Write report", "", TaskPriority::Medium, 1)).unwrap();

        tasks.delete(id).unwrap();
        assert!(tasks.get_by_id(id).unwrap().is_none());

        // Deleting again reports not found
        assert!(tasks.delete(id).is_err());
    }
}
