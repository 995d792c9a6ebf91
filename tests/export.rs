#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sesh::db::tasks::Tasks;
    use sesh::db::users::{ScheduleConfig, Users};
    use sesh::libs::export::{ExportFormat, Exporter};
    use sesh::libs::planner;
    use sesh::libs::session::SessionStatus;
    use sesh::libs::task::{Task, TaskPriority};
    use std::fs;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ExportTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext { _guard: guard, temp_dir }
        }
    }

    fn planned_user(date: NaiveDate) -> i64 {
        let user_id = Users::new()
            .unwrap()
            .create(
                "alice",
                &ScheduleConfig {
                    day_start: "09:00".to_string(),
                    day_end: "10:00".to_string(),
                    session_size: 30,
                },
            )
            .unwrap();
        planner::ensure_daily_sessions(user_id, date).unwrap();
        user_id
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_plan_csv(ctx: &mut ExportTestContext) {
        let user_id = planned_user(test_date());
        let output = ctx.temp_dir.path().join("plan.csv");

        Exporter::new(ExportFormat::Csv, Some(output.clone())).export_plan(user_id, test_date()).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "ID,Start,End,Status,Task,Note");
        assert_eq!(lines.clone().count(), 2);
        assert!(lines.next().unwrap().contains("09:00"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_plan_json(ctx: &mut ExportTestContext) {
        let user_id = planned_user(test_date());
        let output = ctx.temp_dir.path().join("plan.json");

        Exporter::new(ExportFormat::Json, Some(output.clone())).export_plan(user_id, test_date()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["date"], "2025-03-10");
        assert_eq!(json["sessions"].as_array().unwrap().len(), 2);
        assert_eq!(json["sessions"][0]["status"], "Pending");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_plan_excel_writes_file(ctx: &mut ExportTestContext) {
        let user_id = planned_user(test_date());
        let output = ctx.temp_dir.path().join("plan.xlsx");

        Exporter::new(ExportFormat::Excel, Some(output.clone())).export_plan(user_id, test_date()).unwrap();

        assert!(fs::metadata(&output).unwrap().len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_plan_without_sessions_fails(ctx: &mut ExportTestContext) {
        let user_id = planned_user(test_date());
        let other_date = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
        let output = ctx.temp_dir.path().join("plan.csv");

        let result = Exporter::new(ExportFormat::Csv, Some(output.clone())).export_plan(user_id, other_date);
        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_tasks_csv(ctx: &mut ExportTestContext) {
        let user_id = planned_user(test_date());
        Tasks::new()
            .unwrap()
            .insert(&Task::new("Write report", "Quarterly numbers", TaskPriority::High, user_id))
            .unwrap();
        let output = ctx.temp_dir.path().join("tasks.csv");

        Exporter::new(ExportFormat::Csv, Some(output.clone())).export_tasks(user_id).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("ID,Name,Description,Priority"));
        assert!(content.contains("Write report"));
        assert!(content.contains("High"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_trend_json(ctx: &mut ExportTestContext) {
        let user_id = planned_user(test_date());
        let plan = planner::sessions_for_date(user_id, test_date()).unwrap().0;
        planner::set_status(plan[0].id.unwrap(), SessionStatus::Completed).unwrap();
        let output = ctx.temp_dir.path().join("trend.json");

        Exporter::new(ExportFormat::Json, Some(output.clone()))
            .export_trend(user_id, test_date(), test_date())
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(json["days"].as_array().unwrap().len(), 1);
        assert_eq!(json["days"][0]["sessions"], 2);
        assert_eq!(json["days"][0]["completed"], 1);
        assert_eq!(json["overall_rate"], 50.0);
    }
}
