#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sesh::commands::parse_date;
    use sesh::db::users::{ScheduleConfig, Users};
    use sesh::libs::planner;
    use sesh::libs::session::{DayStatus, SessionStatus};
    use sesh::libs::trend::{completion_by_day, overall_rate};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct TrendTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for TrendTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TrendTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    fn create_user(name: &str) -> i64 {
        Users::new()
            .unwrap()
            .create(
                name,
                &ScheduleConfig {
                    day_start: "09:00".to_string(),
                    day_end: "10:00".to_string(),
                    session_size: 30,
                },
            )
            .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_parse_date_validation() {
        assert_eq!(parse_date("2024-01-01").unwrap(), date(1));
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("01-01-2024").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test_context(TrendTestContext)]
    #[test]
    fn test_single_day_range_is_inclusive(_ctx: &mut TrendTestContext) {
        let user_id = create_user("alice");
        planner::ensure_daily_sessions(user_id, date(1)).unwrap();
        planner::ensure_daily_sessions(user_id, date(2)).unwrap();

        let statuses = planner::sessions_in_range(user_id, date(1), date(1)).unwrap();
        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().all(|s| s.date == date(1)));
    }

    #[test_context(TrendTestContext)]
    #[test]
    fn test_range_boundaries_and_ordering(_ctx: &mut TrendTestContext) {
        let user_id = create_user("alice");
        planner::ensure_daily_sessions(user_id, date(3)).unwrap();
        planner::ensure_daily_sessions(user_id, date(1)).unwrap();
        planner::ensure_daily_sessions(user_id, date(2)).unwrap();
        planner::ensure_daily_sessions(user_id, date(5)).unwrap();

        let statuses = planner::sessions_in_range(user_id, date(1), date(3)).unwrap();
        assert_eq!(statuses.len(), 6);

        // Ascending by date, boundary days included, day 5 excluded
        let dates: Vec<_> = statuses.iter().map(|s| s.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(dates.first(), Some(&date(1)));
        assert_eq!(dates.last(), Some(&date(3)));
    }

    #[test_context(TrendTestContext)]
    #[test]
    fn test_range_excludes_other_users(_ctx: &mut TrendTestContext) {
        let alice = create_user("alice");
        let bob = create_user("bob");
        planner::ensure_daily_sessions(alice, date(1)).unwrap();
        planner::ensure_daily_sessions(bob, date(1)).unwrap();

        let statuses = planner::sessions_in_range(alice, date(1), date(1)).unwrap();
        assert_eq!(statuses.len(), 2);
    }

    #[test_context(TrendTestContext)]
    #[test]
    fn test_range_never_mutates(_ctx: &mut TrendTestContext) {
        let user_id = create_user("alice");
        let plan = planner::ensure_daily_sessions(user_id, date(1)).unwrap();
        planner::set_status(plan.sessions[0].id.unwrap(), SessionStatus::Completed).unwrap();

        let before = planner::sessions_for_date(user_id, date(1)).unwrap().0;
        planner::sessions_in_range(user_id, date(1), date(1)).unwrap();
        let after = planner::sessions_for_date(user_id, date(1)).unwrap().0;
        assert_eq!(before, after);
    }

    #[test_context(TrendTestContext)]
    #[test]
    fn test_completion_rates_from_db(_ctx: &mut TrendTestContext) {
        let user_id = create_user("alice");
        let plan = planner::ensure_daily_sessions(user_id, date(1)).unwrap();
        planner::set_status(plan.sessions[0].id.unwrap(), SessionStatus::Completed).unwrap();

        let statuses = planner::sessions_in_range(user_id, date(1), date(2)).unwrap();
        let days = completion_by_day(date(1), date(2), &statuses);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].total, 2);
        assert_eq!(days[0].completed, 1);
        assert_eq!(days[0].rate, 50.0);
        // Day without sessions reports 0%, not an absent row
        assert_eq!(days[1].total, 0);
        assert_eq!(days[1].rate, 0.0);
    }

    #[test]
    fn test_completion_by_day_buckets_pure() {
        let statuses = vec![
            DayStatus { date: date(1), status: SessionStatus::Completed },
            DayStatus { date: date(1), status: SessionStatus::Completed },
            DayStatus { date: date(1), status: SessionStatus::Pending },
            DayStatus { date: date(3), status: SessionStatus::Pending },
        ];

        let days = completion_by_day(date(1), date(3), &statuses);
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].completed, 2);
        assert!((days[0].rate - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(days[1].total, 0);
        assert_eq!(days[1].rate, 0.0);
        assert_eq!(days[2].total, 1);
        assert_eq!(days[2].rate, 0.0);
    }

    #[test]
    fn test_overall_rate() {
        assert_eq!(overall_rate(&[]), 0.0);

        let statuses = vec![
            DayStatus { date: date(1), status: SessionStatus::Completed },
            DayStatus { date: date(2), status: SessionStatus::Pending },
        ];
        assert_eq!(overall_rate(&statuses), 50.0);
    }
}
