#[cfg(test)]
mod tests {
    use sesh::libs::config::{Config, ScheduleDefaults};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var("SESH_DAY_START");
            std::env::remove_var("SESH_DAY_END");
            std::env::remove_var("SESH_SESSION_SIZE");
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_yields_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.schedule.is_none());
        assert!(config.default_user.is_none());

        let defaults = config.schedule_defaults();
        assert_eq!(defaults.day_start, "09:00");
        assert_eq!(defaults.day_end, "17:00");
        assert_eq!(defaults.session_size, 15);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            schedule: Some(ScheduleDefaults {
                day_start: "08:30".to_string(),
                day_end: "16:00".to_string(),
                session_size: 45,
            }),
            default_user: Some("alice".to_string()),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.schedule, config.schedule);
        assert_eq!(loaded.default_user, Some("alice".to_string()));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_overrides_win(_ctx: &mut ConfigTestContext) {
        let config = Config {
            schedule: Some(ScheduleDefaults {
                day_start: "08:30".to_string(),
                day_end: "16:00".to_string(),
                session_size: 45,
            }),
            default_user: None,
        };

        std::env::set_var("SESH_DAY_START", "07:00");
        std::env::set_var("SESH_SESSION_SIZE", "20");

        let defaults = config.schedule_defaults();
        assert_eq!(defaults.day_start, "07:00");
        assert_eq!(defaults.day_end, "16:00");
        assert_eq!(defaults.session_size, 20);

        std::env::remove_var("SESH_DAY_START");
        std::env::remove_var("SESH_SESSION_SIZE");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unparseable_env_size_is_ignored(_ctx: &mut ConfigTestContext) {
        std::env::set_var("SESH_SESSION_SIZE", "soon");

        let defaults = Config::read().unwrap().schedule_defaults();
        assert_eq!(defaults.session_size, 15);

        std::env::remove_var("SESH_SESSION_SIZE");
    }
}
