#[derive(Debug, Clone)]
pub enum Message {
    // === USER MESSAGES ===
    UserCreated(String),
    UserScheduleUpdated(String),
    UserNotFound(i64),
    UserNotFoundByName(String),
    UserAlreadyExists(String),
    NoUsersFound,
    NoUserSpecified,
    UsersHeader,

    // === SCHEDULE CONFIGURATION MESSAGES ===
    SessionSizeOutOfRange(u32),
    ScheduleWindowInvalid(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleSchedule,
    PromptDayStart,
    PromptDayEnd,
    PromptSessionSize,
    PromptDefaultUser,

    // === SESSION MESSAGES ===
    SessionsCreated(usize, String),          // count, date
    SessionsAlreadyExist(String),            // date
    SessionNotFound(i64),
    SessionStatusUpdated(i64, String),       // id, status
    SessionTaskAssigned(i64, i64),           // session id, task id
    SessionTaskCleared(i64),
    SessionNoteUpdated(i64),
    NoSessionsForDate(String),
    SessionsHeader(String),                  // date
    InvalidStatus(String),

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskDeleted(i64),
    TaskNotFound(i64),
    NoTasksFound,
    TasksHeader,

    // === TREND MESSAGES ===
    TrendHeader(String, String), // from, to
    InvalidDate(String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportingData,

    // === DATABASE MESSAGES ===
    MigrationApplied(u32, String), // version, name
}
