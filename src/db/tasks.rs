use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter, TaskPriority};
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    priority TEXT NOT NULL DEFAULT 'Medium',
    user_id INTEGER NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_TASK: &str = "INSERT INTO tasks (name, description, priority, user_id) VALUES (?1, ?2, ?3, ?4)";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, name, description, priority, user_id, created_at FROM tasks";
const SELECT_TASK_BY_ID: &str = "SELECT id, name, description, priority, user_id, created_at FROM tasks WHERE id = ?1";
const WHERE_USER: &str = "WHERE user_id = ?1";
const WHERE_ID: &str = "WHERE id IN";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    pub fn insert(&mut self, task: &Task) -> Result<i64> {
        self.conn
            .execute(INSERT_TASK, params![task.name, task.description, task.priority.as_str(), task.user_id])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn delete(&mut self, id: i64) -> Result<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id)));
        }
        Ok(())
    }

    /// Point lookup used by the session planner to verify a task exists
    /// before it is pinned to a slot.
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(SELECT_TASK_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (mut stmt, params) = match filter {
            TaskFilter::All => (self.conn.prepare(SELECT_TASKS)?, vec![]),
            TaskFilter::ByUser(user_id) => (self.conn.prepare(&format!("{} {}", SELECT_TASKS, WHERE_USER))?, vec![user_id]),
            TaskFilter::ByIds(ids) => (
                self.conn
                    .prepare(&format!("{} {} ({})", SELECT_TASKS, WHERE_ID, vec!["?"; ids.len()].join(", ")))?,
                ids,
            ),
        };

        let task_iter = stmt.query_map(params_from_iter(params.iter()), Self::map_row)?;
        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            priority: TaskPriority::from_str_or_default(&row.get::<_, String>(3)?),
            user_id: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}
