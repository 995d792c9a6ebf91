use crate::db::users::User;
use crate::libs::session::Session;
use crate::libs::task::Task;
use crate::libs::trend::DailyCompletion;
use anyhow::Result;
use prettytable::{row, Table};
use std::collections::HashMap;

pub struct View {}

impl View {
    pub fn sessions(sessions: &[Session], tasks: &HashMap<i64, Task>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "START", "END", "STATUS", "TASK", "NOTE"]);
        for session in sessions {
            let task_name = session
                .task_id
                .and_then(|id| tasks.get(&id))
                .map(|t| t.name.as_str())
                .unwrap_or("-");
            table.add_row(row![
                session.id.unwrap_or(0),
                session.start_time,
                session.end_time,
                session.status.as_str(),
                task_name,
                session.note
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DESCRIPTION", "PRIORITY"]);
        for task in tasks {
            table.add_row(row![task.id.unwrap_or(0), task.name, task.description, task.priority.as_str()]);
        }
        table.printstd();

        Ok(())
    }

    pub fn users(users: &[User]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DAY START", "DAY END", "SESSION SIZE"]);
        for user in users {
            table.add_row(row![
                user.id.unwrap_or(0),
                user.name,
                user.schedule.day_start,
                user.schedule.day_end,
                format!("{} min", user.schedule.session_size)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn trend(days: &[DailyCompletion]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "SESSIONS", "COMPLETED", "RATE"]);
        for day in days {
            table.add_row(row![
                day.date.format("%Y-%m-%d"),
                day.total,
                day.completed,
                format!("{:.1}%", day.rate)
            ]);
        }
        table.printstd();

        Ok(())
    }
}
