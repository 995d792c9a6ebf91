//! Task management command.
//!
//! Tasks are plain records pinned to sessions by id; deleting one does not
//! touch the sessions that referenced it.

use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{Task, TaskFilter, TaskPriority},
        view::View,
    },
    msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
enum TaskCommands {
    #[command(about = "Create a task")]
    Add {
        name: String,
        #[arg(short, long, default_value = "", help = "Task description")]
        description: String,
        #[arg(short, long, value_enum, default_value = "medium", help = "Task priority")]
        priority: TaskPriority,
        #[arg(short, long, help = "Profile name, defaults to the configured profile")]
        user: Option<String>,
    },
    #[command(about = "List tasks")]
    List {
        #[arg(short, long, help = "Profile name, defaults to the configured profile")]
        user: Option<String>,
    },
    #[command(about = "Delete a task")]
    Delete {
        #[arg(help = "Task ID")]
        id: i64,
    },
}

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommands,
}

pub fn cmd(task_args: TaskArgs) -> Result<()> {
    match task_args.command {
        TaskCommands::Add {
            name,
            description,
            priority,
            user,
        } => {
            let user = super::resolve_user(user)?;
            let task = Task::new(&name, &description, priority, user.id.unwrap_or(0));
            Tasks::new()?.insert(&task)?;
            msg_success!(Message::TaskCreated(name));
            Ok(())
        }
        TaskCommands::List { user } => {
            let user = super::resolve_user(user)?;
            let tasks = Tasks::new()?.fetch(TaskFilter::ByUser(user.id.unwrap_or(0)))?;
            if tasks.is_empty() {
                msg_print!(Message::NoTasksFound);
                return Ok(());
            }
            msg_print!(Message::TasksHeader, true);
            View::tasks(&tasks)
        }
        TaskCommands::Delete { id } => {
            Tasks::new()?.delete(id)?;
            msg_success!(Message::TaskDeleted(id));
            Ok(())
        }
    }
}
