//! Pins a task to a session slot, or clears the pin.

use crate::{
    libs::{messages::Message, planner},
    msg_success,
};
use anyhow::Result;
use clap::{ArgGroup, Args};

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true)))]
pub struct AssignArgs {
    #[arg(help = "Session ID")]
    session_id: i64,
    #[arg(short, long, group = "target", help = "Task ID to pin")]
    task: Option<i64>,
    #[arg(short, long, group = "target", help = "Unpin the current task")]
    clear: bool,
}

pub fn cmd(assign_args: AssignArgs) -> Result<()> {
    let session = planner::assign_task(assign_args.session_id, assign_args.task)?;

    match session.task_id {
        Some(task_id) => msg_success!(Message::SessionTaskAssigned(session.id.unwrap_or(0), task_id)),
        None => msg_success!(Message::SessionTaskCleared(session.id.unwrap_or(0))),
    }
    Ok(())
}
