//! Sets the status of a single session.

use crate::{
    libs::{messages::Message, planner, session::SessionStatus},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[arg(help = "Session ID")]
    session_id: i64,
    #[arg(help = "New status: Pending or Completed")]
    status: String,
}

pub fn cmd(status_args: StatusArgs) -> Result<()> {
    let status = SessionStatus::parse(&status_args.status)?;
    let session = planner::set_status(status_args.session_id, status)?;

    msg_success!(Message::SessionStatusUpdated(session.id.unwrap_or(0), session.status.as_str().to_string()));
    Ok(())
}
