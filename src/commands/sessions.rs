//! Displays a day's sessions with their pinned tasks.

use crate::{
    libs::{messages::Message, planner, view::View},
    msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct SessionsArgs {
    #[arg(short, long, help = "Profile name, defaults to the configured profile")]
    user: Option<String>,
    #[arg(short, long, help = "Date (YYYY-MM-DD), defaults to today")]
    date: Option<String>,
}

pub fn cmd(sessions_args: SessionsArgs) -> Result<()> {
    let user = super::resolve_user(sessions_args.user)?;
    let date = match sessions_args.date {
        Some(date) => super::parse_date(&date)?,
        None => Local::now().date_naive(),
    };

    let (sessions, tasks) = planner::sessions_for_date(user.id.unwrap_or(0), date)?;
    if sessions.is_empty() {
        msg_print!(Message::NoSessionsForDate(date.to_string()));
        return Ok(());
    }

    msg_print!(Message::SessionsHeader(date.to_string()), true);
    View::sessions(&sessions, &tasks)
}
