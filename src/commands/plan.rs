//! Daily session generation command.
//!
//! Idempotent: planning an already planned day reports the existing set
//! instead of creating duplicates.

use crate::{
    libs::{messages::Message, planner, view::View},
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::collections::HashMap;

#[derive(Debug, Args)]
pub struct PlanArgs {
    #[arg(short, long, help = "Profile name, defaults to the configured profile")]
    user: Option<String>,
    #[arg(short, long, help = "Date (YYYY-MM-DD), defaults to today")]
    date: Option<String>,
}

pub fn cmd(plan_args: PlanArgs) -> Result<()> {
    let user = super::resolve_user(plan_args.user)?;
    let date = match plan_args.date {
        Some(date) => super::parse_date(&date)?,
        None => Local::now().date_naive(),
    };

    let plan = planner::ensure_daily_sessions(user.id.unwrap_or(0), date)?;
    if plan.created {
        msg_success!(Message::SessionsCreated(plan.sessions.len(), date.to_string()));
    } else {
        msg_info!(Message::SessionsAlreadyExist(date.to_string()));
    }

    View::sessions(&plan.sessions, &HashMap::new())
}
