//! Completion trend command.
//!
//! Buckets a profile's sessions across an inclusive date range into per-day
//! completion rates. Days inside the range without sessions show up as 0%.

use crate::{
    libs::{messages::Message, planner, trend, view::View},
    msg_print,
};
use anyhow::Result;
use chrono::{Duration, Local};
use clap::Args;

#[derive(Debug, Args)]
pub struct TrendArgs {
    #[arg(short, long, help = "Profile name, defaults to the configured profile")]
    user: Option<String>,
    #[arg(long, help = "Range start (YYYY-MM-DD), defaults to six days ago")]
    from: Option<String>,
    #[arg(long, help = "Range end (YYYY-MM-DD), defaults to today")]
    to: Option<String>,
}

pub fn cmd(trend_args: TrendArgs) -> Result<()> {
    let user = super::resolve_user(trend_args.user)?;

    let to = match trend_args.to {
        Some(date) => super::parse_date(&date)?,
        None => Local::now().date_naive(),
    };
    let from = match trend_args.from {
        Some(date) => super::parse_date(&date)?,
        None => to - Duration::days(6),
    };

    let statuses = planner::sessions_in_range(user.id.unwrap_or(0), from, to)?;
    let days = trend::completion_by_day(from, to, &statuses);

    msg_print!(Message::TrendHeader(from.to_string(), to.to_string()), true);
    View::trend(&days)
}
