//! Data export command.
//!
//! Extracts a planned day, the task list or a completion trend to CSV,
//! JSON or Excel for external analysis.

use crate::{
    libs::{
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
    },
    msg_info,
};
use anyhow::Result;
use chrono::{Duration, Local};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Type of data to export
    #[arg(value_enum, default_value = "plan")]
    data: ExportData,

    /// Output format for the exported data
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Profile name, defaults to the configured profile")]
    user: Option<String>,

    #[arg(short, long, help = "Date for plan export (YYYY-MM-DD), defaults to today")]
    date: Option<String>,

    #[arg(long, help = "Range start for trend export (YYYY-MM-DD), defaults to six days ago")]
    from: Option<String>,

    #[arg(long, help = "Range end for trend export (YYYY-MM-DD), defaults to today")]
    to: Option<String>,
}

pub fn cmd(export_args: ExportArgs) -> Result<()> {
    let user = super::resolve_user(export_args.user)?;
    let user_id = user.id.unwrap_or(0);

    let date = match export_args.date {
        Some(date) => super::parse_date(&date)?,
        None => Local::now().date_naive(),
    };
    let to = match export_args.to {
        Some(date) => super::parse_date(&date)?,
        None => Local::now().date_naive(),
    };
    let from = match export_args.from {
        Some(date) => super::parse_date(&date)?,
        None => to - Duration::days(6),
    };

    msg_info!(Message::ExportingData);
    let exporter = Exporter::new(export_args.format, export_args.output);

    match export_args.data {
        ExportData::Plan => exporter.export_plan(user_id, date),
        ExportData::Tasks => exporter.export_tasks(user_id),
        ExportData::Trend => exporter.export_trend(user_id, from, to),
    }
}
