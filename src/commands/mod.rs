pub mod assign;
pub mod export;
pub mod init;
pub mod note;
pub mod plan;
pub mod sessions;
pub mod status;
pub mod task;
pub mod trend;
pub mod user;

use crate::db::users::{User, Users};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage profiles")]
    User(user::UserArgs),
    #[command(about = "Generate the session plan for a date")]
    Plan(plan::PlanArgs),
    #[command(about = "Display sessions for a date")]
    Sessions(sessions::SessionsArgs),
    #[command(about = "Set session status", arg_required_else_help = true)]
    Status(status::StatusArgs),
    #[command(about = "Pin a task to a session", arg_required_else_help = true)]
    Assign(assign::AssignArgs),
    #[command(about = "Set a session note", arg_required_else_help = true)]
    Note(note::NoteArgs),
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Show completion trend for a date range")]
    Trend(trend::TrendArgs),
    #[command(about = "Export data to CSV, JSON or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::User(args) => user::cmd(args),
            Commands::Plan(args) => plan::cmd(args),
            Commands::Sessions(args) => sessions::cmd(args),
            Commands::Status(args) => status::cmd(args),
            Commands::Assign(args) => assign::cmd(args),
            Commands::Note(args) => note::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Trend(args) => trend::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Resolves the target profile from `--user` or the configured default.
pub(crate) fn resolve_user(name: Option<String>) -> Result<User> {
    let name = match name {
        Some(name) => name,
        None => Config::read()?.default_user.ok_or_else(|| msg_error_anyhow!(Message::NoUserSpecified))?,
    };
    Users::new()?
        .get_by_name(&name)?
        .ok_or_else(|| msg_error_anyhow!(Message::UserNotFoundByName(name)))
}

/// Parses a caller-supplied `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}
