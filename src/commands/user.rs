//! Profile management command.
//!
//! Profiles own the schedule settings the planner generates from. New
//! profiles start with the configured defaults unless the window is given
//! explicitly; `config` rewrites the window of an existing profile.

use crate::{
    db::users::{ScheduleConfig, Users},
    libs::{config::Config, messages::Message, view::View},
    msg_error_anyhow, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
enum UserCommands {
    #[command(about = "Create a profile")]
    Add {
        name: String,
        #[arg(long, help = "Day start time (HH:MM)")]
        start: Option<String>,
        #[arg(long, help = "Day end time (HH:MM)")]
        end: Option<String>,
        #[arg(long, help = "Session size in minutes (1-60)")]
        size: Option<u32>,
    },
    #[command(about = "List profiles")]
    List,
    #[command(about = "Update a profile's working window")]
    Config {
        name: String,
        #[arg(long, help = "Day start time (HH:MM)")]
        start: Option<String>,
        #[arg(long, help = "Day end time (HH:MM)")]
        end: Option<String>,
        #[arg(long, help = "Session size in minutes (1-60)")]
        size: Option<u32>,
    },
}

#[derive(Debug, Args)]
pub struct UserArgs {
    #[command(subcommand)]
    command: UserCommands,
}

pub fn cmd(user_args: UserArgs) -> Result<()> {
    match user_args.command {
        UserCommands::Add { name, start, end, size } => {
            let defaults = Config::read()?.schedule_defaults();
            let schedule = ScheduleConfig {
                day_start: start.unwrap_or(defaults.day_start),
                day_end: end.unwrap_or(defaults.day_end),
                session_size: size.unwrap_or(defaults.session_size),
            };
            Users::new()?.create(&name, &schedule)?;
            msg_success!(Message::UserCreated(name));
            Ok(())
        }
        UserCommands::List => {
            let users = Users::new()?.list()?;
            if users.is_empty() {
                msg_print!(Message::NoUsersFound);
                return Ok(());
            }
            msg_print!(Message::UsersHeader, true);
            View::users(&users)
        }
        UserCommands::Config { name, start, end, size } => {
            let mut users = Users::new()?;
            let user = users
                .get_by_name(&name)?
                .ok_or_else(|| msg_error_anyhow!(Message::UserNotFoundByName(name.clone())))?;

            let schedule = ScheduleConfig {
                day_start: start.unwrap_or(user.schedule.day_start),
                day_end: end.unwrap_or(user.schedule.day_end),
                session_size: size.unwrap_or(user.schedule.session_size),
            };
            users.update_schedule(user.id.unwrap_or(0), &schedule)?;
            msg_success!(Message::UserScheduleUpdated(name));
            Ok(())
        }
    }
}
