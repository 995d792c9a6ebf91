//! Sets the free-text note of a single session.

use crate::{
    libs::{messages::Message, planner},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct NoteArgs {
    #[arg(help = "Session ID")]
    session_id: i64,
    #[arg(help = "Note text; omit to clear the note")]
    note: Option<String>,
}

pub fn cmd(note_args: NoteArgs) -> Result<()> {
    let session = planner::set_note(note_args.session_id, note_args.note)?;

    msg_success!(Message::SessionNoteUpdated(session.id.unwrap_or(0)));
    Ok(())
}
