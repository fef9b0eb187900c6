//! Book-room command implementation.
//!
//! Picks a room and dates in one step, the way a direct "book now" link
//! would, replacing whatever draft the session held.

use crate::error::CliError;
use crate::utils::{parse_range, print_json, with_flow, GlobalOptions};
use bookings::RoomId;
use clap::Args;

/// Pick a room and dates in one step.
#[derive(Args)]
pub struct BookRoomCommand {
    /// Room to pick
    #[arg(long, value_name = "ID")]
    pub room: RoomId,

    /// Arrival date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: String,
}

impl BookRoomCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let range = parse_range(&self.start, &self.end)?;
        let draft = with_flow(global, |flow, session| {
            Ok(flow.book_room(session, self.room, &range)?)
        })?;

        if global.json {
            return print_json(&draft);
        }

        if let Some(room) = &draft.room {
            if !global.quiet {
                println!("Selected {} for {range}", room.name());
            }
        }
        Ok(())
    }
}
