//! Choose-room command implementation.

use crate::error::CliError;
use crate::utils::{print_json, with_flow, GlobalOptions};
use bookings::RoomId;
use clap::Args;

/// Pick a room for the dates of the last search.
#[derive(Args)]
pub struct ChooseRoomCommand {
    /// Room to pick
    #[arg(long, value_name = "ID")]
    pub room: RoomId,
}

impl ChooseRoomCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let draft = with_flow(global, |flow, session| {
            Ok(flow.choose_room(session, self.room)?)
        })?;

        if global.json {
            return print_json(&draft);
        }

        if let (Some(room), Some(range)) = (&draft.room, &draft.range) {
            if !global.quiet {
                println!("Selected {} for {range}", room.name());
            }
        }
        Ok(())
    }
}
