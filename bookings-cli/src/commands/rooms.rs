//! Rooms command implementation.
//!
//! Lists the room catalog, one room per line.

use crate::error::CliError;
use crate::utils::{print_json, with_flow, GlobalOptions};
use clap::Args;

/// List the rooms.
#[derive(Args)]
pub struct RoomsCommand {}

impl RoomsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let rooms = with_flow(global, |flow, _| Ok(flow.rooms()?))?;

        if global.json {
            return print_json(&rooms);
        }

        if !global.quiet {
            println!("ID\tNAME");
        }
        for room in &rooms {
            println!("{}\t{}", room.id(), room.name());
        }
        Ok(())
    }
}
