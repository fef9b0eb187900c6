//! Search command implementation.
//!
//! This module implements the `search` command, which lists the rooms free
//! for every day of a date range and starts a reservation draft holding
//! those dates.

use crate::error::CliError;
use crate::utils::{parse_range, print_json, with_flow, GlobalOptions};
use clap::Args;

/// Search all rooms for availability.
#[derive(Args)]
pub struct SearchCommand {
    /// Arrival date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: String,
}

impl SearchCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let range = parse_range(&self.start, &self.end)?;
        let rooms = with_flow(global, |flow, session| Ok(flow.search(session, &range)?))?;

        if rooms.is_empty() {
            return Err(CliError::SemanticFailure("No availability".into()));
        }

        if global.json {
            return print_json(&rooms);
        }

        if !global.quiet {
            println!("Available for {range}:");
        }
        for room in &rooms {
            println!("{}\t{}", room.id(), room.name());
        }
        Ok(())
    }
}
