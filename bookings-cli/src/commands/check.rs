//! Check command implementation.
//!
//! Reports whether a single room is free for a date range. The session is
//! left untouched and an unavailable room is not a failure.

use crate::error::CliError;
use crate::utils::{parse_range, print_json, with_flow, GlobalOptions};
use bookings::RoomId;
use clap::Args;

/// Check whether one room is available.
#[derive(Args)]
pub struct CheckCommand {
    /// Room to check
    #[arg(long, value_name = "ID")]
    pub room: RoomId,

    /// Arrival date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: String,

    /// Departure date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: String,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let range = parse_range(&self.start, &self.end)?;
        let report = with_flow(global, |flow, _| Ok(flow.check(self.room, &range)?))?;

        if global.json {
            print_json(&report)
        } else {
            println!("{}", report.message);
            Ok(())
        }
    }
}
