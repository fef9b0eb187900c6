//! Summary command implementation.
//!
//! Shows the reservation booked by the last `make-reservation` in this
//! session. The summary is removed once shown.

use crate::error::CliError;
use crate::utils::{print_json, print_reservation, with_flow, GlobalOptions};
use clap::Args;

/// Show the last booked reservation once.
#[derive(Args)]
pub struct SummaryCommand {}

impl SummaryCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let reservation = with_flow(global, |flow, session| Ok(flow.take_summary(session)?))?;

        if global.json {
            print_json(&reservation)
        } else {
            print_reservation(&reservation);
            Ok(())
        }
    }
}
