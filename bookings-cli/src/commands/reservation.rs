//! Reservation command implementation.
//!
//! Shows the contact form for the picked room: the room, the dates and
//! whatever contact details were already entered.

use crate::error::CliError;
use crate::utils::{print_json, with_flow, GlobalOptions};
use bookings::date::format_date;
use clap::Args;

/// Show the reservation form for the picked room.
#[derive(Args)]
pub struct ReservationCommand {}

impl ReservationCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let draft = with_flow(global, |flow, session| Ok(flow.resume(session)?))?;

        if global.json {
            return print_json(&draft);
        }

        if let Some(room) = &draft.room {
            println!("Room: {}", room.name());
        }
        if let Some(range) = &draft.range {
            println!("Arrival: {}", format_date(range.start()));
            println!("Departure: {}", format_date(range.end()));
        }
        let contact = &draft.contact;
        println!("First name: {}", contact.first_name);
        println!("Last name: {}", contact.last_name);
        println!("Email: {}", contact.email);
        println!("Phone: {}", contact.phone);
        Ok(())
    }
}
