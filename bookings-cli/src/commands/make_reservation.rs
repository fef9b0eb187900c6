//! Make-reservation command implementation.
//!
//! This module implements the `make-reservation` command, which validates
//! the contact form and books the picked room. Invalid input is kept in the
//! session draft so the form can be corrected field by field.

use crate::error::CliError;
use crate::utils::{print_json, print_reservation, with_flow, GlobalOptions};
use bookings::{ContactDetails, FormFields, SubmitOutcome};
use clap::Args;
use serde_json::json;

/// Submit contact details and book the picked room.
#[derive(Args)]
pub struct MakeReservationCommand {
    /// Guest first name
    #[arg(long, value_name = "NAME", default_value = "")]
    pub first_name: String,

    /// Guest last name
    #[arg(long, value_name = "NAME", default_value = "")]
    pub last_name: String,

    /// Guest email address
    #[arg(long, value_name = "EMAIL", default_value = "")]
    pub email: String,

    /// Guest phone number
    #[arg(long, value_name = "PHONE", default_value = "")]
    pub phone: String,
}

impl MakeReservationCommand {
    fn fields(&self) -> FormFields {
        FormFields::new()
            .with(ContactDetails::FIRST_NAME, self.first_name.as_str())
            .with(ContactDetails::LAST_NAME, self.last_name.as_str())
            .with(ContactDetails::EMAIL, self.email.as_str())
            .with(ContactDetails::PHONE, self.phone.as_str())
    }

    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let fields = self.fields();
        let outcome = with_flow(global, |flow, session| Ok(flow.submit(session, &fields)?))?;

        match outcome {
            SubmitOutcome::Invalid { validation, .. } => {
                if global.json {
                    print_json(&json!({
                        "valid": false,
                        "errors": validation.errors,
                    }))?;
                } else {
                    for (field, messages) in validation.errors.iter() {
                        for message in messages {
                            eprintln!("{field}: {message}");
                        }
                    }
                }
                Err(CliError::SemanticFailure(
                    "Please correct the highlighted fields".into(),
                ))
            }
            SubmitOutcome::Committed(reservation) => {
                if global.json {
                    return print_json(&reservation);
                }
                if let Some(id) = reservation.id() {
                    println!(
                        "Reservation #{id} confirmed: {} for {}",
                        reservation.room().name(),
                        reservation.range()
                    );
                }
                if global.verbose {
                    print_reservation(&reservation);
                }
                Ok(())
            }
        }
    }
}
