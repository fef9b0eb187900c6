//! Main entry point for the bookings CLI.
//!
//! This is the command-line interface for the room booking system. A
//! reservation is built over several invocations sharing a `--session`:
//! - `search`: Find free rooms for a date range
//! - `choose-room` / `book-room`: Pick a room
//! - `reservation`: Show the contact form for the picked room
//! - `make-reservation`: Submit contact details and book
//! - `summary`: Show the booked reservation

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    bookings::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
        session: cli.session,
        json: cli.json,
    };

    let result = match cli.command {
        cli::Command::Rooms(cmd) => cmd.execute(&global),
        cli::Command::Search(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::ChooseRoom(cmd) => cmd.execute(&global),
        cli::Command::BookRoom(cmd) => cmd.execute(&global),
        cli::Command::Reservation(cmd) => cmd.execute(&global),
        cli::Command::MakeReservation(cmd) => cmd.execute(&global),
        cli::Command::Summary(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
