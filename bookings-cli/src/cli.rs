//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BookRoomCommand, CheckCommand, ChooseRoomCommand, MakeReservationCommand, ReservationCommand,
    RoomsCommand, SearchCommand, SummaryCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for searching room availability and booking rooms.
#[derive(Parser)]
#[command(name = "bookings")]
#[command(version, about = "Search room availability and make reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "BOOKINGS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "BOOKINGS_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "BOOKINGS_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    /// Session id carrying the reservation draft between invocations
    #[arg(
        long,
        value_name = "ID",
        global = true,
        env = "BOOKINGS_SESSION",
        default_value = "default"
    )]
    pub session: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the rooms
    Rooms(RoomsCommand),

    /// Search all rooms for availability and start a reservation
    Search(SearchCommand),

    /// Check whether one room is available
    Check(CheckCommand),

    /// Pick a room for the dates of the last search
    ChooseRoom(ChooseRoomCommand),

    /// Pick a room and dates in one step
    BookRoom(BookRoomCommand),

    /// Show the reservation form for the picked room
    Reservation(ReservationCommand),

    /// Submit contact details and book the picked room
    MakeReservation(MakeReservationCommand),

    /// Show the last booked reservation once
    Summary(SummaryCommand),
}
