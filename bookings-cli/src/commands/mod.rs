//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `rooms`: List the rooms
//! - `search`: Search all rooms for a date range
//! - `check`: Check one room for a date range
//! - `choose_room`: Pick a room for the searched dates
//! - `book_room`: Pick a room and dates in one step
//! - `reservation`: Show the reservation form
//! - `make_reservation`: Submit the reservation form
//! - `summary`: Show the booked reservation

pub mod book_room;
pub mod check;
pub mod choose_room;
pub mod make_reservation;
pub mod reservation;
pub mod rooms;
pub mod search;
pub mod summary;

pub use book_room::BookRoomCommand;
pub use check::CheckCommand;
pub use choose_room::ChooseRoomCommand;
pub use make_reservation::MakeReservationCommand;
pub use reservation::ReservationCommand;
pub use rooms::RoomsCommand;
pub use search::SearchCommand;
pub use summary::SummaryCommand;
