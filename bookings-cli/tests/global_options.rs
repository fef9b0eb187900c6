//! Integration tests for global options and their environment variables.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_data_dir_from_env() {
    let env = TestEnv::new();

    env.command_bare()
        .env("BOOKINGS_DATA_DIR", &env.data_dir)
        .arg("rooms")
        .assert()
        .success();

    assert!(env.database_path().exists());
}

#[test]
fn test_data_dir_flag_creates_database() {
    let env = TestEnv::new();
    let custom = env.path().join("elsewhere");

    env.command_bare()
        .arg("--data-dir")
        .arg(&custom)
        .arg("rooms")
        .assert()
        .success();

    assert!(custom.join("bookings.db").exists());
    assert!(!env.database_path().exists());
}

#[test]
fn test_session_from_env() {
    let env = TestEnv::new();
    env.book_room("from-env", 1, "2050-06-01", "2050-06-02");

    env.command()
        .env("BOOKINGS_SESSION", "from-env")
        .arg("reservation")
        .assert()
        .success()
        .stdout(predicate::str::contains("General's Quarters"));
}

#[test]
fn test_default_session() {
    let env = TestEnv::new();

    env.command()
        .args(["book-room", "--room", "2"])
        .args(["--start", "2050-06-01", "--end", "2050-06-02"])
        .assert()
        .success();

    env.session("default")
        .arg("reservation")
        .assert()
        .success()
        .stdout(predicate::str::contains("Major's Suite"));
}

#[test]
fn test_quiet_suppresses_header() {
    let env = TestEnv::new();

    env.command()
        .args(["--quiet", "rooms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID\tNAME").not());
}

#[test]
fn test_verbose_prints_reservation_details() {
    let env = TestEnv::new();
    env.book_room("v", 1, "2050-06-01", "2050-06-02");

    env.session("v")
        .arg("--verbose")
        .arg("make-reservation")
        .args(["--first-name", "Ada", "--last-name", "Lovelace"])
        .args(["--email", "ada@example.com", "--phone", "555-0100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone: 555-0100"));
}

#[test]
fn test_busy_timeout_flag_accepted() {
    let env = TestEnv::new();

    env.command()
        .args(["--busy-timeout", "1", "rooms"])
        .assert()
        .success();
}

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("make-reservation"))
        .stdout(predicate::str::contains("summary"));
}
