//! End-to-end tests of the reservation flow against a real database.

mod common;

use bookings::database::Database;
use bookings::draft::DRAFT_KEY;
use bookings::{
    DraftStage, Error, FormFields, MemorySessionStore, ReservationDraft, ReservationFlow,
    SessionId, SessionStore, SubmitOutcome,
};
use common::{create_test_database, range, valid_fields};

fn session(id: &str) -> SessionId {
    SessionId::new(id).unwrap()
}

#[test]
fn test_search_choose_submit_summary() {
    let mut db = create_test_database();
    let sessions = MemorySessionStore::default();
    let visitor = session("visitor");
    let mut flow = ReservationFlow::new(&mut db, &sessions);

    let stay = range("2050-06-01", "2050-06-03");
    let rooms = flow.search(&visitor, &stay).unwrap();
    assert_eq!(rooms.len(), 2);
    assert_eq!(
        flow.draft(&visitor).unwrap().unwrap().stage,
        DraftStage::Empty
    );

    let draft = flow.choose_room(&visitor, rooms[0].id()).unwrap();
    assert_eq!(draft.stage, DraftStage::RoomSelected);

    let draft = flow.resume(&visitor).unwrap();
    assert_eq!(draft.stage, DraftStage::ContactPending);

    let SubmitOutcome::Committed(reservation) = flow.submit(&visitor, &valid_fields()).unwrap()
    else {
        panic!("expected a committed reservation");
    };
    assert!(reservation.id().is_some());
    assert_eq!(reservation.range(), stay);
    assert!(flow.draft(&visitor).unwrap().is_none());

    let summary = flow.take_summary(&visitor).unwrap();
    assert_eq!(summary, reservation);
    assert!(matches!(
        flow.take_summary(&visitor),
        Err(Error::NoActiveDraft)
    ));

    drop(flow);
    let conn = db.connection();
    assert_eq!(Database::count_reservations(conn).unwrap(), 1);
    assert_eq!(Database::list_restrictions(conn, rooms[0].id()).unwrap().len(), 1);
}

#[test]
fn test_booked_room_leaves_search_results() {
    let mut db = create_test_database();
    let sessions = MemorySessionStore::default();
    let mut flow = ReservationFlow::new(&mut db, &sessions);

    let first = session("first");
    flow.book_room(&first, 1, &range("2050-06-01", "2050-06-03"))
        .unwrap();
    flow.submit(&first, &valid_fields()).unwrap();

    let second = session("second");
    let rooms = flow
        .search(&second, &range("2050-06-03", "2050-06-04"))
        .unwrap();
    let ids: Vec<_> = rooms.iter().map(bookings::Room::id).collect();
    assert_eq!(ids, vec![2]);

    let rooms = flow
        .search(&second, &range("2050-06-04", "2050-06-05"))
        .unwrap();
    assert_eq!(rooms.len(), 2);
}

#[test]
fn test_invalid_then_valid_submission() {
    let mut db = create_test_database();
    let sessions = MemorySessionStore::default();
    let visitor = session("visitor");
    let mut flow = ReservationFlow::new(&mut db, &sessions);
    flow.book_room(&visitor, 2, &range("2050-06-01", "2050-06-01"))
        .unwrap();

    let fields = FormFields::new()
        .with("first_name", "Al")
        .with("last_name", "")
        .with("email", "al@");
    let SubmitOutcome::Invalid { draft, validation } = flow.submit(&visitor, &fields).unwrap()
    else {
        panic!("expected validation errors");
    };
    assert_eq!(draft.stage, DraftStage::ContactPending);
    assert_eq!(draft.contact.first_name, "Al");
    assert!(validation.errors.get("first_name").is_some());
    assert!(validation.errors.get("last_name").is_some());
    assert!(validation.errors.get("email").is_some());

    let saved = flow.draft(&visitor).unwrap().unwrap();
    assert_eq!(saved.contact.email, "al@");

    assert!(matches!(
        flow.submit(&visitor, &valid_fields()).unwrap(),
        SubmitOutcome::Committed(_)
    ));
}

#[test]
fn test_lost_race_keeps_draft_pending() {
    let mut db = create_test_database();
    let sessions = MemorySessionStore::default();
    let mut flow = ReservationFlow::new(&mut db, &sessions);

    let first = session("first");
    let second = session("second");
    flow.book_room(&first, 1, &range("2050-06-01", "2050-06-03"))
        .unwrap();
    flow.book_room(&second, 1, &range("2050-06-03", "2050-06-05"))
        .unwrap();

    flow.submit(&first, &valid_fields()).unwrap();
    let err = flow.submit(&second, &valid_fields()).unwrap_err();
    assert!(err.is_conflict());
    assert!(matches!(err, Error::RoomNoLongerAvailable { room_id: 1, .. }));

    let draft = flow.draft(&second).unwrap().unwrap();
    assert_eq!(draft.stage, DraftStage::ContactPending);
    assert_eq!(draft.contact.first_name, "Ada");
}

#[test]
fn test_drafts_survive_across_handles() {
    let mut db = create_test_database();
    let sessions = common::open_at(&common::path_of(&db));
    let visitor = session("visitor");

    {
        let flow = ReservationFlow::new(&mut db, &sessions);
        flow.search(&visitor, &range("2050-06-01", "2050-06-02"))
            .unwrap();
        flow.choose_room(&visitor, 2).unwrap();
    }

    let reopened = common::open_at(&common::path_of(&db));
    let mut flow = ReservationFlow::new(&mut db, &reopened);
    let draft = flow.resume(&visitor).unwrap();
    assert_eq!(draft.room_id(), Some(2));
    assert!(matches!(
        flow.submit(&visitor, &valid_fields()).unwrap(),
        SubmitOutcome::Committed(_)
    ));
}

#[test]
fn test_search_on_empty_store_returns_every_room() {
    let mut db = create_test_database();
    let sessions = MemorySessionStore::default();
    let flow = ReservationFlow::new(&mut db, &sessions);

    let rooms = flow
        .search(&session("visitor"), &range("2050-01-01", "2050-01-02"))
        .unwrap();
    let ids: Vec<_> = rooms.iter().map(bookings::Room::id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_committed_room_reports_unavailable() {
    let mut db = create_test_database();
    let sessions = MemorySessionStore::default();
    let visitor = session("visitor");
    let stay = range("2050-01-01", "2050-01-02");
    let mut flow = ReservationFlow::new(&mut db, &sessions);

    assert!(flow.check(1, &stay).unwrap().ok);
    flow.search(&visitor, &stay).unwrap();
    flow.choose_room(&visitor, 1).unwrap();
    flow.submit(&visitor, &valid_fields()).unwrap();

    let report = flow.check(1, &stay).unwrap();
    assert!(!report.ok);
    assert_eq!(report.message, "Unavailable");
}

#[test]
fn test_contact_pending_without_room_has_no_draft() {
    let mut db = create_test_database();
    let sessions = MemorySessionStore::default();
    let visitor = session("visitor");

    let draft = ReservationDraft {
        range: Some(range("2050-01-01", "2050-01-02")),
        room: None,
        contact: common::contact(),
        stage: DraftStage::ContactPending,
    };
    sessions.store(&visitor, DRAFT_KEY, &draft).unwrap();

    let mut flow = ReservationFlow::new(&mut db, &sessions);
    assert!(matches!(flow.resume(&visitor), Err(Error::NoActiveDraft)));
    assert!(matches!(
        flow.submit(&visitor, &valid_fields()),
        Err(Error::NoActiveDraft)
    ));

    drop(flow);
    assert_eq!(Database::count_reservations(db.connection()).unwrap(), 0);
}
