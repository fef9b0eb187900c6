use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use tempfile::TempDir;

use bookings::database::{Database, DatabaseConfig};
use bookings::{
    AvailabilityEngine, BookingCommitter, ContactDetails, DateRange, ReservationDraft, Room,
};

const ROOM_COUNTS: &[i64] = &[2, 20, 100];
const BOOKINGS_PER_ROOM: u64 = 50;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2050, 1, 1).expect("valid base date")
}

fn stay(offset: u64, nights: u64) -> DateRange {
    let start = base_date() + Days::new(offset);
    DateRange::new(start, start + Days::new(nights)).expect("valid stay")
}

fn contact() -> ContactDetails {
    ContactDetails {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        phone: String::new(),
    }
}

fn setup_database(rooms: i64) -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("failed to create temporary directory");
    let catalog = (1..=rooms).map(|id| Room::new(id, format!("Room {id}"))).collect();
    let config = DatabaseConfig::new(temp_dir.path().join("bookings.db")).with_rooms(catalog);
    let db = Database::open(config).expect("failed to open temporary database");
    (temp_dir, db)
}

/// Books every room for short stays spread over the year.
fn populate(db: &mut Database, rooms: i64) {
    for id in 1..=rooms {
        for n in 0..BOOKINGS_PER_ROOM {
            let mut draft = ReservationDraft::for_room(Room::new(id, "room"), stay(n * 7, 2));
            draft.contact = contact();
            BookingCommitter::new(db)
                .commit(&draft)
                .expect("failed to commit booking");
        }
    }
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for &rooms in ROOM_COUNTS {
        let (_temp_dir, mut db) = setup_database(rooms);
        populate(&mut db, rooms);
        let conn = db.connection();
        let range = stay(100, 3);

        group.bench_with_input(BenchmarkId::from_parameter(rooms), &rooms, |b, _| {
            b.iter(|| {
                let engine = AvailabilityEngine::new(conn, conn);
                black_box(engine.search(&range).expect("search failed"));
            });
        });
    }
    group.finish();
}

fn bench_search_room(c: &mut Criterion) {
    let (_temp_dir, mut db) = setup_database(2);
    populate(&mut db, 2);
    let conn = db.connection();
    let free = stay(3, 2);
    let taken = stay(7, 1);

    c.bench_function("search_room_free", |b| {
        b.iter(|| {
            let engine = AvailabilityEngine::new(conn, conn);
            black_box(engine.search_room(1, &free).expect("check failed"));
        });
    });
    c.bench_function("search_room_taken", |b| {
        b.iter(|| {
            let engine = AvailabilityEngine::new(conn, conn);
            black_box(engine.search_room(1, &taken).expect("check failed"));
        });
    });
}

fn bench_commit(c: &mut Criterion) {
    c.bench_function("commit", |b| {
        b.iter_batched(
            || setup_database(2),
            |(temp_dir, mut db)| {
                let _temp_dir = temp_dir;
                let mut draft = ReservationDraft::for_room(Room::new(1, "room"), stay(0, 3));
                draft.contact = contact();
                let reservation = BookingCommitter::new(&mut db)
                    .commit(&draft)
                    .expect("failed to commit booking");
                black_box(reservation.id());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(availability_bench, bench_search, bench_search_room, bench_commit);
criterion_main!(availability_bench);
