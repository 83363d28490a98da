use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quicktaxi_booking::logic::{filter_bookings, paginate};
use quicktaxi_booking::validation::validate_draft;
use quicktaxi_common::models::{Booking, BookingDraft, BookingRecord};

// Helper function to build a collection spread over dates and slots
fn create_bookings(count: usize) -> Vec<Booking> {
    (0..count)
        .map(|i| {
            let record = BookingRecord {
                booking_id: format!("BK{:06}", i),
                email: format!("user{}@exemple.fr", i % 50),
                pickup_location: "Paris, France".to_string(),
                dropoff_location: "Lyon, France".to_string(),
                pickup_date: format!("2025-06-{:02}", (i / 96) % 28 + 1),
                pickup_time: format!("{:02}:{:02}", (i / 4) % 24, (i % 4) * 15),
                return_date: "2025-07-01".to_string(),
                return_time: "18:00".to_string(),
                created_at: "2025-05-01T08:00:00.000Z".to_string(),
            };
            Booking {
                id: format!("doc-{}", i),
                record,
            }
        })
        .collect()
}

// Helper function for a draft whose slot is free in the generated data
fn free_slot_draft() -> BookingDraft {
    BookingDraft {
        pickup_location: "Paris, France".to_string(),
        dropoff_location: "Lyon, France".to_string(),
        pickup_date: "2025-12-24".to_string(),
        pickup_time: "10:30".to_string(),
        return_date: "2025-12-26".to_string(),
        return_time: "18:00".to_string(),
    }
}

fn benchmark_booking_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("booking_search");
    let bookings = create_bookings(10_000);

    // A query that matches nothing scans every searchable column
    group.bench_function("filter_miss_ten_thousand", |b| {
        b.iter(|| filter_bookings(black_box(&bookings), black_box("marseille")))
    });

    // A query that matches every row also allocates the full result
    group.bench_function("filter_hit_ten_thousand", |b| {
        b.iter(|| filter_bookings(black_box(&bookings), black_box("exemple.fr")))
    });

    // Unfiltered view of one page, the common render path
    group.bench_function("page_two_of_ten_thousand", |b| {
        b.iter(|| {
            paginate(
                filter_bookings(black_box(&bookings), black_box("")),
                black_box(2),
                black_box(5),
            )
        })
    });

    group.finish();
}

fn benchmark_conflict_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("conflict_scan");
    let bookings = create_bookings(10_000);

    // A free slot is the worst case: the scan visits every booking
    group.bench_function("free_slot_ten_thousand", |b| {
        let draft = free_slot_draft();
        b.iter(|| validate_draft(black_box(&draft), black_box(&bookings), black_box(None)))
    });

    // A taken slot short-circuits at the first match
    group.bench_function("taken_slot_ten_thousand", |b| {
        let mut draft = free_slot_draft();
        draft.pickup_date = bookings[0].record.pickup_date.clone();
        draft.pickup_time = bookings[0].record.pickup_time.clone();
        b.iter(|| validate_draft(black_box(&draft), black_box(&bookings), black_box(None)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_booking_search, benchmark_conflict_scan);
criterion_main!(benches);
