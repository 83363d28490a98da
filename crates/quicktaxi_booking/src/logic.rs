// --- File: crates/quicktaxi_booking/src/logic.rs ---
//! Pure booking logic: stamping new records, free-text search and
//! pagination over the in-memory list.

use chrono::{DateTime, SecondsFormat, Utc};
use quicktaxi_common::models::{Booking, BookingDraft, BookingRecord, UserProfile};

// --- Record Stamping ---

/// Builds the display identifier for a new booking: `BK` followed by
/// the last six digits of the creation instant in milliseconds.
///
/// This is a human-facing label, not the document id. Collisions are
/// possible across distant instants and harmless.
pub fn display_booking_id(created: DateTime<Utc>) -> String {
    format!("BK{:06}", created.timestamp_millis() % 1_000_000)
}

/// Stamps a validated draft into a full record ready for the store:
/// the owner's email, the creation instant, and a display identifier
/// derived from it.
pub fn new_booking_record(
    draft: &BookingDraft,
    user: &UserProfile,
    created: DateTime<Utc>,
) -> BookingRecord {
    let mut record = BookingRecord {
        booking_id: display_booking_id(created),
        email: user.email.clone(),
        created_at: created.to_rfc3339_opts(SecondsFormat::Millis, true),
        ..BookingRecord::default()
    };
    record.apply_draft(draft);
    record
}

// --- Search and Pagination ---

/// One page of the (possibly filtered) booking list.
#[derive(Debug)]
pub struct Page<'a> {
    /// The bookings on this page, in list order.
    pub items: Vec<&'a Booking>,
    /// 1-based page number, clamped into range.
    pub page: usize,
    /// Total number of pages, at least 1.
    pub page_count: usize,
    /// How many bookings match the filter across all pages.
    pub total: usize,
}

impl Page<'_> {
    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a further page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// The bookings whose searchable text contains `query`, ignoring case,
/// in list order. An empty query matches everything.
pub fn filter_bookings<'a>(bookings: &'a [Booking], query: &str) -> Vec<&'a Booking> {
    let needle = query.to_lowercase();
    bookings
        .iter()
        .filter(|booking| booking.search_text().to_lowercase().contains(&needle))
        .collect()
}

/// Cuts one page out of a filtered list. Pages are 1-based; a page
/// number out of range clamps to the nearest valid page instead of
/// coming back empty.
pub fn paginate(bookings: Vec<&Booking>, page: usize, page_size: usize) -> Page<'_> {
    let page_size = page_size.max(1);
    let total = bookings.len();
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, page_count);
    let start = (page - 1) * page_size;
    let items = bookings.into_iter().skip(start).take(page_size).collect();
    Page {
        items,
        page,
        page_count,
        total,
    }
}
