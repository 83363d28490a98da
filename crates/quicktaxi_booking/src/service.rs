// --- File: crates/quicktaxi_booking/src/service.rs ---
//! The booking service.
//!
//! This holds the in-memory snapshot of the booking collection that the
//! rest of the application works from, and keeps it reconciled with the
//! document store. Store writes go first; the snapshot only changes
//! after the store has accepted the write, so a failed call leaves the
//! snapshot exactly as it was.
//!
//! The snapshot is refreshed from the store once at startup and then
//! maintained locally. Two sessions submitting against the same slot at
//! the same moment can both pass the conflict check; the store itself
//! does not enforce slot uniqueness.

use std::sync::Arc;

use quicktaxi_common::models::{Booking, BookingDraft, UserProfile};
use quicktaxi_common::services::{BookingStore, BoxedError};
use quicktaxi_common::BookingError;
use quicktaxi_config::BookingConfig;
use tracing::{debug, info, warn};

use crate::cities;
use crate::logic::{self, Page};
use crate::validation;

/// Notification shown after a successful delete.
pub const BOOKING_DELETED_NOTICE: &str = "Réservation supprimée";

/// Question the caller should ask before invoking [`BookingService::delete`].
pub const DELETE_CONFIRM_PROMPT: &str = "Supprimer cette réservation ?";

/// What a successful submit did to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new booking was persisted and appended to the snapshot.
    Created(Booking),
    /// The booking with this document id was persisted and refreshed in
    /// place in the snapshot.
    Updated(String),
}

impl SubmitOutcome {
    /// Notification to show the user for this outcome.
    pub fn notice(&self) -> &'static str {
        match self {
            SubmitOutcome::Created(_) => "Réservation réussie",
            SubmitOutcome::Updated(_) => "Réservation mise à jour",
        }
    }
}

/// Booking service over an abstract document store.
pub struct BookingService {
    store: Arc<dyn BookingStore<Error = BoxedError>>,
    bookings: Vec<Booking>,
    config: BookingConfig,
}

impl BookingService {
    /// Create a booking service with an empty snapshot. Call
    /// [`BookingService::refresh`] to populate it from the store.
    pub fn new(store: Arc<dyn BookingStore<Error = BoxedError>>, config: BookingConfig) -> Self {
        BookingService {
            store,
            bookings: Vec::new(),
            config,
        }
    }

    /// The current snapshot, in store list order with local writes
    /// appended.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Replaces the snapshot with the store's current contents. On
    /// failure the previous snapshot stays in place.
    pub async fn refresh(&mut self) -> Result<(), BookingError> {
        let bookings = self
            .store
            .list_bookings()
            .await
            .map_err(BookingError::Fetch)?;
        debug!(count = bookings.len(), "booking list refreshed");
        self.bookings = bookings;
        Ok(())
    }

    /// Validates and persists a draft.
    ///
    /// With `editing_id` set this updates that booking in place,
    /// otherwise it creates a new booking stamped with the signed-in
    /// user's email, the creation instant and a display identifier.
    /// Validation failures come back as [`BookingError::Validation`]
    /// without any store call having been made.
    pub async fn submit(
        &mut self,
        draft: &BookingDraft,
        user: &UserProfile,
        editing_id: Option<&str>,
    ) -> Result<SubmitOutcome, BookingError> {
        let errors = validation::validate_draft(draft, &self.bookings, editing_id);
        if !errors.is_empty() {
            debug!(diagnostics = errors.len(), "booking draft rejected");
            return Err(BookingError::Validation(errors));
        }

        match editing_id {
            Some(id) => {
                self.store
                    .update_booking(id, draft.clone())
                    .await
                    .map_err(BookingError::Save)?;
                match self.bookings.iter_mut().find(|booking| booking.id == id) {
                    Some(booking) => booking.record.apply_draft(draft),
                    None => warn!(id, "updated a booking the snapshot does not know"),
                }
                info!(id, "booking updated");
                Ok(SubmitOutcome::Updated(id.to_string()))
            }
            None => {
                let record = logic::new_booking_record(draft, user, chrono::Utc::now());
                let booking = self
                    .store
                    .create_booking(record)
                    .await
                    .map_err(BookingError::Save)?;
                info!(id = %booking.id, booking_id = %booking.record.booking_id, "booking created");
                self.bookings.push(booking.clone());
                Ok(SubmitOutcome::Created(booking))
            }
        }
    }

    /// Removes a booking from the store, then from the snapshot. When
    /// the store refuses, the snapshot keeps the booking.
    pub async fn delete(&mut self, id: &str) -> Result<(), BookingError> {
        self.store
            .delete_booking(id)
            .await
            .map_err(BookingError::Delete)?;
        self.bookings.retain(|booking| booking.id != id);
        info!(id, "booking deleted");
        Ok(())
    }

    /// The pickup times already taken on `date`. `exclude_id` skips the
    /// booking being edited so its own slot stays selectable.
    pub fn booked_times(&self, date: &str, exclude_id: Option<&str>) -> Vec<String> {
        validation::booked_times(&self.bookings, date, exclude_id)
    }

    /// City suggestions for a location field, capped by configuration.
    pub fn city_suggestions(&self, query: &str) -> Vec<&'static str> {
        cities::match_cities(query, self.config.suggestion_limit)
    }

    /// One page of the snapshot, filtered by the search query. A new
    /// query should be asked for with `page` 1; pages out of range
    /// clamp.
    pub fn page(&self, query: &str, page: usize) -> Page<'_> {
        logic::paginate(
            logic::filter_bookings(&self.bookings, query),
            page,
            self.config.page_size,
        )
    }
}

/// Mock implementation of BookingStore for testing.
#[cfg(test)]
pub mod mock {
    use super::*;
    use quicktaxi_common::models::BookingRecord;
    use quicktaxi_common::services::BoxFuture;
    use std::sync::Mutex;

    /// Which store operation a [`MockBookingStore`] should refuse.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FailNext {
        None,
        List,
        Create,
        Update,
        Delete,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock store refused: {0}")]
    pub struct MockStoreError(pub &'static str);

    struct MockState {
        bookings: Vec<Booking>,
        next_id: usize,
        fail: FailNext,
    }

    /// In-memory booking store. Strict about unknown document ids so
    /// tests catch drift between the snapshot and the store.
    pub struct MockBookingStore {
        state: Mutex<MockState>,
    }

    impl MockBookingStore {
        pub fn new() -> Self {
            Self::with_bookings(Vec::new())
        }

        pub fn with_bookings(bookings: Vec<Booking>) -> Self {
            MockBookingStore {
                state: Mutex::new(MockState {
                    bookings,
                    next_id: 0,
                    fail: FailNext::None,
                }),
            }
        }

        /// Make the next matching operation fail.
        pub fn fail_next(&self, fail: FailNext) {
            self.state.lock().unwrap().fail = fail;
        }

        /// Snapshot of what the store holds, for assertions.
        pub fn stored(&self) -> Vec<Booking> {
            self.state.lock().unwrap().bookings.clone()
        }
    }

    impl MockState {
        fn refuse(&mut self, op: FailNext, label: &'static str) -> Result<(), BoxedError> {
            if self.fail == op {
                self.fail = FailNext::None;
                return Err(BoxedError(Box::new(MockStoreError(label))));
            }
            Ok(())
        }
    }

    impl BookingStore for MockBookingStore {
        type Error = BoxedError;

        fn list_bookings(&self) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.refuse(FailNext::List, "list")?;
                Ok(state.bookings.clone())
            })
        }

        fn create_booking(&self, record: BookingRecord) -> BoxFuture<'_, Booking, Self::Error> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.refuse(FailNext::Create, "create")?;
                state.next_id += 1;
                let booking = Booking {
                    id: format!("doc-{}", state.next_id),
                    record,
                };
                state.bookings.push(booking.clone());
                Ok(booking)
            })
        }

        fn update_booking(&self, id: &str, draft: BookingDraft) -> BoxFuture<'_, (), Self::Error> {
            let id = id.to_string();
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.refuse(FailNext::Update, "update")?;
                match state.bookings.iter_mut().find(|booking| booking.id == id) {
                    Some(booking) => {
                        booking.record.apply_draft(&draft);
                        Ok(())
                    }
                    None => Err(BoxedError(Box::new(MockStoreError("no such document")))),
                }
            })
        }

        fn delete_booking(&self, id: &str) -> BoxFuture<'_, (), Self::Error> {
            let id = id.to_string();
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.refuse(FailNext::Delete, "delete")?;
                let before = state.bookings.len();
                state.bookings.retain(|booking| booking.id != id);
                if state.bookings.len() == before {
                    return Err(BoxedError(Box::new(MockStoreError("no such document"))));
                }
                Ok(())
            })
        }
    }
}
