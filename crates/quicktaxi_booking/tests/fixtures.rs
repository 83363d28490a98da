//! Test fixtures for the booking flow tests
//!
//! This module provides factory functions for test data plus in-memory
//! stand-ins for the hosted collaborators, so the whole workflow can run
//! without a network.

use quicktaxi_common::models::{Booking, BookingDraft, BookingRecord, UserProfile};
use quicktaxi_common::services::{BookingStore, BoxFuture, BoxedError, IdentityService};
use quicktaxi_config::{AppConfig, BookingConfig, IdentityConfig, SessionConfig, StoreConfig};
use std::sync::{Arc, Mutex};

/// Creates a complete draft for the given slot
pub fn create_test_draft(date: &str, time: &str) -> BookingDraft {
    BookingDraft {
        pickup_location: "Paris, France".to_string(),
        dropoff_location: "Lyon, France".to_string(),
        pickup_date: date.to_string(),
        pickup_time: time.to_string(),
        return_date: "2025-06-02".to_string(),
        return_time: "18:00".to_string(),
    }
}

/// Creates a booking as the store would hand it back
#[allow(dead_code)]
pub fn create_stored_booking(id: &str, date: &str, time: &str) -> Booking {
    Booking {
        id: id.to_string(),
        record: BookingRecord {
            booking_id: format!("BK-{}", id),
            email: "paul@exemple.fr".to_string(),
            pickup_location: "Nice, France".to_string(),
            dropoff_location: "Toulon, France".to_string(),
            pickup_date: date.to_string(),
            pickup_time: time.to_string(),
            return_date: "2025-06-02".to_string(),
            return_time: "18:00".to_string(),
            created_at: "2025-05-01T08:00:00.000Z".to_string(),
        },
    }
}

/// Creates the profile the test identity account resolves to
#[allow(dead_code)]
pub fn create_test_profile() -> UserProfile {
    UserProfile::from_identity("uid-1".to_string(), "marie@exemple.fr".to_string(), None)
}

/// Creates a mock AppConfig with both collaborators enabled
pub fn create_mock_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        use_identity: true,
        use_store: true,
        identity: Some(IdentityConfig {
            base_url: "https://identity.invalid".to_string(),
            api_key: "test-key".to_string(),
        }),
        store: Some(StoreConfig {
            base_url: "https://store.invalid".to_string(),
            project_id: "demo-project".to_string(),
            database_id: "(default)".to_string(),
            collection: "bookings".to_string(),
            api_key: "test-key".to_string(),
        }),
        session: SessionConfig::default(),
        booking: BookingConfig::default(),
    })
}

/// The rejection every failed test sign-in comes back with.
#[derive(Debug, thiserror::Error)]
#[error("INVALID_PASSWORD")]
pub struct TestIdentityError;

/// Identity service that knows exactly one account.
pub struct TestIdentity {
    email: String,
    password: String,
    profile: UserProfile,
}

impl TestIdentity {
    pub fn with_account(email: &str, password: &str) -> Self {
        TestIdentity {
            email: email.to_string(),
            password: password.to_string(),
            profile: UserProfile::from_identity("uid-1".to_string(), email.to_string(), None),
        }
    }
}

impl IdentityService for TestIdentity {
    type Error = BoxedError;

    fn authenticate(&self, email: &str, password: &str) -> BoxFuture<'_, UserProfile, Self::Error> {
        let email = email.to_string();
        let password = password.to_string();
        Box::pin(async move {
            if email == self.email && password == self.password {
                Ok(self.profile.clone())
            } else {
                Err(BoxedError(Box::new(TestIdentityError)))
            }
        })
    }
}

struct TestStoreState {
    bookings: Vec<Booking>,
    next_id: usize,
}

/// In-memory document store with store-assigned ids.
pub struct TestBookingStore {
    state: Mutex<TestStoreState>,
}

impl TestBookingStore {
    pub fn new() -> Self {
        TestBookingStore {
            state: Mutex::new(TestStoreState {
                bookings: Vec::new(),
                next_id: 0,
            }),
        }
    }

    /// Snapshot of what the store holds, for assertions.
    pub fn stored(&self) -> Vec<Booking> {
        self.state.lock().unwrap().bookings.clone()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("no such document: {0}")]
pub struct NoSuchDocument(String);

impl BookingStore for TestBookingStore {
    type Error = BoxedError;

    fn list_bookings(&self) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
        Box::pin(async move { Ok(self.state.lock().unwrap().bookings.clone()) })
    }

    fn create_booking(&self, record: BookingRecord) -> BoxFuture<'_, Booking, Self::Error> {
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
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
            match state.bookings.iter_mut().find(|booking| booking.id == id) {
                Some(booking) => {
                    booking.record.apply_draft(&draft);
                    Ok(())
                }
                None => Err(BoxedError(Box::new(NoSuchDocument(id)))),
            }
        })
    }

    fn delete_booking(&self, id: &str) -> BoxFuture<'_, (), Self::Error> {
        let id = id.to_string();
        Box::pin(async move {
            let mut state = self.state.lock().unwrap();
            let before = state.bookings.len();
            state.bookings.retain(|booking| booking.id != id);
            if state.bookings.len() == before {
                return Err(BoxedError(Box::new(NoSuchDocument(id))));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_draft_fills_every_field() {
        let draft = create_test_draft("2025-06-01", "10:30");
        assert!(!draft.pickup_location.is_empty());
        assert!(!draft.dropoff_location.is_empty());
        assert_eq!(draft.pickup_date, "2025-06-01");
        assert_eq!(draft.pickup_time, "10:30");
        assert!(!draft.return_date.is_empty());
        assert!(!draft.return_time.is_empty());
    }

    #[test]
    fn test_create_mock_config_enables_both_collaborators() {
        let config = create_mock_config();
        assert!(config.use_identity);
        assert!(config.identity.is_some());
        assert!(config.use_store);
        assert!(config.store.is_some());
    }

    #[tokio::test]
    async fn test_test_identity_checks_the_password() {
        let identity = TestIdentity::with_account("marie@exemple.fr", "secret");
        let profile = identity.authenticate("marie@exemple.fr", "secret").await.unwrap();
        assert_eq!(profile.email, "marie@exemple.fr");
        assert_eq!(profile.name, "marie");

        let err = identity.authenticate("marie@exemple.fr", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "INVALID_PASSWORD");
    }

    #[tokio::test]
    async fn test_test_store_assigns_sequential_ids() {
        let store = TestBookingStore::new();
        let first = store
            .create_booking(create_stored_booking("x", "2025-06-01", "10:30").record)
            .await
            .unwrap();
        let second = store
            .create_booking(create_stored_booking("y", "2025-06-01", "11:00").record)
            .await
            .unwrap();
        assert_eq!(first.id, "doc-1");
        assert_eq!(second.id, "doc-2");
        assert_eq!(store.stored().len(), 2);
    }
}
