// --- File: crates/quicktaxi_common/src/services.rs ---
//! Service abstractions for the hosted collaborators.
//!
//! This module provides trait definitions for the external services the
//! booking engine depends on. These traits allow for dependency injection
//! and easier testing by decoupling the engine from specific
//! implementations of the identity service, the document store, and the
//! client-local session storage.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::models::{Booking, BookingDraft, BookingRecord, UserProfile};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for the hosted identity service.
///
/// The engine never sees credentials beyond handing them to this trait;
/// account management, token issuance and password rules all live with
/// the provider.
pub trait IdentityService: Send + Sync {
    /// Error type returned by identity operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Verify the credentials and return the signed-in user's profile.
    fn authenticate(&self, email: &str, password: &str)
        -> BoxFuture<'_, UserProfile, Self::Error>;
}

/// A trait for the hosted document store holding the booking collection.
///
/// Implementations own the wire format; callers only deal in domain
/// types. All operations are terminal: the engine does not retry.
pub trait BookingStore: Send + Sync {
    /// Error type returned by store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch every booking document together with its store-assigned id.
    fn list_bookings(&self) -> BoxFuture<'_, Vec<Booking>, Self::Error>;

    /// Persist a new booking document and return it with its new id.
    fn create_booking(&self, record: BookingRecord) -> BoxFuture<'_, Booking, Self::Error>;

    /// Merge the draft fields into an existing document. Fields outside
    /// the draft keep their stored values.
    fn update_booking(&self, id: &str, draft: BookingDraft) -> BoxFuture<'_, (), Self::Error>;

    /// Remove a booking document.
    fn delete_booking(&self, id: &str) -> BoxFuture<'_, (), Self::Error>;
}

/// A trait for client-local persistence of the signed-in session.
///
/// Session restore happens synchronously before the booking workflow is
/// reachable, so this trait is deliberately not async.
pub trait SessionStore: Send + Sync {
    /// Error type returned by session persistence operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the persisted profile, if any.
    fn load(&self) -> Result<Option<UserProfile>, Self::Error>;

    /// Persist the profile of the signed-in user.
    fn save(&self, profile: &UserProfile) -> Result<(), Self::Error>;

    /// Forget the persisted profile. Clearing when nothing is persisted
    /// is not an error.
    fn clear(&self) -> Result<(), Self::Error>;
}

/// A factory for creating service instances.
///
/// This trait provides methods for obtaining the collaborator services
/// the engine needs. The two hosted collaborators are optional because
/// their configuration sections are; session persistence always exists.
pub trait ServiceFactory: Send + Sync {
    /// Get an identity service instance.
    fn identity_service(&self) -> Option<Arc<dyn IdentityService<Error = BoxedError>>>;

    /// Get a booking store instance.
    fn booking_store(&self) -> Option<Arc<dyn BookingStore<Error = BoxedError>>>;

    /// Get the session persistence instance.
    fn session_store(&self) -> Arc<dyn SessionStore<Error = BoxedError>>;
}
