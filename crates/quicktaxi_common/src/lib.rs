// --- File: crates/quicktaxi_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Collaborator flag handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared data structures
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{config_error, BookingError};

// Re-export collaborator flag utilities for easier access
pub use features::{is_feature_enabled, is_identity_enabled, is_store_enabled};

// Re-export the shared domain types for easier access
pub use models::{Booking, BookingDraft, BookingField, BookingRecord, FieldErrors, UserProfile};

// Re-export service abstractions for easier access
pub use services::{
    BookingStore, BoxFuture, BoxedError, IdentityService, ServiceFactory, SessionStore,
};

// Re-export the shared HTTP client for easier access
pub use http::client::HTTP_CLIENT;

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};
