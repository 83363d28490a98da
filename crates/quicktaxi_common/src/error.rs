// --- File: crates/quicktaxi_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

use crate::models::FieldErrors;
use crate::services::BoxedError;

/// The error taxonomy of the booking engine.
///
/// The Display strings double as the user-facing notification texts, so
/// an embedding front end can surface them verbatim. Collaborator
/// failures keep their cause attached as the error source for logs.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Login was attempted with an empty email or password.
    #[error("Veuillez entrer l'email et le mot de passe !")]
    MissingCredentials,

    /// The identity service rejected the credentials or was unreachable.
    #[error("Échec de la connexion : {0}")]
    Auth(String),

    /// The booking list could not be fetched from the document store.
    #[error("Échec du chargement des réservations")]
    Fetch(#[source] BoxedError),

    /// A create or update could not be persisted.
    #[error("Échec de l'enregistrement de la réservation")]
    Save(#[source] BoxedError),

    /// A booking could not be removed from the document store.
    #[error("Échec de la suppression de la réservation")]
    Delete(#[source] BoxedError),

    /// The draft was rejected locally; no store call was made.
    #[error("Le formulaire contient des erreurs")]
    Validation(FieldErrors),

    /// A collaborator was requested but its configuration is missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BookingError {
    /// The per-field diagnostics carried by a validation failure, if any.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            BookingError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> BookingError {
    BookingError::Config(message.to_string())
}
