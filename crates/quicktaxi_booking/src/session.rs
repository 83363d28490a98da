// --- File: crates/quicktaxi_booking/src/session.rs ---
//! Session control: sign in, sign out, and the persisted session.
//!
//! The signed-in profile is held in memory and mirrored to a local
//! session file so a restart comes back signed in. Persistence is best
//! effort: a session file that cannot be written never fails a login,
//! it only costs the user the restored session next time.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use quicktaxi_common::models::UserProfile;
use quicktaxi_common::services::{BoxedError, IdentityService, SessionStore};
use quicktaxi_common::BookingError;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Notification shown after a successful login.
pub const SIGNED_IN_NOTICE: &str = "Login successful!";

/// Notification shown after signing out.
pub const SIGNED_OUT_NOTICE: &str = "Logged out successfully!";

/// Drives the login state of the application.
pub struct SessionController {
    identity: Arc<dyn IdentityService<Error = BoxedError>>,
    store: Arc<dyn SessionStore<Error = BoxedError>>,
    current: Option<UserProfile>,
}

impl SessionController {
    pub fn new(
        identity: Arc<dyn IdentityService<Error = BoxedError>>,
        store: Arc<dyn SessionStore<Error = BoxedError>>,
    ) -> Self {
        SessionController {
            identity,
            store,
            current: None,
        }
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.current.as_ref()
    }

    /// Loads the persisted session, if one exists, and makes it
    /// current. Called once at startup, before any booking workflow is
    /// reachable.
    pub fn restore(&mut self) -> Option<&UserProfile> {
        match self.store.load() {
            Ok(Some(profile)) => {
                info!(user = %profile.email, "session restored");
                self.current = Some(profile);
            }
            Ok(None) => {
                debug!("no persisted session");
                self.current = None;
            }
            Err(err) => {
                warn!(error = %err, "could not read persisted session");
                self.current = None;
            }
        }
        self.current.as_ref()
    }

    /// Signs the user in.
    ///
    /// Empty credentials are rejected before the identity service is
    /// consulted. On success the profile becomes current and is
    /// persisted; the caller should then show the booking view.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<UserProfile, BookingError> {
        if email.is_empty() || password.is_empty() {
            return Err(BookingError::MissingCredentials);
        }
        let profile = self
            .identity
            .authenticate(email, password)
            .await
            .map_err(|err| BookingError::Auth(err.to_string()))?;
        if let Err(err) = self.store.save(&profile) {
            warn!(error = %err, "could not persist session");
        }
        info!(user = %profile.email, "user signed in");
        self.current = Some(profile.clone());
        Ok(profile)
    }

    /// Signs the user out and forgets the persisted session. The caller
    /// should then show the login view.
    pub fn logout(&mut self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "could not clear persisted session");
        }
        if let Some(user) = self.current.take() {
            info!(user = %user.email, "user signed out");
        }
    }
}

// --- File backed session persistence ---

/// Errors that can occur reading or writing the session file.
#[derive(Error, Debug)]
pub enum SessionFileError {
    #[error("Session file error: {0}")]
    Io(#[from] io::Error),
    #[error("Session file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Session persistence in a JSON file.
///
/// A missing file means no session. A file that no longer parses as a
/// profile also means no session rather than an error, so a corrupt
/// file can never lock the user out of the login flow.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSessionStore { path: path.into() }
    }

    fn read_profile(&self) -> Result<Option<UserProfile>, SessionFileError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        match serde_json::from_str(&contents) {
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring unreadable session file");
                Ok(None)
            }
        }
    }

    fn write_profile(&self, profile: &UserProfile) -> Result<(), SessionFileError> {
        let contents = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn remove(&self) -> Result<(), SessionFileError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl SessionStore for FileSessionStore {
    type Error = BoxedError;

    fn load(&self) -> Result<Option<UserProfile>, Self::Error> {
        self.read_profile().map_err(|err| BoxedError(Box::new(err)))
    }

    fn save(&self, profile: &UserProfile) -> Result<(), Self::Error> {
        self.write_profile(profile)
            .map_err(|err| BoxedError(Box::new(err)))
    }

    fn clear(&self) -> Result<(), Self::Error> {
        self.remove().map_err(|err| BoxedError(Box::new(err)))
    }
}
