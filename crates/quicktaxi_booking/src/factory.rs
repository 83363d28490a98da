// --- File: crates/quicktaxi_booking/src/factory.rs ---
//! Service factory implementation.
//!
//! This module provides an implementation of the ServiceFactory trait
//! wired to the hosted collaborators. Each collaborator is built from
//! its configuration section when its `use_*` flag is set; a disabled
//! or unconfigured collaborator simply is not built, and callers decide
//! whether that is fatal. Session persistence is always built.

use std::sync::Arc;

use quicktaxi_common::services::{
    BookingStore, BoxedError, IdentityService, ServiceFactory, SessionStore,
};
use quicktaxi_common::{is_identity_enabled, is_store_enabled};
use quicktaxi_config::AppConfig;
use quicktaxi_identity::client::IdentityClient;
use quicktaxi_store::client::StoreClient;
use tracing::info;

use crate::session::FileSessionStore;

/// Service factory wired to the hosted collaborators over REST.
pub struct RestServiceFactory {
    /// Kept so the factory retains the full context it was created
    /// with; only the collaborator sections are read after `new`.
    #[allow(dead_code)]
    config: Arc<AppConfig>,
    identity_service: Option<Arc<dyn IdentityService<Error = BoxedError>>>,
    booking_store: Option<Arc<dyn BookingStore<Error = BoxedError>>>,
    session_store: Arc<dyn SessionStore<Error = BoxedError>>,
}

impl RestServiceFactory {
    /// Create a new service factory from the loaded configuration.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let identity_service = if is_identity_enabled(&config) {
            info!("ℹ️ Initializing identity service...");
            let service = config.identity.clone().map(|identity_config| {
                Arc::new(IdentityClient::new(identity_config))
                    as Arc<dyn IdentityService<Error = BoxedError>>
            });
            info!("✅ Identity service initialized.");
            service
        } else {
            info!("ℹ️ Identity service disabled via runtime config or missing [identity] section.");
            None
        };

        let booking_store = if is_store_enabled(&config) {
            info!("ℹ️ Initializing booking store...");
            let store = config.store.clone().map(|store_config| {
                Arc::new(StoreClient::new(store_config)) as Arc<dyn BookingStore<Error = BoxedError>>
            });
            info!("✅ Booking store initialized.");
            store
        } else {
            info!("ℹ️ Booking store disabled via runtime config or missing [store] section.");
            None
        };

        let session_store: Arc<dyn SessionStore<Error = BoxedError>> =
            Arc::new(FileSessionStore::new(config.session.file.clone()));

        RestServiceFactory {
            config,
            identity_service,
            booking_store,
            session_store,
        }
    }
}

impl ServiceFactory for RestServiceFactory {
    fn identity_service(&self) -> Option<Arc<dyn IdentityService<Error = BoxedError>>> {
        self.identity_service.clone()
    }

    fn booking_store(&self) -> Option<Arc<dyn BookingStore<Error = BoxedError>>> {
        self.booking_store.clone()
    }

    fn session_store(&self) -> Arc<dyn SessionStore<Error = BoxedError>> {
        self.session_store.clone()
    }
}
