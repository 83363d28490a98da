// --- File: crates/quicktaxi_identity/src/service.rs ---
//! `IdentityService` implementation for the hosted identity client.

use quicktaxi_common::models::UserProfile;
use quicktaxi_common::services::{BoxFuture, BoxedError, IdentityService};

use crate::client::IdentityClient;

impl IdentityService for IdentityClient {
    type Error = BoxedError;

    fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> BoxFuture<'_, UserProfile, Self::Error> {
        let email = email.to_string();
        let password = password.to_string();

        Box::pin(async move {
            self.sign_in(&email, &password)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }
}
