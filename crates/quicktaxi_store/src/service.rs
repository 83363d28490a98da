// --- File: crates/quicktaxi_store/src/service.rs ---
//! `BookingStore` implementation for the hosted document store client.

use quicktaxi_common::models::{Booking, BookingDraft, BookingRecord};
use quicktaxi_common::services::{BookingStore, BoxFuture, BoxedError};

use crate::client::StoreClient;

impl BookingStore for StoreClient {
    type Error = BoxedError;

    fn list_bookings(&self) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
        Box::pin(async move {
            self.fetch_all()
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }

    fn create_booking(&self, record: BookingRecord) -> BoxFuture<'_, Booking, Self::Error> {
        Box::pin(async move {
            self.insert(&record)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }

    fn update_booking(&self, id: &str, draft: BookingDraft) -> BoxFuture<'_, (), Self::Error> {
        let id = id.to_string();
        Box::pin(async move {
            self.update(&id, &draft)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }

    fn delete_booking(&self, id: &str) -> BoxFuture<'_, (), Self::Error> {
        let id = id.to_string();
        Box::pin(async move {
            self.delete(&id)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }
}
