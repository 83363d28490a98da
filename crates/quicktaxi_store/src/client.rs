//! Document store client module
//!
//! This module provides a client for the hosted schemaless document store
//! holding the booking collection (Firestore style REST API). Documents
//! carry their fields as typed values; every booking field is a string.
//! The store assigns document ids; the engine never invents them.
//!
//! The client owns the wire format. Callers deal in `Booking`,
//! `BookingRecord` and `BookingDraft` only.

use std::collections::BTreeMap;

use quicktaxi_common::models::{Booking, BookingDraft, BookingField, BookingRecord};
use quicktaxi_common::HTTP_CLIENT;
use quicktaxi_config::StoreConfig;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Page size requested when listing the collection.
const LIST_PAGE_SIZE: &str = "300";

/// Errors that can occur when interacting with the document store API
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error during HTTP request to the store API
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Error returned by the document store API
    #[error("Document store error: {0}")]
    Api(String),
}

/// A single typed field value. The booking schema only uses strings;
/// any other value type decodes as absent and maps to an empty string.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoreValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    string_value: Option<String>,
}

impl StoreValue {
    fn string(value: &str) -> Self {
        StoreValue {
            string_value: Some(value.to_string()),
        }
    }
}

/// Write payload: `{"fields": {...}}`.
#[derive(Debug, Serialize)]
struct WriteDocument {
    fields: BTreeMap<String, StoreValue>,
}

/// A document as the store returns it. `name` is the full resource path;
/// its final segment is the document id.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReadDocument {
    name: String,
    fields: BTreeMap<String, StoreValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ListResponse {
    documents: Vec<ReadDocument>,
    next_page_token: Option<String>,
}

/// Error envelope the store wraps failures in:
/// `{"error": {"message": ..., "status": ...}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the hosted document store.
pub struct StoreClient {
    /// HTTP client for making requests to the store API
    client: Client,

    /// Endpoint, project, database, collection and API key
    config: StoreConfig,
}

impl StoreClient {
    /// Creates a new store client with the given configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
            config,
        }
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/{}/documents/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.project_id,
            self.config.database_id,
            self.config.collection
        )
    }

    fn document_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    /// Fetches the whole booking collection, following page tokens until
    /// the store reports no further page.
    pub async fn fetch_all(&self) -> Result<Vec<Booking>, StoreError> {
        let url = self.collection_url();
        let mut bookings = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query: Vec<(&str, &str)> = vec![
                ("key", self.config.api_key.as_str()),
                ("pageSize", LIST_PAGE_SIZE),
            ];
            if let Some(token) = page_token.as_deref() {
                query.push(("pageToken", token));
            }

            debug!(collection = %self.config.collection, "listing booking documents");
            let response = self.client.get(&url).query(&query).send().await?;
            let page: ListResponse = check_success(response).await?.json().await?;

            bookings.extend(page.documents.into_iter().map(document_to_booking));

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!(count = bookings.len(), "fetched booking collection");
        Ok(bookings)
    }

    /// Persists a new booking document. The store picks the document id;
    /// the created booking is returned with that id attached.
    pub async fn insert(&self, record: &BookingRecord) -> Result<Booking, StoreError> {
        let response = self
            .client
            .post(self.collection_url())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&WriteDocument {
                fields: record_fields(record),
            })
            .send()
            .await?;

        let document: ReadDocument = check_success(response).await?.json().await?;
        let booking = document_to_booking(document);
        debug!(id = %booking.id, booking_id = %booking.record.booking_id, "created booking document");
        Ok(booking)
    }

    /// Merges the draft fields into an existing document. The update mask
    /// restricts the write to the six form fields, so identity and audit
    /// fields keep their stored values.
    pub async fn update(&self, id: &str, draft: &BookingDraft) -> Result<(), StoreError> {
        let mut query: Vec<(&str, &str)> = vec![("key", self.config.api_key.as_str())];
        for field in BookingField::ALL {
            query.push(("updateMask.fieldPaths", field.as_str()));
        }

        let response = self
            .client
            .patch(self.document_url(id))
            .query(&query)
            .json(&WriteDocument {
                fields: draft_fields(draft),
            })
            .send()
            .await?;

        check_success(response).await?;
        debug!(%id, "updated booking document");
        Ok(())
    }

    /// Removes a booking document.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.document_url(id))
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await?;

        check_success(response).await?;
        debug!(%id, "deleted booking document");
        Ok(())
    }
}

/// Maps a non-2xx response onto `StoreError::Api`, extracting the store's
/// error message when the envelope parses.
async fn check_success(response: Response) -> Result<Response, StoreError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await?;
    let message = serde_json::from_str::<ErrorEnvelope>(&text)
        .map(|envelope| envelope.error.message)
        .unwrap_or(text);
    warn!(%status, %message, "document store call failed");
    Err(StoreError::Api(message))
}

fn document_to_booking(document: ReadDocument) -> Booking {
    let id = document
        .name
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    let mut fields = document.fields;
    // Sparse documents are legal; a missing field reads as empty.
    let mut take = |key: &str| {
        fields
            .remove(key)
            .and_then(|value| value.string_value)
            .unwrap_or_default()
    };

    Booking {
        id,
        record: BookingRecord {
            booking_id: take("bookingId"),
            email: take("email"),
            pickup_location: take("pickupLocation"),
            dropoff_location: take("dropoffLocation"),
            pickup_date: take("pickupDate"),
            pickup_time: take("pickupTime"),
            return_date: take("returnDate"),
            return_time: take("returnTime"),
            created_at: take("createdAt"),
        },
    }
}

fn record_fields(record: &BookingRecord) -> BTreeMap<String, StoreValue> {
    let mut fields = draft_fields(&record.to_draft());
    fields.insert("bookingId".to_string(), StoreValue::string(&record.booking_id));
    fields.insert("email".to_string(), StoreValue::string(&record.email));
    fields.insert("createdAt".to_string(), StoreValue::string(&record.created_at));
    fields
}

fn draft_fields(draft: &BookingDraft) -> BTreeMap<String, StoreValue> {
    let mut fields = BTreeMap::new();
    for field in BookingField::ALL {
        fields.insert(field.as_str().to_string(), StoreValue::string(draft.field(field)));
    }
    fields
}
