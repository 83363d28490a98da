// --- File: crates/quicktaxi_common/src/models.rs ---

// This file contains data structures shared across the booking workspace:
// the booking document model, the form draft, the signed-in user profile,
// and the validation diagnostics type.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The user-editable form fields, in the order the form lays them out.
///
/// The set doubles as the update mask for partial document updates: an
/// edit may only ever touch these six fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingField {
    PickupLocation,
    DropoffLocation,
    PickupDate,
    PickupTime,
    ReturnDate,
    ReturnTime,
}

impl BookingField {
    /// All form fields in declaration order.
    pub const ALL: [BookingField; 6] = [
        BookingField::PickupLocation,
        BookingField::DropoffLocation,
        BookingField::PickupDate,
        BookingField::PickupTime,
        BookingField::ReturnDate,
        BookingField::ReturnTime,
    ];

    /// The field name as used by the document store schema and form bindings.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::PickupLocation => "pickupLocation",
            BookingField::DropoffLocation => "dropoffLocation",
            BookingField::PickupDate => "pickupDate",
            BookingField::PickupTime => "pickupTime",
            BookingField::ReturnDate => "returnDate",
            BookingField::ReturnTime => "returnTime",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation diagnostics keyed by form field.
///
/// `BookingField`'s ordering follows its declaration order, so iterating
/// the map yields diagnostics in form layout order.
pub type FieldErrors = BTreeMap<BookingField, String>;

/// What the user has typed into the booking form. All fields start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub return_date: String,
    pub return_time: String,
}

impl BookingDraft {
    /// The draft value for one form field.
    pub fn field(&self, field: BookingField) -> &str {
        match field {
            BookingField::PickupLocation => &self.pickup_location,
            BookingField::DropoffLocation => &self.dropoff_location,
            BookingField::PickupDate => &self.pickup_date,
            BookingField::PickupTime => &self.pickup_time,
            BookingField::ReturnDate => &self.return_date,
            BookingField::ReturnTime => &self.return_time,
        }
    }
}

/// The document fields of a persisted booking, named as the store schema
/// names them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRecord {
    /// Display identifier shown in the booking list, not the document id.
    pub booking_id: String,
    /// Owner identity, copied from the session when the booking is created.
    pub email: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: String,
    pub pickup_time: String,
    pub return_date: String,
    pub return_time: String,
    /// RFC 3339 creation instant. Never changes after creation.
    pub created_at: String,
}

impl BookingRecord {
    /// Overwrites the user-editable fields with the draft, leaving the
    /// identity and audit fields untouched.
    pub fn apply_draft(&mut self, draft: &BookingDraft) {
        self.pickup_location = draft.pickup_location.clone();
        self.dropoff_location = draft.dropoff_location.clone();
        self.pickup_date = draft.pickup_date.clone();
        self.pickup_time = draft.pickup_time.clone();
        self.return_date = draft.return_date.clone();
        self.return_time = draft.return_time.clone();
    }

    /// The draft view of this record, used to prefill the form when the
    /// user starts editing a booking.
    pub fn to_draft(&self) -> BookingDraft {
        BookingDraft {
            pickup_location: self.pickup_location.clone(),
            dropoff_location: self.dropoff_location.clone(),
            pickup_date: self.pickup_date.clone(),
            pickup_time: self.pickup_time.clone(),
            return_date: self.return_date.clone(),
            return_time: self.return_time.clone(),
        }
    }
}

/// A booking as known to the engine: the store-assigned document id plus
/// the document fields. The id only exists once the store has accepted
/// the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: String,
    pub record: BookingRecord,
}

impl Booking {
    /// Every value of this booking joined into one line, document id
    /// included. The free-text search box matches against this.
    pub fn search_text(&self) -> String {
        [
            self.id.as_str(),
            self.record.booking_id.as_str(),
            self.record.email.as_str(),
            self.record.pickup_location.as_str(),
            self.record.dropoff_location.as_str(),
            self.record.pickup_date.as_str(),
            self.record.pickup_time.as_str(),
            self.record.return_date.as_str(),
            self.record.return_time.as_str(),
            self.record.created_at.as_str(),
        ]
        .join(" ")
    }
}

/// The signed-in user, as kept in memory and persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl UserProfile {
    /// Builds the profile from what the identity service returned.
    ///
    /// When the provider has no display name for the account, the local
    /// part of the email address stands in.
    pub fn from_identity(id: String, email: String, display_name: Option<String>) -> Self {
        let name = display_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());
        UserProfile { id, email, name }
    }
}
