// --- File: crates/quicktaxi_booking/src/validation.rs ---
//! Booking form validation.
//!
//! Validation runs in two passes. The first pass checks that every form
//! field is filled in, collecting one message per missing field in form
//! layout order. Only when that pass finds nothing does the second pass
//! look for a slot conflict, and a conflict comes back as the single
//! diagnostic on the pickup time field, replacing anything else. The
//! front end relies on that shape: a conflict is always the only
//! message on screen.
//!
//! Messages are the user-facing strings, in the product language.

use quicktaxi_common::models::{Booking, BookingDraft, BookingField, FieldErrors};

/// Diagnostic for a pickup slot that is already taken.
pub const SLOT_TAKEN: &str = "Ce créneau horaire est déjà réservé";

fn required_message(field: BookingField) -> &'static str {
    match field {
        BookingField::PickupLocation => "Le lieu de prise en charge est requis",
        BookingField::DropoffLocation => "Le lieu de dépôt est requis",
        BookingField::PickupDate => "La date de prise en charge est requise",
        BookingField::PickupTime => "L'heure de prise en charge est requise",
        BookingField::ReturnDate => "La date de retour est requise",
        BookingField::ReturnTime => "L'heure de retour est requise",
    }
}

/// Validates a draft against the required fields and the booked slots.
///
/// `editing_id` carries the document id of the booking being edited, if
/// any; that booking's own slot never conflicts with itself. An empty
/// result means the draft may be submitted.
pub fn validate_draft(
    draft: &BookingDraft,
    bookings: &[Booking],
    editing_id: Option<&str>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in BookingField::ALL {
        if draft.field(field).is_empty() {
            errors.insert(field, required_message(field).to_string());
        }
    }
    if !errors.is_empty() {
        return errors;
    }

    let conflict = bookings.iter().any(|booking| {
        booking.record.pickup_date == draft.pickup_date
            && booking.record.pickup_time == draft.pickup_time
            && editing_id != Some(booking.id.as_str())
    });
    if conflict {
        let mut errors = FieldErrors::new();
        errors.insert(BookingField::PickupTime, SLOT_TAKEN.to_string());
        return errors;
    }

    FieldErrors::new()
}

/// The pickup times already taken on `date`, in list order. Used to
/// grey out slots in the time picker. `exclude_id` skips the booking
/// being edited so its own slot stays selectable.
pub fn booked_times(bookings: &[Booking], date: &str, exclude_id: Option<&str>) -> Vec<String> {
    bookings
        .iter()
        .filter(|booking| {
            booking.record.pickup_date == date && exclude_id != Some(booking.id.as_str())
        })
        .map(|booking| booking.record.pickup_time.clone())
        .collect()
}
