// --- File: crates/quicktaxi_booking/src/cities.rs ---
//! City suggestions for the pickup and dropoff fields.
//!
//! The product serves a fixed set of cities. Matching is a plain
//! case-insensitive substring scan; there is no ranking beyond list
//! order.

/// The cities bookings can be made between, in product display order.
pub const CITIES: [&str; 20] = [
    "Paris, France",
    "Marseille, France",
    "Lyon, France",
    "Toulouse, France",
    "Nice, France",
    "Nantes, France",
    "Strasbourg, France",
    "Montpellier, France",
    "Bordeaux, France",
    "Lille, France",
    "Rennes, France",
    "Reims, France",
    "Le Havre, France",
    "Saint-Étienne, France",
    "Toulon, France",
    "Angers, France",
    "Grenoble, France",
    "Dijon, France",
    "Nîmes, France",
    "Aix-en-Provence, France",
];

/// Returns up to `limit` cities whose names contain `query`, ignoring
/// case, in list order. An empty query matches every city, so the first
/// `limit` entries come back.
pub fn match_cities(query: &str, limit: usize) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    CITIES
        .iter()
        .filter(|city| city.to_lowercase().contains(&needle))
        .take(limit)
        .copied()
        .collect()
}
