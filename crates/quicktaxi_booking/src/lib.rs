// --- File: crates/quicktaxi_booking/src/lib.rs ---
// Declare modules within this crate
pub mod cities;
#[cfg(test)]
mod cities_test;
pub mod factory;
pub mod logic;
pub mod service;
pub mod session;
pub mod time;
#[cfg(test)]
mod time_proptest;
pub mod validation;
