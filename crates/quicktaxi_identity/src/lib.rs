// --- File: crates/quicktaxi_identity/src/lib.rs ---
// Declare modules within this crate
pub mod client;
pub mod service;

pub use client::{IdentityClient, IdentityError};
