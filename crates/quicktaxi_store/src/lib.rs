// --- File: crates/quicktaxi_store/src/lib.rs ---
// Declare modules within this crate
pub mod client;
pub mod service;

pub use client::{StoreClient, StoreError};
