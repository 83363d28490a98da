// --- File: crates/quicktaxi_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Identity Service Config ---
// Holds the endpoint of the hosted identity service. The API key is not a
// user secret (it identifies the project), but it can still be supplied via
// QT__IDENTITY__API_KEY instead of the config file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IdentityConfig {
    #[serde(default = "default_identity_base_url")]
    pub base_url: String,
    pub api_key: String, // Loaded via QT__IDENTITY__API_KEY
}

fn default_identity_base_url() -> String {
    "https://identitytoolkit.googleapis.com".to_string()
}

// --- Document Store Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    #[serde(default = "default_store_base_url")]
    pub base_url: String,
    pub project_id: String, // Mandatory
    #[serde(default = "default_database_id")]
    pub database_id: String,
    #[serde(default = "default_collection")]
    pub collection: String,
    pub api_key: String, // Loaded via QT__STORE__API_KEY
}

fn default_store_base_url() -> String {
    "https://firestore.googleapis.com".to_string()
}

fn default_database_id() -> String {
    "(default)".to_string()
}

fn default_collection() -> String {
    "bookings".to_string()
}

// --- Session Persistence Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionConfig {
    /// Path of the file the signed-in user profile is persisted to.
    #[serde(default = "default_session_file")]
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            file: default_session_file(),
        }
    }
}

fn default_session_file() -> String {
    ".quicktaxi_session.json".to_string()
}

// --- Booking Workflow Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingConfig {
    /// Rows per page in the booking list.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Maximum number of city suggestions shown under a location field.
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            page_size: default_page_size(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

fn default_page_size() -> usize {
    5
}

fn default_suggestion_limit() -> usize {
    5
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_identity: bool,
    #[serde(default)]
    pub use_store: bool,

    // --- Optional Collaborator Configurations ---
    #[serde(default)]
    pub identity: Option<IdentityConfig>,
    #[serde(default)]
    pub store: Option<StoreConfig>,

    // --- Engine Configuration (always present, fully defaulted) ---
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub booking: BookingConfig,
}
