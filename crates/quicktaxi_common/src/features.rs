// --- File: crates/quicktaxi_common/src/features.rs ---
//! Runtime collaborator flag handling.
//!
//! The hosted collaborator sections in the configuration are optional,
//! and each one is paired with a `use_*` flag. A collaborator only comes
//! up when its flag is set and its section is present.

use quicktaxi_config::AppConfig;
use std::sync::Arc;

/// Check if a collaborator is enabled at runtime.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `use_feature` - The configuration flag that enables the collaborator
/// * `feature_config` - The configuration section for the collaborator
///
/// # Returns
///
/// `true` if the collaborator is enabled, `false` otherwise
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the hosted identity service is enabled at runtime.
pub fn is_identity_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_identity, config.identity.as_ref())
}

/// Check if the hosted booking store is enabled at runtime.
pub fn is_store_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_store, config.store.as_ref())
}
