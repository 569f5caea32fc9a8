//! Config context provider for Profile Hero.
//!
//! Provides the resolved [`ProfileConfig`] to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(get_config()));
//!
//! // In child components
//! let config = use_profile_config();
//! let width = config.read().window.width;
//! ```

use dioxus::prelude::*;
use profilehero_core::ProfileConfig;

/// Get the config resolved at startup.
pub fn get_config() -> ProfileConfig {
    crate::get_config()
}

/// Hook to access the config from context.
pub fn use_profile_config() -> Signal<ProfileConfig> {
    use_context::<Signal<ProfileConfig>>()
}
