//! Configuration module
//!
//! Handles CLI configuration including the backend URL and other settings.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the platform backend
    pub backend_url: String,
}
