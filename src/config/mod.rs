/// Database configuration and connection management
pub mod database;

/// Receipt template loading from `receipt_template.toml`
pub mod receipt_template;

/// HTTP server settings from environment variables
pub mod server;
