//! Configuration management module
//!
//! Responsible for loading client configuration from environment variables and `.env` files

pub mod settings;

pub use settings::Settings;
