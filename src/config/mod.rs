//! Configuration modules for the Collège en ligne API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with sensible development defaults.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`email`]: Email/SMTP configuration for account notifications

pub mod cors;
pub mod database;
pub mod email;
