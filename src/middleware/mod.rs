//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: Session identity storage and the [`auth::CurrentUser`] extractor
//! - [`role`]: Role-guard middleware for route groups
//!
//! # Authentication Flow
//!
//! 1. The session layer attaches the browser session to every request
//! 2. Login stores a [`auth::SessionIdentity`] in the session
//! 3. `CurrentUser` extracts the identity, rejecting anonymous requests
//! 4. Role guards restrict route groups to specific roles
//! 5. Logout flushes the whole session (identity and CSRF token)

pub mod auth;
pub mod role;
