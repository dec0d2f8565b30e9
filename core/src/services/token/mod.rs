//! Token service module for JWT management
//!
//! Issues HS256 session tokens carrying the user id and role, and verifies
//! bearer tokens presented to guarded routes.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
