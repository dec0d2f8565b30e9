//! Authentication service module
//!
//! Email and password registration and login. Both flows end by issuing a
//! session token and returning the public user profile.

mod service;


pub use service::{AuthService, Registration};
