//! Authentication route handlers
//!
//! Email and password registration and login. Both return
//! `{ token, user: { id, name, email, role } }`.

pub mod login;
pub mod register;
