//! Domain models shared by the store and the handlers.

pub mod user;

pub use user::{NewUser, User};
