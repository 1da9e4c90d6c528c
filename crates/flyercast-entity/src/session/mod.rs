//! Session domain entities.

pub mod model;
pub mod role;

pub use model::{LoginRequest, RegisterRequest, Session};
pub use role::Role;
