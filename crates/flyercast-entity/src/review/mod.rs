//! Review-request domain entities.

pub mod model;

pub use model::{CreateReviewCustomer, ReviewCustomer};
