//! Flyer domain entities.

pub mod model;
pub mod query;

pub use model::{Flyer, FlyerUpdate, FlyerUpload};
pub use query::FlyerQuery;
