//! # flyercast-client
//!
//! Typed REST client for the Flyercast backend. One [`ApiClient`] wraps
//! the HTTP plumbing (base URL, bearer token, error mapping); the
//! per-resource modules add the endpoint bindings on top of it.
//!
//! Per the service contract there are no request timeouts and no retry
//! policy; callers get exactly one attempt per call.

pub mod auth;
pub mod company;
pub mod error;
pub mod flyer;
pub mod http;
pub mod review;

pub use error::ClientError;
pub use http::ApiClient;
