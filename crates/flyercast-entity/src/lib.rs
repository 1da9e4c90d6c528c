//! # flyercast-entity
//!
//! Domain entity models for Flyercast. Every struct in this crate
//! represents a backend record or a domain value object.
//!
//! The backend serializes fields with capitalized (PascalCase) names; the
//! `#[serde(rename_all = "PascalCase")]` attributes in this crate are the
//! single normalization boundary between the wire shape and Rust field
//! names. No other crate deals in server shapes.

pub mod company;
pub mod flyer;
pub mod review;
pub mod session;
