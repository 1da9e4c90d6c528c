//! # flyercast-share
//!
//! The share resolver: given a media resource reference and a suggested
//! title, obtain the underlying bytes and deliver them to the user's
//! preferred sharing surface, never leaving the user without *some*
//! usable artifact.
//!
//! Acquisition walks an ordered strategy list (server-mediated download
//! endpoint, direct fetch with credentials omitted, then a fetch +
//! re-encode pass), each tried exactly once. A successful acquisition is
//! handed to the native share surface when one is available and capable;
//! user cancellation there is terminal and silent. Anything else falls
//! back to a guaranteed local download.

pub mod acquire;
pub mod artifact;
pub mod deliver;
pub mod error;
pub mod media;
pub mod origin;
pub mod outcome;
pub mod resolver;
pub mod surface;

pub use error::ShareError;
pub use media::MediaReference;
pub use outcome::ShareOutcome;
pub use resolver::ShareResolver;
