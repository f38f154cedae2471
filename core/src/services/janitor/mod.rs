//! Janitor for periodic removal of expired sessions and revocations
//!
//! Two independent fixed-interval loops. A failed sweep is logged and the
//! loop waits for its next tick; there is no retry.

mod service;


pub use service::{Janitor, JanitorHandle, SweepReport};
