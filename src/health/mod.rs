//! Health endpoint probing.
//!
//! A single GET against the local server's health endpoint; success iff
//! the JSON body carries `"status": "healthy"`.

pub mod probe;

pub use probe::{evaluate, HealthOutcome, HealthProber};
