//! Local environment-configuration file handling.

pub mod materializer;

pub use materializer::{EnvFileMaterializer, EnvFileOutcome};
