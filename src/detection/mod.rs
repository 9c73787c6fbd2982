//! Platform and tool detection.

pub mod command_detection;
pub mod platform;

pub use command_detection::{extract_version, VersionDetector, VersionQuery};
pub use platform::Platform;
