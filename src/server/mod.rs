//! Development server startup.
//!
//! Projects with a `package.json` get their npm dev script run in the
//! foreground; anything else is served by a built-in static file server
//! until Ctrl+C.

pub mod interrupt;
pub mod launcher;
pub mod static_files;

pub use interrupt::InterruptFlag;
pub use launcher::{select_script, ServerExit, ServerLauncher};
pub use static_files::{content_type, StaticServer};
