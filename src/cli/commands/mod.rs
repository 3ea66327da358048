//! Command implementations for the skillspan CLI
//!
//! Each command has its own module/file.

pub mod inspect;
pub mod samples;
pub mod save;
pub mod validate;

// Re-export argument types for parser
pub use inspect::InspectArgs;
pub use samples::SamplesArgs;
pub use save::SaveArgs;
pub use validate::ValidateArgs;
