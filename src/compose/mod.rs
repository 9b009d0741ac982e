//! Docker Compose file generation
//!
//! Turns an operator configuration into a compose document and writes it
//! where the orchestration tool can pick it up.

pub mod command;
pub mod document;
pub mod transform;
pub mod writer;

pub use command::ComposeCommand;
pub use document::{ComposeDocument, ComposeService};
pub use transform::{transform, Transformed};
pub use writer::ComposeWriter;
