//! octocompose - Docker Compose operator
//!
//! Turns an octocompose deployment configuration into a compose file and
//! hands it to `docker compose` (or a configured equivalent):
//!
//! - Reading the JSON configuration from a file or stdin
//! - Resolving service images through the service registry
//! - Writing the compose file to a per-project cache path
//! - Running the orchestration tool and propagating its exit code

pub mod compose;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod operator;
pub mod registry;

pub use error::{OperatorError, Result};
pub use operator::Invocation;
