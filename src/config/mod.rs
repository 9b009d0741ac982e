//! Operator configuration input
//!
//! Reading and validating the JSON document that describes a deployment.

pub mod reader;
pub mod types;

pub use reader::{ConfigReader, ConfigSource};
pub use types::{RawConfig, ServiceDefinition};
