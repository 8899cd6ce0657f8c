//! Configuration management module
//!
//! Responsible for API key, version selection and base URL resolution, including loading from environment variables

pub mod settings;

pub use settings::{ApiVersion, Configuration};
