//! Utilities module
//!
//! Contains error handling, logging and escaping helpers

pub mod error;
pub mod html;
pub mod logging;
