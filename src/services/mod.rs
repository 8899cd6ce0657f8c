//! Service layer module
//!
//! Contains the HTTP transport, the async client facade and its blocking wrapper

pub mod blocking;
pub mod client;
pub mod router;

pub use blocking::BlockingPlacesClient;
pub use client::{ReqwestTransport, Transport, TransportError};
pub use router::PlacesClient;
