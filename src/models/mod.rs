//! Data model module
//!
//! Contains request descriptors and per-operation parameter types

pub mod http;
pub mod places;

pub use http::{HttpMethod, RequestDescriptor};
pub use places::{FindPlaceRequest, InputType, NearbySearchRequest, PlaceDetailsRequest, TextSearchRequest};
