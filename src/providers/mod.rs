//! Dialect module
//!
//! Defines the PlacesDialect trait and the Legacy / New implementations

pub mod legacy;
pub mod new_api;

use crate::config::ApiVersion;
use crate::models::{FindPlaceRequest, NearbySearchRequest, PlaceDetailsRequest, TextSearchRequest};
use crate::utils::error::{ErrorContext, PlacesResult};
use async_trait::async_trait;
use serde_json::Value;

/// One generation of the Places API
///
/// Each implementation translates the dialect-neutral request types into its
/// own request shape, executes exactly one HTTP call through its transport and
/// returns the decoded JSON unchanged.
#[async_trait]
pub trait PlacesDialect: Send + Sync {
    /// API generation served by this dialect
    fn version(&self) -> ApiVersion;

    async fn text_search(&self, request: &TextSearchRequest) -> PlacesResult<Value>;

    async fn nearby_search(&self, request: &NearbySearchRequest) -> PlacesResult<Value>;

    async fn get_place_details(&self, request: &PlaceDetailsRequest) -> PlacesResult<Value>;

    async fn find_place(&self, request: &FindPlaceRequest) -> PlacesResult<Value>;
}

/// Decode a raw response body into a generic JSON value
pub(crate) fn decode_body(body: &str) -> PlacesResult<Value> {
    serde_json::from_str(body).decode_context("Failed to decode Places response")
}

pub use legacy::LegacyDialect;
pub use new_api::NewDialect;
