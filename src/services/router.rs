//! Places client facade
//!
//! Routes each logical operation to the dialect selected by the configuration

use crate::config::{ApiVersion, Configuration};
use crate::models::{FindPlaceRequest, NearbySearchRequest, PlaceDetailsRequest, TextSearchRequest};
use crate::providers::{LegacyDialect, NewDialect, PlacesDialect};
use crate::services::client::{ReqwestTransport, Transport};
use crate::utils::error::PlacesResult;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Places API client
///
/// The dialect is fixed when the client is built and all state is immutable,
/// so a client can be cloned and shared across tasks freely. Each call makes
/// exactly one HTTP request; nothing is retried. Transport and decode failures
/// come back as [`PlacesError`](crate::PlacesError) values and retry policy is
/// left to the caller.
#[derive(Clone)]
pub struct PlacesClient {
    config: Configuration,
    dialect: Arc<dyn PlacesDialect>,
}

impl PlacesClient {
    /// Create a client backed by `reqwest`, using the configured timeout
    pub fn new(config: Configuration) -> PlacesResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout())?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client over a custom transport
    pub fn with_transport(config: Configuration, transport: Arc<dyn Transport>) -> Self {
        let dialect: Arc<dyn PlacesDialect> = match config.version() {
            ApiVersion::Legacy => Arc::new(LegacyDialect::new(config.clone(), transport)),
            ApiVersion::New => Arc::new(NewDialect::new(config.clone(), transport)),
        };

        info!("Places client initialized for the {} API at {}", config.version(), config.base_url());

        Self { config, dialect }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn version(&self) -> ApiVersion {
        self.dialect.version()
    }

    /// Search places by free text.
    ///
    /// The Legacy API ignores `extra` and `field_mask`.
    pub async fn text_search(&self, request: &TextSearchRequest) -> PlacesResult<Value> {
        debug!("text_search via {} API", self.version());
        self.dialect.text_search(request).await
    }

    /// Text search with default options
    pub async fn text_search_query(&self, query: &str) -> PlacesResult<Value> {
        self.text_search(&TextSearchRequest::new(query)).await
    }

    /// Search places around a point.
    ///
    /// `keyword` and `place_type` only exist in the Legacy API; the New API
    /// drops them and logs a warning.
    ///
    /// Without a `field_mask`, the New API uses the same default as text search,
    /// [`DEFAULT_SEARCH_FIELD_MASK`](crate::providers::new_api::DEFAULT_SEARCH_FIELD_MASK)
    /// (`places.displayName,places.formattedAddress,places.priceLevel`). It does not
    /// request `places.id` or `places.rating`; pass an explicit mask for those.
    pub async fn nearby_search(&self, request: &NearbySearchRequest) -> PlacesResult<Value> {
        debug!("nearby_search via {} API", self.version());
        self.dialect.nearby_search(request).await
    }

    /// Fetch details for a place.
    ///
    /// `fields` is the comma-separated `fields` parameter for the Legacy API
    /// (default `address_components`) and the `X-Goog-FieldMask` header for
    /// the New API (default `displayName,formattedAddress,rating,websiteUri,priceLevel,nationalPhoneNumber`).
    /// Field names differ between the two APIs.
    pub async fn get_place_details(&self, request: &PlaceDetailsRequest) -> PlacesResult<Value> {
        debug!("get_place_details via {} API", self.version());
        self.dialect.get_place_details(request).await
    }

    /// Place details with the dialect's default fields
    pub async fn place_details(&self, place_id: &str) -> PlacesResult<Value> {
        self.get_place_details(&PlaceDetailsRequest::new(place_id)).await
    }

    /// Find a place from text or a phone number.
    ///
    /// Legacy API only: with the New API this returns
    /// [`PlacesError::UnsupportedOperation`](crate::PlacesError::UnsupportedOperation)
    /// without touching the network.
    pub async fn find_place(&self, request: &FindPlaceRequest) -> PlacesResult<Value> {
        debug!("find_place via {} API", self.version());
        self.dialect.find_place(request).await
    }
}

impl fmt::Debug for PlacesClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacesClient")
            .field("config", &self.config)
            .field("dialect", &self.dialect.version())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InputType;
    use crate::providers::test_support::RecordingTransport;

    fn client(version: ApiVersion, transport: Arc<RecordingTransport>) -> PlacesClient {
        let config = Configuration::new("test-key", version).unwrap();
        PlacesClient::with_transport(config, transport)
    }

    #[test]
    fn test_client_creation() {
        let config = Configuration::new("test-key", ApiVersion::Legacy).unwrap();
        let client = PlacesClient::new(config).unwrap();
        assert_eq!(client.version(), ApiVersion::Legacy);
        assert_eq!(client.configuration().api_key(), "test-key");
    }

    #[test]
    fn test_dialect_follows_configuration() {
        let transport = Arc::new(RecordingTransport::ok("{}"));
        assert_eq!(client(ApiVersion::Legacy, transport.clone()).version(), ApiVersion::Legacy);
        assert_eq!(client(ApiVersion::New, transport).version(), ApiVersion::New);
    }

    #[tokio::test]
    async fn test_legacy_dispatch_uses_get() {
        let transport = Arc::new(RecordingTransport::ok(r#"{"status":"OK","results":[]}"#));
        let client = client(ApiVersion::Legacy, transport.clone());

        client.text_search_query("Eiffel Tower").await.unwrap();

        let req = transport.last();
        assert!(req.url.ends_with("/textsearch/json"));
        assert_eq!(req.query_value("key"), Some("test-key"));
    }

    #[tokio::test]
    async fn test_new_dispatch_uses_post() {
        let transport = Arc::new(RecordingTransport::ok(r#"{"places":[]}"#));
        let client = client(ApiVersion::New, transport.clone());

        client.text_search_query("museums").await.unwrap();

        let req = transport.last();
        assert!(req.url.ends_with(":searchText"));
        assert!(req.body.is_some());
    }

    #[tokio::test]
    async fn test_find_place_by_version() {
        let transport = Arc::new(RecordingTransport::ok(r#"{"status":"OK","candidates":[]}"#));
        let request = FindPlaceRequest::new("Eiffel Tower", InputType::TextQuery);

        let legacy = client(ApiVersion::Legacy, transport.clone());
        assert!(legacy.find_place(&request).await.is_ok());
        assert_eq!(transport.calls(), 1);

        let new = client(ApiVersion::New, transport.clone());
        assert!(new.find_place(&request).await.is_err());
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn test_debug_hides_key() {
        let transport = Arc::new(RecordingTransport::ok("{}"));
        let rendered = format!("{:?}", client(ApiVersion::New, transport));
        assert!(!rendered.contains("test-key"));
    }
}
