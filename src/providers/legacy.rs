//! Legacy Places API dialect
//!
//! Query-string GET requests against the `maps.googleapis.com` JSON endpoints,
//! authenticated with the `key` query parameter

use super::{decode_body, PlacesDialect};
use crate::config::{ApiVersion, Configuration};
use crate::models::{FindPlaceRequest, NearbySearchRequest, PlaceDetailsRequest, RequestDescriptor, TextSearchRequest};
use crate::services::client::Transport;
use crate::utils::error::{helpers::configuration_error, PlacesResult};
use crate::utils::html::escape_html;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Details fields requested when the caller gives none
pub const DEFAULT_DETAIL_FIELDS: &str = "address_components";

/// Legacy dialect
pub struct LegacyDialect {
    config: Configuration,
    transport: Arc<dyn Transport>,
}

impl LegacyDialect {
    pub fn new(config: Configuration, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url(), path)
    }

    pub fn build_text_search(&self, request: &TextSearchRequest) -> RequestDescriptor {
        if !request.extra.is_empty() || request.field_mask.is_some() {
            debug!("Legacy text search ignores extra parameters and field mask");
        }

        RequestDescriptor::get(self.endpoint("textsearch/json"))
            .with_query("query", escape_html(&request.query))
            .with_query("key", self.config.api_key())
    }

    pub fn build_nearby_search(&self, request: &NearbySearchRequest) -> RequestDescriptor {
        let mut descriptor = RequestDescriptor::get(self.endpoint("nearbysearch/json"))
            .with_query("location", escape_html(&request.location()))
            .with_query("radius", request.radius.to_string())
            .with_query("key", self.config.api_key());

        if let Some(keyword) = non_empty(request.keyword.as_deref()) {
            descriptor = descriptor.with_query("keyword", escape_html(keyword));
        }
        if let Some(place_type) = non_empty(request.place_type.as_deref()) {
            descriptor = descriptor.with_query("type", place_type);
        }
        if !request.included_types.is_empty() {
            descriptor = descriptor.with_query("included_types", request.included_types.join(","));
        }
        if !request.excluded_types.is_empty() {
            descriptor = descriptor.with_query("excluded_types", request.excluded_types.join(","));
        }
        if !request.extra.is_empty() || request.field_mask.is_some() {
            debug!("Legacy nearby search ignores extra parameters and field mask");
        }

        descriptor
    }

    pub fn build_place_details(&self, request: &PlaceDetailsRequest) -> PlacesResult<RequestDescriptor> {
        if request.place_id.trim().is_empty() {
            return Err(configuration_error("Place ID cannot be empty"));
        }
        let fields = match request.fields.as_deref() {
            None => DEFAULT_DETAIL_FIELDS,
            Some(f) if f.trim().is_empty() => {
                return Err(configuration_error("Details fields cannot be empty"));
            }
            Some(f) => f,
        };

        Ok(RequestDescriptor::get(self.endpoint("details/json"))
            .with_query("place_id", escape_html(&request.place_id))
            .with_query("key", self.config.api_key())
            .with_query("fields", fields))
    }

    pub fn build_find_place(&self, request: &FindPlaceRequest) -> RequestDescriptor {
        let mut descriptor = RequestDescriptor::get(self.endpoint("findplacefromtext/json"))
            .with_query("input", escape_html(&request.input))
            .with_query("inputtype", request.input_type.as_str())
            .with_query("key", self.config.api_key());

        if !request.fields.is_empty() {
            descriptor = descriptor.with_query("fields", request.fields.join(","));
        }

        descriptor
    }

    async fn send(&self, descriptor: RequestDescriptor) -> PlacesResult<Value> {
        let body = self.transport.execute(&descriptor).await?;
        let value = decode_body(&body)?;

        // Legacy errors arrive as HTTP 200 with a status field
        if let Some(status) = value.get("status").and_then(Value::as_str) {
            if status != "OK" && status != "ZERO_RESULTS" {
                let message = value.get("error_message").and_then(Value::as_str).unwrap_or("");
                warn!("Legacy Places API returned status {} {}", status, message);
            }
        }

        Ok(value)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[async_trait]
impl PlacesDialect for LegacyDialect {
    fn version(&self) -> ApiVersion {
        ApiVersion::Legacy
    }

    async fn text_search(&self, request: &TextSearchRequest) -> PlacesResult<Value> {
        self.send(self.build_text_search(request)).await
    }

    async fn nearby_search(&self, request: &NearbySearchRequest) -> PlacesResult<Value> {
        self.send(self.build_nearby_search(request)).await
    }

    async fn get_place_details(&self, request: &PlaceDetailsRequest) -> PlacesResult<Value> {
        let descriptor = self.build_place_details(request)?;
        self.send(descriptor).await
    }

    async fn find_place(&self, request: &FindPlaceRequest) -> PlacesResult<Value> {
        self.send(self.build_find_place(request)).await
    }
}
