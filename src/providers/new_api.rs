//! New Places API dialect
//!
//! JSON-body POST / GET requests against `places.googleapis.com`, authenticated
//! through the `X-Goog-Api-Key` header. Every call carries an `X-Goog-FieldMask`
//! header listing the response fields to return.

use super::{decode_body, PlacesDialect};
use crate::config::{ApiVersion, Configuration};
use crate::models::{FindPlaceRequest, NearbySearchRequest, PlaceDetailsRequest, RequestDescriptor, TextSearchRequest};
use crate::services::client::Transport;
use crate::utils::error::{
    helpers::{configuration_error, unsupported},
    PlacesResult,
};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Field mask for text and nearby search when the caller gives none.
/// Omits `places.id` and `places.rating`.
pub const DEFAULT_SEARCH_FIELD_MASK: &str = "places.displayName,places.formattedAddress,places.priceLevel";

/// Field mask for place details when the caller gives none
pub const DEFAULT_DETAILS_FIELD_MASK: &str =
    "displayName,formattedAddress,rating,websiteUri,priceLevel,nationalPhoneNumber";

pub const API_KEY_HEADER: &str = "X-Goog-Api-Key";
pub const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// New dialect
pub struct NewDialect {
    config: Configuration,
    transport: Arc<dyn Transport>,
}

impl NewDialect {
    pub fn new(config: Configuration, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    fn with_headers(&self, descriptor: RequestDescriptor, field_mask: String) -> RequestDescriptor {
        descriptor
            .with_header("Content-Type", "application/json")
            .with_header(API_KEY_HEADER, self.config.api_key())
            .with_header(FIELD_MASK_HEADER, field_mask)
    }

    pub fn build_text_search(&self, request: &TextSearchRequest) -> PlacesResult<RequestDescriptor> {
        let field_mask = resolve_field_mask(request.field_mask.as_deref(), DEFAULT_SEARCH_FIELD_MASK)?;

        let mut body = request.extra.clone();
        if body.contains_key("textQuery") {
            warn!("Ignoring caller-supplied textQuery in extra parameters");
        }
        body.insert("textQuery".to_string(), Value::String(request.query.clone()));

        let url = format!("{}:searchText", self.config.base_url());
        Ok(self.with_headers(RequestDescriptor::post(url, Value::Object(body)), field_mask))
    }

    pub fn build_nearby_search(&self, request: &NearbySearchRequest) -> PlacesResult<RequestDescriptor> {
        let field_mask = resolve_field_mask(request.field_mask.as_deref(), DEFAULT_SEARCH_FIELD_MASK)?;

        if request.keyword.is_some() || request.place_type.is_some() {
            warn!(
                "New Places API has no keyword/type filter for nearby search; dropping keyword={:?} type={:?}",
                request.keyword, request.place_type
            );
        }

        let mut body = request.extra.clone();
        if body.contains_key("locationRestriction") {
            warn!("Ignoring caller-supplied locationRestriction in extra parameters");
        }
        if !request.included_types.is_empty() {
            body.insert("includedTypes".to_string(), json!(request.included_types));
        }
        if !request.excluded_types.is_empty() {
            body.insert("excludedTypes".to_string(), json!(request.excluded_types));
        }
        body.insert(
            "locationRestriction".to_string(),
            json!({
                "circle": {
                    "center": {
                        "latitude": request.latitude,
                        "longitude": request.longitude,
                    },
                    "radius": request.radius,
                }
            }),
        );

        let url = format!("{}:searchNearby", self.config.base_url());
        Ok(self.with_headers(RequestDescriptor::post(url, Value::Object(body)), field_mask))
    }

    pub fn build_place_details(&self, request: &PlaceDetailsRequest) -> PlacesResult<RequestDescriptor> {
        if request.place_id.trim().is_empty() {
            return Err(configuration_error("Place ID cannot be empty"));
        }
        let field_mask = resolve_field_mask(request.fields.as_deref(), DEFAULT_DETAILS_FIELD_MASK)?;

        let url = details_url(self.config.base_url(), &request.place_id)?;
        Ok(self.with_headers(RequestDescriptor::get(url), field_mask))
    }

    async fn send(&self, descriptor: RequestDescriptor) -> PlacesResult<Value> {
        let body = self.transport.execute(&descriptor).await?;
        decode_body(&body)
    }
}

/// Append the place ID to the base URL as a single percent-encoded path segment
fn details_url(base_url: &str, place_id: &str) -> PlacesResult<String> {
    // push() silently drops these two
    if place_id == "." || place_id == ".." {
        return Err(configuration_error(format!("Invalid place ID '{}'", place_id)));
    }

    let mut url = Url::parse(base_url)
        .map_err(|e| configuration_error(format!("Invalid base URL '{}': {}", base_url, e)))?;
    url.path_segments_mut()
        .map_err(|_| configuration_error(format!("Base URL '{}' cannot take a path", base_url)))?
        .pop_if_empty()
        .push(place_id);

    Ok(url.into())
}

/// Pick the caller's field mask or the default; an explicit blank mask is a caller error
fn resolve_field_mask(explicit: Option<&str>, default: &str) -> PlacesResult<String> {
    match explicit {
        None => Ok(default.to_string()),
        Some(mask) if mask.trim().is_empty() => Err(configuration_error(
            "Field mask cannot be empty for the New Places API",
        )),
        Some(mask) => Ok(mask.trim().to_string()),
    }
}

#[async_trait]
impl PlacesDialect for NewDialect {
    fn version(&self) -> ApiVersion {
        ApiVersion::New
    }

    async fn text_search(&self, request: &TextSearchRequest) -> PlacesResult<Value> {
        let descriptor = self.build_text_search(request)?;
        self.send(descriptor).await
    }

    async fn nearby_search(&self, request: &NearbySearchRequest) -> PlacesResult<Value> {
        let descriptor = self.build_nearby_search(request)?;
        self.send(descriptor).await
    }

    async fn get_place_details(&self, request: &PlaceDetailsRequest) -> PlacesResult<Value> {
        let descriptor = self.build_place_details(request)?;
        self.send(descriptor).await
    }

    async fn find_place(&self, _request: &FindPlaceRequest) -> PlacesResult<Value> {
        debug!("Find place requested against the New Places API");
        Err(unsupported("find_place", ApiVersion::New))
    }
}
