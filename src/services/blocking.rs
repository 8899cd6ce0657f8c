//! Blocking facade
//!
//! Runs the async client on a private current-thread runtime. Must not be
//! called from inside another tokio runtime.

use crate::config::{ApiVersion, Configuration};
use crate::models::{FindPlaceRequest, NearbySearchRequest, PlaceDetailsRequest, TextSearchRequest};
use crate::services::router::PlacesClient;
use crate::utils::error::{ErrorContext, PlacesResult};
use serde_json::Value;
use tokio::runtime::{Builder, Runtime};

/// Synchronous wrapper around [`PlacesClient`]
#[derive(Debug)]
pub struct BlockingPlacesClient {
    inner: PlacesClient,
    runtime: Runtime,
}

impl BlockingPlacesClient {
    pub fn new(config: Configuration) -> PlacesResult<Self> {
        Self::from_client(PlacesClient::new(config)?)
    }

    pub fn from_client(inner: PlacesClient) -> PlacesResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .configuration_context("Failed to create blocking runtime")?;

        Ok(Self { inner, runtime })
    }

    pub fn version(&self) -> ApiVersion {
        self.inner.version()
    }

    pub fn text_search(&self, request: &TextSearchRequest) -> PlacesResult<Value> {
        self.runtime.block_on(self.inner.text_search(request))
    }

    pub fn nearby_search(&self, request: &NearbySearchRequest) -> PlacesResult<Value> {
        self.runtime.block_on(self.inner.nearby_search(request))
    }

    pub fn get_place_details(&self, request: &PlaceDetailsRequest) -> PlacesResult<Value> {
        self.runtime.block_on(self.inner.get_place_details(request))
    }

    pub fn find_place(&self, request: &FindPlaceRequest) -> PlacesResult<Value> {
        self.runtime.block_on(self.inner.find_place(request))
    }
}
