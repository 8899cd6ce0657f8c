//! Google Places API client library
//!
//! Wraps both generations of the Places API, Legacy (query-string GET) and
//! New (JSON body with header field masks), behind one client. The API
//! generation is chosen once through [`Configuration`].
//!
//! ```rust,no_run
//! use placesapi::{ApiVersion, Configuration, PlacesClient, TextSearchRequest};
//!
//! # async fn run() -> Result<(), placesapi::PlacesError> {
//! let config = Configuration::new("your-api-key", ApiVersion::New)?;
//! let client = PlacesClient::new(config)?;
//!
//! let places = client
//!     .text_search(&TextSearchRequest::new("museums in Paris").with_param("regionCode", "fr"))
//!     .await?;
//! println!("{}", places["places"][0]["displayName"]["text"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod models;
pub mod providers;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::{ApiVersion, Configuration};
pub use models::{
    FindPlaceRequest, HttpMethod, InputType, NearbySearchRequest, PlaceDetailsRequest, RequestDescriptor,
    TextSearchRequest,
};
pub use providers::{LegacyDialect, NewDialect, PlacesDialect};
pub use services::{BlockingPlacesClient, PlacesClient, ReqwestTransport, Transport, TransportError};
pub use utils::error::{PlacesError, PlacesResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
