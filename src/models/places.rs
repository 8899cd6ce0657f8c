//! Places request models
//!
//! Dialect-neutral parameter sets for each logical operation. Each dialect
//! translates them into its own request shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Text search parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextSearchRequest {
    /// Free-text query, e.g. "museums in Paris"
    pub query: String,
    /// Extra top-level body fields (New API only, e.g. `regionCode`)
    pub extra: Map<String, Value>,
    /// Field mask (New API only); `None` selects the default mask
    pub field_mask: Option<String>,
}

impl TextSearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn with_field_mask(mut self, field_mask: impl Into<String>) -> Self {
        self.field_mask = Some(field_mask.into());
        self
    }
}

/// Nearby search parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NearbySearchRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in meters
    pub radius: u32,
    /// Legacy API only; dropped by the New API
    pub keyword: Option<String>,
    /// Legacy API only; dropped by the New API
    pub place_type: Option<String>,
    pub included_types: Vec<String>,
    pub excluded_types: Vec<String>,
    /// Extra top-level body fields (New API only)
    pub extra: Map<String, Value>,
    /// Field mask (New API only); `None` selects the default mask
    pub field_mask: Option<String>,
}

impl NearbySearchRequest {
    pub fn new(latitude: f64, longitude: f64, radius: u32) -> Self {
        Self {
            latitude,
            longitude,
            radius,
            ..Default::default()
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = Some(place_type.into());
        self
    }

    pub fn with_included_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_excluded_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn with_field_mask(mut self, field_mask: impl Into<String>) -> Self {
        self.field_mask = Some(field_mask.into());
        self
    }

    /// Location in the Legacy `"lat,lng"` form
    pub fn location(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

/// Place details parameters
///
/// `fields` means different things per dialect: for the Legacy API it is the
/// comma-separated `fields` query parameter, for the New API it is sent as
/// the `X-Goog-FieldMask` header. `None` selects the dialect default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDetailsRequest {
    pub place_id: String,
    pub fields: Option<String>,
}

impl PlaceDetailsRequest {
    pub fn new(place_id: impl Into<String>) -> Self {
        Self {
            place_id: place_id.into(),
            fields: None,
        }
    }

    pub fn with_fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }
}

/// Kind of input given to find-place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    TextQuery,
    PhoneNumber,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::TextQuery => "textquery",
            InputType::PhoneNumber => "phonenumber",
        }
    }
}

/// Find-place parameters (Legacy API only)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindPlaceRequest {
    pub input: String,
    pub input_type: InputType,
    pub fields: Vec<String>,
}

impl FindPlaceRequest {
    pub fn new(input: impl Into<String>, input_type: InputType) -> Self {
        Self {
            input: input.into(),
            input_type,
            fields: Vec::new(),
        }
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_format() {
        let req = NearbySearchRequest::new(48.858844, 2.294351, 1000);
        assert_eq!(req.location(), "48.858844,2.294351");

        let req = NearbySearchRequest::new(-33.5, 151.0, 10);
        assert_eq!(req.location(), "-33.5,151");
    }

    #[test]
    fn test_builders() {
        let req = NearbySearchRequest::new(1.0, 2.0, 3)
            .with_keyword("pizza")
            .with_type("restaurant")
            .with_included_types(["cafe", "bakery"])
            .with_param("regionCode", "fr");

        assert_eq!(req.keyword.as_deref(), Some("pizza"));
        assert_eq!(req.place_type.as_deref(), Some("restaurant"));
        assert_eq!(req.included_types, vec!["cafe".to_string(), "bakery".to_string()]);
        assert!(req.excluded_types.is_empty());
        assert_eq!(req.extra["regionCode"], "fr");
    }

    #[test]
    fn test_input_type_labels() {
        assert_eq!(InputType::TextQuery.as_str(), "textquery");
        assert_eq!(InputType::PhoneNumber.as_str(), "phonenumber");
        assert_eq!(serde_json::to_string(&InputType::PhoneNumber).unwrap(), "\"phonenumber\"");
    }
}
