//! MBTA v3 API response DTOs.
//!
//! The API speaks JSON:API: every response is a document with a `data`
//! array of resources, each carrying an `id` and an `attributes` object.
//! Only the attributes we read are declared; everything else is ignored.

use serde::Deserialize;

/// A JSON:API document. We only ever read its primary data.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<A> {
    pub data: Vec<Resource<A>>,
}

/// One resource in a document's `data` array.
#[derive(Debug, Clone, Deserialize)]
pub struct Resource<A> {
    pub id: String,
    pub attributes: A,
}

/// Attributes of a `/routes` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteAttributes {
    /// Full name, e.g. "Red Line".
    pub long_name: String,

    /// e.g. `["South", "North"]`. Entries may be null on some routes.
    #[serde(default)]
    pub direction_names: Vec<Option<String>>,

    /// e.g. `["Ashmont/Braintree", "Alewife"]`.
    #[serde(default)]
    pub direction_destinations: Vec<Option<String>>,
}

/// Attributes of a `/stops` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct StopAttributes {
    pub name: String,
}

/// Attributes of a `/predictions` resource.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionAttributes {
    /// RFC 3339 timestamp. Null when the train only arrives here (e.g. at
    /// the end of its trip).
    pub departure_time: Option<String>,
}
