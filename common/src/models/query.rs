//! Query record models.
//!
//! A query record is whatever the client submitted: an untyped BSON
//! document with a driver-assigned `_id`. The application enforces no
//! schema on it (schema-on-read).

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response body of the query history listing.
///
/// The wire shape is fixed: clients of the history page read `queries` and
/// `count` directly, without an envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QueryListResponse {
    /// All stored query records, unfiltered.
    #[schema(value_type = Vec<Object>)]
    pub queries: Vec<Document>,

    /// Total number of records at the time of the count read.
    ///
    /// Counted in a separate operation from the fetch; under concurrent
    /// writes it may differ from `queries.len()`.
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_serializes_to_fixed_wire_shape() {
        let response = QueryListResponse {
            queries: vec![doc! { "name": "anil" }],
            count: 1,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["queries"][0]["name"], "anil");
    }

    #[test]
    fn test_empty_listing() {
        let response = QueryListResponse {
            queries: vec![],
            count: 0,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"queries":[],"count":0}"#);
    }
}
