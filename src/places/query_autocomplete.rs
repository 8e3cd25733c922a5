use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{HttpClient, HttpRequest};
use crate::error::Error;
use crate::serialize::{lat_lng_to_string, QueryBuilder};
use crate::types::{
    Language, LatLng, PredictionSubstring, PredictionTerm, RequestConfig, ResponseStatus,
    StructuredFormatting,
};

/// Endpoint address used when the request descriptor does not override it.
pub const DEFAULT_URL: &str =
    "https://maps.googleapis.com/maps/api/place/queryautocomplete/json";

/// Query parameters for a query-autocomplete call. Only `input` is required;
/// the remote service validates everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryAutocompleteParams {
    /// The text string on which to search. Candidates are matched against
    /// this string and ordered by perceived relevance.
    pub input: String,
    /// Character position in `input` at which the service stops reading text
    /// for predictions, generally the caret position. Without an offset the
    /// whole term is used.
    pub offset: Option<u32>,
    /// Point around which to bias results. Biasing weights results toward
    /// the area; it is not a hard filter.
    pub location: Option<LatLng>,
    /// Distance in meters within which to bias results, together with
    /// `location`.
    pub radius: Option<f64>,
    /// Preferred language for the results.
    pub language: Option<Language>,
    /// API key, when the caller does not supply it by other means.
    pub key: Option<String>,
}

impl QueryAutocompleteParams {
    pub fn new(input: impl Into<String>) -> Self {
        QueryAutocompleteParams {
            input: input.into(),
            offset: None,
            location: None,
            radius: None,
            language: None,
            key: None,
        }
    }
}

/// Default parameter serializer: every field passes through unchanged except
/// `location`, which becomes the comma-joined `"lat,lng"` pair (never a
/// nested structure, never percent-encoded).
pub fn serialize_params(params: &QueryAutocompleteParams) -> String {
    let mut query = QueryBuilder::new();

    query.push("input", &params.input);
    if let Some(offset) = params.offset {
        query.push_raw("offset", &offset.to_string());
    }
    if let Some(location) = &params.location {
        query.push_raw("location", &lat_lng_to_string(location));
    }
    if let Some(radius) = params.radius {
        query.push_raw("radius", &radius.to_string());
    }
    if let Some(language) = params.language {
        query.push("language", language.as_str());
    }
    if let Some(key) = &params.key {
        query.push("key", key);
    }

    query.finish()
}

/// Request descriptor for one call: the query parameters plus transport
/// configuration. Unset configuration fields fall back to [`DEFAULT_URL`],
/// `GET`, and [`serialize_params`].
#[derive(Debug, Clone)]
pub struct QueryAutocompleteRequest {
    pub params: QueryAutocompleteParams,
    pub config: RequestConfig<QueryAutocompleteParams>,
}

impl QueryAutocompleteRequest {
    pub fn new(params: QueryAutocompleteParams) -> Self {
        QueryAutocompleteRequest {
            params,
            config: RequestConfig::default(),
        }
    }
}

/// One candidate result. Predictions are read-only; nothing here is touched
/// after decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAutocompletePrediction {
    /// Human-readable name for the result, usually the business name for
    /// establishment results.
    pub description: String,
    /// Sections of `description`, in left-to-right order.
    pub terms: Vec<PredictionTerm>,
    /// Spans of `description` matching the input, for highlighting.
    pub matched_substrings: Vec<PredictionSubstring>,
    pub structured_formatting: Option<StructuredFormatting>,
    pub place_id: Option<String>,
    pub types: Option<Vec<String>>,
}

/// Decoded response body: the service status plus up to 5 predictions in the
/// relevance order the endpoint returned. The status is delivered to the
/// caller unexamined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAutocompleteResponseData {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    pub predictions: Vec<QueryAutocompletePrediction>,
}

/// Full response: transport status and headers from the HTTP client, with
/// the body decoded into [`QueryAutocompleteResponseData`].
#[derive(Debug, Clone)]
pub struct QueryAutocompleteResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub data: QueryAutocompleteResponseData,
}

/// Executes one query-autocomplete call through the given HTTP client.
///
/// The descriptor is merged with the defaults field by field: an unset
/// `url`, `method`, or `params_serializer` takes its documented default and
/// the rest are untouched. Headers and timeout are forwarded verbatim.
/// Exactly one outbound call is made; transport failures propagate from the
/// client unchanged, and a body whose `status` signals a logical failure
/// (e.g. `ZERO_RESULTS`) still resolves normally.
pub async fn query_autocomplete(
    request: QueryAutocompleteRequest,
    client: &dyn HttpClient,
) -> Result<QueryAutocompleteResponse, Error> {
    let QueryAutocompleteRequest { params, config } = request;

    let url = config.url.unwrap_or_else(|| DEFAULT_URL.to_string());
    let method = config.method.unwrap_or(Method::GET);
    let serializer = config.params_serializer.unwrap_or(serialize_params);

    let response = client
        .execute(HttpRequest {
            method,
            url,
            query: serializer(&params),
            headers: config.headers,
            timeout: config.timeout,
        })
        .await?;

    let data: QueryAutocompleteResponseData = serde_json::from_slice(&response.body)?;

    Ok(QueryAutocompleteResponse {
        status: response.status,
        headers: response.headers,
        data,
    })
}
