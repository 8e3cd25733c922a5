//! Typed client for the Places Query Autocomplete web service.
//!
//! One call, one outbound HTTP request: build a
//! [`QueryAutocompleteRequest`], hand it to [`query_autocomplete`] together
//! with an [`HttpClient`] (the reqwest-backed [`Client`] by default), and
//! get back the decoded prediction list. This crate only builds and
//! dispatches the request; retries, rate limiting, caching, and credential
//! management are the caller's business, and the response `status` field is
//! delivered unexamined.
//!
//! ```no_run
//! use places_autocomplete::{query_autocomplete, Client, LatLng};
//! use places_autocomplete::places::query_autocomplete::{
//!     QueryAutocompleteParams, QueryAutocompleteRequest,
//! };
//!
//! # async fn run() -> Result<(), places_autocomplete::Error> {
//! let mut params = QueryAutocompleteParams::new("Pizza near Sicily");
//! params.location = Some(LatLng::new(37.4, 15.1));
//! params.radius = Some(500.0);
//! params.key = Some("YOUR_API_KEY".to_string());
//!
//! let client = Client::new();
//! let response =
//!     query_autocomplete(QueryAutocompleteRequest::new(params), &client).await?;
//!
//! for prediction in &response.data.predictions {
//!     println!("{}", prediction.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod places;
pub mod serialize;
pub mod types;

pub use client::{Client, HttpClient, HttpRequest, HttpResponse};
pub use error::Error;
pub use places::query_autocomplete::query_autocomplete;
pub use types::{LatLng, Language, ResponseStatus};
