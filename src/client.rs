use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::error::Error;

/// A fully described outbound HTTP request: resolved URL, serialized query
/// string, and the transport options forwarded from the request descriptor.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Pre-serialized query string, appended to `url` as-is (empty means no
    /// query component).
    pub query: String,
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
}

/// The raw outcome of an HTTP call, before the body is decoded.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Capability to execute a described HTTP request. The default
/// implementation is [`Client`]; tests substitute fakes implementing the
/// same trait.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}

/// Default HTTP client backed by a shared `reqwest::Client`. Connection
/// pooling and TLS are reqwest's concern; one instance can be reused across
/// concurrent calls. Non-2xx statuses are returned as responses, not errors.
#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
}

impl Client {
    pub fn new() -> Self {
        Client {
            client: reqwest::Client::new(),
        }
    }

    /// Wraps an existing `reqwest::Client`, keeping its pool and defaults.
    pub fn with_client(client: reqwest::Client) -> Self {
        Client { client }
    }
}

impl Default for Client {
    fn default() -> Self {
        Client::new()
    }
}

#[async_trait]
impl HttpClient for Client {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let url = if request.query.is_empty() {
            request.url
        } else {
            format!("{}?{}", request.url, request.query)
        };

        debug!("Sending {} request to {}", request.method, url);

        let mut builder = self
            .client
            .request(request.method, url.as_str())
            .headers(request.headers);

        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    fn get_request(url: String, query: &str) -> HttpRequest {
        HttpRequest {
            method: Method::GET,
            url,
            query: query.to_string(),
            headers: HeaderMap::new(),
            timeout: None,
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn appends_query_string_to_url() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::UrlEncoded(
                "input".into(),
                "test".into(),
            ))
            .with_body("{}")
            .create_async()
            .await;

        let client = Client::new();
        let response = client
            .execute(get_request(format!("{}/search", server.url()), "input=test"))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body, b"{}");
        assert!(logs_contain("Sending GET request"));
    }

    #[tokio::test]
    async fn empty_query_leaves_url_untouched() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/plain")
            .with_body("ok")
            .create_async()
            .await;

        let client = Client::new();
        let response = client
            .execute(get_request(format!("{}/plain", server.url()), ""))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(response.body, b"ok");
    }

    #[tokio::test]
    async fn forwards_headers() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/hdr")
            .match_header("x-request-source", "places-autocomplete")
            .with_body("ok")
            .create_async()
            .await;

        let mut headers = HeaderMap::new();
        headers.insert("x-request-source", "places-autocomplete".parse().unwrap());

        let client = Client::new();
        client
            .execute(HttpRequest {
                method: Method::GET,
                url: format!("{}/hdr", server.url()),
                query: String::new(),
                headers,
                timeout: None,
            })
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn non_success_status_is_not_an_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let client = Client::new();
        let response = client
            .execute(get_request(format!("{}/missing", server.url()), ""))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn transport_failure_surfaces_as_transport_error() {
        let client = Client::new();

        // An unparseable URL fails inside reqwest before any I/O happens.
        let err = client
            .execute(get_request("http://[invalid".to_string(), ""))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Transport(_)));
    }
}
