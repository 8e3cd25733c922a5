use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Method;

/// A function turning a parameter struct into the outbound query string.
pub type ParamsSerializer<P> = fn(&P) -> String;

/// Transport configuration attached to a request descriptor. Every field is
/// optional; a `None` means the documented default applies when the request
/// is executed:
///
/// - `url`: the endpoint's fixed address (override for tests or proxying)
/// - `method`: `GET`
/// - `params_serializer`: the endpoint's default serializer
///
/// `headers` and `timeout` have no defaults and are handed to the HTTP
/// client verbatim, unexamined.
pub struct RequestConfig<P> {
    pub url: Option<String>,
    pub method: Option<Method>,
    pub params_serializer: Option<ParamsSerializer<P>>,
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
}

impl<P> Default for RequestConfig<P> {
    fn default() -> Self {
        RequestConfig {
            url: None,
            method: None,
            params_serializer: None,
            headers: HeaderMap::new(),
            timeout: None,
        }
    }
}

impl<P> Clone for RequestConfig<P> {
    fn clone(&self) -> Self {
        RequestConfig {
            url: self.url.clone(),
            method: self.method.clone(),
            params_serializer: self.params_serializer,
            headers: self.headers.clone(),
            timeout: self.timeout,
        }
    }
}

impl<P> std::fmt::Debug for RequestConfig<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("RequestConfig")
            .field("url", &self.url)
            .field("method", &self.method)
            .field(
                "params_serializer",
                &self.params_serializer.map(|_| "<fn>"),
            )
            .field("headers", &self.headers)
            .field("timeout", &self.timeout)
            .finish()
    }
}
