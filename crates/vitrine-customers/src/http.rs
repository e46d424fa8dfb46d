//! Minimal outbound HTTP plumbing for the pass-through client.
//!
//! On `wasm32` requests go out through Spin's HTTP host function; on native
//! targets `send` is an inert stub so the crate builds for tests and tooling.

use crate::error::CustomerServiceError;

/// HTTP methods the pass-through operations use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// An assembled outbound request.
#[derive(Debug, Clone)]
pub(crate) struct Request {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<Vec<u8>>,
}

impl Request {
    pub(crate) fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub(crate) fn json(mut self, body: Vec<u8>) -> Self {
        self.headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        self.body = Some(body);
        self
    }
}

/// A response from the customer-record service.
#[derive(Debug, Clone)]
pub(crate) struct Response {
    pub(crate) status: u16,
    pub(crate) body: Vec<u8>,
}

impl Response {
    pub(crate) fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub(crate) fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, CustomerServiceError> {
        serde_json::from_slice(&self.body).map_err(|e| CustomerServiceError::Parse(e.to_string()))
    }

    pub(crate) fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Send the request through Spin's outbound HTTP.
#[cfg(target_arch = "wasm32")]
pub(crate) fn send(request: Request) -> Result<Response, CustomerServiceError> {
    use spin_sdk::http::{Method as SpinMethod, Request as SpinRequest};

    let method = match request.method {
        Method::Get => SpinMethod::Get,
        Method::Post => SpinMethod::Post,
        Method::Delete => SpinMethod::Delete,
    };

    let mut builder = SpinRequest::builder();
    builder.method(method);
    builder.uri(&request.url);
    for (key, value) in &request.headers {
        builder.header(key.as_str(), value.as_str());
    }

    let spin_request = match request.body {
        Some(body) => builder
            .body(body)
            .map_err(|e| CustomerServiceError::Request(e.to_string()))?,
        None => builder.build(),
    };

    let response = spin_sdk::http::send(spin_request)
        .map_err(|e| CustomerServiceError::Request(e.to_string()))?;

    let status = response.status();
    let body = response.into_body();
    Ok(Response { status, body })
}

/// Non-WASM stub: succeeds with an empty body so native builds and tests run.
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn send(_request: Request) -> Result<Response, CustomerServiceError> {
    Ok(Response {
        status: 200,
        body: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_sets_content_type() {
        let request = Request::new(Method::Post, "https://svc/x").json(b"{}".to_vec());
        assert!(request
            .headers
            .iter()
            .any(|(k, v)| k == "Content-Type" && v == "application/json"));
        assert_eq!(request.body.as_deref(), Some(b"{}".as_slice()));
    }

    #[test]
    fn test_response_success_range() {
        let ok = Response {
            status: 204,
            body: Vec::new(),
        };
        assert!(ok.is_success());
        let not_found = Response {
            status: 404,
            body: b"missing".to_vec(),
        };
        assert!(!not_found.is_success());
        assert_eq!(not_found.text(), "missing");
    }

    #[test]
    fn test_method_strings() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
