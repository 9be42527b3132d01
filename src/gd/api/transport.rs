// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

//! Normalization of raw HTTP exchanges into uniform results.
//!
//! Whatever the route, a completed exchange ends up either as a `Response`
//! (status in `[200, 299]`) or as an `ErrorKind::HttpError` carrying the
//! status and the text the server sent back.

use hyper::header::{HeaderMap, CONTENT_TYPE};
use hyper::{Method, StatusCode};

use serde;
use serde_json::{self, Value};

use gd;
use gd::error::ErrorKind;

/// Options for a single request issued through `GoodData::ajax`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    method: Method,
    body: Option<String>,
    headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: vec![],
        }
    }

    pub fn body<S: Into<String>>(mut self, body: S) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serializes `payload` as the JSON request body.
    pub fn json<P: serde::Serialize>(self, payload: &P) -> gd::Result<Self> {
        let body = serde_json::to_string(payload)?;
        Ok(self.body(body))
    }

    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    pub fn take_body(&mut self) -> Option<String> {
        self.body.take()
    }
}

/// A response body, decoded according to its `Content-Type`.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Nothing was sent back (e.g. `204 No Content`).
    Empty,
    Json(Value),
    Text(String),
}

/// A successful (`2xx`) response.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Body,
}

impl Response {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Always `true`: responses outside of `[200, 299]` never become a
    /// `Response`.
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn into_body(self) -> Body {
        self.body
    }

    /// The body as text. JSON bodies are re-serialized.
    pub fn text(&self) -> String {
        match self.body {
            Body::Empty => String::new(),
            Body::Json(ref value) => value.to_string(),
            Body::Text(ref text) => text.clone(),
        }
    }

    /// Decodes the body into a typeful representation.
    ///
    /// Text bodies are parsed as JSON as well, since some resources omit
    /// the `Content-Type` header. An empty body decodes as JSON `null`.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> gd::Result<T> {
        let decoded = match self.body {
            Body::Empty => serde_json::from_value(Value::Null),
            Body::Json(ref value) => serde_json::from_value(value.clone()),
            Body::Text(ref text) => serde_json::from_str(text),
        };
        decoded.map_err(Into::into)
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.to_ascii_lowercase().contains("json"))
        .unwrap_or(false)
}

/// Turns a completed exchange into either a `Response` or an `HttpError`.
pub fn classify(status: StatusCode, headers: HeaderMap, body: &[u8]) -> gd::Result<Response> {
    if !status.is_success() {
        let text = String::from_utf8_lossy(body).trim().to_string();
        let message = if text.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        } else {
            text
        };
        return Err(ErrorKind::HttpError(status, message).into());
    }

    let body = if body.is_empty() {
        Body::Empty
    } else {
        // A body that does not parse stays text, whatever its declared type.
        let json = if is_json(&headers) {
            serde_json::from_slice(body).ok()
        } else {
            None
        };
        match json {
            Some(value) => Body::Json(value),
            None => Body::Text(String::from_utf8_lossy(body).to_string()),
        }
    };

    Ok(Response {
        status,
        headers,
        body,
    })
}
