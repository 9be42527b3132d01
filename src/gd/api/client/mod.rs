// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

//! Functions to interact with the GoodData platform.

use std::sync::{Arc, Mutex, MutexGuard};

use futures::*;

use hyper;
use hyper::client::{Client, HttpConnector};
use hyper::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, COOKIE, SET_COOKIE};
use hyper_tls::HttpsConnector;

use serde;
use serde_json;

use url::Url;

use gd;
use gd::api::transport::{self, RequestOptions, Response};
use gd::config::Config;
use gd::error::{Error, ErrorKind};
use gd::model::SessionCookies;
use gd::util::futures::{from_result, into_future_trait};

struct GoodDataImpl {
    config: Config,
    http_client: Client<HttpsConnector<HttpConnector>>,
    cookies: SessionCookies,
}

/// The GoodData client.
///
/// Cloning is cheap: clones share the configuration, the HTTP client and the
/// session cookies.
pub struct GoodData {
    // See https://users.rust-lang.org/t/best-pattern-for-async-update-of-self-object/15205
    // for notes on this pattern:
    inner: Arc<Mutex<GoodDataImpl>>,
}

impl Clone for GoodData {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

// =============================================================================

// A useful alias when dealing with the fact that an endpoint does not expect
// a POST/PUT body, but a type is still expected:
type Nothing = serde_json::Value;

// =============================================================================

// Useful builder macros:
macro_rules! route {
    ($uri:expr, $($var:ident),*) => (
        format!($uri, $($var = Into::<String>::into($var)),*)
    )
}

// Empty payload
macro_rules! payload {
    () => {
        None as Option<&Nothing>
    };
    ($target:expr) => {
        Some($target)
    };
}

macro_rules! get {
    ($target:expr, $route:expr) => {
        $target.request($route, hyper::Method::GET, payload!())
    };
}

macro_rules! post {
    ($target:expr, $route:expr) => {
        $target.request($route, hyper::Method::POST, payload!())
    };
    ($target:expr, $route:expr, $payload:expr) => {
        $target.request($route, hyper::Method::POST, payload!($payload))
    };
}

// =============================================================================

mod user;

fn header_name(name: &str) -> gd::Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| Error::with_chain(e, format!("gd:request:header<{}>", name)))
}

fn header_value(name: &str, value: &str) -> gd::Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| Error::with_chain(e, format!("gd:request:header<{}>:value", name)))
}

impl GoodData {
    /// Create a new GoodData API client.
    pub fn new(config: Config) -> gd::Result<Self> {
        let connector = HttpsConnector::new(4)
            .map_err(|e| Error::with_chain(e, "gd:couldn't create https connector"))?;
        let http_client = Client::builder().build(connector);
        Ok(Self {
            inner: Arc::new(Mutex::new(GoodDataImpl {
                config,
                http_client,
                cookies: SessionCookies::new(),
            })),
        })
    }

    fn inner(&self) -> MutexGuard<GoodDataImpl> {
        // The guarded state stays consistent even if a holder panicked:
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// The configuration the client was created with.
    pub fn config(&self) -> Config {
        self.inner().config.clone()
    }

    /// Tests if the client holds any session cookie. This says nothing about
    /// the session being valid on the server; see `is_logged_in`.
    pub fn has_session_cookies(&self) -> bool {
        !self.inner().cookies.is_empty()
    }

    fn store_cookies(&self, headers: &HeaderMap) {
        let mut inner = self.inner();
        for value in headers.get_all(SET_COOKIE).iter() {
            if let Ok(set_cookie) = value.to_str() {
                inner.cookies.store(set_cookie);
            }
        }
    }

    fn clear_session(&self) {
        self.inner().cookies.clear()
    }

    // Builds the outgoing request: the route is resolved against the
    // configured API location, then the configured headers, the per-call
    // headers and the session cookies are applied in that order.
    fn prepare(
        &self,
        route: &str,
        options: &mut RequestOptions,
    ) -> gd::Result<(Client<HttpsConnector<HttpConnector>>, hyper::Request<hyper::Body>, Url)> {
        let (api_url, default_headers, cookie, client) = {
            let inner = self.inner();
            (
                inner.config.api_url(),
                inner.config.headers().to_vec(),
                inner.cookies.header_value(),
                inner.http_client.clone(),
            )
        };

        let url = api_url?.join(route)?;
        let uri = url
            .as_str()
            .parse::<hyper::Uri>()
            .map_err(|e| Error::with_chain(e, format!("gd:request<{}>:url", url)))?;

        let has_body = options.has_body();
        let body = options
            .take_body()
            .map(hyper::Body::from)
            .unwrap_or_else(hyper::Body::empty);

        let mut req = hyper::Request::new(body);
        *req.method_mut() = options.method().clone();
        *req.uri_mut() = uri;

        {
            let headers = req.headers_mut();
            for &(ref name, ref value) in default_headers.iter().chain(options.headers().iter()) {
                headers.insert(header_name(name)?, header_value(name, value)?);
            }
            if has_body && !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            if let Some(cookie) = cookie {
                headers.insert(COOKIE, header_value("Cookie", &cookie)?);
            }
        }

        Ok((client, req, url))
    }

    /// Issue a single HTTP request against the GoodData API.
    ///
    /// `route` is either a path, resolved against the configured API
    /// location, or an absolute URL. The future resolves with the response
    /// for any `2xx` status, and fails with `ErrorKind::HttpError` for any
    /// other status or with `ErrorKind::NetworkError` when no response was
    /// received. Exactly one request is made; nothing is retried.
    pub fn ajax<S: Into<String>>(&self, route: S, mut options: RequestOptions) -> gd::Future<Response> {
        let route = route.into();
        let (client, req, url) = match self.prepare(&route, &mut options) {
            Ok(prepared) => prepared,
            Err(err) => return from_result(Err(err)),
        };

        let method_string = options.method().to_string();
        let url_string = url.to_string();
        let request_string = format!("{} {}", method_string, url_string);
        let request_string_clone = request_string.clone();

        gd_debug!(
            "gd:request<{method}:{url}>:execute",
            method = method_string,
            url = url_string
        );

        let this = self.clone();

        let f = client
            .request(req)
            .map_err(move |e| Error::with_chain(e, ErrorKind::NetworkError(request_string)))
            .and_then(move |resp| {
                let (parts, body) = resp.into_parts();
                // Cookies are kept even when the status is an error:
                this.store_cookies(&parts.headers);
                body.concat2()
                    .map_err(move |e| {
                        Error::with_chain(e, ErrorKind::NetworkError(request_string_clone))
                    })
                    .and_then(move |body: hyper::Chunk| {
                        gd_debug!(
                            "gd:request<{method}:{url}>:response:status = {status}",
                            method = method_string,
                            url = url_string,
                            status = parts.status
                        );
                        transport::classify(parts.status, parts.headers, &body)
                    })
            });

        into_future_trait(f)
    }

    // Typed variant of `ajax`: serializes the payload, if any, and decodes
    // the response body.
    fn request<P, Q, S>(&self, route: S, method: hyper::Method, payload: Option<&P>) -> gd::Future<Q>
    where
        P: serde::Serialize,
        Q: 'static + Send + serde::de::DeserializeOwned,
        S: Into<String>,
    {
        let options = match payload {
            Some(p) => RequestOptions::new(method).json(p),
            None => Ok(RequestOptions::new(method)),
        };

        match options {
            Ok(options) => into_future_trait(
                self.ajax(route, options)
                    .and_then(|response| response.json::<Q>()),
            ),
            Err(err) => from_result(Err(err)),
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::net::TcpListener;

    use httpmock::Method::{GET, POST};
    use httpmock::MockServer;

    use tokio;

    use gd::api::transport::Body;
    use gd::config::Environment;

    /// Creates a client talking to the given mock server.
    pub fn client(server: &MockServer) -> GoodData {
        let url = server.base_url().parse::<Url>().unwrap();
        GoodData::new(Config::new(Environment::Custom(url))).unwrap()
    }

    /// given a 'runner' function, run the given GoodData instance
    /// through that function and block until completion
    pub fn run<F, T>(gd: &GoodData, runner: F) -> gd::Result<T>
    where
        F: FnOnce(GoodData) -> gd::Future<T>,
        T: 'static + Send,
    {
        let mut rt = tokio::runtime::Runtime::new()?;
        rt.block_on(runner(gd.clone()))
    }

    #[test]
    fn plain_text_responses_are_passed_through() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/some/url");
            then.status(200)
                .header("Content-Type", "text/plain")
                .body("hello");
        });

        let response = run(&client(&server), |gd| {
            gd.ajax("/some/url", RequestOptions::default())
        })
        .unwrap();

        mock.assert();
        assert!(response.ok());
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(response.body(), &Body::Text(String::from("hello")));
    }

    #[test]
    fn json_responses_are_parsed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gdc");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"about": {"links": []}}"#);
        });

        let response = run(&client(&server), |gd| {
            gd.ajax("/gdc", RequestOptions::default())
        })
        .unwrap();

        assert_eq!(response.body(), &Body::Json(json!({ "about": { "links": [] } })));
    }

    #[test]
    fn error_statuses_are_rejected_with_their_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gdc/broken");
            then.status(500).body("internal failure");
        });

        let err = run(&client(&server), |gd| {
            gd.ajax("/gdc/broken", RequestOptions::default())
        })
        .unwrap_err();

        assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
        match *err.kind() {
            ErrorKind::HttpError(_, ref message) => assert_eq!(message, "internal failure"),
            ref other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn unreachable_servers_yield_network_errors() {
        // Grab a free port, then release it so nothing listens there:
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{}", port).parse::<Url>().unwrap();
        let gd = GoodData::new(Config::new(Environment::Custom(url))).unwrap();

        let err = run(&gd, |gd| gd.ajax("/gdc/account/token", RequestOptions::default()))
            .unwrap_err();

        assert!(err.is_network_error());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn configured_and_per_call_headers_are_sent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/gdc/headers")
                .header("Accept", "application/json; charset=utf-8")
                .header("X-GDC-Client", "gooddata-rust")
                .header("X-GDC-Request", "req-1");
            then.status(204);
        });

        let url = server.base_url().parse::<Url>().unwrap();
        let config = Config::new(Environment::Custom(url)).with_header("X-GDC-Client", "gooddata-rust");
        let gd = GoodData::new(config).unwrap();

        let response = run(&gd, |gd| {
            gd.ajax(
                "/gdc/headers",
                RequestOptions::default().header("X-GDC-Request", "req-1"),
            )
        })
        .unwrap();

        mock.assert();
        assert_eq!(response.status().as_u16(), 204);
        assert_eq!(response.body(), &Body::Empty);
    }

    #[test]
    fn absolute_urls_bypass_the_configured_location() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/elsewhere");
            then.status(200).body("there");
        });

        let gd = GoodData::new(Config::default()).unwrap();
        let target = server.url("/elsewhere");
        let response = run(&gd, move |gd| gd.ajax(target, RequestOptions::default())).unwrap();

        mock.assert();
        assert_eq!(response.text(), "there");
    }

    #[test]
    fn json_payloads_are_sent_with_a_content_type() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/gdc/echo")
                .header("Content-Type", "application/json")
                .json_body(json!({ "a": 1 }));
            then.status(201)
                .header("Content-Type", "application/json")
                .body(r#"{"created": true}"#);
        });

        let value: serde_json::Value = run(&client(&server), |gd| {
            post!(gd, "/gdc/echo", &json!({ "a": 1 }))
        })
        .unwrap();

        mock.assert();
        assert_eq!(value, json!({ "created": true }));
    }

    #[test]
    fn session_cookies_are_replayed() {
        let server = MockServer::start();
        let issue = server.mock(|when, then| {
            when.method(GET).path("/gdc/cookie");
            then.status(200).header("Set-Cookie", "GDCAuthTT=tt-value; path=/gdc; HttpOnly");
        });
        let check = server.mock(|when, then| {
            when.method(GET)
                .path("/gdc/needs-cookie")
                .header("Cookie", "GDCAuthTT=tt-value");
            then.status(200);
        });

        let gd = client(&server);
        run(&gd, |gd| {
            let next = gd.clone();
            into_future_trait(
                gd.ajax("/gdc/cookie", RequestOptions::default())
                    .and_then(move |_| next.ajax("/gdc/needs-cookie", RequestOptions::default())),
            )
        })
        .unwrap();

        issue.assert();
        check.assert();
        assert!(gd.has_session_cookies());
    }

    #[test]
    fn undecodable_typed_responses_fail() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/gdc/text");
            then.status(200).header("Content-Type", "text/plain").body("not json");
        });

        let result: gd::Result<serde_json::Value> =
            run(&client(&server), |gd| get!(gd, "/gdc/text"));

        match *result.unwrap_err().kind() {
            ErrorKind::Json(_) => (),
            ref other => panic!("unexpected error: {:?}", other),
        }
    }
}
