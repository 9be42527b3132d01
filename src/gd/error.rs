// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

//! GoodData-specific API errors and such.

use hyper::StatusCode;

error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
        UrlParse(::url::ParseError);
    }

    errors {
        // The server answered with a status outside of [200, 299]:
        HttpError(status: StatusCode, message: String) {
            description("http error")
            display("HTTP error :: {} :: {}", status, message)
        }

        // No response was received at all:
        NetworkError(request: String) {
            description("network error")
            display("Network error :: {}", request)
        }

        AuthRequired {
            description("authentication required")
            display("Authentication required :: no active session")
        }

        MissingProfileUri {
            description("missing profile uri")
            display("The bootstrap resource carries no profile URI")
        }

        InvalidProfileUri(uri: String) {
            description("invalid profile uri")
            display("Invalid profile URI :: {:?}", uri)
        }

        ConfigError(message: String) {
            description("configuration error")
            display("Configuration error :: {}", message)
        }
    }
}

impl Error {
    /// The HTTP status code of the response that caused this error, if the
    /// error came from a non-2xx response.
    pub fn status(&self) -> Option<StatusCode> {
        match *self.kind() {
            ErrorKind::HttpError(status, _) => Some(status),
            _ => None,
        }
    }

    /// Tests if the request failed before any response was received.
    pub fn is_network_error(&self) -> bool {
        match *self.kind() {
            ErrorKind::NetworkError(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn http_errors_expose_their_status() {
        let err: Error = ErrorKind::HttpError(StatusCode::BAD_REQUEST, "bad".into()).into();
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
        assert!(!err.is_network_error());
        assert_eq!(err.to_string(), "HTTP error :: 400 Bad Request :: bad");
    }

    #[test]
    fn network_errors_carry_their_cause() {
        let cause = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::with_chain(cause, ErrorKind::NetworkError("GET /".into()));
        assert!(err.is_network_error());
        assert_eq!(err.status(), None);
        assert!(err.iter().nth(1).is_some());
    }
}
