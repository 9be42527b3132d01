// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// The authentication state of the current session, as reported by the
/// token check resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    LoggedIn,
    LoggedOut,
}

impl SessionStatus {
    pub fn is_logged_in(&self) -> bool {
        *self == SessionStatus::LoggedIn
    }
}

/// The session cookies handed out by the server.
///
/// GoodData keeps the session on the server side and identifies it through
/// cookies. The client never looks inside them; it only records what each
/// `Set-Cookie` header says and sends the current set back with every
/// request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    cookies: BTreeMap<String, String>,
}

impl SessionCookies {
    pub fn new() -> Self {
        Default::default()
    }

    /// Applies a single `Set-Cookie` header value.
    ///
    /// A cookie set to an empty value, or already expired through `Max-Age`
    /// or `Expires`, is removed.
    pub fn store(&mut self, set_cookie: &str) {
        let mut parts = set_cookie.split(';');
        let pair = match parts.next() {
            Some(pair) => pair,
            None => return,
        };
        let (name, value) = match pair.find('=') {
            Some(idx) => (pair[..idx].trim(), pair[idx + 1..].trim()),
            None => return,
        };
        if name.is_empty() {
            return;
        }
        if value.is_empty() || is_expired(parts, Utc::now()) {
            self.cookies.remove(name);
        } else {
            self.cookies.insert(name.to_string(), value.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(|v| v.as_str())
    }

    /// The value of the `Cookie` request header, if any cookie is held.
    pub fn header_value(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .cookies
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        Some(pairs.join("; "))
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn clear(&mut self) {
        self.cookies.clear()
    }
}

// `Max-Age` wins over `Expires` when both are present. Attributes that do
// not parse are ignored.
fn is_expired<'a, I: Iterator<Item = &'a str>>(attrs: I, now: DateTime<Utc>) -> bool {
    let mut max_age = None;
    let mut expires = None;
    for attr in attrs {
        let (key, value) = match attr.find('=') {
            Some(idx) => (attr[..idx].trim(), attr[idx + 1..].trim()),
            None => continue,
        };
        if key.eq_ignore_ascii_case("max-age") {
            if let Ok(secs) = value.parse::<i64>() {
                max_age = Some(secs);
            }
        } else if key.eq_ignore_ascii_case("expires") {
            expires = parse_cookie_date(value).or(expires);
        }
    }
    match (max_age, expires) {
        (Some(secs), _) => secs <= 0,
        (None, Some(date)) => date <= now,
        (None, None) => false,
    }
}

// Servers send both `Thu, 01 Jan 1970 00:00:00 GMT` and the older
// `Thu, 01-Jan-1970 00:00:00 GMT`.
fn parse_cookie_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(&value.replace('-', " "))
        .ok()
        .map(|date| date.with_timezone(&Utc))
}
