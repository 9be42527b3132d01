// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

//! Library configuration options and environment definitions.

use std::env;

use url::Url;

use gd;
use gd::error::ErrorKind;

/// Environment variable naming the API location for `Environment::Local`.
pub const API_LOC_VAR: &str = "GOODDATA_API_LOC";

lazy_static! {
    static ref PRODUCTION_URL: Url = "https://secure.gooddata.com"
        .parse::<Url>()
        .unwrap(); // This should never fail
}

/// Defines the server environment the library is interacting with.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Environment {
    /// Location read from the `GOODDATA_API_LOC` environment variable.
    Local,
    Production,
    /// An explicit API location.
    Custom(Url),
}

impl Environment {
    pub fn url(&self) -> gd::Result<Url> {
        use self::Environment::*;
        match *self {
            Local => {
                let api_loc = env::var(API_LOC_VAR).map_err(|_| {
                    ErrorKind::ConfigError(format!("{} must be defined", API_LOC_VAR))
                })?;
                api_loc.parse::<Url>().map_err(|_| {
                    ErrorKind::ConfigError(format!("Not a valid url: {}", api_loc)).into()
                })
            }
            Production => Ok(PRODUCTION_URL.clone()),
            Custom(ref url) => Ok(url.clone()),
        }
    }
}

/// Configuration options for the GoodData client.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    env: Environment,
    headers: Vec<(String, String)>,
}

impl Config {
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            headers: vec![(
                String::from("Accept"),
                String::from("application/json; charset=utf-8"),
            )],
        }
    }

    /// Adds a header sent with every request, replacing an earlier default
    /// of the same name.
    pub fn with_header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        let name = name.into();
        self.headers
            .retain(|&(ref n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn api_url(&self) -> gd::Result<Url> {
        self.env.url()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Environment::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_points_at_the_public_api() {
        let url = Config::default().api_url().unwrap();
        assert_eq!(url.as_str(), "https://secure.gooddata.com/");
    }

    #[test]
    fn custom_environments_use_the_given_url() {
        let url = "http://127.0.0.1:8443".parse::<Url>().unwrap();
        let config = Config::new(Environment::Custom(url.clone()));
        assert_eq!(config.api_url().unwrap(), url);
    }

    #[test]
    fn local_environment_requires_a_valid_location() {
        env::remove_var(API_LOC_VAR);
        let err = Environment::Local.url().unwrap_err();
        match *err.kind() {
            ErrorKind::ConfigError(_) => (),
            ref other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn headers_are_replaced_case_insensitively() {
        let config = Config::default()
            .with_header("accept", "text/plain")
            .with_header("X-GDC-Request", "abc");
        assert_eq!(
            config.headers(),
            &[
                (String::from("accept"), String::from("text/plain")),
                (String::from("X-GDC-Request"), String::from("abc")),
            ][..]
        );
    }
}
