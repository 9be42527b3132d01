// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

extern crate chrono;
#[macro_use]
extern crate error_chain;
extern crate futures;
extern crate hyper;
extern crate hyper_tls;
#[macro_use]
extern crate lazy_static;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg_attr(test, macro_use)]
extern crate serde_json;
extern crate tokio;
#[macro_use]
extern crate tracing;
extern crate url;

#[cfg(test)]
extern crate httpmock;

mod gd;

// Publicly re-export:
pub use gd::api::GoodData;
pub use gd::config::{Config, Environment};
pub use gd::error::{Error, ErrorKind};
pub use gd::types::{Future, Result};
pub use gd::{api, error, model};
