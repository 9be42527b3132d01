// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

//! The GoodData platform API.

mod client;
pub mod request;
pub mod response;
pub mod transport;

// Re-export:
pub use self::client::GoodData;
pub use self::transport::{Body, RequestOptions, Response};
