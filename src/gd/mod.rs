// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

//! GoodData library top-level definitions go in this module.

#[macro_use]
mod macros;

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod types;
pub mod util;

// Re-export
pub use gd::types::{Future, Result};
