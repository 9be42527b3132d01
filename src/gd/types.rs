// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

//! Library-wide type definitions.

use futures;

use gd::error;

/// A Result type parameterized by `gd::error::Error`
pub type Result<T> = error::Result<T>;

/// A Future type parameterized by `gd::error::Error`
pub type Future<T> = Box<futures::Future<Item = T, Error = error::Error> + Send>;
