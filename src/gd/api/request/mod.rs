// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

/// This module contains types that serve as representations
/// of client requests to the GoodData API.

pub mod login;

// Re-export
pub use self::login::Login;
