// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

/// This module contains types that serve as representations
/// of server responses from the GoodData API.

pub mod account;
pub mod bootstrap;
pub mod login;
pub mod logout;

// Re-export
pub use self::account::{AccountSetting, Links, Profile};
pub use self::bootstrap::{Bootstrap, BootstrapResource, Current, Settings};
pub use self::login::{Login, UserLogin};
pub use self::logout::Logout;
