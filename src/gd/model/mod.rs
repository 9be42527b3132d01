// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

/// Top-level model definitions and re-exports go here.

pub mod account;
pub mod session;
pub mod user;

// Re-export
pub use self::account::AccountInfo;
pub use self::session::{SessionCookies, SessionStatus};
pub use self::user::UserId;
