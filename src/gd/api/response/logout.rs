// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

use gd::api::transport::Response;

/// The outcome of `GoodData::logout`.
#[derive(Debug, Clone)]
pub enum Logout {
    /// The session was already gone; no request beyond the token check
    /// was made.
    NotLoggedIn,
    /// The session was deleted; holds the `DELETE` response.
    LoggedOut(Response),
}

impl Logout {
    /// Tests if the user is logged out after the call. Both outcomes
    /// count.
    pub fn ok(&self) -> bool {
        match *self {
            Logout::NotLoggedIn => true,
            Logout::LoggedOut(ref response) => response.ok(),
        }
    }

    pub fn response(&self) -> Option<&Response> {
        match *self {
            Logout::NotLoggedIn => None,
            Logout::LoggedOut(ref response) => Some(response),
        }
    }
}
