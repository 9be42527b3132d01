// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

use gd;
use gd::error::ErrorKind;
use gd::util::uri::last_segment;

/// An identifier for a user on the GoodData platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        UserId(id.into())
    }

    /// Extracts the user identifier from a profile URI, which is its final
    /// path segment: `/gdc/account/profile/USER_ID` yields `USER_ID`.
    ///
    /// A single trailing `/` is tolerated.
    pub fn from_profile_uri(uri: &str) -> gd::Result<Self> {
        last_segment(uri)
            .map(UserId::new)
            .ok_or_else(|| ErrorKind::InvalidProfileUri(uri.to_string()).into())
    }

    /// Unwraps the value.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        UserId::new(id)
    }
}

impl<'a> From<&'a str> for UserId {
    fn from(id: &'a str) -> Self {
        UserId::new(id)
    }
}
