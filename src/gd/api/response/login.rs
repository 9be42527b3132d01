// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

/// The result of a successful login, kept exactly as the server sent it.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Login {
    pub user_login: UserLogin,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLogin {
    /// URI of the logged in user's profile.
    pub profile: String,
    /// URI of the login state resource.
    pub state: String,
}

impl Login {
    pub fn profile(&self) -> &String {
        &self.user_login.profile
    }

    pub fn state(&self) -> &String {
        &self.user_login.state
    }
}
