// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

/// A login request: `{"postUserLogin": {...}}`.
#[derive(Clone, Hash, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Login {
    post_user_login: Credentials,
}

#[derive(Clone, Hash, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Credentials {
    login: String,
    password: String,
    remember: u8,
    captcha: String,
    verify_captcha: String,
}

impl Login {
    pub fn new(login: String, password: String) -> Self {
        Self {
            post_user_login: Credentials {
                login,
                password,
                remember: 1,
                captcha: String::new(),
                verify_captcha: String::new(),
            },
        }
    }
}
