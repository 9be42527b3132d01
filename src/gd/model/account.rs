// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

use gd::api::response::Bootstrap;

/// A flat view of the current account, taken from the bootstrap resource.
///
/// Every field is passed through from the server as is; anything the server
/// leaves out is `None`.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub login: Option<String>,
    #[serde(rename = "loginMD5")]
    pub login_md5: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization_name: Option<String>,
    pub profile_uri: Option<String>,
}

impl<'a> From<&'a Bootstrap> for AccountInfo {
    fn from(bootstrap: &'a Bootstrap) -> Self {
        let account = bootstrap.account_setting();
        Self {
            login: account.login.clone(),
            login_md5: bootstrap.current().login_md5.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            organization_name: bootstrap.settings().organization_name.clone(),
            profile_uri: account.profile_uri().cloned(),
        }
    }
}

impl From<Bootstrap> for AccountInfo {
    fn from(bootstrap: Bootstrap) -> Self {
        AccountInfo::from(&bootstrap)
    }
}
