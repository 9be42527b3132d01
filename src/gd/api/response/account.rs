// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

use gd::util::json::null_as_default;

/// Resource links attached to an account or project.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self")]
    pub self_uri: Option<String>,
}

/// The account settings of a user, as embedded in the bootstrap resource or
/// returned by the profile resource.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountSetting {
    pub login: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub position: Option<String>,
    pub country: Option<String>,
    pub phone_number: Option<String>,
    pub timezone: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub links: Links,
}

impl AccountSetting {
    /// The profile URI of the account.
    pub fn profile_uri(&self) -> Option<&String> {
        self.links.self_uri.as_ref()
    }
}

/// A `GET /gdc/account/profile/{id}` response.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub account_setting: AccountSetting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn partial_account_settings_decode() {
        let profile: Profile = serde_json::from_value(json!({
            "accountSetting": {
                "firstName": "Jane",
                "links": { "self": "/gdc/account/profile/jane" },
                "ssoProvider": null
            }
        }))
        .unwrap();
        let setting = profile.account_setting;
        assert_eq!(setting.first_name, Some(String::from("Jane")));
        assert_eq!(setting.last_name, None);
        assert_eq!(
            setting.profile_uri().map(|s| s.as_str()),
            Some("/gdc/account/profile/jane")
        );
    }

    #[test]
    fn null_links_decode_to_no_profile_uri() {
        let profile: Profile = serde_json::from_value(json!({
            "accountSetting": { "firstName": "Jane", "links": null }
        }))
        .unwrap();
        assert_eq!(profile.account_setting.first_name, Some(String::from("Jane")));
        assert_eq!(profile.account_setting.profile_uri(), None);
    }
}
