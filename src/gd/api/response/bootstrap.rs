// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

use std::collections::BTreeMap;

use serde_json::Value;

use gd::api::response::account::{AccountSetting, Links};
use gd::util::json::null_as_default;

/// A `GET /gdc/app/account/bootstrap` response: a consolidated snapshot of
/// the current session's account and settings.
///
/// Every part of the resource is optional; anything the server leaves out
/// decodes to its empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bootstrap {
    #[serde(deserialize_with = "null_as_default")]
    pub bootstrap_resource: BootstrapResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BootstrapResource {
    #[serde(deserialize_with = "null_as_default")]
    pub account_setting: AccountSetting,
    #[serde(deserialize_with = "null_as_default")]
    pub current: Current,
    #[serde(deserialize_with = "null_as_default")]
    pub settings: Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Current {
    #[serde(rename = "loginMD5")]
    pub login_md5: Option<String>,
    pub project: Option<Project>,
    #[serde(deserialize_with = "null_as_default")]
    pub feature_flags: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub links: Links,
}

#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub organization_name: Option<String>,
}

impl Bootstrap {
    pub fn account_setting(&self) -> &AccountSetting {
        &self.bootstrap_resource.account_setting
    }

    pub fn current(&self) -> &Current {
        &self.bootstrap_resource.current
    }

    pub fn settings(&self) -> &Settings {
        &self.bootstrap_resource.settings
    }

    /// The URI of the current user's profile (`accountSetting.links.self`).
    pub fn profile_uri(&self) -> Option<&String> {
        self.account_setting().profile_uri()
    }

    /// The URI of the project the session is working in, if any.
    pub fn project_uri(&self) -> Option<&String> {
        self.current()
            .project
            .as_ref()
            .and_then(|p| p.links.self_uri.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn empty_bootstrap_decodes_to_defaults() {
        let bootstrap: Bootstrap = serde_json::from_str("{}").unwrap();
        assert_eq!(bootstrap, Bootstrap::default());
        assert_eq!(bootstrap.profile_uri(), None);
        assert_eq!(bootstrap.project_uri(), None);
        assert!(bootstrap.current().feature_flags.is_empty());
    }

    #[test]
    fn null_sections_decode_to_defaults() {
        let bootstrap: Bootstrap = serde_json::from_value(json!({
            "bootstrapResource": {
                "accountSetting": { "login": "user@gooddata.com", "links": null },
                "current": { "project": { "links": null }, "featureFlags": null },
                "settings": null
            }
        }))
        .unwrap();
        assert_eq!(
            bootstrap.account_setting().login,
            Some(String::from("user@gooddata.com"))
        );
        assert_eq!(bootstrap.profile_uri(), None);
        assert_eq!(bootstrap.project_uri(), None);
        assert!(bootstrap.current().feature_flags.is_empty());
        assert_eq!(bootstrap.settings(), &Settings::default());

        let nulled: Bootstrap = serde_json::from_str(r#"{"bootstrapResource": null}"#).unwrap();
        assert_eq!(nulled, Bootstrap::default());
    }

    #[test]
    fn nested_links_are_reachable() {
        let bootstrap: Bootstrap = serde_json::from_value(json!({
            "bootstrapResource": {
                "accountSetting": { "links": { "self": "/gdc/account/profile/USER_ID" } },
                "current": {
                    "loginMD5": "LOGIN_MD5",
                    "project": { "links": { "self": "/gdc/projects/PROJECT_ID" } },
                    "featureFlags": { "enableCsvUploader": true }
                },
                "settings": { "organizationName": "ORG_NAME" }
            }
        }))
        .unwrap();
        assert_eq!(
            bootstrap.profile_uri().map(|s| s.as_str()),
            Some("/gdc/account/profile/USER_ID")
        );
        assert_eq!(
            bootstrap.project_uri().map(|s| s.as_str()),
            Some("/gdc/projects/PROJECT_ID")
        );
        assert_eq!(bootstrap.current().login_md5, Some(String::from("LOGIN_MD5")));
        assert_eq!(
            bootstrap.current().feature_flags.get("enableCsvUploader"),
            Some(&Value::Bool(true))
        );
        assert_eq!(
            bootstrap.settings().organization_name,
            Some(String::from("ORG_NAME"))
        );
    }
}
