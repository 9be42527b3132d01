// Copyright (c) 2018 GoodData Corporation. All Rights Reserved.

//! Authentication and account profile operations.

use std::collections::BTreeMap;

use futures::*;

use hyper;
use hyper::{Method, StatusCode};

use serde;
use serde_json::Value;

use gd;
use gd::api::client::{GoodData, Nothing};
use gd::api::transport::{RequestOptions, Response};
use gd::api::{request, response};
use gd::error::{Error, ErrorKind};
use gd::model::{AccountInfo, SessionStatus, UserId};
use gd::util::futures::{from_result, into_future_trait};
use gd::util::uri::last_segment;

const LOGIN_ROUTE: &str = "/gdc/account/login";
const TOKEN_ROUTE: &str = "/gdc/account/token";
const BOOTSTRAP_ROUTE: &str = "/gdc/app/account/bootstrap";

impl GoodData {
    /// Log in to the GoodData API.
    ///
    /// Resolves with the `userLogin` resource exactly as the server sent it.
    /// The session itself lives in the cookies the server sets, which the
    /// client sends back on subsequent calls.
    pub fn login<S: Into<String>>(&self, login: S, password: S) -> gd::Future<response::Login> {
        let payload = request::Login::new(login.into(), password.into());
        post!(self, LOGIN_ROUTE, &payload)
    }

    /// Check whether the current session is authenticated.
    ///
    /// A `401` from the token resource means `LoggedOut`. Any other non-2xx
    /// status is treated the same way; only network failures are errors.
    pub fn is_logged_in(&self) -> gd::Future<SessionStatus> {
        into_future_trait(
            self.ajax(TOKEN_ROUTE, RequestOptions::default())
                .then(|result| match result {
                    Ok(_) => Ok(SessionStatus::LoggedIn),
                    Err(err) => match err.status() {
                        Some(status) if status == StatusCode::UNAUTHORIZED => {
                            Ok(SessionStatus::LoggedOut)
                        }
                        Some(status) => {
                            gd_debug!(
                                "gd:is_logged_in:unexpected status {status}, assuming logged out",
                                status = status
                            );
                            Ok(SessionStatus::LoggedOut)
                        }
                        None => Err(err),
                    },
                }),
        )
    }

    /// Log out of the GoodData API.
    ///
    /// When the session is already gone this resolves with
    /// `Logout::NotLoggedIn` after the token check alone. Otherwise the
    /// current user is looked up in the bootstrap resource and its login is
    /// deleted; both `200` and `204` count as success.
    pub fn logout(&self) -> gd::Future<response::Logout> {
        let this = self.clone();
        into_future_trait(self.is_logged_in().and_then(
            move |status| -> gd::Future<response::Logout> {
                if !status.is_logged_in() {
                    return from_result(Ok(response::Logout::NotLoggedIn));
                }
                let gd = this.clone();
                into_future_trait(
                    this.bootstrap_user_id()
                        .and_then(move |user_id| gd.delete_login(user_id))
                        .map(response::Logout::LoggedOut),
                )
            },
        ))
    }

    fn delete_login(&self, user_id: UserId) -> gd::Future<Response> {
        let this = self.clone();
        into_future_trait(
            self.ajax(
                route!("/gdc/account/login/{user_id}", user_id),
                RequestOptions::new(Method::DELETE),
            )
            .map(move |response| {
                this.clear_session();
                response
            }),
        )
    }

    /// Get the bootstrap resource of the current session.
    pub fn bootstrap(&self) -> gd::Future<response::Bootstrap> {
        get!(self, BOOTSTRAP_ROUTE)
    }

    // The user id behind `accountSetting.links.self`:
    fn bootstrap_user_id(&self) -> gd::Future<UserId> {
        into_future_trait(self.bootstrap().and_then(|bootstrap| {
            bootstrap
                .profile_uri()
                .ok_or_else(|| Error::from(ErrorKind::MissingProfileUri))
                .and_then(|uri| UserId::from_profile_uri(uri))
        }))
    }

    /// Get the id of the logged in user.
    ///
    /// Fails with `ErrorKind::AuthRequired` when there is no active
    /// session.
    pub fn current_user_id(&self) -> gd::Future<UserId> {
        let this = self.clone();
        into_future_trait(self.is_logged_in().and_then(
            move |status| -> gd::Future<UserId> {
                if status.is_logged_in() {
                    this.bootstrap_user_id()
                } else {
                    from_result(Err(ErrorKind::AuthRequired.into()))
                }
            },
        ))
    }

    /// Get information about the current account.
    pub fn get_account_info(&self) -> gd::Future<AccountInfo> {
        into_future_trait(
            self.bootstrap()
                .map(|bootstrap: response::Bootstrap| AccountInfo::from(&bootstrap)),
        )
    }

    /// Get the id of the project the current session works in, if any.
    pub fn get_current_project_id(&self) -> gd::Future<Option<String>> {
        into_future_trait(self.bootstrap().map(|bootstrap: response::Bootstrap| {
            bootstrap
                .project_uri()
                .and_then(|uri| last_segment(uri))
                .map(String::from)
        }))
    }

    /// Get the feature flags enabled for the current session.
    pub fn get_feature_flags(&self) -> gd::Future<BTreeMap<String, Value>> {
        into_future_trait(
            self.bootstrap()
                .map(|bootstrap: response::Bootstrap| bootstrap.bootstrap_resource.current.feature_flags),
        )
    }

    /// Get the account settings of a specific user.
    pub fn get_account_setting<U: Into<UserId>>(
        &self,
        user_id: U,
    ) -> gd::Future<response::AccountSetting> {
        let user_id = user_id.into();
        let f: gd::Future<response::Profile> =
            get!(self, route!("/gdc/account/profile/{user_id}", user_id));
        into_future_trait(f.map(|profile| profile.account_setting))
    }

    /// Update the profile settings of a user.
    ///
    /// On a non-2xx answer the error's `status()` holds the HTTP status.
    pub fn update_profile_settings<U, P>(&self, user_id: U, settings: &P) -> gd::Future<Response>
    where
        U: Into<UserId>,
        P: serde::Serialize,
    {
        let user_id = user_id.into();
        match RequestOptions::new(Method::PUT).json(settings) {
            Ok(options) => self.ajax(
                route!("/gdc/account/profile/{user_id}/settings", user_id),
                options,
            ),
            Err(err) => from_result(Err(err)),
        }
    }
}
