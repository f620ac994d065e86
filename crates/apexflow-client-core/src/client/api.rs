use apexflow_shared::{
    const_config::path::{PATH_AUTH_LOGOUT, PATH_USER_PERMISSIONS, PATH_USER_PROFILE},
    errors::NotLoggedInError,
    req_args::api::user::UpdateProfileReqArgs,
    token::AuthToken,
    uac::{Permissions, UserInfo},
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGS},
    storage::StorageError,
    Client,
};

pub mod admin;
pub mod after_sales;
pub mod income;
pub mod inventory;
pub mod logistics;
pub mod order;
pub mod review;

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn logout<F: UiCallBack>(&self, ui_notify: F) -> oneshot::Receiver<anyhow::Result<()>> {
        // Request is built first so it still carries the token
        let result = self.send_request_expect_empty(PATH_AUTH_LOGOUT, NO_ARGS, ui_notify);
        self.clear_session(); // Clear session even if logout fails
        result
    }

    #[tracing::instrument]
    pub fn logout_no_wait(&self) {
        self.send_request_no_wait(PATH_AUTH_LOGOUT, NO_ARGS);
        self.clear_session(); // Clear session even if logout fails
    }

    /// Loads the permissions for the current token and stores them, keeping
    /// the identity
    #[tracing::instrument(skip(ui_notify))]
    pub fn refresh_permissions<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Permissions>> {
        self.send_request_expect_json_then(
            PATH_USER_PERMISSIONS,
            NO_ARGS,
            ui_notify,
            |client, permissions: Permissions| {
                client
                    .with_session(|session| session.set_permissions(permissions.clone()))
                    .map_err(storage_error)?;
                Ok(permissions)
            },
        )
    }

    /// Saves the profile then applies the same changes to the stored identity
    #[tracing::instrument(skip(ui_notify))]
    pub fn update_profile<F: UiCallBack>(
        &self,
        args: UpdateProfileReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<UserInfo>> {
        let real_name = args.real_name.clone();
        self.send_request_expect_empty_then(PATH_USER_PROFILE, &args, ui_notify, move |client| {
            client.with_session(|session| {
                // Without a stored identity there is nothing to update locally
                let Some(mut user_info) = session.user_info().cloned() else {
                    return Err(NotLoggedInError.into());
                };
                if real_name.is_some() {
                    user_info.real_name = real_name;
                }
                session
                    .set_user_info(user_info.clone())
                    .map(|()| user_info)
                    .map_err(storage_error)
            })
        })
    }

    /// Stores a token obtained outside of the login flow (for example a guest
    /// token) and marks the identity as a guest
    #[tracing::instrument]
    pub fn begin_guest_session(&self, token: AuthToken) -> Result<(), StorageError> {
        self.with_session(|session| session.begin_guest_session(token))
    }
}

fn storage_error(e: StorageError) -> anyhow::Error {
    anyhow::Error::new(e).context("failed to update stored session")
}
