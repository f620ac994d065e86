use apexflow_shared::{
    const_config::path::{
        PATH_ADMIN_USERS_CREATE, PATH_ADMIN_USERS_LIST, PATH_ADMIN_USER_DELETE,
        PATH_ADMIN_USER_PASSWORD, PATH_ADMIN_USER_PERMISSIONS, PATH_ADMIN_USER_UPDATE,
    },
    id::DbId,
    req_args::api::admin::user::{
        ListReqArgs, NewUserReqArgs, PasswordResetReqArgs, UpdateReqArgs,
    },
    uac::Permissions,
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_users<F: UiCallBack>(
        &self,
        args: ListReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_ADMIN_USERS_LIST, &args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_user<F: UiCallBack>(
        &self,
        user: NewUserReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_ADMIN_USERS_CREATE, &user.to_json(), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_user<F: UiCallBack>(
        &self,
        args: UpdateReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_ADMIN_USER_UPDATE.with_param(args.id), &args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_user<F: UiCallBack>(
        &self,
        id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_ADMIN_USER_DELETE.with_param(id), NO_ARGS, ui_notify)
    }

    /// Replaces every flag of the user, flags not set are revoked
    #[tracing::instrument(skip(ui_notify))]
    pub fn update_user_permissions<F: UiCallBack>(
        &self,
        id: DbId,
        permissions: Permissions,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_ADMIN_USER_PERMISSIONS.with_param(id),
            &permissions,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn reset_user_password<F: UiCallBack>(
        &self,
        args: PasswordResetReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_ADMIN_USER_PASSWORD.with_param(args.id),
            &args.to_json(),
            ui_notify,
        )
    }
}
