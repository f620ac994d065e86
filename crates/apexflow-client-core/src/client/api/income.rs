use apexflow_shared::{
    const_config::path::{
        PATH_INCOME_CREATE, PATH_INCOME_DELETE, PATH_INCOME_DETAIL, PATH_INCOME_LIST,
        PATH_INCOME_STATS, PATH_INCOME_STATUS, PATH_INCOME_UPDATE,
    },
    req_args::api::{
        income::{IncomeStatus, ListReqArgs},
        StatusReqArgs,
    },
};
use futures::channel::oneshot;
use std::fmt::Debug;

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_income<F: UiCallBack>(
        &self,
        args: ListReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_INCOME_LIST, &args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn income_stats<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_INCOME_STATS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_income<F, T>(
        &self,
        record: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>>
    where
        F: UiCallBack,
        T: serde::Serialize + Debug,
    {
        self.send_request_expect_json(PATH_INCOME_CREATE, record, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_income<F, T>(
        &self,
        id: u64,
        record: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
        T: serde::Serialize + Debug,
    {
        self.send_request_expect_empty(PATH_INCOME_UPDATE.with_param(id), record, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_income_status<F: UiCallBack>(
        &self,
        id: u64,
        status: IncomeStatus,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_INCOME_STATUS.with_param(id),
            &StatusReqArgs { status },
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_income<F: UiCallBack>(
        &self,
        id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_INCOME_DELETE.with_param(id), NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_income<F: UiCallBack>(
        &self,
        id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_INCOME_DETAIL.with_param(id), NO_ARGS, ui_notify)
    }
}
