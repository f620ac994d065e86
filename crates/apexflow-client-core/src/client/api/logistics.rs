use apexflow_shared::{
    const_config::path::{
        PATH_LOGISTICS_BY_ORDER, PATH_LOGISTICS_DELETE, PATH_LOGISTICS_DETAIL,
        PATH_LOGISTICS_LIST, PATH_LOGISTICS_SHIP, PATH_LOGISTICS_STATS, PATH_LOGISTICS_STATUS,
        PATH_LOGISTICS_UPDATE,
    },
    req_args::api::{
        logistics::{LogisticsStatus, ShippingReqArgs},
        PageReqArgs, StatusReqArgs,
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
    pub fn list_logistics<F: UiCallBack>(
        &self,
        args: PageReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_LOGISTICS_LIST, &args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn logistics_stats<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_LOGISTICS_STATS, NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_logistics<F: UiCallBack>(
        &self,
        id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_LOGISTICS_DETAIL.with_param(id), NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_logistics_by_order<F: UiCallBack>(
        &self,
        order_id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(
            PATH_LOGISTICS_BY_ORDER.with_param(order_id),
            NO_ARGS,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn ship<F: UiCallBack>(
        &self,
        id: u64,
        args: ShippingReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_LOGISTICS_SHIP.with_param(id), &args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_logistics_status<F: UiCallBack>(
        &self,
        id: u64,
        status: LogisticsStatus,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_LOGISTICS_STATUS.with_param(id),
            &StatusReqArgs { status },
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_logistics<F, T>(
        &self,
        id: u64,
        logistics: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
        T: serde::Serialize + Debug,
    {
        self.send_request_expect_empty(PATH_LOGISTICS_UPDATE.with_param(id), logistics, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_logistics<F: UiCallBack>(
        &self,
        id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_LOGISTICS_DELETE.with_param(id), NO_ARGS, ui_notify)
    }
}
