use apexflow_shared::{
    const_config::{
        client::CLIENT_ANALYSIS_PAGE_SIZE,
        path::{PATH_ORDERS_CREATE, PATH_ORDERS_LIST, PATH_ORDER_DELETE, PATH_ORDER_DETAIL},
    },
    req_args::api::{order::ListReqArgs, PageReqArgs},
};
use futures::channel::oneshot;
use std::fmt::Debug;

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_orders<F: UiCallBack>(
        &self,
        args: ListReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_ORDERS_LIST, &args, ui_notify)
    }

    /// Every order in a single page, for analysis done on the client
    #[tracing::instrument(skip(ui_notify))]
    pub fn get_all_orders_for_analysis<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        let args = PageReqArgs::new(1, CLIENT_ANALYSIS_PAGE_SIZE);
        self.send_request_expect_json(PATH_ORDERS_LIST, &args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_order<F: UiCallBack>(
        &self,
        id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_ORDER_DETAIL.with_param(id), NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_order<F, T>(
        &self,
        order: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>>
    where
        F: UiCallBack,
        T: serde::Serialize + Debug,
    {
        self.send_request_expect_json(PATH_ORDERS_CREATE, order, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_order<F: UiCallBack>(
        &self,
        id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_ORDER_DELETE.with_param(id), NO_ARGS, ui_notify)
    }
}
