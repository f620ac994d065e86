use apexflow_shared::{
    const_config::path::{
        PATH_INVENTORY_LOGS, PATH_INVENTORY_LOW_STOCK, PATH_INVENTORY_PRODUCTS_CREATE,
        PATH_INVENTORY_PRODUCTS_LIST, PATH_INVENTORY_PRODUCT_DELETE,
        PATH_INVENTORY_PRODUCT_DETAIL, PATH_INVENTORY_PRODUCT_UPDATE,
        PATH_INVENTORY_STOCK_ADJUST,
    },
    req_args::api::inventory::{
        LogListReqArgs, LowStockReqArgs, ProductListReqArgs, StockAdjustReqArgs,
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
    pub fn list_products<F: UiCallBack>(
        &self,
        args: ProductListReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_INVENTORY_PRODUCTS_LIST, &args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_product<F: UiCallBack>(
        &self,
        id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(
            PATH_INVENTORY_PRODUCT_DETAIL.with_param(id),
            NO_ARGS,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_product<F, T>(
        &self,
        product: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>>
    where
        F: UiCallBack,
        T: serde::Serialize + Debug,
    {
        self.send_request_expect_json(PATH_INVENTORY_PRODUCTS_CREATE, product, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_product<F, T>(
        &self,
        id: u64,
        product: &T,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
        T: serde::Serialize + Debug,
    {
        self.send_request_expect_empty(
            PATH_INVENTORY_PRODUCT_UPDATE.with_param(id),
            product,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_product<F: UiCallBack>(
        &self,
        id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_INVENTORY_PRODUCT_DELETE.with_param(id),
            NO_ARGS,
            ui_notify,
        )
    }

    /// Sets the counted stock of a product, the backend records the change in
    /// the inventory log
    #[tracing::instrument(skip(ui_notify))]
    pub fn adjust_stock<F: UiCallBack>(
        &self,
        id: u64,
        args: StockAdjustReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_INVENTORY_STOCK_ADJUST.with_param(id), &args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn low_stock_products<F: UiCallBack>(
        &self,
        args: LowStockReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_INVENTORY_LOW_STOCK, &args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn inventory_logs<F: UiCallBack>(
        &self,
        args: LogListReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_INVENTORY_LOGS, &args, ui_notify)
    }
}
