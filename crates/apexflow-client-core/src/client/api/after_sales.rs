use apexflow_shared::{
    const_config::path::{
        PATH_AFTER_SALES_DETAIL, PATH_AFTER_SALES_LIST, PATH_AFTER_SALES_STATUS,
    },
    req_args::api::after_sales::{AuditReqArgs, ListReqArgs},
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_after_sales<F: UiCallBack>(
        &self,
        args: ListReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_AFTER_SALES_LIST, &args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_after_sales<F: UiCallBack>(
        &self,
        id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_AFTER_SALES_DETAIL.with_param(id), NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn audit_after_sales<F: UiCallBack>(
        &self,
        args: AuditReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_AFTER_SALES_STATUS.with_param(args.id), &args, ui_notify)
    }
}
