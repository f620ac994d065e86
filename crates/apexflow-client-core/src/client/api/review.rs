use apexflow_shared::{
    const_config::path::{
        PATH_REVIEWS_LIST, PATH_REVIEW_DELETE, PATH_REVIEW_DETAIL, PATH_REVIEW_STATS,
    },
    req_args::api::review::ListReqArgs,
};
use futures::channel::oneshot;

use crate::{
    client::{UiCallBack, NO_ARGS},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_reviews<F: UiCallBack>(
        &self,
        args: ListReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_REVIEWS_LIST, &args, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_review<F: UiCallBack>(
        &self,
        id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_REVIEW_DETAIL.with_param(id), NO_ARGS, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_review<F: UiCallBack>(
        &self,
        id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(PATH_REVIEW_DELETE.with_param(id), NO_ARGS, ui_notify)
    }

    /// Rating summary for one product
    #[tracing::instrument(skip(ui_notify))]
    pub fn review_stats<F: UiCallBack>(
        &self,
        product_id: u64,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<serde_json::Value>> {
        self.send_request_expect_json(PATH_REVIEW_STATS.with_param(product_id), NO_ARGS, ui_notify)
    }
}
