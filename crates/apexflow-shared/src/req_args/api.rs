pub mod admin;
pub mod after_sales;
pub mod income;
pub mod inventory;
pub mod logistics;
pub mod order;
pub mod review;
pub mod user;

/// Query used by list endpoints that only page
#[derive(serde::Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageReqArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PageReqArgs {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
        }
    }
}

/// Body of the endpoints that only change a status
#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusReqArgs<T> {
    pub status: T,
}
