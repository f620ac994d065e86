#[derive(serde::Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListReqArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Backend defined, 0 pending, 1 processing, 2 completed, 3 rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

/// Review or close an after-sales case
#[derive(serde::Serialize, Debug, Clone)]
pub struct AuditReqArgs {
    #[serde(skip)]
    pub id: u64,
    pub status: i32,
    pub remark: Option<String>,
}
