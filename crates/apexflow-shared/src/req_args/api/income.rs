#[derive(serde::Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListReqArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<IncomeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Income,
    Refund,
}

/// Serialized as the numeric code the backend uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeStatus {
    Pending,
    Recorded,
}

impl IncomeStatus {
    pub const fn code(self) -> i32 {
        match self {
            IncomeStatus::Pending => 1,
            IncomeStatus::Recorded => 2,
        }
    }
}

impl serde::Serialize for IncomeStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}
