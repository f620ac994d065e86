/// Marks a shipment as sent
#[derive(serde::Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingReqArgs {
    pub express_company: String,
    pub tracking_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogisticsStatus {
    Pending,
    Shipped,
    Delivered,
}
