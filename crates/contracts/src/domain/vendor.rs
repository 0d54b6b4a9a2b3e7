use serde::{Deserialize, Serialize};

use super::common::{EntityTimestamps, TopUpId, VendorId};
use super::payment::{PaymentChannel, PaymentStatus};

/// Vending partner with a prepaid wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub wallet_balance: f64,
    pub active: bool,
    #[serde(flatten)]
    pub timestamps: EntityTimestamps,
}

/// Wallet top-up transaction. `top_up_by` is the back-office operator or
/// channel actor that initiated it (the API's `topUpBy` filter field).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUp {
    pub id: TopUpId,
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub amount: f64,
    pub channel: PaymentChannel,
    pub top_up_by: String,
    pub status: PaymentStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
