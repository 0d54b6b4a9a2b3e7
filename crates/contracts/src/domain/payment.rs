use serde::{Deserialize, Serialize};

use super::common::PaymentId;

/// Who collected a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectorType {
    Agent,
    Vendor,
    SelfService,
}

impl CollectorType {
    pub const ALL: &'static [CollectorType] = &[
        CollectorType::Agent,
        CollectorType::Vendor,
        CollectorType::SelfService,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectorType::Agent => "Agent",
            CollectorType::Vendor => "Vendor",
            CollectorType::SelfService => "SelfService",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CollectorType::Agent => "Agent",
            CollectorType::Vendor => "Vendor",
            CollectorType::SelfService => "Self service",
        }
    }
}

/// Medium the payment came through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentChannel {
    Cash,
    Pos,
    Ussd,
    Web,
    BankTransfer,
}

impl PaymentChannel {
    pub const ALL: &'static [PaymentChannel] = &[
        PaymentChannel::Cash,
        PaymentChannel::Pos,
        PaymentChannel::Ussd,
        PaymentChannel::Web,
        PaymentChannel::BankTransfer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentChannel::Cash => "Cash",
            PaymentChannel::Pos => "Pos",
            PaymentChannel::Ussd => "Ussd",
            PaymentChannel::Web => "Web",
            PaymentChannel::BankTransfer => "BankTransfer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentChannel::Cash => "Cash",
            PaymentChannel::Pos => "POS",
            PaymentChannel::Ussd => "USSD",
            PaymentChannel::Web => "Web",
            PaymentChannel::BankTransfer => "Bank transfer",
        }
    }
}

/// Lifecycle state of a payment or top-up record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Confirmed,
    Failed,
    Reversed,
}

impl PaymentStatus {
    pub const ALL: &'static [PaymentStatus] = &[
        PaymentStatus::Pending,
        PaymentStatus::Confirmed,
        PaymentStatus::Failed,
        PaymentStatus::Reversed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Confirmed => "Confirmed",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Reversed => "Reversed",
        }
    }
}

/// Payment record as returned by the payments collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub receipt_number: String,
    pub account_number: String,
    pub customer_name: String,
    pub amount: f64,
    pub collector_type: CollectorType,
    pub collected_by: String,
    pub channel: PaymentChannel,
    pub status: PaymentStatus,
    pub paid_at: chrono::DateTime<chrono::Utc>,
}
