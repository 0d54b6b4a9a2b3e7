use serde::{Deserialize, Serialize};

use super::common::DisputeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisputeCategory {
    Overbilling,
    MeterFault,
    WrongTariff,
    PaymentNotReflected,
}

impl DisputeCategory {
    pub const ALL: &'static [DisputeCategory] = &[
        DisputeCategory::Overbilling,
        DisputeCategory::MeterFault,
        DisputeCategory::WrongTariff,
        DisputeCategory::PaymentNotReflected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisputeCategory::Overbilling => "Overbilling",
            DisputeCategory::MeterFault => "MeterFault",
            DisputeCategory::WrongTariff => "WrongTariff",
            DisputeCategory::PaymentNotReflected => "PaymentNotReflected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisputeCategory::Overbilling => "Overbilling",
            DisputeCategory::MeterFault => "Meter fault",
            DisputeCategory::WrongTariff => "Wrong tariff",
            DisputeCategory::PaymentNotReflected => "Payment not reflected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisputeStatus {
    Open,
    UnderReview,
    Resolved,
    Rejected,
}

impl DisputeStatus {
    pub const ALL: &'static [DisputeStatus] = &[
        DisputeStatus::Open,
        DisputeStatus::UnderReview,
        DisputeStatus::Resolved,
        DisputeStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisputeStatus::Open => "Open",
            DisputeStatus::UnderReview => "UnderReview",
            DisputeStatus::Resolved => "Resolved",
            DisputeStatus::Rejected => "Rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisputeStatus::Open => "Open",
            DisputeStatus::UnderReview => "Under review",
            DisputeStatus::Resolved => "Resolved",
            DisputeStatus::Rejected => "Rejected",
        }
    }
}

/// Billing dispute raised against a customer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispute {
    pub id: DisputeId,
    pub reference: String,
    pub account_number: String,
    pub customer_name: String,
    pub category: DisputeCategory,
    pub status: DisputeStatus,
    pub amount_disputed: f64,
    pub description: String,
    pub resolution_note: Option<String>,
    pub opened_at: chrono::DateTime<chrono::Utc>,
    pub resolved_at: Option<chrono::DateTime<chrono::Utc>>,
}
