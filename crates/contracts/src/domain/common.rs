use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Common behaviour for entity identifiers (Uuid newtypes).
pub trait EntityId: Sized {
    fn as_string(&self) -> String;
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Declares a Uuid newtype id and its `EntityId` impl.
macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new(value: Uuid) -> Self {
                Self(value)
            }

            pub fn value(&self) -> Uuid {
                self.0
            }
        }

        impl EntityId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                Uuid::parse_str(s)
                    .map($name::new)
                    .map_err(|e| format!("Invalid UUID: {}", e))
            }
        }
    };
}

entity_id!(
    /// Customer account identifier
    CustomerId
);
entity_id!(
    /// Meter identifier
    MeterId
);
entity_id!(
    /// Field agent identifier
    AgentId
);
entity_id!(
    /// Supervisor identifier
    SupervisorId
);
entity_id!(
    /// Vendor identifier
    VendorId
);
entity_id!(
    /// Top-up transaction identifier
    TopUpId
);
entity_id!(
    /// Billing dispute identifier
    DisputeId
);
entity_id!(
    /// Payment record identifier
    PaymentId
);

/// Audit timestamps shared by every entity coming off the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityTimestamps {
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_string() {
        let id = CustomerId::new(Uuid::new_v4());
        let parsed = CustomerId::from_string(&id.as_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn id_rejects_garbage() {
        assert!(MeterId::from_string("not-a-uuid").is_err());
    }
}
