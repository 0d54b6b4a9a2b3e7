use serde::{Deserialize, Serialize};

use super::common::{CustomerId, EntityTimestamps};
use crate::shared::forms::{FieldClass, FieldSpec, FormSchema, Rule, StepDefinition, WizardState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: &'static [Gender] = &[Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(format!("Unknown gender: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerStatus {
    PendingInstallation,
    Active,
    Suspended,
    Closed,
}

impl CustomerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CustomerStatus::PendingInstallation => "Pending installation",
            CustomerStatus::Active => "Active",
            CustomerStatus::Suspended => "Suspended",
            CustomerStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TariffClass {
    Residential,
    Commercial,
    Industrial,
}

impl TariffClass {
    pub const ALL: &'static [TariffClass] = &[
        TariffClass::Residential,
        TariffClass::Commercial,
        TariffClass::Industrial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TariffClass::Residential => "Residential",
            TariffClass::Commercial => "Commercial",
            TariffClass::Industrial => "Industrial",
        }
    }
}

impl std::str::FromStr for TariffClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Residential" => Ok(TariffClass::Residential),
            "Commercial" => Ok(TariffClass::Commercial),
            "Industrial" => Ok(TariffClass::Industrial),
            other => Err(format!("Unknown tariff class: {}", other)),
        }
    }
}

/// Customer account as returned by the customers collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub account_number: String,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub gender: Gender,
    pub address_line1: String,
    pub city: String,
    pub state: String,
    pub area_office_id: i64,
    pub tariff_class: TariffClass,
    pub prepaid_billing: bool,
    pub status: CustomerStatus,
    #[serde(flatten)]
    pub timestamps: EntityTimestamps,
}

/// Payload assembled from the onboarding wizard and POSTed to the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub gender: Gender,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub area_office_id: i64,
    pub tariff_class: TariffClass,
    pub prepaid_billing: bool,
    pub notes: Option<String>,
}

impl CustomerDraft {
    /// Map the wizard's flat value record into the create-customer payload.
    /// Call only after the wizard's submit gate has passed.
    pub fn from_values(wizard: &WizardState) -> Result<Self, String> {
        let gender: Gender = wizard.text("gender").parse()?;
        let tariff_class: TariffClass = wizard.text("tariffClass").parse()?;

        let opt = |name: &str| {
            let v = wizard.text(name);
            if v.trim().is_empty() {
                None
            } else {
                Some(v)
            }
        };

        Ok(Self {
            full_name: wizard.text("fullName"),
            phone_number: wizard.text("phoneNumber"),
            email: wizard.text("email"),
            gender,
            address_line1: wizard.text("addressLine1"),
            address_line2: opt("addressLine2"),
            city: wizard.text("city"),
            state: wizard.text("state"),
            area_office_id: wizard.value("areaOfficeId").as_number() as i64,
            tariff_class,
            prepaid_billing: wizard.value("prepaidBilling").as_bool(),
            notes: opt("notes"),
        })
    }
}

/// Field registry for the 3-step customer onboarding wizard.
pub fn onboarding_schema() -> FormSchema {
    FormSchema::new(vec![
        StepDefinition {
            index: 1,
            title: "Personal details",
            fields: vec![
                FieldSpec::new("fullName", "Full name", FieldClass::Text, vec![Rule::Required]),
                FieldSpec::new(
                    "phoneNumber",
                    "Phone number",
                    FieldClass::Text,
                    vec![Rule::Required, Rule::Phone],
                ),
                FieldSpec::new(
                    "email",
                    "Email",
                    FieldClass::Text,
                    vec![Rule::Required, Rule::Email],
                ),
                FieldSpec::new("gender", "Gender", FieldClass::Text, vec![Rule::Required]),
            ],
        },
        StepDefinition {
            index: 2,
            title: "Service address",
            fields: vec![
                FieldSpec::new(
                    "addressLine1",
                    "Address line 1",
                    FieldClass::Text,
                    vec![Rule::Required],
                ),
                FieldSpec::new("addressLine2", "Address line 2", FieldClass::Text, vec![]),
                FieldSpec::new("city", "City", FieldClass::Text, vec![Rule::Required]),
                FieldSpec::new("state", "State", FieldClass::Text, vec![Rule::Required]),
                FieldSpec::new(
                    "areaOfficeId",
                    "Area office",
                    FieldClass::Numeric,
                    vec![Rule::NonZeroSelect],
                ),
            ],
        },
        StepDefinition {
            index: 3,
            title: "Account setup",
            fields: vec![
                FieldSpec::new(
                    "tariffClass",
                    "Tariff class",
                    FieldClass::Text,
                    vec![Rule::Required],
                ),
                FieldSpec::new(
                    "prepaidBilling",
                    "Prepaid billing",
                    FieldClass::Boolean,
                    vec![],
                ),
                FieldSpec::new("notes", "Notes", FieldClass::Text, vec![]),
            ],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::FieldChange;

    fn complete_wizard() -> WizardState {
        let mut w = WizardState::new(onboarding_schema());
        for (name, raw) in [
            ("fullName", "Jane Doe"),
            ("phoneNumber", "08031234567"),
            ("email", "a@b.com"),
            ("gender", "Female"),
            ("addressLine1", "12 Marina Road"),
            ("city", "Ikeja"),
            ("state", "Lagos"),
            ("areaOfficeId", "4"),
            ("tariffClass", "Residential"),
            ("prepaidBilling", "true"),
        ] {
            w.set_field(FieldChange::new(name, raw));
        }
        w
    }

    #[test]
    fn onboarding_step_one_gates_on_full_name() {
        let mut w = WizardState::new(onboarding_schema());
        w.set_field(FieldChange::new("phoneNumber", "08031234567"));
        w.set_field(FieldChange::new("email", "a@b.com"));
        w.set_field(FieldChange::new("gender", "Male"));

        assert!(!w.go_next());
        assert_eq!(w.current_step(), 1);
        assert_eq!(
            w.error("fullName"),
            Some("Full name is required".to_string())
        );
        assert_eq!(w.errors().len(), 1);

        w.set_field(FieldChange::new("fullName", "Jane Doe"));
        assert!(w.go_next());
        assert_eq!(w.current_step(), 2);
        assert!(w.errors().is_empty());
    }

    #[test]
    fn draft_assembles_from_complete_wizard() {
        let mut w = complete_wizard();
        assert!(w.check_submit());

        let draft = CustomerDraft::from_values(&w).unwrap();
        assert_eq!(draft.full_name, "Jane Doe");
        assert_eq!(draft.gender, Gender::Female);
        assert_eq!(draft.area_office_id, 4);
        assert_eq!(draft.tariff_class, TariffClass::Residential);
        assert!(draft.prepaid_billing);
        assert_eq!(draft.address_line2, None);
        assert_eq!(draft.notes, None);
    }

    #[test]
    fn draft_serializes_camel_case() {
        let w = complete_wizard();
        let draft = CustomerDraft::from_values(&w).unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["fullName"], "Jane Doe");
        assert_eq!(json["areaOfficeId"], 4);
        assert_eq!(json["prepaidBilling"], true);
    }

    #[test]
    fn submit_gate_blocks_incomplete_earlier_step() {
        let mut w = complete_wizard();
        w.set_field(FieldChange::new("email", ""));
        assert!(!w.check_submit());
        assert!(w.error("email").is_some());
    }
}
