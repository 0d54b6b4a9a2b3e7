use serde::{Deserialize, Serialize};

use super::common::{EntityTimestamps, MeterId};
use crate::shared::forms::{FieldClass, FieldSpec, FormSchema, Rule, StepDefinition, WizardState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeterType {
    Prepaid,
    Postpaid,
}

impl MeterType {
    pub const ALL: &'static [MeterType] = &[MeterType::Prepaid, MeterType::Postpaid];

    pub fn as_str(&self) -> &'static str {
        match self {
            MeterType::Prepaid => "Prepaid",
            MeterType::Postpaid => "Postpaid",
        }
    }
}

impl std::str::FromStr for MeterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Prepaid" => Ok(MeterType::Prepaid),
            "Postpaid" => Ok(MeterType::Postpaid),
            other => Err(format!("Unknown meter type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeterPhase {
    SinglePhase,
    ThreePhase,
}

impl MeterPhase {
    pub const ALL: &'static [MeterPhase] = &[MeterPhase::SinglePhase, MeterPhase::ThreePhase];

    pub fn as_str(&self) -> &'static str {
        match self {
            MeterPhase::SinglePhase => "SinglePhase",
            MeterPhase::ThreePhase => "ThreePhase",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MeterPhase::SinglePhase => "Single phase",
            MeterPhase::ThreePhase => "Three phase",
        }
    }
}

impl std::str::FromStr for MeterPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SinglePhase" => Ok(MeterPhase::SinglePhase),
            "ThreePhase" => Ok(MeterPhase::ThreePhase),
            other => Err(format!("Unknown meter phase: {}", other)),
        }
    }
}

/// Meter as returned by the meters collection endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meter {
    pub id: MeterId,
    pub meter_number: String,
    pub meter_type: MeterType,
    pub phase: MeterPhase,
    pub account_number: Option<String>,
    pub installed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub commissioned: bool,
    pub installer_name: Option<String>,
    #[serde(flatten)]
    pub timestamps: EntityTimestamps,
}

/// Payload assembled from the installation wizard and POSTed to the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterInstallation {
    pub meter_number: String,
    pub meter_type: MeterType,
    pub phase: MeterPhase,
    pub seal_number: Option<String>,
    pub account_number: String,
    pub installer_agent_id: i64,
    pub installation_date: String,
    pub address_line1: String,
    pub city: String,
    pub gps_lat: f64,
    pub gps_lng: f64,
    pub commissioned: bool,
}

impl MeterInstallation {
    /// Map the wizard's flat value record into the install payload.
    /// Call only after the wizard's submit gate has passed.
    pub fn from_values(wizard: &WizardState) -> Result<Self, String> {
        let meter_type: MeterType = wizard.text("meterType").parse()?;
        let phase: MeterPhase = wizard.text("phase").parse()?;

        let seal = wizard.text("sealNumber");
        Ok(Self {
            meter_number: wizard.text("meterNumber"),
            meter_type,
            phase,
            seal_number: if seal.trim().is_empty() { None } else { Some(seal) },
            account_number: wizard.text("accountNumber"),
            installer_agent_id: wizard.value("installerAgentId").as_number() as i64,
            installation_date: wizard.text("installationDate"),
            address_line1: wizard.text("addressLine1"),
            city: wizard.text("city"),
            gps_lat: wizard.value("gpsLat").as_number(),
            gps_lng: wizard.value("gpsLng").as_number(),
            commissioned: wizard.value("commissioned").as_bool(),
        })
    }
}

/// Field registry for the 3-step meter installation wizard.
pub fn installation_schema() -> FormSchema {
    FormSchema::new(vec![
        StepDefinition {
            index: 1,
            title: "Meter details",
            fields: vec![
                FieldSpec::new(
                    "meterNumber",
                    "Meter number",
                    FieldClass::Text,
                    vec![Rule::Required, Rule::MinLength(6)],
                ),
                FieldSpec::new(
                    "meterType",
                    "Meter type",
                    FieldClass::Text,
                    vec![Rule::Required],
                ),
                FieldSpec::new("phase", "Phase", FieldClass::Text, vec![Rule::Required]),
                FieldSpec::new("sealNumber", "Seal number", FieldClass::Text, vec![]),
            ],
        },
        StepDefinition {
            index: 2,
            title: "Assignment",
            fields: vec![
                FieldSpec::new(
                    "accountNumber",
                    "Account number",
                    FieldClass::Text,
                    vec![Rule::Required],
                ),
                FieldSpec::new(
                    "installerAgentId",
                    "Installer agent",
                    FieldClass::Numeric,
                    vec![Rule::NonZeroSelect],
                ),
                FieldSpec::new(
                    "installationDate",
                    "Installation date",
                    FieldClass::Text,
                    vec![Rule::Required],
                ),
            ],
        },
        StepDefinition {
            index: 3,
            title: "Site & commissioning",
            fields: vec![
                FieldSpec::new(
                    "addressLine1",
                    "Address line 1",
                    FieldClass::Text,
                    vec![Rule::Required],
                ),
                FieldSpec::new("city", "City", FieldClass::Text, vec![Rule::Required]),
                FieldSpec::new("gpsLat", "GPS latitude", FieldClass::Numeric, vec![]),
                FieldSpec::new("gpsLng", "GPS longitude", FieldClass::Numeric, vec![]),
                FieldSpec::new("commissioned", "Commissioned", FieldClass::Boolean, vec![]),
            ],
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::FieldChange;

    #[test]
    fn short_meter_number_blocks_step_one() {
        let mut w = WizardState::new(installation_schema());
        w.set_field(FieldChange::new("meterNumber", "123"));
        w.set_field(FieldChange::new("meterType", "Prepaid"));
        w.set_field(FieldChange::new("phase", "SinglePhase"));

        assert!(!w.go_next());
        assert_eq!(
            w.error("meterNumber"),
            Some("Meter number must be at least 6 characters".to_string())
        );
    }

    #[test]
    fn installation_assembles_after_all_steps() {
        let mut w = WizardState::new(installation_schema());
        for (name, raw) in [
            ("meterNumber", "MTR-045120"),
            ("meterType", "Prepaid"),
            ("phase", "ThreePhase"),
            ("accountNumber", "ACC-99021"),
            ("installerAgentId", "12"),
            ("installationDate", "2026-08-20"),
            ("addressLine1", "7 Depot Close"),
            ("city", "Abeokuta"),
            ("gpsLat", "7.1604"),
            ("gpsLng", "3.3521"),
            ("commissioned", "true"),
        ] {
            w.set_field(FieldChange::new(name, raw));
        }
        assert!(w.check_submit());

        let payload = MeterInstallation::from_values(&w).unwrap();
        assert_eq!(payload.meter_type, MeterType::Prepaid);
        assert_eq!(payload.phase, MeterPhase::ThreePhase);
        assert_eq!(payload.installer_agent_id, 12);
        assert_eq!(payload.seal_number, None);
        assert!(payload.commissioned);
        assert!((payload.gps_lat - 7.1604).abs() < 1e-9);
    }

    #[test]
    fn submit_gate_blocks_missing_assignment() {
        let mut w = WizardState::new(installation_schema());
        w.set_field(FieldChange::new("meterNumber", "MTR-045120"));
        w.set_field(FieldChange::new("meterType", "Prepaid"));
        w.set_field(FieldChange::new("phase", "SinglePhase"));
        w.set_field(FieldChange::new("addressLine1", "7 Depot Close"));
        w.set_field(FieldChange::new("city", "Abeokuta"));

        assert!(!w.check_submit());
        assert!(w.error("installerAgentId").is_some());
        assert!(w.error("accountNumber").is_some());
    }
}
