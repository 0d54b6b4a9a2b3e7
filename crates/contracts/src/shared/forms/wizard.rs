use std::collections::HashMap;

use super::validation::Rule;

/// Coercion class of a field. Input events deliver raw strings; the class
/// decides how they land in the value map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    Text,
    Numeric,
    Boolean,
}

/// A single field value in the wizard's flat value record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn as_number(&self) -> f64 {
        match self {
            FieldValue::Number(n) => *n,
            _ => 0.0,
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, FieldValue::Bool(true))
    }

    /// Blank means "nothing entered": empty text, zero number (the
    /// placeholder option of a select), or an unchecked flag.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Number(n) => *n == 0.0,
            FieldValue::Bool(b) => !*b,
        }
    }

    /// String form for binding back into an input/select element.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            FieldValue::Bool(b) => b.to_string(),
        }
    }
}

/// Normalized field-change message: one shape for native inputs, selects
/// and checkboxes alike. Coercion happens in [`WizardState::set_field`]
/// based on the field's declared class.
#[derive(Debug, Clone)]
pub struct FieldChange {
    pub name: String,
    pub raw: String,
}

impl FieldChange {
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
        }
    }
}

/// Field declaration inside a step: wire name, user-facing label,
/// coercion class and validation rules (checked in order, first failure
/// becomes the field's error).
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub class: FieldClass,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(
        name: &'static str,
        label: &'static str,
        class: FieldClass,
        rules: Vec<Rule>,
    ) -> Self {
        Self {
            name,
            label,
            class,
            rules,
        }
    }

    pub fn is_required(&self) -> bool {
        self.rules
            .iter()
            .any(|r| matches!(r, Rule::Required | Rule::NonZeroSelect))
    }

    fn default_value(&self) -> FieldValue {
        match self.class {
            FieldClass::Text => FieldValue::Text(String::new()),
            FieldClass::Numeric => FieldValue::Number(0.0),
            FieldClass::Boolean => FieldValue::Bool(false),
        }
    }
}

/// One wizard step. `index` is 1-based and contiguous within a schema.
#[derive(Debug, Clone)]
pub struct StepDefinition {
    pub index: usize,
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
}

/// Immutable field registry for one form type.
#[derive(Debug, Clone)]
pub struct FormSchema {
    steps: Vec<StepDefinition>,
}

impl FormSchema {
    pub fn new(steps: Vec<StepDefinition>) -> Self {
        debug_assert!(!steps.is_empty());
        debug_assert!(steps.iter().enumerate().all(|(i, s)| s.index == i + 1));
        Self { steps }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index.checked_sub(1)?)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.name == name)
    }

    fn default_values(&self) -> HashMap<String, FieldValue> {
        self.steps
            .iter()
            .flat_map(|s| s.fields.iter())
            .map(|f| (f.name.to_string(), f.default_value()))
            .collect()
    }
}

/// Runtime state of a multi-step form: current step (1..=N), the flat
/// value record and the per-field error map.
///
/// Forward navigation is gated on the current step's rules; backward
/// navigation is unconditional. Submission is gated on a single
/// validate-all-steps pass.
#[derive(Debug, Clone)]
pub struct WizardState {
    schema: FormSchema,
    current_step: usize,
    values: HashMap<String, FieldValue>,
    errors: HashMap<String, String>,
}

impl WizardState {
    pub fn new(schema: FormSchema) -> Self {
        let values = schema.default_values();
        Self {
            schema,
            current_step: 1,
            values,
            errors: HashMap::new(),
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step_count(&self) -> usize {
        self.schema.step_count()
    }

    pub fn is_first_step(&self) -> bool {
        self.current_step == 1
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == self.schema.step_count()
    }

    /// Current value of a field (schema default when untouched).
    pub fn value(&self, name: &str) -> FieldValue {
        self.values
            .get(name)
            .cloned()
            .or_else(|| self.schema.field(name).map(|f| f.default_value()))
            .unwrap_or(FieldValue::Text(String::new()))
    }

    /// Input-binding form of a field value.
    pub fn text(&self, name: &str) -> String {
        self.value(name).display()
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.errors.get(name).cloned()
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Apply a normalized change: coerce by the field's class, overwrite
    /// the value, and clear exactly that field's error entry.
    ///
    /// Numeric fields coerce the empty string to 0 and anything unparsable
    /// to 0; boolean fields recognize the string "true".
    pub fn set_field(&mut self, change: FieldChange) {
        let class = self
            .schema
            .field(&change.name)
            .map(|f| f.class)
            .unwrap_or(FieldClass::Text);

        let value = match class {
            FieldClass::Text => FieldValue::Text(change.raw),
            FieldClass::Numeric => {
                let trimmed = change.raw.trim();
                let n = if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(0.0)
                };
                FieldValue::Number(n)
            }
            FieldClass::Boolean => FieldValue::Bool(change.raw.trim() == "true"),
        };

        self.errors.remove(&change.name);
        self.values.insert(change.name, value);
    }

    /// Pure validation of one step against the current values. Does not
    /// mutate controller state.
    pub fn validate_step(&self, index: usize) -> HashMap<String, String> {
        let mut errors = HashMap::new();
        let Some(step) = self.schema.step(index) else {
            return errors;
        };
        for field in &step.fields {
            let value = self.value(field.name);
            for rule in &field.rules {
                if let Some(msg) = rule.check(&value, field.label) {
                    errors.insert(field.name.to_string(), msg);
                    break;
                }
            }
        }
        errors
    }

    /// Validate every step's fields in one pass.
    pub fn validate_all(&self) -> HashMap<String, String> {
        let mut errors = HashMap::new();
        for index in 1..=self.schema.step_count() {
            errors.extend(self.validate_step(index));
        }
        errors
    }

    /// Advance to the next step if the current step validates. On failure
    /// the error map is populated and the step is unchanged. Advancing is
    /// capped at the last step.
    pub fn go_next(&mut self) -> bool {
        let step_errors = self.validate_step(self.current_step);
        if !step_errors.is_empty() {
            self.errors = step_errors;
            return false;
        }
        self.errors.clear();
        if self.current_step < self.schema.step_count() {
            self.current_step += 1;
            true
        } else {
            false
        }
    }

    /// Step back without validating; floored at step 1.
    pub fn go_previous(&mut self) {
        if self.current_step > 1 {
            self.current_step -= 1;
        }
    }

    /// Submission gate: one validate-all pass over every step's required
    /// fields. Returns true (and clears stale errors) when the form may be
    /// assembled and sent; otherwise records the full error map.
    pub fn check_submit(&mut self) -> bool {
        let all_errors = self.validate_all();
        if all_errors.is_empty() {
            self.errors.clear();
            true
        } else {
            self.errors = all_errors;
            false
        }
    }

    /// Restore defaults, clear errors, return to step 1.
    pub fn reset(&mut self) {
        self.values = self.schema.default_values();
        self.errors.clear();
        self.current_step = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_schema() -> FormSchema {
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
                    FieldSpec::new("city", "City", FieldClass::Text, vec![Rule::Required]),
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
                title: "Account",
                fields: vec![
                    FieldSpec::new("tariff", "Tariff class", FieldClass::Text, vec![Rule::Required]),
                    FieldSpec::new("prepaid", "Prepaid billing", FieldClass::Boolean, vec![]),
                ],
            },
        ])
    }

    fn fill_step_one(w: &mut WizardState) {
        w.set_field(FieldChange::new("fullName", "Jane Doe"));
        w.set_field(FieldChange::new("phoneNumber", "08031234567"));
        w.set_field(FieldChange::new("email", "a@b.com"));
        w.set_field(FieldChange::new("gender", "Male"));
    }

    #[test]
    fn go_next_blocks_on_missing_required_field() {
        let mut w = WizardState::new(test_schema());
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
    }

    #[test]
    fn blocked_navigation_and_submit_report_failure_to_the_caller() {
        // pages raise a notification off these return values, so a failed
        // pass must come back false with the error map populated
        let mut w = WizardState::new(test_schema());

        assert!(!w.go_next());
        assert!(!w.errors().is_empty());

        assert!(!w.check_submit());
        assert!(!w.errors().is_empty());
    }

    #[test]
    fn go_next_advances_once_step_is_complete() {
        let mut w = WizardState::new(test_schema());
        fill_step_one(&mut w);

        assert!(w.go_next());
        assert_eq!(w.current_step(), 2);
        assert!(w.errors().is_empty());
    }

    #[test]
    fn go_next_caps_at_last_step() {
        let mut w = WizardState::new(test_schema());
        fill_step_one(&mut w);
        assert!(w.go_next());
        w.set_field(FieldChange::new("city", "Ikeja"));
        w.set_field(FieldChange::new("areaOfficeId", "4"));
        assert!(w.go_next());
        w.set_field(FieldChange::new("tariff", "Residential"));

        assert!(!w.go_next());
        assert_eq!(w.current_step(), 3);
    }

    #[test]
    fn editing_a_field_clears_exactly_its_error() {
        let mut w = WizardState::new(test_schema());
        assert!(!w.go_next());
        assert!(w.errors().len() >= 2);
        let before = w.errors().len();

        w.set_field(FieldChange::new("fullName", "Jane Doe"));
        assert_eq!(w.error("fullName"), None);
        assert_eq!(w.errors().len(), before - 1);
        assert!(w.error("phoneNumber").is_some());
    }

    #[test]
    fn back_navigation_is_unconditional_and_non_destructive() {
        let mut w = WizardState::new(test_schema());
        fill_step_one(&mut w);
        w.go_next();
        w.set_field(FieldChange::new("city", "Ikeja"));
        w.set_field(FieldChange::new("areaOfficeId", "4"));
        w.go_next();

        let values_before = (w.text("fullName"), w.text("city"), w.text("areaOfficeId"));
        w.go_previous();
        w.go_previous();
        assert_eq!(w.current_step(), 1);
        w.go_previous();
        assert_eq!(w.current_step(), 1);
        assert_eq!(
            values_before,
            (w.text("fullName"), w.text("city"), w.text("areaOfficeId"))
        );
    }

    #[test]
    fn submit_gate_covers_every_step() {
        let mut w = WizardState::new(test_schema());
        fill_step_one(&mut w);
        w.go_next();
        w.set_field(FieldChange::new("city", "Ikeja"));
        w.set_field(FieldChange::new("areaOfficeId", "4"));
        w.go_next();
        // last step left incomplete: tariff missing
        assert!(!w.check_submit());
        assert!(w.error("tariff").is_some());

        w.set_field(FieldChange::new("tariff", "Residential"));
        assert!(w.check_submit());
        assert!(w.errors().is_empty());
    }

    #[test]
    fn submit_gate_catches_earlier_step_regressions() {
        let mut w = WizardState::new(test_schema());
        fill_step_one(&mut w);
        w.go_next();
        w.set_field(FieldChange::new("city", "Ikeja"));
        w.set_field(FieldChange::new("areaOfficeId", "4"));
        w.go_next();
        w.set_field(FieldChange::new("tariff", "Residential"));

        // wipe a step-1 field from step 3
        w.set_field(FieldChange::new("email", ""));
        assert!(!w.check_submit());
        assert!(w.error("email").is_some());
    }

    #[test]
    fn numeric_and_boolean_coercion() {
        let mut w = WizardState::new(test_schema());
        w.set_field(FieldChange::new("areaOfficeId", ""));
        assert_eq!(w.value("areaOfficeId").as_number(), 0.0);
        w.set_field(FieldChange::new("areaOfficeId", "7"));
        assert_eq!(w.value("areaOfficeId").as_number(), 7.0);
        w.set_field(FieldChange::new("areaOfficeId", "abc"));
        assert_eq!(w.value("areaOfficeId").as_number(), 0.0);

        w.set_field(FieldChange::new("prepaid", "true"));
        assert!(w.value("prepaid").as_bool());
        w.set_field(FieldChange::new("prepaid", "false"));
        assert!(!w.value("prepaid").as_bool());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut w = WizardState::new(test_schema());
        fill_step_one(&mut w);
        w.go_next();
        w.reset();

        assert_eq!(w.current_step(), 1);
        assert!(w.errors().is_empty());
        assert_eq!(w.text("fullName"), "");
        assert_eq!(w.value("areaOfficeId").as_number(), 0.0);
        assert!(!w.value("prepaid").as_bool());
    }
}
