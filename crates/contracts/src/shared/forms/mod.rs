//! Form field registry, validation rules and the step-wizard state machine.
//!
//! Every multi-step form (customer onboarding, meter installation) is
//! described by a [`FormSchema`]: an immutable list of steps, each with its
//! fields and validation rules. [`WizardState`] is the runtime controller
//! that pages bind to signals.

mod validation;
mod wizard;

pub use validation::Rule;
pub use wizard::{
    FieldChange, FieldClass, FieldSpec, FieldValue, FormSchema, StepDefinition, WizardState,
};
