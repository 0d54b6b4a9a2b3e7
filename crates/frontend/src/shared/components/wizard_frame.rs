use std::collections::HashMap;

use contracts::shared::forms::{FieldChange, FieldClass, FieldSpec, WizardState};
use leptos::prelude::*;
use thaw::*;

use super::ui::{Checkbox, Input, Select};
use crate::shared::flash::use_flash;

const VALIDATION_FLASH: &str = "Please correct the highlighted fields";

/// WizardFrame component - stepper header, schema-driven fields for the
/// current step, and Back/Next/Submit/Cancel navigation over a shared
/// [`WizardState`].
///
/// Fields render from their declared class: Boolean as a checkbox,
/// everything listed in `select_options` as a select, the rest as inputs.
/// `on_submit` only fires after the submit gate passes.
#[component]
pub fn WizardFrame(
    /// Shared wizard state
    state: RwSignal<WizardState>,

    /// Options for select-rendered fields, keyed by field name.
    /// Each list should start with its placeholder entry.
    #[prop(optional, into)]
    select_options: Signal<HashMap<String, Vec<(String, String)>>>,

    /// Submit button label
    #[prop(into)]
    submit_label: String,

    /// Fired once the whole form validates
    on_submit: Callback<()>,

    /// Fired on cancel
    on_cancel: Callback<()>,

    /// Disables navigation while a save is in flight
    #[prop(optional, into)]
    saving: Signal<bool>,
) -> impl IntoView {
    // Track the step index alone: value edits must not rebuild the field
    // elements (that would drop input focus mid-typing).
    let current_step = Memo::new(move |_| state.with(|w| w.current_step()));

    let stepper = move || {
        let current = current_step.get();
        state.with_untracked(|w| {
            w.schema()
                .steps()
                .iter()
                .map(|step| {
                    let class = if step.index == current {
                        "wizard__step wizard__step--active"
                    } else if step.index < current {
                        "wizard__step wizard__step--done"
                    } else {
                        "wizard__step"
                    };
                    view! {
                        <div class=class>
                            <span class="wizard__step-index">{step.index}</span>
                            <span class="wizard__step-title">{step.title}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    let fields = move || {
        let index = current_step.get();
        let step = state.with_untracked(|w| w.schema().step(index).cloned());
        step.map(|step| {
            step.fields
                .iter()
                .map(|field| render_field(state, field, select_options))
                .collect_view()
        })
    };

    let on_back = move |_| {
        state.update(|w| w.go_previous());
    };

    // Validation failures populate the per-field error map and also raise
    // a flash, so the user hears about fields scrolled out of view.
    let flash = use_flash();

    let on_next = move |_| {
        if !state.try_update(|w| w.go_next()).unwrap_or(false) {
            flash.error(VALIDATION_FLASH);
        }
    };

    let on_submit_click = move |_| {
        if state.try_update(|w| w.check_submit()).unwrap_or(false) {
            on_submit.run(());
        } else {
            flash.error(VALIDATION_FLASH);
        }
    };

    view! {
        <div class="wizard">
            <div class="wizard__stepper">{stepper}</div>

            <div class="wizard__fields">{fields}</div>

            <div class="wizard__actions">
                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || {
                            saving.get() || state.with(|w| w.is_first_step())
                        })
                        on_click=on_back
                    >
                        "Back"
                    </Button>
                    <Show
                        when=move || state.with(|w| !w.is_last_step())
                        fallback=move || {
                            let submit_label = submit_label.clone();
                            view! {
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=saving
                                    on_click=on_submit_click
                                >
                                    {submit_label}
                                </Button>
                            }
                        }
                    >
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=saving
                            on_click=on_next
                        >
                            "Next"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        disabled=saving
                        on_click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

fn render_field(
    state: RwSignal<WizardState>,
    field: &FieldSpec,
    select_options: Signal<HashMap<String, Vec<(String, String)>>>,
) -> AnyView {
    let name = field.name;
    let label = if field.is_required() {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let value = Signal::derive(move || state.with(|w| w.text(name)));
    let error = Signal::derive(move || state.with(|w| w.error(name)));
    let on_input = Callback::new(move |raw: String| {
        state.update(|w| w.set_field(FieldChange::new(name, raw)));
    });

    let has_options = select_options.with_untracked(|opts| opts.contains_key(name));

    if field.class == FieldClass::Boolean {
        let checked = Signal::derive(move || state.with(|w| w.value(name).as_bool()));
        let on_change = Callback::new(move |checked: bool| {
            state.update(|w| w.set_field(FieldChange::new(name, checked.to_string())));
        });
        return view! {
            <Checkbox label=label checked=checked on_change=on_change id=name />
        }
        .into_any();
    }

    if has_options {
        let options = Signal::derive(move || {
            select_options.with(|opts| opts.get(name).cloned().unwrap_or_default())
        });
        return view! {
            <Select
                label=label
                value=value
                options=options
                error=error
                on_change=on_input
                id=name
            />
        }
        .into_any();
    }

    view! {
        <Input
            label=label
            value=value
            input_type=input_type_for(name, field.class)
            error=error
            on_input=on_input
            id=name
        />
    }
    .into_any()
}

/// Native input type for a free-form field, inferred from its wire name.
fn input_type_for(name: &str, class: FieldClass) -> &'static str {
    if class == FieldClass::Numeric {
        return "number";
    }
    let lower = name.to_ascii_lowercase();
    if lower.contains("email") {
        "email"
    } else if lower.contains("phone") {
        "tel"
    } else if lower.contains("date") {
        "date"
    } else {
        "text"
    }
}
