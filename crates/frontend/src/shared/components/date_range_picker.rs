use crate::shared::date_utils::{days_back_iso, today_iso};
use leptos::prelude::*;
use thaw::*;

/// DateRangePicker component - a from/to date pair with quick-range buttons.
///
/// Values travel as `yyyy-mm-dd` strings, the same shape the
/// `StartDateUtc`/`EndDateUtc` query parameters expect.
#[component]
pub fn DateRangePicker(
    /// "from" date in yyyy-mm-dd format
    #[prop(into)]
    date_from: Signal<String>,

    /// "to" date in yyyy-mm-dd format
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback when the range changes (from, to)
    on_change: Callback<(String, String)>,

    /// Optional label above the picker
    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        let current_to = date_to.get_untracked();
        on_change.run((new_from, current_to));
    };

    let on_to_change = move |new_to: String| {
        let current_from = date_from.get_untracked();
        on_change.run((current_from, new_to));
    };

    let set_last_days = move |days: i64| {
        on_change.run((days_back_iso(days), today_iso()));
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! {
                <Label>{l}</Label>
            })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_from
                    on:input=move |ev| {
                        on_from_change(event_target_value(&ev));
                    }
                />

                <div>"-"</div>

                <input
                    type="date"
                    class="date-range-picker__input"
                    prop:value=date_to
                    on:input=move |ev| {
                        on_to_change(event_target_value(&ev));
                    }
                />

                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| set_last_days(7)
                    >
                        "7D"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| set_last_days(30)
                    >
                        "30D"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| set_last_days(90)
                    >
                        "90D"
                    </Button>
                </ButtonGroup>
            </Flex>
        </Flex>
    }
}
