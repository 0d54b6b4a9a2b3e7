use crate::shared::icons::icon;
use leptos::prelude::*;

/// How a stat card renders its numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueFormat {
    /// Naira, compacted to "1.2M" above a million
    Money,
    /// Plain integer with thousands separators
    Integer,
    /// Fixed decimals
    Decimal(u8),
}

fn format_value(val: f64, fmt: ValueFormat) -> String {
    match fmt {
        ValueFormat::Money => {
            let abs = val.abs();
            if abs >= 1_000_000.0 {
                format!("₦{:.1}M", val / 1_000_000.0)
            } else {
                format!("₦{}", format_thousands(val.round() as i64))
            }
        }
        ValueFormat::Integer => format_thousands(val.round() as i64),
        ValueFormat::Decimal(decimals) => {
            format!("{:.prec$}", val, prec = decimals as usize)
        }
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Optional subtitle below the value
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_value(v, format),
        None => "—".to_string(),
    };

    let subtitle_view = move || {
        subtitle.get().map(|s| {
            view! { <div class="stat-card__subtitle">{s}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_compacts_above_a_million() {
        assert_eq!(format_value(2_450_000.0, ValueFormat::Money), "₦2.5M");
        assert_eq!(format_value(12_345.0, ValueFormat::Money), "₦12,345");
    }

    #[test]
    fn integer_groups_thousands() {
        assert_eq!(format_value(1_234_567.0, ValueFormat::Integer), "1,234,567");
        assert_eq!(format_value(42.0, ValueFormat::Integer), "42");
    }

    #[test]
    fn decimal_keeps_precision() {
        assert_eq!(format_value(93.456, ValueFormat::Decimal(1)), "93.5");
    }
}
