/// Utilities for date, time and money formatting.
///
/// Dates travel as ISO strings (`YYYY-MM-DD`, optionally with a `T...`
/// time part); display format is `DD/MM/YYYY`.
use chrono::{DateTime, Duration, Utc};

/// "2026-08-23" or "2026-08-23T14:02:26Z" -> "23/08/2026"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// "23/08/2026 14:02" for timestamps coming off the API.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%d/%m/%Y %H:%M").to_string()
}

/// Today as an ISO date string.
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// `days` before today as an ISO date string.
pub fn days_back_iso(days: i64) -> String {
    (Utc::now().date_naive() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// Naira amount with thousands separators and two decimals.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let abs = amount.abs();
    let whole = abs.trunc() as i64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as i64;

    // carry from rounding .995 and up
    let (whole, cents) = if cents == 100 { (whole + 1, 0) } else { (whole, cents) };

    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}₦{}.{:02}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-08-23"), "23/08/2026");
        assert_eq!(format_date("2026-08-23T14:02:26Z"), "23/08/2026");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "₦0.00");
        assert_eq!(format_money(1234.5), "₦1,234.50");
        assert_eq!(format_money(1_000_000.0), "₦1,000,000.00");
        assert_eq!(format_money(-250.75), "-₦250.75");
        assert_eq!(format_money(9.995), "₦10.00");
    }

    #[test]
    fn test_days_back_is_before_today() {
        assert!(days_back_iso(30) < today_iso());
        assert_eq!(days_back_iso(0), today_iso());
    }
}
