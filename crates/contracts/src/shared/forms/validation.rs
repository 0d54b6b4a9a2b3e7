use super::wizard::FieldValue;

/// Data-driven validation rules attached to a form field.
///
/// `Phone` and `Email` only fire on non-blank text; presence is owned by
/// `Required` so a field can be optional but still format-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Text must be non-blank.
    Required,
    /// 11-digit local subscriber number, leading zero (e.g. 08031234567).
    Phone,
    /// Minimal structural check: one `@`, dotted domain.
    Email,
    /// Foreign-key select: the placeholder option serializes as 0.
    NonZeroSelect,
    /// Text must be at least this many characters after trimming.
    MinLength(usize),
}

impl Rule {
    /// Check `value` against the rule. Returns the user-facing error
    /// message on failure, `None` when the rule passes.
    pub fn check(&self, value: &FieldValue, label: &str) -> Option<String> {
        match self {
            Rule::Required => {
                if value.is_blank() {
                    Some(format!("{} is required", label))
                } else {
                    None
                }
            }
            Rule::Phone => {
                let text = value.as_text().trim();
                if text.is_empty() || is_valid_phone(text) {
                    None
                } else {
                    Some(format!("{} must be a valid phone number", label))
                }
            }
            Rule::Email => {
                let text = value.as_text().trim();
                if text.is_empty() || is_valid_email(text) {
                    None
                } else {
                    Some(format!("{} must be a valid email address", label))
                }
            }
            Rule::NonZeroSelect => {
                if value.as_number() == 0.0 {
                    Some(format!("{} is required", label))
                } else {
                    None
                }
            }
            Rule::MinLength(min) => {
                let text = value.as_text().trim();
                if !text.is_empty() && text.chars().count() < *min {
                    Some(format!("{} must be at least {} characters", label, min))
                } else {
                    None
                }
            }
        }
    }
}

fn is_valid_phone(s: &str) -> bool {
    let digits: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    digits.len() == 11 && digits.starts_with('0') && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_text() {
        let v = FieldValue::Text("   ".to_string());
        assert_eq!(
            Rule::Required.check(&v, "Full name"),
            Some("Full name is required".to_string())
        );
        let v = FieldValue::Text("Jane Doe".to_string());
        assert_eq!(Rule::Required.check(&v, "Full name"), None);
    }

    #[test]
    fn phone_rule_accepts_local_msisdn() {
        let ok = FieldValue::Text("08031234567".to_string());
        assert_eq!(Rule::Phone.check(&ok, "Phone number"), None);

        for bad in ["0803123456", "8031234567", "0803123456a", "080312345678"] {
            let v = FieldValue::Text(bad.to_string());
            assert!(Rule::Phone.check(&v, "Phone number").is_some(), "{}", bad);
        }
    }

    #[test]
    fn phone_rule_skips_blank() {
        // presence is Required's job
        let v = FieldValue::Text(String::new());
        assert_eq!(Rule::Phone.check(&v, "Phone number"), None);
    }

    #[test]
    fn email_rule_checks_structure() {
        let ok = FieldValue::Text("a@b.com".to_string());
        assert_eq!(Rule::Email.check(&ok, "Email"), None);

        for bad in ["a.b.com", "@b.com", "a@bcom", "a@b@c.com", "a@.com"] {
            let v = FieldValue::Text(bad.to_string());
            assert!(Rule::Email.check(&v, "Email").is_some(), "{}", bad);
        }
    }

    #[test]
    fn non_zero_select_rejects_placeholder() {
        assert!(Rule::NonZeroSelect
            .check(&FieldValue::Number(0.0), "Area office")
            .is_some());
        assert_eq!(
            Rule::NonZeroSelect.check(&FieldValue::Number(3.0), "Area office"),
            None
        );
    }

    #[test]
    fn min_length_ignores_blank() {
        assert_eq!(
            Rule::MinLength(6).check(&FieldValue::Text(String::new()), "Meter number"),
            None
        );
        assert!(Rule::MinLength(6)
            .check(&FieldValue::Text("123".to_string()), "Meter number")
            .is_some());
    }
}
