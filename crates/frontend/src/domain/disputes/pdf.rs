//! Printable dispute report, exported through the browser's print-to-PDF.

use contracts::domain::dispute::Dispute;

use crate::shared::date_utils::{format_datetime, format_money};
use crate::shared::print_export::{escape_html, print_document, report_document};

/// Assemble the report body and hand it to the print pipeline.
pub fn export_dispute_pdf(dispute: &Dispute) -> Result<(), String> {
    let title = format!("Dispute {}", dispute.reference);
    let html = report_document(&title, &dispute_report_body(dispute));
    print_document(&html)
}

fn dispute_report_body(d: &Dispute) -> String {
    let mut rows = vec![
        ("Reference", escape_html(&d.reference)),
        ("Account number", escape_html(&d.account_number)),
        ("Customer", escape_html(&d.customer_name)),
        ("Category", d.category.label().to_string()),
        ("Status", d.status.label().to_string()),
        ("Amount disputed", format_money(d.amount_disputed)),
        ("Opened", format_datetime(&d.opened_at)),
    ];
    if let Some(resolved_at) = &d.resolved_at {
        rows.push(("Resolved", format_datetime(resolved_at)));
    }
    rows.push(("Description", escape_html(&d.description)));
    if let Some(note) = &d.resolution_note {
        rows.push(("Resolution note", escape_html(note)));
    }

    let table_rows: String = rows
        .iter()
        .map(|(label, value)| format!("<tr><th>{}</th><td>{}</td></tr>", label, value))
        .collect();

    format!(
        "<h1>Dispute {}</h1>\
<div class=\"report-meta\">Billing dispute report</div>\
<table>{}</table>",
        escape_html(&d.reference),
        table_rows
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::{DisputeId, EntityId};
    use contracts::domain::dispute::{DisputeCategory, DisputeStatus};

    fn sample() -> Dispute {
        Dispute {
            id: DisputeId::from_string("4f5a2b68-8e2e-4d77-9c6d-0b5a7f3d2e10").unwrap(),
            reference: "DSP-0042".to_string(),
            account_number: "ACC-99021".to_string(),
            customer_name: "Jane <Doe>".to_string(),
            category: DisputeCategory::Overbilling,
            status: DisputeStatus::UnderReview,
            amount_disputed: 15_250.0,
            description: "Charged twice & over tariff".to_string(),
            resolution_note: None,
            opened_at: chrono::Utc::now(),
            resolved_at: None,
        }
    }

    #[test]
    fn report_escapes_user_text() {
        let body = dispute_report_body(&sample());
        assert!(body.contains("Jane &lt;Doe&gt;"));
        assert!(body.contains("Charged twice &amp; over tariff"));
        assert!(!body.contains("<Doe>"));
    }

    #[test]
    fn report_title_escapes_reference() {
        let mut d = sample();
        d.reference = "DSP-<0042>&".to_string();
        let html = report_document(
            &format!("Dispute {}", d.reference),
            &dispute_report_body(&d),
        );
        assert!(html.contains("<title>Dispute DSP-&lt;0042&gt;&amp;</title>"));
    }

    #[test]
    fn report_includes_key_fields() {
        let body = dispute_report_body(&sample());
        assert!(body.contains("DSP-0042"));
        assert!(body.contains("Under review"));
        assert!(body.contains("₦15,250.00"));
        // unresolved dispute carries no resolution rows
        assert!(!body.contains("Resolution note"));
    }
}
