//! Print-ready report export (browser print-to-PDF).
//!
//! The report is assembled as a standalone HTML document, loaded into a
//! hidden iframe and sent to the browser's print dialog. No artifact is
//! produced when any step fails.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::HtmlIFrameElement;

/// Escape text destined for report markup.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Wrap report body markup into a printable document. The title is treated
/// as plain text; the body is trusted markup the caller already escaped.
pub fn report_document(title: &str, body_html: &str) -> String {
    let title = escape_html(title);
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"><title>{title}</title>\
<style>\
body{{font-family:Arial,Helvetica,sans-serif;color:#222;margin:32px;}}\
h1{{font-size:20px;margin-bottom:4px;}}\
.report-meta{{color:#666;font-size:12px;margin-bottom:16px;}}\
table{{border-collapse:collapse;width:100%;}}\
th,td{{border:1px solid #bbb;padding:6px 10px;font-size:13px;text-align:left;}}\
th{{background:#f0f0f0;width:220px;}}\
</style></head><body>{body_html}</body></html>"
    )
}

/// Load `html` into a hidden iframe and open the print dialog.
pub fn print_document(html: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let iframe = document
        .create_element("iframe")
        .map_err(|e| format!("Failed to create iframe: {:?}", e))?
        .dyn_into::<HtmlIFrameElement>()
        .map_err(|e| format!("Failed to cast to iframe: {:?}", e))?;

    iframe
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;
    iframe.set_srcdoc(html);

    document
        .body()
        .ok_or("No body element")?
        .append_child(&iframe)
        .map_err(|e| format!("Failed to append iframe: {:?}", e))?;

    // Give the iframe a moment to parse the document before printing,
    // then remove it once the print dialog has been handed off.
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(200).await;
        match iframe.content_window() {
            Some(frame_window) => {
                if let Err(e) = frame_window.print() {
                    log::error!("print dialog failed: {:?}", e);
                }
            }
            None => log::error!("print iframe has no content window"),
        }
        TimeoutFuture::new(1000).await;
        iframe.remove();
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_embeds_title_and_body() {
        let html = report_document("Dispute DSP-001", "<h1>Dispute DSP-001</h1>");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<title>Dispute DSP-001</title>"));
        assert!(html.contains("<h1>Dispute DSP-001</h1>"));
    }

    #[test]
    fn document_title_is_escaped() {
        let html = report_document("Dispute <script>\"x\"&", "<p>body</p>");
        assert!(html.contains("<title>Dispute &lt;script&gt;&quot;x&quot;&amp;</title>"));
        assert!(!html.contains("<title>Dispute <script>"));
    }
}
