//! CSV export of table data, downloaded through the browser.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be exported as CSV rows.
pub trait CsvExportable {
    /// Column headers, in output order.
    fn headers() -> Vec<&'static str>;

    /// One CSV row for this record.
    fn to_csv_row(&self) -> Vec<String>;
}

/// Build the CSV document. Exporting an empty list is an error so no empty
/// file artifact is ever produced.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> Result<String, String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }

    let mut csv = String::new();

    // UTF-8 BOM so Excel picks the right encoding
    csv.push('\u{FEFF}');

    csv.push_str(&T::headers().join(","));
    csv.push('\n');

    for item in data {
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    Ok(csv)
}

/// Build the CSV for `data` and hand it to the browser as a download.
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let csv = build_csv(data)?;
    let blob = create_csv_blob(&csv)?;
    download_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Trigger a browser download through a temporary anchor element.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Amount"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), format!("{:.2}", self.1)]
        }
    }

    #[test]
    fn empty_export_aborts() {
        let rows: Vec<Row> = vec![];
        assert!(build_csv(&rows).is_err());
    }

    #[test]
    fn rows_are_comma_joined() {
        let rows = vec![Row("Ada", 120.0), Row("Bayo", 75.5)];
        let csv = build_csv(&rows).unwrap();
        assert!(csv.starts_with('\u{FEFF}'));
        assert!(csv.contains("Name,Amount\n"));
        assert!(csv.contains("Ada,120.00\n"));
        assert!(csv.contains("Bayo,75.50\n"));
    }

    #[test]
    fn cells_with_separators_are_quoted() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("line\nbreak"), "\"line\nbreak\"");
    }
}
