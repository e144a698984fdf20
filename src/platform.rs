//! Browser Collaborators
//!
//! Frontend bindings for the export targets: jsPDF (loaded by index.html),
//! `navigator.share` and `window.location`.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use travel_list_core::{
    DocumentSink, ExportError, ExportResult, ListConfig, MailNavigator, PrintableDocument,
    SharePayload, ShareTarget,
};

#[wasm_bindgen(js_namespace = jspdf)]
extern "C" {
    #[wasm_bindgen(js_name = jsPDF)]
    type JsPdf;

    #[wasm_bindgen(constructor, js_class = "jsPDF", catch)]
    fn new() -> Result<JsPdf, JsValue>;

    #[wasm_bindgen(method)]
    fn text(this: &JsPdf, text: &str, x: f64, y: f64);

    #[wasm_bindgen(method, catch)]
    fn save(this: &JsPdf, file_name: &str) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = navigator, js_name = share, catch)]
    fn navigator_share(data: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

/// Element id of the optional JSON config block in index.html
const CONFIG_ELEMENT_ID: &str = "travel-list-config";

// PDF layout, in jsPDF user units (mm)
const PDF_MARGIN_X: f64 = 10.0;
const PDF_TITLE_Y: f64 = 10.0;
const PDF_FIRST_LINE_Y: f64 = 20.0;
const PDF_LINE_HEIGHT: f64 = 10.0;

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

// ========================
// PDF
// ========================

pub struct BrowserDocument;

impl DocumentSink for BrowserDocument {
    fn save(&self, document: &PrintableDocument) -> ExportResult<()> {
        let pdf = JsPdf::new().map_err(|err| {
            tracing::warn!(error = %js_error(&err), "jsPDF unavailable");
            ExportError::unsupported("PDF export")
        })?;

        pdf.text(&document.title, PDF_MARGIN_X, PDF_TITLE_Y);
        for (index, line) in document.lines.iter().enumerate() {
            let y = PDF_FIRST_LINE_Y + index as f64 * PDF_LINE_HEIGHT;
            pdf.text(line, PDF_MARGIN_X, y);
        }
        pdf.save(&document.file_name)
            .map(|_| ())
            .map_err(|err| ExportError::external("PDF export", js_error(&err)))
    }
}

// ========================
// Share
// ========================

pub struct BrowserShare;

impl ShareTarget for BrowserShare {
    fn is_available(&self) -> bool {
        web_sys::window()
            .map(|window| window.navigator())
            .and_then(|navigator| js_sys::Reflect::has(&navigator, &JsValue::from_str("share")).ok())
            .unwrap_or(false)
    }

    fn share(&self, payload: SharePayload) -> ExportResult<()> {
        let data = serde_wasm_bindgen::to_value(&payload)
            .map_err(|err| ExportError::external("share", err.to_string()))?;
        let promise = navigator_share(&data)
            .map_err(|err| ExportError::external("share", js_error(&err)))?;

        // Rejection (user cancelled, permission denied) leaves the list alone
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                tracing::warn!(error = %js_error(&err), "share rejected");
            }
        });
        Ok(())
    }
}

// ========================
// Email
// ========================

pub struct BrowserMail;

impl MailNavigator for BrowserMail {
    fn navigate(&self, uri: &str) -> ExportResult<()> {
        let window = web_sys::window().ok_or_else(|| ExportError::unsupported("Email"))?;
        window
            .location()
            .set_href(uri)
            .map_err(|err| ExportError::external("email", js_error(&err)))
    }
}

// ========================
// Config
// ========================

/// Read the config override from the page, falling back to defaults
pub fn load_config() -> ListConfig {
    let json = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match json {
        Some(json) if !json.trim().is_empty() => ListConfig::from_json(&json).unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid travel list config, using defaults");
            ListConfig::default()
        }),
        _ => ListConfig::default(),
    }
}
