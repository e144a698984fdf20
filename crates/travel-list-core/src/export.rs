//! List Export
//!
//! Text renderings of the list and the collaborator seams the UI plugs the
//! browser into (PDF library, `navigator.share`, `mailto:` navigation).

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::config::ListConfig;
use crate::error::{ExportError, ExportResult};
use crate::item::Item;

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ========================
// Collaborators
// ========================

/// Document handed to a `DocumentSink`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintableDocument {
    pub title: String,
    pub lines: Vec<String>,
    pub file_name: String,
}

/// Renders and saves a document (PDF in the browser)
pub trait DocumentSink {
    fn save(&self, document: &PrintableDocument) -> ExportResult<()>;
}

/// Share sheet payload; serialized as the `navigator.share` data object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

/// Platform share capability, which may be missing
pub trait ShareTarget {
    fn is_available(&self) -> bool;

    /// Start sharing. Asynchronous failures are the implementation's to log.
    fn share(&self, payload: SharePayload) -> ExportResult<()>;
}

/// Opens a `mailto:` URI
pub trait MailNavigator {
    fn navigate(&self, uri: &str) -> ExportResult<()>;
}

// ========================
// Text Rendering
// ========================

/// `"{quantity} x {description}"`
pub fn item_line(item: &Item) -> String {
    item.label()
}

fn lines(items: &[Item]) -> Vec<String> {
    items.iter().map(item_line).collect()
}

pub fn share_text(items: &[Item]) -> String {
    format!("Check out my travel list: {}", lines(items).join(", "))
}

pub fn email_body(title: &str, items: &[Item]) -> String {
    let mut body = format!("{}:", title);
    for line in lines(items) {
        body.push('\n');
        body.push_str(&line);
    }
    body
}

/// `mailto:` link with encoded subject and one body line per item
pub fn mailto_link(subject: &str, items: &[Item]) -> String {
    format!(
        "mailto:?subject={}&body={}",
        utf8_percent_encode(subject, URI_COMPONENT),
        utf8_percent_encode(&email_body(subject, items), URI_COMPONENT)
    )
}

// ========================
// Export Actions
// ========================

pub fn export_pdf(sink: &dyn DocumentSink, config: &ListConfig, items: &[Item]) -> ExportResult<()> {
    let document = PrintableDocument {
        title: config.title.clone(),
        lines: lines(items),
        file_name: config.pdf_file_name.clone(),
    };
    sink.save(&document)?;
    tracing::info!(file = %document.file_name, items = items.len(), "list exported");
    Ok(())
}

pub fn share_list(target: &dyn ShareTarget, config: &ListConfig, items: &[Item]) -> ExportResult<()> {
    if !target.is_available() {
        return Err(ExportError::unsupported("Sharing"));
    }
    target.share(SharePayload {
        title: config.title.clone(),
        text: share_text(items),
    })
}

pub fn send_email(nav: &dyn MailNavigator, config: &ListConfig, items: &[Item]) -> ExportResult<()> {
    nav.navigate(&mailto_link(&config.title, items))
}
