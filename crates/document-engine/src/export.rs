//! What the export collaborator receives for the selected document

use serde::{Deserialize, Serialize};
use shared_types::GeneratedDocument;

use crate::header::WHITESPACE_RUN;

pub const TEXT_MIME_TYPE: &str = "text/plain;charset=utf-8";

/// Download filename for a document title: whitespace runs become `_`,
/// `.txt` is appended, and an empty title falls back to `document`.
pub fn export_filename(title: &str) -> String {
    let stem = WHITESPACE_RUN.replace_all(title, "_");
    if stem.is_empty() {
        "document.txt".to_string()
    } else {
        format!("{}.txt", stem)
    }
}

/// File download request handed to the browser layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPayload {
    pub filename: String,
    pub mime_type: String,
    pub body: String,
}

impl From<&GeneratedDocument> for ExportPayload {
    fn from(document: &GeneratedDocument) -> Self {
        Self {
            filename: export_filename(&document.title),
            mime_type: TEXT_MIME_TYPE.to_string(),
            body: document.body.clone(),
        }
    }
}
