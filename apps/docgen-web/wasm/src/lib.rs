//! WASM bindings for the debt-defense document wizard
//!
//! Case facts and the composed documents live in Rust; JavaScript
//! binds form inputs and renders tabs.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WizardSession } from './pkg/docgen_wasm.js';
//!
//! await init();
//!
//! const session = new WizardSession();
//! session.setText("plaintiffName", "CAPITAL ONE, N.A.");
//! session.setFlag("hasBeenSued", true);
//! renderTabs(session.titles(), session.activeIndex);
//! renderBody(session.activeBody());
//!
//! session.setActive(1);
//! session.downloadActive();        // Requests_for_Admission.txt
//! await session.copyActive();
//! ```

pub mod export;
pub mod session;

use shared_types::CaseFacts;
use wasm_bindgen::prelude::*;

pub use session::WizardSession;

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Docgen WASM initialized".into());
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Stateless composition: facts object in, `[{ title, body }]` out
#[wasm_bindgen(js_name = composeDocuments)]
pub fn compose_documents(facts: JsValue) -> Result<JsValue, JsValue> {
    let facts: CaseFacts = serde_wasm_bindgen::from_value(facts)
        .map_err(|e| JsValue::from_str(&format!("Invalid case facts: {}", e)))?;
    let documents = document_engine::compose_documents(&facts);

    serde_wasm_bindgen::to_value(&documents)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Download filename for a document title
#[wasm_bindgen(js_name = exportFilename)]
pub fn export_filename(title: &str) -> String {
    document_engine::export_filename(title)
}

/// Bullet list explaining which documents and clauses get generated
#[wasm_bindgen(js_name = generationRules)]
pub fn generation_rules() -> Vec<String> {
    document_engine::generation_rules()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Metadata for every document type
#[wasm_bindgen(js_name = listDocuments)]
pub fn list_documents() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&document_engine::list_documents())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Ids of the conditional paragraphs a document would contain for these facts
#[wasm_bindgen(js_name = includedClauses)]
pub fn included_clauses(slug: &str, facts: JsValue) -> Result<Vec<String>, JsValue> {
    let kind =
        document_engine::find_document(slug).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let facts: CaseFacts = serde_wasm_bindgen::from_value(facts)
        .map_err(|e| JsValue::from_str(&format!("Invalid case facts: {}", e)))?;

    Ok(document_engine::included_clauses(kind, &facts)
        .into_iter()
        .map(str::to_string)
        .collect())
}

/// Save arbitrary text as a file (for callers not using a session)
#[wasm_bindgen(js_name = downloadText)]
pub fn download_text(filename: &str, text: &str) -> Result<(), JsValue> {
    export::download_text(filename, text)
}

/// Copy arbitrary text to the clipboard
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        export::copy_to_clipboard(&text).await?;
        Ok(JsValue::UNDEFINED)
    })
}


#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use shared_types::GeneratedDocument;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_compose_documents_from_js_object() {
        let facts = CaseFacts {
            has_been_sued: true,
            include_counterclaim: true,
            ..Default::default()
        };
        let input = serde_wasm_bindgen::to_value(&facts).unwrap();

        let output = compose_documents(input).unwrap();
        let documents: Vec<GeneratedDocument> = serde_wasm_bindgen::from_value(output).unwrap();

        assert_eq!(documents.len(), 5);
        assert_eq!(documents[4].title, "Counterclaim");
    }

    #[wasm_bindgen_test]
    fn test_session_set_facts_accepts_partial_object() {
        let partial = js_sys::Object::new();
        js_sys::Reflect::set(&partial, &"hasBeenSued".into(), &JsValue::TRUE).unwrap();

        let mut session = WizardSession::new();
        session.set_facts(partial.into()).unwrap();

        assert_eq!(session.titles().len(), 4);
        assert!(session.active_body().contains("Case No.: [TBD]"));
    }

    #[wasm_bindgen_test]
    fn test_included_clauses_for_answer() {
        let facts = CaseFacts {
            has_been_sued: true,
            assignment_notice_filed: true,
            atty_authorized_by_original_creditor: true,
            arbitration_clause: true,
            ..Default::default()
        };
        let input = serde_wasm_bindgen::to_value(&facts).unwrap();

        let ids = included_clauses("answer", input).unwrap();
        assert_eq!(ids, vec!["answer_arbitration".to_string()]);
        assert!(included_clauses("motion", JsValue::NULL).is_err());
    }

    #[wasm_bindgen_test]
    fn test_compose_documents_rejects_non_object() {
        assert!(compose_documents(JsValue::from_f64(42.0)).is_err());
    }
}
