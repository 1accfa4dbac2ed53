//! Stateful wizard session
//!
//! Holds the current case facts and the document list derived from them,
//! so JavaScript only forwards input events and renders what it is given.

use document_engine::{export_filename, DocumentEngine, EngineConfig};
use shared_types::{CaseFacts, GeneratedDocument, StrategyFlag, TextField};
use wasm_bindgen::prelude::*;

use crate::export;

/// Form state plus the documents composed from it
#[wasm_bindgen]
pub struct WizardSession {
    engine: DocumentEngine,
    facts: CaseFacts,
    documents: Vec<GeneratedDocument>,
    active: usize,
}

impl WizardSession {
    fn from_engine(engine: DocumentEngine) -> Self {
        let facts = CaseFacts::default();
        let documents = engine.compose_documents(&facts);
        Self {
            engine,
            facts,
            documents,
            active: 0,
        }
    }

    /// Parse a TOML configuration and start a session with it (testable without JsValue)
    fn with_config_internal(config_toml: &str) -> Result<Self, String> {
        let config = EngineConfig::from_str(config_toml).map_err(|e| format!("{:#}", e))?;
        let engine = DocumentEngine::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self::from_engine(engine))
    }

    /// Swap in new facts and recompute every document
    fn replace_facts(&mut self, facts: CaseFacts) {
        self.facts = facts;
        self.documents = self.engine.compose_documents(&self.facts);

        // Keep the selection valid when the counterclaim or the suit toggle shrinks the list
        if self.active >= self.documents.len() {
            self.active = self.documents.len().saturating_sub(1);
        }
    }

    fn set_text_internal(&mut self, key: &str, value: &str) -> Result<(), String> {
        let field: TextField = key.parse().map_err(|e| format!("{}", e))?;
        let next = self.facts.with_text(field, value);
        self.replace_facts(next);
        Ok(())
    }

    fn set_flag_internal(&mut self, key: &str, on: bool) -> Result<(), String> {
        let flag: StrategyFlag = key.parse().map_err(|e| format!("{}", e))?;
        let next = self.facts.with_flag(flag, on);
        self.replace_facts(next);
        Ok(())
    }

    fn set_active_internal(&mut self, index: usize) -> Result<(), String> {
        if index >= self.documents.len() {
            return Err(format!(
                "Document index {} out of bounds ({} documents)",
                index,
                self.documents.len()
            ));
        }
        self.active = index;
        Ok(())
    }

    fn active_document(&self) -> Option<&GeneratedDocument> {
        self.documents.get(self.active)
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WizardSession {
    /// Start a session with the built-in wording
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_engine(DocumentEngine::new())
    }

    /// Start a session with signature and placeholder overrides (TOML)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_toml: &str) -> Result<WizardSession, JsValue> {
        Self::with_config_internal(config_toml).map_err(|e| JsValue::from_str(&e))
    }

    /// Update a text input by its form key, e.g. `plaintiffName`
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, key: &str, value: &str) -> Result<(), JsValue> {
        self.set_text_internal(key, value).map_err(|e| JsValue::from_str(&e))
    }

    /// Update a toggle by its form key, e.g. `hasBeenSued`
    #[wasm_bindgen(js_name = setFlag)]
    pub fn set_flag(&mut self, key: &str, on: bool) -> Result<(), JsValue> {
        self.set_flag_internal(key, on).map_err(|e| JsValue::from_str(&e))
    }

    /// Replace the whole form from a JS object; missing keys take defaults
    #[wasm_bindgen(js_name = setFacts)]
    pub fn set_facts(&mut self, facts: JsValue) -> Result<(), JsValue> {
        let facts: CaseFacts = serde_wasm_bindgen::from_value(facts)
            .map_err(|e| JsValue::from_str(&format!("Invalid case facts: {}", e)))?;
        self.replace_facts(facts);
        Ok(())
    }

    /// Current form state as a JS object
    #[wasm_bindgen]
    pub fn facts(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.facts)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Clear the form back to its initial state
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.replace_facts(CaseFacts::default());
        self.active = 0;
    }

    /// All documents as `[{ title, body }]`
    #[wasm_bindgen]
    pub fn documents(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.documents)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Tab titles in order
    #[wasm_bindgen]
    pub fn titles(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.title.clone()).collect()
    }

    #[wasm_bindgen(getter, js_name = activeIndex)]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[wasm_bindgen(js_name = setActive)]
    pub fn set_active(&mut self, index: usize) -> Result<(), JsValue> {
        self.set_active_internal(index).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = activeTitle)]
    pub fn active_title(&self) -> String {
        self.active_document()
            .map(|d| d.title.clone())
            .unwrap_or_default()
    }

    /// Body of the selected tab, verbatim
    #[wasm_bindgen(js_name = activeBody)]
    pub fn active_body(&self) -> String {
        self.active_document()
            .map(|d| d.body.clone())
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = activeFilename)]
    pub fn active_filename(&self) -> String {
        export_filename(&self.active_title())
    }

    /// Download the selected document as a `.txt` file
    #[wasm_bindgen(js_name = downloadActive)]
    pub fn download_active(&self) -> Result<(), JsValue> {
        export::download_text(&self.active_filename(), &self.active_body())
    }

    /// Copy the selected document's body to the clipboard
    #[wasm_bindgen(js_name = copyActive)]
    pub fn copy_active(&self) -> js_sys::Promise {
        let body = self.active_body();
        wasm_bindgen_futures::future_to_promise(async move {
            export::copy_to_clipboard(&body).await?;
            Ok(JsValue::UNDEFINED)
        })
    }
}
