//! Debt-defense document composition
//!
//! Turns a [`CaseFacts`] record into the ordered set of plain-text
//! documents the case calls for:
//! - Pre-suit: debt validation and verification letters
//! - Post-suit: answer, admissions, production, interrogatories, and an
//!   optional counterclaim
//!
//! Composition is a pure function of the facts and the engine's
//! configuration. Nothing here performs I/O except
//! [`EngineConfig::from_file`].

pub mod clauses;
pub mod composers;
pub mod config;
pub mod error;
pub mod export;
pub mod header;
pub mod registry;
pub mod selector;

pub use clauses::{generation_rules, included_clauses, ClauseRule, CONDITIONAL_CLAUSES};
pub use config::{EngineConfig, Placeholders, Signatures};
pub use error::EngineError;
pub use export::{export_filename, ExportPayload, TEXT_MIME_TYPE};
pub use header::header_block;
pub use registry::{find_document, list_documents, DocumentInfo};
pub use selector::select_documents;

use shared_types::{CaseFacts, DocumentKind, GeneratedDocument};

/// DocumentEngine entry point
#[derive(Debug, Clone, Default)]
pub struct DocumentEngine {
    config: EngineConfig,
}

impl DocumentEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom wording; blank placeholders are rejected
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Every document the case calls for, in tab order
    pub fn compose_documents(&self, facts: &CaseFacts) -> Vec<GeneratedDocument> {
        let documents: Vec<GeneratedDocument> = select_documents(facts)
            .into_iter()
            .map(|kind| self.compose(kind, facts))
            .collect();

        tracing::debug!(
            "Composed {} documents (sued: {}, counterclaim: {})",
            documents.len(),
            facts.has_been_sued,
            facts.include_counterclaim
        );

        documents
    }

    /// A single document, whether or not the case status selects it
    pub fn compose(&self, kind: DocumentKind, facts: &CaseFacts) -> GeneratedDocument {
        GeneratedDocument::new(kind.title(), composers::compose(kind, facts, &self.config))
    }
}

/// Compose with the built-in wording
pub fn compose_documents(facts: &CaseFacts) -> Vec<GeneratedDocument> {
    DocumentEngine::new().compose_documents(facts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_titles_follow_selector() {
        let facts = CaseFacts {
            has_been_sued: true,
            include_counterclaim: true,
            ..Default::default()
        };
        let titles: Vec<String> = compose_documents(&facts)
            .into_iter()
            .map(|d| d.title)
            .collect();
        let expected: Vec<&str> = select_documents(&facts).iter().map(|k| k.title()).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_engine_uses_configured_signatures() {
        let config = EngineConfig::from_str(
            r#"
            [signatures]
            validation = "Sent certified mail."
            "#,
        )
        .unwrap();
        let engine = DocumentEngine::with_config(config).unwrap();
        let docs = engine.compose_documents(&CaseFacts::default());

        assert!(docs[0].body.ends_with("\n\nSent certified mail."));
        assert!(docs[1].body.ends_with(&Signatures::default().verification));
    }

    #[test]
    fn test_engine_rejects_blank_placeholders() {
        let config = EngineConfig {
            placeholders: Placeholders {
                unknown: String::new(),
                facts: String::new(),
            },
            ..Default::default()
        };

        let result = DocumentEngine::with_config(config);
        assert!(matches!(result, Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_engine_rejects_whitespace_placeholder() {
        let config = EngineConfig {
            placeholders: Placeholders {
                facts: "   ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            DocumentEngine::with_config(config).unwrap_err(),
            EngineError::InvalidConfig("placeholders.facts must not be blank".to_string())
        );
    }

    #[test]
    fn test_compose_single_off_track_document() {
        let doc = DocumentEngine::new().compose(DocumentKind::Counterclaim, &CaseFacts::default());
        assert_eq!(doc.title, "Counterclaim");
        assert!(doc.body.contains("DEFENDANT’S COUNTERCLAIM"));
    }
}
