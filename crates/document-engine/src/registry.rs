//! Document registry and metadata

use serde::{Deserialize, Serialize};
use shared_types::{DocumentKind, Track};

use crate::clauses::conditional_flags;
use crate::error::EngineError;

/// Information about a document the engine can generate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInfo {
    /// Stable identifier
    pub slug: String,
    /// Tab title
    pub title: String,
    pub track: Track,
    /// Form keys of the flags that add or drop paragraphs
    pub conditional_flags: Vec<String>,
    /// Human-readable description
    pub description: String,
}

/// List every document type, pre-suit first
pub fn list_documents() -> Vec<DocumentInfo> {
    DocumentKind::ALL
        .iter()
        .map(|kind| DocumentInfo {
            slug: kind.slug().to_string(),
            title: kind.title().to_string(),
            track: kind.track(),
            conditional_flags: conditional_flags(*kind)
                .iter()
                .map(|flag| flag.key().to_string())
                .collect(),
            description: describe(*kind).to_string(),
        })
        .collect()
}

/// Resolve a slug such as `requests_for_admission`
pub fn find_document(slug: &str) -> Result<DocumentKind, EngineError> {
    DocumentKind::ALL
        .iter()
        .copied()
        .find(|kind| kind.slug() == slug)
        .ok_or_else(|| EngineError::UnknownDocument(slug.to_string()))
}

fn describe(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::ValidationLetter => {
            "FDCPA validation request disputing the debt and demanding chain of title"
        }
        DocumentKind::VerificationLetter => {
            "Demand for sworn verification from a witness with personal knowledge"
        }
        DocumentKind::Answer => "Answer with general denial and flag-driven affirmative defenses",
        DocumentKind::RequestsForAdmission => "First requests for admission on standing and ownership",
        DocumentKind::RequestsForProduction => {
            "First request for production of chain of title and account records"
        }
        DocumentKind::Interrogatories => {
            "First set of interrogatories on custodians, documents, and authority"
        }
        DocumentKind::Counterclaim => "UDAP and FDCPA counterclaim with fact-driven allegations",
    }
}
