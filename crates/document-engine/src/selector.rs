//! Decides which documents a case needs

use shared_types::{CaseFacts, DocumentKind};

const PRE_SUIT: [DocumentKind; 2] = [
    DocumentKind::ValidationLetter,
    DocumentKind::VerificationLetter,
];

const POST_SUIT: [DocumentKind; 4] = [
    DocumentKind::Answer,
    DocumentKind::RequestsForAdmission,
    DocumentKind::RequestsForProduction,
    DocumentKind::Interrogatories,
];

/// Ordered document set for the case's current status.
///
/// Before suit only the two letters apply and `include_counterclaim` is
/// ignored. After suit the four base filings always apply, with the
/// counterclaim appended when requested.
pub fn select_documents(facts: &CaseFacts) -> Vec<DocumentKind> {
    if !facts.has_been_sued {
        return PRE_SUIT.to_vec();
    }

    let mut kinds = POST_SUIT.to_vec();
    if facts.include_counterclaim {
        kinds.push(DocumentKind::Counterclaim);
    }
    kinds
}
