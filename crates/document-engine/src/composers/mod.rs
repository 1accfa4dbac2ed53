//! Body composers, one per document type
//!
//! Every body is built line by line: fixed lead-in, fixed numbered
//! paragraphs, whatever conditional rows fire, a blank line, then the
//! document's signature sentence.

mod discovery;
mod letters;
mod pleadings;

use shared_types::{CaseFacts, DocumentKind};

use crate::clauses;
use crate::config::EngineConfig;

/// Render the body text of one document
pub fn compose(kind: DocumentKind, facts: &CaseFacts, config: &EngineConfig) -> String {
    let mut body = Body::default();
    match kind {
        DocumentKind::ValidationLetter => letters::validation(&mut body, facts),
        DocumentKind::VerificationLetter => letters::verification(&mut body, facts),
        DocumentKind::Answer => pleadings::answer(&mut body, facts, config),
        DocumentKind::Counterclaim => pleadings::counterclaim(&mut body, facts, config),
        DocumentKind::RequestsForAdmission => discovery::admissions(&mut body, facts, config),
        DocumentKind::RequestsForProduction => discovery::productions(&mut body, facts, config),
        DocumentKind::Interrogatories => discovery::interrogatories(&mut body, facts, config),
    }

    body.conditional(kind, facts);
    body.blank();
    body.line(config.signatures.for_kind(kind));
    body.finish()
}

/// Line accumulator joined with `\n`
#[derive(Debug, Default)]
pub(crate) struct Body {
    lines: Vec<String>,
}

impl Body {
    pub(crate) fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.lines.push(text.into());
        self
    }

    pub(crate) fn blank(&mut self) -> &mut Self {
        self.line(String::new())
    }

    pub(crate) fn lines(&mut self, texts: &[&str]) -> &mut Self {
        self.lines.extend(texts.iter().map(|t| t.to_string()));
        self
    }

    fn conditional(&mut self, kind: DocumentKind, facts: &CaseFacts) {
        for rule in clauses::applicable(kind, facts) {
            self.lines(rule.lines);
        }
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}
