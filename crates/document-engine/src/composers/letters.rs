//! Pre-suit correspondence addressed to the collector's counsel

use shared_types::{CaseFacts, DocumentKind};

use super::Body;

fn address_block(body: &mut Body, kind: DocumentKind, facts: &CaseFacts) {
    body.line(format!("RE: {}", kind.title()))
        .blank()
        .line(format!(
            "To: {} | {} | {}",
            facts.atty_name, facts.atty_address, facts.atty_phone
        ))
        .blank();
}

pub(super) fn validation(body: &mut Body, facts: &CaseFacts) {
    address_block(body, DocumentKind::ValidationLetter, facts);
    body.line("This is a request for validation under the FDCPA and any similar state law. The alleged debt is disputed.")
        .line("1) Identify the current creditor and complete chain of title from the original creditor, including each assignment and bill of sale where the specific Account is listed or referenced.")
        .line("2) Provide the signed agreement, full account‑level transaction history, and itemization of the amount claimed (principal, interest, fees).")
        .blank()
        .line("Authority & Assignment:")
        .line("3) State whether you (or your firm) are authorized by the ORIGINAL CREDITOR to collect or litigate in their name; provide the actual written authorization if so.")
        .line("4) Confirm whether an assignment notice was filed/served as required by law for any transfer of the alleged account.")
        .line("5) Identify whether any attorney was hired by a debt buyer to file suit in the original creditor’s name. If so, provide the written authorization and engagement.")
        .blank();
}

pub(super) fn verification(body: &mut Body, facts: &CaseFacts) {
    address_block(body, DocumentKind::VerificationLetter, facts);
    body.line("Provide sworn verification from a person with personal knowledge of the records, including the basis for ownership/standing.")
        .line("Attach authenticated documents sufficient for trial under the Rules of Evidence, not mere spreadsheets or summaries.");
}

#[cfg(test)]
mod tests {
    use crate::composers::compose;
    use crate::config::EngineConfig;
    use pretty_assertions::assert_eq;
    use shared_types::{CaseFacts, DocumentKind};

    fn jane() -> CaseFacts {
        CaseFacts {
            atty_name: "Jane Lawyer, Esq.".to_string(),
            atty_address: "123 Main St".to_string(),
            atty_phone: "555-0000".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validation_addressed_to_counsel() {
        let text = compose(DocumentKind::ValidationLetter, &jane(), &EngineConfig::default());
        assert!(text.starts_with("RE: Debt Validation Letter\n\nTo: Jane Lawyer, Esq. | 123 Main St | 555-0000\n\n"));
    }

    #[test]
    fn test_validation_blank_contact_keeps_separators() {
        let text = compose(
            DocumentKind::ValidationLetter,
            &CaseFacts::default(),
            &EngineConfig::default(),
        );
        assert!(text.contains("\nTo:  |  | \n"));
    }

    #[test]
    fn test_validation_without_1099c() {
        let text = compose(DocumentKind::ValidationLetter, &jane(), &EngineConfig::default());
        assert!(!text.contains("Debt Closure Doctrine:"));
        // Authority section closes with a blank line, then the signature block's own blank line.
        assert!(text.contains("engagement.\n\n\nCredSmash Signature: The alleged claim"));
    }

    #[test]
    fn test_validation_with_1099c() {
        let facts = CaseFacts {
            reported_1099c: true,
            ..jane()
        };
        let text = compose(DocumentKind::ValidationLetter, &facts, &EngineConfig::default());
        assert!(text.contains(
            "engagement.\n\nDebt Closure Doctrine:\n6) Confirm whether a Form 1099‑C was issued"
        ));
        assert!(text.contains("discharged/closed.\n\nCredSmash Signature:"));
    }

    #[test]
    fn test_validation_full_text() {
        let text = compose(DocumentKind::ValidationLetter, &jane(), &EngineConfig::default());
        assert_eq!(
            text,
            "RE: Debt Validation Letter\n\
             \n\
             To: Jane Lawyer, Esq. | 123 Main St | 555-0000\n\
             \n\
             This is a request for validation under the FDCPA and any similar state law. The alleged debt is disputed.\n\
             1) Identify the current creditor and complete chain of title from the original creditor, including each assignment and bill of sale where the specific Account is listed or referenced.\n\
             2) Provide the signed agreement, full account‑level transaction history, and itemization of the amount claimed (principal, interest, fees).\n\
             \n\
             Authority & Assignment:\n\
             3) State whether you (or your firm) are authorized by the ORIGINAL CREDITOR to collect or litigate in their name; provide the actual written authorization if so.\n\
             4) Confirm whether an assignment notice was filed/served as required by law for any transfer of the alleged account.\n\
             5) Identify whether any attorney was hired by a debt buyer to file suit in the original creditor’s name. If so, provide the written authorization and engagement.\n\
             \n\
             \n\
             CredSmash Signature: The alleged claim is disputed in its entirety pending strict proof with competent, admissible evidence establishing standing and a complete chain of title."
        );
    }

    #[test]
    fn test_validation_full_text_with_1099c() {
        let facts = CaseFacts {
            reported_1099c: true,
            ..jane()
        };
        let text = compose(DocumentKind::ValidationLetter, &facts, &EngineConfig::default());
        assert_eq!(
            text,
            "RE: Debt Validation Letter\n\
             \n\
             To: Jane Lawyer, Esq. | 123 Main St | 555-0000\n\
             \n\
             This is a request for validation under the FDCPA and any similar state law. The alleged debt is disputed.\n\
             1) Identify the current creditor and complete chain of title from the original creditor, including each assignment and bill of sale where the specific Account is listed or referenced.\n\
             2) Provide the signed agreement, full account‑level transaction history, and itemization of the amount claimed (principal, interest, fees).\n\
             \n\
             Authority & Assignment:\n\
             3) State whether you (or your firm) are authorized by the ORIGINAL CREDITOR to collect or litigate in their name; provide the actual written authorization if so.\n\
             4) Confirm whether an assignment notice was filed/served as required by law for any transfer of the alleged account.\n\
             5) Identify whether any attorney was hired by a debt buyer to file suit in the original creditor’s name. If so, provide the written authorization and engagement.\n\
             \n\
             Debt Closure Doctrine:\n\
             6) Confirm whether a Form 1099‑C was issued for this account and whether the creditor treated the account as discharged/closed.\n\
             \n\
             CredSmash Signature: The alleged claim is disputed in its entirety pending strict proof with competent, admissible evidence establishing standing and a complete chain of title."
        );
    }

    #[test]
    fn test_verification_full_text() {
        let text = compose(DocumentKind::VerificationLetter, &jane(), &EngineConfig::default());
        assert_eq!(
            text,
            "RE: Debt Verification Letter\n\
             \n\
             To: Jane Lawyer, Esq. | 123 Main St | 555-0000\n\
             \n\
             Provide sworn verification from a person with personal knowledge of the records, including the basis for ownership/standing.\n\
             Attach authenticated documents sufficient for trial under the Rules of Evidence, not mere spreadsheets or summaries.\n\
             \n\
             CredSmash Signature: Provide sworn verification by a person with personal knowledge, not a mere servicer declaration or hearsay custodian affidavit."
        );
    }

    #[test]
    fn test_verification_ignores_flags() {
        let plain = compose(DocumentKind::VerificationLetter, &jane(), &EngineConfig::default());
        let flagged = CaseFacts {
            reported_1099c: true,
            arbitration_clause: true,
            include_counterclaim: true,
            ..jane()
        };
        assert_eq!(
            plain,
            compose(DocumentKind::VerificationLetter, &flagged, &EngineConfig::default())
        );
    }
}
