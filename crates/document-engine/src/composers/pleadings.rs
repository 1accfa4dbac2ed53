use shared_types::CaseFacts;

use super::Body;
use crate::config::EngineConfig;
use crate::header::{header_block_with, or_placeholder};

pub(super) fn answer(body: &mut Body, facts: &CaseFacts, config: &EngineConfig) {
    body.line(header_block_with(facts, &config.placeholders))
        .line("DEFENDANT’S ANSWER")
        .blank()
        .line("1. Defendant denies each and every material allegation not expressly admitted herein.")
        .line("2. Plaintiff lacks standing absent a complete chain of title and admissible proof of ownership.");
}

pub(super) fn counterclaim(body: &mut Body, facts: &CaseFacts, config: &EngineConfig) {
    body.line(header_block_with(facts, &config.placeholders))
        .line("DEFENDANT’S COUNTERCLAIM")
        .blank()
        .line("Count I – Unfair or Deceptive Practices (UDAP)")
        .line("Count II – FDCPA Violations (where applicable)")
        .line(format!(
            "Facts: {}",
            or_placeholder(&facts.facts, &config.placeholders.facts)
        ));
}

#[cfg(test)]
mod tests {
    use crate::composers::compose;
    use crate::config::EngineConfig;
    use pretty_assertions::assert_eq;
    use shared_types::{CaseFacts, DocumentKind};

    const ARBITRATION: &str = "3. Affirmative Defense – Arbitration:";
    const ASSIGNMENT: &str = "4. Affirmative Defense – Assignment/Notice:";
    const AUTHORITY: &str = "5. Affirmative Defense – Authority:";
    const DEBT_CLOSURE: &str = "6. Affirmative Defense – Debt Closure:";

    fn sued() -> CaseFacts {
        CaseFacts {
            has_been_sued: true,
            plaintiff_name: "CAPITAL ONE, N.A.".to_string(),
            defendant_name: "John Doe".to_string(),
            ..Default::default()
        }
    }

    fn answer(facts: &CaseFacts) -> String {
        compose(DocumentKind::Answer, facts, &EngineConfig::default())
    }

    #[test]
    fn test_answer_heading_follows_caption() {
        let text = answer(&sued());
        assert!(text.contains("Filed: [TBD]\n\nDEFENDANT’S ANSWER\n\n1. Defendant denies"));
    }

    #[test]
    fn test_answer_arbitration_only() {
        let facts = CaseFacts {
            arbitration_clause: true,
            assignment_notice_filed: true,
            atty_authorized_by_original_creditor: true,
            reported_1099c: false,
            ..sued()
        };
        let text = answer(&facts);

        assert!(text.contains(ARBITRATION));
        assert!(!text.contains(ASSIGNMENT));
        assert!(!text.contains(AUTHORITY));
        assert!(!text.contains(DEBT_CLOSURE));
    }

    #[test]
    fn test_answer_all_defenses_in_order() {
        let facts = CaseFacts {
            arbitration_clause: true,
            reported_1099c: true,
            ..sued()
        };
        let text = answer(&facts);

        let positions: Vec<usize> = [ARBITRATION, ASSIGNMENT, AUTHORITY, DEBT_CLOSURE]
            .iter()
            .map(|needle| text.find(needle).expect("defense present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_answer_keeps_fixed_numbering_when_defense_drops() {
        let facts = CaseFacts {
            atty_authorized_by_original_creditor: true,
            reported_1099c: true,
            ..sued()
        };
        let text = answer(&facts);
        assert!(text.contains(ASSIGNMENT));
        assert!(text.contains(DEBT_CLOSURE));
        assert!(!text.contains(AUTHORITY));
    }

    #[test]
    fn test_counterclaim_placeholder_narrative() {
        let text = compose(DocumentKind::Counterclaim, &sued(), &EngineConfig::default());
        assert!(text.contains("\nFacts: [Insert concise factual narrative with dates]\n"));
    }

    #[test]
    fn test_counterclaim_full_text_with_both_allegations() {
        let facts = CaseFacts {
            facts: "Collector called on 2024-01-05.".to_string(),
            case_number: "2025-CA-000123".to_string(),
            filing_date: "2025-03-14".to_string(),
            reported_1099c: true,
            ..sued()
        };
        let text = compose(DocumentKind::Counterclaim, &facts, &EngineConfig::default());
        assert_eq!(
            text,
            "IN THE , COUNTY, – COURT\n\
             \n\
             CAPITAL ONE, N.A. (Plaintiff)\n\
             vs.\n\
             John Doe (Defendant)\n\
             \n\
             Case No.: 2025-CA-000123\n\
             Filed: 2025-03-14\n\
             \n\
             DEFENDANT’S COUNTERCLAIM\n\
             \n\
             Count I – Unfair or Deceptive Practices (UDAP)\n\
             Count II – FDCPA Violations (where applicable)\n\
             Facts: Collector called on 2024-01-05.\n\
             Allegation: Filing in the name of the original creditor without written authorization is deceptive and unlawful.\n\
             Allegation: Attempting to collect after discharge/1099‑C constitutes an unfair practice.\n\
             \n\
             CredSmash Signature: Plaintiff’s acts, as alleged, constitute unfair or deceptive practices actionable under state UDAP and the FDCPA where applicable."
        );
    }

    #[test]
    fn test_counterclaim_authorized_attorney_drops_deceptive_filing() {
        let facts = CaseFacts {
            atty_authorized_by_original_creditor: true,
            ..sued()
        };
        let text = compose(DocumentKind::Counterclaim, &facts, &EngineConfig::default());
        assert!(!text.contains("Allegation:"));
    }
}
