//! Conditional paragraphs, one row per (document, flag) pair
//!
//! Composers never branch on flags directly. Each one emits its fixed
//! paragraphs and then asks this table which conditional rows fire, in
//! table order. Numbering inside the conditional text is fixed, so a row
//! dropping out never renumbers its neighbours.

use shared_types::{CaseFacts, DocumentKind, StrategyFlag};

/// A paragraph included when `flag` is `when`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseRule {
    pub id: &'static str,
    pub kind: DocumentKind,
    pub flag: StrategyFlag,
    pub when: bool,
    pub lines: &'static [&'static str],
}

impl ClauseRule {
    pub fn applies(&self, facts: &CaseFacts) -> bool {
        self.flag.is_set(facts) == self.when
    }
}

pub const CONDITIONAL_CLAUSES: &[ClauseRule] = &[
    ClauseRule {
        id: "validation_debt_closure",
        kind: DocumentKind::ValidationLetter,
        flag: StrategyFlag::Reported1099C,
        when: true,
        lines: &[
            "Debt Closure Doctrine:",
            "6) Confirm whether a Form 1099‑C was issued for this account and whether the creditor treated the account as discharged/closed.",
        ],
    },
    ClauseRule {
        id: "answer_arbitration",
        kind: DocumentKind::Answer,
        flag: StrategyFlag::ArbitrationClause,
        when: true,
        lines: &["3. Affirmative Defense – Arbitration: The governing card agreement requires binding arbitration. Defendant invokes arbitration and waives litigation."],
    },
    ClauseRule {
        id: "answer_assignment_notice",
        kind: DocumentKind::Answer,
        flag: StrategyFlag::AssignmentNoticeFiled,
        when: false,
        lines: &["4. Affirmative Defense – Assignment/Notice: No compliant notice of assignment was provided; any transfer is unenforceable against Defendant."],
    },
    ClauseRule {
        id: "answer_authority",
        kind: DocumentKind::Answer,
        flag: StrategyFlag::AttyAuthorizedByOriginalCreditor,
        when: false,
        lines: &["5. Affirmative Defense – Authority: Any attorney purporting to sue in the original creditor’s name must show actual written authorization; none has been produced."],
    },
    ClauseRule {
        id: "answer_debt_closure",
        kind: DocumentKind::Answer,
        flag: StrategyFlag::Reported1099C,
        when: true,
        lines: &["6. Affirmative Defense – Debt Closure: The account was discharged and a 1099‑C issued/treated as income; collection is barred."],
    },
    ClauseRule {
        id: "counterclaim_deceptive_filing",
        kind: DocumentKind::Counterclaim,
        flag: StrategyFlag::AttyAuthorizedByOriginalCreditor,
        when: false,
        lines: &["Allegation: Filing in the name of the original creditor without written authorization is deceptive and unlawful."],
    },
    ClauseRule {
        id: "counterclaim_post_discharge",
        kind: DocumentKind::Counterclaim,
        flag: StrategyFlag::Reported1099C,
        when: true,
        lines: &["Allegation: Attempting to collect after discharge/1099‑C constitutes an unfair practice."],
    },
];

/// All rows belonging to one document type, in table order
pub fn rules_for(kind: DocumentKind) -> impl Iterator<Item = &'static ClauseRule> {
    CONDITIONAL_CLAUSES.iter().filter(move |rule| rule.kind == kind)
}

/// Rows that fire for these facts
pub fn applicable(
    kind: DocumentKind,
    facts: &CaseFacts,
) -> impl Iterator<Item = &'static ClauseRule> + '_ {
    rules_for(kind).filter(move |rule| rule.applies(facts))
}

/// Ids of the conditional paragraphs a document will contain
pub fn included_clauses(kind: DocumentKind, facts: &CaseFacts) -> Vec<&'static str> {
    applicable(kind, facts).map(|rule| rule.id).collect()
}

/// Flags that can change a document's text
pub fn conditional_flags(kind: DocumentKind) -> Vec<StrategyFlag> {
    let mut flags: Vec<StrategyFlag> = Vec::new();
    for rule in rules_for(kind) {
        if !flags.contains(&rule.flag) {
            flags.push(rule.flag);
        }
    }
    flags
}

/// Plain-language summary of the decision logic, for display beside the output
pub fn generation_rules() -> Vec<&'static str> {
    vec![
        "Not sued → Validation + Verification letters.",
        "Sued → Answer + Admissions + Productions + Interrogatories. Optional Counterclaim if toggled.",
        "Arbitration on → Inserts an arbitration defense into the Answer.",
        "No assignment notice → Adds an affirmative defense on assignment/notice.",
        "No original‑creditor authorization → Defense on attorney authority and deceptive filing.",
        "1099‑C on → Adds Debt Closure Doctrine language across relevant docs.",
    ]
}
