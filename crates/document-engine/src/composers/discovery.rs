//! Discovery requests served with the answer. Fixed content only.

use shared_types::CaseFacts;

use super::Body;
use crate::config::EngineConfig;
use crate::header::header_block_with;

pub(super) fn admissions(body: &mut Body, facts: &CaseFacts, config: &EngineConfig) {
    body.line(header_block_with(facts, &config.placeholders))
        .line("DEFENDANT’S FIRST REQUESTS FOR ADMISSION TO PLAINTIFF")
        .blank()
        .lines(&[
            "RFA 1: Admit you do not possess a complete, unredacted chain of title linking the alleged Account from the original creditor to Plaintiff.",
            "RFA 2: Admit the alleged Account is not identified by unique account number in any bill of sale relied upon by Plaintiff.",
            "RFA 3: Admit you lack a witness with personal knowledge competent to authenticate the records under the Rules of Evidence.",
            "RFA 4: Admit the governing card agreement contains a binding arbitration clause applicable to the claims.",
        ]);
}

pub(super) fn productions(body: &mut Body, facts: &CaseFacts, config: &EngineConfig) {
    body.line(header_block_with(facts, &config.placeholders))
        .line("DEFENDANT’S FIRST REQUEST FOR PRODUCTION TO PLAINTIFF")
        .blank()
        .lines(&[
            "1. Complete, unredacted chain of title with schedules referencing the specific Account.",
            "2. Executed cardmember agreement(s) applicable to the alleged Account and time period.",
            "3. Full, itemized account‑level transaction history supporting the amount claimed.",
            "4. Communications evidencing actual written authorization for any attorney to file in the original creditor’s name.",
            "5. Any Form 1099‑C and related discharge/charge‑off entries.",
        ]);
}

pub(super) fn interrogatories(body: &mut Body, facts: &CaseFacts, config: &EngineConfig) {
    body.line(header_block_with(facts, &config.placeholders))
        .line("DEFENDANT’S FIRST SET OF INTERROGATORIES TO PLAINTIFF")
        .blank()
        .lines(&[
            "1. Identify each person with knowledge supporting standing/ownership, including title and custodian responsibilities.",
            "2. Identify each document you contend authenticates ownership/assignment of the alleged Account.",
            "3. State the legal basis for suing under this caption and whether authority was granted by the original creditor.",
            "4. Describe any arbitration clause and your position on its applicability.",
        ]);
}
