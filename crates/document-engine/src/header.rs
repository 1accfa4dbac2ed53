//! Court caption shared by every post-suit filing

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::CaseFacts;

use crate::config::Placeholders;

lazy_static! {
    /// Any run of whitespace, including runs left by empty caption fields
    pub(crate) static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Court caption block using the default `[TBD]` placeholder
pub fn header_block(facts: &CaseFacts) -> String {
    header_block_with(facts, &Placeholders::default())
}

/// Court caption block.
///
/// The court line is upper-cased with whitespace collapsed. The block
/// ends with a newline so that the next unit lands after a blank line.
pub fn header_block_with(facts: &CaseFacts, placeholders: &Placeholders) -> String {
    format!(
        "IN THE {}\n\n{} (Plaintiff)\nvs.\n{} (Defendant)\n\nCase No.: {}\nFiled: {}\n",
        court_line(facts),
        facts.plaintiff_name,
        facts.defendant_name,
        or_placeholder(&facts.case_number, &placeholders.unknown),
        or_placeholder(&facts.filing_date, &placeholders.unknown),
    )
}

fn court_line(facts: &CaseFacts) -> String {
    let raw = format!(
        "{}, {} County, {} – {} Court",
        facts.court_city, facts.court_county, facts.court_state, facts.court_type
    );
    WHITESPACE_RUN
        .replace_all(&raw, " ")
        .trim()
        .to_uppercase()
}

pub(crate) fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
