//! Field identifiers for form-driven edits
//!
//! The wizard binds each input to a camelCase key. These enums turn
//! those keys into typed handles so edits go through one code path.

use std::str::FromStr;

use thiserror::Error;

use crate::types::CaseFacts;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown strategy flag: {0}")]
    UnknownFlag(String),
}

/// Free-text inputs on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    PlaintiffName,
    DefendantName,
    CourtCity,
    CourtCounty,
    CourtState,
    CourtType,
    AttyName,
    AttyPhone,
    AttyAddress,
    CaseNumber,
    FilingDate,
    Facts,
}

impl TextField {
    pub const ALL: [TextField; 12] = [
        TextField::PlaintiffName,
        TextField::DefendantName,
        TextField::CourtCity,
        TextField::CourtCounty,
        TextField::CourtState,
        TextField::CourtType,
        TextField::AttyName,
        TextField::AttyPhone,
        TextField::AttyAddress,
        TextField::CaseNumber,
        TextField::FilingDate,
        TextField::Facts,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TextField::PlaintiffName => "plaintiffName",
            TextField::DefendantName => "defendantName",
            TextField::CourtCity => "courtCity",
            TextField::CourtCounty => "courtCounty",
            TextField::CourtState => "courtState",
            TextField::CourtType => "courtType",
            TextField::AttyName => "attyName",
            TextField::AttyPhone => "attyPhone",
            TextField::AttyAddress => "attyAddress",
            TextField::CaseNumber => "caseNumber",
            TextField::FilingDate => "filingDate",
            TextField::Facts => "facts",
        }
    }

    pub fn get<'a>(&self, facts: &'a CaseFacts) -> &'a str {
        match self {
            TextField::PlaintiffName => &facts.plaintiff_name,
            TextField::DefendantName => &facts.defendant_name,
            TextField::CourtCity => &facts.court_city,
            TextField::CourtCounty => &facts.court_county,
            TextField::CourtState => &facts.court_state,
            TextField::CourtType => &facts.court_type,
            TextField::AttyName => &facts.atty_name,
            TextField::AttyPhone => &facts.atty_phone,
            TextField::AttyAddress => &facts.atty_address,
            TextField::CaseNumber => &facts.case_number,
            TextField::FilingDate => &facts.filing_date,
            TextField::Facts => &facts.facts,
        }
    }

    fn slot<'a>(&self, facts: &'a mut CaseFacts) -> &'a mut String {
        match self {
            TextField::PlaintiffName => &mut facts.plaintiff_name,
            TextField::DefendantName => &mut facts.defendant_name,
            TextField::CourtCity => &mut facts.court_city,
            TextField::CourtCounty => &mut facts.court_county,
            TextField::CourtState => &mut facts.court_state,
            TextField::CourtType => &mut facts.court_type,
            TextField::AttyName => &mut facts.atty_name,
            TextField::AttyPhone => &mut facts.atty_phone,
            TextField::AttyAddress => &mut facts.atty_address,
            TextField::CaseNumber => &mut facts.case_number,
            TextField::FilingDate => &mut facts.filing_date,
            TextField::Facts => &mut facts.facts,
        }
    }
}

impl FromStr for TextField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// Boolean toggles that steer document selection and clause inclusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyFlag {
    HasBeenSued,
    IncludeCounterclaim,
    ArbitrationClause,
    Reported1099C,
    AssignmentNoticeFiled,
    AttyAuthorizedByOriginalCreditor,
}

impl StrategyFlag {
    pub const ALL: [StrategyFlag; 6] = [
        StrategyFlag::HasBeenSued,
        StrategyFlag::IncludeCounterclaim,
        StrategyFlag::ArbitrationClause,
        StrategyFlag::Reported1099C,
        StrategyFlag::AssignmentNoticeFiled,
        StrategyFlag::AttyAuthorizedByOriginalCreditor,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StrategyFlag::HasBeenSued => "hasBeenSued",
            StrategyFlag::IncludeCounterclaim => "includeCounterclaim",
            StrategyFlag::ArbitrationClause => "arbitrationClause",
            StrategyFlag::Reported1099C => "reported1099C",
            StrategyFlag::AssignmentNoticeFiled => "assignmentNoticeFiled",
            StrategyFlag::AttyAuthorizedByOriginalCreditor => "attyAuthorizedByOriginalCreditor",
        }
    }

    pub fn is_set(&self, facts: &CaseFacts) -> bool {
        match self {
            StrategyFlag::HasBeenSued => facts.has_been_sued,
            StrategyFlag::IncludeCounterclaim => facts.include_counterclaim,
            StrategyFlag::ArbitrationClause => facts.arbitration_clause,
            StrategyFlag::Reported1099C => facts.reported_1099c,
            StrategyFlag::AssignmentNoticeFiled => facts.assignment_notice_filed,
            StrategyFlag::AttyAuthorizedByOriginalCreditor => {
                facts.atty_authorized_by_original_creditor
            }
        }
    }

    fn slot<'a>(&self, facts: &'a mut CaseFacts) -> &'a mut bool {
        match self {
            StrategyFlag::HasBeenSued => &mut facts.has_been_sued,
            StrategyFlag::IncludeCounterclaim => &mut facts.include_counterclaim,
            StrategyFlag::ArbitrationClause => &mut facts.arbitration_clause,
            StrategyFlag::Reported1099C => &mut facts.reported_1099c,
            StrategyFlag::AssignmentNoticeFiled => &mut facts.assignment_notice_filed,
            StrategyFlag::AttyAuthorizedByOriginalCreditor => {
                &mut facts.atty_authorized_by_original_creditor
            }
        }
    }
}

impl FromStr for StrategyFlag {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyFlag::ALL
            .iter()
            .copied()
            .find(|flag| flag.key() == s)
            .ok_or_else(|| FieldError::UnknownFlag(s.to_string()))
    }
}

impl CaseFacts {
    /// Copy of these facts with one text field replaced
    pub fn with_text(&self, field: TextField, value: impl Into<String>) -> CaseFacts {
        let mut next = self.clone();
        *field.slot(&mut next) = value.into();
        next
    }

    /// Copy of these facts with one strategy flag set or cleared
    pub fn with_flag(&self, flag: StrategyFlag, on: bool) -> CaseFacts {
        let mut next = self.clone();
        *flag.slot(&mut next) = on;
        next
    }
}
