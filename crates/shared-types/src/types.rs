use serde::{Deserialize, Serialize};

/// Everything the wizard collects about a case.
///
/// Every field defaults to an empty string or `false`, so a partially
/// filled form always deserializes. The composition functions never
/// mutate a `CaseFacts`; edits produce a new value via [`CaseFacts::with_text`]
/// and [`CaseFacts::with_flag`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaseFacts {
    // Court caption
    pub plaintiff_name: String,
    pub defendant_name: String,
    pub court_city: String,
    pub court_county: String,
    pub court_state: String,
    pub court_type: String, // District / Circuit / County etc.

    // Plaintiff counsel contact
    pub atty_name: String,
    pub atty_phone: String,
    pub atty_address: String,

    // Status + strategy
    pub has_been_sued: bool,
    pub include_counterclaim: bool,
    pub arbitration_clause: bool,
    #[serde(rename = "reported1099C")]
    pub reported_1099c: bool,
    pub assignment_notice_filed: bool,
    pub atty_authorized_by_original_creditor: bool,

    // Case metadata
    pub case_number: String,
    pub filing_date: String, // yyyy-mm-dd from the date input, kept verbatim

    pub facts: String,
}

/// A rendered document: tab title plus plain-text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub title: String,
    pub body: String,
}

impl GeneratedDocument {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Which stage of the dispute a document belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    /// No lawsuit yet: correspondence to the collector
    PreSuit,
    /// Lawsuit filed: pleadings and discovery
    PostSuit,
}

/// The closed set of documents the generator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    ValidationLetter,
    VerificationLetter,
    Answer,
    RequestsForAdmission,
    RequestsForProduction,
    Interrogatories,
    Counterclaim,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 7] = [
        DocumentKind::ValidationLetter,
        DocumentKind::VerificationLetter,
        DocumentKind::Answer,
        DocumentKind::RequestsForAdmission,
        DocumentKind::RequestsForProduction,
        DocumentKind::Interrogatories,
        DocumentKind::Counterclaim,
    ];

    /// Tab title, also used to derive the export filename
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::ValidationLetter => "Debt Validation Letter",
            DocumentKind::VerificationLetter => "Debt Verification Letter",
            DocumentKind::Answer => "Answer",
            DocumentKind::RequestsForAdmission => "Requests for Admission",
            DocumentKind::RequestsForProduction => "Requests for Production",
            DocumentKind::Interrogatories => "Interrogatories",
            DocumentKind::Counterclaim => "Counterclaim",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            DocumentKind::ValidationLetter => "validation_letter",
            DocumentKind::VerificationLetter => "verification_letter",
            DocumentKind::Answer => "answer",
            DocumentKind::RequestsForAdmission => "requests_for_admission",
            DocumentKind::RequestsForProduction => "requests_for_production",
            DocumentKind::Interrogatories => "interrogatories",
            DocumentKind::Counterclaim => "counterclaim",
        }
    }

    pub fn track(&self) -> Track {
        match self {
            DocumentKind::ValidationLetter | DocumentKind::VerificationLetter => Track::PreSuit,
            _ => Track::PostSuit,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
