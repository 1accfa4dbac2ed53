//! Engine configuration
//!
//! Signature sentences and placeholder text are the only knobs. Every
//! key is optional in the TOML source; anything omitted falls back to
//! the built-in wording.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared_types::DocumentKind;

use crate::error::EngineError;

/// Top-level configuration, loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub placeholders: Placeholders,
    #[serde(default)]
    pub signatures: Signatures,
}

impl EngineConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed,
    /// or a placeholder is blank.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// ```
    /// use document_engine::EngineConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = EngineConfig::from_str(r#"
    ///     [signatures]
    ///     answer = "Defendant reserves all defenses."
    /// "#)?;
    /// assert_eq!(config.signatures.answer, "Defendant reserves all defenses.");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: EngineConfig =
            toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Placeholders must render as visible text, never as a blank slot
    pub fn validate(&self) -> Result<(), EngineError> {
        for (key, value) in [
            ("placeholders.unknown", &self.placeholders.unknown),
            ("placeholders.facts", &self.placeholders.facts),
        ] {
            if value.trim().is_empty() {
                tracing::warn!("Rejecting configuration with blank {}", key);
                return Err(EngineError::InvalidConfig(format!(
                    "{} must not be blank",
                    key
                )));
            }
        }
        Ok(())
    }
}

/// Text substituted for facts the user has not supplied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholders {
    /// Missing case number or filing date
    #[serde(default = "default_unknown")]
    pub unknown: String,
    /// Empty counterclaim narrative
    #[serde(default = "default_facts")]
    pub facts: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            unknown: default_unknown(),
            facts: default_facts(),
        }
    }
}

fn default_unknown() -> String {
    "[TBD]".to_string()
}

fn default_facts() -> String {
    "[Insert concise factual narrative with dates]".to_string()
}

/// Closing sentence appended to each document type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signatures {
    #[serde(default = "default_validation")]
    pub validation: String,
    #[serde(default = "default_verification")]
    pub verification: String,
    #[serde(default = "default_answer")]
    pub answer: String,
    #[serde(default = "default_admissions")]
    pub admissions: String,
    #[serde(default = "default_productions")]
    pub productions: String,
    #[serde(default = "default_interrogatories")]
    pub interrogatories: String,
    #[serde(default = "default_counterclaim")]
    pub counterclaim: String,
}

impl Signatures {
    pub fn for_kind(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::ValidationLetter => &self.validation,
            DocumentKind::VerificationLetter => &self.verification,
            DocumentKind::Answer => &self.answer,
            DocumentKind::RequestsForAdmission => &self.admissions,
            DocumentKind::RequestsForProduction => &self.productions,
            DocumentKind::Interrogatories => &self.interrogatories,
            DocumentKind::Counterclaim => &self.counterclaim,
        }
    }
}

impl Default for Signatures {
    fn default() -> Self {
        Self {
            validation: default_validation(),
            verification: default_verification(),
            answer: default_answer(),
            admissions: default_admissions(),
            productions: default_productions(),
            interrogatories: default_interrogatories(),
            counterclaim: default_counterclaim(),
        }
    }
}

fn default_validation() -> String {
    "CredSmash Signature: The alleged claim is disputed in its entirety pending strict proof with competent, admissible evidence establishing standing and a complete chain of title.".to_string()
}

fn default_verification() -> String {
    "CredSmash Signature: Provide sworn verification by a person with personal knowledge, not a mere servicer declaration or hearsay custodian affidavit.".to_string()
}

fn default_answer() -> String {
    "CredSmash Signature: Defendant denies for lack of sufficient knowledge where Plaintiff’s pleading is built on assignment, redaction, or data‑dump exhibits without a witness competent to testify.".to_string()
}

fn default_admissions() -> String {
    "CredSmash Signature: Requests track the elements of standing, ownership, and admissibility to position this case for a clean Summary Judgment if Plaintiff defaults.".to_string()
}

fn default_productions() -> String {
    "CredSmash Signature: Produce the complete, unredacted chain of title, bill of sale with schedules referencing the Account, and authenticated records under Rules of Evidence.".to_string()
}

fn default_interrogatories() -> String {
    "CredSmash Signature: Interrogatories compel Plaintiff to identify each custodian, each document relied upon, and the legal basis for suing under this caption.".to_string()
}

fn default_counterclaim() -> String {
    "CredSmash Signature: Plaintiff’s acts, as alleged, constitute unfair or deceptive practices actionable under state UDAP and the FDCPA where applicable.".to_string()
}
