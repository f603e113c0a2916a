use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};


/// Urgency tier of a triage outcome. Drives the search radius, the
/// result caps and the open-only filtering of the ranking pipeline.
///
/// Tiers the assessment step does not recognise collapse to [`Urgency::Routine`].
#[derive(
    Clone, Copy, Debug, Default, Display, EnumIter, EnumString, Eq, PartialEq, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Emergency,
    Urgent,
    #[default]
    Routine,
}

impl Urgency {
    /// Parses a free-form tier label, treating anything unrecognised
    /// as the routine tier.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    pub fn is_emergency(&self) -> bool {
        matches!(self, Urgency::Emergency)
    }
}

/// Structured outcome of the upstream symptom-assessment step.
/// Supplied once per screen session and never mutated here; a new
/// triage result supersedes every derived ranking wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    pub urgency: Urgency,
    pub department: String,
    pub specialist: String,
    pub search_keywords: Vec<String>,
}

impl TriageResult {
    pub fn new(
        urgency: Urgency,
        department: impl Into<String>,
        specialist: impl Into<String>,
        search_keywords: Vec<String>,
    ) -> Self {
        TriageResult {
            urgency,
            department: department.into(),
            specialist: specialist.into(),
            search_keywords,
        }
    }
}
