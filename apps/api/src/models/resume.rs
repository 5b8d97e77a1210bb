//! The resume document model.
//!
//! Field names on the wire and in persisted files are camelCase; required
//! fields are required by the types themselves, so deserializing a document
//! IS the validation step. `gpa` is the only optional field. Dates are
//! opaque text: no parsing or ordering checks, matching the editor's
//! free-form date inputs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Caller-supplied token, unique within one resume but not globally.
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    /// Open-ended role. When set, `end_date` is ignored by consumers but
    /// stored as given.
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Proficiency tier, e.g. "Beginner" / "Expert". Free text.
    pub level: String,
    /// Grouping label for display.
    pub category: String,
}

/// The aggregate root. Nested lists are owned exclusively by one resume and
/// their order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub personal_info: PersonalInfo,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    /// ISO-8601, stamped by the store on every save. Whatever the client
    /// sends here is overwritten.
    pub last_modified: String,
}
