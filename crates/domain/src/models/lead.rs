//! Lead domain model.
//!
//! A lead is an inquiry captured through one of the public forms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{validate_not_blank, validate_phone};
use validator::Validate;

/// Which form or channel produced the lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadType {
    Franchise,
    #[default]
    General,
    Callback,
}

impl LeadType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadType::Franchise => "FRANCHISE",
            LeadType::General => "GENERAL",
            LeadType::Callback => "CALLBACK",
        }
    }
}

impl std::fmt::Display for LeadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Follow-up status. Any status may be set from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    #[default]
    New,
    Read,
    Contacted,
    Converted,
    Archived,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "NEW",
            LeadStatus::Read => "READ",
            LeadStatus::Contacted => "CONTACTED",
            LeadStatus::Converted => "CONVERTED",
            LeadStatus::Archived => "ARCHIVED",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub message: String,
    pub lead_type: LeadType,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

/// Form submission that becomes a lead.
///
/// Carries no id, status or timestamp: those are always assigned on insert.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct NewLead {
    #[validate(
        length(max = 200, message = "Name must be at most 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(max = 5000, message = "Message must be at most 5000 characters"))]
    pub message: String,

    #[serde(default)]
    pub lead_type: LeadType,
}

/// Request to change a lead's status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateLeadStatusRequest {
    pub status: LeadStatus,
}

/// Query parameters for listing leads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListLeadsQuery {
    #[serde(default)]
    pub status: Option<LeadStatus>,
}

/// Response listing leads, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListLeadsResponse {
    pub leads: Vec<Lead>,
    pub total: usize,
}
