use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::case::{CaseId, LanguagePreference, Party};
use super::catalog::{LetterId, PackKey};
use super::document::{DocumentType, TemplateId};

/// One document in the envelope, in print order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintDocument {
    pub document_type: DocumentType,
    /// `None` for documents taken from the case file rather than rendered from a template.
    pub template: Option<TemplateId>,
    pub file_name: String,
}

/// Everything the bulk print service needs to post a single letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintRequest {
    pub letter_id: LetterId,
    pub pack: PackKey,
    pub case_id: CaseId,
    pub recipient: Party,
    pub recipient_name: String,
    pub language: LanguagePreference,
    pub documents: Vec<PrintDocument>,
    /// Date the respondent answered, merged into AOS response letters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aos_submitted_on: Option<NaiveDate>,
    /// What the court asked for, merged into request for information letters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_requested: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintReceipt {
    pub letter_reference: String,
    pub document_count: usize,
}

/// Outbound print and post collaborator.
pub trait LetterPrinter: Send + Sync {
    fn print(&self, request: PrintRequest) -> Result<PrintReceipt, PrintError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrintError {
    #[error("print request rejected: {0}")]
    Rejected(String),
    #[error("print service unavailable: {0}")]
    Unavailable(String),
}
