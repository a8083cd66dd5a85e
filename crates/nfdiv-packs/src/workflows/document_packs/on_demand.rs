//! Documents rendered into the case file just before a pack that needs them is printed.

use serde::Serialize;
use tracing::{debug, info};

use super::case::{CaseDetails, GeneratedDocument};
use super::document::DocumentType;

/// Request to render a static paper form into the case's generated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OnDemandDocument {
    pub document_type: DocumentType,
    pub display_name: &'static str,
    pub file_name: &'static str,
    /// Path of the source form, relative to the paper forms directory.
    pub template_file: &'static str,
}

/// Paper application for a conditional order, posted with the apply and reminder letters.
pub const D84_PAPER_FORM: OnDemandDocument = OnDemandDocument {
    document_type: DocumentType::ConditionalOrderApplicationForm,
    display_name: "Application for a conditional order (D84)",
    file_name: "D84",
    template_file: "D84.pdf",
};

/// Rendering backend for on-demand documents.
pub trait DocumentGenerator: Send + Sync {
    fn generate(
        &self,
        case: &CaseDetails,
        document: &OnDemandDocument,
    ) -> Result<GeneratedDocument, GenerationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("paper form template '{0}' is not available")]
    TemplateNotFound(String),
    #[error("document generation failed: {0}")]
    Backend(String),
}

/// Attach `document` to the case unless a document of the same type is already there.
///
/// Returns `true` when a new document was generated. On failure the case is untouched.
pub fn ensure_on_demand_document<G>(
    case: &mut CaseDetails,
    document: &OnDemandDocument,
    generator: &G,
) -> Result<bool, GenerationError>
where
    G: DocumentGenerator + ?Sized,
{
    if case.data.has_generated(document.document_type) {
        debug!(
            case_id = case.id.0,
            document_type = %document.document_type,
            "on-demand document already present"
        );
        return Ok(false);
    }

    let generated = generator.generate(case, document)?;
    info!(
        case_id = case.id.0,
        document_type = %document.document_type,
        file_name = %generated.file_name,
        "generated on-demand document"
    );
    case.data.documents_generated.push(generated);
    Ok(true)
}
