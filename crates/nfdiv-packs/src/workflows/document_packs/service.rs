use std::sync::Arc;

use tracing::{info, warn};

use super::case::{CaseDetails, Party};
use super::catalog::{CatalogError, DecisionRow, LetterId, PackCatalog};
use super::document::{DocumentPack, DocumentType};
use super::on_demand::{ensure_on_demand_document, DocumentGenerator, GenerationError};
use super::print::{LetterPrinter, PrintDocument, PrintError, PrintReceipt, PrintRequest};
use super::resolvers::ResolveError;

/// Service composing the pack catalog with the document generation and print collaborators.
pub struct DocumentPackService<G, P> {
    catalog: Arc<PackCatalog>,
    generator: Arc<G>,
    printer: Arc<P>,
}

impl<G, P> DocumentPackService<G, P>
where
    G: DocumentGenerator + 'static,
    P: LetterPrinter + 'static,
{
    pub fn new(catalog: Arc<PackCatalog>, generator: Arc<G>, printer: Arc<P>) -> Self {
        Self {
            catalog,
            generator,
            printer,
        }
    }

    pub fn catalog(&self) -> &PackCatalog {
        &self.catalog
    }

    pub fn letter_ids(&self) -> Vec<LetterId> {
        self.catalog.letter_ids()
    }

    pub fn decision_table(&self) -> Vec<DecisionRow> {
        self.catalog.decision_table()
    }

    /// Select the pack for `party`, then make sure any on-demand document it relies on exists.
    ///
    /// The case is only modified when the resolver declares an on-demand document that
    /// the selected pack uses and the case does not hold one yet.
    pub fn resolve(
        &self,
        letter_id: LetterId,
        case: &mut CaseDetails,
        party: Party,
    ) -> Result<DocumentPack, DispatchError> {
        let resolver = self.catalog.lookup(letter_id)?;

        let pack = match resolver.resolve(&case.data, party) {
            Ok(pack) => pack,
            Err(error) => {
                warn!(
                    letter_id = %letter_id,
                    case_id = case.id.0,
                    party = %party,
                    error = %error,
                    "no document pack for case"
                );
                return Err(error.into());
            }
        };

        if let Some(document) = resolver.on_demand_document(&case.data, party) {
            if pack.contains(document.document_type) {
                ensure_on_demand_document(case, &document, self.generator.as_ref())?;
            }
        }

        info!(
            letter_id = %letter_id,
            case_id = case.id.0,
            party = %party,
            pack = %pack.key(),
            "resolved document pack"
        );
        Ok(pack)
    }

    /// Resolve the pack and hand the assembled letter to the printer.
    pub fn print(
        &self,
        letter_id: LetterId,
        case: &mut CaseDetails,
        party: Party,
    ) -> Result<PrintReceipt, DispatchError> {
        let pack = self.resolve(letter_id, case, party)?;
        let request = print_request(letter_id, &pack, case, party)?;
        let document_count = request.documents.len();

        let receipt = self.printer.print(request)?;
        info!(
            letter_id = %letter_id,
            case_id = case.id.0,
            party = %party,
            documents = document_count,
            letter_reference = %receipt.letter_reference,
            "letter sent to print"
        );
        Ok(receipt)
    }
}

fn print_request(
    letter_id: LetterId,
    pack: &DocumentPack,
    case: &CaseDetails,
    party: Party,
) -> Result<PrintRequest, DispatchError> {
    let documents = pack
        .documents()
        .iter()
        .map(|document| match document.template {
            Some(template) => Ok(PrintDocument {
                document_type: document.document_type,
                template: Some(template),
                file_name: pack
                    .template_name(template)
                    .unwrap_or(template.as_str())
                    .to_string(),
            }),
            None => case
                .data
                .generated(document.document_type)
                .map(|generated| PrintDocument {
                    document_type: document.document_type,
                    template: None,
                    file_name: generated.file_name.clone(),
                })
                .ok_or(DispatchError::MissingGeneratedDocument {
                    letter_id,
                    document_type: document.document_type,
                }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let applicant = case.data.applicant(party);
    let recipient_name = match (&applicant.solicitor, applicant.is_represented()) {
        (Some(solicitor), true) => solicitor.name.clone(),
        _ => applicant.full_name(),
    };

    let aos_submitted_on = (letter_id == LetterId::AosResponseLetter)
        .then_some(case.data.acknowledgement_of_service.as_ref())
        .flatten()
        .and_then(|aos| aos.date_submitted);
    let information_requested = (letter_id == LetterId::RequestForInformation)
        .then_some(case.data.request_for_information.as_ref())
        .flatten()
        .map(|request| request.details.trim())
        .filter(|details| !details.is_empty())
        .map(str::to_string);

    Ok(PrintRequest {
        letter_id,
        pack: pack.key(),
        case_id: case.id,
        recipient: party,
        recipient_name,
        language: applicant.language(),
        documents,
        aos_submitted_on,
        information_requested,
    })
}

/// Error raised while dispatching a document pack.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Print(#[from] PrintError),
    #[error("{letter_id} needs a generated {document_type} document but the case has none")]
    MissingGeneratedDocument {
        letter_id: LetterId,
        document_type: DocumentType,
    },
}
