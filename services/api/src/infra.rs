use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use nfdiv_packs::workflows::document_packs::{
    CaseDetails, DocumentGenerator, GeneratedDocument, GenerationError, LetterPrinter,
    OnDemandDocument, Party, PrintError, PrintReceipt, PrintRequest,
};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) letters_registered: usize,
}

/// Serves on-demand documents straight from the static paper forms directory.
#[derive(Debug, Clone)]
pub(crate) struct PaperFormGenerator {
    forms_dir: PathBuf,
}

impl PaperFormGenerator {
    pub(crate) fn new(forms_dir: impl Into<PathBuf>) -> Self {
        Self {
            forms_dir: forms_dir.into(),
        }
    }
}

impl DocumentGenerator for PaperFormGenerator {
    fn generate(
        &self,
        case: &CaseDetails,
        document: &OnDemandDocument,
    ) -> Result<GeneratedDocument, GenerationError> {
        let source = self.forms_dir.join(document.template_file);
        if !source.is_file() {
            return Err(GenerationError::TemplateNotFound(
                source.display().to_string(),
            ));
        }

        Ok(GeneratedDocument {
            document_type: document.document_type,
            display_name: document.display_name.to_string(),
            file_name: format!("{}-{}.pdf", document.file_name, case.id.0),
            link: format!("file://{}", source.display()),
        })
    }
}

/// Generator used by the CLI demo; nothing touches the filesystem.
#[derive(Default, Clone)]
pub(crate) struct InMemoryDocumentGenerator {
    generated: Arc<Mutex<Vec<GeneratedDocument>>>,
}

impl InMemoryDocumentGenerator {
    pub(crate) fn generated(&self) -> Vec<GeneratedDocument> {
        self.generated
            .lock()
            .expect("generator mutex poisoned")
            .clone()
    }
}

impl DocumentGenerator for InMemoryDocumentGenerator {
    fn generate(
        &self,
        case: &CaseDetails,
        document: &OnDemandDocument,
    ) -> Result<GeneratedDocument, GenerationError> {
        let generated = GeneratedDocument {
            document_type: document.document_type,
            display_name: document.display_name.to_string(),
            file_name: format!("{}-{}.pdf", document.file_name, case.id.0),
            link: format!("memory://paper-forms/{}", document.template_file),
        };
        self.generated
            .lock()
            .expect("generator mutex poisoned")
            .push(generated.clone());
        Ok(generated)
    }
}

/// Print queue kept in memory; stands in for the bulk print service.
#[derive(Default, Clone)]
pub(crate) struct InMemoryLetterPrinter {
    letters: Arc<Mutex<Vec<PrintRequest>>>,
}

impl InMemoryLetterPrinter {
    pub(crate) fn letters(&self) -> Vec<PrintRequest> {
        self.letters.lock().expect("printer mutex poisoned").clone()
    }
}

impl LetterPrinter for InMemoryLetterPrinter {
    fn print(&self, request: PrintRequest) -> Result<PrintReceipt, PrintError> {
        let mut guard = self.letters.lock().expect("printer mutex poisoned");
        let receipt = PrintReceipt {
            letter_reference: format!("{}-{:04}", request.case_id.0, guard.len() + 1),
            document_count: request.documents.len(),
        };
        info!(
            letter_id = %request.letter_id,
            case_id = request.case_id.0,
            letter_reference = %receipt.letter_reference,
            "queued letter for print"
        );
        guard.push(request);
        Ok(receipt)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_party(raw: &str) -> Result<Party, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "applicant1" | "app1" | "1" => Ok(Party::Applicant1),
        "applicant2" | "app2" | "respondent" | "2" => Ok(Party::Applicant2),
        other => Err(format!(
            "unknown party '{other}' (expected applicant1 or applicant2)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfdiv_packs::workflows::document_packs::{
        Applicant, Application, ApplicationType, CaseData, CaseId, ConditionalOrder,
        DivorceOrDissolution, FinalOrder, ServiceMethod, SupplementaryCaseType, D84_PAPER_FORM,
    };

    fn case() -> CaseDetails {
        CaseDetails {
            id: CaseId(42),
            data: CaseData {
                application_type: ApplicationType::SoleApplication,
                divorce_or_dissolution: DivorceOrDissolution::Divorce,
                supplementary_case_type: SupplementaryCaseType::NotApplicable,
                applicant1: Applicant::default(),
                applicant2: Applicant::default(),
                application: Application {
                    service_method: ServiceMethod::CourtService,
                    reissue_option: None,
                    issue_date: None,
                },
                acknowledgement_of_service: None,
                conditional_order: ConditionalOrder::default(),
                final_order: FinalOrder::default(),
                request_for_information: None,
                documents_generated: Vec::new(),
            },
        }
    }

    #[test]
    fn parse_party_accepts_aliases() {
        assert_eq!(parse_party("Applicant1"), Ok(Party::Applicant1));
        assert_eq!(parse_party(" respondent "), Ok(Party::Applicant2));
        assert!(parse_party("applicant3").is_err());
    }

    #[test]
    fn paper_form_generator_requires_the_source_form() {
        let generator = PaperFormGenerator::new("/nonexistent/paper-forms");
        let result = generator.generate(&case(), &D84_PAPER_FORM);
        assert!(matches!(result, Err(GenerationError::TemplateNotFound(_))));
    }

    #[test]
    fn in_memory_generator_records_documents() {
        let generator = InMemoryDocumentGenerator::default();
        let generated = generator
            .generate(&case(), &D84_PAPER_FORM)
            .expect("generation succeeds");
        assert_eq!(generated.file_name, "D84-42.pdf");
        assert_eq!(generator.generated(), vec![generated]);
    }
}
