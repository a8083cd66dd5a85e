use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::document_packs::case::{
    AcknowledgementOfService, Applicant, Application, ApplicationType, CaseData, CaseDetails,
    CaseId, ConditionalOrder, DivorceOrDissolution, FinalOrder, GeneratedDocument, HowToRespond,
    OfflineWhoApplying, Party, RefusalOption, ReissueOption, RequestForInformation,
    RequestForInformationParty, ServiceMethod, Solicitor, SupplementaryCaseType,
};
use crate::workflows::document_packs::catalog::{LetterId, PackCatalog, PackKey};
use crate::workflows::document_packs::on_demand::{
    DocumentGenerator, GenerationError, OnDemandDocument,
};
use crate::workflows::document_packs::print::{
    LetterPrinter, PrintError, PrintReceipt, PrintRequest,
};
use crate::workflows::document_packs::resolvers::ResolveError;
use crate::workflows::document_packs::{document_pack_router, DocumentPackService};

pub(super) fn citizen(first_name: &str, last_name: &str) -> Applicant {
    Applicant {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: Some(format!("{}@example.com", first_name.to_ascii_lowercase())),
        ..Applicant::default()
    }
}

pub(super) fn with_solicitor(mut applicant: Applicant, organisation: bool) -> Applicant {
    applicant.solicitor_represented = true;
    applicant.solicitor = Some(Solicitor {
        name: "Sam Hale".to_string(),
        email: Some("sam.hale@hale-law.example".to_string()),
        organisation_id: organisation.then(|| "ORG-1234".to_string()),
    });
    applicant
}

pub(super) fn offline(mut applicant: Applicant) -> Applicant {
    applicant.offline = true;
    applicant.email = None;
    applicant
}

pub(super) fn sole_case() -> CaseData {
    CaseData {
        application_type: ApplicationType::SoleApplication,
        divorce_or_dissolution: DivorceOrDissolution::Divorce,
        supplementary_case_type: SupplementaryCaseType::NotApplicable,
        applicant1: citizen("Alex", "Morgan"),
        applicant2: citizen("Jordan", "Morgan"),
        application: Application {
            service_method: ServiceMethod::CourtService,
            reissue_option: None,
            issue_date: NaiveDate::from_ymd_opt(2024, 3, 4),
        },
        acknowledgement_of_service: None,
        conditional_order: ConditionalOrder::default(),
        final_order: FinalOrder::default(),
        request_for_information: None,
        documents_generated: Vec::new(),
    }
}

pub(super) fn joint_case() -> CaseData {
    CaseData {
        application_type: ApplicationType::JointApplication,
        ..sole_case()
    }
}

pub(super) fn judicial_separation(mut case: CaseData) -> CaseData {
    case.supplementary_case_type = SupplementaryCaseType::JudicialSeparation;
    case
}

pub(super) fn separation(mut case: CaseData) -> CaseData {
    case.supplementary_case_type = SupplementaryCaseType::Separation;
    case
}

pub(super) fn aos(how_to_respond: HowToRespond) -> Option<AcknowledgementOfService> {
    Some(AcknowledgementOfService {
        how_to_respond,
        date_submitted: NaiveDate::from_ymd_opt(2024, 4, 2),
    })
}

pub(super) fn details(data: CaseData) -> CaseDetails {
    CaseDetails {
        id: CaseId(1_700_000_000_000_001),
        data,
    }
}

pub(super) fn catalog() -> PackCatalog {
    PackCatalog::standard().expect("standard catalog is well formed")
}

pub(super) fn select(
    letter_id: LetterId,
    case: &CaseData,
    party: Party,
) -> Result<PackKey, ResolveError> {
    catalog()
        .lookup(letter_id)
        .expect("letter id registered")
        .select(case, party)
}

/// Broad grid of case shapes, with every scenario sub-record filled in so that each
/// resolver has something to branch on.
pub(super) fn case_variants() -> Vec<CaseData> {
    let application_types = [
        ApplicationType::SoleApplication,
        ApplicationType::JointApplication,
    ];
    let supplementary = [
        SupplementaryCaseType::NotApplicable,
        SupplementaryCaseType::JudicialSeparation,
        SupplementaryCaseType::Separation,
    ];
    // none, solicitor with organisation, solicitor without organisation
    let representation = [None, Some(true), Some(false)];
    let service_methods = [ServiceMethod::CourtService, ServiceMethod::PersonalService];

    let mut variants = Vec::new();
    for application_type in application_types {
        for supplementary_case_type in supplementary {
            for app1_solicitor in representation {
                for app2_solicitor in representation {
                    for service_method in service_methods {
                        for (app2_offline, app2_overseas, reissued_offline) in [
                            (false, false, false),
                            (true, false, false),
                            (false, true, false),
                            (false, false, true),
                        ] {
                            let mut case = sole_case();
                            case.application_type = application_type;
                            case.supplementary_case_type = supplementary_case_type;
                            case.application.service_method = service_method;
                            if reissued_offline {
                                case.application.reissue_option = Some(ReissueOption::OfflineAos);
                            }
                            if let Some(organisation) = app1_solicitor {
                                case.applicant1 =
                                    with_solicitor(case.applicant1.clone(), organisation);
                            }
                            if app2_offline {
                                case.applicant2 = offline(case.applicant2.clone());
                            }
                            case.applicant2.address_overseas = app2_overseas;
                            if let Some(organisation) = app2_solicitor {
                                case.applicant2 =
                                    with_solicitor(case.applicant2.clone(), organisation);
                            }
                            case.acknowledgement_of_service = aos(HowToRespond::DisputeDivorce);
                            case.conditional_order = ConditionalOrder {
                                refusal_decision: Some(RefusalOption::Reject),
                                switched_to_sole: true,
                                d84_who_applying: None,
                            };
                            case.final_order = FinalOrder {
                                switched_to_sole: true,
                                d36_who_applying: None,
                            };
                            case.request_for_information = Some(RequestForInformation {
                                party: if case.is_sole() {
                                    RequestForInformationParty::Applicant1
                                } else {
                                    RequestForInformationParty::Both
                                },
                                details: "Provide the marriage certificate".to_string(),
                            });
                            variants.push(case);
                        }
                    }
                }
            }
        }
    }
    variants
}

pub(super) fn d84_marker(who: OfflineWhoApplying) -> ConditionalOrder {
    ConditionalOrder {
        refusal_decision: None,
        switched_to_sole: true,
        d84_who_applying: Some(who),
    }
}

pub(super) fn generated(document: &OnDemandDocument) -> GeneratedDocument {
    GeneratedDocument {
        document_type: document.document_type,
        display_name: document.display_name.to_string(),
        file_name: format!("{}.pdf", document.file_name),
        link: format!("memory://{}", document.template_file),
    }
}

#[derive(Default)]
pub(super) struct MemoryGenerator {
    requests: Mutex<Vec<OnDemandDocument>>,
}

impl MemoryGenerator {
    pub(super) fn requests(&self) -> Vec<OnDemandDocument> {
        self.requests
            .lock()
            .expect("generator mutex poisoned")
            .clone()
    }
}

impl DocumentGenerator for MemoryGenerator {
    fn generate(
        &self,
        _case: &CaseDetails,
        document: &OnDemandDocument,
    ) -> Result<GeneratedDocument, GenerationError> {
        self.requests
            .lock()
            .expect("generator mutex poisoned")
            .push(*document);
        Ok(generated(document))
    }
}

pub(super) struct FailingGenerator;

impl DocumentGenerator for FailingGenerator {
    fn generate(
        &self,
        _case: &CaseDetails,
        document: &OnDemandDocument,
    ) -> Result<GeneratedDocument, GenerationError> {
        Err(GenerationError::TemplateNotFound(
            document.template_file.to_string(),
        ))
    }
}

#[derive(Default)]
pub(super) struct MemoryPrinter {
    requests: Mutex<Vec<PrintRequest>>,
}

impl MemoryPrinter {
    pub(super) fn requests(&self) -> Vec<PrintRequest> {
        self.requests
            .lock()
            .expect("printer mutex poisoned")
            .clone()
    }
}

impl LetterPrinter for MemoryPrinter {
    fn print(&self, request: PrintRequest) -> Result<PrintReceipt, PrintError> {
        let mut guard = self.requests.lock().expect("printer mutex poisoned");
        let receipt = PrintReceipt {
            letter_reference: format!("letter-{:04}", guard.len() + 1),
            document_count: request.documents.len(),
        };
        guard.push(request);
        Ok(receipt)
    }
}

pub(super) struct OfflinePrinter;

impl LetterPrinter for OfflinePrinter {
    fn print(&self, _request: PrintRequest) -> Result<PrintReceipt, PrintError> {
        Err(PrintError::Unavailable(
            "bulk print queue offline".to_string(),
        ))
    }
}

pub(super) fn build_service() -> (
    DocumentPackService<MemoryGenerator, MemoryPrinter>,
    Arc<MemoryGenerator>,
    Arc<MemoryPrinter>,
) {
    let generator = Arc::new(MemoryGenerator::default());
    let printer = Arc::new(MemoryPrinter::default());
    let service = DocumentPackService::new(Arc::new(catalog()), generator.clone(), printer.clone());
    (service, generator, printer)
}

pub(super) fn router_with_service<G, P>(service: DocumentPackService<G, P>) -> axum::Router
where
    G: DocumentGenerator + 'static,
    P: LetterPrinter + 'static,
{
    document_pack_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
