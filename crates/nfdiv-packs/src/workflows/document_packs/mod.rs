//! Selects the documents, templates and file names posted to an applicant for a letter.
//!
//! Resolution is a pure function of the case and the recipient. The only write to a case
//! is the explicit on-demand step, which the service runs after a pack has been selected.

pub mod case;
pub mod catalog;
pub mod document;
pub mod on_demand;
pub mod print;
pub mod resolvers;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use case::{
    AcknowledgementOfService, Applicant, Application, ApplicationType, CaseData, CaseDetails,
    CaseId, ConditionalOrder, DivorceOrDissolution, FinalOrder, GeneratedDocument, HowToRespond,
    LanguagePreference, OfflineWhoApplying, Party, RefusalOption, ReissueOption,
    RequestForInformation, RequestForInformationParty, ServiceMethod, Solicitor,
    SupplementaryCaseType,
};
pub use catalog::{write_decision_table, CatalogError, DecisionRow, LetterId, PackCatalog, PackKey};
pub use document::{
    Audience, DescriptorError, DocumentPack, DocumentType, PackDocument, PackTrack, TemplateId,
};
pub use on_demand::{
    ensure_on_demand_document, DocumentGenerator, GenerationError, OnDemandDocument, D84_PAPER_FORM,
};
pub use print::{LetterPrinter, PrintDocument, PrintError, PrintReceipt, PrintRequest};
pub use resolvers::{DocumentPackResolver, ResolveError, UndefinedScenarioResolver};
pub use router::{
    dispatch_status, document_pack_router, PackRequest, PrintedPackView, ResolvedPackView,
};
pub use service::{DispatchError, DocumentPackService};
