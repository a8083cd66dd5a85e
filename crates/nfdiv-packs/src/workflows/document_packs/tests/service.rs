use std::sync::Arc;

use chrono::NaiveDate;

use super::common::*;

use crate::workflows::document_packs::case::{
    HowToRespond, LanguagePreference, Party, RefusalOption, RequestForInformation,
    RequestForInformationParty,
};
use crate::workflows::document_packs::catalog::{LetterId, PackKey};
use crate::workflows::document_packs::document::{DocumentType, TemplateId};
use crate::workflows::document_packs::on_demand::{GenerationError, D84_PAPER_FORM};
use crate::workflows::document_packs::print::PrintError;
use crate::workflows::document_packs::resolvers::ResolveError;
use crate::workflows::document_packs::service::{DispatchError, DocumentPackService};

#[test]
fn resolve_generates_the_d84_for_apply_letters() {
    let (service, generator, _) = build_service();
    let mut case = details(sole_case());

    let pack = service
        .resolve(
            LetterId::ApplyForConditionalOrder,
            &mut case,
            Party::Applicant1,
        )
        .expect("pack resolves");

    assert_eq!(pack.key(), PackKey::ApplyForCoSole);
    assert!(case
        .data
        .has_generated(DocumentType::ConditionalOrderApplicationForm));
    assert_eq!(generator.requests(), vec![D84_PAPER_FORM]);

    service
        .resolve(
            LetterId::AwaitingConditionalOrderReminder,
            &mut case,
            Party::Applicant1,
        )
        .expect("reminder resolves");
    assert_eq!(generator.requests().len(), 1);
    assert_eq!(case.data.documents_generated.len(), 1);
}

#[test]
fn unresolvable_case_is_not_modified() {
    let (service, generator, _) = build_service();
    let mut data = sole_case();
    data.applicant1 = with_solicitor(data.applicant1.clone(), true);
    let mut case = details(data);
    let before = case.clone();

    let result = service.resolve(
        LetterId::ApplyForConditionalOrder,
        &mut case,
        Party::Applicant1,
    );

    assert!(matches!(
        result,
        Err(DispatchError::Resolve(ResolveError::NotApplicable { .. }))
    ));
    assert_eq!(case, before);
    assert!(generator.requests().is_empty());
}

#[test]
fn generation_failure_is_propagated() {
    let service = DocumentPackService::new(
        Arc::new(catalog()),
        Arc::new(FailingGenerator),
        Arc::new(MemoryPrinter::default()),
    );
    let mut case = details(joint_case());

    let result = service.print(
        LetterId::AwaitingConditionalOrderReminder,
        &mut case,
        Party::Applicant2,
    );

    assert!(matches!(
        result,
        Err(DispatchError::Generation(
            GenerationError::TemplateNotFound(_)
        ))
    ));
    assert!(case.data.documents_generated.is_empty());
}

#[test]
fn print_sends_templates_and_generated_documents_in_pack_order() {
    let (service, _, printer) = build_service();
    let mut case = details(sole_case());

    let receipt = service
        .print(
            LetterId::ApplyForConditionalOrder,
            &mut case,
            Party::Applicant1,
        )
        .expect("letter printed");

    assert_eq!(receipt.document_count, 3);
    let requests = printer.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.letter_id, LetterId::ApplyForConditionalOrder);
    assert_eq!(request.case_id, case.id);
    assert_eq!(request.recipient_name, "Alex Morgan");

    let documents: Vec<_> = request
        .documents
        .iter()
        .map(|document| {
            (
                document.document_type,
                document.template,
                document.file_name.as_str(),
            )
        })
        .collect();
    assert_eq!(
        documents,
        vec![
            (
                DocumentType::Coversheet,
                Some(TemplateId::CoversheetApplicant),
                "Coversheet",
            ),
            (
                DocumentType::ApplyForConditionalOrderLetter,
                Some(TemplateId::ApplyForCoLetterSole),
                "ApplyForConditionalOrderLetter",
            ),
            (
                DocumentType::ConditionalOrderApplicationForm,
                None,
                "D84.pdf",
            ),
        ]
    );
}

#[test]
fn represented_recipient_is_addressed_through_their_solicitor() {
    let (service, _, printer) = build_service();
    let mut data = sole_case();
    data.applicant1 = with_solicitor(data.applicant1.clone(), true);
    let mut case = details(data);

    service
        .print(LetterId::NoticeOfProceedings, &mut case, Party::Applicant1)
        .expect("letter printed");

    let requests = printer.requests();
    assert_eq!(requests[0].pack, PackKey::NopSoleApp1Solicitor);
    assert_eq!(requests[0].recipient_name, "Sam Hale");
}

#[test]
fn welsh_preference_travels_with_each_recipient() {
    let (service, _, printer) = build_service();
    let mut data = sole_case();
    data.applicant2.language_preference_welsh = true;
    let mut case = details(data);

    for party in [Party::Applicant2, Party::Applicant1] {
        service
            .print(LetterId::NoticeOfProceedings, &mut case, party)
            .expect("letter printed");
    }

    let requests = printer.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].recipient, Party::Applicant2);
    assert_eq!(requests[0].language, LanguagePreference::Welsh);
    assert_eq!(requests[1].recipient, Party::Applicant1);
    assert_eq!(requests[1].language, LanguagePreference::English);
}

#[test]
fn aos_response_letter_carries_the_submission_date() {
    let (service, _, printer) = build_service();
    let mut data = sole_case();
    data.acknowledgement_of_service = aos(HowToRespond::WithoutDispute);
    let mut case = details(data);

    service
        .print(LetterId::AosResponseLetter, &mut case, Party::Applicant1)
        .expect("letter printed");

    let requests = printer.requests();
    assert_eq!(requests[0].pack, PackKey::AosResponseUndisputed);
    assert_eq!(
        requests[0].aos_submitted_on,
        NaiveDate::from_ymd_opt(2024, 4, 2)
    );
    assert_eq!(requests[0].information_requested, None);
}

#[test]
fn request_for_information_letter_carries_the_request() {
    let (service, _, printer) = build_service();
    let mut data = joint_case();
    data.acknowledgement_of_service = aos(HowToRespond::WithoutDispute);
    data.request_for_information = Some(RequestForInformation {
        party: RequestForInformationParty::Both,
        details: "  Provide the marriage certificate\n".to_string(),
    });
    let mut case = details(data);

    service
        .print(
            LetterId::RequestForInformation,
            &mut case,
            Party::Applicant2,
        )
        .expect("letter printed");
    service
        .print(LetterId::NoticeOfProceedings, &mut case, Party::Applicant1)
        .expect("letter printed");

    let requests = printer.requests();
    assert_eq!(requests[0].pack, PackKey::RequestForInformationJoint);
    assert_eq!(
        requests[0].information_requested.as_deref(),
        Some("Provide the marriage certificate")
    );
    assert_eq!(requests[0].aos_submitted_on, None);
    assert_eq!(requests[1].information_requested, None);
    assert_eq!(requests[1].aos_submitted_on, None);
}

#[test]
fn derived_document_missing_from_case_blocks_printing() {
    let (service, _, printer) = build_service();
    let mut data = sole_case();
    data.conditional_order.refusal_decision = Some(RefusalOption::MoreInfo);
    let mut case = details(data);

    let result = service.print(
        LetterId::ConditionalOrderRefused,
        &mut case,
        Party::Applicant1,
    );

    assert!(matches!(
        result,
        Err(DispatchError::MissingGeneratedDocument {
            letter_id: LetterId::ConditionalOrderRefused,
            document_type: DocumentType::ConditionalOrderRefusal,
        })
    ));
    assert!(printer.requests().is_empty());
}

#[test]
fn printer_failures_are_propagated() {
    let service = DocumentPackService::new(
        Arc::new(catalog()),
        Arc::new(MemoryGenerator::default()),
        Arc::new(OfflinePrinter),
    );
    let mut case = details(sole_case());

    let result = service.print(LetterId::NoticeOfProceedings, &mut case, Party::Applicant2);

    assert!(matches!(
        result,
        Err(DispatchError::Print(PrintError::Unavailable(_)))
    ));
}

#[test]
fn service_lists_every_letter_id() {
    let (service, _, _) = build_service();
    assert_eq!(service.letter_ids(), LetterId::ALL.to_vec());
    assert!(!service.decision_table().is_empty());
}
