use super::common::*;

use crate::workflows::document_packs::case::{Party, ReissueOption, ServiceMethod};
use crate::workflows::document_packs::catalog::{LetterId, PackKey};
use crate::workflows::document_packs::document::{DocumentType, TemplateId};

#[test]
fn unrepresented_sole_applicant_with_court_service_gets_online_pack() {
    let case = sole_case();
    let catalog = catalog();
    let resolver = catalog
        .lookup_str("applicant-aos-pack")
        .expect("notice of proceedings registered");

    assert_eq!(resolver.letter_id(), LetterId::NoticeOfProceedings);
    let pack = resolver
        .resolve(&case, Party::Applicant1)
        .expect("pack resolves");

    assert_eq!(pack.key(), PackKey::NopSoleApp1CitizenCs);
    assert_eq!(
        pack.template_for(DocumentType::NoticeOfProceedingsApp1),
        Some(Some(TemplateId::NopA1SoleApp1CitCs))
    );
    assert_eq!(
        pack.template_for(DocumentType::Application),
        Some(Some(TemplateId::DivorceApplicationSole))
    );
    assert_eq!(
        TemplateId::NopA1SoleApp1CitCs.as_str(),
        "NFD_NOP_A1_SOLE_APP1_CIT_CS"
    );
    assert_eq!(
        TemplateId::DivorceApplicationSole.as_str(),
        "DIVORCE_APPLICATION_SOLE"
    );
    assert!(!pack.contains(DocumentType::Coversheet));
}

#[test]
fn sole_applicant_serving_personally_gets_personal_service_pack() {
    let mut case = sole_case();
    case.application.service_method = ServiceMethod::PersonalService;

    assert_eq!(
        select(LetterId::NoticeOfProceedings, &case, Party::Applicant1),
        Ok(PackKey::NopSoleApp1CitizenPs)
    );
}

#[test]
fn representation_is_checked_before_service_method() {
    let mut case = sole_case();
    case.applicant1 = with_solicitor(case.applicant1.clone(), true);
    case.application.service_method = ServiceMethod::PersonalService;

    assert_eq!(
        select(LetterId::NoticeOfProceedings, &case, Party::Applicant1),
        Ok(PackKey::NopSoleApp1Solicitor)
    );
}

#[test]
fn overseas_respondent_gets_coversheet_pack_regardless_of_service_method() {
    for service_method in [ServiceMethod::CourtService, ServiceMethod::PersonalService] {
        let mut case = sole_case();
        case.applicant2.address_overseas = true;
        case.application.service_method = service_method;

        let pack = catalog()
            .lookup(LetterId::NoticeOfProceedings)
            .expect("registered")
            .resolve(&case, Party::Applicant2)
            .expect("pack resolves");

        assert_eq!(pack.key(), PackKey::NopSoleRespondentOverseas);
        assert_eq!(
            pack.template_for(DocumentType::Coversheet),
            Some(Some(TemplateId::CoversheetApplicant))
        );
    }
}

#[test]
fn overseas_is_checked_before_offline_reissue() {
    let mut case = sole_case();
    case.applicant2.address_overseas = true;
    case.application.reissue_option = Some(ReissueOption::OfflineAos);

    assert_eq!(
        select(LetterId::NoticeOfProceedings, &case, Party::Applicant2),
        Ok(PackKey::NopSoleRespondentOverseas)
    );
}

#[test]
fn offline_respondents_get_paper_pack() {
    let mut reissued = sole_case();
    reissued.application.reissue_option = Some(ReissueOption::OfflineAos);
    let mut no_email = sole_case();
    no_email.applicant2.email = None;
    let mut personal_service = sole_case();
    personal_service.application.service_method = ServiceMethod::PersonalService;

    for case in [reissued, no_email, personal_service] {
        assert_eq!(
            select(LetterId::NoticeOfProceedings, &case, Party::Applicant2),
            Ok(PackKey::NopSoleRespondentOffline)
        );
    }
}

#[test]
fn online_respondent_gets_citizen_pack() {
    assert_eq!(
        select(
            LetterId::NoticeOfProceedings,
            &sole_case(),
            Party::Applicant2,
        ),
        Ok(PackKey::NopSoleRespondentCitizen)
    );
}

#[test]
fn respondent_solicitor_without_organisation_gets_offline_solicitor_pack() {
    let mut case = sole_case();
    case.applicant2 = with_solicitor(case.applicant2.clone(), false);
    case.applicant2.address_overseas = true;
    assert_eq!(
        select(LetterId::NoticeOfProceedings, &case, Party::Applicant2),
        Ok(PackKey::NopSoleRespondentSolicitorOffline)
    );

    case.applicant2 = with_solicitor(case.applicant2.clone(), true);
    assert_eq!(
        select(LetterId::NoticeOfProceedings, &case, Party::Applicant2),
        Ok(PackKey::NopSoleRespondentSolicitor)
    );
}

#[test]
fn joint_applicants_are_resolved_per_party() {
    let mut case = joint_case();
    case.applicant2 = offline(case.applicant2.clone());

    assert_eq!(
        select(LetterId::NoticeOfProceedings, &case, Party::Applicant1),
        Ok(PackKey::NopJointApp1Citizen)
    );
    assert_eq!(
        select(LetterId::NoticeOfProceedings, &case, Party::Applicant2),
        Ok(PackKey::NopJointApp2CitizenOffline)
    );

    case.applicant2 = with_solicitor(case.applicant2.clone(), true);
    assert_eq!(
        select(LetterId::NoticeOfProceedings, &case, Party::Applicant2),
        Ok(PackKey::NopJointApp2Solicitor)
    );
}

#[test]
fn joint_packs_carry_the_joint_application() {
    let pack = catalog()
        .lookup(LetterId::NoticeOfProceedings)
        .expect("registered")
        .resolve(&joint_case(), Party::Applicant2)
        .expect("pack resolves");

    assert_eq!(
        pack.template_for(DocumentType::Application),
        Some(Some(TemplateId::DivorceApplicationJoint))
    );
}

#[test]
fn separation_cases_use_judicial_separation_packs() {
    let mut personal = judicial_separation(sole_case());
    personal.application.service_method = ServiceMethod::PersonalService;
    assert_eq!(
        select(LetterId::NoticeOfProceedings, &personal, Party::Applicant1),
        Ok(PackKey::NopJsSoleApp1CitizenPs)
    );

    let mut overseas = separation(sole_case());
    overseas.applicant2.address_overseas = true;
    assert_eq!(
        select(LetterId::NoticeOfProceedings, &overseas, Party::Applicant2),
        Ok(PackKey::NopJsSoleRespondentCitizen)
    );

    let mut joint = judicial_separation(joint_case());
    joint.applicant1 = with_solicitor(joint.applicant1.clone(), true);
    assert_eq!(
        select(LetterId::NoticeOfProceedings, &joint, Party::Applicant1),
        Ok(PackKey::NopJsJointApp1Solicitor)
    );
    assert_eq!(
        select(LetterId::NoticeOfProceedings, &joint, Party::Applicant2),
        Ok(PackKey::NopJsJointApp2Citizen)
    );
}
