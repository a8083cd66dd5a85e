use super::super::document::{
    Audience, DocumentPack, DocumentType, PackDescriptor, PackTrack, TemplateId,
};
use serde::{Serialize, Serializer};
use std::fmt;

const COVERSHEET_DOCUMENT_NAME: &str = "Coversheet";
const NOTICE_OF_PROCEEDINGS_APP_1_DOCUMENT_NAME: &str = "NoticeOfProceedingsApplicant1";
const NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME: &str = "NoticeOfProceedingsApplicant2";
const DIVORCE_APPLICATION_DOCUMENT_NAME: &str = "DivorceApplication";
const AOS_OVERDUE_LETTER_DOCUMENT_NAME: &str = "AosOverdueLetter";
const AOS_RESPONSE_LETTER_DOCUMENT_NAME: &str = "AosResponseLetter";
const CERTIFICATE_OF_ENTITLEMENT_COVER_LETTER_DOCUMENT_NAME: &str =
    "CertificateOfEntitlementCoverLetter";
const CO_GRANTED_COVER_LETTER_DOCUMENT_NAME: &str = "ConditionalOrderGrantedCoverLetter";
const CO_REFUSAL_COVER_LETTER_DOCUMENT_NAME: &str = "ConditionalOrderRefusalCoverLetter";
const CO_PRONOUNCED_LETTER_DOCUMENT_NAME: &str = "ConditionalOrderPronouncedLetter";
const FO_GRANTED_COVER_LETTER_DOCUMENT_NAME: &str = "FinalOrderGrantedCoverLetter";
const SWITCH_TO_SOLE_CO_LETTER_DOCUMENT_NAME: &str = "SwitchToSoleConditionalOrderLetter";
const SWITCH_TO_SOLE_FO_LETTER_DOCUMENT_NAME: &str = "SwitchToSoleFinalOrderLetter";
const REQUEST_FOR_INFORMATION_LETTER_DOCUMENT_NAME: &str = "RequestForInformationLetter";
const APPLY_FOR_CO_LETTER_DOCUMENT_NAME: &str = "ApplyForConditionalOrderLetter";
const CO_REMINDER_LETTER_DOCUMENT_NAME: &str = "ConditionalOrderReminderLetter";

/// Every pack constant a resolver can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PackKey {
    NopSoleApp1CitizenCs,
    NopSoleApp1CitizenPs,
    NopSoleApp1Solicitor,
    NopSoleRespondentCitizen,
    NopSoleRespondentOffline,
    NopSoleRespondentOverseas,
    NopSoleRespondentSolicitor,
    NopSoleRespondentSolicitorOffline,
    NopJointApp1Citizen,
    NopJointApp2Citizen,
    NopJointApp2CitizenOffline,
    NopJointApp1Solicitor,
    NopJointApp2Solicitor,
    NopJsSoleApp1CitizenCs,
    NopJsSoleApp1CitizenPs,
    NopJsSoleApp1Solicitor,
    NopJsSoleRespondentCitizen,
    NopJsSoleRespondentSolicitor,
    NopJsJointApp1Citizen,
    NopJsJointApp2Citizen,
    NopJsJointApp1Solicitor,
    NopJsJointApp2Solicitor,
    AosOverdue,
    AosOverdueJs,
    AosResponseDisputed,
    AosResponseUndisputed,
    AosResponseJsDisputed,
    AosResponseJsUndisputed,
    AosResponseJsSolicitor,
    CertificateOfEntitlementApplicant,
    CertificateOfEntitlementRespondent,
    CertificateOfEntitlementSolicitor,
    CertificateOfEntitlementJs,
    CertificateOfEntitlementJsSolicitor,
    CoGrantedApplicant1,
    CoGrantedApplicant2,
    CoGrantedJoint,
    CoGrantedSolicitor,
    CoGrantedJs,
    CoGrantedJsSolicitor,
    CoGrantedSeparation,
    Clarification,
    ClarificationSol,
    ClarificationJs,
    ClarificationSolJs,
    Amendment,
    AmendmentSol,
    AmendmentJs,
    AmendmentSolJs,
    CoPronouncedApplicant,
    CoPronouncedRespondent,
    CoPronouncedSolicitor,
    CoPronouncedJs,
    CoPronouncedJsSolicitor,
    FoGrantedApplicant1,
    FoGrantedApplicant2,
    FoGrantedSolicitor,
    SwitchToSoleCo,
    SwitchToSoleCoSolicitor,
    JudicialSeparationSwitchToSoleCo,
    JudicialSeparationSwitchToSoleCoSolicitor,
    SwitchToSoleFo,
    SwitchToSoleFoSolicitor,
    RequestForInformationSole,
    RequestForInformationJoint,
    RequestForInformationOffline,
    RequestForInformationSolicitor,
    ApplyForCoSole,
    ApplyForCoJoint,
    ApplyForCoJs,
    CoReminderSole,
    CoReminderJoint,
    CoReminderJs,
}

impl PackKey {
    pub const ALL: &'static [PackKey] = &[
        PackKey::NopSoleApp1CitizenCs,
        PackKey::NopSoleApp1CitizenPs,
        PackKey::NopSoleApp1Solicitor,
        PackKey::NopSoleRespondentCitizen,
        PackKey::NopSoleRespondentOffline,
        PackKey::NopSoleRespondentOverseas,
        PackKey::NopSoleRespondentSolicitor,
        PackKey::NopSoleRespondentSolicitorOffline,
        PackKey::NopJointApp1Citizen,
        PackKey::NopJointApp2Citizen,
        PackKey::NopJointApp2CitizenOffline,
        PackKey::NopJointApp1Solicitor,
        PackKey::NopJointApp2Solicitor,
        PackKey::NopJsSoleApp1CitizenCs,
        PackKey::NopJsSoleApp1CitizenPs,
        PackKey::NopJsSoleApp1Solicitor,
        PackKey::NopJsSoleRespondentCitizen,
        PackKey::NopJsSoleRespondentSolicitor,
        PackKey::NopJsJointApp1Citizen,
        PackKey::NopJsJointApp2Citizen,
        PackKey::NopJsJointApp1Solicitor,
        PackKey::NopJsJointApp2Solicitor,
        PackKey::AosOverdue,
        PackKey::AosOverdueJs,
        PackKey::AosResponseDisputed,
        PackKey::AosResponseUndisputed,
        PackKey::AosResponseJsDisputed,
        PackKey::AosResponseJsUndisputed,
        PackKey::AosResponseJsSolicitor,
        PackKey::CertificateOfEntitlementApplicant,
        PackKey::CertificateOfEntitlementRespondent,
        PackKey::CertificateOfEntitlementSolicitor,
        PackKey::CertificateOfEntitlementJs,
        PackKey::CertificateOfEntitlementJsSolicitor,
        PackKey::CoGrantedApplicant1,
        PackKey::CoGrantedApplicant2,
        PackKey::CoGrantedJoint,
        PackKey::CoGrantedSolicitor,
        PackKey::CoGrantedJs,
        PackKey::CoGrantedJsSolicitor,
        PackKey::CoGrantedSeparation,
        PackKey::Clarification,
        PackKey::ClarificationSol,
        PackKey::ClarificationJs,
        PackKey::ClarificationSolJs,
        PackKey::Amendment,
        PackKey::AmendmentSol,
        PackKey::AmendmentJs,
        PackKey::AmendmentSolJs,
        PackKey::CoPronouncedApplicant,
        PackKey::CoPronouncedRespondent,
        PackKey::CoPronouncedSolicitor,
        PackKey::CoPronouncedJs,
        PackKey::CoPronouncedJsSolicitor,
        PackKey::FoGrantedApplicant1,
        PackKey::FoGrantedApplicant2,
        PackKey::FoGrantedSolicitor,
        PackKey::SwitchToSoleCo,
        PackKey::SwitchToSoleCoSolicitor,
        PackKey::JudicialSeparationSwitchToSoleCo,
        PackKey::JudicialSeparationSwitchToSoleCoSolicitor,
        PackKey::SwitchToSoleFo,
        PackKey::SwitchToSoleFoSolicitor,
        PackKey::RequestForInformationSole,
        PackKey::RequestForInformationJoint,
        PackKey::RequestForInformationOffline,
        PackKey::RequestForInformationSolicitor,
        PackKey::ApplyForCoSole,
        PackKey::ApplyForCoJoint,
        PackKey::ApplyForCoJs,
        PackKey::CoReminderSole,
        PackKey::CoReminderJoint,
        PackKey::CoReminderJs,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PackKey::NopSoleApp1CitizenCs => "NOP_SOLE_APP1_CITIZEN_CS_PACK",
            PackKey::NopSoleApp1CitizenPs => "NOP_SOLE_APP1_CITIZEN_PS_PACK",
            PackKey::NopSoleApp1Solicitor => "NOP_SOLE_APP1_SOLICITOR_PACK",
            PackKey::NopSoleRespondentCitizen => "NOP_SOLE_RESPONDENT_CITIZEN_PACK",
            PackKey::NopSoleRespondentOffline => "NOP_SOLE_RESPONDENT_OFFLINE_PACK",
            PackKey::NopSoleRespondentOverseas => "NOP_SOLE_RESPONDENT_OVERSEAS_PACK",
            PackKey::NopSoleRespondentSolicitor => "NOP_SOLE_RESPONDENT_SOLICITOR_PACK",
            PackKey::NopSoleRespondentSolicitorOffline => {
                "NOP_SOLE_RESPONDENT_SOLICITOR_OFFLINE_PACK"
            }
            PackKey::NopJointApp1Citizen => "NOP_JOINT_APP1_CITIZEN_PACK",
            PackKey::NopJointApp2Citizen => "NOP_JOINT_APP2_CITIZEN_PACK",
            PackKey::NopJointApp2CitizenOffline => "NOP_JOINT_APP2_CITIZEN_OFFLINE_PACK",
            PackKey::NopJointApp1Solicitor => "NOP_JOINT_APP1_SOLICITOR_PACK",
            PackKey::NopJointApp2Solicitor => "NOP_JOINT_APP2_SOLICITOR_PACK",
            PackKey::NopJsSoleApp1CitizenCs => "NOP_JS_SOLE_APP1_CITIZEN_CS_PACK",
            PackKey::NopJsSoleApp1CitizenPs => "NOP_JS_SOLE_APP1_CITIZEN_PS_PACK",
            PackKey::NopJsSoleApp1Solicitor => "NOP_JS_SOLE_APP1_SOLICITOR_PACK",
            PackKey::NopJsSoleRespondentCitizen => "NOP_JS_SOLE_RESPONDENT_CITIZEN_PACK",
            PackKey::NopJsSoleRespondentSolicitor => "NOP_JS_SOLE_RESPONDENT_SOLICITOR_PACK",
            PackKey::NopJsJointApp1Citizen => "NOP_JS_JOINT_APP1_CITIZEN_PACK",
            PackKey::NopJsJointApp2Citizen => "NOP_JS_JOINT_APP2_CITIZEN_PACK",
            PackKey::NopJsJointApp1Solicitor => "NOP_JS_JOINT_APP1_SOLICITOR_PACK",
            PackKey::NopJsJointApp2Solicitor => "NOP_JS_JOINT_APP2_SOLICITOR_PACK",
            PackKey::AosOverdue => "AOS_OVERDUE_PACK",
            PackKey::AosOverdueJs => "AOS_OVERDUE_JS_PACK",
            PackKey::AosResponseDisputed => "AOS_RESPONSE_DISPUTED_PACK",
            PackKey::AosResponseUndisputed => "AOS_RESPONSE_UNDISPUTED_PACK",
            PackKey::AosResponseJsDisputed => "AOS_RESPONSE_JS_DISPUTED_PACK",
            PackKey::AosResponseJsUndisputed => "AOS_RESPONSE_JS_UNDISPUTED_PACK",
            PackKey::AosResponseJsSolicitor => "AOS_RESPONSE_JS_SOLICITOR_PACK",
            PackKey::CertificateOfEntitlementApplicant => {
                "CERTIFICATE_OF_ENTITLEMENT_APPLICANT_PACK"
            }
            PackKey::CertificateOfEntitlementRespondent => {
                "CERTIFICATE_OF_ENTITLEMENT_RESPONDENT_PACK"
            }
            PackKey::CertificateOfEntitlementSolicitor => {
                "CERTIFICATE_OF_ENTITLEMENT_SOLICITOR_PACK"
            }
            PackKey::CertificateOfEntitlementJs => "CERTIFICATE_OF_ENTITLEMENT_JS_PACK",
            PackKey::CertificateOfEntitlementJsSolicitor => {
                "CERTIFICATE_OF_ENTITLEMENT_JS_SOLICITOR_PACK"
            }
            PackKey::CoGrantedApplicant1 => "CO_GRANTED_APPLICANT1_PACK",
            PackKey::CoGrantedApplicant2 => "CO_GRANTED_APPLICANT2_PACK",
            PackKey::CoGrantedJoint => "CO_GRANTED_JOINT_PACK",
            PackKey::CoGrantedSolicitor => "CO_GRANTED_SOLICITOR_PACK",
            PackKey::CoGrantedJs => "CO_GRANTED_JS_PACK",
            PackKey::CoGrantedJsSolicitor => "CO_GRANTED_JS_SOLICITOR_PACK",
            PackKey::CoGrantedSeparation => "CO_GRANTED_SEPARATION_PACK",
            PackKey::Clarification => "CLARIFICATION_PACK",
            PackKey::ClarificationSol => "CLARIFICATION_SOL_PACK",
            PackKey::ClarificationJs => "CLARIFICATION_JS_PACK",
            PackKey::ClarificationSolJs => "CLARIFICATION_SOL_JS_PACK",
            PackKey::Amendment => "AMENDMENT_PACK",
            PackKey::AmendmentSol => "AMENDMENT_SOL_PACK",
            PackKey::AmendmentJs => "AMENDMENT_JS_PACK",
            PackKey::AmendmentSolJs => "AMENDMENT_SOL_JS_PACK",
            PackKey::CoPronouncedApplicant => "CO_PRONOUNCED_APPLICANT_PACK",
            PackKey::CoPronouncedRespondent => "CO_PRONOUNCED_RESPONDENT_PACK",
            PackKey::CoPronouncedSolicitor => "CO_PRONOUNCED_SOLICITOR_PACK",
            PackKey::CoPronouncedJs => "CO_PRONOUNCED_JS_PACK",
            PackKey::CoPronouncedJsSolicitor => "CO_PRONOUNCED_JS_SOLICITOR_PACK",
            PackKey::FoGrantedApplicant1 => "FO_GRANTED_APPLICANT1_PACK",
            PackKey::FoGrantedApplicant2 => "FO_GRANTED_APPLICANT2_PACK",
            PackKey::FoGrantedSolicitor => "FO_GRANTED_SOLICITOR_PACK",
            PackKey::SwitchToSoleCo => "SWITCH_TO_SOLE_CO_PACK",
            PackKey::SwitchToSoleCoSolicitor => "SWITCH_TO_SOLE_CO_SOLICITOR_PACK",
            PackKey::JudicialSeparationSwitchToSoleCo => {
                "JUDICIAL_SEPARATION_SWITCH_TO_SOLE_CO_PACK"
            }
            PackKey::JudicialSeparationSwitchToSoleCoSolicitor => {
                "JUDICIAL_SEPARATION_SWITCH_TO_SOLE_CO_SOLICITOR_PACK"
            }
            PackKey::SwitchToSoleFo => "SWITCH_TO_SOLE_FO_PACK",
            PackKey::SwitchToSoleFoSolicitor => "SWITCH_TO_SOLE_FO_SOLICITOR_PACK",
            PackKey::RequestForInformationSole => "REQUEST_FOR_INFORMATION_SOLE_PACK",
            PackKey::RequestForInformationJoint => "REQUEST_FOR_INFORMATION_JOINT_PACK",
            PackKey::RequestForInformationOffline => "REQUEST_FOR_INFORMATION_OFFLINE_PACK",
            PackKey::RequestForInformationSolicitor => "REQUEST_FOR_INFORMATION_SOLICITOR_PACK",
            PackKey::ApplyForCoSole => "APPLY_FOR_CO_SOLE_PACK",
            PackKey::ApplyForCoJoint => "APPLY_FOR_CO_JOINT_PACK",
            PackKey::ApplyForCoJs => "APPLY_FOR_CO_JS_PACK",
            PackKey::CoReminderSole => "CO_REMINDER_SOLE_PACK",
            PackKey::CoReminderJoint => "CO_REMINDER_JOINT_PACK",
            PackKey::CoReminderJs => "CO_REMINDER_JS_PACK",
        }
    }

    pub fn descriptor(self) -> &'static PackDescriptor {
        match self {
            PackKey::NopSoleApp1CitizenCs => &NOP_SOLE_APP1_CITIZEN_CS,
            PackKey::NopSoleApp1CitizenPs => &NOP_SOLE_APP1_CITIZEN_PS,
            PackKey::NopSoleApp1Solicitor => &NOP_SOLE_APP1_SOLICITOR,
            PackKey::NopSoleRespondentCitizen => &NOP_SOLE_RESPONDENT_CITIZEN,
            PackKey::NopSoleRespondentOffline => &NOP_SOLE_RESPONDENT_OFFLINE,
            PackKey::NopSoleRespondentOverseas => &NOP_SOLE_RESPONDENT_OVERSEAS,
            PackKey::NopSoleRespondentSolicitor => &NOP_SOLE_RESPONDENT_SOLICITOR,
            PackKey::NopSoleRespondentSolicitorOffline => &NOP_SOLE_RESPONDENT_SOLICITOR_OFFLINE,
            PackKey::NopJointApp1Citizen => &NOP_JOINT_APP1_CITIZEN,
            PackKey::NopJointApp2Citizen => &NOP_JOINT_APP2_CITIZEN,
            PackKey::NopJointApp2CitizenOffline => &NOP_JOINT_APP2_CITIZEN_OFFLINE,
            PackKey::NopJointApp1Solicitor => &NOP_JOINT_APP1_SOLICITOR,
            PackKey::NopJointApp2Solicitor => &NOP_JOINT_APP2_SOLICITOR,
            PackKey::NopJsSoleApp1CitizenCs => &NOP_JS_SOLE_APP1_CITIZEN_CS,
            PackKey::NopJsSoleApp1CitizenPs => &NOP_JS_SOLE_APP1_CITIZEN_PS,
            PackKey::NopJsSoleApp1Solicitor => &NOP_JS_SOLE_APP1_SOLICITOR,
            PackKey::NopJsSoleRespondentCitizen => &NOP_JS_SOLE_RESPONDENT_CITIZEN,
            PackKey::NopJsSoleRespondentSolicitor => &NOP_JS_SOLE_RESPONDENT_SOLICITOR,
            PackKey::NopJsJointApp1Citizen => &NOP_JS_JOINT_APP1_CITIZEN,
            PackKey::NopJsJointApp2Citizen => &NOP_JS_JOINT_APP2_CITIZEN,
            PackKey::NopJsJointApp1Solicitor => &NOP_JS_JOINT_APP1_SOLICITOR,
            PackKey::NopJsJointApp2Solicitor => &NOP_JS_JOINT_APP2_SOLICITOR,
            PackKey::AosOverdue => &AOS_OVERDUE,
            PackKey::AosOverdueJs => &AOS_OVERDUE_JS,
            PackKey::AosResponseDisputed => &AOS_RESPONSE_DISPUTED,
            PackKey::AosResponseUndisputed => &AOS_RESPONSE_UNDISPUTED,
            PackKey::AosResponseJsDisputed => &AOS_RESPONSE_JS_DISPUTED,
            PackKey::AosResponseJsUndisputed => &AOS_RESPONSE_JS_UNDISPUTED,
            PackKey::AosResponseJsSolicitor => &AOS_RESPONSE_JS_SOLICITOR,
            PackKey::CertificateOfEntitlementApplicant => &CERTIFICATE_OF_ENTITLEMENT_APPLICANT,
            PackKey::CertificateOfEntitlementRespondent => &CERTIFICATE_OF_ENTITLEMENT_RESPONDENT,
            PackKey::CertificateOfEntitlementSolicitor => &CERTIFICATE_OF_ENTITLEMENT_SOLICITOR,
            PackKey::CertificateOfEntitlementJs => &CERTIFICATE_OF_ENTITLEMENT_JS,
            PackKey::CertificateOfEntitlementJsSolicitor => {
                &CERTIFICATE_OF_ENTITLEMENT_JS_SOLICITOR
            }
            PackKey::CoGrantedApplicant1 => &CO_GRANTED_APPLICANT1,
            PackKey::CoGrantedApplicant2 => &CO_GRANTED_APPLICANT2,
            PackKey::CoGrantedJoint => &CO_GRANTED_JOINT,
            PackKey::CoGrantedSolicitor => &CO_GRANTED_SOLICITOR,
            PackKey::CoGrantedJs => &CO_GRANTED_JS,
            PackKey::CoGrantedJsSolicitor => &CO_GRANTED_JS_SOLICITOR,
            PackKey::CoGrantedSeparation => &CO_GRANTED_SEPARATION,
            PackKey::Clarification => &CLARIFICATION,
            PackKey::ClarificationSol => &CLARIFICATION_SOL,
            PackKey::ClarificationJs => &CLARIFICATION_JS,
            PackKey::ClarificationSolJs => &CLARIFICATION_SOL_JS,
            PackKey::Amendment => &AMENDMENT,
            PackKey::AmendmentSol => &AMENDMENT_SOL,
            PackKey::AmendmentJs => &AMENDMENT_JS,
            PackKey::AmendmentSolJs => &AMENDMENT_SOL_JS,
            PackKey::CoPronouncedApplicant => &CO_PRONOUNCED_APPLICANT,
            PackKey::CoPronouncedRespondent => &CO_PRONOUNCED_RESPONDENT,
            PackKey::CoPronouncedSolicitor => &CO_PRONOUNCED_SOLICITOR,
            PackKey::CoPronouncedJs => &CO_PRONOUNCED_JS,
            PackKey::CoPronouncedJsSolicitor => &CO_PRONOUNCED_JS_SOLICITOR,
            PackKey::FoGrantedApplicant1 => &FO_GRANTED_APPLICANT1,
            PackKey::FoGrantedApplicant2 => &FO_GRANTED_APPLICANT2,
            PackKey::FoGrantedSolicitor => &FO_GRANTED_SOLICITOR,
            PackKey::SwitchToSoleCo => &SWITCH_TO_SOLE_CO,
            PackKey::SwitchToSoleCoSolicitor => &SWITCH_TO_SOLE_CO_SOLICITOR,
            PackKey::JudicialSeparationSwitchToSoleCo => &JUDICIAL_SEPARATION_SWITCH_TO_SOLE_CO,
            PackKey::JudicialSeparationSwitchToSoleCoSolicitor => {
                &JUDICIAL_SEPARATION_SWITCH_TO_SOLE_CO_SOLICITOR
            }
            PackKey::SwitchToSoleFo => &SWITCH_TO_SOLE_FO,
            PackKey::SwitchToSoleFoSolicitor => &SWITCH_TO_SOLE_FO_SOLICITOR,
            PackKey::RequestForInformationSole => &REQUEST_FOR_INFORMATION_SOLE,
            PackKey::RequestForInformationJoint => &REQUEST_FOR_INFORMATION_JOINT,
            PackKey::RequestForInformationOffline => &REQUEST_FOR_INFORMATION_OFFLINE,
            PackKey::RequestForInformationSolicitor => &REQUEST_FOR_INFORMATION_SOLICITOR,
            PackKey::ApplyForCoSole => &APPLY_FOR_CO_SOLE,
            PackKey::ApplyForCoJoint => &APPLY_FOR_CO_JOINT,
            PackKey::ApplyForCoJs => &APPLY_FOR_CO_JS,
            PackKey::CoReminderSole => &CO_REMINDER_SOLE,
            PackKey::CoReminderJoint => &CO_REMINDER_JOINT,
            PackKey::CoReminderJs => &CO_REMINDER_JS,
        }
    }

    pub fn to_pack(self) -> DocumentPack {
        self.descriptor().to_pack()
    }
}

impl fmt::Display for PackKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PackKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// Notice of proceedings

static NOP_SOLE_APP1_CITIZEN_CS: PackDescriptor = PackDescriptor {
    key: PackKey::NopSoleApp1CitizenCs,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp1,
            Some(TemplateId::NopA1SoleApp1CitCs),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopA1SoleApp1CitCs,
            NOTICE_OF_PROCEEDINGS_APP_1_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_SOLE_APP1_CITIZEN_PS: PackDescriptor = PackDescriptor {
    key: PackKey::NopSoleApp1CitizenPs,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp1,
            Some(TemplateId::NopA2SoleApp1CitPs),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopA2SoleApp1CitPs,
            NOTICE_OF_PROCEEDINGS_APP_1_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_SOLE_APP1_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::NopSoleApp1Solicitor,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp1,
            Some(TemplateId::NopAs1SoleApp1SolCs),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopAs1SoleApp1SolCs,
            NOTICE_OF_PROCEEDINGS_APP_1_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_SOLE_RESPONDENT_CITIZEN: PackDescriptor = PackDescriptor {
    key: PackKey::NopSoleRespondentCitizen,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp2,
            Some(TemplateId::NopR1SoleApp2CitOnline),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopR1SoleApp2CitOnline,
            NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_SOLE_RESPONDENT_OFFLINE: PackDescriptor = PackDescriptor {
    key: PackKey::NopSoleRespondentOffline,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::NoticeOfProceedingsApp2,
            Some(TemplateId::NopR2SoleApp2CitOffline),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::NopR2SoleApp2CitOffline,
            NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_SOLE_RESPONDENT_OVERSEAS: PackDescriptor = PackDescriptor {
    key: PackKey::NopSoleRespondentOverseas,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::NoticeOfProceedingsApp2,
            Some(TemplateId::NopR2SoleApp2CitOs),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::NopR2SoleApp2CitOs,
            NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_SOLE_RESPONDENT_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::NopSoleRespondentSolicitor,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp2,
            Some(TemplateId::NopRs1SoleApp2SolOnline),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopRs1SoleApp2SolOnline,
            NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_SOLE_RESPONDENT_SOLICITOR_OFFLINE: PackDescriptor = PackDescriptor {
    key: PackKey::NopSoleRespondentSolicitorOffline,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::NoticeOfProceedingsApp2,
            Some(TemplateId::NopRs2SoleApp2SolOffline),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::NopRs2SoleApp2SolOffline,
            NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JOINT_APP1_CITIZEN: PackDescriptor = PackDescriptor {
    key: PackKey::NopJointApp1Citizen,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp1,
            Some(TemplateId::NopJa1JointApp1App2Cit),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationJoint),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopJa1JointApp1App2Cit,
            NOTICE_OF_PROCEEDINGS_APP_1_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationJoint,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JOINT_APP2_CITIZEN: PackDescriptor = PackDescriptor {
    key: PackKey::NopJointApp2Citizen,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp2,
            Some(TemplateId::NopJa1JointApp1App2Cit),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationJoint),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopJa1JointApp1App2Cit,
            NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationJoint,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JOINT_APP2_CITIZEN_OFFLINE: PackDescriptor = PackDescriptor {
    key: PackKey::NopJointApp2CitizenOffline,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::NoticeOfProceedingsApp2,
            Some(TemplateId::NopJa2JointApp2CitOffline),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationJoint),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::NopJa2JointApp2CitOffline,
            NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationJoint,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JOINT_APP1_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::NopJointApp1Solicitor,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp1,
            Some(TemplateId::NopAs2JointApp1App2Sol),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationJoint),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopAs2JointApp1App2Sol,
            NOTICE_OF_PROCEEDINGS_APP_1_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationJoint,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JOINT_APP2_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::NopJointApp2Solicitor,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp2,
            Some(TemplateId::NopAs2JointApp1App2Sol),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationJoint),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopAs2JointApp1App2Sol,
            NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationJoint,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JS_SOLE_APP1_CITIZEN_CS: PackDescriptor = PackDescriptor {
    key: PackKey::NopJsSoleApp1CitizenCs,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp1,
            Some(TemplateId::NopJsSoleApp1CitCs),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopJsSoleApp1CitCs,
            NOTICE_OF_PROCEEDINGS_APP_1_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JS_SOLE_APP1_CITIZEN_PS: PackDescriptor = PackDescriptor {
    key: PackKey::NopJsSoleApp1CitizenPs,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp1,
            Some(TemplateId::NopJsSoleApp1CitPs),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopJsSoleApp1CitPs,
            NOTICE_OF_PROCEEDINGS_APP_1_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JS_SOLE_APP1_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::NopJsSoleApp1Solicitor,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp1,
            Some(TemplateId::NopJsSoleApp1Sol),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopJsSoleApp1Sol,
            NOTICE_OF_PROCEEDINGS_APP_1_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JS_SOLE_RESPONDENT_CITIZEN: PackDescriptor = PackDescriptor {
    key: PackKey::NopJsSoleRespondentCitizen,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::NoticeOfProceedingsApp2,
            Some(TemplateId::NopJsSoleRespCit),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::NopJsSoleRespCit,
            NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JS_SOLE_RESPONDENT_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::NopJsSoleRespondentSolicitor,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp2,
            Some(TemplateId::NopJsSoleRespSol),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationSole),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopJsSoleRespSol,
            NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationSole,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JS_JOINT_APP1_CITIZEN: PackDescriptor = PackDescriptor {
    key: PackKey::NopJsJointApp1Citizen,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp1,
            Some(TemplateId::NopJsJointCit),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationJoint),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopJsJointCit,
            NOTICE_OF_PROCEEDINGS_APP_1_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationJoint,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JS_JOINT_APP2_CITIZEN: PackDescriptor = PackDescriptor {
    key: PackKey::NopJsJointApp2Citizen,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp2,
            Some(TemplateId::NopJsJointCit),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationJoint),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopJsJointCit,
            NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationJoint,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JS_JOINT_APP1_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::NopJsJointApp1Solicitor,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp1,
            Some(TemplateId::NopJsJointSol),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationJoint),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopJsJointSol,
            NOTICE_OF_PROCEEDINGS_APP_1_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationJoint,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

static NOP_JS_JOINT_APP2_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::NopJsJointApp2Solicitor,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::NoticeOfProceedingsApp2,
            Some(TemplateId::NopJsJointSol),
        ),
        (
            DocumentType::Application,
            Some(TemplateId::DivorceApplicationJoint),
        ),
    ],
    template_names: &[
        (
            TemplateId::NopJsJointSol,
            NOTICE_OF_PROCEEDINGS_APP_2_DOCUMENT_NAME,
        ),
        (
            TemplateId::DivorceApplicationJoint,
            DIVORCE_APPLICATION_DOCUMENT_NAME,
        ),
    ],
};

// Acknowledgement of service

static AOS_OVERDUE: PackDescriptor = PackDescriptor {
    key: PackKey::AosOverdue,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::AosOverdueLetter,
            Some(TemplateId::AosOverdueLetter),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::AosOverdueLetter,
            AOS_OVERDUE_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static AOS_OVERDUE_JS: PackDescriptor = PackDescriptor {
    key: PackKey::AosOverdueJs,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::AosOverdueLetter,
            Some(TemplateId::AosOverdueJsLetter),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::AosOverdueJsLetter,
            AOS_OVERDUE_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static AOS_RESPONSE_DISPUTED: PackDescriptor = PackDescriptor {
    key: PackKey::AosResponseDisputed,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::AosResponseLetter,
            Some(TemplateId::AosResponseDisputed),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::AosResponseDisputed,
            AOS_RESPONSE_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static AOS_RESPONSE_UNDISPUTED: PackDescriptor = PackDescriptor {
    key: PackKey::AosResponseUndisputed,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::AosResponseLetter,
            Some(TemplateId::AosResponseUndisputed),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::AosResponseUndisputed,
            AOS_RESPONSE_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static AOS_RESPONSE_JS_DISPUTED: PackDescriptor = PackDescriptor {
    key: PackKey::AosResponseJsDisputed,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::AosResponseLetter,
            Some(TemplateId::AosResponseJsDisputed),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::AosResponseJsDisputed,
            AOS_RESPONSE_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static AOS_RESPONSE_JS_UNDISPUTED: PackDescriptor = PackDescriptor {
    key: PackKey::AosResponseJsUndisputed,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::AosResponseLetter,
            Some(TemplateId::AosResponseJsUndisputed),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::AosResponseJsUndisputed,
            AOS_RESPONSE_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static AOS_RESPONSE_JS_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::AosResponseJsSolicitor,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::AosResponseLetter,
            Some(TemplateId::AosResponseJsSol),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::AosResponseJsSol,
            AOS_RESPONSE_LETTER_DOCUMENT_NAME,
        ),
    ],
};

// Certificate of entitlement

static CERTIFICATE_OF_ENTITLEMENT_APPLICANT: PackDescriptor = PackDescriptor {
    key: PackKey::CertificateOfEntitlementApplicant,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::CertificateOfEntitlementCoverLetter,
            Some(TemplateId::CoeCoverLetter),
        ),
        (DocumentType::CertificateOfEntitlement, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoeCoverLetter,
            CERTIFICATE_OF_ENTITLEMENT_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CERTIFICATE_OF_ENTITLEMENT_RESPONDENT: PackDescriptor = PackDescriptor {
    key: PackKey::CertificateOfEntitlementRespondent,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::CertificateOfEntitlementCoverLetter,
            Some(TemplateId::CoeCoverLetterRespondent),
        ),
        (DocumentType::CertificateOfEntitlement, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoeCoverLetterRespondent,
            CERTIFICATE_OF_ENTITLEMENT_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CERTIFICATE_OF_ENTITLEMENT_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::CertificateOfEntitlementSolicitor,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::CertificateOfEntitlementCoverLetter,
            Some(TemplateId::CoeCoverLetterSol),
        ),
        (DocumentType::CertificateOfEntitlement, None),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoeCoverLetterSol,
            CERTIFICATE_OF_ENTITLEMENT_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CERTIFICATE_OF_ENTITLEMENT_JS: PackDescriptor = PackDescriptor {
    key: PackKey::CertificateOfEntitlementJs,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::CertificateOfEntitlementCoverLetter,
            Some(TemplateId::CoeCoverLetterJs),
        ),
        (DocumentType::CertificateOfEntitlement, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoeCoverLetterJs,
            CERTIFICATE_OF_ENTITLEMENT_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CERTIFICATE_OF_ENTITLEMENT_JS_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::CertificateOfEntitlementJsSolicitor,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::CertificateOfEntitlementCoverLetter,
            Some(TemplateId::CoeCoverLetterJsSol),
        ),
        (DocumentType::CertificateOfEntitlement, None),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoeCoverLetterJsSol,
            CERTIFICATE_OF_ENTITLEMENT_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

// Conditional order granted

static CO_GRANTED_APPLICANT1: PackDescriptor = PackDescriptor {
    key: PackKey::CoGrantedApplicant1,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderGrantedCoverLetter,
            Some(TemplateId::CoGrantedCoverLetterApp1),
        ),
        (DocumentType::ConditionalOrderGranted, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoGrantedCoverLetterApp1,
            CO_GRANTED_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_GRANTED_APPLICANT2: PackDescriptor = PackDescriptor {
    key: PackKey::CoGrantedApplicant2,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderGrantedCoverLetter,
            Some(TemplateId::CoGrantedCoverLetterApp2),
        ),
        (DocumentType::ConditionalOrderGranted, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoGrantedCoverLetterApp2,
            CO_GRANTED_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_GRANTED_JOINT: PackDescriptor = PackDescriptor {
    key: PackKey::CoGrantedJoint,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderGrantedCoverLetter,
            Some(TemplateId::CoGrantedCoverLetterJoint),
        ),
        (DocumentType::ConditionalOrderGranted, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoGrantedCoverLetterJoint,
            CO_GRANTED_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_GRANTED_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::CoGrantedSolicitor,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::ConditionalOrderGrantedCoverLetter,
            Some(TemplateId::CoGrantedCoverLetterSol),
        ),
        (DocumentType::ConditionalOrderGranted, None),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoGrantedCoverLetterSol,
            CO_GRANTED_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_GRANTED_JS: PackDescriptor = PackDescriptor {
    key: PackKey::CoGrantedJs,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderGrantedCoverLetter,
            Some(TemplateId::CoGrantedCoverLetterJs),
        ),
        (DocumentType::ConditionalOrderGranted, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoGrantedCoverLetterJs,
            CO_GRANTED_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_GRANTED_JS_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::CoGrantedJsSolicitor,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::ConditionalOrderGrantedCoverLetter,
            Some(TemplateId::CoGrantedCoverLetterJsSol),
        ),
        (DocumentType::ConditionalOrderGranted, None),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoGrantedCoverLetterJsSol,
            CO_GRANTED_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_GRANTED_SEPARATION: PackDescriptor = PackDescriptor {
    key: PackKey::CoGrantedSeparation,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderGrantedCoverLetter,
            Some(TemplateId::CoGrantedCoverLetterSeparation),
        ),
        (DocumentType::ConditionalOrderGranted, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoGrantedCoverLetterSeparation,
            CO_GRANTED_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

// Conditional order refused

static CLARIFICATION: PackDescriptor = PackDescriptor {
    key: PackKey::Clarification,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderRefusalCoverLetter,
            Some(TemplateId::CoRefusalClarification),
        ),
        (DocumentType::ConditionalOrderRefusal, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoRefusalClarification,
            CO_REFUSAL_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CLARIFICATION_SOL: PackDescriptor = PackDescriptor {
    key: PackKey::ClarificationSol,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::ConditionalOrderRefusalCoverLetter,
            Some(TemplateId::CoRefusalClarificationSol),
        ),
        (DocumentType::ConditionalOrderRefusal, None),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoRefusalClarificationSol,
            CO_REFUSAL_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CLARIFICATION_JS: PackDescriptor = PackDescriptor {
    key: PackKey::ClarificationJs,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderRefusalCoverLetter,
            Some(TemplateId::CoRefusalClarificationJs),
        ),
        (DocumentType::ConditionalOrderRefusal, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoRefusalClarificationJs,
            CO_REFUSAL_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CLARIFICATION_SOL_JS: PackDescriptor = PackDescriptor {
    key: PackKey::ClarificationSolJs,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::ConditionalOrderRefusalCoverLetter,
            Some(TemplateId::CoRefusalClarificationJsSol),
        ),
        (DocumentType::ConditionalOrderRefusal, None),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoRefusalClarificationJsSol,
            CO_REFUSAL_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static AMENDMENT: PackDescriptor = PackDescriptor {
    key: PackKey::Amendment,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderRefusalCoverLetter,
            Some(TemplateId::CoRefusalAmendment),
        ),
        (DocumentType::ConditionalOrderRefusal, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoRefusalAmendment,
            CO_REFUSAL_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static AMENDMENT_SOL: PackDescriptor = PackDescriptor {
    key: PackKey::AmendmentSol,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::ConditionalOrderRefusalCoverLetter,
            Some(TemplateId::CoRefusalAmendmentSol),
        ),
        (DocumentType::ConditionalOrderRefusal, None),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoRefusalAmendmentSol,
            CO_REFUSAL_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static AMENDMENT_JS: PackDescriptor = PackDescriptor {
    key: PackKey::AmendmentJs,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderRefusalCoverLetter,
            Some(TemplateId::CoRefusalAmendmentJs),
        ),
        (DocumentType::ConditionalOrderRefusal, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoRefusalAmendmentJs,
            CO_REFUSAL_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static AMENDMENT_SOL_JS: PackDescriptor = PackDescriptor {
    key: PackKey::AmendmentSolJs,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::ConditionalOrderRefusalCoverLetter,
            Some(TemplateId::CoRefusalAmendmentJsSol),
        ),
        (DocumentType::ConditionalOrderRefusal, None),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoRefusalAmendmentJsSol,
            CO_REFUSAL_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

// Conditional order pronounced

static CO_PRONOUNCED_APPLICANT: PackDescriptor = PackDescriptor {
    key: PackKey::CoPronouncedApplicant,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderPronouncedLetter,
            Some(TemplateId::CoPronouncedApplicant),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoPronouncedApplicant,
            CO_PRONOUNCED_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_PRONOUNCED_RESPONDENT: PackDescriptor = PackDescriptor {
    key: PackKey::CoPronouncedRespondent,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderPronouncedLetter,
            Some(TemplateId::CoPronouncedRespondent),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoPronouncedRespondent,
            CO_PRONOUNCED_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_PRONOUNCED_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::CoPronouncedSolicitor,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::ConditionalOrderPronouncedLetter,
            Some(TemplateId::CoPronouncedSol),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoPronouncedSol,
            CO_PRONOUNCED_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_PRONOUNCED_JS: PackDescriptor = PackDescriptor {
    key: PackKey::CoPronouncedJs,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderPronouncedLetter,
            Some(TemplateId::CoPronouncedJs),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoPronouncedJs,
            CO_PRONOUNCED_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_PRONOUNCED_JS_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::CoPronouncedJsSolicitor,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::ConditionalOrderPronouncedLetter,
            Some(TemplateId::CoPronouncedJsSol),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoPronouncedJsSol,
            CO_PRONOUNCED_LETTER_DOCUMENT_NAME,
        ),
    ],
};

// Final order granted

static FO_GRANTED_APPLICANT1: PackDescriptor = PackDescriptor {
    key: PackKey::FoGrantedApplicant1,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::FinalOrderGrantedCoverLetter,
            Some(TemplateId::FoGrantedCoverLetterApp1),
        ),
        (DocumentType::FinalOrderGranted, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::FoGrantedCoverLetterApp1,
            FO_GRANTED_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static FO_GRANTED_APPLICANT2: PackDescriptor = PackDescriptor {
    key: PackKey::FoGrantedApplicant2,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::FinalOrderGrantedCoverLetter,
            Some(TemplateId::FoGrantedCoverLetterApp2),
        ),
        (DocumentType::FinalOrderGranted, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::FoGrantedCoverLetterApp2,
            FO_GRANTED_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static FO_GRANTED_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::FoGrantedSolicitor,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::FinalOrderGrantedCoverLetter,
            Some(TemplateId::FoGrantedCoverLetterSol),
        ),
        (DocumentType::FinalOrderGranted, None),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::FoGrantedCoverLetterSol,
            FO_GRANTED_COVER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

// Switch to sole

static SWITCH_TO_SOLE_CO: PackDescriptor = PackDescriptor {
    key: PackKey::SwitchToSoleCo,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::SwitchToSoleCoLetter,
            Some(TemplateId::SwitchToSoleCoLetter),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::SwitchToSoleCoLetter,
            SWITCH_TO_SOLE_CO_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static SWITCH_TO_SOLE_CO_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::SwitchToSoleCoSolicitor,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::SwitchToSoleCoLetter,
            Some(TemplateId::SwitchToSoleCoLetterSol),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::SwitchToSoleCoLetterSol,
            SWITCH_TO_SOLE_CO_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static JUDICIAL_SEPARATION_SWITCH_TO_SOLE_CO: PackDescriptor = PackDescriptor {
    key: PackKey::JudicialSeparationSwitchToSoleCo,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::SwitchToSoleCoLetter,
            Some(TemplateId::SwitchToSoleCoLetterJs),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::SwitchToSoleCoLetterJs,
            SWITCH_TO_SOLE_CO_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static JUDICIAL_SEPARATION_SWITCH_TO_SOLE_CO_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::JudicialSeparationSwitchToSoleCoSolicitor,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::SwitchToSoleCoLetter,
            Some(TemplateId::SwitchToSoleCoLetterJsSol),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::SwitchToSoleCoLetterJsSol,
            SWITCH_TO_SOLE_CO_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static SWITCH_TO_SOLE_FO: PackDescriptor = PackDescriptor {
    key: PackKey::SwitchToSoleFo,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::SwitchToSoleFoLetter,
            Some(TemplateId::SwitchToSoleFoLetter),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::SwitchToSoleFoLetter,
            SWITCH_TO_SOLE_FO_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static SWITCH_TO_SOLE_FO_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::SwitchToSoleFoSolicitor,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::SwitchToSoleFoLetter,
            Some(TemplateId::SwitchToSoleFoLetterSol),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::SwitchToSoleFoLetterSol,
            SWITCH_TO_SOLE_FO_LETTER_DOCUMENT_NAME,
        ),
    ],
};

// Request for information

static REQUEST_FOR_INFORMATION_SOLE: PackDescriptor = PackDescriptor {
    key: PackKey::RequestForInformationSole,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[(
        DocumentType::RequestForInformationLetter,
        Some(TemplateId::RequestForInformationLetter),
    )],
    template_names: &[(
        TemplateId::RequestForInformationLetter,
        REQUEST_FOR_INFORMATION_LETTER_DOCUMENT_NAME,
    )],
};

static REQUEST_FOR_INFORMATION_JOINT: PackDescriptor = PackDescriptor {
    key: PackKey::RequestForInformationJoint,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[(
        DocumentType::RequestForInformationLetter,
        Some(TemplateId::RequestForInformationJointLetter),
    )],
    template_names: &[(
        TemplateId::RequestForInformationJointLetter,
        REQUEST_FOR_INFORMATION_LETTER_DOCUMENT_NAME,
    )],
};

static REQUEST_FOR_INFORMATION_OFFLINE: PackDescriptor = PackDescriptor {
    key: PackKey::RequestForInformationOffline,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::RequestForInformationLetter,
            Some(TemplateId::RequestForInformationOfflineLetter),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::RequestForInformationOfflineLetter,
            REQUEST_FOR_INFORMATION_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static REQUEST_FOR_INFORMATION_SOLICITOR: PackDescriptor = PackDescriptor {
    key: PackKey::RequestForInformationSolicitor,
    track: PackTrack::Divorce,
    audience: Audience::Solicitor,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetSolicitor),
        ),
        (
            DocumentType::RequestForInformationLetter,
            Some(TemplateId::RequestForInformationSolLetter),
        ),
    ],
    template_names: &[
        (TemplateId::CoversheetSolicitor, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::RequestForInformationSolLetter,
            REQUEST_FOR_INFORMATION_LETTER_DOCUMENT_NAME,
        ),
    ],
};

// Apply for conditional order and reminders

static APPLY_FOR_CO_SOLE: PackDescriptor = PackDescriptor {
    key: PackKey::ApplyForCoSole,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ApplyForConditionalOrderLetter,
            Some(TemplateId::ApplyForCoLetterSole),
        ),
        (DocumentType::ConditionalOrderApplicationForm, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::ApplyForCoLetterSole,
            APPLY_FOR_CO_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static APPLY_FOR_CO_JOINT: PackDescriptor = PackDescriptor {
    key: PackKey::ApplyForCoJoint,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ApplyForConditionalOrderLetter,
            Some(TemplateId::ApplyForCoLetterJoint),
        ),
        (DocumentType::ConditionalOrderApplicationForm, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::ApplyForCoLetterJoint,
            APPLY_FOR_CO_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static APPLY_FOR_CO_JS: PackDescriptor = PackDescriptor {
    key: PackKey::ApplyForCoJs,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ApplyForConditionalOrderLetter,
            Some(TemplateId::ApplyForCoLetterJs),
        ),
        (DocumentType::ConditionalOrderApplicationForm, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::ApplyForCoLetterJs,
            APPLY_FOR_CO_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_REMINDER_SOLE: PackDescriptor = PackDescriptor {
    key: PackKey::CoReminderSole,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderReminder,
            Some(TemplateId::CoReminderLetterSole),
        ),
        (DocumentType::ConditionalOrderApplicationForm, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoReminderLetterSole,
            CO_REMINDER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_REMINDER_JOINT: PackDescriptor = PackDescriptor {
    key: PackKey::CoReminderJoint,
    track: PackTrack::Divorce,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderReminder,
            Some(TemplateId::CoReminderLetterJoint),
        ),
        (DocumentType::ConditionalOrderApplicationForm, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoReminderLetterJoint,
            CO_REMINDER_LETTER_DOCUMENT_NAME,
        ),
    ],
};

static CO_REMINDER_JS: PackDescriptor = PackDescriptor {
    key: PackKey::CoReminderJs,
    track: PackTrack::JudicialSeparation,
    audience: Audience::Citizen,
    documents: &[
        (
            DocumentType::Coversheet,
            Some(TemplateId::CoversheetApplicant),
        ),
        (
            DocumentType::ConditionalOrderReminder,
            Some(TemplateId::CoReminderLetterJs),
        ),
        (DocumentType::ConditionalOrderApplicationForm, None),
    ],
    template_names: &[
        (TemplateId::CoversheetApplicant, COVERSHEET_DOCUMENT_NAME),
        (
            TemplateId::CoReminderLetterJs,
            CO_REMINDER_LETTER_DOCUMENT_NAME,
        ),
    ],
};
