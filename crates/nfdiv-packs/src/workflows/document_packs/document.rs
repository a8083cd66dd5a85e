use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::catalog::PackKey;

/// Closed vocabulary of documents that can appear in an outbound pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Coversheet,
    #[serde(rename = "NOTICE_OF_PROCEEDINGS_APP_1")]
    NoticeOfProceedingsApp1,
    #[serde(rename = "NOTICE_OF_PROCEEDINGS_APP_2")]
    NoticeOfProceedingsApp2,
    Application,
    AosOverdueLetter,
    AosResponseLetter,
    CertificateOfEntitlement,
    CertificateOfEntitlementCoverLetter,
    ConditionalOrderGranted,
    ConditionalOrderGrantedCoverLetter,
    ConditionalOrderRefusal,
    ConditionalOrderRefusalCoverLetter,
    ConditionalOrderPronouncedLetter,
    FinalOrderGranted,
    FinalOrderGrantedCoverLetter,
    SwitchToSoleCoLetter,
    SwitchToSoleFoLetter,
    RequestForInformationLetter,
    ApplyForConditionalOrderLetter,
    ConditionalOrderReminder,
    ConditionalOrderApplicationForm,
}

impl DocumentType {
    pub const ALL: [DocumentType; 21] = [
        DocumentType::Coversheet,
        DocumentType::NoticeOfProceedingsApp1,
        DocumentType::NoticeOfProceedingsApp2,
        DocumentType::Application,
        DocumentType::AosOverdueLetter,
        DocumentType::AosResponseLetter,
        DocumentType::CertificateOfEntitlement,
        DocumentType::CertificateOfEntitlementCoverLetter,
        DocumentType::ConditionalOrderGranted,
        DocumentType::ConditionalOrderGrantedCoverLetter,
        DocumentType::ConditionalOrderRefusal,
        DocumentType::ConditionalOrderRefusalCoverLetter,
        DocumentType::ConditionalOrderPronouncedLetter,
        DocumentType::FinalOrderGranted,
        DocumentType::FinalOrderGrantedCoverLetter,
        DocumentType::SwitchToSoleCoLetter,
        DocumentType::SwitchToSoleFoLetter,
        DocumentType::RequestForInformationLetter,
        DocumentType::ApplyForConditionalOrderLetter,
        DocumentType::ConditionalOrderReminder,
        DocumentType::ConditionalOrderApplicationForm,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DocumentType::Coversheet => "COVERSHEET",
            DocumentType::NoticeOfProceedingsApp1 => "NOTICE_OF_PROCEEDINGS_APP_1",
            DocumentType::NoticeOfProceedingsApp2 => "NOTICE_OF_PROCEEDINGS_APP_2",
            DocumentType::Application => "APPLICATION",
            DocumentType::AosOverdueLetter => "AOS_OVERDUE_LETTER",
            DocumentType::AosResponseLetter => "AOS_RESPONSE_LETTER",
            DocumentType::CertificateOfEntitlement => "CERTIFICATE_OF_ENTITLEMENT",
            DocumentType::CertificateOfEntitlementCoverLetter => {
                "CERTIFICATE_OF_ENTITLEMENT_COVER_LETTER"
            }
            DocumentType::ConditionalOrderGranted => "CONDITIONAL_ORDER_GRANTED",
            DocumentType::ConditionalOrderGrantedCoverLetter => {
                "CONDITIONAL_ORDER_GRANTED_COVER_LETTER"
            }
            DocumentType::ConditionalOrderRefusal => "CONDITIONAL_ORDER_REFUSAL",
            DocumentType::ConditionalOrderRefusalCoverLetter => {
                "CONDITIONAL_ORDER_REFUSAL_COVER_LETTER"
            }
            DocumentType::ConditionalOrderPronouncedLetter => "CONDITIONAL_ORDER_PRONOUNCED_LETTER",
            DocumentType::FinalOrderGranted => "FINAL_ORDER_GRANTED",
            DocumentType::FinalOrderGrantedCoverLetter => "FINAL_ORDER_GRANTED_COVER_LETTER",
            DocumentType::SwitchToSoleCoLetter => "SWITCH_TO_SOLE_CO_LETTER",
            DocumentType::SwitchToSoleFoLetter => "SWITCH_TO_SOLE_FO_LETTER",
            DocumentType::RequestForInformationLetter => "REQUEST_FOR_INFORMATION_LETTER",
            DocumentType::ApplyForConditionalOrderLetter => "APPLY_FOR_CONDITIONAL_ORDER_LETTER",
            DocumentType::ConditionalOrderReminder => "CONDITIONAL_ORDER_REMINDER",
            DocumentType::ConditionalOrderApplicationForm => "CONDITIONAL_ORDER_APPLICATION_FORM",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Static letter templates known to the document-rendering service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemplateId {
    CoversheetApplicant,
    CoversheetSolicitor,
    DivorceApplicationSole,
    DivorceApplicationJoint,
    NopA1SoleApp1CitCs,
    NopA2SoleApp1CitPs,
    NopAs1SoleApp1SolCs,
    NopR1SoleApp2CitOnline,
    NopR2SoleApp2CitOffline,
    NopR2SoleApp2CitOs,
    NopRs1SoleApp2SolOnline,
    NopRs2SoleApp2SolOffline,
    NopJa1JointApp1App2Cit,
    NopJa2JointApp2CitOffline,
    NopAs2JointApp1App2Sol,
    NopJsSoleApp1CitCs,
    NopJsSoleApp1CitPs,
    NopJsSoleApp1Sol,
    NopJsSoleRespCit,
    NopJsSoleRespSol,
    NopJsJointCit,
    NopJsJointSol,
    AosOverdueLetter,
    AosOverdueJsLetter,
    AosResponseDisputed,
    AosResponseUndisputed,
    AosResponseJsDisputed,
    AosResponseJsUndisputed,
    AosResponseJsSol,
    CoeCoverLetter,
    CoeCoverLetterRespondent,
    CoeCoverLetterSol,
    CoeCoverLetterJs,
    CoeCoverLetterJsSol,
    CoGrantedCoverLetterApp1,
    CoGrantedCoverLetterApp2,
    CoGrantedCoverLetterJoint,
    CoGrantedCoverLetterSol,
    CoGrantedCoverLetterJs,
    CoGrantedCoverLetterJsSol,
    CoGrantedCoverLetterSeparation,
    CoRefusalClarification,
    CoRefusalClarificationSol,
    CoRefusalClarificationJs,
    CoRefusalClarificationJsSol,
    CoRefusalAmendment,
    CoRefusalAmendmentSol,
    CoRefusalAmendmentJs,
    CoRefusalAmendmentJsSol,
    CoPronouncedApplicant,
    CoPronouncedRespondent,
    CoPronouncedSol,
    CoPronouncedJs,
    CoPronouncedJsSol,
    FoGrantedCoverLetterApp1,
    FoGrantedCoverLetterApp2,
    FoGrantedCoverLetterSol,
    SwitchToSoleCoLetter,
    SwitchToSoleCoLetterSol,
    SwitchToSoleCoLetterJs,
    SwitchToSoleCoLetterJsSol,
    SwitchToSoleFoLetter,
    SwitchToSoleFoLetterSol,
    RequestForInformationLetter,
    RequestForInformationJointLetter,
    RequestForInformationOfflineLetter,
    RequestForInformationSolLetter,
    ApplyForCoLetterSole,
    ApplyForCoLetterJoint,
    ApplyForCoLetterJs,
    CoReminderLetterSole,
    CoReminderLetterJoint,
    CoReminderLetterJs,
}

impl TemplateId {
    /// Template key understood by the rendering service.
    pub const fn as_str(self) -> &'static str {
        match self {
            TemplateId::CoversheetApplicant => "COVERSHEET_APPLICANT",
            TemplateId::CoversheetSolicitor => "COVERSHEET_SOLICITOR",
            TemplateId::DivorceApplicationSole => "DIVORCE_APPLICATION_SOLE",
            TemplateId::DivorceApplicationJoint => "DIVORCE_APPLICATION_JOINT",
            TemplateId::NopA1SoleApp1CitCs => "NFD_NOP_A1_SOLE_APP1_CIT_CS",
            TemplateId::NopA2SoleApp1CitPs => "NFD_NOP_A2_SOLE_APP1_CIT_PS",
            TemplateId::NopAs1SoleApp1SolCs => "NFD_NOP_AS1_SOLE_APP1_SOL_CS",
            TemplateId::NopR1SoleApp2CitOnline => "NFD_NOP_R1_SOLE_APP2_CIT_ONLINE",
            TemplateId::NopR2SoleApp2CitOffline => "NFD_NOP_R2_SOLE_APP2_CIT_OFFLINE",
            TemplateId::NopR2SoleApp2CitOs => "NFD_NOP_R2_SOLE_APP2_CIT_OS",
            TemplateId::NopRs1SoleApp2SolOnline => "NFD_NOP_RS1_SOLE_APP2_SOL_ONLINE",
            TemplateId::NopRs2SoleApp2SolOffline => "NFD_NOP_RS2_SOLE_APP2_SOL_OFFLINE",
            TemplateId::NopJa1JointApp1App2Cit => "NFD_NOP_JA1_JOINT_APP1APP2_CIT",
            TemplateId::NopJa2JointApp2CitOffline => "NFD_NOP_JA2_JOINT_APP2_CIT_OFFLINE",
            TemplateId::NopAs2JointApp1App2Sol => "NFD_NOP_AS2_JOINT_APP1APP2_SOL",
            TemplateId::NopJsSoleApp1CitCs => "NFD_NOP_JS_SOLE_APP1_CIT_CS",
            TemplateId::NopJsSoleApp1CitPs => "NFD_NOP_JS_SOLE_APP1_CIT_PS",
            TemplateId::NopJsSoleApp1Sol => "NFD_NOP_JS_SOLE_APP1_SOL",
            TemplateId::NopJsSoleRespCit => "NFD_NOP_JS_SOLE_RESP_CIT",
            TemplateId::NopJsSoleRespSol => "NFD_NOP_JS_SOLE_RESP_SOL",
            TemplateId::NopJsJointCit => "NFD_NOP_JS_JOINT_CIT",
            TemplateId::NopJsJointSol => "NFD_NOP_JS_JOINT_SOL",
            TemplateId::AosOverdueLetter => "NFD_AOS_OVERDUE_LETTER",
            TemplateId::AosOverdueJsLetter => "NFD_AOS_OVERDUE_JS_LETTER",
            TemplateId::AosResponseDisputed => "NFD_AOS_RESPONSE_DISPUTED",
            TemplateId::AosResponseUndisputed => "NFD_AOS_RESPONSE_UNDISPUTED",
            TemplateId::AosResponseJsDisputed => "NFD_AOS_RESPONSE_JS_DISPUTED",
            TemplateId::AosResponseJsUndisputed => "NFD_AOS_RESPONSE_JS_UNDISPUTED",
            TemplateId::AosResponseJsSol => "NFD_AOS_RESPONSE_JS_SOL",
            TemplateId::CoeCoverLetter => "CERTIFICATE_OF_ENTITLEMENT_COVER_LETTER",
            TemplateId::CoeCoverLetterRespondent => "CERTIFICATE_OF_ENTITLEMENT_COVER_LETTER_RESP",
            TemplateId::CoeCoverLetterSol => "CERTIFICATE_OF_ENTITLEMENT_COVER_LETTER_SOL",
            TemplateId::CoeCoverLetterJs => "CERTIFICATE_OF_ENTITLEMENT_COVER_LETTER_JS",
            TemplateId::CoeCoverLetterJsSol => "CERTIFICATE_OF_ENTITLEMENT_COVER_LETTER_JS_SOL",
            TemplateId::CoGrantedCoverLetterApp1 => "CO_GRANTED_COVER_LETTER_APP1",
            TemplateId::CoGrantedCoverLetterApp2 => "CO_GRANTED_COVER_LETTER_APP2",
            TemplateId::CoGrantedCoverLetterJoint => "CO_GRANTED_COVER_LETTER_JOINT",
            TemplateId::CoGrantedCoverLetterSol => "CO_GRANTED_COVER_LETTER_SOL",
            TemplateId::CoGrantedCoverLetterJs => "CO_GRANTED_COVER_LETTER_JS",
            TemplateId::CoGrantedCoverLetterJsSol => "CO_GRANTED_COVER_LETTER_JS_SOL",
            TemplateId::CoGrantedCoverLetterSeparation => "CO_GRANTED_COVER_LETTER_SEPARATION",
            TemplateId::CoRefusalClarification => "CO_REFUSAL_CLARIFICATION_COVER_LETTER",
            TemplateId::CoRefusalClarificationSol => "CO_REFUSAL_CLARIFICATION_COVER_LETTER_SOL",
            TemplateId::CoRefusalClarificationJs => "CO_REFUSAL_CLARIFICATION_COVER_LETTER_JS",
            TemplateId::CoRefusalClarificationJsSol => {
                "CO_REFUSAL_CLARIFICATION_COVER_LETTER_JS_SOL"
            }
            TemplateId::CoRefusalAmendment => "CO_REFUSAL_AMENDMENT_COVER_LETTER",
            TemplateId::CoRefusalAmendmentSol => "CO_REFUSAL_AMENDMENT_COVER_LETTER_SOL",
            TemplateId::CoRefusalAmendmentJs => "CO_REFUSAL_AMENDMENT_COVER_LETTER_JS",
            TemplateId::CoRefusalAmendmentJsSol => "CO_REFUSAL_AMENDMENT_COVER_LETTER_JS_SOL",
            TemplateId::CoPronouncedApplicant => "CO_PRONOUNCED_LETTER_APPLICANT",
            TemplateId::CoPronouncedRespondent => "CO_PRONOUNCED_LETTER_RESPONDENT",
            TemplateId::CoPronouncedSol => "CO_PRONOUNCED_LETTER_SOL",
            TemplateId::CoPronouncedJs => "CO_PRONOUNCED_LETTER_JS",
            TemplateId::CoPronouncedJsSol => "CO_PRONOUNCED_LETTER_JS_SOL",
            TemplateId::FoGrantedCoverLetterApp1 => "FO_GRANTED_COVER_LETTER_APP1",
            TemplateId::FoGrantedCoverLetterApp2 => "FO_GRANTED_COVER_LETTER_APP2",
            TemplateId::FoGrantedCoverLetterSol => "FO_GRANTED_COVER_LETTER_SOL",
            TemplateId::SwitchToSoleCoLetter => "SWITCH_TO_SOLE_CO_LETTER",
            TemplateId::SwitchToSoleCoLetterSol => "SWITCH_TO_SOLE_CO_LETTER_SOL",
            TemplateId::SwitchToSoleCoLetterJs => "SWITCH_TO_SOLE_CO_LETTER_JS",
            TemplateId::SwitchToSoleCoLetterJsSol => "SWITCH_TO_SOLE_CO_LETTER_JS_SOL",
            TemplateId::SwitchToSoleFoLetter => "SWITCH_TO_SOLE_FO_LETTER",
            TemplateId::SwitchToSoleFoLetterSol => "SWITCH_TO_SOLE_FO_LETTER_SOL",
            TemplateId::RequestForInformationLetter => "REQUEST_FOR_INFORMATION_LETTER",
            TemplateId::RequestForInformationJointLetter => "REQUEST_FOR_INFORMATION_JOINT_LETTER",
            TemplateId::RequestForInformationOfflineLetter => {
                "REQUEST_FOR_INFORMATION_OFFLINE_LETTER"
            }
            TemplateId::RequestForInformationSolLetter => "REQUEST_FOR_INFORMATION_SOL_LETTER",
            TemplateId::ApplyForCoLetterSole => "APPLY_FOR_CO_LETTER_SOLE",
            TemplateId::ApplyForCoLetterJoint => "APPLY_FOR_CO_LETTER_JOINT",
            TemplateId::ApplyForCoLetterJs => "APPLY_FOR_CO_LETTER_JS",
            TemplateId::CoReminderLetterSole => "CO_REMINDER_LETTER_SOLE",
            TemplateId::CoReminderLetterJoint => "CO_REMINDER_LETTER_JOINT",
            TemplateId::CoReminderLetterJs => "CO_REMINDER_LETTER_JS",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TemplateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Letter family a pack constant belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackTrack {
    Divorce,
    JudicialSeparation,
}

/// Recipient category a pack constant is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Citizen,
    Solicitor,
}

/// Immutable definition of a pack constant.
#[derive(Debug)]
pub struct PackDescriptor {
    pub key: PackKey,
    pub track: PackTrack,
    pub audience: Audience,
    pub documents: &'static [(DocumentType, Option<TemplateId>)],
    pub template_names: &'static [(TemplateId, &'static str)],
}

impl PackDescriptor {
    pub fn validate(&self) -> Result<(), DescriptorError> {
        for (index, (document_type, template)) in self.documents.iter().enumerate() {
            if self.documents[..index]
                .iter()
                .any(|(seen, _)| seen == document_type)
            {
                return Err(DescriptorError::DuplicateDocument {
                    pack: self.key,
                    document_type: *document_type,
                });
            }

            if let Some(template) = template {
                if !self.template_names.iter().any(|(id, _)| id == template) {
                    return Err(DescriptorError::MissingTemplateName {
                        pack: self.key,
                        template: *template,
                    });
                }
            }
        }

        for (template, _) in self.template_names {
            if !self
                .documents
                .iter()
                .any(|(_, used)| used.as_ref() == Some(template))
            {
                return Err(DescriptorError::UnusedTemplateName {
                    pack: self.key,
                    template: *template,
                });
            }
        }

        Ok(())
    }

    pub fn to_pack(&self) -> DocumentPack {
        DocumentPack {
            key: self.key,
            track: self.track,
            audience: self.audience,
            documents: self
                .documents
                .iter()
                .map(|(document_type, template)| PackDocument {
                    document_type: *document_type,
                    template: *template,
                })
                .collect(),
            template_names: self.template_names.iter().copied().collect(),
        }
    }
}

/// Integrity violations in a pack constant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error("pack {pack} lists {document_type} more than once")]
    DuplicateDocument {
        pack: PackKey,
        document_type: DocumentType,
    },
    #[error("pack {pack} references template {template} without a document name")]
    MissingTemplateName { pack: PackKey, template: TemplateId },
    #[error("pack {pack} names template {template} but never uses it")]
    UnusedTemplateName { pack: PackKey, template: TemplateId },
}

/// One slot of a resolved pack; `template` is empty when the document comes from the case file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackDocument {
    pub document_type: DocumentType,
    pub template: Option<TemplateId>,
}

/// Ordered bundle of documents selected for one recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentPack {
    key: PackKey,
    track: PackTrack,
    audience: Audience,
    documents: Vec<PackDocument>,
    template_names: BTreeMap<TemplateId, &'static str>,
}

impl DocumentPack {
    pub fn key(&self) -> PackKey {
        self.key
    }

    pub fn track(&self) -> PackTrack {
        self.track
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    pub fn documents(&self) -> &[PackDocument] {
        &self.documents
    }

    pub fn document_types(&self) -> impl Iterator<Item = DocumentType> + '_ {
        self.documents.iter().map(|document| document.document_type)
    }

    pub fn contains(&self, document_type: DocumentType) -> bool {
        self.document_types()
            .any(|candidate| candidate == document_type)
    }

    /// `None` when the slot is absent; `Some(None)` when it is derived from case data.
    pub fn template_for(&self, document_type: DocumentType) -> Option<Option<TemplateId>> {
        self.documents
            .iter()
            .find(|document| document.document_type == document_type)
            .map(|document| document.template)
    }

    pub fn template_name(&self, template: TemplateId) -> Option<&'static str> {
        self.template_names.get(&template).copied()
    }

    pub fn template_names(&self) -> &BTreeMap<TemplateId, &'static str> {
        &self.template_names
    }

    pub fn derived_documents(&self) -> impl Iterator<Item = DocumentType> + '_ {
        self.documents
            .iter()
            .filter(|document| document.template.is_none())
            .map(|document| document.document_type)
    }
}
