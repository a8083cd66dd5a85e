use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::document::DocumentType;

/// Identifier assigned to a case by the case-management platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ApplicationType {
    SoleApplication,
    JointApplication,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DivorceOrDissolution {
    Divorce,
    Dissolution,
}

/// Marks a case as an application for (judicial) separation rather than divorce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SupplementaryCaseType {
    #[default]
    NotApplicable,
    JudicialSeparation,
    Separation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ServiceMethod {
    CourtService,
    PersonalService,
    SolicitorService,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReissueOption {
    DigitalAos,
    OfflineAos,
    ReissueCase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HowToRespond {
    WithoutDispute,
    DisputeDivorce,
}

/// Legal advisor decision when a conditional order is not granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RefusalOption {
    MoreInfo,
    Reject,
    AdminError,
}

/// Marker recorded from a paper D84 or D36 form naming the applicant who applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OfflineWhoApplying {
    Applicant1,
    Applicant2,
}

impl OfflineWhoApplying {
    pub const fn party(self) -> Party {
        match self {
            OfflineWhoApplying::Applicant1 => Party::Applicant1,
            OfflineWhoApplying::Applicant2 => Party::Applicant2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequestForInformationParty {
    Applicant1,
    Applicant2,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LanguagePreference {
    #[default]
    English,
    Welsh,
}

/// One of the two parties to a case; packs are always resolved for one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Party {
    Applicant1,
    Applicant2,
}

impl Party {
    pub const fn label(self) -> &'static str {
        match self {
            Party::Applicant1 => "applicant1",
            Party::Applicant2 => "applicant2",
        }
    }

    pub const fn other(self) -> Party {
        match self {
            Party::Applicant1 => Party::Applicant2,
            Party::Applicant2 => Party::Applicant1,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solicitor {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub organisation_id: Option<String>,
}

impl Solicitor {
    /// A solicitor without an organisation cannot use the online service.
    pub fn has_organisation(&self) -> bool {
        self.organisation_id
            .as_deref()
            .map(|id| !id.trim().is_empty())
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Applicant {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub solicitor_represented: bool,
    pub solicitor: Option<Solicitor>,
    pub offline: bool,
    pub address_overseas: bool,
    pub language_preference_welsh: bool,
}

impl Applicant {
    pub fn is_represented(&self) -> bool {
        self.solicitor_represented
    }

    pub fn has_represented_organisation(&self) -> bool {
        self.solicitor
            .as_ref()
            .map(Solicitor::has_organisation)
            .unwrap_or(false)
    }

    /// Offline applicants either opted out of the online service or never gave an email.
    pub fn is_offline(&self) -> bool {
        self.offline
            || self
                .email
                .as_deref()
                .map(|email| email.trim().is_empty())
                .unwrap_or(true)
    }

    pub fn is_based_overseas(&self) -> bool {
        self.address_overseas
    }

    pub fn language(&self) -> LanguagePreference {
        if self.language_preference_welsh {
            LanguagePreference::Welsh
        } else {
            LanguagePreference::English
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub service_method: ServiceMethod,
    #[serde(default)]
    pub reissue_option: Option<ReissueOption>,
    #[serde(default)]
    pub issue_date: Option<NaiveDate>,
}

impl Application {
    pub fn is_court_service(&self) -> bool {
        self.service_method == ServiceMethod::CourtService
    }

    pub fn reissued_as_offline_aos(&self) -> bool {
        self.reissue_option == Some(ReissueOption::OfflineAos)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgementOfService {
    pub how_to_respond: HowToRespond,
    #[serde(default)]
    pub date_submitted: Option<NaiveDate>,
}

impl AcknowledgementOfService {
    pub fn is_disputed(&self) -> bool {
        self.how_to_respond == HowToRespond::DisputeDivorce
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionalOrder {
    pub refusal_decision: Option<RefusalOption>,
    pub switched_to_sole: bool,
    pub d84_who_applying: Option<OfflineWhoApplying>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinalOrder {
    pub switched_to_sole: bool,
    pub d36_who_applying: Option<OfflineWhoApplying>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestForInformation {
    pub party: RequestForInformationParty,
    #[serde(default)]
    pub details: String,
}

impl RequestForInformation {
    pub fn addresses(&self, party: Party) -> bool {
        matches!(
            (self.party, party),
            (RequestForInformationParty::Both, _)
                | (RequestForInformationParty::Applicant1, Party::Applicant1)
                | (RequestForInformationParty::Applicant2, Party::Applicant2)
        )
    }
}

/// Document already rendered into the case file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDocument {
    pub document_type: DocumentType,
    pub display_name: String,
    pub file_name: String,
    pub link: String,
}

/// Case attributes consulted while resolving document packs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseData {
    pub application_type: ApplicationType,
    pub divorce_or_dissolution: DivorceOrDissolution,
    #[serde(default)]
    pub supplementary_case_type: SupplementaryCaseType,
    pub applicant1: Applicant,
    pub applicant2: Applicant,
    pub application: Application,
    #[serde(default)]
    pub acknowledgement_of_service: Option<AcknowledgementOfService>,
    #[serde(default)]
    pub conditional_order: ConditionalOrder,
    #[serde(default)]
    pub final_order: FinalOrder,
    #[serde(default)]
    pub request_for_information: Option<RequestForInformation>,
    #[serde(default)]
    pub documents_generated: Vec<GeneratedDocument>,
}

impl CaseData {
    pub fn applicant(&self, party: Party) -> &Applicant {
        match party {
            Party::Applicant1 => &self.applicant1,
            Party::Applicant2 => &self.applicant2,
        }
    }

    pub fn is_sole(&self) -> bool {
        self.application_type == ApplicationType::SoleApplication
    }

    /// Both judicial separation and separation follow the JS letter set.
    pub fn is_judicial_separation_case(&self) -> bool {
        self.supplementary_case_type != SupplementaryCaseType::NotApplicable
    }

    pub fn has_generated(&self, document_type: DocumentType) -> bool {
        self.generated(document_type).is_some()
    }

    pub fn generated(&self, document_type: DocumentType) -> Option<&GeneratedDocument> {
        self.documents_generated
            .iter()
            .find(|document| document.document_type == document_type)
    }
}

/// Case data together with its platform identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseDetails {
    pub id: CaseId,
    pub data: CaseData,
}
