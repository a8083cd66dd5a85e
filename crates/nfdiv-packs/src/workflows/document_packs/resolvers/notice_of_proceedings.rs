use super::super::case::{ApplicationType, CaseData, Party};
use super::super::catalog::{LetterId, PackKey};
use super::{DocumentPackResolver, ResolveError};

/// Notice of proceedings sent to each applicant once the application is issued.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoticeOfProceedingsResolver;

const PACKS: &[PackKey] = &[
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
];

impl DocumentPackResolver for NoticeOfProceedingsResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::NoticeOfProceedings
    }

    fn packs(&self) -> &'static [PackKey] {
        PACKS
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        if case.is_judicial_separation_case() {
            return Ok(judicial_separation_pack(case, party));
        }

        let pack = match (case.application_type, party) {
            (ApplicationType::SoleApplication, Party::Applicant1) => sole_applicant_pack(case),
            (ApplicationType::SoleApplication, Party::Applicant2) => sole_respondent_pack(case),
            (ApplicationType::JointApplication, party) => joint_pack(case, party),
        };
        Ok(pack)
    }
}

fn judicial_separation_pack(case: &CaseData, party: Party) -> PackKey {
    let represented = case.applicant(party).is_represented();
    match (case.application_type, party) {
        (ApplicationType::SoleApplication, Party::Applicant1) => {
            if represented {
                PackKey::NopJsSoleApp1Solicitor
            } else if case.application.is_court_service() {
                PackKey::NopJsSoleApp1CitizenCs
            } else {
                PackKey::NopJsSoleApp1CitizenPs
            }
        }
        (ApplicationType::SoleApplication, Party::Applicant2) => {
            if represented {
                PackKey::NopJsSoleRespondentSolicitor
            } else {
                PackKey::NopJsSoleRespondentCitizen
            }
        }
        (ApplicationType::JointApplication, Party::Applicant1) => {
            if represented {
                PackKey::NopJsJointApp1Solicitor
            } else {
                PackKey::NopJsJointApp1Citizen
            }
        }
        (ApplicationType::JointApplication, Party::Applicant2) => {
            if represented {
                PackKey::NopJsJointApp2Solicitor
            } else {
                PackKey::NopJsJointApp2Citizen
            }
        }
    }
}

fn sole_applicant_pack(case: &CaseData) -> PackKey {
    if case.applicant1.is_represented() {
        PackKey::NopSoleApp1Solicitor
    } else if case.application.is_court_service() {
        PackKey::NopSoleApp1CitizenCs
    } else {
        PackKey::NopSoleApp1CitizenPs
    }
}

// Overseas respondents always get the paper pack, even when the court serves.
fn sole_respondent_pack(case: &CaseData) -> PackKey {
    let respondent = &case.applicant2;

    if respondent.is_represented() {
        return if respondent.has_represented_organisation() {
            PackKey::NopSoleRespondentSolicitor
        } else {
            PackKey::NopSoleRespondentSolicitorOffline
        };
    }

    if respondent.is_based_overseas() {
        PackKey::NopSoleRespondentOverseas
    } else if case.application.reissued_as_offline_aos() || respondent.is_offline() {
        PackKey::NopSoleRespondentOffline
    } else if case.application.is_court_service() {
        PackKey::NopSoleRespondentCitizen
    } else {
        PackKey::NopSoleRespondentOffline
    }
}

fn joint_pack(case: &CaseData, party: Party) -> PackKey {
    let applicant = case.applicant(party);
    match party {
        Party::Applicant1 if applicant.is_represented() => PackKey::NopJointApp1Solicitor,
        Party::Applicant1 => PackKey::NopJointApp1Citizen,
        Party::Applicant2 if applicant.is_represented() => PackKey::NopJointApp2Solicitor,
        Party::Applicant2 if applicant.is_offline() => PackKey::NopJointApp2CitizenOffline,
        Party::Applicant2 => PackKey::NopJointApp2Citizen,
    }
}
