use super::super::case::{CaseData, Party, RequestForInformationParty};
use super::super::catalog::{LetterId, PackKey};
use super::{not_applicable, DocumentPackResolver, ResolveError};

/// Letter asking a party for more information raised by the court.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestForInformationResolver;

impl DocumentPackResolver for RequestForInformationResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::RequestForInformation
    }

    fn packs(&self) -> &'static [PackKey] {
        &[
            PackKey::RequestForInformationSole,
            PackKey::RequestForInformationJoint,
            PackKey::RequestForInformationOffline,
            PackKey::RequestForInformationSolicitor,
        ]
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        let letter_id = self.letter_id();
        let request =
            case.request_for_information
                .as_ref()
                .ok_or(ResolveError::MissingCaseData {
                    letter_id,
                    field: "request for information",
                })?;

        if case.is_sole() {
            match request.party {
                RequestForInformationParty::Both => {
                    return Err(not_applicable(
                        letter_id,
                        party,
                        "sole cases cannot address both applicants",
                    ))
                }
                RequestForInformationParty::Applicant2 => {
                    return Err(not_applicable(
                        letter_id,
                        party,
                        "sole cases only request information from applicant 1",
                    ))
                }
                RequestForInformationParty::Applicant1 => {}
            }
        }
        if !request.addresses(party) {
            return Err(not_applicable(
                letter_id,
                party,
                "the request is addressed to the other applicant",
            ));
        }

        let applicant = case.applicant(party);
        Ok(if applicant.is_represented() {
            PackKey::RequestForInformationSolicitor
        } else if applicant.is_offline() {
            PackKey::RequestForInformationOffline
        } else if !case.is_sole() {
            PackKey::RequestForInformationJoint
        } else {
            PackKey::RequestForInformationSole
        })
    }
}
