use super::super::case::{CaseData, Party};
use super::super::catalog::{LetterId, PackKey};
use super::{not_applicable, DocumentPackResolver, ResolveError};

/// Final order cover letter together with the final order itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinalOrderGrantedResolver;

impl DocumentPackResolver for FinalOrderGrantedResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::FinalOrderGranted
    }

    fn packs(&self) -> &'static [PackKey] {
        &[
            PackKey::FoGrantedApplicant1,
            PackKey::FoGrantedApplicant2,
            PackKey::FoGrantedSolicitor,
        ]
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        if case.is_judicial_separation_case() {
            return Err(not_applicable(
                self.letter_id(),
                party,
                "separation cases end with the separation order",
            ));
        }

        if case.applicant(party).is_represented() {
            return Ok(PackKey::FoGrantedSolicitor);
        }
        Ok(match party {
            Party::Applicant1 => PackKey::FoGrantedApplicant1,
            Party::Applicant2 => PackKey::FoGrantedApplicant2,
        })
    }
}
