use super::super::case::{CaseData, Party};
use super::super::catalog::{LetterId, PackKey};
use super::{
    not_applicable, require_applicant1, require_sole, require_unrepresented, DocumentPackResolver,
    ResolveError,
};

/// Reminder to applicant 1 that the respondent has not acknowledged service.
#[derive(Debug, Clone, Copy, Default)]
pub struct AosOverdueResolver;

impl DocumentPackResolver for AosOverdueResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::AosOverdue
    }

    fn packs(&self) -> &'static [PackKey] {
        &[PackKey::AosOverdue, PackKey::AosOverdueJs]
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        let letter_id = self.letter_id();
        require_sole(letter_id, case, party)?;
        require_applicant1(letter_id, party)?;
        require_unrepresented(letter_id, case, party)?;

        if case.is_judicial_separation_case() {
            Ok(PackKey::AosOverdueJs)
        } else {
            Ok(PackKey::AosOverdue)
        }
    }
}

/// Tells applicant 1 how the respondent answered the acknowledgement of service.
#[derive(Debug, Clone, Copy, Default)]
pub struct AosResponseLetterResolver;

impl DocumentPackResolver for AosResponseLetterResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::AosResponseLetter
    }

    fn packs(&self) -> &'static [PackKey] {
        &[
            PackKey::AosResponseDisputed,
            PackKey::AosResponseUndisputed,
            PackKey::AosResponseJsDisputed,
            PackKey::AosResponseJsUndisputed,
            PackKey::AosResponseJsSolicitor,
        ]
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        let letter_id = self.letter_id();
        require_sole(letter_id, case, party)?;
        require_applicant1(letter_id, party)?;
        let aos = case
            .acknowledgement_of_service
            .as_ref()
            .ok_or(ResolveError::MissingCaseData {
                letter_id,
                field: "acknowledgement of service",
            })?;
        let represented = case.applicant1.is_represented();

        if case.is_judicial_separation_case() {
            return Ok(if represented {
                PackKey::AosResponseJsSolicitor
            } else if aos.is_disputed() {
                PackKey::AosResponseJsDisputed
            } else {
                PackKey::AosResponseJsUndisputed
            });
        }

        if represented {
            return Err(not_applicable(
                letter_id,
                party,
                "the solicitor is notified of the response online",
            ));
        }

        if aos.is_disputed() {
            Ok(PackKey::AosResponseDisputed)
        } else {
            Ok(PackKey::AosResponseUndisputed)
        }
    }
}
