use super::super::case::{CaseData, Party, RefusalOption, SupplementaryCaseType};
use super::super::catalog::{LetterId, PackKey};
use super::super::on_demand::{OnDemandDocument, D84_PAPER_FORM};
use super::{not_applicable, require_unrepresented, DocumentPackResolver, ResolveError};

/// Certificate of entitlement with its cover letter, sent once a hearing date is listed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CertificateOfEntitlementResolver;

impl DocumentPackResolver for CertificateOfEntitlementResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::CertificateOfEntitlement
    }

    fn packs(&self) -> &'static [PackKey] {
        &[
            PackKey::CertificateOfEntitlementApplicant,
            PackKey::CertificateOfEntitlementRespondent,
            PackKey::CertificateOfEntitlementSolicitor,
            PackKey::CertificateOfEntitlementJs,
            PackKey::CertificateOfEntitlementJsSolicitor,
        ]
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        let represented = case.applicant(party).is_represented();

        if case.is_judicial_separation_case() {
            return Ok(if represented {
                PackKey::CertificateOfEntitlementJsSolicitor
            } else {
                PackKey::CertificateOfEntitlementJs
            });
        }

        Ok(if represented {
            PackKey::CertificateOfEntitlementSolicitor
        } else if is_sole_respondent(case, party) {
            PackKey::CertificateOfEntitlementRespondent
        } else {
            PackKey::CertificateOfEntitlementApplicant
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionalOrderGrantedResolver;

impl DocumentPackResolver for ConditionalOrderGrantedResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::ConditionalOrderGranted
    }

    fn packs(&self) -> &'static [PackKey] {
        &[
            PackKey::CoGrantedApplicant1,
            PackKey::CoGrantedApplicant2,
            PackKey::CoGrantedJoint,
            PackKey::CoGrantedSolicitor,
            PackKey::CoGrantedJs,
            PackKey::CoGrantedJsSolicitor,
            PackKey::CoGrantedSeparation,
        ]
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        let represented = case.applicant(party).is_represented();

        if case.is_judicial_separation_case() {
            return Ok(if represented {
                PackKey::CoGrantedJsSolicitor
            } else if case.supplementary_case_type == SupplementaryCaseType::Separation {
                PackKey::CoGrantedSeparation
            } else {
                PackKey::CoGrantedJs
            });
        }

        if represented {
            return Ok(PackKey::CoGrantedSolicitor);
        }
        if !case.is_sole() {
            return Ok(PackKey::CoGrantedJoint);
        }
        Ok(match party {
            Party::Applicant1 => PackKey::CoGrantedApplicant1,
            Party::Applicant2 => PackKey::CoGrantedApplicant2,
        })
    }
}

/// Refusal cover letter plus the refusal order; the pack depends on the legal advisor decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionalOrderRefusedResolver;

impl DocumentPackResolver for ConditionalOrderRefusedResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::ConditionalOrderRefused
    }

    fn packs(&self) -> &'static [PackKey] {
        &[
            PackKey::Clarification,
            PackKey::ClarificationSol,
            PackKey::ClarificationJs,
            PackKey::ClarificationSolJs,
            PackKey::Amendment,
            PackKey::AmendmentSol,
            PackKey::AmendmentJs,
            PackKey::AmendmentSolJs,
        ]
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        let letter_id = self.letter_id();
        let decision =
            case.conditional_order
                .refusal_decision
                .ok_or(ResolveError::MissingCaseData {
                    letter_id,
                    field: "conditional order refusal decision",
                })?;
        let judicial_separation = case.is_judicial_separation_case();
        let represented = case.applicant(party).is_represented();

        let pack = match (decision, judicial_separation, represented) {
            (RefusalOption::AdminError, _, _) => {
                return Err(not_applicable(
                    letter_id,
                    party,
                    "administrative errors are corrected without writing to the applicants",
                ))
            }
            (RefusalOption::MoreInfo, true, true) => PackKey::ClarificationSolJs,
            (RefusalOption::MoreInfo, true, false) => PackKey::ClarificationJs,
            (RefusalOption::MoreInfo, false, true) => PackKey::ClarificationSol,
            (RefusalOption::MoreInfo, false, false) => PackKey::Clarification,
            (RefusalOption::Reject, true, true) => PackKey::AmendmentSolJs,
            (RefusalOption::Reject, true, false) => PackKey::AmendmentJs,
            (RefusalOption::Reject, false, true) => PackKey::AmendmentSol,
            (RefusalOption::Reject, false, false) => PackKey::Amendment,
        };
        Ok(pack)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionalOrderPronouncedResolver;

impl DocumentPackResolver for ConditionalOrderPronouncedResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::ConditionalOrderPronounced
    }

    fn packs(&self) -> &'static [PackKey] {
        &[
            PackKey::CoPronouncedApplicant,
            PackKey::CoPronouncedRespondent,
            PackKey::CoPronouncedSolicitor,
            PackKey::CoPronouncedJs,
            PackKey::CoPronouncedJsSolicitor,
        ]
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        let represented = case.applicant(party).is_represented();

        if case.is_judicial_separation_case() {
            return Ok(if represented {
                PackKey::CoPronouncedJsSolicitor
            } else {
                PackKey::CoPronouncedJs
            });
        }

        Ok(if represented {
            PackKey::CoPronouncedSolicitor
        } else if is_sole_respondent(case, party) {
            PackKey::CoPronouncedRespondent
        } else {
            PackKey::CoPronouncedApplicant
        })
    }
}

/// Invitation to apply for a conditional order, posted with a blank D84.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyForConditionalOrderResolver;

impl DocumentPackResolver for ApplyForConditionalOrderResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::ApplyForConditionalOrder
    }

    fn packs(&self) -> &'static [PackKey] {
        &[
            PackKey::ApplyForCoSole,
            PackKey::ApplyForCoJoint,
            PackKey::ApplyForCoJs,
        ]
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        require_unrepresented(self.letter_id(), case, party)?;
        Ok(if case.is_judicial_separation_case() {
            PackKey::ApplyForCoJs
        } else if case.is_sole() {
            PackKey::ApplyForCoSole
        } else {
            PackKey::ApplyForCoJoint
        })
    }

    fn on_demand_document(&self, _case: &CaseData, _party: Party) -> Option<OnDemandDocument> {
        Some(D84_PAPER_FORM)
    }
}

/// Reminder for applicants who have not yet applied for their conditional order.
#[derive(Debug, Clone, Copy, Default)]
pub struct AwaitingConditionalOrderReminderResolver;

impl DocumentPackResolver for AwaitingConditionalOrderReminderResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::AwaitingConditionalOrderReminder
    }

    fn packs(&self) -> &'static [PackKey] {
        &[
            PackKey::CoReminderSole,
            PackKey::CoReminderJoint,
            PackKey::CoReminderJs,
        ]
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        require_unrepresented(self.letter_id(), case, party)?;
        Ok(if case.is_judicial_separation_case() {
            PackKey::CoReminderJs
        } else if case.is_sole() {
            PackKey::CoReminderSole
        } else {
            PackKey::CoReminderJoint
        })
    }

    fn on_demand_document(&self, _case: &CaseData, _party: Party) -> Option<OnDemandDocument> {
        Some(D84_PAPER_FORM)
    }
}

fn is_sole_respondent(case: &CaseData, party: Party) -> bool {
    case.is_sole() && party == Party::Applicant2
}
