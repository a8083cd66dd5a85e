//! Scenario resolvers: each maps case data and a recipient to one pack constant.
//!
//! Resolvers only ever return a [`PackKey`]; the pack itself is assembled from the
//! static descriptor table so every branch can be audited against the catalog.
//! Evaluation order inside every resolver is fixed: preconditions, then judicial
//! separation, then sole/joint, then representation, then online/offline, then the
//! service method.

mod acknowledgement;
mod conditional_order;
mod final_order;
mod notice_of_proceedings;
mod request_for_information;
mod switch_to_sole;

pub use acknowledgement::{AosOverdueResolver, AosResponseLetterResolver};
pub use conditional_order::{
    ApplyForConditionalOrderResolver, AwaitingConditionalOrderReminderResolver,
    CertificateOfEntitlementResolver, ConditionalOrderGrantedResolver,
    ConditionalOrderPronouncedResolver, ConditionalOrderRefusedResolver,
};
pub use final_order::FinalOrderGrantedResolver;
pub use notice_of_proceedings::NoticeOfProceedingsResolver;
pub use request_for_information::RequestForInformationResolver;
pub use switch_to_sole::{SwitchToSoleCoResolver, SwitchToSoleFoResolver};

use super::case::{CaseData, Party};
use super::catalog::{LetterId, PackKey};
use super::document::DocumentPack;
use super::on_demand::OnDemandDocument;

/// Contract shared by every scenario in the catalog.
pub trait DocumentPackResolver: Send + Sync {
    fn letter_id(&self) -> LetterId;

    /// Pack constants this resolver may select.
    fn packs(&self) -> &'static [PackKey];

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError>;

    fn resolve(&self, case: &CaseData, party: Party) -> Result<DocumentPack, ResolveError> {
        self.select(case, party).map(PackKey::to_pack)
    }

    /// Document that must exist in the case file before the pack can be printed.
    fn on_demand_document(&self, _case: &CaseData, _party: Party) -> Option<OnDemandDocument> {
        None
    }
}

/// Explicit outcome when case data does not lead to a pack.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("{letter_id} does not apply to {party}: {reason}")]
    NotApplicable {
        letter_id: LetterId,
        party: Party,
        reason: &'static str,
    },
    #[error("{letter_id} requires {field} on the case")]
    MissingCaseData {
        letter_id: LetterId,
        field: &'static str,
    },
    #[error("{letter_id} has no document pack defined")]
    Undefined { letter_id: LetterId },
}

/// Registered for letter ids whose pack has never been specified.
#[derive(Debug, Clone, Copy)]
pub struct UndefinedScenarioResolver {
    letter_id: LetterId,
}

impl UndefinedScenarioResolver {
    pub const fn new(letter_id: LetterId) -> Self {
        Self { letter_id }
    }
}

impl DocumentPackResolver for UndefinedScenarioResolver {
    fn letter_id(&self) -> LetterId {
        self.letter_id
    }

    fn packs(&self) -> &'static [PackKey] {
        &[]
    }

    fn select(&self, _case: &CaseData, _party: Party) -> Result<PackKey, ResolveError> {
        Err(ResolveError::Undefined {
            letter_id: self.letter_id,
        })
    }
}

pub(crate) fn standard_resolvers() -> Vec<Box<dyn DocumentPackResolver>> {
    vec![
        Box::new(NoticeOfProceedingsResolver),
        Box::new(AosOverdueResolver),
        Box::new(AosResponseLetterResolver),
        Box::new(UndefinedScenarioResolver::new(LetterId::AosResponse)),
        Box::new(UndefinedScenarioResolver::new(
            LetterId::RegenerateCourtOrders,
        )),
        Box::new(CertificateOfEntitlementResolver),
        Box::new(ConditionalOrderGrantedResolver),
        Box::new(ConditionalOrderRefusedResolver),
        Box::new(ConditionalOrderPronouncedResolver),
        Box::new(FinalOrderGrantedResolver),
        Box::new(SwitchToSoleCoResolver),
        Box::new(SwitchToSoleFoResolver),
        Box::new(RequestForInformationResolver),
        Box::new(ApplyForConditionalOrderResolver),
        Box::new(AwaitingConditionalOrderReminderResolver),
    ]
}

fn not_applicable(letter_id: LetterId, party: Party, reason: &'static str) -> ResolveError {
    ResolveError::NotApplicable {
        letter_id,
        party,
        reason,
    }
}

fn require_sole(letter_id: LetterId, case: &CaseData, party: Party) -> Result<(), ResolveError> {
    if case.is_sole() {
        Ok(())
    } else {
        Err(not_applicable(
            letter_id,
            party,
            "only sole applications receive this letter",
        ))
    }
}

fn require_applicant1(letter_id: LetterId, party: Party) -> Result<(), ResolveError> {
    match party {
        Party::Applicant1 => Ok(()),
        Party::Applicant2 => Err(not_applicable(
            letter_id,
            party,
            "the letter is only sent to applicant 1",
        )),
    }
}

fn require_unrepresented(
    letter_id: LetterId,
    case: &CaseData,
    party: Party,
) -> Result<(), ResolveError> {
    if case.applicant(party).is_represented() {
        Err(not_applicable(
            letter_id,
            party,
            "represented applicants are contacted through their solicitor",
        ))
    } else {
        Ok(())
    }
}
