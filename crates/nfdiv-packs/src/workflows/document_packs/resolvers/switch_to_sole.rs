use super::super::case::{CaseData, OfflineWhoApplying, Party};
use super::super::catalog::{LetterId, PackKey};
use super::{not_applicable, DocumentPackResolver, ResolveError};

/// Tells the other applicant that a joint conditional order application became sole.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchToSoleCoResolver;

impl DocumentPackResolver for SwitchToSoleCoResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::SwitchToSoleCo
    }

    fn packs(&self) -> &'static [PackKey] {
        &[
            PackKey::SwitchToSoleCo,
            PackKey::SwitchToSoleCoSolicitor,
            PackKey::JudicialSeparationSwitchToSoleCo,
            PackKey::JudicialSeparationSwitchToSoleCoSolicitor,
        ]
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        let letter_id = self.letter_id();
        if !case.conditional_order.switched_to_sole {
            return Err(not_applicable(
                letter_id,
                party,
                "the conditional order application was not switched to sole",
            ));
        }
        require_other_party(letter_id, case.conditional_order.d84_who_applying, party)?;

        let represented = case.applicant(party).is_represented();
        Ok(match (case.is_judicial_separation_case(), represented) {
            (true, true) => PackKey::JudicialSeparationSwitchToSoleCoSolicitor,
            (true, false) => PackKey::JudicialSeparationSwitchToSoleCo,
            (false, true) => PackKey::SwitchToSoleCoSolicitor,
            (false, false) => PackKey::SwitchToSoleCo,
        })
    }
}

/// Same notice for a final order application that became sole.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwitchToSoleFoResolver;

impl DocumentPackResolver for SwitchToSoleFoResolver {
    fn letter_id(&self) -> LetterId {
        LetterId::SwitchToSoleFo
    }

    fn packs(&self) -> &'static [PackKey] {
        &[PackKey::SwitchToSoleFo, PackKey::SwitchToSoleFoSolicitor]
    }

    fn select(&self, case: &CaseData, party: Party) -> Result<PackKey, ResolveError> {
        let letter_id = self.letter_id();
        if !case.final_order.switched_to_sole {
            return Err(not_applicable(
                letter_id,
                party,
                "the final order application was not switched to sole",
            ));
        }
        require_other_party(letter_id, case.final_order.d36_who_applying, party)?;

        if case.is_judicial_separation_case() {
            return Err(not_applicable(
                letter_id,
                party,
                "separation cases have no final order",
            ));
        }

        if case.applicant(party).is_represented() {
            Ok(PackKey::SwitchToSoleFoSolicitor)
        } else {
            Ok(PackKey::SwitchToSoleFo)
        }
    }
}

// A paper D84/D36 names the applicant who switched; only the other one is written to.
fn require_other_party(
    letter_id: LetterId,
    who_applying: Option<OfflineWhoApplying>,
    party: Party,
) -> Result<(), ResolveError> {
    match who_applying {
        Some(applying) if applying.party() == party => Err(not_applicable(
            letter_id,
            party,
            "the applicant who switched to sole does not receive this letter",
        )),
        _ => Ok(()),
    }
}
