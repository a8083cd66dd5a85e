use super::common::*;

use crate::workflows::document_packs::case::Party;
use crate::workflows::document_packs::document::{Audience, DocumentType, PackTrack};

const PARTIES: [Party; 2] = [Party::Applicant1, Party::Applicant2];

#[test]
fn resolution_is_deterministic() {
    let catalog = catalog();
    for case in case_variants() {
        for letter_id in catalog.letter_ids() {
            let resolver = catalog.lookup(letter_id).expect("registered");
            for party in PARTIES {
                assert_eq!(
                    resolver.resolve(&case, party),
                    resolver.resolve(&case, party),
                    "{letter_id} for {party} is not deterministic"
                );
            }
        }
    }
}

#[test]
fn selected_packs_are_declared_by_their_resolver() {
    let catalog = catalog();
    for case in case_variants() {
        for letter_id in catalog.letter_ids() {
            let resolver = catalog.lookup(letter_id).expect("registered");
            for party in PARTIES {
                if let Ok(key) = resolver.select(&case, party) {
                    assert!(
                        resolver.packs().contains(&key),
                        "{letter_id} selected undeclared pack {key}"
                    );
                }
            }
        }
    }
}

#[test]
fn every_static_template_has_a_document_name() {
    let catalog = catalog();
    for case in case_variants() {
        for letter_id in catalog.letter_ids() {
            let resolver = catalog.lookup(letter_id).expect("registered");
            for party in PARTIES {
                let Ok(pack) = resolver.resolve(&case, party) else {
                    continue;
                };
                for document in pack.documents() {
                    if let Some(template) = document.template {
                        assert!(
                            pack.template_name(template).is_some(),
                            "{} uses {template} without a name",
                            pack.key()
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn representation_selects_matching_audience() {
    let catalog = catalog();
    for case in case_variants() {
        for letter_id in catalog.letter_ids() {
            let resolver = catalog.lookup(letter_id).expect("registered");
            for party in PARTIES {
                let Ok(pack) = resolver.resolve(&case, party) else {
                    continue;
                };
                let expected = if case.applicant(party).is_represented() {
                    Audience::Solicitor
                } else {
                    Audience::Citizen
                };
                assert_eq!(
                    pack.audience(),
                    expected,
                    "{letter_id} picked {} for {party}",
                    pack.key()
                );
            }
        }
    }
}

#[test]
fn judicial_separation_cases_only_select_js_packs() {
    let catalog = catalog();
    for letter_id in catalog.letter_ids() {
        let resolver = catalog.lookup(letter_id).expect("registered");
        let branches_on_separation = resolver
            .packs()
            .iter()
            .any(|key| key.descriptor().track == PackTrack::JudicialSeparation);
        if !branches_on_separation {
            continue;
        }

        for case in case_variants() {
            for party in PARTIES {
                let Ok(pack) = resolver.resolve(&case, party) else {
                    continue;
                };
                let expected = if case.is_judicial_separation_case() {
                    PackTrack::JudicialSeparation
                } else {
                    PackTrack::Divorce
                };
                assert_eq!(
                    pack.track(),
                    expected,
                    "{letter_id} picked {} for {party}",
                    pack.key()
                );
            }
        }
    }
}

#[test]
fn packs_only_use_known_document_slots() {
    let catalog = catalog();
    for row in catalog.decision_table() {
        assert!(DocumentType::ALL.contains(&row.document_type));
    }
}

#[test]
fn every_scenario_resolves_for_some_case() {
    let catalog = catalog();
    let variants = case_variants();
    for letter_id in catalog.letter_ids() {
        let resolver = catalog.lookup(letter_id).expect("registered");
        if resolver.packs().is_empty() {
            continue;
        }
        let resolved = variants.iter().any(|case| {
            PARTIES
                .iter()
                .any(|party| resolver.resolve(case, *party).is_ok())
        });
        assert!(resolved, "{letter_id} never resolves");
    }
}
