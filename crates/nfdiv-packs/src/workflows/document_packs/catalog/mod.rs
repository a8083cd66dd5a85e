//! Pack constants and the registry mapping letter ids to resolvers.

mod packs;

pub use packs::PackKey;

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::document::{DescriptorError, DocumentType, TemplateId};
use super::resolvers::{self, DocumentPackResolver};

/// Correlation id naming the business scenario behind an outbound letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterId {
    NoticeOfProceedings,
    AosOverdue,
    AosResponseLetter,
    AosResponse,
    RegenerateCourtOrders,
    CertificateOfEntitlement,
    ConditionalOrderGranted,
    ConditionalOrderRefused,
    ConditionalOrderPronounced,
    FinalOrderGranted,
    SwitchToSoleCo,
    SwitchToSoleFo,
    RequestForInformation,
    ApplyForConditionalOrder,
    AwaitingConditionalOrderReminder,
}

impl LetterId {
    pub const ALL: [LetterId; 15] = [
        LetterId::NoticeOfProceedings,
        LetterId::AosOverdue,
        LetterId::AosResponseLetter,
        LetterId::AosResponse,
        LetterId::RegenerateCourtOrders,
        LetterId::CertificateOfEntitlement,
        LetterId::ConditionalOrderGranted,
        LetterId::ConditionalOrderRefused,
        LetterId::ConditionalOrderPronounced,
        LetterId::FinalOrderGranted,
        LetterId::SwitchToSoleCo,
        LetterId::SwitchToSoleFo,
        LetterId::RequestForInformation,
        LetterId::ApplyForConditionalOrder,
        LetterId::AwaitingConditionalOrderReminder,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            LetterId::NoticeOfProceedings => "applicant-aos-pack",
            LetterId::AosOverdue => "aos-overdue-letter",
            LetterId::AosResponseLetter => "aos-response-letter",
            LetterId::AosResponse => "aos-response-pack",
            LetterId::RegenerateCourtOrders => "regenerate-court-orders",
            LetterId::CertificateOfEntitlement => "certificate-of-entitlement",
            LetterId::ConditionalOrderGranted => "conditional-order-granted",
            LetterId::ConditionalOrderRefused => "conditional-order-refused",
            LetterId::ConditionalOrderPronounced => "conditional-order-pronounced",
            LetterId::FinalOrderGranted => "final-order-granted",
            LetterId::SwitchToSoleCo => "switch-to-sole-co-letter",
            LetterId::SwitchToSoleFo => "switch-to-sole-fo-letter",
            LetterId::RequestForInformation => "request-for-information-letter",
            LetterId::ApplyForConditionalOrder => "apply-for-conditional-order",
            LetterId::AwaitingConditionalOrderReminder => "awaiting-conditional-order-reminder",
        }
    }
}

impl fmt::Display for LetterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LetterId {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        LetterId::ALL
            .into_iter()
            .find(|letter_id| letter_id.as_str() == trimmed)
            .ok_or_else(|| CatalogError::UnknownLetter(trimmed.to_string()))
    }
}

impl Serialize for LetterId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Configuration faults in the pack catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no document pack is registered for letter id '{0}'")]
    UnknownLetter(String),
    #[error("letter id {0} is registered more than once")]
    DuplicateLetter(LetterId),
    #[error(transparent)]
    InvalidPack(#[from] DescriptorError),
}

/// One line of the audit export: which template a pack uses for which slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionRow {
    pub letter_id: LetterId,
    pub pack: PackKey,
    pub document_type: DocumentType,
    pub template: Option<TemplateId>,
    pub document_name: Option<&'static str>,
}

/// Registry of scenario resolvers, built once and shared across requests.
pub struct PackCatalog {
    resolvers: BTreeMap<LetterId, Box<dyn DocumentPackResolver>>,
}

impl PackCatalog {
    /// Catalog with every scenario resolver; fails if any pack constant is malformed.
    pub fn standard() -> Result<Self, CatalogError> {
        for key in PackKey::ALL {
            key.descriptor().validate()?;
        }

        let mut catalog = Self {
            resolvers: BTreeMap::new(),
        };
        for resolver in resolvers::standard_resolvers() {
            catalog.register(resolver)?;
        }
        Ok(catalog)
    }

    pub fn register(
        &mut self,
        resolver: Box<dyn DocumentPackResolver>,
    ) -> Result<(), CatalogError> {
        let letter_id = resolver.letter_id();
        if self.resolvers.contains_key(&letter_id) {
            return Err(CatalogError::DuplicateLetter(letter_id));
        }
        self.resolvers.insert(letter_id, resolver);
        Ok(())
    }

    pub fn lookup(&self, letter_id: LetterId) -> Result<&dyn DocumentPackResolver, CatalogError> {
        self.resolvers
            .get(&letter_id)
            .map(|resolver| resolver.as_ref())
            .ok_or_else(|| CatalogError::UnknownLetter(letter_id.as_str().to_string()))
    }

    pub fn lookup_str(&self, letter_id: &str) -> Result<&dyn DocumentPackResolver, CatalogError> {
        self.lookup(letter_id.parse()?)
    }

    pub fn letter_ids(&self) -> Vec<LetterId> {
        self.resolvers.keys().copied().collect()
    }

    pub fn decision_table(&self) -> Vec<DecisionRow> {
        let mut rows = Vec::new();
        for (letter_id, resolver) in &self.resolvers {
            for key in resolver.packs() {
                let descriptor = key.descriptor();
                for (document_type, template) in descriptor.documents {
                    rows.push(DecisionRow {
                        letter_id: *letter_id,
                        pack: *key,
                        document_type: *document_type,
                        template: *template,
                        document_name: template.and_then(|template| {
                            descriptor
                                .template_names
                                .iter()
                                .find(|(id, _)| *id == template)
                                .map(|(_, name)| *name)
                        }),
                    });
                }
            }
        }
        rows
    }
}

/// Write decision table rows as CSV with a header line.
pub fn write_decision_table<W: io::Write>(
    rows: &[DecisionRow],
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

impl fmt::Debug for PackCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackCatalog")
            .field("letter_ids", &self.letter_ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::document_packs::document::{Audience, PackDescriptor, PackTrack};

    #[test]
    fn every_pack_constant_is_well_formed() {
        for key in PackKey::ALL {
            let descriptor = key.descriptor();
            assert_eq!(descriptor.key, *key);
            descriptor
                .validate()
                .unwrap_or_else(|err| panic!("{key} failed validation: {err}"));
        }
    }

    #[test]
    fn validation_rejects_templates_without_names() {
        static BROKEN: PackDescriptor = PackDescriptor {
            key: PackKey::AosOverdue,
            track: PackTrack::Divorce,
            audience: Audience::Citizen,
            documents: &[(
                DocumentType::AosOverdueLetter,
                Some(TemplateId::AosOverdueLetter),
            )],
            template_names: &[],
        };

        let err = BROKEN.validate().expect_err("missing name is rejected");
        assert_eq!(
            err,
            DescriptorError::MissingTemplateName {
                pack: PackKey::AosOverdue,
                template: TemplateId::AosOverdueLetter,
            }
        );
    }

    #[test]
    fn validation_rejects_duplicate_slots() {
        static BROKEN: PackDescriptor = PackDescriptor {
            key: PackKey::Clarification,
            track: PackTrack::Divorce,
            audience: Audience::Citizen,
            documents: &[
                (DocumentType::ConditionalOrderRefusal, None),
                (DocumentType::ConditionalOrderRefusal, None),
            ],
            template_names: &[],
        };

        assert!(matches!(
            BROKEN.validate(),
            Err(DescriptorError::DuplicateDocument {
                document_type: DocumentType::ConditionalOrderRefusal,
                ..
            })
        ));
    }

    #[test]
    fn letter_ids_round_trip_through_strings() {
        for letter_id in LetterId::ALL {
            let parsed: LetterId = letter_id.as_str().parse().expect("known letter id");
            assert_eq!(parsed, letter_id);
        }
    }

    #[test]
    fn unknown_letter_id_is_a_catalog_error() {
        let catalog = PackCatalog::standard().expect("catalog builds");
        match catalog.lookup_str("decree-nisi-letter") {
            Err(CatalogError::UnknownLetter(value)) => assert_eq!(value, "decree-nisi-letter"),
            Err(other) => panic!("expected unknown letter, got {other:?}"),
            Ok(_) => panic!("expected unknown letter"),
        }
    }

    #[test]
    fn standard_catalog_registers_every_letter_id() {
        let catalog = PackCatalog::standard().expect("catalog builds");
        assert_eq!(catalog.letter_ids(), LetterId::ALL.to_vec());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut catalog = PackCatalog::standard().expect("catalog builds");
        let duplicate = resolvers::standard_resolvers()
            .into_iter()
            .next()
            .expect("at least one resolver");
        let letter_id = duplicate.letter_id();

        assert_eq!(
            catalog.register(duplicate),
            Err(CatalogError::DuplicateLetter(letter_id))
        );
    }

    #[test]
    fn every_pack_constant_is_reachable_from_a_resolver() {
        let catalog = PackCatalog::standard().expect("catalog builds");
        let table = catalog.decision_table();
        for key in PackKey::ALL {
            assert!(
                table.iter().any(|row| row.pack == *key),
                "{key} is not declared by any resolver"
            );
        }
    }

    #[test]
    fn decision_table_exports_as_csv() {
        let catalog = PackCatalog::standard().expect("catalog builds");
        let rows: Vec<_> = catalog
            .decision_table()
            .into_iter()
            .filter(|row| row.pack == PackKey::ClarificationSolJs)
            .collect();

        let mut buffer = Vec::new();
        write_decision_table(&rows, &mut buffer).expect("csv written");
        let output = String::from_utf8(buffer).expect("utf8 csv");
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(
            lines[0],
            "letter_id,pack,document_type,template,document_name"
        );
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[3],
            "conditional-order-refused,CLARIFICATION_SOL_JS_PACK,CONDITIONAL_ORDER_REFUSAL,,"
        );
    }

    #[test]
    fn decision_table_names_every_static_template() {
        let catalog = PackCatalog::standard().expect("catalog builds");
        for row in catalog.decision_table() {
            assert_eq!(row.template.is_some(), row.document_name.is_some());
        }
    }
}
