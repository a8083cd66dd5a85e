use super::common::*;

use crate::workflows::document_packs::document::DocumentType;
use crate::workflows::document_packs::on_demand::{
    ensure_on_demand_document, GenerationError, D84_PAPER_FORM,
};

#[test]
fn generates_missing_document_once() {
    let generator = MemoryGenerator::default();
    let mut case = details(sole_case());

    let first = ensure_on_demand_document(&mut case, &D84_PAPER_FORM, &generator)
        .expect("generation succeeds");
    let second = ensure_on_demand_document(&mut case, &D84_PAPER_FORM, &generator)
        .expect("second call succeeds");

    assert!(first);
    assert!(!second);
    assert_eq!(generator.requests().len(), 1);
    let documents = &case.data.documents_generated;
    assert_eq!(documents.len(), 1);
    assert_eq!(
        documents[0].document_type,
        DocumentType::ConditionalOrderApplicationForm
    );
    assert_eq!(documents[0].file_name, "D84.pdf");
}

#[test]
fn existing_document_is_left_alone() {
    let generator = MemoryGenerator::default();
    let mut data = sole_case();
    let mut existing = generated(&D84_PAPER_FORM);
    existing.link = "dm-store://documents/d84-original".to_string();
    data.documents_generated.push(existing.clone());
    let mut case = details(data);

    let created = ensure_on_demand_document(&mut case, &D84_PAPER_FORM, &generator)
        .expect("no generation needed");

    assert!(!created);
    assert!(generator.requests().is_empty());
    assert_eq!(case.data.documents_generated, vec![existing]);
}

#[test]
fn generation_failure_leaves_case_untouched() {
    let mut case = details(sole_case());
    let before = case.clone();

    let result = ensure_on_demand_document(&mut case, &D84_PAPER_FORM, &FailingGenerator);

    assert_eq!(
        result,
        Err(GenerationError::TemplateNotFound("D84.pdf".to_string()))
    );
    assert_eq!(case, before);
}
