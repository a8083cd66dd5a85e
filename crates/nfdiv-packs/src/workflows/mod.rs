pub mod document_packs;
