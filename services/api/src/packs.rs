use crate::infra::{parse_party, InMemoryDocumentGenerator, InMemoryLetterPrinter};
use clap::Args;
use nfdiv_packs::error::AppError;
use nfdiv_packs::workflows::document_packs::{
    write_decision_table, CaseDetails, DocumentPackService, LetterId, PackCatalog, Party,
    ResolvedPackView,
};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Letter id to resolve, e.g. applicant-aos-pack
    #[arg(long)]
    pub(crate) letter_id: String,
    /// Path to the case details JSON
    #[arg(long)]
    pub(crate) case: PathBuf,
    /// Recipient of the letter (applicant1 or applicant2)
    #[arg(long, value_parser = crate::infra::parse_party, default_value = "applicant1")]
    pub(crate) party: Party,
}

#[derive(Args, Debug, Default)]
pub(crate) struct TableArgs {
    /// Write the CSV to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn list_letters() -> Result<(), AppError> {
    let catalog = PackCatalog::standard()?;
    for letter_id in catalog.letter_ids() {
        let resolver = catalog.lookup(letter_id)?;
        println!("{:<40} {} packs", letter_id, resolver.packs().len());
    }
    Ok(())
}

pub(crate) fn resolve_pack(args: ResolveArgs) -> Result<(), AppError> {
    let ResolveArgs {
        letter_id,
        case,
        party,
    } = args;

    let letter_id = letter_id.parse::<LetterId>()?;
    let mut case = load_case(&case)?;
    let view = resolve_view(letter_id, &mut case, party)?;

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

pub(crate) fn write_table(args: TableArgs) -> Result<(), AppError> {
    let catalog = PackCatalog::standard()?;
    let rows = catalog.decision_table();

    match args.output {
        Some(path) => {
            write_decision_table(&rows, File::create(&path)?)?;
            println!("wrote {} rows to {}", rows.len(), path.display());
        }
        None => write_decision_table(&rows, io::stdout().lock())?,
    }
    Ok(())
}

pub(crate) fn load_case(path: &Path) -> Result<CaseDetails, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn resolve_view(
    letter_id: LetterId,
    case: &mut CaseDetails,
    party: Party,
) -> Result<ResolvedPackView, AppError> {
    let service = DocumentPackService::new(
        Arc::new(PackCatalog::standard()?),
        Arc::new(InMemoryDocumentGenerator::default()),
        Arc::new(InMemoryLetterPrinter::default()),
    );
    let pack = service.resolve(letter_id, case, party)?;

    Ok(ResolvedPackView {
        letter_id,
        case_id: case.id,
        party,
        pack,
        documents_generated: case.data.documents_generated.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfdiv_packs::workflows::document_packs::{DocumentType, PackKey};

    const JOINT_CASE: &str = r#"{
        "id": 1700000000000042,
        "data": {
            "applicationType": "jointApplication",
            "divorceOrDissolution": "divorce",
            "applicant1": { "firstName": "Robin", "lastName": "Reid" },
            "applicant2": { "firstName": "Casey", "lastName": "Reid" },
            "application": { "serviceMethod": "courtService" }
        }
    }"#;

    fn write_case(name: &str, contents: &str) -> PathBuf {
        let file_name = format!("nfdiv-packs-{}-{name}.json", std::process::id());
        let path = std::env::temp_dir().join(file_name);
        std::fs::write(&path, contents).expect("write case fixture");
        path
    }

    #[test]
    fn loads_case_json_from_disk() {
        let path = write_case("load", JOINT_CASE);
        let case = load_case(&path).expect("case loads");
        std::fs::remove_file(&path).ok();

        assert_eq!(case.id.0, 1_700_000_000_000_042);
        assert!(!case.data.is_sole());
    }

    #[test]
    fn malformed_case_json_is_reported() {
        let path = write_case("malformed", "{ \"id\": ");
        let result = load_case(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(AppError::Json(_))));
    }

    #[test]
    fn resolve_view_includes_generated_d84() {
        let path = write_case("resolve", JOINT_CASE);
        let mut case = load_case(&path).expect("case loads");
        std::fs::remove_file(&path).ok();

        let view = resolve_view(
            LetterId::ApplyForConditionalOrder,
            &mut case,
            Party::Applicant2,
        )
        .expect("pack resolves");

        assert_eq!(view.pack.key(), PackKey::ApplyForCoJoint);
        assert_eq!(view.documents_generated.len(), 1);
        assert_eq!(
            view.documents_generated[0].document_type,
            DocumentType::ConditionalOrderApplicationForm
        );
    }

    #[test]
    fn unknown_letter_id_is_rejected() {
        let args = ResolveArgs {
            letter_id: "decree-nisi-letter".to_string(),
            case: PathBuf::from("unused.json"),
            party: Party::Applicant1,
        };
        assert!(matches!(resolve_pack(args), Err(AppError::Catalog(_))));
    }
}
