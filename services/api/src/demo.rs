use crate::infra::{InMemoryDocumentGenerator, InMemoryLetterPrinter};
use crate::packs::load_case;
use chrono::{Local, NaiveDate};
use clap::Args;
use nfdiv_packs::error::AppError;
use nfdiv_packs::workflows::document_packs::{
    AcknowledgementOfService, Applicant, Application, ApplicationType, CaseData, CaseDetails,
    CaseId, ConditionalOrder, DispatchError, DivorceOrDissolution, DocumentPackService, FinalOrder,
    HowToRespond, LetterId, PackCatalog, Party, ServiceMethod, SupplementaryCaseType,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Case details JSON to walk through instead of the built-in sample case.
    #[arg(long)]
    pub(crate) case: Option<PathBuf>,
    /// Issue date of the sample case (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) issue_date: Option<NaiveDate>,
    /// Skip sending the letters to the in-memory print queue.
    #[arg(long)]
    pub(crate) skip_print: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        case,
        issue_date,
        skip_print,
    } = args;

    let mut case = match case {
        Some(path) => load_case(&path)?,
        None => sample_case(issue_date.unwrap_or_else(|| Local::now().date_naive())),
    };

    let generator = Arc::new(InMemoryDocumentGenerator::default());
    let printer = Arc::new(InMemoryLetterPrinter::default());
    let service = DocumentPackService::new(
        Arc::new(PackCatalog::standard()?),
        generator.clone(),
        printer.clone(),
    );

    println!("Document pack demo for case {}", case.id.0);
    println!(
        "- {} / {:?} / {}",
        case.data.applicant1.full_name(),
        case.data.application_type,
        case.data.applicant2.full_name()
    );

    for (letter_id, party) in lifecycle() {
        let outcome = if skip_print {
            service
                .resolve(letter_id, &mut case, party)
                .map(|pack| format!("{} ({} documents)", pack.key(), pack.documents().len()))
        } else {
            service.print(letter_id, &mut case, party).map(|receipt| {
                format!(
                    "printed as {} ({} documents)",
                    receipt.letter_reference, receipt.document_count
                )
            })
        };

        match outcome {
            Ok(summary) => println!("  {letter_id} -> {party}: {summary}"),
            Err(err) if is_skippable(&err) => {
                println!("  {letter_id} -> {party}: skipped ({err})")
            }
            Err(err) => return Err(err.into()),
        }
    }

    let generated = generator.generated();
    println!("\nOn-demand documents generated: {}", generated.len());
    for document in &generated {
        println!("  - {} ({})", document.display_name, document.file_name);
    }

    if !skip_print {
        println!("Letters queued for print: {}", printer.letters().len());
    }

    Ok(())
}

/// Letters the sample case cannot receive yet are reported rather than aborting the walk.
fn is_skippable(err: &DispatchError) -> bool {
    matches!(
        err,
        DispatchError::Resolve(_) | DispatchError::MissingGeneratedDocument { .. }
    )
}

/// Letters a sole divorce case typically receives, in order.
fn lifecycle() -> Vec<(LetterId, Party)> {
    vec![
        (LetterId::NoticeOfProceedings, Party::Applicant1),
        (LetterId::NoticeOfProceedings, Party::Applicant2),
        (LetterId::AosResponseLetter, Party::Applicant1),
        (LetterId::ApplyForConditionalOrder, Party::Applicant1),
        (
            LetterId::AwaitingConditionalOrderReminder,
            Party::Applicant1,
        ),
        (LetterId::CertificateOfEntitlement, Party::Applicant1),
        (LetterId::ConditionalOrderGranted, Party::Applicant1),
        (LetterId::ConditionalOrderPronounced, Party::Applicant2),
        (LetterId::FinalOrderGranted, Party::Applicant1),
        (LetterId::RegenerateCourtOrders, Party::Applicant1),
    ]
}

fn sample_case(issue_date: NaiveDate) -> CaseDetails {
    CaseDetails {
        id: CaseId(1_700_000_000_000_100),
        data: CaseData {
            application_type: ApplicationType::SoleApplication,
            divorce_or_dissolution: DivorceOrDissolution::Divorce,
            supplementary_case_type: SupplementaryCaseType::NotApplicable,
            applicant1: Applicant {
                first_name: "Dana".to_string(),
                last_name: "Ellis".to_string(),
                email: Some("dana.ellis@example.com".to_string()),
                ..Applicant::default()
            },
            applicant2: Applicant {
                first_name: "Morgan".to_string(),
                last_name: "Ellis".to_string(),
                offline: true,
                ..Applicant::default()
            },
            application: Application {
                service_method: ServiceMethod::CourtService,
                reissue_option: None,
                issue_date: Some(issue_date),
            },
            acknowledgement_of_service: Some(AcknowledgementOfService {
                how_to_respond: HowToRespond::WithoutDispute,
                date_submitted: Some(issue_date + chrono::Duration::days(14)),
            }),
            conditional_order: ConditionalOrder::default(),
            final_order: FinalOrder::default(),
            request_for_information: None,
            documents_generated: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_case_walks_the_lifecycle_without_errors() {
        let args = DemoArgs {
            case: None,
            issue_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            skip_print: false,
        };
        run_demo(args).expect("demo runs");
    }

    #[test]
    fn sample_case_is_a_sole_court_service_case() {
        let issue_date = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
        let case = sample_case(issue_date);
        assert!(case.data.is_sole());
        assert!(case.data.application.is_court_service());
        assert_eq!(case.data.application.issue_date, Some(issue_date));
    }
}
