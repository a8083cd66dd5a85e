use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::case::{CaseDetails, CaseId, GeneratedDocument, Party};
use super::catalog::{CatalogError, LetterId};
use super::document::DocumentPack;
use super::on_demand::DocumentGenerator;
use super::print::{LetterPrinter, PrintReceipt};
use super::resolvers::ResolveError;
use super::service::{DispatchError, DocumentPackService};

/// Body accepted by the resolve and print endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PackRequest {
    pub case: CaseDetails,
    pub party: Party,
}

/// Resolved pack plus the case documents after any on-demand generation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPackView {
    pub letter_id: LetterId,
    pub case_id: CaseId,
    pub party: Party,
    pub pack: DocumentPack,
    pub documents_generated: Vec<GeneratedDocument>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintedPackView {
    pub letter_id: LetterId,
    pub case_id: CaseId,
    pub party: Party,
    pub receipt: PrintReceipt,
    pub documents_generated: Vec<GeneratedDocument>,
}

/// Router builder exposing the pack catalog over HTTP.
pub fn document_pack_router<G, P>(service: Arc<DocumentPackService<G, P>>) -> Router
where
    G: DocumentGenerator + 'static,
    P: LetterPrinter + 'static,
{
    Router::new()
        .route("/api/v1/document-packs", get(list_handler::<G, P>))
        .route(
            "/api/v1/document-packs/:letter_id",
            post(resolve_handler::<G, P>),
        )
        .route(
            "/api/v1/document-packs/:letter_id/print",
            post(print_handler::<G, P>),
        )
        .with_state(service)
}

pub(crate) async fn list_handler<G, P>(
    State(service): State<Arc<DocumentPackService<G, P>>>,
) -> Response
where
    G: DocumentGenerator + 'static,
    P: LetterPrinter + 'static,
{
    let payload = json!({
        "letterIds": service.letter_ids(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn resolve_handler<G, P>(
    State(service): State<Arc<DocumentPackService<G, P>>>,
    Path(letter_id): Path<String>,
    axum::Json(request): axum::Json<PackRequest>,
) -> Response
where
    G: DocumentGenerator + 'static,
    P: LetterPrinter + 'static,
{
    let letter_id = match letter_id.parse::<LetterId>() {
        Ok(letter_id) => letter_id,
        Err(error) => return error_response(DispatchError::Catalog(error)),
    };
    let PackRequest { mut case, party } = request;

    match service.resolve(letter_id, &mut case, party) {
        Ok(pack) => {
            let view = ResolvedPackView {
                letter_id,
                case_id: case.id,
                party,
                pack,
                documents_generated: case.data.documents_generated,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn print_handler<G, P>(
    State(service): State<Arc<DocumentPackService<G, P>>>,
    Path(letter_id): Path<String>,
    axum::Json(request): axum::Json<PackRequest>,
) -> Response
where
    G: DocumentGenerator + 'static,
    P: LetterPrinter + 'static,
{
    let letter_id = match letter_id.parse::<LetterId>() {
        Ok(letter_id) => letter_id,
        Err(error) => return error_response(DispatchError::Catalog(error)),
    };
    let PackRequest { mut case, party } = request;

    match service.print(letter_id, &mut case, party) {
        Ok(receipt) => {
            let view = PrintedPackView {
                letter_id,
                case_id: case.id,
                party,
                receipt,
                documents_generated: case.data.documents_generated,
            };
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

/// HTTP status for a dispatch failure.
pub fn dispatch_status(error: &DispatchError) -> StatusCode {
    match error {
        DispatchError::Catalog(CatalogError::UnknownLetter(_)) => StatusCode::NOT_FOUND,
        DispatchError::Catalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        DispatchError::Resolve(ResolveError::Undefined { .. }) => StatusCode::NOT_IMPLEMENTED,
        DispatchError::Resolve(_) | DispatchError::MissingGeneratedDocument { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        DispatchError::Generation(_) | DispatchError::Print(_) => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(error: DispatchError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (dispatch_status(&error), axum::Json(payload)).into_response()
}
