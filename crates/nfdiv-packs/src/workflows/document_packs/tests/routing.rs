use super::common::*;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::workflows::document_packs::case::{CaseData, Party};
use crate::workflows::document_packs::router::PackRequest;

fn post(uri: &str, data: CaseData, party: Party) -> Request<Body> {
    let request = PackRequest {
        case: details(data),
        party,
    };
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_vec(&request).expect("serialize request"),
        ))
        .expect("build request")
}

#[tokio::test]
async fn list_route_returns_letter_ids() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/api/v1/document-packs")
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let letter_ids = body["letterIds"].as_array().expect("letter ids array");
    assert_eq!(letter_ids.len(), 15);
    assert!(letter_ids.contains(&json!("applicant-aos-pack")));
}

#[tokio::test]
async fn resolve_route_returns_pack() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post(
            "/api/v1/document-packs/applicant-aos-pack",
            sole_case(),
            Party::Applicant1,
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["letterId"], "applicant-aos-pack");
    assert_eq!(body["party"], "applicant1");
    assert_eq!(body["pack"]["key"], "NOP_SOLE_APP1_CITIZEN_CS_PACK");
    assert_eq!(
        body["pack"]["documents"][0]["template"],
        "NFD_NOP_A1_SOLE_APP1_CIT_CS"
    );
}

#[tokio::test]
async fn resolve_route_returns_generated_d84() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post(
            "/api/v1/document-packs/apply-for-conditional-order",
            joint_case(),
            Party::Applicant2,
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let generated = body["documentsGenerated"]
        .as_array()
        .expect("generated documents");
    assert_eq!(generated.len(), 1);
    assert_eq!(
        generated[0]["documentType"],
        "CONDITIONAL_ORDER_APPLICATION_FORM"
    );
}

#[tokio::test]
async fn unknown_letter_id_is_not_found() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post(
            "/api/v1/document-packs/decree-absolute-letter",
            sole_case(),
            Party::Applicant1,
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn inapplicable_letter_is_unprocessable() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post(
            "/api/v1/document-packs/aos-overdue-letter",
            joint_case(),
            Party::Applicant1,
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("aos-overdue-letter"));
}

#[tokio::test]
async fn undefined_scenario_is_not_implemented() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post(
            "/api/v1/document-packs/regenerate-court-orders",
            sole_case(),
            Party::Applicant1,
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn print_route_accepts_letter() {
    let (service, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post(
            "/api/v1/document-packs/applicant-aos-pack/print",
            sole_case(),
            Party::Applicant2,
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let body = read_json_body(response).await;
    assert_eq!(body["receipt"]["letterReference"], "letter-0001");
    assert_eq!(body["receipt"]["documentCount"], 2);
}

#[tokio::test]
async fn print_failure_is_bad_gateway() {
    let service = crate::workflows::document_packs::DocumentPackService::new(
        std::sync::Arc::new(catalog()),
        std::sync::Arc::new(MemoryGenerator::default()),
        std::sync::Arc::new(OfflinePrinter),
    );
    let router = router_with_service(service);

    let response = router
        .oneshot(post(
            "/api/v1/document-packs/applicant-aos-pack/print",
            sole_case(),
            Party::Applicant1,
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
