use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLetterPrinter, PaperFormGenerator};
use crate::routes::with_document_pack_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use nfdiv_packs::config::AppConfig;
use nfdiv_packs::error::AppError;
use nfdiv_packs::telemetry;
use nfdiv_packs::workflows::document_packs::{DocumentPackService, PackCatalog};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let forms_dir = config.documents.paper_forms_dir.clone();
    if !forms_dir.is_dir() {
        warn!(
            forms_dir = %forms_dir.display(),
            "paper forms directory missing; on-demand documents will fail"
        );
    }

    let catalog = Arc::new(PackCatalog::standard()?);
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        letters_registered: catalog.letter_ids().len(),
    };

    let service = Arc::new(DocumentPackService::new(
        catalog,
        Arc::new(PaperFormGenerator::new(forms_dir)),
        Arc::new(InMemoryLetterPrinter::default()),
    ));

    let letters_registered = app_state.letters_registered;
    let app = with_document_pack_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        letters_registered,
        "document pack service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
