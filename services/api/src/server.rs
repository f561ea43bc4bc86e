use crate::cli::ServeArgs;
use crate::infra::{default_evaluation_config, load_directory, AppState, InMemoryCustomerStore};
use crate::routes::with_lending_routes;
use axum::http::{header, HeaderValue, Method};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lendmatch::config::{AppConfig, CorsConfig};
use lendmatch::error::AppError;
use lendmatch::lending::LoanMatchService;
use lendmatch::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let customers = Arc::new(InMemoryCustomerStore::default());
    let directory = load_directory(&config.directory)?;
    info!(banks = directory.bank_count(), "bank directory hydrated");

    let service = Arc::new(LoanMatchService::new(
        customers,
        Arc::new(directory),
        default_evaluation_config(),
    ));

    let app = with_lending_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(cors_layer(&config.cors));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan eligibility service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut origins = Vec::new();
    for origin in &config.allowed_origins {
        match origin.parse::<HeaderValue>() {
            Ok(value) => origins.push(value),
            Err(_) => warn!(%origin, "skipping unparseable CORS origin"),
        }
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
