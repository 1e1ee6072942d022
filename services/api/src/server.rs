use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_sentencing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use dosimetry::config::AppConfig;
use dosimetry::error::AppError;
use dosimetry::sentencing::SentencingEngine;
use dosimetry::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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
    let engine = Arc::new(SentencingEngine::new(config.sentencing));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_sentencing_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        default_fraction = %config.sentencing.default_circumstance_fraction,
        "sentencing calculator ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
