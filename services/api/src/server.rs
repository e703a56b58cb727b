use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_analysis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use redflag_ai::analysis::AnalysisService;
use redflag_ai::config::AppConfig;
use redflag_ai::error::AppError;
use redflag_ai::telemetry;
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
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let analysis_service = Arc::new(AnalysisService::from_config(&config.analysis));

    // Requests are served against a cold memory until the stored patterns arrive.
    let memory = analysis_service.memory().clone();
    tokio::task::spawn_blocking(move || {
        let loaded = memory.load();
        info!(loaded, "pattern memory warmed");
    });

    let app = with_analysis_routes(analysis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        scoring = config.analysis.comparator_scoring.label(),
        "redflag analysis service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
