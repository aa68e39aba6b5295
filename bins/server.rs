use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG and CONFIG_PATH take effect
    dotenv().ok();

    let (cfg, config_error) = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => (cfg, None),
        Err(e) => match server::startup::config_from_env() {
            Ok(cfg) => (cfg, Some(e)),
            Err(env_err) => {
                common::utils::logging::init_logging_default();
                error!(service = "customer_api", event = "config_invalid", file_error = %e, error = %env_err, "no usable configuration");
                return std::process::ExitCode::FAILURE;
            }
        },
    };

    common::utils::logging::init_logging(cfg.logging.format);
    info!(service = "customer_api", event = "logger_init", "tracing subscriber initialized");
    if let Some(e) = config_error {
        warn!(service = "customer_api", event = "config_fallback", error = %e, "config file unavailable, using environment");
    }

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "customer_api",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    // both config paths normalize this to a positive count
    let worker_threads = cfg.server.worker_threads.unwrap_or(configs::DEFAULT_WORKER_THREADS);
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all().worker_threads(worker_threads);

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "customer_api", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "customer_api",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads,
        "customer api starting"
    );

    let shutdown = async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!(service = "customer_api", event = "shutdown_signal", %service_id, pid, "received Ctrl+C, shutting down");
            }
            Err(e) => {
                // no signal handler: keep serving until the process is killed
                warn!(service = "customer_api", event = "signal_unavailable", error = %e, "cannot listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    match rt.block_on(server::run(cfg.server, shutdown)) {
        Ok(()) => {
            info!(service = "customer_api", event = "stop", %service_id, pid, "customer api stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "customer_api", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
