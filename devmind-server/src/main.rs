use std::process::ExitCode;

use devmind_server::config::{load_dotenv, ServerConfig};
use devmind_server::tracing_setup::{init_tracing, TracingConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Before tracing, so RUST_LOG may come from .env
    let dotenv = load_dotenv();

    if let Err(e) = init_tracing(&TracingConfig::from_env()) {
        eprintln!("failed to initialize tracing: {e:#}");
        return ExitCode::FAILURE;
    }

    match dotenv {
        Ok(Some(path)) => tracing::info!("Loaded environment from {}", path.display()),
        Ok(None) => tracing::info!("No .env file found, using environment variables"),
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = devmind_server::run(config).await {
        tracing::error!("{:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
