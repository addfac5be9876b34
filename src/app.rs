use tracing::info;

use crate::infrastructure::config::AppConfig;

pub fn run() -> std::io::Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let config = AppConfig::load()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    info!(host = %config.host, port = config.port, "Starting datasweep backend");

    let server = crate::interfaces::http::start_server(config)?;
    actix_web::rt::System::new().block_on(server)
}
