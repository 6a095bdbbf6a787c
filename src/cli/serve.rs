use crate::{config::Config, error, info, server};

pub async fn serve(config: &Config) {
    info!("Starting web server on http://{}", config.server_addr);

    if let Err(e) = server::start_api_server(config).await {
        error!("Server stopped. Err: {}", e);
    }
}
