// sqlforge server entrypoint

use actix_web::{App, HttpServer, middleware, web};
use anyhow::Context;
use clap::Parser;
use tracing::info;

use sqlforge::{AppState, ServerConfig, TemplateStore, configure, init_logging};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // Logging before any other side effects
    init_logging(&config.log_level, config.log_format)?;
    info!(config = %serde_json::to_string(&config)?, "starting sqlforge v{}", env!("CARGO_PKG_VERSION"));

    let store = TemplateStore::open(&config.templates).with_context(|| {
        format!("cannot open template directory {}", config.templates.display())
    })?;
    let state = web::Data::new(AppState::new(store)?);

    let addr = config.bind_addr();
    info!("Listening on http://{}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
