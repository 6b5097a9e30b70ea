use actix_web::HttpServer;
use actix_web::web::Data;
use anyhow::Context;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod routes;
mod store;
#[cfg(test)]
mod test_support;

use config::Config;
use db::{Repository, init_db};
use tracing::info;
use tracing_appender::rolling;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, &config.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(EnvFilter::new(&config.log_level))
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    info!(addr = %config.server_addr, "Server starting...");

    let repo = init_db(&config).await?;
    repo.init_schema()
        .await
        .context("Failed to create database schema")?;
    let repo: Data<dyn Repository> = Data::from(repo);

    let server_addr = config.server_addr.clone();

    HttpServer::new(move || routes::app(repo.clone()))
        .bind(&server_addr)
        .with_context(|| format!("Failed to bind {server_addr}"))?
        .run()
        .await?;

    info!("Server stopped");
    Ok(())
}
