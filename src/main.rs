use std::sync::Arc;

use actix_web::web;
use anyhow::Context;
use shuttle_actix_web::ShuttleActixWeb;
use shuttle_runtime::SecretStore;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use calmly::config::AppConfig;
use calmly::AppState;

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secret_store: SecretStore,
) -> ShuttleActixWeb<impl FnOnce(&mut web::ServiceConfig) + Send + Clone + 'static> {
    let config = AppConfig::new(&secret_store)?;

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to the database")?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    info!("Database migrations applied");

    let app_state = Arc::new(AppState::new(pool, &config));

    let config = move |cfg: &mut web::ServiceConfig| {
        calmly::configure(cfg, app_state);
    };

    Ok(config.into())
}
