use std::sync::Arc;

use actix_cors::Cors;
use actix_web::web;
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub mod auth;
pub mod chat;
pub mod completion;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod prompts;
pub mod resources;
pub mod routes;
pub mod self_care;
pub mod store;
pub mod types;

#[cfg(test)]
mod testing;

use crate::auth::JwtVerifier;
use crate::completion::{CompletionClient, GroqCompletion};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::middleware::auth::Authentication;
use crate::store::{ChatStore, GratitudeStore, MoodStore, PgStore, ProfileStore};

pub struct AppState {
    pub chats: Arc<dyn ChatStore>,
    pub moods: Arc<dyn MoodStore>,
    pub profiles: Arc<dyn ProfileStore>,
    pub gratitude: Arc<dyn GratitudeStore>,
    pub completion: Arc<dyn CompletionClient>,
    pub jwt: JwtVerifier,
}

impl AppState {
    pub fn new(pool: PgPool, config: &AppConfig) -> Self {
        let store = Arc::new(PgStore::new(pool));

        AppState {
            chats: store.clone(),
            moods: store.clone(),
            profiles: store.clone(),
            gratitude: store,
            completion: Arc::new(GroqCompletion::new(config)),
            jwt: JwtVerifier::new(config.jwt_secret.as_bytes(), &config.jwt_audience),
        }
    }
}

/// Registers every route, the API docs and the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig, state: Arc<AppState>) {
    let authentication = Authentication {
        verifier: state.jwt.clone(),
    };
    let cors = Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    cfg.app_data(web::Data::new(state))
        .app_data(
            web::JsonConfig::default()
                .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
        )
        .app_data(
            web::QueryConfig::default()
                .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
        )
        .app_data(
            web::PathConfig::default()
                .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
        )
        .service(Scalar::with_url("/scalar", routes::ApiDoc::openapi()))
        .service(
            web::scope("")
                .wrap(authentication)
                .wrap(cors)
                .configure(routes::configure),
        );
}
