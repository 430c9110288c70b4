use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::resources::{search_resources, CrisisLine, Resource, CATEGORIES, CRISIS_LINES};
use crate::types::ResourceQuery;

#[derive(Serialize, ToSchema)]
pub struct ResourceList {
    pub categories: Vec<&'static str>,
    pub resources: Vec<Resource>,
}

/// Curated reading, video and audio, filtered by category and free text.
#[utoipa::path(
    tag = "resources",
    params(
        ("category" = Option<String>, Query, description = "Category name, \"All\" for every category"),
        ("q" = Option<String>, Query, description = "Text to find in titles and descriptions"),
    ),
    responses((status = 200, body = ResourceList))
)]
#[get("/resources")]
pub async fn list_resources(query: web::Query<ResourceQuery>) -> web::Json<ResourceList> {
    let query = query.into_inner();

    web::Json(ResourceList {
        categories: CATEGORIES.to_vec(),
        resources: search_resources(query.category.as_deref(), query.q.as_deref()),
    })
}

/// Crisis lines shown whenever a user needs immediate help.
#[utoipa::path(tag = "resources", responses((status = 200, body = Vec<CrisisLine>)))]
#[get("/resources/crisis")]
pub async fn crisis_lines() -> web::Json<Vec<CrisisLine>> {
    web::Json(CRISIS_LINES.to_vec())
}
