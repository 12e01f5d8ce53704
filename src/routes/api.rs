use actix_web::{HttpResponse, Responder, get, web};
use log::error;
use serde::Deserialize;

use crate::dto::advocate::AdvocatesQuery;
use crate::repository::DieselRepository;
use crate::services::advocate as advocate_service;

#[derive(Debug, Deserialize)]
pub struct AdvocatesQueryParams {
    page: Option<String>,
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

/// Lenient page parsing: non-numeric, zero, and negative values all resolve
/// to page 1 rather than a client error.
fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .map_or(1, |n| n.max(1) as usize)
}

/// `GET /advocates?page=<int>&searchTerm=<string>`
///
/// Both parameters are optional: `page` defaults to 1, `searchTerm` to no
/// filter. Returns the page of records and its pagination metadata as one
/// payload, or a bare 500 when the repository fails.
#[get("/advocates")]
pub async fn list_advocates(
    params: web::Query<AdvocatesQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let params = params.into_inner();
    let query = AdvocatesQuery {
        page: Some(parse_page(params.page.as_deref())),
        search_term: params.search_term,
    };

    match advocate_service::list_advocates(repo.get_ref(), query) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            error!("Failed to list advocates: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
