use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};

use crate::domain::types::ClientId;
use crate::dto::api::{ClientPageQuery, IncomeQuery};
use crate::dto::client::ClientDto;
use crate::repository::DieselRepository;
use crate::routes::{
    error_response, json_error_handler, path_error_handler, query_error_handler,
};
use crate::services::ServiceError;
use crate::services::client::ClientService;

/// Registers the `/clients` endpoints.
///
/// `/clients/income` is registered ahead of `/clients/{id}` so that it is not
/// taken for an identifier. Extractor failures are rendered as
/// [`crate::routes::StandardError`] bodies like every other error.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(find_clients_by_income)
        .service(find_all_clients)
        .service(find_client)
        .service(insert_client)
        .service(update_client)
        .service(delete_client);
}

fn parse_id(raw: i64) -> Result<ClientId, ServiceError> {
    ClientId::new(raw).map_err(|_| ServiceError::NotFound)
}

#[get("/clients")]
pub async fn find_all_clients(
    req: HttpRequest,
    query: web::Query<ClientPageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let request = match query.to_page_request() {
        Ok(request) => request,
        Err(e) => return error_response(&e.into(), &req),
    };

    match ClientService::new(repo.get_ref()).find_all_paged(&request) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(&e, &req),
    }
}

#[get("/clients/income")]
pub async fn find_clients_by_income(
    req: HttpRequest,
    income: web::Query<IncomeQuery>,
    query: web::Query<ClientPageQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let request = match query.to_page_request() {
        Ok(request) => request,
        Err(e) => return error_response(&e.into(), &req),
    };

    match ClientService::new(repo.get_ref()).find_by_income(income.income, &request) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response(&e, &req),
    }
}

#[get("/clients/{id}")]
pub async fn find_client(
    req: HttpRequest,
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let result =
        parse_id(id.into_inner()).and_then(|id| ClientService::new(repo.get_ref()).find_by_id(id));

    match result {
        Ok(dto) => HttpResponse::Ok().json(dto),
        Err(e) => error_response(&e, &req),
    }
}

#[post("/clients")]
pub async fn insert_client(
    req: HttpRequest,
    web::Json(dto): web::Json<ClientDto>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match ClientService::new(repo.get_ref()).insert(&dto) {
        Ok(created) => {
            let location = created
                .id
                .map(|id| format!("/clients/{id}"))
                .unwrap_or_else(|| "/clients".to_string());
            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(created)
        }
        Err(e) => error_response(&e, &req),
    }
}

#[put("/clients/{id}")]
pub async fn update_client(
    req: HttpRequest,
    id: web::Path<i64>,
    web::Json(dto): web::Json<ClientDto>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let result = parse_id(id.into_inner())
        .and_then(|id| ClientService::new(repo.get_ref()).update(id, &dto));

    match result {
        Ok(updated) => HttpResponse::Ok().json(updated),
        Err(e) => error_response(&e, &req),
    }
}

#[delete("/clients/{id}")]
pub async fn delete_client(
    req: HttpRequest,
    id: web::Path<i64>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let result =
        parse_id(id.into_inner()).and_then(|id| ClientService::new(repo.get_ref()).delete(id));

    match result {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e, &req),
    }
}
