use actix_web::{web, HttpRequest, HttpResponse};
use leptos::logging::log;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use crate::db::Database;
use crate::error::StoreError;
use crate::models::review::ReviewInput;
use crate::models::user::{LoginRequest, UserInfo};

pub type SharedDb = web::Data<Arc<Mutex<Database>>>;

/// Registers the JSON API under `/api`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .route("/products", web::get().to(get_products))
            .route("/products/{id}", web::get().to(get_product))
            .route("/products/{id}/reviews", web::post().to(create_product_review))
            .route("/users/login", web::post().to(login)),
    );
}

/// Malformed JSON bodies answer 400 with the same `{ "message" }` shape as
/// every other API failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log!("[API] Rejected request body: {}", err);
        StoreError::InvalidBody(err.to_string()).into()
    })
}

/// Extracts the bearer token from the `Authorization` header.
pub fn bearer_token(req: &HttpRequest) -> Result<&str, StoreError> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(StoreError::MissingToken)
}

async fn authenticate(db: &SharedDb, req: &HttpRequest) -> Result<UserInfo, StoreError> {
    let token = bearer_token(req)?;
    let db = db.lock().await;
    db.find_user_by_token(token).await?.ok_or(StoreError::InvalidToken)
}

pub async fn get_products(db: SharedDb) -> Result<HttpResponse, StoreError> {
    let db = db.lock().await;
    let products = db.list_products().await?;
    log!("[API] Returning {} products", products.len());
    Ok(HttpResponse::Ok().json(products))
}

pub async fn get_product(
    db: SharedDb,
    id: web::Path<String>,
) -> Result<HttpResponse, StoreError> {
    let db = db.lock().await;
    match db.get_product(&id).await? {
        Some(product) => Ok(HttpResponse::Ok().json(product)),
        None => {
            log!("[API] Product {} not found", id);
            Err(StoreError::ProductNotFound)
        }
    }
}

pub async fn create_product_review(
    db: SharedDb,
    req: HttpRequest,
    id: web::Path<String>,
    review: web::Json<ReviewInput>,
) -> Result<HttpResponse, StoreError> {
    let user = authenticate(&db, &req).await?;
    log!("[API] Review for {} from user {}", id, user.id);

    let db = db.lock().await;
    db.add_review(&id, &user, &review).await?;
    Ok(HttpResponse::Created().json(json!({ "message": "Review added" })))
}

pub async fn login(
    db: SharedDb,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, StoreError> {
    let email = request.email.trim().to_lowercase();
    let db = db.lock().await;
    match db.find_user_by_email(&email).await? {
        Some(user) => {
            log!("[API] User {} signed in", user.id);
            Ok(HttpResponse::Ok().json(user))
        }
        None => Err(StoreError::UnknownUser),
    }
}
