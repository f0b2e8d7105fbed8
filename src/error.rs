use serde::{Deserialize, Serialize};
use thiserror::Error;

/// JSON body carried by every failed API response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Product not found")]
    ProductNotFound,
    #[error("Product already reviewed")]
    AlreadyReviewed,
    #[error("Rating must be between 1 and 5")]
    InvalidRating,
    #[error("Not authorized, no token")]
    MissingToken,
    #[error("Not authorized, token failed")]
    InvalidToken,
    #[error("Invalid email")]
    UnknownUser,
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[cfg(feature = "ssr")]
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

impl StoreError {
    pub fn status(&self) -> u16 {
        match self {
            StoreError::ProductNotFound => 404,
            StoreError::AlreadyReviewed
            | StoreError::InvalidRating
            | StoreError::InvalidBody(_) => 400,
            StoreError::MissingToken | StoreError::InvalidToken | StoreError::UnknownUser => 401,
            #[cfg(feature = "ssr")]
            StoreError::Database(_) => 500,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            message: self.to_string(),
        }
    }
}

#[cfg(feature = "ssr")]
impl actix_web::ResponseError for StoreError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::from_u16(self.status())
            .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        if let StoreError::Database(e) = self {
            leptos::logging::error!("[API] Database error: {:?}", e);
        }
        actix_web::HttpResponse::build(self.status_code()).json(self.body())
    }
}
