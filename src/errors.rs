use actix_web::{HttpResponse, ResponseError};
use std::fmt;

use crate::pptx::DeckError;

/// Request-time error taxonomy. Config errors are startup-fatal and never
/// reach this type.
#[derive(Debug)]
pub enum AppError {
    /// Model call failed: network, timeout, non-2xx, or an empty response.
    Generation(String),
    /// Model output (or a request body) does not match the slide-content schema.
    MalformedContent(String),
    /// The PPTX engine failed while assembling the deck.
    Render(DeckError),
    /// The deck rendered fine but could not be written to disk.
    Persist(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Generation(e) => write!(f, "Generation error: {e}"),
            AppError::MalformedContent(e) => write!(f, "Malformed slide content: {e}"),
            AppError::Render(e) => write!(f, "Render error: {e}"),
            AppError::Persist(e) => write!(f, "Persist error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        log::error!("{self}");
        match self {
            // Persist failures get their own message body so callers can
            // retry the write without regenerating content.
            AppError::Persist(e) => HttpResponse::InternalServerError()
                .body(format!("Error generating presentation: {e}")),
            AppError::MalformedContent(_) => HttpResponse::InternalServerError()
                .body("Model returned malformed slide content"),
            _ => HttpResponse::InternalServerError().body("Internal Server Error"),
        }
    }
}

impl From<DeckError> for AppError {
    fn from(e: DeckError) -> Self {
        AppError::Render(e)
    }
}
