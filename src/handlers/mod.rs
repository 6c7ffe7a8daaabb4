pub mod deck_handlers;
pub mod gemini_handlers;

use actix_web::web;

/// Configure all routes.
///
/// Two independent route groups: the model wrapper under `/gemini` and the
/// deck generator under `/api/ppt`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/gemini").route("/generate", web::post().to(gemini_handlers::generate)),
    );
    cfg.service(
        web::scope("/api/ppt")
            .route("/download", web::post().to(deck_handlers::download))
            .route("/save", web::post().to(deck_handlers::save))
            .route("/status", web::get().to(deck_handlers::status)),
    );
}
