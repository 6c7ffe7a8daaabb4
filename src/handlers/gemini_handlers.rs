use actix_web::{HttpResponse, web};

use crate::errors::AppError;
use crate::gemini::GeminiClient;
use crate::models::GenerationRequest;

/// POST /gemini/generate - Build the deck-content prompt from structured
/// generation parameters and run it through the model.
///
/// The model's text is parsed as JSON before responding so clients always
/// receive a JSON body; malformed output surfaces as a distinct error rather
/// than being forwarded verbatim.
pub async fn generate(
    client: web::Data<GeminiClient>,
    body: web::Json<GenerationRequest>,
) -> Result<HttpResponse, AppError> {
    let prompt = body.build_prompt();
    log::debug!(
        "generating deck content: topic={:?} slides={}",
        body.topic,
        body.slide_count
    );

    let raw = client.generate_json(&prompt).await?;

    let parsed: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| AppError::MalformedContent(e.to_string()))?;

    Ok(HttpResponse::Ok().json(parsed))
}
