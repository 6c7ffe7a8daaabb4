use std::fs;
use std::path::{Path, PathBuf};

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{Presentation, SlidesPayload};
use crate::pptx::{DeckStyle, DeckWriter, PPTX_MIME};

const DEFAULT_TITLE: &str = "Untitled Presentation";

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    title: Option<String>,
}

impl TitleQuery {
    fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

/// Whitespace runs become underscores so the title is filename-safe.
fn sanitize_title(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join("_")
}

fn persist_deck(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AppError::Persist(e.to_string()))?;
    }
    fs::write(path, bytes).map_err(|e| AppError::Persist(e.to_string()))
}

/// POST /api/ppt/download?title=... - Render the posted slide content and
/// stream the deck back as an attachment.
pub async fn download(
    query: web::Query<TitleQuery>,
    body: web::Json<SlidesPayload>,
) -> Result<HttpResponse, AppError> {
    let title = query.title();
    let presentation = Presentation::from_payload(title, body.into_inner());

    let bytes = DeckWriter::new(DeckStyle::default()).render(&presentation)?;
    let filename = format!("{}.pptx", sanitize_title(title));

    Ok(HttpResponse::Ok()
        .content_type(PPTX_MIME)
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(bytes))
}

/// POST /api/ppt/save?title=... - Render the posted slide content and write
/// the deck under the configured output directory with a timestamped name.
pub async fn save(
    config: web::Data<Config>,
    query: web::Query<TitleQuery>,
    body: web::Json<SlidesPayload>,
) -> Result<HttpResponse, AppError> {
    let title = query.title();
    let presentation = Presentation::from_payload(title, body.into_inner());

    let bytes = DeckWriter::new(DeckStyle::default()).render(&presentation)?;

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let filename = format!("{}_{timestamp}.pptx", sanitize_title(title));
    let path: PathBuf = config.output_dir.join(filename);

    persist_deck(&path, &bytes)?;
    let saved = path.canonicalize().unwrap_or(path);
    log::info!("deck saved at {}", saved.display());

    Ok(HttpResponse::Ok().body(format!("Presentation saved at {}", saved.display())))
}

/// GET /api/ppt/status - Liveness probe.
pub async fn status() -> HttpResponse {
    HttpResponse::Ok().body("PPT Generator service is running")
}
