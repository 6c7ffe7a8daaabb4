//! The shared slide-content contract between the model output and the
//! PPTX renderer.

use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

/// The model occasionally emits `null` where the schema says array; treat it
/// as absent rather than failing the whole deck.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One structured slide record. Maps to exactly one content slide.
///
/// `slide_number` is informational only — slide order is the order of the
/// `slidesContent` array, not this field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlideContent {
    #[serde(default)]
    pub slide_number: u32,
    #[serde(default)]
    pub slide_name: String,
    #[serde(default)]
    pub header: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_points: Vec<String>,
}

/// Wire shape of a presentation body: `{"slidesContent": [...]}`.
///
/// The overall title travels separately (query parameter on the deck routes,
/// caller argument when parsing model output).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlidesPayload {
    #[serde(rename = "slidesContent", default, deserialize_with = "null_as_default")]
    pub slides_content: Vec<SlideContent>,
}

/// A deck title plus its ordered slide records — the unit the PPTX writer
/// renders. Request-scoped; dropped once the byte output is produced.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub title: String,
    pub slides: Vec<SlideContent>,
}

impl Presentation {
    pub fn new(title: impl Into<String>, slides: Vec<SlideContent>) -> Self {
        Presentation {
            title: title.into(),
            slides,
        }
    }

    pub fn from_payload(title: impl Into<String>, payload: SlidesPayload) -> Self {
        Presentation::new(title, payload.slides_content)
    }

    /// Parse raw model output into a presentation.
    ///
    /// Fails with [`AppError::MalformedContent`] when the top level is not an
    /// object, when `slidesContent` is present but not an array, or when
    /// element field types mismatch. A missing `slidesContent` key yields an
    /// empty deck, not an error.
    pub fn from_model_json(title: impl Into<String>, raw: &str) -> Result<Self, AppError> {
        let payload: SlidesPayload =
            serde_json::from_str(raw).map_err(|e| AppError::MalformedContent(e.to_string()))?;
        Ok(Presentation::from_payload(title, payload))
    }
}
