//! Generation parameters and the deterministic prompt builder.
//!
//! The prompt is a pure function of the request: same input, byte-identical
//! output. It embeds the JSON schema the model is asked to fill so the
//! response can be parsed straight into a [`crate::models::Presentation`].

use serde::Deserialize;

fn default_slide_count() -> u32 {
    10
}

fn default_tone() -> String {
    "professional".to_string()
}

fn default_audience_level() -> String {
    "intermediate".to_string()
}

fn default_language() -> String {
    "English".to_string()
}

/// Parameters for one deck-content generation call.
///
/// Immutable once deserialized; consumed only by [`build_prompt`]. A missing
/// topic or subject interpolates as empty text rather than erroring — the
/// model simply gets a vaguer prompt.
///
/// [`build_prompt`]: GenerationRequest::build_prompt
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default = "default_slide_count")]
    pub slide_count: u32,
    #[serde(default = "default_tone")]
    pub tone: String,
    #[serde(default = "default_audience_level")]
    pub audience_level: String,
    #[serde(default = "default_language")]
    pub language: String,
}

/// Example JSON block shown to the model. Literal text, never varies with
/// input — the parser relies on exactly these field names coming back.
const PROMPT_JSON_FORMAT: &str = r#"Provide the response in the following JSON format:

{
  "slidesContent": [
    {
      "slide_number": 1,
      "slide_name": "Slide Title",
      "header": "Main Heading of the Slide",
      "description": "A detailed explanation or narrative for this slide.",
      "key_points": [
        "First important point",
        "Second highlight",
        "Another quick insight"
      ]
    }
  ]
}"#;

impl GenerationRequest {
    /// Render the instruction string sent to the model.
    ///
    /// Three sections joined by blank lines: an intent sentence interpolating
    /// every request field verbatim, the fixed example-JSON block, and the
    /// guidelines list. No side effects, cannot fail.
    pub fn build_prompt(&self) -> String {
        let intro = format!(
            "Generate a high-quality presentation consisting of {} informative slides \
             for the topic: \"{}\", under the subject: \"{}\". \
             The tone of the slides should be {}, and the content should be suitable \
             for an audience with {} knowledge of the subject. \
             The output language should be {}.",
            self.slide_count,
            self.topic,
            self.subject,
            self.tone,
            self.audience_level,
            self.language
        );

        let guidelines = format!(
            "Guidelines:\n\
             - Ensure the number of slides is exactly {}.\n\
             - The first slide should introduce the topic, and the last should summarize or conclude.\n\
             - Ensure each slide builds on the topic progressively.\n\
             - Use clear and simple language suitable for {} audiences.\n\
             - Maintain a {} tone throughout.\n\
             - Use practical examples, analogies, or real-world relevance where appropriate.",
            self.slide_count, self.audience_level, self.tone
        );

        format!("{intro}\n\n{PROMPT_JSON_FORMAT}\n\n{guidelines}")
    }
}
