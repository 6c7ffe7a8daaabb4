//! prompt2deck — web backend that turns a topic into a downloadable
//! PowerPoint deck.
//!
//! Two independent pipelines share one JSON contract:
//!
//! 1. A deterministic prompt builder renders generation parameters into an
//!    instruction string, the [`gemini`] client sends it to the model API and
//!    hands back the raw JSON text it produced.
//! 2. The [`pptx`] writer renders a parsed [`models::Presentation`] into a
//!    binary `.pptx`, either streamed to the caller or saved server-side.
//!
//! The HTTP layer in [`handlers`] is thin plumbing between the two.

pub mod config;
pub mod errors;
pub mod gemini;
pub mod handlers;
pub mod models;
pub mod pptx;
