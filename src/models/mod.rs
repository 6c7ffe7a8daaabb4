pub mod generation;
pub mod presentation;

pub use generation::GenerationRequest;
pub use presentation::{Presentation, SlideContent, SlidesPayload};
