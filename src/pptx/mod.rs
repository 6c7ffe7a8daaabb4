//! PPTX deck generation.
//!
//! A deck is an OOXML package: a zip of XML parts. [`DeckWriter`] assembles
//! the fixed skeleton (content types, relationships, theme, master, layouts)
//! and one slide part per [`crate::models::SlideContent`], preceded by a
//! title slide. Styling comes from an immutable [`DeckStyle`] passed in by
//! the caller, so per-deck theming needs no code changes.

pub mod error;
pub mod style;
pub mod writer;

pub use error::{DeckError, Result};
pub use style::{DeckStyle, Rgb};
pub use writer::DeckWriter;

/// MIME type for a PPTX download response.
pub const PPTX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// PresentationML namespace
pub const NS_PRESENTATION: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";

/// DrawingML namespace
pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// Relationships namespace
pub const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub const REL_TYPE_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

pub const REL_TYPE_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

pub const REL_TYPE_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

pub const REL_TYPE_THEME: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

/// Standard 4:3 slide size in EMU (914400 EMU = 1 inch).
pub const SLIDE_WIDTH_EMU: i64 = 9_144_000;
pub const SLIDE_HEIGHT_EMU: i64 = 6_858_000;
