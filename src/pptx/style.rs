//! Deck styling.
//!
//! One immutable value owns every visual constant the writer needs. Callers
//! that want a different theme construct their own [`DeckStyle`] instead of
//! patching module-level globals.

/// An sRGB color rendered as a hex triplet in DrawingML (`<a:srgbClr val=…>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Uppercase hex form without a leading `#`, as OOXML expects.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Visual identity of a generated deck.
#[derive(Debug, Clone)]
pub struct DeckStyle {
    /// Deck and slide headings: dark blue.
    pub title_color: Rgb,
    /// Title-slide subtitle and slide headers: medium gray.
    pub subtitle_color: Rgb,
    pub description_color: Rgb,
    pub key_point_color: Rgb,

    /// Font sizes in points.
    pub header_size: u32,
    pub description_size: u32,
    pub key_point_size: u32,

    /// Spacing after the description paragraph, in points.
    pub description_space_after: u32,

    /// Run language tag, e.g. `en-US`.
    pub locale: String,
}

impl Default for DeckStyle {
    fn default() -> Self {
        DeckStyle {
            title_color: Rgb::new(44, 77, 121),
            subtitle_color: Rgb::new(89, 89, 89),
            description_color: Rgb::new(67, 67, 67),
            key_point_color: Rgb::new(50, 50, 50),
            header_size: 24,
            description_size: 18,
            key_point_size: 16,
            description_space_after: 20,
            locale: "en-US".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_uppercase_triplet() {
        assert_eq!(Rgb::new(44, 77, 121).hex(), "2C4D79");
        assert_eq!(Rgb::new(89, 89, 89).hex(), "595959");
        assert_eq!(Rgb::new(0, 0, 0).hex(), "000000");
    }
}
