/// The font shared by the measurement element and the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: u32,
}

impl Font {
    pub fn new(family: &str, size: u32) -> Self {
        Self { family: family.into(), size }
    }

    /// The css shorthand, e.g. "13px sans-serif"
    pub fn css(&self) -> String {
        format!("{}px {}", self.size, self.family)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("sans-serif", 13)
    }
}

/// Anything that can tell how many pixels a string
/// takes up when rendered in some font.
pub trait Measure {
    fn width(&self, text: &str, font: &Font) -> u32;
}

/// Approximate proportional font metrics. Every character
/// falls into one of three advance classes, given in
/// thousandths of an em.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    pub narrow: u32,
    pub regular: u32,
    pub wide: u32,
}

const NARROW: &'static str = " !',.:;I[]fijlrt|";
const WIDE: &'static str = "@%MWmw";

impl FontMetrics {
    fn advance(&self, c: char) -> u32 {
        if NARROW.contains(c) { self.narrow }
        else if WIDE.contains(c) { self.wide }
        else { self.regular }
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self { narrow: 280, regular: 560, wide: 940 }
    }
}

impl Measure for FontMetrics {
    fn width(&self, text: &str, font: &Font) -> u32 {
        let ems = text.chars()
            .map(|c| self.advance(c))
            .fold(0u32, |acc, w| acc.saturating_add(w));
        // round up, a pixel too wide never clips
        ems.saturating_mul(font.size).saturating_add(999) / 1000
    }
}

#[cfg(test)]
mod suite {
    use super::*;

    #[test]
    fn check_css() {
        assert_eq!(Font::default().css(), "13px sans-serif");
        assert_eq!(Font::new("monospace", 10).css(), "10px monospace");
    }

    #[test]
    fn check_empty_text() {
        assert_eq!(FontMetrics::default().width("", &Font::default()), 0);
    }

    #[test]
    fn check_character_classes() {
        let m = FontMetrics::default();
        let font = Font::new("serif", 10);
        // 940 * 2 * 10 / 1000
        assert_eq!(m.width("WW", &font), 19);
        assert_eq!(m.width("ii", &font), 6);
        assert_eq!(m.width("ab", &font), 12);
        assert!(m.width("WW", &font) > m.width("ab", &font));
    }

    #[test]
    fn check_huge_font_saturates() {
        let m = FontMetrics::default();
        let font = Font::new("serif", u32::max_value());
        assert_eq!(m.width("abc", &font), u32::max_value() / 1000);
    }

    #[test]
    fn check_scales_with_size() {
        let m = FontMetrics::default();
        assert!(m.width("hello", &Font::new("serif", 20)) > m.width("hello", &Font::new("serif", 10)));
    }
}
