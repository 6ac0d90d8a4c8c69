use super::{import::*, error::{Error as E}};
use crate::util::string::check_contents_with;
use chrono::Duration;
use regex::Regex;

lazy_static! {
    /// "120", "120px", "120 px"
    static ref PIXELS: Regex = {
        Regex::new(r"^\s*([0-9]+)\s*(?:px)?\s*$")
            .expect("failed to compile regex")
    };
}

/// A width as written in the config: a bare number
/// or a css pixel dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Pixels(u32),
    Css(String),
}

impl Dimension {

    /// Parse a width given on the command line
    pub fn parse(s: &str) -> Res<Self> {
        let d = Dimension::Css(s.into());
        d.pixels()?;
        Ok(d)
    }

    pub fn pixels(&self) -> Res<u32> {
        match self {
            Dimension::Pixels(n) => Ok(*n),
            Dimension::Css(s) => {
                PIXELS.captures(s)
                    .and_then(|cap| cap.get(1))
                    .and_then(|m| m.as_str().parse::<u32>().ok())
                    .ok_or(E::InvalidWidth { width: s.clone() }.into())
            }
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub width: Option<Dimension>,
    pub tags: Option<Vec<String>>,
    pub font: Option<Font>,
    /// Measurement debounce in milliseconds
    pub delay: Option<u32>,
}

impl Config {

    pub fn read(path: &Path) -> Res<Self> {
        use std::io::prelude::*;
        use std::fs::File;
        trace!("reading configuration from {}", path.to_string_lossy());
        let mut buffer = String::new();
        let mut file = File::open(path)?;
        file.read_to_string(&mut buffer)?;
        Self::parse(&buffer)
    }

    pub fn parse(text: &str) -> Res<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default())
        }
        serde_yaml::from_str(text)
            .map_err(|e| E::ConfigurationError {
                message: format!("{}", e)
            }.into())
    }

    /// Validate the config and fill in defaults
    pub fn configure(self) -> Res<EditorOptions> {
        let mut options = EditorOptions::default();
        if let Some(width) = self.width {
            options.width = width.pixels()?;
        }
        if let Some(tags) = self.tags {
            options.tags = tags;
        }
        if let Some(font) = self.font {
            options.font = validate_font(font)?;
        }
        if let Some(delay) = self.delay {
            options.measure_delay = Duration::milliseconds(delay as i64);
        }
        Ok(options)
    }
}

fn validate_font(font: Font) -> Res<Font> {
    let family_ok = !font.family.trim().is_empty() && check_contents_with(&font.family, |c| {
        c.is_ascii_alphanumeric() || " -_,\"'".contains(c)
    });
    if !family_ok {
        return Err(E::ConfigurationError {
            message: format!("invalid font family: '{}'", font.family)
        }.into())
    }
    if font.size == 0 || font.size > MAX_FONT_SIZE {
        return Err(E::ConfigurationError {
            message: format!("font size must be between 1 and {}", MAX_FONT_SIZE)
        }.into())
    }
    Ok(font)
}

#[cfg(test)]
mod suite {
    use super::*;

    #[test]
    fn check_full_config() {
        let text = "
width: 250px
tags: [red, blue]
font: { family: monospace, size: 11 }
delay: 20
";
        let options = Config::parse(text).unwrap().configure().unwrap();
        assert_eq!(options.width, 250);
        assert_eq!(options.tags, vec!["red".to_string(), "blue".to_string()]);
        assert_eq!(options.font, Font::new("monospace", 11));
        assert_eq!(options.measure_delay, Duration::milliseconds(20));
    }

    #[test]
    fn check_empty_config() {
        let options = Config::parse("").unwrap().configure().unwrap();
        assert_eq!(options.width, 300);
        assert!(options.tags.is_empty());
        assert_eq!(options.font, Font::default());
        assert_eq!(options.measure_delay, Duration::milliseconds(MEASURE_DELAY_MS));
    }

    #[test]
    fn check_numeric_width() {
        let options = Config::parse("width: 120").unwrap().configure().unwrap();
        assert_eq!(options.width, 120);
    }

    #[test]
    fn check_dimension() {
        assert_eq!(Dimension::parse("80px").unwrap().pixels().unwrap(), 80);
        assert_eq!(Dimension::parse(" 80 ").unwrap().pixels().unwrap(), 80);
        assert!(Dimension::parse("80em").is_err());
        assert!(Dimension::parse("-3px").is_err());
    }

    #[test]
    #[should_panic(expected = "InvalidWidth")]
    fn check_invalid_width() {
        Config::parse("width: wide").unwrap().configure().unwrap();
    }

    #[test]
    #[should_panic(expected = "ConfigurationError")]
    fn check_invalid_font() {
        Config::parse("font: { family: 'a;b', size: 12 }").unwrap().configure().unwrap();
    }

    #[test]
    #[should_panic(expected = "ConfigurationError")]
    fn check_font_too_large() {
        Config::parse("font: { family: serif, size: 4000000000 }").unwrap().configure().unwrap();
    }

    #[test]
    #[should_panic(expected = "ConfigurationError")]
    fn check_malformed_yaml() {
        Config::parse("tags: {").unwrap();
    }
}
