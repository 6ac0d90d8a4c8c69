mod dom;
mod measure;
mod deferred;
mod chip;
mod editor;

pub mod prelude {
    /// The container of the whole control
    pub const FIELD_CLASS: &'static str = "tag-editor-field";
    /// A single chip
    pub const TAG_CLASS: &'static str = "tag-editor-tag";
    /// The name inside a chip
    pub const TEXT_CLASS: &'static str = "tag-editor-text";
    /// The delete control inside a chip
    pub const DELETE_CLASS: &'static str = "tag-editor-delete";
    /// The live text input
    pub const INPUT_CLASS: &'static str = "tag-editor-input";

    /// Appended to the input text before measuring so the
    /// input is always a bit wider than its contents.
    pub const MEASURE_PADDING: &'static str = "WW";
    /// Delay before a scheduled width measurement is applied
    pub const MEASURE_DELAY_MS: i64 = 50;
    /// Largest accepted font size in pixels
    pub const MAX_FONT_SIZE: u32 = 1000;
}

pub mod import {
    pub use super::super::import::*;
    pub use super::prelude::*;
    pub use crate::model::export::*;
}

pub mod export {
    pub use super::prelude::*;
    pub use super::dom::*;
    pub use super::measure::*;
    pub use super::deferred::*;
    pub use super::chip::*;
    pub use super::editor::*;
}
pub use export::*;
