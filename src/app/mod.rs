pub mod config;
pub mod script;

pub mod import {
    pub use super::super::import::*;
    pub use crate::model::export::*;
    pub use crate::view::export::*;
}

pub mod export {
    pub use super::config::*;
    pub use super::script::*;
}
pub use export::*;

pub mod error {
    #[derive(Debug, Fail)]
    pub enum Error {
        #[fail(display = "config error: {}", message)]
        ConfigurationError { message: String, },
        #[fail(display = "invalid width: '{}'", width)]
        InvalidWidth { width: String, },
        #[fail(display = "unknown command: {}", command)]
        UnknownCommand { command: String, },
        #[fail(display = "script error: {}", message)]
        ScriptError { message: String, },
        #[fail(display = "line {}: {}", line, message)]
        ScriptLine { line: usize, message: String, },
        #[fail(display = "unknown tag: '{}'", tag)]
        UnknownTag { tag: String, },
        #[fail(display = "no chip at index {}", index)]
        InvalidIndex { index: usize, },
        #[fail(display = "not a single tag name: '{}'", tag)]
        InvalidTagName { tag: String, },
        #[fail(display = "tag already exists: '{}'", tag)]
        DuplicateTag { tag: String, },
        #[fail(display = "invalid wait: {}ms", ms)]
        InvalidWait { ms: i64, },
    }
}
