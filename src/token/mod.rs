mod tokenizer;

pub mod export {
    pub use super::tokenizer::{Tokenizer, SEPARATOR_PATTERN, terminated_content, tokenize, is_token};
}
pub use export::*;
