pub mod error;
pub mod arg;
pub mod string;
