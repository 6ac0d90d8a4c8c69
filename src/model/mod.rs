pub mod tag;
pub mod collection;

pub mod export {
    pub use super::tag::*;
    pub use super::collection::*;
}
pub use export::*;
