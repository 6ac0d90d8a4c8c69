#[macro_use] extern crate failure;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate log;
#[macro_use] extern crate serde;
extern crate chrono;
extern crate clap;
extern crate internship;
extern crate regex;
extern crate serde_json;
extern crate serde_yaml;

pub mod util;
pub mod app;
pub mod model;
pub mod token;
pub mod view;

pub mod import {
    pub use super::util::error::*;
    pub use std::collections::{BTreeMap, HashMap};
    pub use std::path::{Path, PathBuf};
}
