//! External file formats produced by the conversion pipeline.
//!
//! Field names and fixed literal values in this crate belong to third-party
//! tools and are reproduced exactly.

mod common;

pub use coco::*;
pub mod coco;

pub use labelstudio::*;
pub mod labelstudio;

pub use upload::*;
pub mod upload;
