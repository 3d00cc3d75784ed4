//! Safe bounding box types and unit conversions.

mod common;

pub use error::*;
pub mod error;

pub use size::*;
pub mod size;

pub use ltwh::*;
pub mod ltwh;

pub use percent::*;
pub mod percent;
