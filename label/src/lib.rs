//! Detection data model and the category filtering policy.

mod common;

pub use annotation::*;
pub mod annotation;

pub use category::*;
pub mod category;

pub use detection::*;
pub mod detection;

pub use image::*;
pub mod image;
