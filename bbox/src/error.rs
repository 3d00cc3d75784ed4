use thiserror::Error;

/// Validation errors for image sizes and fractional rectangles.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RectError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
    #[error("box component '{component}' is out of [0, 1]: {value}")]
    MalformedBox {
        component: &'static str,
        value: f64,
    },
}
