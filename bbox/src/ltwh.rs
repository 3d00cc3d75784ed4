use crate::{common::*, percent::round2, ImageSize, PercentLTWH, RectError};

/// Fractional rectangle in left-top-width-height order, each component a
/// proportion of the image size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioLTWH<T> {
    pub left: T,
    pub top: T,
    pub width: T,
    pub height: T,
}

impl<T> RatioLTWH<T>
where
    T: Float,
{
    pub fn from_ltwh(ltwh: [T; 4]) -> Self {
        let [left, top, width, height] = ltwh;
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn ltwh(&self) -> [T; 4] {
        [self.left, self.top, self.width, self.height]
    }

    /// Scales each component by the image size, yielding pixel units.
    ///
    /// Components outside [0, 1] are scaled as-is; detector output is
    /// trusted to be well-formed. Call [`check`](Self::check) first to
    /// reject malformed boxes instead.
    pub fn to_pixel(&self, size: ImageSize) -> PixelLTWH<T> {
        let (w, h) = size.cast::<T>();
        PixelLTWH {
            x: self.left * w,
            y: self.top * h,
            width: self.width * w,
            height: self.height * h,
        }
    }

    /// Verifies that every component lies in [0, 1].
    pub fn check(&self) -> Result<(), RectError> {
        let zero = T::zero();
        let one = T::one();
        let components = [
            ("left", self.left),
            ("top", self.top),
            ("width", self.width),
            ("height", self.height),
        ];

        for (component, value) in components {
            // the negated comparison also rejects NaN
            if !(value >= zero && value <= one) {
                return Err(RectError::MalformedBox {
                    component,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        Ok(())
    }
}

/// Absolute rectangle in pixel units, anchored at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelLTWH<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> PixelLTWH<T>
where
    T: Float,
{
    pub fn from_xywh(xywh: [T; 4]) -> Self {
        let [x, y, width, height] = xywh;
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn xywh(&self) -> [T; 4] {
        [self.x, self.y, self.width, self.height]
    }

    pub fn area(&self) -> T {
        self.width * self.height
    }

    /// Inverse of [`RatioLTWH::to_pixel`]: re-expresses the rectangle as
    /// proportions of the image size, without rounding.
    pub fn to_ratio(&self, size: ImageSize) -> RatioLTWH<T> {
        let (w, h) = size.cast::<T>();
        RatioLTWH {
            left: self.x / w,
            top: self.y / h,
            width: self.width / w,
            height: self.height / h,
        }
    }
}

impl PixelLTWH<f64> {
    /// Re-expresses the rectangle as percentages of the image size, each
    /// component rounded to two decimals (half-even).
    ///
    /// Not the inverse of [`RatioLTWH::to_pixel`]; the rounding makes this
    /// form lossy. Use [`to_ratio`](Self::to_ratio) for the exact form.
    pub fn to_percent(&self, size: ImageSize) -> PercentLTWH {
        let (w, h) = size.cast::<f64>();
        PercentLTWH {
            x: round2(self.x / w * 100.0),
            y: round2(self.y / h * 100.0),
            width: round2(self.width / w * 100.0),
            height: round2(self.height / h * 100.0),
        }
    }
}
