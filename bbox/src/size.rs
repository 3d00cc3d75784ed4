use crate::{common::*, RectError};

/// Image size in pixels. Both dimensions are positive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "UncheckedSize")]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self, RectError> {
        if width == 0 || height == 0 {
            return Err(RectError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub(crate) fn cast<T>(&self) -> (T, T)
    where
        T: Float,
    {
        // u32 always fits in an IEEE float
        (T::from(self.width).unwrap(), T::from(self.height).unwrap())
    }
}

#[derive(Deserialize)]
struct UncheckedSize {
    width: u32,
    height: u32,
}

impl TryFrom<UncheckedSize> for ImageSize {
    type Error = RectError;

    fn try_from(from: UncheckedSize) -> Result<Self, Self::Error> {
        let UncheckedSize { width, height } = from;
        Self::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_rejects_zero_dimension() {
        assert_eq!(
            ImageSize::new(0, 500),
            Err(RectError::InvalidDimension {
                width: 0,
                height: 500
            })
        );
        assert_eq!(
            ImageSize::new(1000, 0),
            Err(RectError::InvalidDimension {
                width: 1000,
                height: 0
            })
        );
    }

    #[test]
    fn size_accessors() {
        let size = ImageSize::new(1000, 500).unwrap();
        assert_eq!(size.width(), 1000);
        assert_eq!(size.height(), 500);
    }

    #[test]
    fn size_deserialize_validates() {
        let size: ImageSize = serde_json::from_str(r#"{"width": 640, "height": 480}"#).unwrap();
        assert_eq!(size, ImageSize::new(640, 480).unwrap());

        let err = serde_json::from_str::<ImageSize>(r#"{"width": 0, "height": 480}"#);
        assert!(err.is_err());
    }
}
