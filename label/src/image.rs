use crate::common::*;
use bbox::{ImageSize, RectError};

/// One image in a conversion batch. The id is unique within the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub id: i64,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

impl ImageDescriptor {
    pub fn size(&self) -> Result<ImageSize, RectError> {
        ImageSize::new(self.width, self.height)
    }
}
