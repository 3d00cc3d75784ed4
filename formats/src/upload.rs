use crate::{coco::CocoFile, common::*};
use bbox::{ImageSize, PixelLTWH};

/// Category name to upload-service tag id.
pub type TagMap = IndexMap<String, String>;

/// Regions grouped per file name, in first-seen order.
pub type Uploads = IndexMap<String, Vec<Region>>;

/// Upload requests are capped at this many files each.
pub const UPLOAD_BATCH_SIZE: usize = 50;

/// One normalized region tied to an upload tag. Components are exact [0, 1]
/// proportions, unrounded, unlike the percent form in the labeling-tool
/// output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(rename = "tagId")]
    pub tag_id: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// One file's entry within an upload batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadEntry {
    pub name: String,
    pub regions: Vec<Region>,
}

/// Converts an archive into per-file upload regions.
///
/// Categories missing from the tag map are skipped silently, the same
/// drop-not-fail policy the detection filter applies.
pub fn uploads_from_coco(coco: &CocoFile, tags: &TagMap) -> Result<Uploads> {
    let images: HashMap<_, _> = coco.images.iter().map(|image| (image.id, image)).collect();
    let categories: HashMap<_, _> = coco
        .categories
        .iter()
        .map(|cat| (cat.id, cat.name.as_str()))
        .collect();

    let mut uploads = Uploads::new();

    for ann in &coco.annotations {
        let image = images.get(&ann.image_id).ok_or_else(|| {
            format_err!(
                "annotation {} references unknown image id {}",
                ann.id,
                ann.image_id
            )
        })?;
        let category = categories.get(&ann.category_id).ok_or_else(|| {
            format_err!(
                "annotation {} references unknown category id {}",
                ann.id,
                ann.category_id
            )
        })?;

        let tag_id = match tags.get(*category) {
            Some(tag_id) => tag_id,
            None => continue,
        };

        let size = ImageSize::new(image.width, image.height)?;
        let ratio = PixelLTWH::from_xywh(ann.bbox).to_ratio(size);

        uploads
            .entry(image.file_name.clone())
            .or_default()
            .push(Region {
                tag_id: tag_id.clone(),
                left: ratio.left,
                top: ratio.top,
                width: ratio.width,
                height: ratio.height,
            });
    }

    Ok(uploads)
}

/// Splits the upload map into request batches of at most `batch_size`
/// files, preserving first-seen order. `batch_size` must be positive.
pub fn into_batches(uploads: Uploads, batch_size: usize) -> Vec<Vec<UploadEntry>> {
    let entries = uploads
        .into_iter()
        .map(|(name, regions)| UploadEntry { name, regions });
    let chunks = entries.chunks(batch_size);
    chunks.into_iter().map(|chunk| chunk.collect()).collect()
}

/// Writes the upload map as JSON.
pub fn save_uploads<P>(uploads: &Uploads, path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(uploads)?;
    fs::write(path, text).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
