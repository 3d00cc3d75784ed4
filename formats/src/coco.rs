use crate::common::*;
use label::{Annotation, CategoryMap, ImageDescriptor};

/// The detection-archive file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoFile {
    pub images: Vec<CocoImage>,
    pub annotations: Vec<CocoAnnotation>,
    pub categories: Vec<CocoCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CocoImage {
    pub id: i64,
    pub file_name: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocoAnnotation {
    pub id: i64,
    pub image_id: i64,
    pub category_id: i64,
    /// Pixel-space box as `[x, y, w, h]`.
    pub bbox: [f64; 4],
    pub area: f64,
    pub iscrowd: i64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CocoCategory {
    pub id: i64,
    pub name: String,
}

impl CocoFile {
    /// Assembles the archive from a filtered batch.
    ///
    /// Every configured category appears in `categories`, including those
    /// with no surviving annotation.
    pub fn build(
        images: &[ImageDescriptor],
        annotations: &[Annotation],
        categories: &CategoryMap,
    ) -> Self {
        let images = images
            .iter()
            .map(|image| CocoImage {
                id: image.id,
                file_name: image.file_name.clone(),
                width: image.width,
                height: image.height,
            })
            .collect();

        let annotations = annotations
            .iter()
            .map(|ann| CocoAnnotation {
                id: ann.id,
                image_id: ann.image_id,
                category_id: ann.category_id,
                bbox: ann.bbox.xywh(),
                area: ann.area(),
                iscrowd: 0,
                score: ann.score,
            })
            .collect();

        let categories = categories
            .iter()
            .map(|(name, info)| CocoCategory {
                id: info.id,
                name: name.to_owned(),
            })
            .collect();

        Self {
            images,
            annotations,
            categories,
        }
    }

    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        let file = serde_json::from_str(&text)
            .with_context(|| format!("'{}' is not a valid archive file", path.display()))?;
        Ok(file)
    }

    pub fn save<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use label::{annotate, CategoryInfo, Detection, ImagePredictions};
    use serde_json::json;

    fn categories() -> CategoryMap {
        let mut map = CategoryMap::new();
        map.insert(
            "인물",
            CategoryInfo {
                id: 2,
                threshold: 0.9,
            },
        );
        map.insert(
            "텍스트",
            CategoryInfo {
                id: 4,
                threshold: 0.9,
            },
        );
        map
    }

    fn batch() -> Vec<ImagePredictions> {
        vec![ImagePredictions {
            image: ImageDescriptor {
                id: 1,
                file_name: "thumb.jpg".to_owned(),
                width: 1000,
                height: 500,
            },
            detections: vec![Detection {
                label: "텍스트".to_owned(),
                confidence: 0.95,
                bbox: bbox::RatioLTWH::from_ltwh([0.1, 0.2, 0.3, 0.4]),
            }],
        }]
    }

    #[test]
    fn build_matches_archive_contract() {
        let batch = batch();
        let categories = categories();
        let annotations = annotate(&batch, &categories).unwrap();
        let images: Vec<_> = batch.iter().map(|preds| preds.image.clone()).collect();
        let coco = CocoFile::build(&images, &annotations, &categories);

        let expected = json!({
            "images": [
                {"id": 1, "file_name": "thumb.jpg", "width": 1000, "height": 500}
            ],
            "annotations": [
                {
                    "id": 1,
                    "image_id": 1,
                    "category_id": 4,
                    "bbox": [100.0, 100.0, 300.0, 200.0],
                    "area": 60000.0,
                    "iscrowd": 0,
                    "score": 0.95
                }
            ],
            "categories": [
                {"id": 2, "name": "인물"},
                {"id": 4, "name": "텍스트"}
            ]
        });
        assert_eq!(serde_json::to_value(&coco).unwrap(), expected);
    }

    #[test]
    fn unmatched_categories_still_listed() {
        let coco = CocoFile::build(&[], &[], &categories());
        assert!(coco.annotations.is_empty());
        let names: Vec<_> = coco.categories.iter().map(|cat| cat.name.as_str()).collect();
        assert_eq!(names, ["인물", "텍스트"]);
    }

    #[test]
    fn archive_round_trips_through_json() {
        let batch = batch();
        let categories = categories();
        let annotations = annotate(&batch, &categories).unwrap();
        let images: Vec<_> = batch.iter().map(|preds| preds.image.clone()).collect();
        let coco = CocoFile::build(&images, &annotations, &categories);

        let text = serde_json::to_string(&coco).unwrap();
        let parsed: CocoFile = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, coco);
    }
}
