use crate::{CategoryMap, ImagePredictions};
use bbox::{PixelLTWH, RectError};

/// A surviving detection in pixel space, tied to an image and category.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub id: i64,
    pub image_id: i64,
    pub category_id: i64,
    pub bbox: PixelLTWH<f64>,
    pub score: f64,
}

impl Annotation {
    pub fn area(&self) -> f64 {
        self.bbox.area()
    }
}

/// Filters every image's detections through the category policy and scales
/// the survivors to pixel units. Annotation ids are assigned from 1 in
/// input order across the whole batch.
pub fn annotate(
    batch: &[ImagePredictions],
    categories: &CategoryMap,
) -> Result<Vec<Annotation>, RectError> {
    let mut annotations = Vec::new();

    for ImagePredictions { image, detections } in batch {
        let size = image.size()?;

        for detection in detections {
            let info = match categories.matching(detection) {
                Some(info) => info,
                None => continue,
            };

            annotations.push(Annotation {
                id: annotations.len() as i64 + 1,
                image_id: image.id,
                category_id: info.id,
                bbox: detection.bbox.to_pixel(size),
                score: detection.confidence,
            });
        }
    }

    Ok(annotations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CategoryInfo, Detection, ImageDescriptor};
    use bbox::RatioLTWH;

    fn categories() -> CategoryMap {
        let mut map = CategoryMap::new();
        map.insert(
            "텍스트",
            CategoryInfo {
                id: 4,
                threshold: 0.9,
            },
        );
        map.insert(
            "인물",
            CategoryInfo {
                id: 2,
                threshold: 0.8,
            },
        );
        map
    }

    fn detection(label: &str, confidence: f64, ltwh: [f64; 4]) -> Detection {
        Detection {
            label: label.to_owned(),
            confidence,
            bbox: RatioLTWH::from_ltwh(ltwh),
        }
    }

    fn image(id: i64, file_name: &str, width: u32, height: u32) -> ImageDescriptor {
        ImageDescriptor {
            id,
            file_name: file_name.to_owned(),
            width,
            height,
        }
    }

    #[test]
    fn annotate_scales_and_numbers_survivors() {
        let batch = vec![ImagePredictions {
            image: image(1, "thumb.jpg", 1000, 500),
            detections: vec![
                detection("텍스트", 0.95, [0.1, 0.2, 0.3, 0.4]),
                detection("텍스트", 0.5, [0.0, 0.0, 0.1, 0.1]),
                detection("자막", 0.99, [0.0, 0.0, 0.1, 0.1]),
                detection("인물", 0.8, [0.5, 0.5, 0.2, 0.2]),
            ],
        }];

        let annotations = annotate(&batch, &categories()).unwrap();
        assert_eq!(annotations.len(), 2);

        let first = &annotations[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.image_id, 1);
        assert_eq!(first.category_id, 4);
        assert_eq!(first.bbox.xywh(), [100.0, 100.0, 300.0, 200.0]);
        assert_eq!(first.area(), 60000.0);
        assert_eq!(first.score, 0.95);

        let second = &annotations[1];
        assert_eq!(second.id, 2);
        assert_eq!(second.category_id, 2);
    }

    #[test]
    fn annotation_ids_run_across_images() {
        let batch = vec![
            ImagePredictions {
                image: image(1, "a.jpg", 100, 100),
                detections: vec![detection("텍스트", 0.95, [0.1, 0.1, 0.2, 0.2])],
            },
            ImagePredictions {
                image: image(2, "b.jpg", 100, 100),
                detections: vec![detection("텍스트", 0.95, [0.3, 0.3, 0.2, 0.2])],
            },
        ];

        let annotations = annotate(&batch, &categories()).unwrap();
        let ids: Vec<_> = annotations.iter().map(|ann| ann.id).collect();
        assert_eq!(ids, [1, 2]);
        let image_ids: Vec<_> = annotations.iter().map(|ann| ann.image_id).collect();
        assert_eq!(image_ids, [1, 2]);
    }

    #[test]
    fn annotate_fails_on_degenerate_image() {
        let batch = vec![ImagePredictions {
            image: image(1, "broken.jpg", 0, 500),
            detections: vec![],
        }];

        assert!(annotate(&batch, &categories()).is_err());
    }
}
