use crate::{common::*, ImageDescriptor};
use bbox::RatioLTWH;

/// One object-detector output: a labelled fractional box with confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    pub confidence: f64,
    #[serde(rename = "box")]
    pub bbox: RatioLTWH<f64>,
}

/// Detector output for one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagePredictions {
    pub image: ImageDescriptor,
    pub detections: Vec<Detection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_deserializes_wire_format() {
        let det: Detection = serde_json::from_str(
            r#"{
                "label": "텍스트",
                "confidence": 0.95,
                "box": {"left": 0.1, "top": 0.2, "width": 0.3, "height": 0.4}
            }"#,
        )
        .unwrap();

        assert_eq!(det.label, "텍스트");
        assert_eq!(det.confidence, 0.95);
        assert_eq!(det.bbox.ltwh(), [0.1, 0.2, 0.3, 0.4]);
    }
}
