//! Tool configuration format.

use crate::common::*;
use label::CategoryMap;

/// The main configuration, loaded from a json5 file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Folder holding the thumbnail images.
    pub image_dir: PathBuf,
    /// Path prefix prepended to file names in labeling-tool image keys.
    pub image_base_path: String,
    /// Category allow-list with per-label confidence thresholds.
    pub categories: CategoryMap,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where to write the detection archive.
    pub coco_file: PathBuf,
    /// Where to write the labeling-tool task list.
    pub labelstudio_file: PathBuf,
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parses_json5() {
        let config: Config = json5::from_str(
            r#"{
                image_dir: "data/thumbnails",
                image_base_path: "/data/local-files/?d=data/thumbnails",
                categories: {
                    "텍스트": { id: 4, threshold: 0.9 },
                    "인물": { id: 2, threshold: 0.85 },
                },
                output: {
                    coco_file: "result.json",
                    labelstudio_file: "labelstudio_tasks.json",
                },
            }"#,
        )
        .unwrap();

        assert_eq!(config.image_dir, PathBuf::from("data/thumbnails"));
        assert_eq!(config.categories.len(), 2);
        assert_eq!(config.categories.get("텍스트").unwrap().threshold, 0.9);
        assert_eq!(config.output.coco_file, PathBuf::from("result.json"));
    }
}
