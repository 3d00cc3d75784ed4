use crate::{coco::CocoFile, common::*};
use bbox::{ImageSize, PixelLTWH};

/// One labeling-tool task: an image path plus its prediction regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub data: TaskData,
    pub annotations: Vec<TaskAnnotations>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskData {
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAnnotations {
    pub result: Vec<ResultItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub original_width: u32,
    pub original_height: u32,
    pub image_rotation: i64,
    pub value: RectValue,
    pub from_name: String,
    pub to_name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Percent-space rectangle with its label list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectValue {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: i64,
    pub rectanglelabels: Vec<String>,
}

/// Joins the configured base path and a file name, normalizing every path
/// separator to a forward slash regardless of the host convention.
pub fn image_path(base: &str, file_name: &str) -> String {
    let joined = format!("{}/{}", base.trim_end_matches(&['/', '\\'][..]), file_name);
    joined.replace('\\', "/")
}

/// Converts an archive into labeling-tool tasks, one per distinct image.
///
/// Tasks appear in first-seen order of the annotations, and each task's
/// regions keep annotation order. Images without surviving annotations get
/// no task.
pub fn tasks_from_coco(coco: &CocoFile, image_base_path: &str) -> Result<Vec<Task>> {
    let images: HashMap<_, _> = coco.images.iter().map(|image| (image.id, image)).collect();
    let categories: HashMap<_, _> = coco
        .categories
        .iter()
        .map(|cat| (cat.id, cat.name.as_str()))
        .collect();

    let mut tasks: IndexMap<String, Task> = IndexMap::new();

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

        let size = ImageSize::new(image.width, image.height)?;
        let percent = PixelLTWH::from_xywh(ann.bbox).to_percent(size);

        let path = image_path(image_base_path, &image.file_name);
        let task = tasks.entry(path.clone()).or_insert_with(|| Task {
            data: TaskData { image: path },
            annotations: vec![TaskAnnotations { result: Vec::new() }],
        });

        task.annotations[0].result.push(ResultItem {
            original_width: image.width,
            original_height: image.height,
            image_rotation: 0,
            value: RectValue {
                x: percent.x,
                y: percent.y,
                width: percent.width,
                height: percent.height,
                rotation: 0,
                rectanglelabels: vec![category.to_string()],
            },
            from_name: "label".to_owned(),
            to_name: "image".to_owned(),
            kind: "rectanglelabels".to_owned(),
        });
    }

    Ok(tasks.into_iter().map(|(_, task)| task).collect())
}

/// Writes the task list as a labeling-tool import file.
pub fn save_tasks<P>(tasks: &[Task], path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = serde_json::to_string_pretty(tasks)?;
    fs::write(path, text).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
