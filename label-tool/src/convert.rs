use crate::{common::*, config::Config, scan};
use formats::{
    into_batches, save_tasks, save_uploads, tasks_from_coco, uploads_from_coco, CocoFile, TagMap,
    UPLOAD_BATCH_SIZE,
};
use label::{annotate, Detection, ImagePredictions};

/// Detector output keyed by image file name.
pub type PredictionsFile = IndexMap<String, Vec<Detection>>;

/// Runs the folder-to-artifacts conversion: scan images, join them with
/// detector output, filter, and write the archive plus labeling-tool tasks.
pub fn convert(config: &Config, predictions_file: &Path) -> Result<()> {
    let text = fs::read_to_string(predictions_file)
        .with_context(|| format!("failed to read '{}'", predictions_file.display()))?;
    let predictions: PredictionsFile = serde_json::from_str(&text)
        .with_context(|| format!("'{}' is not a valid predictions file", predictions_file.display()))?;

    let images = scan::scan_images(&config.image_dir)?;
    info!(
        "found {} images under '{}'",
        images.len(),
        config.image_dir.display()
    );

    let batch: Vec<_> = images
        .into_iter()
        .map(|image| {
            let detections = predictions
                .get(&image.file_name)
                .cloned()
                .unwrap_or_default();
            ImagePredictions { image, detections }
        })
        .collect();

    let annotations = annotate(&batch, &config.categories)?;
    info!("kept {} annotations after filtering", annotations.len());

    let images: Vec<_> = batch.iter().map(|preds| preds.image.clone()).collect();
    let coco = CocoFile::build(&images, &annotations, &config.categories);
    coco.save(&config.output.coco_file)?;
    info!("wrote archive to '{}'", config.output.coco_file.display());

    let tasks = tasks_from_coco(&coco, &config.image_base_path)?;
    save_tasks(&tasks, &config.output.labelstudio_file)?;
    info!(
        "wrote {} tasks to '{}'",
        tasks.len(),
        config.output.labelstudio_file.display()
    );

    Ok(())
}

/// Converts an archive file into upload regions for the training service.
pub fn uploads(coco_file: &Path, tag_file: &Path, output_file: &Path) -> Result<()> {
    let coco = CocoFile::open(coco_file)?;
    info!(
        "loaded {} images / {} annotations",
        coco.images.len(),
        coco.annotations.len()
    );

    let text = fs::read_to_string(tag_file)
        .with_context(|| format!("failed to read '{}'", tag_file.display()))?;
    let tags: TagMap = serde_json::from_str(&text)
        .with_context(|| format!("'{}' is not a valid tag map", tag_file.display()))?;

    let uploads = uploads_from_coco(&coco, &tags)?;
    save_uploads(&uploads, output_file)?;

    let batches = into_batches(uploads, UPLOAD_BATCH_SIZE);
    info!(
        "wrote {} upload batches to '{}'",
        batches.len(),
        output_file.display()
    );

    Ok(())
}
