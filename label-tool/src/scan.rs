use crate::common::*;
use label::ImageDescriptor;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Collects the image files directly under `dir` and reads their pixel
/// dimensions from the file headers.
///
/// Entries are sorted by path so ids, assigned from 1, are stable across
/// runs. Files whose dimensions cannot be read are skipped with a warning.
pub fn scan_images(dir: &Path) -> Result<Vec<ImageDescriptor>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read image folder '{}'", dir.display()))?
        .map(|entry| Ok(entry?.path()))
        .collect::<Result<Vec<_>>>()?;
    files.retain(|path| is_image_file(path));
    files.sort();

    let mut images = Vec::new();
    for path in files {
        let size = match imagesize::size(&path) {
            Ok(size) => size,
            Err(err) => {
                warn!("skipping '{}': {}", path.display(), err);
                continue;
            }
        };
        let file_name = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_owned(),
            None => continue,
        };

        images.push(ImageDescriptor {
            id: images.len() as i64 + 1,
            file_name,
            width: size.width as u32,
            height: size.height as u32,
        });
    }

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_extension_filter() {
        assert!(is_image_file(Path::new("thumb.jpg")));
        assert!(is_image_file(Path::new("thumb.JPEG")));
        assert!(is_image_file(Path::new("dir/thumb.PNG")));
        assert!(!is_image_file(Path::new("thumb.gif")));
        assert!(!is_image_file(Path::new("thumb.jpg.txt")));
        assert!(!is_image_file(Path::new("no_extension")));
    }
}
