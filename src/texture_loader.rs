use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, warn};
use crate::error::CarouselError;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Half,
    Clockwise,
    CounterClockwise,
}

/// Maps an EXIF orientation value to the rotation that uprights the image.
/// Mirrored orientations are left untouched.
pub fn rotation_for_orientation(orientation: u16) -> Rotation {
    match orientation {
        3 => Rotation::Half,
        6 => Rotation::Clockwise,
        8 => Rotation::CounterClockwise,
        _ => Rotation::None,
    }
}

fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

pub fn is_image_path(path: &Path) -> bool {
    IMAGE_EXTENSIONS.contains(&lowercase_extension(path).as_str())
}

/// Image files directly inside `dir_path`, sorted by file name.
/// A directory without images is not an error: the carousel simply has no slides.
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>, CarouselError> {
    let entries = fs::read_dir(dir_path).map_err(|source| CarouselError::ReadDir {
        path: dir_path.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CarouselError::ReadDir {
            path: dir_path.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && is_image_path(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// EXIF orientation of a JPEG, defaulting to 1 (upright) when absent or unreadable.
fn read_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            warn!("could not read EXIF data for {}: {}", image_path.display(), e);
            1
        }
    }
}

pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D, CarouselError> {
    let file_bytes = fs::read(image_path).map_err(|source| CarouselError::ReadFile {
        path: image_path.to_path_buf(),
        source,
    })?;

    let extension = lowercase_extension(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    // raylib picks the decoder from the extension hint
    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| CarouselError::ImageDecode {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let rotation = rotation_for_orientation(orientation);
    match rotation {
        Rotation::Half => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Rotation::Clockwise => image.rotate_cw(),
        Rotation::CounterClockwise => image.rotate_ccw(),
        Rotation::None => {}
    }
    if rotation != Rotation::None {
        debug!(?rotation, "applied EXIF rotation to {}", image_path.display());
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| CarouselError::Texture {
            path: image_path.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_mapping() {
        assert_eq!(rotation_for_orientation(1), Rotation::None);
        assert_eq!(rotation_for_orientation(3), Rotation::Half);
        assert_eq!(rotation_for_orientation(6), Rotation::Clockwise);
        assert_eq!(rotation_for_orientation(8), Rotation::CounterClockwise);
        assert_eq!(rotation_for_orientation(2), Rotation::None);
        assert_eq!(rotation_for_orientation(0), Rotation::None);
    }

    #[test]
    fn image_extensions_are_case_insensitive() {
        assert!(is_image_path(Path::new("a/b.JPG")));
        assert!(is_image_path(Path::new("b.jpeg")));
        assert!(is_image_path(Path::new("c.Png")));
        assert!(!is_image_path(Path::new("notes.txt")));
        assert!(!is_image_path(Path::new("README")));
    }

    #[test]
    fn lists_only_images_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.JPG", "notes.txt", "b.gif"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("d.png")).unwrap();

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.gif", "c.png"]);
    }

    #[test]
    fn empty_directory_yields_no_slides() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_sorted_image_paths(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            load_sorted_image_paths(&missing),
            Err(CarouselError::ReadDir { .. })
        ));
    }

    #[test]
    fn garbage_bytes_default_to_upright() {
        assert_eq!(read_orientation(Path::new("x.jpg"), b"not a jpeg"), 1);
    }
}
