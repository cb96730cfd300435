//! Sprite frame loader.
//!
//! Reads every regular file in a directory as one [`TextFrame`]. Frames are
//! ordered by file name so an animation plays back the same way on every
//! filesystem (`frame_1.txt`, `frame_2.txt`, ...).

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use tui_starfield_core::TextFrame;

/// Errors that can occur when loading frames
#[derive(Debug, Error)]
pub enum FrameLoadError {
    /// The frame directory does not exist or cannot be listed
    #[error("frame directory {path} is not readable: {source}")]
    MissingSource {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The frame source exists but is a file
    #[error("frame source {0} is not a directory")]
    NotADirectory(PathBuf),

    /// A frame file could not be read as UTF-8 text
    #[error("failed to read frame {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The directory holds no frame files
    #[error("frame directory {0} contains no frames")]
    Empty(PathBuf),
}

/// Load all frames from `dir`, sorted by file name.
pub fn load_frames(dir: impl AsRef<Path>) -> Result<Vec<TextFrame>, FrameLoadError> {
    let dir = dir.as_ref();

    if dir.is_file() {
        return Err(FrameLoadError::NotADirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| FrameLoadError::MissingSource {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| FrameLoadError::MissingSource {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(FrameLoadError::Empty(dir.to_path_buf()));
    }

    let mut frames = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path).map_err(|source| FrameLoadError::Read {
            path: path.clone(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let frame = TextFrame::new(name, &text);
        tracing::debug!(
            name = frame.name(),
            rows = frame.rows(),
            columns = frame.columns(),
            "loaded frame"
        );
        frames.push(frame);
    }

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_frames_sorted_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("frame_2.txt"), "  B\n BBB").unwrap();
        fs::write(dir.path().join("frame_1.txt"), "  A\n AAA").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let frames = load_frames(dir.path()).unwrap();
        let names: Vec<_> = frames.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["frame_1", "frame_2"]);
        assert_eq!((frames[0].rows(), frames[0].columns()), (2, 4));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_frames(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, FrameLoadError::MissingSource { .. }));
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_frames(dir.path()).unwrap_err();
        assert!(matches!(err, FrameLoadError::Empty(_)));
        assert!(err.to_string().contains("contains no frames"));
    }

    #[test]
    fn file_instead_of_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("frame.txt");
        fs::write(&file, "x").unwrap();
        let err = load_frames(&file).unwrap_err();
        assert!(matches!(err, FrameLoadError::NotADirectory(_)));
    }
}
