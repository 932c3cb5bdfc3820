//! Scene, trace and tuning files.

use std::fs;
use std::path::Path;

use magsnap_snap::{CanvasBounds, Element, Point, SnapTuning};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

/// One slide layout with the element being dragged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub canvas: CanvasBounds,
    pub dragged: Element,
    #[serde(default)]
    pub siblings: Vec<Element>,
    /// Pointer-derived origin to resolve; defaults to the dragged element's origin.
    #[serde(default)]
    pub raw: Option<Point>,
}

impl Scene {
    /// Raw origin to resolve when no override is given.
    #[must_use]
    pub fn raw_or_origin(&self) -> Point {
        self.raw.unwrap_or_else(|| self.dragged.rect.origin())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_scene(path: &Path) -> Result<Scene> {
    let scene: Scene = read_json(path)?;
    if !scene.canvas.is_valid() || !scene.dragged.rect.is_valid() {
        tracing::warn!(
            path = %path.display(),
            "scene has a degenerate canvas or dragged element; snapping will be disabled"
        );
    }
    tracing::debug!(
        path = %path.display(),
        siblings = scene.siblings.len(),
        "scene loaded"
    );
    Ok(scene)
}

/// Pointer samples of one drag gesture; the first sample is the press point.
pub fn load_trace(path: &Path) -> Result<Vec<Point>> {
    let samples: Vec<Point> = read_json(path)?;
    if samples.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "trace {} contains no pointer samples",
            path.display()
        )));
    }
    Ok(samples)
}

/// Load and validate tuning, or fall back to the defaults.
pub fn load_tuning(path: Option<&Path>) -> Result<SnapTuning> {
    let Some(path) = path else {
        return Ok(SnapTuning::default());
    };
    let tuning: SnapTuning = read_json(path)?;
    tuning.validate().map_err(|source| CliError::InvalidTuning {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(tuning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn scene_defaults_canvas_and_siblings() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("scene.json");
        fs::write(
            &path,
            r#"{"dragged": {"id": 1, "rect": {"x": 5.0, "y": 6.0, "width": 20.0, "height": 10.0}}}"#,
        )
        .expect("write scene");
        let scene = load_scene(&path).expect("scene");
        assert_eq!(scene.canvas, CanvasBounds::new(1920.0, 1080.0));
        assert!(scene.siblings.is_empty());
        assert_eq!(scene.raw_or_origin(), Point::new(5.0, 6.0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().expect("tempdir");
        let err = load_scene(&dir.path().join("absent.json")).expect_err("missing");
        assert!(matches!(err, CliError::Io { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn invalid_tuning_is_rejected() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("tuning.json");
        fs::write(&path, r#"{"snap_zone_radius": -1.0}"#).expect("write tuning");
        let err = load_tuning(Some(&path)).expect_err("invalid");
        assert!(matches!(err, CliError::InvalidTuning { .. }));
        assert!(err.to_string().contains("snap_zone_radius"));
    }

    #[test]
    fn empty_trace_is_invalid_input() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("trace.json");
        fs::write(&path, "[]").expect("write trace");
        let err = load_trace(&path).expect_err("empty");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("scene.json");
        fs::write(&path, "{ not json").expect("write");
        assert!(matches!(load_scene(&path), Err(CliError::Json { .. })));
    }
}
