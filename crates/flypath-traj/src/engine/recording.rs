use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use glam::DVec3;
use serde::Serialize;

use super::RenderEngine;
use crate::camera::{CameraPose, PinholeIntrinsics};

/// Error types for the recording engine.
#[derive(Debug, thiserror::Error)]
pub enum RecordingError {
    /// Error writing a camera file
    #[error("error writing file")]
    IoError(#[from] std::io::Error),

    /// Error serializing a camera
    #[error("Failed to serialize camera. {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failure requested through [`RecordingEngine::fail_render_at`]
    #[error("Render of camera {0} failed")]
    RenderFailed(u64),
}

/// A camera created by the [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedCamera {
    /// Sequential camera id.
    pub id: u64,
    /// Intrinsics the camera was built with.
    pub intrinsics: PinholeIntrinsics,
    /// Camera center.
    pub center: DVec3,
    /// Look at point.
    pub look_at: DVec3,
}

impl RecordedCamera {
    /// The camera pose.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            center: self.center,
            look_at: self.look_at,
        }
    }
}

/// Placeholder for a rendered image, carrying only its size.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedImage {
    /// Id of the camera the image was rendered from.
    pub camera_id: u64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// A [`RenderEngine`] that renders nothing and remembers everything.
///
/// Every created camera is kept in order of creation, saved file paths are
/// collected, and live cameras and images are counted so that callers can verify
/// that every frame released what it created. Camera files are written as JSON
/// when [`RecordingEngine::with_camera_files`] is enabled; image files are never
/// written.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    cameras: Vec<RecordedCamera>,
    saved_images: Vec<PathBuf>,
    saved_cameras: Vec<PathBuf>,
    live_cameras: usize,
    live_images: usize,
    write_camera_files: bool,
    fail_render_at: Option<u64>,
}

impl RecordingEngine {
    /// Create an engine that keeps everything in memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write camera files to disk when saving cameras.
    pub fn with_camera_files(mut self, enabled: bool) -> Self {
        self.write_camera_files = enabled;
        self
    }

    /// Make rendering fail for the camera with the given id.
    pub fn fail_render_at(mut self, camera_id: u64) -> Self {
        self.fail_render_at = Some(camera_id);
        self
    }

    /// All cameras created so far, in creation order.
    pub fn cameras(&self) -> &[RecordedCamera] {
        &self.cameras
    }

    /// Poses of all cameras created so far.
    pub fn poses(&self) -> Vec<CameraPose> {
        self.cameras.iter().map(RecordedCamera::pose).collect()
    }

    /// Paths passed to [`RenderEngine::save_image`].
    pub fn saved_images(&self) -> &[PathBuf] {
        &self.saved_images
    }

    /// Paths passed to [`RenderEngine::save_camera`].
    pub fn saved_cameras(&self) -> &[PathBuf] {
        &self.saved_cameras
    }

    /// Number of cameras and images created but not yet released.
    pub fn live_objects(&self) -> (usize, usize) {
        (self.live_cameras, self.live_images)
    }
}

impl RenderEngine for RecordingEngine {
    type Camera = RecordedCamera;
    type Image = RecordedImage;
    type Error = RecordingError;

    fn create_camera(
        &mut self,
        intrinsics: &PinholeIntrinsics,
        center: DVec3,
        look_at: DVec3,
    ) -> Result<RecordedCamera, RecordingError> {
        let camera = RecordedCamera {
            id: self.cameras.len() as u64,
            intrinsics: *intrinsics,
            center,
            look_at,
        };
        self.cameras.push(camera.clone());
        self.live_cameras += 1;
        Ok(camera)
    }

    fn render(
        &mut self,
        camera: &RecordedCamera,
        width: u32,
        height: u32,
    ) -> Result<RecordedImage, RecordingError> {
        if self.fail_render_at == Some(camera.id) {
            return Err(RecordingError::RenderFailed(camera.id));
        }
        self.live_images += 1;
        Ok(RecordedImage {
            camera_id: camera.id,
            width,
            height,
        })
    }

    fn save_image(&mut self, image: &RecordedImage, path: &Path) -> Result<(), RecordingError> {
        log::trace!("image of camera {} -> {}", image.camera_id, path.display());
        self.saved_images.push(path.to_path_buf());
        Ok(())
    }

    fn save_camera(&mut self, camera: &RecordedCamera, path: &Path) -> Result<(), RecordingError> {
        if self.write_camera_files {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, camera)?;
            writer.flush()?;
        }
        self.saved_cameras.push(path.to_path_buf());
        Ok(())
    }

    fn release_camera(&mut self, _camera: RecordedCamera) {
        self.live_cameras = self.live_cameras.saturating_sub(1);
    }

    fn release_image(&mut self, _image: RecordedImage) {
        self.live_images = self.live_images.saturating_sub(1);
    }
}
