use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Monotonic frame index used to name output files.
///
/// The counter is owned by the caller and threaded through every trajectory so
/// that consecutive trajectories continue the same numbering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FrameCounter(u64);

impl FrameCounter {
    /// Create a counter starting at `start`.
    pub fn new(start: u64) -> Self {
        Self(start)
    }

    /// The index the next frame will get.
    #[inline]
    pub fn current(&self) -> u64 {
        self.0
    }

    /// Return the current index and advance the counter.
    pub fn advance(&mut self) -> u64 {
        let idx = self.0;
        self.0 += 1;
        idx
    }
}

/// File naming for rendered frames.
///
/// Images are written as `<image_dir>/<image_prefix><index>.<image_ext>` with the index
/// zero padded to `pad_width` digits; cameras likewise when a camera directory is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameNaming {
    /// Directory receiving the rendered images.
    pub image_dir: PathBuf,
    /// Directory receiving the camera files. `None` skips saving cameras.
    pub camera_dir: Option<PathBuf>,
    /// Image file name prefix.
    pub image_prefix: String,
    /// Camera file name prefix.
    pub camera_prefix: String,
    /// Minimum number of digits of the frame index.
    pub pad_width: usize,
    /// Image file extension, without the dot.
    pub image_ext: String,
    /// Camera file extension, without the dot.
    pub camera_ext: String,
}

impl FrameNaming {
    /// Six digit naming with images and cameras in separate directories, as used for
    /// spirals, drifts and path fly-throughs.
    pub fn six_digit(image_dir: impl Into<PathBuf>, camera_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            camera_dir: Some(camera_dir.into()),
            image_prefix: "exp_".to_string(),
            camera_prefix: "cam_".to_string(),
            pad_width: 6,
            image_ext: "png".to_string(),
            camera_ext: "txt".to_string(),
        }
    }

    /// Three digit naming without camera files, as used for re-gaze sequences.
    pub fn three_digit(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            camera_dir: None,
            pad_width: 3,
            ..Self::six_digit(image_dir, PathBuf::new())
        }
    }

    /// Set the camera directory.
    pub fn with_camera_dir(mut self, camera_dir: impl Into<PathBuf>) -> Self {
        self.camera_dir = Some(camera_dir.into());
        self
    }

    /// Path of the image of frame `idx`.
    pub fn image_path(&self, idx: u64) -> PathBuf {
        self.image_dir
            .join(self.file_name(&self.image_prefix, idx, &self.image_ext))
    }

    /// Path of the camera file of frame `idx`, if cameras are saved.
    pub fn camera_path(&self, idx: u64) -> Option<PathBuf> {
        self.camera_dir
            .as_deref()
            .map(|dir: &Path| dir.join(self.file_name(&self.camera_prefix, idx, &self.camera_ext)))
    }

    fn file_name(&self, prefix: &str, idx: u64, ext: &str) -> String {
        format!("{}{:0width$}.{}", prefix, idx, ext, width = self.pad_width)
    }
}
