use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::camera::{CameraPolar, PinholeIntrinsics};

/// In-memory engine that records every camera it is asked to render.
pub mod recording;

/// The capabilities the trajectory code needs from a scene rendering engine.
///
/// Cameras and images are objects owned by the engine. Every object handed out by
/// [`RenderEngine::create_camera`] or [`RenderEngine::render`] is given back through the
/// matching release method once the frame is done, whether the frame succeeded or not.
pub trait RenderEngine {
    /// Engine side camera handle.
    type Camera;
    /// Engine side image handle.
    type Image;
    /// Error raised by the engine.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build a perspective camera at `center` looking at `look_at`.
    fn create_camera(
        &mut self,
        intrinsics: &PinholeIntrinsics,
        center: DVec3,
        look_at: DVec3,
    ) -> Result<Self::Camera, Self::Error>;

    /// Render the scene as seen by `camera`.
    fn render(
        &mut self,
        camera: &Self::Camera,
        width: u32,
        height: u32,
    ) -> Result<Self::Image, Self::Error>;

    /// Persist a rendered image.
    fn save_image(&mut self, image: &Self::Image, path: &Path) -> Result<(), Self::Error>;

    /// Persist a camera.
    fn save_camera(&mut self, camera: &Self::Camera, path: &Path) -> Result<(), Self::Error>;

    /// Give a camera back to the engine.
    fn release_camera(&mut self, camera: Self::Camera);

    /// Give an image back to the engine.
    fn release_image(&mut self, image: Self::Image);

    /// Convert spherical camera coordinates around `look_at` to a camera center.
    ///
    /// Defaults to [`CameraPolar::to_cartesian`].
    fn camera_center(&self, polar: &CameraPolar, look_at: DVec3) -> Result<DVec3, Self::Error> {
        Ok(polar.to_cartesian(look_at))
    }
}

/// Output image size and camera intrinsics shared by a whole trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Fixed intrinsics of every frame.
    pub intrinsics: PinholeIntrinsics,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            intrinsics: PinholeIntrinsics::centered(1280.0, 1280, 720),
            width: 1280,
            height: 720,
        }
    }
}
