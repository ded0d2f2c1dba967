use glam::DVec3;

use flypath_geom::look::{path_look_points, LookPointParams};

use crate::{
    camera::CameraPolar,
    engine::{RenderConfig, RenderEngine},
    naming::{FrameCounter, FrameNaming},
    trajectory::{Drift, Regaze, Spiral},
    TrajectoryError,
};

/// Renders camera trajectories one frame at a time through a [`RenderEngine`].
///
/// Each frame creates a camera, renders it, saves the image (and the camera when the
/// naming has a camera directory) and releases everything it created before the next
/// frame starts. The frame counter is supplied by the caller and advanced once per
/// rendered frame.
pub struct TrajectoryRenderer<'a, E: RenderEngine> {
    engine: &'a mut E,
    config: RenderConfig,
    naming: FrameNaming,
}

impl<'a, E: RenderEngine> TrajectoryRenderer<'a, E> {
    /// Create a renderer drawing through `engine`.
    pub fn new(engine: &'a mut E, config: RenderConfig, naming: FrameNaming) -> Self {
        Self {
            engine,
            config,
            naming,
        }
    }

    /// Replace the output naming, e.g. to switch between six and three digit indices.
    pub fn set_naming(&mut self, naming: FrameNaming) {
        self.naming = naming;
    }

    /// Render a spiral around its look point.
    ///
    /// # Returns
    ///
    /// The spherical camera state after the last frame, to chain further motion.
    pub fn spiral(
        &mut self,
        spiral: &Spiral,
        frames: &mut FrameCounter,
    ) -> Result<CameraPolar, TrajectoryError> {
        log::info!(
            "rendering spiral of {} frames around {}",
            spiral.num_images,
            spiral.look_at
        );

        for (i, polar) in spiral.states().enumerate() {
            log::debug!("spiral frame {} of {}: {:?}", i + 1, spiral.num_images, polar);
            let center = self
                .engine
                .camera_center(&polar, spiral.look_at)
                .map_err(TrajectoryError::engine)?;
            self.render_frame(center, spiral.look_at, frames)?;
        }

        Ok(spiral.final_state())
    }

    /// Translate the whole camera while its look point drifts towards `drift.look1`.
    ///
    /// # Returns
    ///
    /// The camera center after the last step, to chain further motion.
    pub fn drift(
        &mut self,
        drift: &Drift,
        frames: &mut FrameCounter,
    ) -> Result<DVec3, TrajectoryError> {
        log::info!(
            "drifting from {} to {} in {} frames",
            drift.look0(),
            drift.look1(),
            drift.num_images()
        );

        let center0 = self
            .engine
            .camera_center(&drift.polar(), drift.look0())
            .map_err(TrajectoryError::engine)?;
        let step = drift.step();

        for (k, look_at) in drift.look_points().enumerate() {
            let center = center0 + step * k as f64;
            self.render_frame(center, look_at, frames)?;
        }

        Ok(center0 + step * drift.num_images() as f64)
    }

    /// Keep the camera placement fixed relative to a look point moving towards
    /// `regaze.look1`.
    pub fn regaze(
        &mut self,
        regaze: &Regaze,
        frames: &mut FrameCounter,
    ) -> Result<(), TrajectoryError> {
        log::info!("gazing from {} to {}", regaze.look0(), regaze.look1());

        for look_at in regaze.look_points() {
            let center = self
                .engine
                .camera_center(&regaze.polar(), look_at)
                .map_err(TrajectoryError::engine)?;
            self.render_frame(center, look_at, frames)?;
        }

        Ok(())
    }

    /// Fly along a path, looking at the ground point computed for each sample.
    ///
    /// # Arguments
    ///
    /// * `points` - Camera centers, at least three.
    /// * `params` - Look point parameters, see [`path_look_points`].
    /// * `frames` - The frame counter.
    ///
    /// # Returns
    ///
    /// The look points used for each frame.
    pub fn fly_path(
        &mut self,
        points: &[DVec3],
        params: &LookPointParams,
        frames: &mut FrameCounter,
    ) -> Result<Vec<DVec3>, TrajectoryError> {
        let look_points = path_look_points(points, params)?;
        self.render_poses(points, &look_points, frames)?;
        Ok(look_points)
    }

    /// Render one frame per `(center, look_at)` pair.
    pub fn render_poses(
        &mut self,
        centers: &[DVec3],
        look_points: &[DVec3],
        frames: &mut FrameCounter,
    ) -> Result<(), TrajectoryError> {
        if centers.len() != look_points.len() {
            return Err(TrajectoryError::LengthMismatch {
                centers: centers.len(),
                look_points: look_points.len(),
            });
        }

        log::info!("rendering {} path frames", centers.len());
        for (center, look_at) in centers.iter().zip(look_points) {
            self.render_frame(*center, *look_at, frames)?;
        }

        Ok(())
    }

    /// Render and save a single frame, then advance the frame counter.
    ///
    /// The camera and image created here are released before returning, also when
    /// rendering or saving failed. The counter only advances on success.
    pub fn render_frame(
        &mut self,
        center: DVec3,
        look_at: DVec3,
        frames: &mut FrameCounter,
    ) -> Result<(), TrajectoryError> {
        let idx = frames.current();
        log::debug!("frame {}: center {} look at {}", idx, center, look_at);

        let camera = self
            .engine
            .create_camera(&self.config.intrinsics, center, look_at)
            .map_err(TrajectoryError::engine)?;

        let result = self.render_save(&camera, idx);
        self.engine.release_camera(camera);
        result?;

        frames.advance();
        Ok(())
    }

    fn render_save(&mut self, camera: &E::Camera, idx: u64) -> Result<(), TrajectoryError> {
        let image = self
            .engine
            .render(camera, self.config.width, self.config.height)
            .map_err(TrajectoryError::engine)?;

        let saved = self
            .engine
            .save_image(&image, &self.naming.image_path(idx))
            .map_err(TrajectoryError::engine);
        self.engine.release_image(image);
        saved?;

        if let Some(path) = self.naming.camera_path(idx) {
            self.engine
                .save_camera(camera, &path)
                .map_err(TrajectoryError::engine)?;
        }

        Ok(())
    }
}
