use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::{camera::CameraPolar, TrajectoryError};

/// Orbit around a fixed look point.
///
/// Frame `k` places the camera at `start + k * delta` in spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spiral {
    /// Center of the spiral.
    pub look_at: DVec3,
    /// Camera position of the first frame.
    pub start: CameraPolar,
    /// Per frame increment of azimuth, inclination and radius.
    pub delta: CameraPolar,
    /// Number of frames.
    pub num_images: usize,
}

impl Spiral {
    /// Camera positions of every frame, in order.
    pub fn states(&self) -> impl Iterator<Item = CameraPolar> {
        let delta = self.delta;
        std::iter::successors(Some(self.start), move |polar| Some(*polar + delta))
            .take(self.num_images)
    }

    /// State after the last frame, the start of a chained spiral.
    ///
    /// Example:
    /// ```
    /// use flypath_traj::{camera::CameraPolar, trajectory::Spiral};
    /// use glam::DVec3;
    ///
    /// let spiral = Spiral {
    ///     look_at: DVec3::ZERO,
    ///     start: CameraPolar::new(0.0, 0.0, 10.0),
    ///     delta: CameraPolar::new(10.0, 0.0, 0.0),
    ///     num_images: 3,
    /// };
    /// assert_eq!(spiral.final_state(), CameraPolar::new(30.0, 0.0, 10.0));
    /// ```
    pub fn final_state(&self) -> CameraPolar {
        (0..self.num_images).fold(self.start, |polar, _| polar + self.delta)
    }
}

/// Linear motion of the look point between two targets over `num_images` steps.
///
/// Frame `k` looks at `look0 + k * (look1 - look0) / num_images`, so the last frame
/// stops one step short of `look1` and a chained sequence starting at `look1` does not
/// repeat a frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LookTransitionFields")]
pub struct LookTransition {
    look0: DVec3,
    look1: DVec3,
    polar: CameraPolar,
    num_images: usize,
}

#[derive(Deserialize)]
struct LookTransitionFields {
    look0: DVec3,
    look1: DVec3,
    polar: CameraPolar,
    num_images: usize,
}

impl TryFrom<LookTransitionFields> for LookTransition {
    type Error = TrajectoryError;

    fn try_from(fields: LookTransitionFields) -> Result<Self, Self::Error> {
        Self::new(fields.look0, fields.look1, fields.polar, fields.num_images)
    }
}

impl LookTransition {
    /// Create a transition of at least one frame.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::InvalidFrameCount`] if `num_images` is zero.
    pub fn new(
        look0: DVec3,
        look1: DVec3,
        polar: CameraPolar,
        num_images: usize,
    ) -> Result<Self, TrajectoryError> {
        if num_images == 0 {
            return Err(TrajectoryError::InvalidFrameCount(num_images));
        }
        Ok(Self {
            look0,
            look1,
            polar,
            num_images,
        })
    }

    /// First look point.
    pub fn look0(&self) -> DVec3 {
        self.look0
    }

    /// Target look point.
    pub fn look1(&self) -> DVec3 {
        self.look1
    }

    /// Camera placement relative to the look point.
    pub fn polar(&self) -> CameraPolar {
        self.polar
    }

    /// Number of frames, never zero.
    pub fn num_images(&self) -> usize {
        self.num_images
    }

    /// Per frame translation of the look point.
    pub fn step(&self) -> DVec3 {
        (self.look1 - self.look0) / self.num_images as f64
    }

    /// Look points of every frame, in order.
    pub fn look_points(&self) -> impl Iterator<Item = DVec3> {
        let (look0, step) = (self.look0, self.step());
        (0..self.num_images).map(move |k| look0 + step * k as f64)
    }
}

/// Rigid translation of the whole camera from one look point towards another.
///
/// The camera center is derived once from `polar` around `look0` and then moves by
/// the same per frame step as the look point.
pub type Drift = LookTransition;

/// Smooth change of gaze: the camera keeps its spherical placement around a look
/// point that moves from `look0` towards `look1`, and the center is derived anew
/// from `polar` for every frame.
pub type Regaze = LookTransition;
