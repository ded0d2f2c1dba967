use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::{
    normals::{path_frames, smooth_directions, PathFrames},
    vector::normalize,
    PathError,
};

/// Gain applied to the horizontal curvature in [`LookDirectionMode::CurvatureWeighted`].
pub const DEFAULT_CURVATURE_GAIN: f64 = 1e5;

/// How the unsmoothed look direction of each sample is chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookDirectionMode {
    /// Look straight sideways along the horizontal path normal.
    #[default]
    SidewaysNormal,
    /// Blend tangent and normal as `tangent + (1 + gain * xy_curvature) * normal`, which
    /// pushes the gaze further sideways in sharp turns.
    CurvatureWeighted {
        /// curvature amplification factor
        gain: f64,
    },
}

/// Parameters for [`path_look_points`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookPointParams {
    /// Camera look angle off nadir, in degrees.
    pub incline_deg: f64,
    /// Half width of the moving average applied to the look directions.
    pub smooth: usize,
    /// Look direction model.
    pub mode: LookDirectionMode,
}

impl Default for LookPointParams {
    fn default() -> Self {
        Self {
            incline_deg: 45.0,
            smooth: 20,
            mode: LookDirectionMode::SidewaysNormal,
        }
    }
}

/// Compute the unsmoothed look direction of every sample.
pub fn look_directions(
    frames: &PathFrames,
    mode: LookDirectionMode,
) -> Result<Vec<DVec3>, PathError> {
    match mode {
        LookDirectionMode::SidewaysNormal => Ok(frames.normals.clone()),
        LookDirectionMode::CurvatureWeighted { gain } => frames
            .tangents
            .iter()
            .zip(&frames.normals)
            .zip(frames.xy_curvature())
            .map(|((t, n), k)| normalize(*t + (1.0 + gain * k) * *n))
            .collect(),
    }
}

/// Compute the ground point an oblique camera above each path point should look at.
///
/// The path z coordinate is the altitude above the ground plane `z = 0`. Each look
/// point is offset from the point straight below the camera by `z * tan(incline)`
/// along the smoothed look direction.
///
/// # Arguments
///
/// * `points` - The camera path, at least three points.
/// * `params` - Viewing incline, smoothing half width and look direction model.
///
/// # Returns
///
/// One look point per input point, all with `z = 0`.
///
/// Example:
/// ```
/// use flypath_geom::look::{path_look_points, LookPointParams};
/// use glam::DVec3;
///
/// let points = [
///     DVec3::new(0.0, 0.0, 10.0),
///     DVec3::new(1.0, 0.0, 10.0),
///     DVec3::new(2.0, 0.0, 10.0),
/// ];
/// let params = LookPointParams { incline_deg: 45.0, smooth: 0, ..Default::default() };
/// let look = path_look_points(&points, &params).unwrap();
/// assert!((look[1] - DVec3::new(1.0, -10.0, 0.0)).length() < 1e-9);
/// ```
pub fn path_look_points(
    points: &[DVec3],
    params: &LookPointParams,
) -> Result<Vec<DVec3>, PathError> {
    let frames = path_frames(points)?;
    let directions = look_directions(&frames, params.mode)?;
    let directions = smooth_directions(&directions, params.smooth)?;

    let tan_incline = params.incline_deg.to_radians().tan();

    Ok(points
        .iter()
        .zip(&directions)
        .map(|(p, dir)| {
            let ground_distance = p.z * tan_incline;
            DVec3::new(p.x, p.y, 0.0) + ground_distance * *dir
        })
        .collect())
}
