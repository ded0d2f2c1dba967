use glam::DVec3;

use crate::{
    vector::{cross, mean, normalize},
    PathError,
};

/// Minimum number of points for central difference estimates.
pub const MIN_PATH_POINTS: usize = 3;

/// Per point differential quantities of a discrete path.
///
/// All vectors are aligned by index with the input path. Interior samples use
/// central differences; the first and last sample copy their interior neighbour.
#[derive(Debug, Clone)]
pub struct PathFrames {
    /// Unit tangent, `normalize(p[i + 1] - p[i - 1])`.
    pub tangents: Vec<DVec3>,
    /// Unit horizontal side vector, `normalize(tangent x up)`.
    pub normals: Vec<DVec3>,
    /// Discrete curvature, `(p[i + 1] - 2 p[i] + p[i - 1]) / 2`.
    pub curvature: Vec<DVec3>,
}

impl PathFrames {
    /// Get the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.tangents.len()
    }

    /// Check if there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tangents.is_empty()
    }

    /// Squared magnitude of the horizontal (x, y) part of the curvature per sample.
    pub fn xy_curvature(&self) -> Vec<f64> {
        self.curvature
            .iter()
            .map(|c| c.x * c.x + c.y * c.y)
            .collect()
    }
}

/// Compute tangents, sideways normals and curvature for every point of a path.
///
/// # Arguments
///
/// * `points` - The path, at least [`MIN_PATH_POINTS`] long.
///
/// # Errors
///
/// * [`PathError::InsufficientPoints`] for paths shorter than three points.
/// * [`PathError::DegenerateVector`] when the two neighbours of a point coincide, or
///   when the path runs vertically so that no horizontal side vector exists.
pub fn path_frames(points: &[DVec3]) -> Result<PathFrames, PathError> {
    check_path_len(points)?;

    let n = points.len();
    let mut tangents = vec![DVec3::ZERO; n];
    let mut normals = vec![DVec3::ZERO; n];
    let mut curvature = vec![DVec3::ZERO; n];

    for (i, w) in points.windows(3).enumerate() {
        let (prev, curr, next) = (w[0], w[1], w[2]);
        let tangent = normalize(next - prev)?;
        tangents[i + 1] = tangent;
        normals[i + 1] = normalize(cross(tangent, DVec3::Z))?;
        curvature[i + 1] = (next - 2.0 * curr + prev) / 2.0;
    }

    // endpoints borrow the nearest interior estimate
    for v in [&mut tangents, &mut normals, &mut curvature] {
        v[0] = v[1];
        v[n - 1] = v[n - 2];
    }

    Ok(PathFrames {
        tangents,
        normals,
        curvature,
    })
}

/// Compute the horizontal normal to the path at each point.
///
/// The normal is orthogonal to both the local tangent and the z axis, and is then
/// smoothed with a centered moving average, see [`smooth_directions`].
///
/// # Arguments
///
/// * `points` - The path, at least [`MIN_PATH_POINTS`] long.
/// * `smooth` - Half width of the moving average window.
///
/// # Returns
///
/// One unit vector per point.
///
/// Example:
/// ```
/// use flypath_geom::normals::path_normals;
/// use glam::DVec3;
///
/// let points = [DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)];
/// let normals = path_normals(&points, 0).unwrap();
/// assert_eq!(normals, vec![DVec3::NEG_Y; 3]);
/// ```
pub fn path_normals(points: &[DVec3], smooth: usize) -> Result<Vec<DVec3>, PathError> {
    let frames = path_frames(points)?;
    smooth_directions(&frames.normals, smooth)
}

/// Centered moving average of unit directions.
///
/// Every index `i` with `smooth <= i <= len - 1 - smooth` is replaced by the normalized
/// mean of the `2 * smooth + 1` input directions around it. Indices closer than `smooth`
/// to either end keep their input value. Averages always read the input values, never
/// already smoothed ones. A window wider than the input leaves every value unchanged.
///
/// # Errors
///
/// Returns [`PathError::DegenerateVector`] if a window averages to the zero vector.
pub fn smooth_directions(directions: &[DVec3], smooth: usize) -> Result<Vec<DVec3>, PathError> {
    let mut smoothed = directions.to_vec();
    if smooth > directions.len().saturating_sub(1) / 2 {
        return Ok(smoothed);
    }
    let window = 2 * smooth + 1;

    for (offset, values) in directions.windows(window).enumerate() {
        smoothed[offset + smooth] = normalize(mean(values))?;
    }

    Ok(smoothed)
}

pub(crate) fn check_path_len(points: &[DVec3]) -> Result<(), PathError> {
    if points.len() < MIN_PATH_POINTS {
        return Err(PathError::InsufficientPoints {
            required: MIN_PATH_POINTS,
            actual: points.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn straight_x(n: usize) -> Vec<DVec3> {
        (0..n).map(|i| DVec3::new(i as f64, 0.0, 0.0)).collect()
    }

    /// Quarter circle of radius 10 at altitude 50, sampled every 5 degrees.
    fn arc() -> Vec<DVec3> {
        (0..=18)
            .map(|i| {
                let t = (i as f64 * 5.0).to_radians();
                DVec3::new(10.0 * t.cos(), 10.0 * t.sin(), 50.0)
            })
            .collect()
    }

    #[test]
    fn test_straight_line_normals() -> Result<(), PathError> {
        let normals = path_normals(&straight_x(6), 0)?;
        assert_eq!(normals.len(), 6);
        for n in &normals {
            assert_relative_eq!(n.x, 0.0);
            assert_relative_eq!(n.y, -1.0);
            assert_relative_eq!(n.z, 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_endpoints_copy_interior() -> Result<(), PathError> {
        let frames = path_frames(&arc())?;
        let n = frames.len();
        assert_eq!(frames.normals[0], frames.normals[1]);
        assert_eq!(frames.normals[n - 1], frames.normals[n - 2]);
        assert_eq!(frames.tangents[0], frames.tangents[1]);
        assert_eq!(frames.tangents[n - 1], frames.tangents[n - 2]);
        assert_eq!(frames.curvature[0], frames.curvature[1]);
        assert_eq!(frames.curvature[n - 1], frames.curvature[n - 2]);
        Ok(())
    }

    #[test]
    fn test_frames_are_horizontal_and_orthogonal() -> Result<(), PathError> {
        let frames = path_frames(&arc())?;
        for (t, n) in frames.tangents.iter().zip(&frames.normals) {
            assert_relative_eq!(t.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(n.z, 0.0);
            assert_relative_eq!(t.dot(*n), 0.0, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_curvature_points_inward() -> Result<(), PathError> {
        let points = arc();
        let frames = path_frames(&points)?;
        let xy = frames.xy_curvature();
        for i in 1..points.len() - 1 {
            // second difference points to the arc center
            let radial = DVec3::new(points[i].x, points[i].y, 0.0);
            assert!(frames.curvature[i].dot(radial) < 0.0);
            assert!(xy[i] > 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_smoothing_keeps_boundary_band() -> Result<(), PathError> {
        let points = arc();
        let raw = path_frames(&points)?.normals;
        let s = 3;
        let smoothed = path_normals(&points, s)?;
        let n = points.len();
        for i in (0..s).chain(n - s..n) {
            assert_eq!(smoothed[i], raw[i]);
        }
        for v in &smoothed {
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_smoothing_reads_unsmoothed_values() -> Result<(), PathError> {
        let dirs = vec![DVec3::X, DVec3::X, DVec3::Y, DVec3::Y, DVec3::Y];
        let smoothed = smooth_directions(&dirs, 1)?;
        let expected_1 = normalize(DVec3::new(2.0, 1.0, 0.0))?;
        let expected_2 = normalize(DVec3::new(1.0, 2.0, 0.0))?;
        assert_relative_eq!(smoothed[1].x, expected_1.x, epsilon = 1e-12);
        assert_relative_eq!(smoothed[1].y, expected_1.y, epsilon = 1e-12);
        // a cascading update would have mixed smoothed[1] into this window
        assert_relative_eq!(smoothed[2].x, expected_2.x, epsilon = 1e-12);
        assert_relative_eq!(smoothed[2].y, expected_2.y, epsilon = 1e-12);
        assert_eq!(smoothed[3], DVec3::Y);
        Ok(())
    }

    #[test]
    fn test_smoothing_constant_signal() -> Result<(), PathError> {
        let points = straight_x(12);
        let raw = path_normals(&points, 0)?;
        let smoothed = path_normals(&points, 4)?;
        for (a, b) in raw.iter().zip(&smoothed) {
            assert_relative_eq!(a.x, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.y, b.y, epsilon = 1e-12);
            assert_relative_eq!(a.z, b.z, epsilon = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn test_smoothing_window_too_wide() -> Result<(), PathError> {
        let points = arc();
        let raw = path_frames(&points)?.normals;
        assert_eq!(path_normals(&points, points.len())?, raw);
        assert_eq!(path_normals(&points, usize::MAX / 2 + 1)?, raw);
        assert_eq!(path_normals(&points, usize::MAX)?, raw);
        Ok(())
    }

    #[test]
    fn test_smoothing_window_averages_to_zero() {
        // three directions 120 degrees apart cancel out
        let h = 3f64.sqrt() / 2.0;
        let directions = [
            DVec3::X,
            DVec3::new(-0.5, h, 0.0),
            DVec3::new(-0.5, -h, 0.0),
        ];
        assert!(matches!(
            smooth_directions(&directions, 1),
            Err(PathError::DegenerateVector)
        ));
    }

    #[test]
    fn test_insufficient_points() {
        let result = path_normals(&straight_x(2), 0);
        assert!(matches!(
            result,
            Err(PathError::InsufficientPoints {
                required: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_coincident_neighbours() {
        let points = [DVec3::ZERO, DVec3::X, DVec3::ZERO];
        assert!(matches!(
            path_frames(&points),
            Err(PathError::DegenerateVector)
        ));
    }

    #[test]
    fn test_vertical_path() {
        let points = [DVec3::ZERO, DVec3::Z, DVec3::new(0.0, 0.0, 2.0)];
        assert!(matches!(
            path_frames(&points),
            Err(PathError::DegenerateVector)
        ));
    }
}
