use glam::DVec3;

use crate::PathError;

/// Insert evenly spaced linear interpolants between consecutive waypoints.
///
/// The output holds `len + (len - 1) * num_between` points. The waypoints keep
/// their values exactly and sit at indices `0, num_between + 1, 2 * (num_between + 1), ...`;
/// the `num_between` points between waypoints `k` and `k + 1` lie at fractions
/// `1 / (num_between + 1) .. num_between / (num_between + 1)` of the segment.
///
/// # Arguments
///
/// * `points` - The waypoints, at least one.
/// * `num_between` - Number of interpolants per segment. Zero returns the input unchanged.
///
/// Example:
/// ```
/// use flypath_geom::interpolate::interpolate_points;
/// use glam::DVec3;
///
/// let dense = interpolate_points(&[DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0)], 1).unwrap();
/// assert_eq!(dense, vec![DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0)]);
/// ```
pub fn interpolate_points(points: &[DVec3], num_between: usize) -> Result<Vec<DVec3>, PathError> {
    if points.is_empty() {
        return Err(PathError::InsufficientPoints {
            required: 1,
            actual: 0,
        });
    }

    if num_between == 0 {
        return Ok(points.to_vec());
    }

    let stride = num_between + 1;
    let mut dense = Vec::with_capacity(points.len() + (points.len() - 1) * num_between);

    for segment in points.windows(2) {
        let (p0, p1) = (segment[0], segment[1]);
        let step = (p1 - p0) / stride as f64;
        dense.push(p0);
        dense.extend((1..stride).map(|i| p0 + step * i as f64));
    }

    // the last waypoint closes the final segment
    dense.extend(points.last());

    Ok(dense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn waypoints() -> Vec<DVec3> {
        vec![
            DVec3::new(0.0, 0.0, 100.0),
            DVec3::new(30.0, 0.0, 100.0),
            DVec3::new(30.0, 45.0, 90.0),
            DVec3::new(-7.5, 45.0, 120.0),
        ]
    }

    #[test]
    fn test_interpolate_length_and_anchors() -> Result<(), PathError> {
        let points = waypoints();
        for k in 0..6 {
            let dense = interpolate_points(&points, k)?;
            assert_eq!(dense.len(), points.len() + (points.len() - 1) * k);
            for (j, p) in points.iter().enumerate() {
                assert_eq!(dense[j * (k + 1)], *p);
            }
        }
        Ok(())
    }

    #[test]
    fn test_interpolate_identity() -> Result<(), PathError> {
        let points = waypoints();
        assert_eq!(interpolate_points(&points, 0)?, points);
        Ok(())
    }

    #[test]
    fn test_interpolate_midpoint() -> Result<(), PathError> {
        let dense = interpolate_points(&[DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0)], 1)?;
        assert_eq!(dense[1], DVec3::new(1.0, 0.0, 0.0));
        Ok(())
    }

    #[test]
    fn test_interpolate_even_spacing() -> Result<(), PathError> {
        let dense = interpolate_points(&[DVec3::ZERO, DVec3::new(0.0, 8.0, -4.0)], 3)?;
        let expected = [0.0, 0.25, 0.5, 0.75, 1.0];
        for (p, t) in dense.iter().zip(expected) {
            assert_relative_eq!(p.y, 8.0 * t);
            assert_relative_eq!(p.z, -4.0 * t);
        }
        Ok(())
    }

    #[test]
    fn test_interpolate_single_point() -> Result<(), PathError> {
        let single = vec![DVec3::new(1.0, 2.0, 3.0)];
        assert_eq!(interpolate_points(&single, 4)?, single);
        Ok(())
    }

    #[test]
    fn test_interpolate_empty() {
        assert!(matches!(
            interpolate_points(&[], 2),
            Err(PathError::InsufficientPoints { required: 1, actual: 0 })
        ));
    }
}
