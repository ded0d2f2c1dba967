use glam::DVec3;

use crate::PathError;

/// Scale a direction, or a batch of directions, to unit length.
///
/// Batches are normalized row by row, each vector divided by its own magnitude.
pub trait Normalize {
    /// The normalized output type.
    type Output;

    /// Return the unit length version of the input.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::DegenerateVector`] if any vector has zero (or non finite)
    /// magnitude.
    fn normalized(&self) -> Result<Self::Output, PathError>;
}

impl Normalize for DVec3 {
    type Output = DVec3;

    fn normalized(&self) -> Result<DVec3, PathError> {
        normalize(*self)
    }
}

impl Normalize for [DVec3] {
    type Output = Vec<DVec3>;

    fn normalized(&self) -> Result<Vec<DVec3>, PathError> {
        self.iter().map(|v| normalize(*v)).collect()
    }
}

/// Normalize a single vector.
///
/// # Arguments
///
/// * `v` - The vector to normalize.
///
/// # Returns
///
/// The vector divided by its magnitude. Any non zero finite vector is accepted,
/// however small.
///
/// # Errors
///
/// Returns [`PathError::DegenerateVector`] for the zero vector or a non finite one.
///
/// Example:
/// ```
/// use flypath_geom::vector::normalize;
/// use glam::DVec3;
///
/// let v = normalize(DVec3::new(3.0, 0.0, 4.0)).unwrap();
/// assert_eq!(v, DVec3::new(0.6, 0.0, 0.8));
/// ```
pub fn normalize(v: DVec3) -> Result<DVec3, PathError> {
    // rescale first so the squared length neither underflows nor overflows
    let scale = v.abs().max_element();
    if scale == 0.0 || !v.is_finite() {
        return Err(PathError::DegenerateVector);
    }
    let v = v / scale;
    Ok(v / v.length())
}

/// Standard right handed cross product `a x b`.
#[inline]
pub fn cross(a: DVec3, b: DVec3) -> DVec3 {
    a.cross(b)
}

/// Arithmetic mean of a non empty window of vectors.
pub(crate) fn mean(window: &[DVec3]) -> DVec3 {
    window.iter().copied().sum::<DVec3>() / window.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_unit_length() -> Result<(), PathError> {
        let inputs = [
            DVec3::new(1.0, 2.0, 3.0),
            DVec3::new(-0.001, 0.0, 0.002),
            DVec3::new(1e6, -2e6, 5.0),
            DVec3::new(1e-13, 0.0, 0.0),
            DVec3::new(0.0, -3e-200, 4e-200),
        ];
        for v in inputs {
            let n = normalize(v)?;
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
            // parallel to the input
            assert_relative_eq!(cross(n, v).length(), 0.0, epsilon = 1e-6);
            assert!(n.dot(v) > 0.0);
        }
        Ok(())
    }

    #[test]
    fn test_normalize_zero_vector() {
        assert!(matches!(
            normalize(DVec3::ZERO),
            Err(PathError::DegenerateVector)
        ));
        assert!(matches!(
            DVec3::new(f64::NAN, 0.0, 0.0).normalized(),
            Err(PathError::DegenerateVector)
        ));
    }

    #[test]
    fn test_normalize_batch_per_row() -> Result<(), PathError> {
        let batch = vec![DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 0.0, -10.0)];
        let normalized = batch.normalized()?;
        assert_eq!(normalized, vec![DVec3::X, DVec3::NEG_Z]);

        let bad = vec![DVec3::X, DVec3::ZERO];
        assert!(bad.normalized().is_err());
        Ok(())
    }

    #[test]
    fn test_cross() {
        assert_eq!(cross(DVec3::X, DVec3::Z), DVec3::NEG_Y);
        assert_eq!(cross(DVec3::Y, DVec3::Z), DVec3::X);
    }

    #[test]
    fn test_mean() {
        let window = [DVec3::X, DVec3::Y, DVec3::new(1.0, 1.0, 3.0)];
        assert_eq!(mean(&window), DVec3::new(2.0 / 3.0, 2.0 / 3.0, 1.0));
    }
}
