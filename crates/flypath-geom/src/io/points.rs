use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use glam::DVec3;

use crate::PathError;

/// Read a point file and return the points in file order.
///
/// The file starts with the number of points followed by one `x y z` triple per line:
///
/// ```text
/// 3
/// 0.0 0.0 100.0
/// 10.0 0.0 100.0
/// 20.0 5.0 100.0
/// ```
///
/// # Arguments
///
/// * `path` - The path to the point file.
///
/// # Returns
///
/// A vector with exactly the declared number of points.
pub fn read_points_txt(path: impl AsRef<Path>) -> Result<Vec<DVec3>, PathError> {
    // open the file and create a buffered reader
    let file = File::open(path)?;
    parse_points(BufReader::new(file))
}

/// Parse a point series from any buffered reader.
///
/// Blank lines are ignored. The declared count must match the number of
/// coordinate lines and must be at least one.
pub fn parse_points(reader: impl BufRead) -> Result<Vec<DVec3>, PathError> {
    let mut lines = reader
        .lines()
        .enumerate()
        .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()));

    let num_points = match lines.next() {
        Some((lineno, line)) => parse_count(&line?, lineno + 1)?,
        None => {
            return Err(PathError::MalformedInput(
                "missing point count".to_string(),
            ))
        }
    };

    let points = lines
        .map(|(lineno, line)| parse_point_line(&line?, lineno + 1))
        .collect::<Result<Vec<_>, _>>()?;

    if points.len() != num_points {
        return Err(PathError::MalformedInput(format!(
            "declared {} points but found {}",
            num_points,
            points.len()
        )));
    }

    Ok(points)
}

/// Write points in the same format accepted by [`read_points_txt`].
///
/// # Arguments
///
/// * `path` - The destination file, created or truncated.
/// * `points` - The points to write.
pub fn write_points_txt(path: impl AsRef<Path>, points: &[DVec3]) -> Result<(), PathError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", points.len())?;
    for p in points {
        writeln!(writer, "{} {} {}", p.x, p.y, p.z)?;
    }
    writer.flush()?;
    Ok(())
}

fn parse_count(line: &str, lineno: usize) -> Result<usize, PathError> {
    let count = line.trim().parse::<usize>().map_err(|e| {
        PathError::MalformedInput(format!("line {}: invalid point count {:?}: {}", lineno, line, e))
    })?;
    if count == 0 {
        return Err(PathError::MalformedInput(
            "point count must be at least 1".to_string(),
        ));
    }
    Ok(count)
}

/// Parse a `x y z` line.
fn parse_point_line(line: &str, lineno: usize) -> Result<DVec3, PathError> {
    let parts = line.split_whitespace().collect::<Vec<_>>();

    if parts.len() != 3 {
        return Err(PathError::MalformedInput(format!(
            "line {}: expected 3 coordinates, got {}",
            lineno,
            parts.len()
        )));
    }

    let xyz = parts
        .iter()
        .map(|s| {
            s.parse::<f64>().map_err(|e| {
                PathError::MalformedInput(format!("line {}: {}: {}", lineno, s, e))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DVec3::new(xyz[0], xyz[1], xyz[2]))
}
