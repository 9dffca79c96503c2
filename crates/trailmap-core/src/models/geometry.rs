use serde::{Deserialize, Serialize};

/// A single geographic point of a recorded trajectory.
///
/// Point order is the temporal order of recording and is preserved end to
/// end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Minimal lat/lon rectangle enclosing a trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Derive the enclosing box from an ordered point sequence.
    ///
    /// Returns `None` for an empty trajectory.
    pub fn from_points(points: &[TrajectoryPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = BoundingBox {
            min_lat: first.lat,
            min_lon: first.lon,
            max_lat: first.lat,
            max_lon: first.lon,
        };

        for point in &points[1..] {
            bounds.min_lat = bounds.min_lat.min(point.lat);
            bounds.min_lon = bounds.min_lon.min(point.lon);
            bounds.max_lat = bounds.max_lat.max(point.lat);
            bounds.max_lon = bounds.max_lon.max(point.lon);
        }

        Some(bounds)
    }

    /// Geometric center of the box.
    pub fn center(&self) -> TrajectoryPoint {
        TrajectoryPoint {
            lat: (self.min_lat + self.max_lat) / 2.0,
            lon: (self.min_lon + self.max_lon) / 2.0,
        }
    }

    /// Whether the point lies inside the box (inclusive edges).
    pub fn contains(&self, point: &TrajectoryPoint) -> bool {
        point.lat >= self.min_lat
            && point.lat <= self.max_lat
            && point.lon >= self.min_lon
            && point.lon <= self.max_lon
    }
}
