use serde::{Deserialize, Serialize};

use super::geometry::TrajectoryPoint;

/// Meters spanned by one degree of latitude.
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

/// Earth circumference in meters, used for the longitude scale.
pub const EARTH_CIRCUMFERENCE_M: f64 = 40_075_000.0;

/// Raw odometry samples for one log, as produced by the storage layer.
///
/// Each offset is an `[east, north]` displacement in meters from the
/// recording origin, in recording order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySamples {
    pub origin_lat: f64,
    pub origin_lon: f64,
    pub offsets: Vec<[f64; 2]>,
}

impl TrajectorySamples {
    /// Project the meter offsets into geographic points.
    ///
    /// Flat-earth approximation around the origin: one degree of latitude
    /// spans ~111.32 km, one degree of longitude spans
    /// cos(lat) * 40075 km / 360.
    pub fn to_points(&self) -> Vec<TrajectoryPoint> {
        let lon_scale = EARTH_CIRCUMFERENCE_M * self.origin_lat.to_radians().cos() / 360.0;

        self.offsets
            .iter()
            .map(|[east, north]| TrajectoryPoint {
                lat: self.origin_lat + north / METERS_PER_DEGREE_LAT,
                lon: self.origin_lon + east / lon_scale,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_offset_projects_to_the_origin() {
        let samples = TrajectorySamples {
            origin_lat: 57.78,
            origin_lon: 12.76,
            offsets: vec![[0.0, 0.0]],
        };

        let points = samples.to_points();
        assert_eq!(points.len(), 1);
        assert!((points[0].lat - 57.78).abs() < 1e-12);
        assert!((points[0].lon - 12.76).abs() < 1e-12);
    }

    #[test]
    fn one_degree_of_latitude_north() {
        let samples = TrajectorySamples {
            origin_lat: 0.0,
            origin_lon: 0.0,
            offsets: vec![[0.0, METERS_PER_DEGREE_LAT]],
        };

        let points = samples.to_points();
        assert!((points[0].lat - 1.0).abs() < 1e-9);
        assert!(points[0].lon.abs() < 1e-9);
    }

    #[test]
    fn longitude_scale_shrinks_with_latitude() {
        let at_equator = TrajectorySamples {
            origin_lat: 0.0,
            origin_lon: 0.0,
            offsets: vec![[1000.0, 0.0]],
        };
        let far_north = TrajectorySamples {
            origin_lat: 60.0,
            origin_lon: 0.0,
            offsets: vec![[1000.0, 0.0]],
        };

        let d_equator = at_equator.to_points()[0].lon;
        let d_north = far_north.to_points()[0].lon;
        // The same eastward displacement covers about twice the degrees at 60N.
        assert!(d_north > d_equator * 1.9 && d_north < d_equator * 2.1);
    }

    #[test]
    fn empty_samples_project_to_nothing() {
        let samples = TrajectorySamples { origin_lat: 1.0, origin_lon: 1.0, offsets: vec![] };
        assert!(samples.is_empty());
        assert!(samples.to_points().is_empty());
    }
}
