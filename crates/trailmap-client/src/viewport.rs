//! Zoom gating and focus-on-activation.

use trailmap_core::models::{BoundingBox, LogDetail, TrajectoryPoint};

/// External map-projection primitive: the zoom level at which a bounding
/// box fits the viewport minus padding.
pub trait FitBounds {
    fn zoom_for_bounds(&self, bounds: &BoundingBox, padding: u32) -> f64;
}

/// A deterministic focus target for the map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Focus {
    pub center: TrajectoryPoint,
    pub zoom: f64,
}

/// Gates trajectory rendering on zoom and computes focus viewports.
#[derive(Debug, Clone, Copy)]
pub struct ViewportGate {
    threshold: f64,
    fit_padding: u32,
}

impl ViewportGate {
    pub fn new(threshold: f64, fit_padding: u32) -> Self {
        Self { threshold, fit_padding }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether trajectories (and their hover interactions) render at this
    /// zoom.
    pub fn trajectories_visible(&self, zoom: f64) -> bool {
        zoom >= self.threshold
    }

    /// Apply a zoom change to the hovered-identifier state: falling below
    /// the threshold clears it.
    pub fn apply_zoom<T>(&self, zoom: f64, hovered: &mut Option<T>) {
        if !self.trajectories_visible(zoom) {
            *hovered = None;
        }
    }

    /// Focus viewport for a newly activated trajectory.
    ///
    /// With a bounding box: the minimal zoom that fits the box, floored at
    /// the gating threshold so the trajectory renders immediately. Without
    /// one: keep the current zoom (likewise floored) and center on the
    /// first point. `None` when the trajectory has no points at all.
    pub fn focus(
        &self,
        fit: &dyn FitBounds,
        detail: &LogDetail,
        current_zoom: f64,
    ) -> Option<Focus> {
        if let Some(bounds) = &detail.bounds {
            let zoom = fit.zoom_for_bounds(bounds, self.fit_padding).max(self.threshold);
            return Some(Focus { center: bounds.center(), zoom });
        }

        let first = detail.trajectory.first()?;
        Some(Focus { center: *first, zoom: current_zoom.max(self.threshold) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use trailmap_core::models::LogId;

    /// Fit primitive returning a fixed zoom, standing in for the map
    /// widget.
    struct FixedFit(f64);

    impl FitBounds for FixedFit {
        fn zoom_for_bounds(&self, _bounds: &BoundingBox, _padding: u32) -> f64 {
            self.0
        }
    }

    fn detail_with_bounds() -> LogDetail {
        let trajectory = vec![
            TrajectoryPoint { lat: 57.0, lon: 12.0 },
            TrajectoryPoint { lat: 57.2, lon: 12.4 },
        ];
        LogDetail {
            id: LogId::from("X"),
            num_points: trajectory.len(),
            bounds: BoundingBox::from_points(&trajectory),
            trajectory,
        }
    }

    #[test]
    fn test_gating_threshold_is_inclusive() {
        let gate = ViewportGate::new(13.0, 48);
        assert!(!gate.trajectories_visible(12.9));
        assert!(gate.trajectories_visible(13.0));
        assert!(gate.trajectories_visible(18.0));
    }

    #[test]
    fn test_zooming_out_clears_hover() {
        let gate = ViewportGate::new(13.0, 48);
        let mut hovered = Some(LogId::from("X"));

        gate.apply_zoom(14.0, &mut hovered);
        assert!(hovered.is_some());

        gate.apply_zoom(12.0, &mut hovered);
        assert!(hovered.is_none());
    }

    #[test]
    fn test_focus_centers_on_the_bounds() {
        let gate = ViewportGate::new(13.0, 48);
        let focus = gate.focus(&FixedFit(15.5), &detail_with_bounds(), 10.0).unwrap();

        assert!((focus.center.lat - 57.1).abs() < 1e-9);
        assert!((focus.center.lon - 12.2).abs() < 1e-9);
        assert_eq!(focus.zoom, 15.5);
    }

    #[test]
    fn test_focus_zoom_is_floored_at_the_threshold() {
        let gate = ViewportGate::new(13.0, 48);
        // A huge box would fit at zoom 8; gating still wins.
        let focus = gate.focus(&FixedFit(8.0), &detail_with_bounds(), 10.0).unwrap();
        assert_eq!(focus.zoom, 13.0);
    }

    #[test]
    fn test_missing_bounds_falls_back_to_the_first_point() {
        let gate = ViewportGate::new(13.0, 48);
        let detail = LogDetail {
            id: LogId::from("X"),
            num_points: 1,
            bounds: None,
            trajectory: vec![TrajectoryPoint { lat: 1.0, lon: 2.0 }],
        };

        let focus = gate.focus(&FixedFit(99.0), &detail, 14.5).unwrap();
        assert_eq!(focus.center, TrajectoryPoint { lat: 1.0, lon: 2.0 });
        // Current zoom is kept, not the fit result.
        assert_eq!(focus.zoom, 14.5);

        let focus = gate.focus(&FixedFit(99.0), &detail, 5.0).unwrap();
        assert_eq!(focus.zoom, 13.0);
    }

    #[test]
    fn test_pointless_trajectory_has_no_focus() {
        let gate = ViewportGate::new(13.0, 48);
        let detail = LogDetail {
            id: LogId::from("X"),
            num_points: 0,
            bounds: None,
            trajectory: vec![],
        };
        assert!(gate.focus(&FixedFit(15.0), &detail, 14.0).is_none());
    }

    proptest! {
        #[test]
        fn focus_zoom_never_drops_below_the_threshold(
            fitted in -5.0f64..25.0,
            threshold in 0.0f64..20.0,
            current in 0.0f64..20.0,
        ) {
            let gate = ViewportGate::new(threshold, 48);
            let focus = gate.focus(&FixedFit(fitted), &detail_with_bounds(), current).unwrap();
            prop_assert!(focus.zoom >= threshold);
        }
    }
}
