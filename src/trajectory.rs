//! Decimated trajectory polyline for display.
//!
//! Points closer than `resolution` to the last recorded point are dropped,
//! which keeps the vertex count bounded by path length instead of step count.

use bevy::math::DVec2;

use crate::vector;

/// Append-only list of visited points for the current run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrajectoryRecorder {
    points: Vec<DVec2>,
    last_recorded: DVec2,
}

impl TrajectoryRecorder {
    /// Create a recorder whose first point is `initial`.
    pub fn new(initial: DVec2) -> Self {
        let mut recorder = Self::default();
        recorder.reset(initial);
        recorder
    }

    /// Drop all points and start again from `initial`.
    pub fn reset(&mut self, initial: DVec2) {
        self.points.clear();
        self.points.push(initial);
        self.last_recorded = initial;
    }

    /// Record `point` if it is at least `resolution` away from the last
    /// recorded point. Returns whether it was recorded.
    pub fn offer(&mut self, point: DVec2, resolution: f64) -> bool {
        if vector::distance(point, self.last_recorded) < resolution {
            return false;
        }
        self.points.push(point);
        self.last_recorded = point;
        true
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn last_recorded(&self) -> DVec2 {
        self.last_recorded
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Separate x and y coordinate lists, the shape most plotting layers want.
    pub fn xy(&self) -> (Vec<f64>, Vec<f64>) {
        self.points.iter().map(|p| (p.x, p.y)).unzip()
    }
}
