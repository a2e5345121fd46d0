//! Two-point measurement state machine.

use glam::Vec3;
use meshprobe_core::format_distance;

/// A completed point-to-point measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// First picked point.
    pub start: Vec3,
    /// Second picked point.
    pub end: Vec3,
    /// Euclidean distance between the points.
    pub distance: f32,
}

impl Measurement {
    /// Measure between two points.
    pub fn between(start: Vec3, end: Vec3) -> Self {
        Self {
            start,
            end,
            distance: start.distance(end),
        }
    }

    /// Anchor of the distance label.
    pub fn midpoint(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    /// Distance text, e.g. `"12.50 cm"`.
    pub fn label(&self) -> String {
        format_distance(f64::from(self.distance))
    }
}

/// What a recorded point did to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// First point of a fresh measurement.
    Started,
    /// Second point; the measurement is complete.
    Completed(Measurement),
    /// A completed measurement was discarded and the point starts a new one.
    Restarted,
}

/// Points picked so far.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MeasurementSession {
    /// No point picked.
    #[default]
    Idle,
    /// Waiting for the second point.
    OnePoint(Vec3),
    /// Both points picked.
    TwoPoints(Measurement),
}

impl MeasurementSession {
    /// Record a picked point.
    pub fn record(&mut self, point: Vec3) -> Transition {
        let (next, transition) = match *self {
            MeasurementSession::Idle => (MeasurementSession::OnePoint(point), Transition::Started),
            MeasurementSession::OnePoint(start) => {
                let measurement = Measurement::between(start, point);
                (
                    MeasurementSession::TwoPoints(measurement),
                    Transition::Completed(measurement),
                )
            }
            MeasurementSession::TwoPoints(_) => {
                (MeasurementSession::OnePoint(point), Transition::Restarted)
            }
        };
        *self = next;
        transition
    }

    /// Forget every point.
    pub fn reset(&mut self) {
        *self = MeasurementSession::Idle;
    }

    /// Number of points currently held (0, 1 or 2).
    pub fn point_count(&self) -> usize {
        match self {
            MeasurementSession::Idle => 0,
            MeasurementSession::OnePoint(_) => 1,
            MeasurementSession::TwoPoints(_) => 2,
        }
    }

    /// Points currently held, in pick order.
    pub fn points(&self) -> Vec<Vec3> {
        match self {
            MeasurementSession::Idle => Vec::new(),
            MeasurementSession::OnePoint(point) => vec![*point],
            MeasurementSession::TwoPoints(m) => vec![m.start, m.end],
        }
    }

    /// The completed measurement, if both points are held.
    pub fn measurement(&self) -> Option<&Measurement> {
        match self {
            MeasurementSession::TwoPoints(measurement) => Some(measurement),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_points_complete_a_measurement() {
        let mut session = MeasurementSession::default();
        assert_eq!(session.record(Vec3::ZERO), Transition::Started);

        let Transition::Completed(m) = session.record(Vec3::new(0.0, 0.0, 0.125)) else {
            panic!("second point should complete the measurement");
        };
        assert_eq!(m.distance, 0.125);
        assert_eq!(m.label(), "12.50 cm");
        assert_eq!(m.midpoint(), Vec3::new(0.0, 0.0, 0.0625));
        assert_eq!(session.point_count(), 2);
        assert_eq!(session.measurement(), Some(&m));
    }

    #[test]
    fn third_point_restarts_with_one_point() {
        let mut session = MeasurementSession::default();
        session.record(Vec3::ZERO);
        session.record(Vec3::X);

        assert_eq!(session.record(Vec3::Y), Transition::Restarted);
        assert_eq!(session.points(), vec![Vec3::Y]);
        assert!(session.measurement().is_none());

        assert!(matches!(session.record(Vec3::Z), Transition::Completed(_)));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut session = MeasurementSession::default();
        session.record(Vec3::ZERO);
        session.reset();
        assert_eq!(session, MeasurementSession::Idle);
        assert_eq!(session.point_count(), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let b = Vec3::new(-3.0, 4.0, 2.0);
        assert_eq!(
            Measurement::between(a, b).distance,
            Measurement::between(b, a).distance
        );
    }
}
