use std::f64::consts::{PI, TAU};
use std::fmt::{Display, Formatter};

/// shift `angle` by whole turns until it is inside `[low, high]`
pub fn normalize_angle(angle: f64, low: f64, high: f64) -> f64 {
    if !angle.is_finite() {
        return angle;
    }
    let mut angle = angle;
    if angle < low {
        // smallest turn of `angle` not below `low`
        angle = low + (angle - low).rem_euclid(TAU);
    }
    if angle > high {
        // largest turn of `angle` not above `high`
        angle = high - (high - angle).rem_euclid(TAU);
    }
    angle
}

/// Sweep between two angles, in radians
///
/// start < finish sweeps counter-clockwise, start > finish clockwise.
/// span never exceeds a full turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    start: f64,
    finish: f64,
}

impl AngleRange {
    pub fn new(start: f64, finish: f64) -> Self {
        AngleRange {
            start,
            finish: normalize_angle(finish, start - TAU, start + TAU),
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn finish(&self) -> f64 {
        self.finish
    }

    pub fn counter_clockwise(&self) -> bool {
        self.start < self.finish
    }

    fn low_high(&self) -> (f64, f64) {
        (self.start.min(self.finish), self.start.max(self.finish))
    }

    /// half open: includes start, excludes finish
    pub fn contains(&self, angle: f64) -> bool {
        let (low, high) = self.low_high();
        let angle = normalize_angle(angle, low, high);
        (self.start <= angle && angle < self.finish) || (self.finish <= angle && angle < self.start)
    }

    /// overlap of two ranges, result is counter-clockwise
    pub fn intersection(&self, other: &AngleRange) -> Option<AngleRange> {
        let (a, b) = self.low_high();
        let (c, d) = other.low_high();
        let a1 = normalize_angle(a, 0.0, TAU);
        let (a, b) = (a1, b + a1 - a);
        let c1 = normalize_angle(c, 0.0, TAU);
        let (c, d) = (c1, d + c1 - c);
        let (e, f) = (a.max(c), b.min(d));
        if f >= e {
            Some(AngleRange::new(e, f))
        } else {
            None
        }
    }
}

impl Display for AngleRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let k = 180.0 / PI;
        write!(f, "<AngleRange {} {}>", k * self.start, k * self.finish)
    }
}
