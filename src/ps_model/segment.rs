use std::fmt::{Display, Formatter};

use super::*;

/// Straight segment from `p1` to `p2`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    p1: Vector,
    p2: Vector,
}

impl LineSegment {
    pub fn new(p1: Vector, p2: Vector) -> Self {
        LineSegment { p1, p2 }
    }

    pub fn p1(&self) -> Vector {
        self.p1
    }

    pub fn p2(&self) -> Vector {
        self.p2
    }

    /// 0 is `p1`, 1 is `p2`
    pub fn param_to_point(&self, param: f64) -> Vector {
        self.p1 + param * (self.p2 - self.p1)
    }

    /// param of the projection of `pt` onto the segment's line
    pub fn point_to_param(&self, pt: &Vector) -> f64 {
        let r = self.p2 - self.p1;
        (*pt - self.p1).dot(&r) / r.square()
    }

    /// `p1` and `p2` coincide, no direction
    pub fn is_degenerate(&self) -> bool {
        nearly_zero((self.p2 - self.p1).square())
    }

    /// false when either segment is degenerate
    pub fn parallel(&self, other: &LineSegment) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        let x = self.p2 - self.p1;
        let y = other.p2 - other.p1;
        nearly_zero(x.cross(&y).abs() / (x.length() * y.length()))
    }

    pub fn colinear(&self, other: &LineSegment) -> bool {
        let p = other.p1;
        self.parallel(other) && p == self.param_to_point(self.point_to_param(&p))
    }

    /// crossing point, or shared piece of two overlapping colinear segments
    ///
    /// degenerate segments never intersect
    pub fn intersect(&self, other: &LineSegment) -> Option<Intersection> {
        if self.is_degenerate() || other.is_degenerate() {
            return None;
        }
        let s = self.p2 - self.p1;
        let t = other.p2 - other.p1;
        let denom = s.y() * t.x() - s.x() * t.y();
        let d = other.p1 - self.p1;
        if nearly_zero(denom) {
            if !nearly_zero(s.cross(&d)) {
                // parallel, never meet
                return None;
            }
            let ss = s.square();
            let mut q1 = d.dot(&s) / ss;
            let mut q2 = (other.p2 - self.p1).dot(&s) / ss;
            if q2 < q1 {
                std::mem::swap(&mut q1, &mut q2);
            }
            let (left, right) = (q1.max(0.0), q2.min(1.0));
            if left < right {
                return Some(Intersection::Segment(LineSegment::new(
                    self.p1 + left * s,
                    self.p1 + right * s,
                )));
            }
            return None;
        }
        let a = (t.x() * d.y() - t.y() * d.x()) / denom;
        let b = (s.x() * d.y() - s.y() * d.x()) / denom;
        if (0.0..=1.0).contains(&a) && (0.0..=1.0).contains(&b) {
            Some(Intersection::Point(self.p1 + a * s))
        } else {
            None
        }
    }
}

impl PsObject for LineSegment {
    fn to_ps(&self, tfm: &PageTransform) -> Option<String> {
        Some(format!(
            "{} moveto {} lineto",
            tfm.format(&self.p1),
            tfm.format(&self.p2)
        ))
    }
}

impl Display for LineSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LineSegment({}, {})", self.p1, self.p2)
    }
}
