use std::error::Error;
use std::f64::consts::TAU;
use std::fmt::{Display, Formatter};

use super::*;
use crate::ps_writer;

/// Circular arc, angles in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Vector,
    radius: f64,
    angle_range: AngleRange,
}

impl Arc {
    pub fn new(
        center: Vector,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self, Box<dyn Error>> {
        if radius.is_nan() || radius < 0.0 {
            return Err(Box::new(ps_err!(
                Radius,
                format!("arc radius can not be negative: {}", radius)
            )));
        }
        Ok(Arc {
            center,
            radius,
            angle_range: AngleRange::new(start_angle, end_angle),
        })
    }

    /// arc from `p1` to `p2`
    ///
    /// radius > 0 goes clockwise from p1 to p2, radius < 0 goes counter-clockwise
    pub fn from_endpoints(p1: Vector, p2: Vector, radius: f64) -> Result<Self, Box<dyn Error>> {
        let x = p2 - p1;
        if nearly_zero(x.square()) {
            return Err(Box::new(ps_err!(
                ArcSpan,
                format!("arc endpoints coincide: {} {}", p1, p2)
            )));
        }
        let half_chord_sq = 0.25 * x.square();
        if radius * radius < half_chord_sq {
            return Err(Box::new(ps_err!(
                ArcSpan,
                "radius is too small for this arc, make it bigger"
            )));
        }
        // distance from chord midpoint to center
        let w = (radius * radius - half_chord_sq).sqrt();
        let mut wn = Vector::new(x.y(), -x.x()).normalize();
        if radius * wn.cross(&x) < 0.0 {
            wn = -wn;
        }
        let center = p1 + 0.5 * x + w * wn;

        let angle_of = |p: Vector| {
            let r = p - center;
            r.y().atan2(r.x())
        };
        let (mut a, mut b) = (angle_of(p1), angle_of(p2));
        if radius < 0.0 {
            while b < a {
                b += TAU;
            }
        } else {
            while a < b {
                a += TAU;
            }
        }
        Arc::new(center, radius.abs(), a, b)
    }

    pub fn center(&self) -> Vector {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn angle_range(&self) -> AngleRange {
        self.angle_range
    }

    /// `pt` lies in the arc's sweep, distance to center is not checked
    pub fn included_angle(&self, pt: &Vector) -> bool {
        let r = *pt - self.center;
        self.angle_range.contains(r.y().atan2(r.x()))
    }

    pub fn intersect_arc(&self, other: &Arc) -> Option<Intersection> {
        if self.center == other.center {
            if !nearly_equal(self.radius, other.radius) {
                return None;
            }
            return self
                .angle_range
                .intersection(&other.angle_range)
                .map(|angle_range| {
                    Intersection::Arc(Arc {
                        center: self.center,
                        radius: self.radius,
                        angle_range,
                    })
                });
        }

        // scale, rotate and translate so the centers sit at (0, 0) and (1, 0)
        let delta = other.center - self.center;
        let dist = delta.length();
        let theta = delta.y().atan2(delta.x());
        let r1 = self.radius / dist;
        let r2 = other.radius / dist;
        let u = (r1 * r1 + 1.0 - r2 * r2) / 2.0;
        if r1.abs() < u.abs() {
            return None;
        }
        let v = (r1 * r1 - u * u).sqrt();
        let (sin, cos) = theta.sin_cos();

        let mut candidates =
            vec![self.center + dist * Vector::new(u * cos - v * sin, v * cos + u * sin)];
        if !nearly_zero(v) {
            candidates.push(self.center + dist * Vector::new(u * cos + v * sin, -v * cos + u * sin));
        }
        let pts = candidates
            .into_iter()
            .filter(|p| self.included_angle(p) && other.included_angle(p))
            .collect();
        collect_points(pts)
    }

    pub fn intersect_segment(&self, segment: &LineSegment) -> Option<Intersection> {
        let d = segment.p2() - segment.p1();
        let f = segment.p1() - self.center;
        let a = d.square();
        if nearly_zero(a) {
            return None;
        }
        let b = 2.0 * d.dot(&f);
        let c = f.square() - self.radius * self.radius;
        let det = b * b - 4.0 * a * c;
        let params = if det < 0.0 {
            return None;
        } else if nearly_zero(det) {
            vec![-b / (2.0 * a)]
        } else {
            let root = det.sqrt();
            vec![(-b + root) / (2.0 * a), (-b - root) / (2.0 * a)]
        };
        let pts = params
            .into_iter()
            .filter(|t| (0.0..=1.0).contains(t))
            .map(|t| segment.param_to_point(t))
            .filter(|p| self.included_angle(p))
            .collect();
        collect_points(pts)
    }
}

fn collect_points(mut pts: Vec<Vector>) -> Option<Intersection> {
    match pts.len() {
        0 => None,
        1 => pts.pop().map(Intersection::Point),
        _ => Some(Intersection::Points(pts)),
    }
}

impl PsObject for Arc {
    /// PostScript `arc` always sweeps counter-clockwise from the lower angle
    fn to_ps(&self, tfm: &PageTransform) -> Option<String> {
        let (a, b) = if self.angle_range.counter_clockwise() {
            (self.angle_range.start(), self.angle_range.finish())
        } else {
            (self.angle_range.finish(), self.angle_range.start())
        };
        Some(format!(
            "{} {} {} {} arc",
            tfm.format(&self.center),
            ps_writer::format_number(tfm.scale(self.radius)),
            ps_writer::format_number(a.to_degrees()),
            ps_writer::format_number(b.to_degrees())
        ))
    }
}

impl Display for Arc {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Arc({},{},{},{})",
            self.center,
            self.radius,
            self.angle_range.start().to_degrees(),
            self.angle_range.finish().to_degrees()
        )
    }
}
